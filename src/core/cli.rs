//! Command line interface for the stroke data converter
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs. Many CLI options are documented with
//! examples to help users understand the expected format.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::data::{CharacterSet, SourceKind};

/// Upper bound for `--steps`; finer grids only bloat the output.
pub const MAX_CURVE_STEPS: usize = 64;

/// Upper bound for `--precision`
pub const MAX_PRECISION: u32 = 12;

/// strokedata CLI arguments
///
/// Examples:
///   strokedata convert hiragana katakana          # Kana from ~/.config/strokedata/cache
///   strokedata convert hanzi --source embedded    # Offline placeholder hanzi
///   strokedata convert custom:水火木 -o out/      # Any characters
///   strokedata path "M10,10 C20,0 40,0 50,10"     # Inspect one path
///   strokedata validate out/hiragana_strokes.json --set hiragana
///   strokedata stats out/strokedata.json
///   strokedata init-config                        # Create ~/.config/strokedata
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "strokedata",
    version,
    about = "Convert CJK stroke paths into normalized, timed stroke data",
    long_about = "strokedata reads stroke-order path descriptions (KanjiVG SVG files, Hanzi Writer JSON files or the built-in placeholder table), flattens them into point sequences, fits each character into the unit square and writes JSON records that handwriting trainers can animate."
)]
pub struct CliArgs {
    /// More logging (-v debug, -vv trace)
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[clap(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Also write logs to ~/.config/strokedata/logs/
    #[clap(
        long = "log-file",
        global = true,
        help = "Also write logs to a dated file",
        long_help = "Also write logs to ~/.config/strokedata/logs/strokedata-YYYY-MM-DD.log. Can be enabled permanently with \"log_to_file\": true in settings.json."
    )]
    pub log_file: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert character sets into stroke data files
    Convert(ConvertArgs),
    /// Run path strings through the pipeline and print the record
    Path(PathArgs),
    /// Check a stroke data file for problems
    Validate(ValidateArgs),
    /// Print statistics for a stroke data file
    Stats(StatsArgs),
    /// Initialize user configuration directory with settings
    InitConfig,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConvertArgs {
    /// Sets to convert: hiragana, katakana, numerals, hanzi or custom:<chars>
    #[clap(
        required = true,
        help = "Character sets to convert",
        long_help = "Character sets to convert. Built-in sets are hiragana (U+3041-U+3096), katakana (U+30A1-U+30F6), numerals (零 to 十 plus 百千万億) and hanzi (100 basic characters). Any other characters can be given as custom:<characters>."
    )]
    pub sets: Vec<CharacterSet>,

    #[clap(long = "source", short = 's', value_enum, help = "Where path strings come from")]
    pub source: Option<SourceKind>,

    #[clap(
        long = "cache-dir",
        short = 'c',
        help = "Directory of downloaded source files",
        long_help = "Directory holding downloaded KanjiVG files (named like 03042.svg) or Hanzi Writer files (named like 一.json). Defaults to ~/.config/strokedata/cache."
    )]
    pub cache_dir: Option<PathBuf>,

    #[clap(long = "output", short = 'o', help = "Directory to write JSON files into")]
    pub output_dir: Option<PathBuf>,

    #[clap(long = "steps", help = "Samples per curve segment")]
    pub curve_steps: Option<usize>,

    #[clap(long = "precision", short = 'p', help = "Round written values to this many decimals")]
    pub precision: Option<u32>,

    #[clap(long = "jobs", short = 'j', help = "Worker threads (default: one per core)")]
    pub jobs: Option<usize>,

    #[clap(
        long = "no-fallback",
        help = "Skip characters missing from the cache",
        long_help = "Skip characters missing from the cache instead of using the built-in placeholder strokes for the basic hanzi."
    )]
    pub no_fallback: bool,

    #[clap(long = "no-combined", help = "Do not write the combined strokedata.json")]
    pub no_combined: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Path strings, one per stroke, in stroke order
    #[clap(required = true)]
    pub paths: Vec<String>,

    #[clap(long = "char", default_value_t = '?', help = "Character to label the record with")]
    pub symbol: char,

    #[clap(long = "steps", help = "Samples per curve segment")]
    pub curve_steps: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    pub file: PathBuf,

    #[clap(
        long = "set",
        help = "Also report characters of this set that are missing"
    )]
    pub expected: Option<CharacterSet>,
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    pub file: PathBuf,
}

fn check_steps(steps: Option<usize>) -> Result<(), String> {
    match steps {
        Some(0) => Err("--steps must be at least 1".to_string()),
        Some(n) if n > MAX_CURVE_STEPS => Err(format!(
            "--steps {n} is too large\nUse at most {MAX_CURVE_STEPS} samples per curve."
        )),
        _ => Ok(()),
    }
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures that input files exist and numeric options are in range
    /// before any work starts, providing clear error messages for common
    /// mistakes.
    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Command::Convert(args) => {
                check_steps(args.curve_steps)?;
                if let Some(precision) = args.precision {
                    if precision > MAX_PRECISION {
                        return Err(format!(
                            "--precision {precision} is too large\nUse at most {MAX_PRECISION} decimals."
                        ));
                    }
                }
                if args.jobs == Some(0) {
                    return Err("--jobs must be at least 1".to_string());
                }
                if let Some(dir) = &args.cache_dir {
                    if !dir.is_dir() {
                        return Err(format!(
                            "Cache directory does not exist: {}\nDownload KanjiVG or Hanzi Writer files into it first.",
                            dir.display()
                        ));
                    }
                }
                Ok(())
            }
            Command::Path(args) => check_steps(args.curve_steps),
            Command::Validate(ValidateArgs { file, .. }) | Command::Stats(StatsArgs { file }) => {
                if !file.is_file() {
                    return Err(format!(
                        "File does not exist: {}\nMake sure the path is correct and the file exists.",
                        file.display()
                    ));
                }
                Ok(())
            }
            Command::InitConfig => Ok(()),
        }
    }
}
