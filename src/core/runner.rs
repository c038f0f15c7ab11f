//! Application runner logic
//!
//! Dispatches each subcommand once arguments and settings are known.

use anyhow::{bail, Context, Result};
use tracing::{debug, info, warn};

use crate::batch::{with_jobs, BatchConverter, BatchSummary};
use crate::character::CharacterPipeline;
use crate::core::cli::{CliArgs, Command, ConvertArgs, PathArgs, StatsArgs, ValidateArgs};
use crate::core::config_file::ConfigFile;
use crate::core::settings::ConvertSettings;
use crate::io::{DatasetWriter, StrokeDataset};
use crate::logging;
use crate::path::{PathInterpreter, SampleGrid, DEFAULT_CURVE_STEPS};
use crate::qa::{validate, DatasetStatistics};

/// Create and run the application with the given CLI arguments.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    // Handle init-config before anything touches the config directory
    if let Command::InitConfig = cli_args.command {
        return ConfigFile::initialize_config_directory()
            .context("Failed to initialize config directory");
    }

    let config = ConfigFile::load();
    let log_to_file = cli_args.log_file || config.as_ref().is_some_and(|c| c.log_to_file);
    let _guard = logging::init(cli_args.verbose, cli_args.quiet, log_to_file)?;

    match &cli_args.command {
        Command::Convert(args) => run_convert(args, config),
        Command::Path(args) => run_path(args),
        Command::Validate(args) => run_validate(args),
        Command::Stats(args) => run_stats(args),
        Command::InitConfig => Ok(()),
    }
}

fn pipeline(curve_steps: usize) -> CharacterPipeline {
    CharacterPipeline::new(PathInterpreter::new(SampleGrid::new(curve_steps)))
}

fn run_convert(args: &ConvertArgs, config: Option<ConfigFile>) -> Result<()> {
    let settings = ConvertSettings::resolve(args, config);
    info!(
        "Converting {} set(s) from {} in {:?}",
        args.sets.len(),
        settings.source,
        settings.cache_dir
    );

    let source = settings
        .source
        .open(&settings.cache_dir, settings.fallback);
    let converter = BatchConverter::new(pipeline(settings.curve_steps), source.as_ref());

    let results = with_jobs(settings.jobs, || {
        args.sets
            .iter()
            .map(|set| converter.convert_set(set))
            .collect::<Vec<_>>()
    })?;

    let writer = DatasetWriter::new(&settings.output_dir, settings.precision);
    for (set, result) in args.sets.iter().zip(&results) {
        if result.dataset.is_empty() {
            warn!("No characters converted for {set}, not writing {}", set.file_name());
            continue;
        }
        writer.write(&set.file_name(), &result.dataset)?;
    }
    if settings.combined && results.len() > 1 {
        writer.write_combined(results.iter().map(|r| &r.dataset))?;
    }

    let summary = BatchSummary::from_results(&results);
    println!("{summary}");

    if summary.converted() == 0 {
        bail!(
            "No characters were converted. Check that {:?} contains {} files.",
            settings.cache_dir,
            settings.source
        );
    }
    Ok(())
}

fn run_path(args: &PathArgs) -> Result<()> {
    let steps = args.curve_steps.unwrap_or(DEFAULT_CURVE_STEPS);
    let conversion = pipeline(steps).convert(args.symbol as u32, args.symbol, &args.paths);
    for diagnostic in &conversion.diagnostics {
        warn!("{diagnostic}");
    }
    let record = conversion.result?;
    debug!(
        "{} strokes, {} points",
        record.stroke_count(),
        record.point_count()
    );
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn run_validate(args: &ValidateArgs) -> Result<()> {
    let dataset = StrokeDataset::load(&args.file)?;
    let mut report = validate(&dataset);
    if let Some(set) = &args.expected {
        report.check_expected(&dataset, &set.entries());
    }
    println!("{report}");
    if !report.is_valid() {
        bail!(
            "{} has {} error(s)",
            args.file.display(),
            report.error_count()
        );
    }
    Ok(())
}

fn run_stats(args: &StatsArgs) -> Result<()> {
    let dataset = StrokeDataset::load(&args.file)?;
    println!("{}", DatasetStatistics::collect(dataset.records()));
    Ok(())
}
