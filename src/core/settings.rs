//! Effective settings for a conversion run
//!
//! Priority order for every value:
//! 1. CLI argument
//! 2. Config file setting (~/.config/strokedata/settings.json)
//! 3. Built-in default

use std::path::PathBuf;
use tracing::debug;

use super::cli::ConvertArgs;
use super::config_file::{config_dir, ConfigFile};
use crate::data::SourceKind;
use crate::path::DEFAULT_CURVE_STEPS;

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertSettings {
    pub source: SourceKind,
    pub cache_dir: PathBuf,
    pub output_dir: PathBuf,
    pub curve_steps: usize,
    pub precision: Option<u32>,
    pub jobs: Option<usize>,
    pub fallback: bool,
    pub combined: bool,
}

fn pick<T: std::fmt::Debug>(name: &str, cli: Option<T>, config: Option<T>, default: impl FnOnce() -> T) -> T {
    if let Some(value) = cli {
        debug!("Using {name} from CLI: {:?}", value);
        return value;
    }
    if let Some(value) = config {
        debug!("Using {name} from config file: {:?}", value);
        return value;
    }
    let value = default();
    debug!("Using default {name}: {:?}", value);
    value
}

impl ConvertSettings {
    pub fn resolve(args: &ConvertArgs, config: Option<ConfigFile>) -> Self {
        let config = config.unwrap_or_default();
        Self {
            source: pick("source", args.source, config.default_source, SourceKind::default),
            cache_dir: pick("cache dir", args.cache_dir.clone(), config.cache_dir, || {
                config_dir().join("cache")
            }),
            output_dir: pick("output dir", args.output_dir.clone(), config.output_dir, || {
                PathBuf::from("strokedata")
            }),
            curve_steps: pick("curve steps", args.curve_steps, config.curve_steps, || {
                DEFAULT_CURVE_STEPS
            }),
            // No rounding unless asked for
            precision: args.precision.or(config.precision),
            jobs: args.jobs.or(config.jobs),
            fallback: !args.no_fallback,
            combined: !args.no_combined,
        }
    }
}
