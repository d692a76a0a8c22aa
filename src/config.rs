//! Configuration management for the G-code runner.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file
//!
//! Command-line flags win over the config file, which wins over defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::machine::OutputFormat;

/// Largest accepted number of decimal places in text output
pub const MAX_PRECISION: usize = 12;

const DEFAULT_PRECISION: usize = 3;
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Command-line arguments for the G-code runner
#[derive(Debug, Parser)]
#[command(name = "gcode-run")]
#[command(about = "Parse a G-code program and execute it against a machine client")]
#[command(version)]
pub struct Args {
    /// Program file to load
    pub file: PathBuf,

    /// Output format for issued commands
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Decimal places for coordinates and feed rates
    #[arg(long)]
    pub precision: Option<usize>,

    /// Only parse the program and print it back in canonical form
    #[arg(long)]
    pub parse_only: bool,

    /// Log level for the runner
    #[arg(long, help = "Log filter (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Settings read from a TOML config file
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
    pub precision: Option<usize>,
    pub log_level: Option<String>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `<config dir>/gcode-run/config.toml`, if there is a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gcode-run").join("config.toml"))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Program file to load
    pub file: PathBuf,
    pub format: OutputFormat,
    pub precision: usize,
    pub parse_only: bool,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let file_config = match &args.config {
            Some(path) => ConfigFile::load(path)?,
            None => match ConfigFile::default_path() {
                Some(path) if path.is_file() => {
                    log::debug!("using config file {}", path.display());
                    ConfigFile::load(&path)?
                }
                _ => ConfigFile::default(),
            },
        };

        Ok(Self::merge(args, file_config)?)
    }

    /// Layer arguments over file settings over defaults
    pub fn merge(args: Args, file: ConfigFile) -> Result<Self, ConfigError> {
        let precision = args
            .precision
            .or(file.precision)
            .unwrap_or(DEFAULT_PRECISION);
        if precision > MAX_PRECISION {
            return Err(ConfigError::Precision {
                value: precision,
                max: MAX_PRECISION,
            });
        }

        Ok(Config {
            file: args.file,
            format: args.format.or(file.format).unwrap_or_default(),
            precision,
            parse_only: args.parse_only,
            log_level: args
                .log_level
                .or(file.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}
