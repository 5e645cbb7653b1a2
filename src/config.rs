use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use thiserror::Error;

/// File read when no input is given anywhere.
pub const DEFAULT_INPUT: &str = "TranslationFromIconIterativeThreshold.json";

// ---------------------------------------------------------------------------
// View mode
// ---------------------------------------------------------------------------

/// Which presentation a run shows. Chosen once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Labelled points coloured by row index.
    #[default]
    Scatter,
    /// Polyline through the rows in order, coloured by z.
    Line,
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::Scatter => write!(f, "scatter"),
            ViewMode::Line => write!(f, "line"),
        }
    }
}

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(name = "xyz-viewer")]
#[command(about = "Show the xyz points of a JSON records file as a 3D scatter or line plot")]
#[command(version)]
pub struct Cli {
    /// JSON file of `{key: {"data": [x, y, z, ...]}}` records.
    pub input: Option<PathBuf>,

    /// Presentation to open.
    #[arg(long, value_enum)]
    pub mode: Option<ViewMode>,

    /// Show the row-index labels in scatter mode, even if the config file hides them.
    #[arg(long, overrides_with = "no_labels")]
    pub labels: bool,

    /// Hide the row-index labels in scatter mode.
    #[arg(long, overrides_with = "labels")]
    pub no_labels: bool,

    /// JSON config file with `input`, `mode` and `labels` keys.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Label visibility asked for on the command line; the last flag wins.
    fn label_choice(&self) -> Option<bool> {
        match (self.labels, self.no_labels) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Config file
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    input: Option<PathBuf>,
    mode: Option<ViewMode>,
    labels: Option<bool>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// Settings for one run: command line over config file over defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub mode: ViewMode,
    pub show_labels: bool,
}

impl Config {
    pub fn resolve(cli: Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => {
                log::debug!("Reading config from {}", path.display());
                read_config_file(path)?
            }
            None => ConfigFile::default(),
        };
        Ok(Self::merge(cli, file))
    }

    fn merge(cli: Cli, file: ConfigFile) -> Self {
        let label_choice = cli.label_choice();
        Config {
            input: cli
                .input
                .or(file.input)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            mode: cli.mode.or(file.mode).unwrap_or_default(),
            show_labels: label_choice.or(file.labels).unwrap_or(true),
        }
    }
}
