//! Configuration management for symbology.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::breaks::ClassificationMethod;
use crate::classify::ClassifyOptions;
use crate::colormaps::RampCatalog;
use crate::error::{Result, SymbologyError};
use crate::expression::{InterpolationMode, NoData};
use crate::scale::ScaleContext;

/// Command-line arguments for symbology
#[derive(Parser, Debug, Default)]
#[command(name = "symbology")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Sample file: a JSON array or whitespace-separated numbers, `-` for stdin
    pub sample: PathBuf,

    /// Classification method (quantile, equal_interval, natural_breaks, pretty, logarithmic)
    #[arg(short, long, env = "SYMBOLOGY_METHOD")]
    pub method: Option<ClassificationMethod>,

    /// Number of classes
    #[arg(short = 'n', long, env = "SYMBOLOGY_CLASSES")]
    pub classes: Option<usize>,

    /// Color ramp name
    #[arg(short, long, env = "SYMBOLOGY_RAMP")]
    pub ramp: Option<String>,

    /// Reverse the color ramp
    #[arg(long)]
    pub reverse: bool,

    /// One class per distinct value instead of graduated breaks
    #[arg(long)]
    pub categorized: bool,

    /// Interpolation mode (linear, discrete, exact)
    #[arg(short, long, env = "SYMBOLOGY_INTERPOLATION")]
    pub interpolation: Option<InterpolationMode>,

    /// Raster band to style (1-based)
    #[arg(short, long, env = "SYMBOLOGY_BAND", conflicts_with = "field")]
    pub band: Option<u32>,

    /// Vector property to style
    #[arg(short, long, env = "SYMBOLOGY_FIELD")]
    pub field: Option<String>,

    /// Pixel or property value drawn transparent
    #[arg(long, env = "SYMBOLOGY_NO_DATA", allow_hyphen_values = true)]
    pub no_data: Option<f64>,

    /// Lower bound of the data range thresholds are normalized against
    #[arg(long, requires = "max", allow_hyphen_values = true)]
    pub min: Option<f64>,

    /// Upper bound of the data range thresholds are normalized against
    #[arg(long, requires = "min", allow_hyphen_values = true)]
    pub max: Option<f64>,

    /// Round thresholds to this many decimals
    #[arg(short, long, env = "SYMBOLOGY_PRECISION")]
    pub precision: Option<u32>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "SYMBOLOGY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SYMBOLOGY_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// How breaks and colors are chosen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationConfig {
    /// Classification method
    #[serde(default = "default_method")]
    pub method: ClassificationMethod,

    /// Number of classes
    #[serde(default = "default_classes")]
    pub classes: usize,

    /// Color ramp name
    #[serde(default = "default_ramp")]
    pub ramp: String,

    /// Reverse the color ramp
    #[serde(default)]
    pub reverse: bool,

    /// One class per distinct value
    #[serde(default)]
    pub categorized: bool,

    /// Decimals thresholds are rounded to (None = no rounding)
    #[serde(default = "default_precision")]
    pub precision: Option<u32>,
}

/// How the expression reads and renders values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Interpolation mode
    #[serde(default)]
    pub interpolation: InterpolationMode,

    /// Value drawn transparent; bands default to `0`
    #[serde(default)]
    pub no_data_value: Option<f64>,

    /// Raster band, 1-based
    #[serde(default)]
    pub band: Option<u32>,

    /// Vector property
    #[serde(default)]
    pub field: Option<String>,

    /// Data range thresholds are normalized against
    #[serde(default)]
    pub scale: Option<ScaleContext>,
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Classification configuration
    #[serde(default)]
    pub classification: ClassificationConfig,

    /// Style configuration
    #[serde(default)]
    pub style: StyleConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, PathBuf)> {
        let args = Args::parse();
        let config = Self::from_args(&args)?;
        Ok((config, args.sample))
    }

    /// Build the configuration from parsed arguments and the file they name
    pub fn from_args(args: &Args) -> Result<Self> {
        // Start with defaults, or the JSON file if provided
        let mut config = match &args.config {
            Some(path) => Self::load_from_file(path)?,
            None => Config::default(),
        };
        config.apply_args(args)?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Override with command-line arguments and environment variables
    fn apply_args(&mut self, args: &Args) -> Result<()> {
        let classification = &mut self.classification;
        if let Some(method) = args.method {
            classification.method = method;
        }
        if let Some(classes) = args.classes {
            classification.classes = classes;
        }
        if let Some(ramp) = &args.ramp {
            classification.ramp = ramp.clone();
        }
        classification.reverse |= args.reverse;
        classification.categorized |= args.categorized;
        if args.precision.is_some() {
            classification.precision = args.precision;
        }

        let style = &mut self.style;
        if let Some(interpolation) = args.interpolation {
            style.interpolation = interpolation;
        }
        if args.no_data.is_some() {
            style.no_data_value = args.no_data;
        }
        // A band and a field are mutually exclusive, the newest source wins
        if let Some(band) = args.band {
            style.band = Some(band);
            style.field = None;
        }
        if let Some(field) = &args.field {
            style.field = Some(field.clone());
            style.band = None;
        }
        if let (Some(min), Some(max)) = (args.min, args.max) {
            style.scale = Some(ScaleContext::new(min, max)?);
        }

        if let Some(log_level) = &args.log_level {
            self.log_level = log_level.clone();
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.classification.classes == 0 {
            return Err(SymbologyError::Config {
                message: "Class count must be at least 1".to_string(),
            });
        }

        if !RampCatalog::builtin().contains(&self.classification.ramp) {
            return Err(SymbologyError::Config {
                message: format!("Unknown color ramp: {}", self.classification.ramp),
            });
        }

        if self.style.band == Some(0) {
            return Err(SymbologyError::Config {
                message: "Band numbers start at 1".to_string(),
            });
        }

        if self.style.band.is_some() && self.style.field.is_some() {
            return Err(SymbologyError::Config {
                message: "Set either a band or a field, not both".to_string(),
            });
        }

        if let Some(value) = self.style.no_data_value {
            if !value.is_finite() {
                return Err(SymbologyError::Config {
                    message: format!("Invalid no-data value: {}", value),
                });
            }
        }

        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(SymbologyError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }

    /// Pipeline options described by this configuration
    pub fn classify_options(&self) -> ClassifyOptions {
        let options = match (&self.style.band, &self.style.field) {
            (Some(band), _) => {
                let no_data = NoData::transparent(self.style.no_data_value.unwrap_or(0.0));
                ClassifyOptions::band(*band).no_data(Some(no_data))
            }
            (None, field) => {
                let name = field.clone().unwrap_or_else(default_field);
                ClassifyOptions::property(name)
                    .no_data(self.style.no_data_value.map(NoData::transparent))
            }
        };

        options
            .method(self.classification.method)
            .classes(self.classification.classes)
            .ramp(self.classification.ramp.clone())
            .reverse(self.classification.reverse)
            .precision(self.classification.precision)
            .mode(self.style.interpolation)
            .scale(self.style.scale)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classification: ClassificationConfig::default(),
            style: StyleConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            method: default_method(),
            classes: default_classes(),
            ramp: default_ramp(),
            reverse: false,
            categorized: false,
            precision: default_precision(),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            interpolation: InterpolationMode::default(),
            no_data_value: None,
            band: None,
            field: None,
            scale: None,
        }
    }
}

// Default value functions for serde
fn default_method() -> ClassificationMethod {
    ClassificationMethod::Quantile
}

fn default_classes() -> usize {
    5
}

fn default_ramp() -> String {
    "viridis".to_string()
}

fn default_precision() -> Option<u32> {
    Some(2)
}

fn default_field() -> String {
    "value".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
