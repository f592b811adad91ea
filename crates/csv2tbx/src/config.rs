//! Configuration for the CSV to TBX converter.
//!
//! This module provides the configuration surface for the converter,
//! supporting command line arguments, environment variable overrides, and
//! programmatic construction.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CSV2TBX_INPUT` | src/main/resources/glossary.csv | Input CSV path |
//! | `CSV2TBX_OUTPUT` | target/glossary.tbx | Output TBX path |
//! | `CSV2TBX_SOURCE_LANG` | en | Source language tag |
//! | `CSV2TBX_TARGET_LANG` | ja | Target language tag |
//! | `CSV2TBX_LOG_LEVEL` | info | Log level |
//!
//! # Example
//!
//! ```rust
//! use glossia_csv2tbx::ConvertConfig;
//!
//! let config = ConvertConfig {
//!     source_lang: "de".to_string(),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Configuration for one conversion run.
///
/// This struct can be constructed from command line arguments using
/// [`ConvertConfig::parse`], from environment variables, or
/// programmatically. Running with no arguments reproduces the default
/// fixed-constant behavior.
#[derive(Debug, Clone, Parser)]
#[command(name = "csv2tbx")]
#[command(about = "Converts a two-column CSV glossary into a TBX-Basic document")]
pub struct ConvertConfig {
    /// Path of the input CSV glossary.
    #[arg(
        long,
        env = "CSV2TBX_INPUT",
        default_value = "src/main/resources/glossary.csv"
    )]
    pub input: PathBuf,

    /// Path of the generated TBX document.
    #[arg(long, env = "CSV2TBX_OUTPUT", default_value = "target/glossary.tbx")]
    pub output: PathBuf,

    /// xml:lang value for the first column and the martif root.
    #[arg(long, env = "CSV2TBX_SOURCE_LANG", default_value = "en")]
    pub source_lang: String,

    /// xml:lang value for the second column.
    #[arg(long, env = "CSV2TBX_TARGET_LANG", default_value = "ja")]
    pub target_lang: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "CSV2TBX_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("src/main/resources/glossary.csv"),
            output: PathBuf::from("target/glossary.tbx"),
            source_lang: "en".to_string(),
            target_lang: "ja".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ConvertConfig {
    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.input.as_os_str().is_empty() {
            errors.push("Input path cannot be empty".to_string());
        }

        if self.output.as_os_str().is_empty() {
            errors.push("Output path cannot be empty".to_string());
        }

        if self.source_lang.is_empty() {
            errors.push("Source language tag cannot be empty".to_string());
        }

        if self.target_lang.is_empty() {
            errors.push("Target language tag cannot be empty".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
