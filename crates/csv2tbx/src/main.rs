//! csv2tbx
//!
//! Converts a two-column CSV glossary into a TBX-Basic termbase document.

use clap::Parser;
use glossia_csv2tbx::{ConvertConfig, convert, init_logging};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let config = ConvertConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let report = convert::run(&config)?;
    debug!(entries = report.entries, "conversion finished");

    Ok(())
}
