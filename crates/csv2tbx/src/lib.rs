//! # csv2tbx
//!
//! Converts a two-column CSV glossary (terms in a source language, their
//! translations in a target language) into a TBX-Basic termbase document.
//!
//! The conversion is a single forward pass with three sequential phases:
//!
//! 1. **Read** — open the input file, strip a UTF-8 byte-order-mark if
//!    present, and parse comma-separated records ([`reader::GlossaryReader`]).
//! 2. **Build** — turn each record into a `termEntry` fragment and append it
//!    to an in-memory [`TbxDocument`](glossia_tbx::TbxDocument) in input
//!    order ([`convert::build_document`]).
//! 3. **Write** — serialize the tree as indented markup and write it to the
//!    output path, creating the parent directory if needed
//!    ([`convert::run`]).
//!
//! Everything is synchronous and single-threaded; any I/O or parse failure
//! aborts the run with a propagated [`ConvertError`].
//!
//! ## Examples
//!
//! ```no_run
//! use glossia_csv2tbx::{ConvertConfig, convert};
//!
//! let config = ConvertConfig::default();
//! let report = convert::run(&config)?;
//! println!("wrote {} entries", report.entries);
//! # Ok::<(), glossia_csv2tbx::ConvertError>(())
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod reader;

pub use config::ConvertConfig;
pub use convert::{ConvertReport, run};
pub use error::{ConvertError, Result};

/// Initializes tracing with the given default level.
///
/// Diagnostics go to the error stream so the generated document can be
/// piped or inspected independently of progress output. The `RUST_LOG`
/// environment variable overrides the level when set.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("glossia_csv2tbx={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
