//! The conversion pipeline: records in, TBX document out.

use crate::config::ConvertConfig;
use crate::error::{ConvertError, Result};
use crate::reader::GlossaryReader;
use csv::StringRecord;
use glossia_tbx::{TbxDocument, TermEntry};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Summary of a completed conversion run.
#[derive(Debug, Serialize)]
pub struct ConvertReport {
    /// Number of `termEntry` elements written.
    pub entries: usize,

    /// Path of the generated document.
    pub output: PathBuf,
}

/// Builds the TBX document for a sequence of glossary records.
///
/// Each record becomes one `termEntry`, in input order. Column 0 is the
/// source-language term and column 1 the target-language term; additional
/// columns are ignored. A record with fewer than two columns fails the
/// whole run with [`ConvertError::MalformedRecord`] — malformed input is
/// never silently skipped.
pub fn build_document<I>(records: I, config: &ConvertConfig) -> Result<TbxDocument>
where
    I: IntoIterator<Item = Result<StringRecord>>,
{
    let mut document = TbxDocument::new(&config.source_lang);

    for (index, record) in records.into_iter().enumerate() {
        let record = record?;
        let (source, target) = match (record.get(0), record.get(1)) {
            (Some(source), Some(target)) => (source, target),
            _ => {
                return Err(ConvertError::MalformedRecord {
                    row: index + 1,
                    columns: record.len(),
                });
            }
        };

        document.push_entry(TermEntry::new(
            &config.source_lang,
            &config.target_lang,
            source,
            target,
        ));
    }

    Ok(document)
}

/// Runs the full pipeline: read the CSV, build the tree, write the TBX file.
///
/// The document is serialized to memory before the output file is touched,
/// so a failed run never leaves a partially written file behind. The
/// output's parent directory is created if absent and the file itself is
/// overwritten unconditionally.
pub fn run(config: &ConvertConfig) -> Result<ConvertReport> {
    info!(input = %config.input.display(), "begin");

    info!("read csv file.");
    let records = GlossaryReader::from_path(&config.input)?;
    let document = build_document(records, config)?;

    info!("write tbx file.");
    let xml = glossia_serde::to_xml_vec(&document)?;
    if let Some(parent) = config.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&config.output, xml)?;

    info!(output = %config.output.display(), "end");

    Ok(ConvertReport {
        entries: document.entry_count(),
        output: config.output.clone(),
    })
}
