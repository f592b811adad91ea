//! CSV glossary reading.
//!
//! The reader makes a single forward pass over the input: it strips a
//! leading UTF-8 byte-order-mark if present (files written by common
//! spreadsheet tools carry one), then parses the rest as comma-separated
//! records with double-quote quoting and no header row.

use crate::error::{ConvertError, Result};
use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// UTF-8 byte-order-mark.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// A lazy, single-pass reader over glossary records.
///
/// Yields one [`StringRecord`] per input row, indexable by column
/// position. Rows are parsed with `flexible` lengths: the converter, not
/// the parser, decides how many columns a row must have.
pub struct GlossaryReader<R: Read> {
    records: StringRecordsIntoIter<BufReader<R>>,
}

impl GlossaryReader<File> {
    /// Opens the glossary file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(File::open(path)?)
    }
}

impl<R: Read> GlossaryReader<R> {
    /// Wraps any byte source, skipping a leading UTF-8 BOM if present.
    pub fn new(input: R) -> Result<Self> {
        let mut buffered = BufReader::new(input);

        let head = buffered.fill_buf()?;
        if head.starts_with(UTF8_BOM) {
            buffered.consume(UTF8_BOM.len());
        }

        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(buffered);

        Ok(Self {
            records: reader.into_records(),
        })
    }
}

impl<R: Read> Iterator for GlossaryReader<R> {
    type Item = Result<StringRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records
            .next()
            .map(|record| record.map_err(ConvertError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(input: &[u8]) -> Vec<StringRecord> {
        GlossaryReader::new(Cursor::new(input.to_vec()))
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_reads_rows_in_order() {
        let records = collect(b"hello,\xE3\x81\x93\xE3\x82\x93\xE3\x81\xAB\xE3\x81\xA1\xE3\x81\xAF\nworld,\xE4\xB8\x96\xE7\x95\x8C\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get(0), Some("hello"));
        assert_eq!(records[0].get(1), Some("こんにちは"));
        assert_eq!(records[1].get(0), Some("world"));
        assert_eq!(records[1].get(1), Some("世界"));
    }

    #[test]
    fn test_strips_utf8_bom() {
        let with_bom = collect(b"\xEF\xBB\xBFhello,hallo\n");
        let without_bom = collect(b"hello,hallo\n");
        assert_eq!(with_bom, without_bom);
        assert_eq!(with_bom[0].get(0), Some("hello"));
    }

    #[test]
    fn test_first_row_is_data_not_header() {
        let records = collect(b"source,target\nhello,hallo\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get(0), Some("source"));
    }

    #[test]
    fn test_quoted_fields() {
        let records = collect(b"\"a,b\",c\n");
        assert_eq!(records[0].get(0), Some("a,b"));
        assert_eq!(records[0].get(1), Some("c"));
    }

    #[test]
    fn test_crlf_records() {
        let records = collect(b"one,1\r\ntwo,2\r\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get(1), Some("2"));
    }

    #[test]
    fn test_short_and_wide_rows_pass_through() {
        // Column-count policy belongs to the converter; the reader yields
        // whatever the row contained.
        let records = collect(b"only-one\na,b,c,d\n");
        assert_eq!(records[0].len(), 1);
        assert_eq!(records[1].len(), 4);
    }

    #[test]
    fn test_invalid_utf8_is_a_parse_error() {
        let mut reader = GlossaryReader::new(Cursor::new(b"hello,\xFF\xFE\n".to_vec())).unwrap();
        let result = reader.find(|r| r.is_err());
        assert!(matches!(result, Some(Err(ConvertError::Csv(_)))));
    }

    #[test]
    fn test_unterminated_quote_swallows_the_rest() {
        // The csv parser is permissive here: an unclosed quote runs to end
        // of input and comes back as one short record, which the converter
        // then rejects for having too few columns.
        let records = collect(b"\"broken\nnext,row\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = GlossaryReader::from_path("no/such/glossary.csv");
        assert!(matches!(result, Err(ConvertError::Io(_))));
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        assert!(collect(b"").is_empty());
    }
}
