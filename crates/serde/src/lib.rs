//! # Glossia Serialization Module
//!
//! This crate provides JSON and XML serialization for TBX-Basic termbase
//! documents.
//!
//! ## Features
//!
//! - **JSON Support**: Thin wrappers around `serde_json` that leverage the
//!   serde derives on the `glossia-tbx` model types.
//! - **XML Support**: A quick-xml event writer that renders a
//!   [`TbxDocument`](glossia_tbx::TbxDocument) as an indented TBX-Basic
//!   document with its XML declaration and document-type declaration.
//!
//! XML is the interchange representation: it is what the `csv2tbx` pipeline
//! writes to disk. JSON is a debug/interop representation of the same tree.
//!
//! ## Examples
//!
//! ```
//! use glossia_serde::{to_json_string, to_xml_string};
//! use glossia_tbx::{TbxDocument, TermEntry};
//!
//! let mut document = TbxDocument::new("en");
//! document.push_entry(TermEntry::new("en", "ja", "hello", "こんにちは"));
//!
//! let xml = to_xml_string(&document)?;
//! assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
//!
//! let json = to_json_string(&document)?;
//! assert!(json.contains("こんにちは"));
//! # Ok::<(), glossia_serde::SerdeError>(())
//! ```

pub mod error;
pub mod json;
pub mod xml;

pub use error::{Result, SerdeError};

// Re-export JSON functions at top level for convenience
pub use json::{
    from_json_slice, from_json_str, from_json_value, to_json_string, to_json_string_pretty,
    to_json_value, to_json_vec,
};

// Re-export XML serialization functions
pub use xml::{to_xml_string, to_xml_vec, to_xml_writer};
