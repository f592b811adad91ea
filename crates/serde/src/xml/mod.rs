//! XML serialization for TBX-Basic documents.
//!
//! This module renders a [`TbxDocument`](glossia_tbx::TbxDocument) as a
//! TBX-Basic markup document by walking the typed tree and writing quick-xml
//! events directly to output.
//!
//! ## Document shape
//!
//! The first two lines of every document are fixed: the XML declaration and
//! a document-type declaration referencing the TBX-Basic core-structure DTD.
//! The DTD is a reference only; it is never resolved or validated against.
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <!DOCTYPE martif SYSTEM "TBXBasiccoreStructV02.dtd">
//! ```
//!
//! ## Model ↔ XML Mapping
//!
//! | Model | XML |
//! |-------|-----|
//! | `TbxDocument { lang: "en", .. }` | `<martif type="TBX-Basic" xml:lang="en">` |
//! | `Text` / `Body` | `<text>` / `<body>` wrappers |
//! | `TermEntry` | `<termEntry>` with source `langSet` before target `langSet` |
//! | `LangSet { lang: "ja", .. }` | `<langSet xml:lang="ja">` |
//! | `Tig` / `Term { value: "hello" }` | `<tig><term>hello</term></tig>` |
//!
//! Elements are indented two spaces per nesting level. Text content and
//! attribute values are escaped per standard XML rules (`<`, `>`, `&`,
//! quotes in attributes), so a term like `A&B` serializes as `A&amp;B`.

pub mod ser;

// Re-export serialization functions
pub use ser::{DOCTYPE_SYSTEM_ID, to_xml_string, to_xml_vec, to_xml_writer};
