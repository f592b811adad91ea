//! # Glossia TBX Model
//!
//! Strongly-typed representations of the TBX-Basic termbase document
//! structure (TermBase eXchange, the standard markup format for exchanging
//! terminology data).
//!
//! The types mirror the fixed element hierarchy of a bilingual TBX-Basic
//! glossary:
//!
//! ```text
//! martif (type="TBX-Basic", xml:lang=<source>)
//! └── text
//!     └── body
//!         └── termEntry*
//!             ├── langSet (xml:lang=<source>)
//!             │   └── tig
//!             │       └── term
//!             └── langSet (xml:lang=<target>)
//!                 └── tig
//!                     └── term
//! ```
//!
//! Structural invariants are enforced by construction rather than validation:
//! a [`TermEntry`] has exactly two [`LangSet`] fields in fixed source/target
//! order, a [`LangSet`] holds exactly one [`Tig`], and a [`Tig`] exactly one
//! [`Term`]. The tree is a plain owned value with no back-references; build
//! it once, then hand it to a serializer.
//!
//! ## Examples
//!
//! ```
//! use glossia_tbx::{TbxDocument, TermEntry};
//!
//! let mut document = TbxDocument::new("en");
//! document.push_entry(TermEntry::new("en", "ja", "hello", "こんにちは"));
//! assert_eq!(document.entry_count(), 1);
//! ```

mod model;

pub use model::{Body, LangSet, MARTIF_TYPE, TbxDocument, Term, TermEntry, Text, Tig};
