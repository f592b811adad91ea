//! TBX-Basic document types.

use serde::{Deserialize, Serialize};

/// Fixed value of the `type` attribute on the `martif` root element.
pub const MARTIF_TYPE: &str = "TBX-Basic";

/// A complete TBX-Basic document, rooted at `martif`.
///
/// The document's `xml:lang` is the glossary's source language; every entry
/// repeats it on its first `langSet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TbxDocument {
    /// `xml:lang` of the `martif` root.
    pub lang: String,

    /// The single `text` child.
    pub text: Text,
}

/// The `text` wrapper element between `martif` and `body`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    /// The single `body` child.
    pub body: Body,
}

/// The `body` element holding all term entries in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    /// `termEntry` children, one per glossary record.
    #[serde(rename = "termEntry")]
    pub entries: Vec<TermEntry>,
}

/// One glossary entry grouping equivalent terms across the two languages.
///
/// The source `langSet` always precedes the target `langSet` in the
/// serialized form; the two named fields make that ordering part of the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermEntry {
    /// The source-language `langSet`.
    pub source: LangSet,

    /// The target-language `langSet`.
    pub target: LangSet,
}

/// The set of term representations for one language within a `termEntry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangSet {
    /// `xml:lang` of this language section.
    pub lang: String,

    /// The single term-information group.
    pub tig: Tig,
}

/// A term-information group; wraps one term and its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tig {
    /// The wrapped term.
    pub term: Term,
}

/// A single term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// The term text, stored verbatim; markup escaping happens at
    /// serialization time.
    pub value: String,
}

impl TbxDocument {
    /// Creates an empty document for the given source language.
    pub fn new(source_lang: impl Into<String>) -> Self {
        Self {
            lang: source_lang.into(),
            text: Text::default(),
        }
    }

    /// Appends an entry to the body, preserving insertion order.
    pub fn push_entry(&mut self, entry: TermEntry) {
        self.text.body.entries.push(entry);
    }

    /// Returns the number of `termEntry` elements in the body.
    pub fn entry_count(&self) -> usize {
        self.text.body.entries.len()
    }

    /// Returns `true` if the body holds no entries.
    pub fn is_empty(&self) -> bool {
        self.text.body.entries.is_empty()
    }

    /// Returns the entries in insertion order.
    pub fn entries(&self) -> &[TermEntry] {
        &self.text.body.entries
    }
}

impl TermEntry {
    /// Builds the full fixed fragment for one glossary record: source
    /// `langSet` then target `langSet`, each with a single `tig`/`term`.
    pub fn new(
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
        source_term: impl Into<String>,
        target_term: impl Into<String>,
    ) -> Self {
        Self {
            source: LangSet::new(source_lang, source_term),
            target: LangSet::new(target_lang, target_term),
        }
    }
}

impl LangSet {
    /// Creates a `langSet` wrapping a single term.
    pub fn new(lang: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            tig: Tig {
                term: Term {
                    value: term.into(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_empty() {
        let document = TbxDocument::new("en");
        assert_eq!(document.lang, "en");
        assert!(document.is_empty());
        assert_eq!(document.entry_count(), 0);
    }

    #[test]
    fn test_push_entry_preserves_order() {
        let mut document = TbxDocument::new("en");
        document.push_entry(TermEntry::new("en", "ja", "hello", "こんにちは"));
        document.push_entry(TermEntry::new("en", "ja", "world", "世界"));

        assert_eq!(document.entry_count(), 2);
        assert_eq!(document.entries()[0].source.tig.term.value, "hello");
        assert_eq!(document.entries()[1].source.tig.term.value, "world");
    }

    #[test]
    fn test_entry_langsets_fixed_order() {
        let entry = TermEntry::new("en", "ja", "hello", "こんにちは");
        assert_eq!(entry.source.lang, "en");
        assert_eq!(entry.target.lang, "ja");
        assert_eq!(entry.source.tig.term.value, "hello");
        assert_eq!(entry.target.tig.term.value, "こんにちは");
    }

    #[test]
    fn test_term_text_stored_verbatim() {
        let entry = TermEntry::new("en", "ja", "A&B", "<体>");
        assert_eq!(entry.source.tig.term.value, "A&B");
        assert_eq!(entry.target.tig.term.value, "<体>");
    }

    #[test]
    fn test_json_round_trip() {
        let mut document = TbxDocument::new("en");
        document.push_entry(TermEntry::new("en", "ja", "hello", "こんにちは"));

        let json = serde_json::to_string(&document).unwrap();
        let parsed: TbxDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, document);
    }
}
