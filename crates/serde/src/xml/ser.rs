//! XML serialization implementation for TBX documents.
//!
//! This module implements serialization from the typed TBX model to markup
//! by walking the fixed document hierarchy and writing quick-xml events to
//! an indenting writer.

use crate::error::{Result, SerdeError};
use glossia_tbx::{LangSet, MARTIF_TYPE, TbxDocument, TermEntry};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// System identifier emitted in the document-type declaration.
pub const DOCTYPE_SYSTEM_ID: &str = "TBXBasiccoreStructV02.dtd";

/// Indentation width per nesting level.
const INDENT_WIDTH: usize = 2;

/// Serialize a TBX document to an XML string.
///
/// # Examples
///
/// ```
/// use glossia_serde::xml::to_xml_string;
/// use glossia_tbx::TbxDocument;
///
/// let document = TbxDocument::new("en");
/// let xml = to_xml_string(&document)?;
/// assert!(xml.contains("<martif type=\"TBX-Basic\" xml:lang=\"en\">"));
/// # Ok::<(), glossia_serde::SerdeError>(())
/// ```
pub fn to_xml_string(document: &TbxDocument) -> Result<String> {
    let mut buffer = Vec::new();
    to_xml_writer(document, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| SerdeError::Custom(e.to_string()))
}

/// Serialize a TBX document to an XML byte vector.
pub fn to_xml_vec(document: &TbxDocument) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    to_xml_writer(document, &mut buffer)?;
    Ok(buffer)
}

/// Serialize a TBX document to an XML writer.
pub fn to_xml_writer<W>(document: &TbxDocument, writer: W) -> Result<()>
where
    W: Write,
{
    let mut serializer = XmlSerializer::new(writer);
    serializer.write_document(document)
}

/// XML serializer that writes indented quick-xml events.
pub struct XmlSerializer<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> XmlSerializer<W> {
    /// Creates a new XML serializer with 2-space indentation.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Writer::new_with_indent(writer, b' ', INDENT_WIDTH),
        }
    }

    /// Writes a complete document: declaration, DOCTYPE, and the `martif`
    /// tree.
    pub fn write_document(&mut self, document: &TbxDocument) -> Result<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.write_doctype()?;

        let mut martif = BytesStart::new("martif");
        martif.push_attribute(("type", MARTIF_TYPE));
        martif.push_attribute(("xml:lang", document.lang.as_str()));
        self.writer.write_event(Event::Start(martif))?;

        self.write_start("text")?;
        self.write_start("body")?;
        for entry in document.entries() {
            self.write_term_entry(entry)?;
        }
        self.write_end("body")?;
        self.write_end("text")?;

        self.write_end("martif")?;
        Ok(())
    }

    /// Writes the document-type declaration referencing the TBX-Basic DTD.
    ///
    /// The system identifier is emitted verbatim; whether the DTD exists on
    /// disk is never checked.
    fn write_doctype(&mut self) -> Result<()> {
        let doctype = format!("martif SYSTEM \"{}\"", DOCTYPE_SYSTEM_ID);
        self.writer
            .write_event(Event::DocType(BytesText::from_escaped(doctype)))?;
        Ok(())
    }

    /// Writes one `termEntry` fragment: source `langSet` then target
    /// `langSet`.
    fn write_term_entry(&mut self, entry: &TermEntry) -> Result<()> {
        self.write_start("termEntry")?;
        self.write_lang_set(&entry.source)?;
        self.write_lang_set(&entry.target)?;
        self.write_end("termEntry")?;
        Ok(())
    }

    /// Writes a `langSet` with its single `tig`/`term`.
    fn write_lang_set(&mut self, lang_set: &LangSet) -> Result<()> {
        let mut element = BytesStart::new("langSet");
        element.push_attribute(("xml:lang", lang_set.lang.as_str()));
        self.writer.write_event(Event::Start(element))?;

        self.write_start("tig")?;
        self.write_text_element("term", &lang_set.tig.term.value)?;
        self.write_end("tig")?;

        self.write_end("langSet")?;
        Ok(())
    }

    /// Writes an element whose content is a single text node, e.g.
    /// `<term>hello</term>`. The text is escaped on write.
    fn write_text_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.write_start(name)?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.write_end(name)?;
        Ok(())
    }

    fn write_start(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::Start(BytesStart::new(name)))?;
        Ok(())
    }

    fn write_end(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_and_doctype_lead_the_document() {
        let document = TbxDocument::new("en");
        let xml = to_xml_string(&document).unwrap();

        let mut lines = xml.lines();
        assert_eq!(
            lines.next(),
            Some("<?xml version=\"1.0\" encoding=\"UTF-8\"?>")
        );
        assert_eq!(
            lines.next(),
            Some("<!DOCTYPE martif SYSTEM \"TBXBasiccoreStructV02.dtd\">")
        );
    }

    #[test]
    fn test_empty_document_structure() {
        let document = TbxDocument::new("en");
        let xml = to_xml_string(&document).unwrap();

        assert!(xml.contains("<martif type=\"TBX-Basic\" xml:lang=\"en\">"));
        assert!(xml.contains("<text>"));
        assert!(xml.contains("<body>"));
        assert!(!xml.contains("<termEntry>"));
        assert!(xml.ends_with("</martif>"));
    }

    #[test]
    fn test_vec_and_string_agree() {
        let document = TbxDocument::new("en");
        let bytes = to_xml_vec(&document).unwrap();
        let string = to_xml_string(&document).unwrap();
        assert_eq!(bytes, string.as_bytes());
    }
}
