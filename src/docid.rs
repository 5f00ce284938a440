//! Document identifiers.
//!
//! A bibliographic item carries any number of flat [`DocumentIdentifier`]s
//! (e.g. `GB/T 20223-2006`, a DOI) and at most one [`StructuredIdentifier`],
//! the decomposed form exposing sub-fields such as the project number.

use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::xml::{write_text_element, write_text_element_with_attrs};

/// A flat document identifier such as `GB/T 20223-2006`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentIdentifier {
    /// Identifier text.
    pub id: String,
    /// Identifier scheme (e.g. "Chinese Standard", "DOI").
    #[serde(default, rename = "type")]
    pub id_type: Option<String>,
    /// Whether this is the primary identifier of the item.
    #[serde(default)]
    pub primary: bool,
}

impl DocumentIdentifier {
    /// Create an identifier with a scheme.
    #[must_use]
    pub fn new(id: impl Into<String>, id_type: impl Into<String>) -> Self {
        DocumentIdentifier {
            id: id.into(),
            id_type: Some(id_type.into()),
            primary: false,
        }
    }

    /// Mark this identifier as primary.
    #[must_use]
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    /// Returns true for DOI identifiers.
    #[must_use]
    pub fn is_doi(&self) -> bool {
        self.id_type.as_deref() == Some("DOI")
    }

    pub(crate) fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut attrs = Vec::new();
        if let Some(id_type) = &self.id_type {
            attrs.push(("type", id_type.as_str()));
        }
        if self.primary {
            attrs.push(("primary", "true"));
        }
        write_text_element_with_attrs(writer, "docidentifier", &attrs, &self.id)
    }
}

/// Decomposed identifier of a standard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredIdentifier {
    /// Identifier scheme.
    #[serde(default, rename = "type")]
    pub id_type: Option<String>,
    /// Project number assigned during drafting.
    #[serde(default)]
    pub project_number: Option<String>,
    /// Part number.
    #[serde(default)]
    pub part: Option<String>,
    /// Subpart number.
    #[serde(default)]
    pub subpart: Option<String>,
    /// Committee document number.
    #[serde(default)]
    pub tc_document_number: Option<String>,
}

impl StructuredIdentifier {
    /// Create a structured identifier carrying only a project number.
    #[must_use]
    pub fn with_project_number(project_number: impl Into<String>) -> Self {
        StructuredIdentifier {
            project_number: Some(project_number.into()),
            ..Self::default()
        }
    }

    /// The project number, if any.
    #[must_use]
    pub fn project_number(&self) -> Option<&str> {
        self.project_number.as_deref()
    }

    pub(crate) fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut elem = BytesStart::new("structuredidentifier");
        if let Some(id_type) = &self.id_type {
            elem.push_attribute(("type", id_type.as_str()));
        }
        writer.write_event(Event::Start(elem))?;

        if let Some(project_number) = &self.project_number {
            let mut attrs = Vec::new();
            if let Some(part) = &self.part {
                attrs.push(("part", part.as_str()));
            }
            if let Some(subpart) = &self.subpart {
                attrs.push(("subpart", subpart.as_str()));
            }
            write_text_element_with_attrs(writer, "project-number", &attrs, project_number)?;
        }
        if let Some(number) = &self.tc_document_number {
            write_text_element(writer, "tc-document-number", number)?;
        }

        writer.write_event(Event::End(BytesEnd::new("structuredidentifier")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn render(f: impl FnOnce(&mut Writer<Cursor<Vec<u8>>>) -> Result<()>) -> String {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        f(&mut writer).unwrap();
        String::from_utf8(writer.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn test_doi_detection() {
        assert!(DocumentIdentifier::new("10.1000/1", "DOI").is_doi());
        assert!(!DocumentIdentifier::new("GB 1-2000", "Chinese Standard").is_doi());
    }

    #[test]
    fn test_docidentifier_xml() {
        let id = DocumentIdentifier::new("GB/T 1.1-2009", "Chinese Standard").primary();
        let xml = render(|w| id.write_xml(w));
        assert_eq!(
            xml,
            r#"<docidentifier type="Chinese Standard" primary="true">GB/T 1.1-2009</docidentifier>"#
        );
    }

    #[test]
    fn test_structured_identifier_xml() {
        let sid = StructuredIdentifier {
            id_type: Some("Chinese Standard".to_string()),
            project_number: Some("20223".to_string()),
            part: Some("2".to_string()),
            ..Default::default()
        };
        let xml = render(|w| sid.write_xml(w));
        assert_eq!(
            xml,
            concat!(
                r#"<structuredidentifier type="Chinese Standard">"#,
                r#"<project-number part="2">20223</project-number>"#,
                "</structuredidentifier>"
            )
        );
    }

    #[test]
    fn test_structured_identifier_from_json() {
        let sid: StructuredIdentifier =
            serde_json::from_str(r#"{"project_number": "123", "type": "GB"}"#).unwrap();
        assert_eq!(sid.project_number(), Some("123"));
        assert_eq!(sid.id_type.as_deref(), Some("GB"));
    }
}
