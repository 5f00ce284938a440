//! XML writing helpers and parsing of rendered items.
//!
//! Rendering goes through a `quick_xml::Writer`; the helpers here write the
//! small text elements every renderer needs. Parsing deserializes a
//! `<bibdata>` or `<bibitem>` document into mirror structs, converts them to
//! construction arguments and runs the normal constructor, so parsed items
//! pass the same validation as built ones.
//!
//! # Examples
//!
//! ```
//! use gbbib::{BibliographicRecord, GbBibliographicItem, MemoryCcsRegistry, XmlConfig, xml};
//!
//! # fn main() -> gbbib::Result<()> {
//! let registry = MemoryCcsRegistry::builtin();
//! let item = GbBibliographicItem::builder().language("zh").ccs("A").build(&registry)?;
//! let rendered = item.to_xml(&XmlConfig::default())?;
//! let restored = xml::from_xml(&rendered, &registry)?;
//! assert_eq!(restored.ccs()[0].code, "A");
//! # Ok(())
//! # }
//! ```

use std::io::Write;

use quick_xml::de::from_str as xml_from_str;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Deserialize;

use crate::bibliographic_item::{
    BibliographicDate, BibliographicItemArgs, Contributor, CopyrightAssociation, DocumentStatus,
    FormattedString, TypedTitle, TypedUri,
};
use crate::ccs::CcsRegistry;
use crate::config::XmlConfig;
use crate::docid::{DocumentIdentifier, StructuredIdentifier};
use crate::error::{BibError, Result};
use crate::gb_bibliographic_item::{GbBibliographicItem, GbBibliographicItemArgs};
use crate::standard_type::GbStandardTypeArgs;

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Create a writer over a fresh buffer, indented per `config`.
pub(crate) fn new_writer(config: &XmlConfig) -> Writer<Vec<u8>> {
    match config.indent {
        Some(width) => Writer::new_with_indent(Vec::new(), b' ', width),
        None => Writer::new(Vec::new()),
    }
}

/// Consume a buffer writer and return its UTF-8 text.
pub(crate) fn into_string(writer: Writer<Vec<u8>>) -> Result<String> {
    String::from_utf8(writer.into_inner())
        .map_err(|e| BibError::EncodingError(format!("rendered XML is not UTF-8: {e}")))
}

/// Write `<name>content</name>`.
pub(crate) fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    content: &str,
) -> Result<()> {
    write_text_element_with_attrs(writer, name, &[], content)
}

/// Write `<name attrs...>content</name>`.
pub(crate) fn write_text_element_with_attrs<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attrs: &[(&str, &str)],
    content: &str,
) -> Result<()> {
    let mut elem = BytesStart::new(name);
    for attr in attrs {
        elem.push_attribute(*attr);
    }
    writer.write_event(Event::Start(elem))?;
    writer.write_event(Event::Text(BytesText::new(content)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write `<name attrs.../>`.
pub(crate) fn write_empty_element_with_attrs<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attrs: &[(&str, &str)],
) -> Result<()> {
    let mut elem = BytesStart::new(name);
    for attr in attrs {
        elem.push_attribute(*attr);
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct XmlItem {
    #[serde(rename = "@id", default)]
    id: Option<String>,
    #[serde(rename = "@type", default)]
    item_type: Option<String>,
    #[serde(default)]
    title: Vec<XmlText>,
    #[serde(default)]
    uri: Vec<XmlText>,
    #[serde(default)]
    docidentifier: Vec<XmlDocidentifier>,
    #[serde(default)]
    docnumber: Option<String>,
    #[serde(default)]
    date: Vec<XmlDate>,
    #[serde(default)]
    contributor: Vec<XmlContributor>,
    #[serde(default)]
    edition: Option<String>,
    #[serde(default)]
    language: Vec<String>,
    #[serde(default)]
    script: Vec<String>,
    #[serde(default, rename = "abstract")]
    abstract_text: Vec<XmlText>,
    #[serde(default)]
    status: Option<XmlStatus>,
    #[serde(default)]
    copyright: Vec<XmlCopyright>,
    #[serde(default)]
    keyword: Vec<String>,
    #[serde(default)]
    ext: Option<XmlExt>,
}

#[derive(Debug, Deserialize)]
struct XmlText {
    #[serde(rename = "@type", default)]
    kind: Option<String>,
    #[serde(rename = "@format", default)]
    format: Option<String>,
    #[serde(rename = "@language", default)]
    language: Option<String>,
    #[serde(rename = "@script", default)]
    script: Option<String>,
    #[serde(rename = "$value", default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct XmlDocidentifier {
    #[serde(rename = "@type", default)]
    id_type: Option<String>,
    #[serde(rename = "@primary", default)]
    primary: bool,
    #[serde(rename = "$value")]
    id: String,
}

#[derive(Debug, Deserialize)]
struct XmlDate {
    #[serde(rename = "@type")]
    date_type: String,
    #[serde(default)]
    on: Option<String>,
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    to: Option<String>,
}

#[derive(Debug, Deserialize)]
struct XmlRole {
    #[serde(rename = "@type")]
    role_type: String,
}

#[derive(Debug, Deserialize)]
struct XmlOrganization {
    name: String,
    #[serde(default)]
    abbreviation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct XmlContributor {
    #[serde(default)]
    role: Vec<XmlRole>,
    organization: XmlOrganization,
}

#[derive(Debug, Deserialize)]
struct XmlStatus {
    stage: String,
    #[serde(default)]
    substage: Option<String>,
}

#[derive(Debug, Deserialize)]
struct XmlOwner {
    organization: XmlOrganization,
}

#[derive(Debug, Deserialize)]
struct XmlCopyright {
    from: String,
    #[serde(default)]
    to: Option<String>,
    owner: XmlOwner,
}

#[derive(Debug, Deserialize)]
struct XmlProjectNumber {
    #[serde(rename = "@part", default)]
    part: Option<String>,
    #[serde(rename = "@subpart", default)]
    subpart: Option<String>,
    #[serde(rename = "$value")]
    value: String,
}

#[derive(Debug, Deserialize)]
struct XmlStructuredIdentifier {
    #[serde(rename = "@type", default)]
    id_type: Option<String>,
    #[serde(rename = "project-number", default)]
    project_number: Option<XmlProjectNumber>,
    #[serde(rename = "tc-document-number", default)]
    tc_document_number: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlGbType {
    #[serde(default)]
    gbscope: Option<String>,
    #[serde(default)]
    gbprefix: Option<String>,
    #[serde(default)]
    gbmandate: Option<String>,
    #[serde(default)]
    gbtopic: Option<String>,
}

#[derive(Debug, Deserialize)]
struct XmlCcs {
    code: String,
}

#[derive(Debug, Deserialize)]
struct XmlExt {
    #[serde(default)]
    doctype: Option<String>,
    #[serde(default)]
    structuredidentifier: Option<XmlStructuredIdentifier>,
    #[serde(default)]
    gbtype: Option<XmlGbType>,
    #[serde(default)]
    ccs: Vec<XmlCcs>,
    #[serde(default)]
    gbplannumber: Option<String>,
}

impl XmlText {
    fn into_formatted(self) -> FormattedString {
        FormattedString {
            content: self.content,
            language: self.language,
            script: self.script,
            format: self.format,
        }
    }
}

impl From<XmlItem> for GbBibliographicItemArgs {
    fn from(xml: XmlItem) -> Self {
        let ext = xml.ext;
        let (doctype, structuredidentifier, gbtype, ccs, gbplannumber) = match ext {
            Some(ext) => (
                ext.doctype,
                ext.structuredidentifier.map(structured_identifier),
                ext.gbtype.map(|t| GbStandardTypeArgs {
                    scope: t.gbscope,
                    prefix: t.gbprefix,
                    mandate: t.gbmandate,
                    topic: t.gbtopic,
                }),
                ext.ccs.into_iter().map(|c| c.code).collect(),
                ext.gbplannumber,
            ),
            None => (None, None, None, Vec::new(), None),
        };

        let base = BibliographicItemArgs {
            id_attribute: Some(xml.id.is_some()),
            id: xml.id,
            item_type: xml.item_type,
            title: xml
                .title
                .into_iter()
                .map(|t| TypedTitle {
                    title_type: t.kind,
                    content: t.content,
                    language: t.language,
                    script: t.script,
                    format: t.format,
                })
                .collect(),
            link: xml
                .uri
                .into_iter()
                .map(|u| TypedUri {
                    uri_type: u.kind,
                    content: u.content,
                })
                .collect(),
            docidentifier: xml
                .docidentifier
                .into_iter()
                .map(|d| DocumentIdentifier {
                    id: d.id,
                    id_type: d.id_type,
                    primary: d.primary,
                })
                .collect(),
            docnumber: xml.docnumber,
            date: xml
                .date
                .into_iter()
                .map(|d| BibliographicDate {
                    date_type: d.date_type,
                    on: d.on,
                    from: d.from,
                    to: d.to,
                })
                .collect(),
            contributor: xml
                .contributor
                .into_iter()
                .map(|c| Contributor {
                    role: c.role.into_iter().map(|r| r.role_type).collect(),
                    name: c.organization.name,
                    abbreviation: c.organization.abbreviation,
                })
                .collect(),
            edition: xml.edition,
            language: xml.language,
            script: xml.script,
            abstract_text: xml.abstract_text.into_iter().map(XmlText::into_formatted).collect(),
            docstatus: xml.status.map(|s| DocumentStatus {
                stage: s.stage,
                substage: s.substage,
            }),
            copyright: xml
                .copyright
                .into_iter()
                .map(|c| CopyrightAssociation {
                    from: c.from,
                    to: c.to,
                    owner: c.owner.organization.name,
                })
                .collect(),
            keyword: xml.keyword,
            doctype,
            structuredidentifier,
        };

        GbBibliographicItemArgs {
            base,
            committee: None,
            ccs: Some(ccs),
            gbtype,
            topic: None,
            gbplannumber,
        }
    }
}

fn structured_identifier(xml: XmlStructuredIdentifier) -> StructuredIdentifier {
    let (project_number, part, subpart) = match xml.project_number {
        Some(pn) => (Some(pn.value), pn.part, pn.subpart),
        None => (None, None, None),
    };
    StructuredIdentifier {
        id_type: xml.id_type,
        project_number,
        part,
        subpart,
        tc_document_number: xml.tc_document_number,
    }
}

/// Parse a `<bibdata>` or `<bibitem>` document into a GB item.
///
/// Classification codes are resolved again through `registry`; the `<text>`
/// of each `<ccs>` block is not trusted. Committee and topic are not part of
/// the rendered form and come back empty.
///
/// # Errors
///
/// Returns [`BibError::ParseError`] for malformed XML, or any construction
/// error raised by [`GbBibliographicItem::new`].
pub fn from_xml(xml: &str, registry: &dyn CcsRegistry) -> Result<GbBibliographicItem> {
    let item: XmlItem = xml_from_str(xml)
        .map_err(|e| BibError::ParseError(format!("Failed to parse XML: {e}")))?;
    GbBibliographicItem::new(item.into(), registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bibliographic_record::BibliographicRecord;
    use crate::ccs::{Ccs, MemoryCcsRegistry};

    fn registry() -> MemoryCcsRegistry {
        MemoryCcsRegistry::new().with(Ccs::new("A01", "技术管理"))
    }

    #[test]
    fn test_text_element_escapes() {
        let mut writer = Writer::new(Vec::new());
        write_text_element(&mut writer, "title", "Fish & <Chips>").unwrap();
        assert_eq!(
            into_string(writer).unwrap(),
            "<title>Fish &amp; &lt;Chips&gt;</title>"
        );
    }

    #[test]
    fn test_indented_writer() {
        let config = XmlConfig::default().with_indent(2);
        let mut writer = new_writer(&config);
        writer.write_event(Event::Start(BytesStart::new("a"))).unwrap();
        write_text_element(&mut writer, "b", "x").unwrap();
        writer.write_event(Event::End(BytesEnd::new("a"))).unwrap();
        assert_eq!(into_string(writer).unwrap(), "<a>\n  <b>x</b>\n</a>");
    }

    #[test]
    fn test_parse_gb_ext() {
        let xml = concat!(
            r#"<bibdata type="standard" id="GB1-2000">"#,
            r#"<docidentifier type="Chinese Standard">GB 1-2000</docidentifier>"#,
            "<language>zh</language><script>Hans</script>",
            "<ext><doctype>standard</doctype>",
            "<structuredidentifier><project-number>20001</project-number></structuredidentifier>",
            "<gbtype><gbscope>national</gbscope><gbprefix>GB</gbprefix></gbtype>",
            "<ccs><code>A01</code><text>ignored</text></ccs>",
            "<gbplannumber>P-1</gbplannumber>",
            "</ext></bibdata>"
        );
        let item = from_xml(xml, &registry()).unwrap();
        assert_eq!(item.bibitem().id(), Some("GB1-2000"));
        assert_eq!(item.item_type(), Some("standard"));
        assert_eq!(item.ccs()[0].description, "技术管理");
        assert_eq!(item.gbtype().scope(), Some("national"));
        assert_eq!(item.gbplannumber(), Some("P-1"));
        assert_eq!(item.bibitem().doctype(), Some("standard"));
    }

    #[test]
    fn test_parse_without_ext() {
        let xml = "<bibitem><language>en</language></bibitem>";
        let item = from_xml(xml, &registry()).unwrap();
        assert!(item.ccs().is_empty());
        assert!(item.gbtype().is_empty());
    }

    #[test]
    fn test_parse_runs_gb_validation() {
        let xml = "<bibdata><language>fr</language></bibdata>";
        assert!(matches!(
            from_xml(xml, &registry()),
            Err(BibError::InvalidLanguage(ref l)) if l == "fr"
        ));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            from_xml("<bibdata><title>", &registry()),
            Err(BibError::ParseError(_))
        ));
    }
}
