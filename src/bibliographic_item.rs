//! Generic bibliographic item structures and rendering.
//!
//! [`BibliographicItem`] is the base record every specialized item builds on.
//! It owns the shared fields (titles, identifiers, dates, contributors,
//! language, script, ...) and renders them to XML. Specializations plug into
//! construction through [`ItemHooks`] and into rendering through an extension
//! callback that runs inside the `<ext>` element.

use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::bibliographic_record::BibliographicRecord;
use crate::config::XmlConfig;
use crate::docid::{DocumentIdentifier, StructuredIdentifier};
use crate::error::{BibError, Result};
use crate::validation::{check_language, check_script, Validator};
use crate::xml::{
    write_empty_element_with_attrs, write_text_element, write_text_element_with_attrs,
};

/// Identifier formatter: `(item, explicit identifier, attribute mode, delimiter)`.
pub type MakeId =
    fn(&BibliographicItem, Option<&DocumentIdentifier>, bool, &str) -> Option<String>;

/// Construction hooks a specialized item supplies to the base constructor.
///
/// Validators run before any field is stored; `makeid` derives the `id`
/// attribute when none is supplied.
#[derive(Debug, Clone, Copy)]
pub struct ItemHooks {
    /// Language validator.
    pub check_language: Validator,
    /// Script validator.
    pub check_script: Validator,
    /// Identifier formatter.
    pub makeid: MakeId,
}

impl ItemHooks {
    /// Hooks of the generic item.
    pub const BASE: ItemHooks = ItemHooks {
        check_language,
        check_script,
        makeid: base_makeid,
    };
}

impl Default for ItemHooks {
    fn default() -> Self {
        Self::BASE
    }
}

/// A title with its type and text attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypedTitle {
    /// Title type (e.g. "title-main", "main").
    #[serde(rename = "type")]
    pub title_type: Option<String>,
    /// Title text.
    pub content: String,
    /// Language code.
    pub language: Option<String>,
    /// Script code.
    pub script: Option<String>,
    /// MIME type of the content.
    pub format: Option<String>,
}

impl TypedTitle {
    /// Plain-text title of the given type.
    #[must_use]
    pub fn new(title_type: impl Into<String>, content: impl Into<String>) -> Self {
        TypedTitle {
            title_type: Some(title_type.into()),
            content: content.into(),
            format: Some("text/plain".to_string()),
            ..Self::default()
        }
    }

    /// Set language and script.
    #[must_use]
    pub fn in_language(mut self, language: &str, script: &str) -> Self {
        self.language = Some(language.to_string());
        self.script = Some(script.to_string());
        self
    }
}

/// A text value with language, script and format attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattedString {
    /// Text content.
    pub content: String,
    /// Language code.
    pub language: Option<String>,
    /// Script code.
    pub script: Option<String>,
    /// MIME type of the content.
    pub format: Option<String>,
}

/// A typed link to the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedUri {
    /// Link type (e.g. "src", "obp").
    #[serde(default, rename = "type")]
    pub uri_type: Option<String>,
    /// URI text.
    pub content: String,
}

/// A dated event in the item's life cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibliographicDate {
    /// Event type (e.g. "published", "issued").
    #[serde(rename = "type")]
    pub date_type: String,
    /// Exact date.
    #[serde(default)]
    pub on: Option<String>,
    /// Start of a date range.
    #[serde(default)]
    pub from: Option<String>,
    /// End of a date range.
    #[serde(default)]
    pub to: Option<String>,
}

impl BibliographicDate {
    /// A date on a single day.
    #[must_use]
    pub fn on(date_type: impl Into<String>, on: impl Into<String>) -> Self {
        BibliographicDate {
            date_type: date_type.into(),
            on: Some(on.into()),
            from: None,
            to: None,
        }
    }
}

/// An organization contributing to the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// Contribution roles (e.g. "publisher", "author").
    #[serde(default)]
    pub role: Vec<String>,
    /// Organization name.
    pub name: String,
    /// Organization abbreviation.
    #[serde(default)]
    pub abbreviation: Option<String>,
}

/// Publication stage of the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStatus {
    /// Stage code.
    pub stage: String,
    /// Substage code.
    #[serde(default)]
    pub substage: Option<String>,
}

/// Copyright holder and period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyrightAssociation {
    /// First year of copyright.
    pub from: String,
    /// Last year of copyright.
    #[serde(default)]
    pub to: Option<String>,
    /// Owning organization name.
    pub owner: String,
}

/// Construction arguments shared by every bibliographic item.
///
/// Field names follow the configuration keys, so the struct can be read
/// straight from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BibliographicItemArgs {
    /// Explicit `id` attribute; derived from the identifiers when absent.
    pub id: Option<String>,
    /// Whether the `id` attribute is rendered (default true).
    pub id_attribute: Option<bool>,
    /// Item type, rendered as the root `type` attribute.
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    /// Titles.
    pub title: Vec<TypedTitle>,
    /// Links.
    pub link: Vec<TypedUri>,
    /// Document identifiers.
    pub docidentifier: Vec<DocumentIdentifier>,
    /// Document number.
    pub docnumber: Option<String>,
    /// Dates.
    pub date: Vec<BibliographicDate>,
    /// Contributors.
    pub contributor: Vec<Contributor>,
    /// Edition.
    pub edition: Option<String>,
    /// Language codes.
    pub language: Vec<String>,
    /// Script codes.
    pub script: Vec<String>,
    /// Abstracts.
    #[serde(rename = "abstract")]
    pub abstract_text: Vec<FormattedString>,
    /// Publication status.
    pub docstatus: Option<DocumentStatus>,
    /// Copyright statements.
    pub copyright: Vec<CopyrightAssociation>,
    /// Keywords.
    pub keyword: Vec<String>,
    /// Document type, rendered inside `<ext>`.
    pub doctype: Option<String>,
    /// Structured identifier.
    pub structuredidentifier: Option<StructuredIdentifier>,
}

/// A generic bibliographic item.
///
/// Instances are immutable once constructed; all fields are read through
/// accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct BibliographicItem {
    id: Option<String>,
    id_attribute: bool,
    item_type: Option<String>,
    title: Vec<TypedTitle>,
    link: Vec<TypedUri>,
    docidentifier: Vec<DocumentIdentifier>,
    docnumber: Option<String>,
    date: Vec<BibliographicDate>,
    contributor: Vec<Contributor>,
    edition: Option<String>,
    language: Vec<String>,
    script: Vec<String>,
    abstract_text: Vec<FormattedString>,
    status: Option<DocumentStatus>,
    copyright: Vec<CopyrightAssociation>,
    keyword: Vec<String>,
    doctype: Option<String>,
    structuredidentifier: Option<StructuredIdentifier>,
}

impl BibliographicItem {
    /// Construct an item with the generic validators.
    ///
    /// # Errors
    ///
    /// See [`BibliographicItem::with_hooks`].
    pub fn new(args: BibliographicItemArgs) -> Result<Self> {
        Self::with_hooks(args, &ItemHooks::BASE)
    }

    /// Construct an item, running the supplied validators and identifier
    /// formatter.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a validator, or
    /// [`BibError::InvalidField`] for a blank document identifier.
    pub fn with_hooks(args: BibliographicItemArgs, hooks: &ItemHooks) -> Result<Self> {
        (hooks.check_language)(&args.language)?;
        (hooks.check_script)(&args.script)?;
        if args.docidentifier.iter().any(|d| d.id.trim().is_empty()) {
            return Err(BibError::InvalidField(
                "docidentifier must not be blank".to_string(),
            ));
        }

        let mut item = BibliographicItem {
            id: None,
            id_attribute: args.id_attribute.unwrap_or(true),
            item_type: args.item_type,
            title: args.title,
            link: args.link,
            docidentifier: args.docidentifier,
            docnumber: args.docnumber,
            date: args.date,
            contributor: args.contributor,
            edition: args.edition,
            language: args.language,
            script: args.script,
            abstract_text: args.abstract_text,
            status: args.docstatus,
            copyright: args.copyright,
            keyword: args.keyword,
            doctype: args.doctype,
            structuredidentifier: args.structuredidentifier,
        };
        item.id = match args.id {
            Some(id) => Some(id),
            None => (hooks.makeid)(&item, None, false, ""),
        };
        Ok(item)
    }

    /// The `id` attribute.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Whether the `id` attribute is rendered.
    #[must_use]
    pub fn id_attribute(&self) -> bool {
        self.id_attribute
    }

    /// Item type.
    #[must_use]
    pub fn item_type(&self) -> Option<&str> {
        self.item_type.as_deref()
    }

    /// Titles.
    #[must_use]
    pub fn titles(&self) -> &[TypedTitle] {
        &self.title
    }

    /// Links.
    #[must_use]
    pub fn links(&self) -> &[TypedUri] {
        &self.link
    }

    /// Document identifiers, in input order.
    #[must_use]
    pub fn docidentifier(&self) -> &[DocumentIdentifier] {
        &self.docidentifier
    }

    /// Document number.
    #[must_use]
    pub fn docnumber(&self) -> Option<&str> {
        self.docnumber.as_deref()
    }

    /// Dates.
    #[must_use]
    pub fn dates(&self) -> &[BibliographicDate] {
        &self.date
    }

    /// Contributors.
    #[must_use]
    pub fn contributors(&self) -> &[Contributor] {
        &self.contributor
    }

    /// Edition.
    #[must_use]
    pub fn edition(&self) -> Option<&str> {
        self.edition.as_deref()
    }

    /// Language codes.
    #[must_use]
    pub fn language(&self) -> &[String] {
        &self.language
    }

    /// Script codes.
    #[must_use]
    pub fn script(&self) -> &[String] {
        &self.script
    }

    /// Abstracts.
    #[must_use]
    pub fn abstracts(&self) -> &[FormattedString] {
        &self.abstract_text
    }

    /// Publication status.
    #[must_use]
    pub fn status(&self) -> Option<&DocumentStatus> {
        self.status.as_ref()
    }

    /// Copyright statements.
    #[must_use]
    pub fn copyright(&self) -> &[CopyrightAssociation] {
        &self.copyright
    }

    /// Keywords.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keyword
    }

    /// Document type.
    #[must_use]
    pub fn doctype(&self) -> Option<&str> {
        self.doctype.as_deref()
    }

    /// Structured identifier.
    #[must_use]
    pub fn structuredidentifier(&self) -> Option<&StructuredIdentifier> {
        self.structuredidentifier.as_ref()
    }

    /// First document identifier that is not a DOI.
    #[must_use]
    pub fn first_non_doi_identifier(&self) -> Option<&DocumentIdentifier> {
        self.docidentifier.iter().find(|d| !d.is_doi())
    }

    /// Render the item, running `extension` inside `<ext>`.
    ///
    /// The callback is only invoked for `<bibdata>` output; the `<bibitem>`
    /// citation form has no `<ext>` block.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails or the callback fails.
    pub fn write_xml_with<W, F>(
        &self,
        writer: &mut Writer<W>,
        config: &XmlConfig,
        extension: F,
    ) -> Result<()>
    where
        W: Write,
        F: FnOnce(&mut Writer<W>) -> Result<()>,
    {
        self.render(writer, config, Some(extension))
    }

    fn render<W, F>(
        &self,
        writer: &mut Writer<W>,
        config: &XmlConfig,
        extension: Option<F>,
    ) -> Result<()>
    where
        W: Write,
        F: FnOnce(&mut Writer<W>) -> Result<()>,
    {
        let root = config.root.tag();
        let mut elem = BytesStart::new(root);
        if let Some(id) = self.id.as_deref().filter(|_| self.id_attribute) {
            elem.push_attribute(("id", id));
        }
        if let Some(item_type) = &self.item_type {
            elem.push_attribute(("type", item_type.as_str()));
        }
        writer.write_event(Event::Start(elem))?;

        for title in &self.title {
            write_titled(writer, "title", title.title_type.as_deref(), &title.as_formatted())?;
        }
        for link in &self.link {
            let attrs: Vec<_> = link.uri_type.iter().map(|t| ("type", t.as_str())).collect();
            write_text_element_with_attrs(writer, "uri", &attrs, &link.content)?;
        }
        for docid in &self.docidentifier {
            docid.write_xml(writer)?;
        }
        if let Some(docnumber) = &self.docnumber {
            write_text_element(writer, "docnumber", docnumber)?;
        }
        for date in &self.date {
            write_date(writer, date)?;
        }
        for contributor in &self.contributor {
            write_contributor(writer, contributor)?;
        }
        if let Some(edition) = &self.edition {
            write_text_element(writer, "edition", edition)?;
        }
        for lang in &self.language {
            write_text_element(writer, "language", lang)?;
        }
        for scr in &self.script {
            write_text_element(writer, "script", scr)?;
        }
        for abs in &self.abstract_text {
            write_titled(writer, "abstract", None, abs)?;
        }
        if let Some(status) = &self.status {
            writer.write_event(Event::Start(BytesStart::new("status")))?;
            write_text_element(writer, "stage", &status.stage)?;
            if let Some(substage) = &status.substage {
                write_text_element(writer, "substage", substage)?;
            }
            writer.write_event(Event::End(BytesEnd::new("status")))?;
        }
        for copyright in &self.copyright {
            write_copyright(writer, copyright)?;
        }
        for keyword in &self.keyword {
            write_text_element(writer, "keyword", keyword)?;
        }

        let has_ext = extension.is_some()
            || self.doctype.is_some()
            || self.structuredidentifier.is_some();
        if config.is_bibdata() && has_ext {
            writer.write_event(Event::Start(BytesStart::new("ext")))?;
            if let Some(doctype) = &self.doctype {
                write_text_element(writer, "doctype", doctype)?;
            }
            if let Some(sid) = &self.structuredidentifier {
                sid.write_xml(writer)?;
            }
            if let Some(extension) = extension {
                extension(writer)?;
            }
            writer.write_event(Event::End(BytesEnd::new("ext")))?;
        }

        writer.write_event(Event::End(BytesEnd::new(root)))?;
        Ok(())
    }
}

impl BibliographicRecord for BibliographicItem {
    fn bibitem(&self) -> &BibliographicItem {
        self
    }

    fn makeid(
        &self,
        id: Option<&DocumentIdentifier>,
        attribute: bool,
        delim: &str,
    ) -> Option<String> {
        base_makeid(self, id, attribute, delim)
    }

    fn write_xml<W: Write>(&self, writer: &mut Writer<W>, config: &XmlConfig) -> Result<()> {
        self.render(writer, config, None::<fn(&mut Writer<W>) -> Result<()>>)
    }
}

impl TypedTitle {
    fn as_formatted(&self) -> FormattedString {
        FormattedString {
            content: self.content.clone(),
            language: self.language.clone(),
            script: self.script.clone(),
            format: self.format.clone(),
        }
    }
}

/// Generic identifier formatter: separators become `-`, whitespace is dropped.
fn base_makeid(
    item: &BibliographicItem,
    id: Option<&DocumentIdentifier>,
    attribute: bool,
    _delim: &str,
) -> Option<String> {
    if attribute && !item.id_attribute {
        return None;
    }
    let id = id.or_else(|| item.first_non_doi_identifier())?;
    let separators = Regex::new(r"[/:,]").unwrap();
    let idstr = separators.replace_all(&id.id, "-");
    Some(strip_whitespace(&idstr))
}

/// Remove every whitespace character.
pub(crate) fn strip_whitespace(value: &str) -> String {
    let whitespace = Regex::new(r"\s").unwrap();
    whitespace.replace_all(value, "").trim().to_string()
}

fn write_titled<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    kind: Option<&str>,
    text: &FormattedString,
) -> Result<()> {
    let mut attrs = Vec::new();
    if let Some(kind) = kind {
        attrs.push(("type", kind));
    }
    if let Some(format) = &text.format {
        attrs.push(("format", format.as_str()));
    }
    if let Some(language) = &text.language {
        attrs.push(("language", language.as_str()));
    }
    if let Some(script) = &text.script {
        attrs.push(("script", script.as_str()));
    }
    write_text_element_with_attrs(writer, name, &attrs, &text.content)
}

fn write_date<W: Write>(writer: &mut Writer<W>, date: &BibliographicDate) -> Result<()> {
    let mut elem = BytesStart::new("date");
    elem.push_attribute(("type", date.date_type.as_str()));
    writer.write_event(Event::Start(elem))?;
    if let Some(on) = &date.on {
        write_text_element(writer, "on", on)?;
    }
    if let Some(from) = &date.from {
        write_text_element(writer, "from", from)?;
    }
    if let Some(to) = &date.to {
        write_text_element(writer, "to", to)?;
    }
    writer.write_event(Event::End(BytesEnd::new("date")))?;
    Ok(())
}

fn write_organization<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    abbreviation: Option<&str>,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("organization")))?;
    write_text_element(writer, "name", name)?;
    if let Some(abbreviation) = abbreviation {
        write_text_element(writer, "abbreviation", abbreviation)?;
    }
    writer.write_event(Event::End(BytesEnd::new("organization")))?;
    Ok(())
}

fn write_contributor<W: Write>(writer: &mut Writer<W>, contributor: &Contributor) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("contributor")))?;
    for role in &contributor.role {
        write_empty_element_with_attrs(writer, "role", &[("type", role.as_str())])?;
    }
    write_organization(writer, &contributor.name, contributor.abbreviation.as_deref())?;
    writer.write_event(Event::End(BytesEnd::new("contributor")))?;
    Ok(())
}

fn write_copyright<W: Write>(
    writer: &mut Writer<W>,
    copyright: &CopyrightAssociation,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("copyright")))?;
    write_text_element(writer, "from", &copyright.from)?;
    if let Some(to) = &copyright.to {
        write_text_element(writer, "to", to)?;
    }
    writer.write_event(Event::Start(BytesStart::new("owner")))?;
    write_organization(writer, &copyright.owner, None)?;
    writer.write_event(Event::End(BytesEnd::new("owner")))?;
    writer.write_event(Event::End(BytesEnd::new("copyright")))?;
    Ok(())
}
