//! GB (Chinese national standard) bibliographic items.
//!
//! [`GbBibliographicItem`] wraps a [`BibliographicItem`] and adds the GB-only
//! fields: technical committee, standard type, CCS classification codes and
//! plan number. Construction narrows the accepted languages to `en`/`zh` and
//! scripts to `Latn`/`Hans`, resolves every classification code through a
//! [`CcsRegistry`], and derives the plan number from the structured
//! identifier when none is given.
//!
//! # Examples
//!
//! ```
//! use gbbib::{
//!     BibliographicRecord, DocumentIdentifier, GbBibliographicItem, MemoryCcsRegistry,
//!     StructuredIdentifier, XmlConfig,
//! };
//!
//! # fn main() -> gbbib::Result<()> {
//! let registry = MemoryCcsRegistry::builtin();
//! let item = GbBibliographicItem::builder()
//!     .docidentifier(DocumentIdentifier::new("GB/T 20223-2006", "Chinese Standard"))
//!     .language("zh")
//!     .script("Hans")
//!     .structuredidentifier(StructuredIdentifier::with_project_number("20223"))
//!     .ccs("X")
//!     .build(&registry)?;
//!
//! assert_eq!(item.gbplannumber(), Some("20223"));
//! assert_eq!(item.makeid(None, false, "").as_deref(), Some("GB/T20223-2006"));
//!
//! let xml = item.to_xml(&XmlConfig::default())?;
//! assert!(xml.contains("<ccs><code>X</code><text>食品</text></ccs>"));
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::io::Write;

use quick_xml::Writer;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bibliographic_item::{
    strip_whitespace, BibliographicDate, BibliographicItem, BibliographicItemArgs, Contributor,
    ItemHooks, TypedTitle,
};
use crate::bibliographic_record::BibliographicRecord;
use crate::ccs::{Ccs, CcsRegistry};
use crate::config::XmlConfig;
use crate::docid::{DocumentIdentifier, StructuredIdentifier};
use crate::error::{BibError, Result};
use crate::gbxml::render_gbxml;
use crate::standard_type::{GbStandardType, GbStandardTypeArgs};
use crate::technical_committee::{CommitteeArgs, GbTechnicalCommittee};
use crate::validation::{check_gb_language, check_gb_script};

/// Construction hooks of GB items.
pub const GB_HOOKS: ItemHooks = ItemHooks {
    check_language: check_gb_language,
    check_script: check_gb_script,
    makeid: gb_makeid,
};

/// Construction arguments of a GB item.
///
/// Base fields are flattened, so a single JSON object carries both the shared
/// keys (`title`, `docidentifier`, `language`, `type`, ...) and the GB keys.
/// `ccs` is mandatory: pass an empty list when the item has no codes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GbBibliographicItemArgs {
    /// Shared bibliographic fields.
    #[serde(flatten)]
    pub base: BibliographicItemArgs,
    /// Drafting committee.
    pub committee: Option<CommitteeArgs>,
    /// Raw classification codes.
    pub ccs: Option<Vec<String>>,
    /// Standard type.
    pub gbtype: Option<GbStandardTypeArgs>,
    /// Topic.
    pub topic: Option<String>,
    /// Plan number; derived from the structured identifier when absent.
    pub gbplannumber: Option<String>,
}

impl GbBibliographicItemArgs {
    /// Read arguments from a JSON object. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::JsonError`] for malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A GB standard.
///
/// Immutable after construction. The raw `type` input is shared with the
/// base item and read through [`GbBibliographicItem::item_type`].
#[derive(Debug, Clone, PartialEq)]
pub struct GbBibliographicItem {
    base: BibliographicItem,
    committee: Option<GbTechnicalCommittee>,
    gbtype: GbStandardType,
    topic: Option<String>,
    ccs: Vec<Ccs>,
    plan_number: Option<String>,
    gbplannumber: Option<String>,
}

impl GbBibliographicItem {
    /// Construct a GB item.
    ///
    /// Steps run in order, each depending on the previous one: base fields
    /// (with GB language/script validation), committee, classification codes,
    /// standard type, plan number.
    ///
    /// # Errors
    ///
    /// - [`BibError::InvalidLanguage`] / [`BibError::InvalidScript`] for values
    ///   outside the GB sets
    /// - [`BibError::InvalidCommitteeType`] for an unknown committee type
    /// - [`BibError::MissingField`] when `ccs` is absent
    /// - [`BibError::CodeNotFound`] for the first unresolvable code
    /// - any other error raised by base construction
    pub fn new(args: GbBibliographicItemArgs, registry: &dyn CcsRegistry) -> Result<Self> {
        let GbBibliographicItemArgs {
            base,
            committee,
            ccs,
            gbtype,
            topic,
            gbplannumber,
        } = args;

        let base = BibliographicItem::with_hooks(base, &GB_HOOKS)?;
        let committee = committee.map(GbTechnicalCommittee::try_from).transpose()?;
        let ccs = ccs
            .ok_or_else(|| BibError::MissingField("ccs".to_string()))?
            .iter()
            .map(|code| registry.fetch(code))
            .collect::<Result<Vec<_>>>()?;
        let gbtype = GbStandardType::new(gbtype);
        let gbplannumber = gbplannumber.or_else(|| {
            base.structuredidentifier()
                .and_then(|sid| sid.project_number.clone())
        });

        debug!(
            id = ?base.id(),
            ccs = ccs.len(),
            gbplannumber = ?gbplannumber,
            "constructed GB bibliographic item"
        );

        Ok(GbBibliographicItem {
            base,
            committee,
            gbtype,
            topic,
            ccs,
            plan_number: None,
            gbplannumber,
        })
    }

    /// Create a builder for fluently constructing GB items.
    #[must_use]
    pub fn builder() -> GbBibliographicItemBuilder {
        GbBibliographicItemBuilder::default()
    }

    /// Parse an item from XML produced by [`BibliographicRecord::to_xml`].
    ///
    /// # Errors
    ///
    /// See [`crate::xml::from_xml`].
    pub fn from_xml(xml: &str, registry: &dyn CcsRegistry) -> Result<Self> {
        crate::xml::from_xml(xml, registry)
    }

    /// Drafting committee.
    #[must_use]
    pub fn committee(&self) -> Option<&GbTechnicalCommittee> {
        self.committee.as_ref()
    }

    /// Standard type. Always present.
    #[must_use]
    pub fn gbtype(&self) -> &GbStandardType {
        &self.gbtype
    }

    /// Topic.
    #[must_use]
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    /// Classification codes, in input order.
    #[must_use]
    pub fn ccs(&self) -> &[Ccs] {
        &self.ccs
    }

    /// Plan number. Never assigned; see [`gbplannumber`](Self::gbplannumber).
    #[must_use]
    pub fn plan_number(&self) -> Option<&str> {
        self.plan_number.as_deref()
    }

    /// Raw `type` input.
    #[must_use]
    pub fn item_type(&self) -> Option<&str> {
        self.base.item_type()
    }

    /// Plan number, explicit or derived from the structured identifier.
    #[must_use]
    pub fn gbplannumber(&self) -> Option<&str> {
        self.gbplannumber.as_deref()
    }

    /// Debug representation; identical to the [`Display`](fmt::Display) output.
    #[must_use]
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl BibliographicRecord for GbBibliographicItem {
    fn bibitem(&self) -> &BibliographicItem {
        &self.base
    }

    fn makeid(
        &self,
        id: Option<&DocumentIdentifier>,
        attribute: bool,
        delim: &str,
    ) -> Option<String> {
        gb_makeid(&self.base, id, attribute, delim)
    }

    fn write_xml<W: Write>(&self, writer: &mut Writer<W>, config: &XmlConfig) -> Result<()> {
        self.base
            .write_xml_with(writer, config, |w| render_gbxml(self, w))
    }
}

impl fmt::Display for GbBibliographicItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handle = self as *const Self as usize;
        write!(f, "<GbBibliographicItem:{handle:#016x}>")
    }
}

/// GB identifier formatter: all whitespace removed, separators kept.
fn gb_makeid(
    item: &BibliographicItem,
    id: Option<&DocumentIdentifier>,
    attribute: bool,
    _delim: &str,
) -> Option<String> {
    if attribute && !item.id_attribute() {
        return None;
    }
    let id = id.or_else(|| item.first_non_doi_identifier())?;
    Some(strip_whitespace(&id.id))
}

/// Fluent builder for [`GbBibliographicItem`].
///
/// Starts with an empty classification code list, so `build` never fails
/// with [`BibError::MissingField`].
#[derive(Debug, Clone)]
pub struct GbBibliographicItemBuilder {
    args: GbBibliographicItemArgs,
}

impl Default for GbBibliographicItemBuilder {
    fn default() -> Self {
        GbBibliographicItemBuilder {
            args: GbBibliographicItemArgs {
                ccs: Some(Vec::new()),
                ..GbBibliographicItemArgs::default()
            },
        }
    }
}

impl GbBibliographicItemBuilder {
    /// Set the explicit `id` attribute.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.args.base.id = Some(id.into());
        self
    }

    /// Set whether the `id` attribute is rendered.
    #[must_use]
    pub fn id_attribute(mut self, id_attribute: bool) -> Self {
        self.args.base.id_attribute = Some(id_attribute);
        self
    }

    /// Set the item type.
    #[must_use]
    pub fn item_type(mut self, item_type: impl Into<String>) -> Self {
        self.args.base.item_type = Some(item_type.into());
        self
    }

    /// Add a title.
    #[must_use]
    pub fn title(mut self, title: TypedTitle) -> Self {
        self.args.base.title.push(title);
        self
    }

    /// Add a document identifier.
    #[must_use]
    pub fn docidentifier(mut self, docid: DocumentIdentifier) -> Self {
        self.args.base.docidentifier.push(docid);
        self
    }

    /// Set the document number.
    #[must_use]
    pub fn docnumber(mut self, docnumber: impl Into<String>) -> Self {
        self.args.base.docnumber = Some(docnumber.into());
        self
    }

    /// Add a date.
    #[must_use]
    pub fn date(mut self, date: BibliographicDate) -> Self {
        self.args.base.date.push(date);
        self
    }

    /// Add a contributor.
    #[must_use]
    pub fn contributor(mut self, contributor: Contributor) -> Self {
        self.args.base.contributor.push(contributor);
        self
    }

    /// Set the edition.
    #[must_use]
    pub fn edition(mut self, edition: impl Into<String>) -> Self {
        self.args.base.edition = Some(edition.into());
        self
    }

    /// Add a language code.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.args.base.language.push(language.into());
        self
    }

    /// Add a script code.
    #[must_use]
    pub fn script(mut self, script: impl Into<String>) -> Self {
        self.args.base.script.push(script.into());
        self
    }

    /// Add a keyword.
    #[must_use]
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.args.base.keyword.push(keyword.into());
        self
    }

    /// Set the document type.
    #[must_use]
    pub fn doctype(mut self, doctype: impl Into<String>) -> Self {
        self.args.base.doctype = Some(doctype.into());
        self
    }

    /// Set the structured identifier.
    #[must_use]
    pub fn structuredidentifier(mut self, sid: StructuredIdentifier) -> Self {
        self.args.base.structuredidentifier = Some(sid);
        self
    }

    /// Set the drafting committee.
    #[must_use]
    pub fn committee(mut self, committee: CommitteeArgs) -> Self {
        self.args.committee = Some(committee);
        self
    }

    /// Add a raw classification code.
    #[must_use]
    pub fn ccs(mut self, code: impl Into<String>) -> Self {
        self.args.ccs.get_or_insert_with(Vec::new).push(code.into());
        self
    }

    /// Set the standard type.
    #[must_use]
    pub fn gbtype(mut self, gbtype: GbStandardTypeArgs) -> Self {
        self.args.gbtype = Some(gbtype);
        self
    }

    /// Set the topic.
    #[must_use]
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.args.topic = Some(topic.into());
        self
    }

    /// Set an explicit plan number.
    #[must_use]
    pub fn gbplannumber(mut self, gbplannumber: impl Into<String>) -> Self {
        self.args.gbplannumber = Some(gbplannumber.into());
        self
    }

    /// Arguments collected so far.
    #[must_use]
    pub fn args(&self) -> &GbBibliographicItemArgs {
        &self.args
    }

    /// Construct the item.
    ///
    /// # Errors
    ///
    /// See [`GbBibliographicItem::new`].
    pub fn build(self, registry: &dyn CcsRegistry) -> Result<GbBibliographicItem> {
        GbBibliographicItem::new(self.args, registry)
    }
}
