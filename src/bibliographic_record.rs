//! Core trait for all bibliographic item types.
//!
//! This module defines the `BibliographicRecord` trait that provides a common
//! interface for the generic [`BibliographicItem`] and its specializations
//! such as [`GbBibliographicItem`](crate::GbBibliographicItem).

use std::io::Write;

use quick_xml::Writer;

use crate::bibliographic_item::BibliographicItem;
use crate::config::XmlConfig;
use crate::docid::{DocumentIdentifier, StructuredIdentifier};
use crate::error::Result;
use crate::xml::{into_string, new_writer};

/// Common trait for all bibliographic item types.
///
/// This trait defines the operations that every item supports:
/// - Access to the shared base fields
/// - Identifier formatting for cross-reference keys
/// - XML rendering into an open writer or as a standalone string
///
/// # Examples
///
/// ```
/// use gbbib::{BibliographicItem, BibliographicItemArgs, BibliographicRecord, XmlConfig};
///
/// fn render<T: BibliographicRecord>(record: &T) -> String {
///     record.to_xml(&XmlConfig::default()).unwrap()
/// }
///
/// let item = BibliographicItem::new(BibliographicItemArgs::default()).unwrap();
/// assert_eq!(render(&item), "<bibdata></bibdata>");
/// ```
pub trait BibliographicRecord {
    /// The shared base fields.
    fn bibitem(&self) -> &BibliographicItem;

    /// Build a whitespace-free identifier string for use as a cross-reference key.
    ///
    /// Returns `None` in attribute mode when the item renders no `id`
    /// attribute, and when no usable identifier exists.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier to format; defaults to the first non-DOI identifier
    /// * `attribute` - Whether the key is wanted for the `id` attribute
    /// * `delim` - Accepted for interface compatibility, ignored
    fn makeid(
        &self,
        id: Option<&DocumentIdentifier>,
        attribute: bool,
        delim: &str,
    ) -> Option<String>;

    /// Append this item's XML to an open writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>, config: &XmlConfig) -> Result<()>;

    /// Render this item as a standalone XML document and return the text of
    /// its root element.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn to_xml(&self, config: &XmlConfig) -> Result<String> {
        let mut writer = new_writer(config);
        self.write_xml(&mut writer, config)?;
        into_string(writer)
    }

    /// Document identifiers, in input order.
    fn docidentifier(&self) -> &[DocumentIdentifier] {
        self.bibitem().docidentifier()
    }

    /// Language codes.
    fn language(&self) -> &[String] {
        self.bibitem().language()
    }

    /// Script codes.
    fn script(&self) -> &[String] {
        self.bibitem().script()
    }

    /// Structured identifier, if any.
    fn structuredidentifier(&self) -> Option<&StructuredIdentifier> {
        self.bibitem().structuredidentifier()
    }

    /// Content of the first title, optionally restricted to a language.
    fn title(&self, language: Option<&str>) -> Option<&str> {
        self.bibitem()
            .titles()
            .iter()
            .find(|t| language.map_or(true, |lang| t.language.as_deref() == Some(lang)))
            .map(|t| t.content.as_str())
    }
}
