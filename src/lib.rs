#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # GBBIB: GB Bibliographic Items
//!
//! A Rust library for building, validating, and rendering bibliographic
//! records of Chinese national standards (GB) as XML.
//!
//! ## Quick Start
//!
//! ```
//! use gbbib::{
//!     BibliographicRecord, DocumentIdentifier, GbBibliographicItem, GbStandardTypeArgs,
//!     MemoryCcsRegistry, TypedTitle, XmlConfig,
//! };
//!
//! # fn main() -> gbbib::Result<()> {
//! let registry = MemoryCcsRegistry::builtin();
//! let item = GbBibliographicItem::builder()
//!     .item_type("standard")
//!     .title(TypedTitle::new("title-main", "信息技术").in_language("zh", "Hans"))
//!     .docidentifier(DocumentIdentifier::new("GB/T 20223-2006", "Chinese Standard"))
//!     .gbtype(GbStandardTypeArgs {
//!         scope: Some("national".into()),
//!         prefix: Some("GB/T".into()),
//!         mandate: Some("recommended".into()),
//!         topic: None,
//!     })
//!     .ccs("L")
//!     .build(&registry)?;
//!
//! let xml = item.to_xml(&XmlConfig::default())?;
//! assert!(xml.starts_with(r#"<bibdata id="GB/T20223-2006" type="standard">"#));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`gb_bibliographic_item`]: The GB item, its construction arguments and builder
//! - [`gbxml`]: Rendering of the GB-specific `<ext>` content
//! - [`bibliographic_item`]: The generic base item and its XML rendering
//! - [`bibliographic_record`]: Trait shared by all item types
//! - [`ccs`]: CCS classification codes and registries
//! - [`standard_type`]: GB standard type (scope, prefix, mandate, topic)
//! - [`technical_committee`]: Drafting committees
//! - [`docid`]: Flat and structured document identifiers
//! - [`validation`]: Language and script validators
//! - [`xml`]: XML writing helpers and parsing
//! - [`config`]: Rendering configuration
//! - [`error`]: Error types and result type

pub mod bibliographic_item;
pub mod bibliographic_record;
pub mod ccs;
pub mod config;
pub mod docid;
pub mod error;
pub mod gb_bibliographic_item;
pub mod gbxml;
pub mod standard_type;
pub mod technical_committee;
pub mod validation;
pub mod xml;

pub use bibliographic_item::{
    BibliographicDate, BibliographicItem, BibliographicItemArgs, Contributor, CopyrightAssociation,
    DocumentStatus, FormattedString, ItemHooks, TypedTitle, TypedUri,
};
pub use bibliographic_record::BibliographicRecord;
pub use ccs::{Ccs, CcsRegistry, MemoryCcsRegistry};
pub use config::{RootElement, XmlConfig};
pub use docid::{DocumentIdentifier, StructuredIdentifier};
pub use error::{BibError, Result};
pub use gb_bibliographic_item::{
    GbBibliographicItem, GbBibliographicItemArgs, GbBibliographicItemBuilder,
};
pub use standard_type::{GbStandardType, GbStandardTypeArgs};
pub use technical_committee::{CommitteeArgs, CommitteeType, GbTechnicalCommittee};
