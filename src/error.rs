//! Error types for GB bibliographic operations.
//!
//! This module provides the [`BibError`] type for all library operations
//! and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all GB bibliographic operations.
///
/// Represents the conditions that can occur while constructing, validating,
/// rendering, or parsing a bibliographic item.
#[derive(Error, Debug)]
pub enum BibError {
    /// A language code outside the accepted set.
    #[error("invalid language: {0}")]
    InvalidLanguage(String),

    /// A script code outside the accepted set.
    #[error("invalid script: {0}")]
    InvalidScript(String),

    /// A classification code with no registry entry.
    #[error("code not found: {0}")]
    CodeNotFound(String),

    /// A mandatory construction argument was not supplied.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A technical committee type outside the accepted set.
    #[error("invalid committee type: {0}")]
    InvalidCommitteeType(String),

    /// Error indicating an invalid field value.
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// Error during parsing of XML input.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rendered output was not valid UTF-8.
    #[error("Encoding error: {0}")]
    EncodingError(String),

    /// Error raised by the XML writer.
    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// Error decoding JSON input.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error decoding CSV input.
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// IO error from the underlying source/destination.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`BibError`].
pub type Result<T> = std::result::Result<T, BibError>;
