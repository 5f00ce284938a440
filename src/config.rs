//! Configuration options for XML rendering.
//!
//! This module provides the [`XmlConfig`] struct which controls the root element
//! and layout of rendered bibliographic items.

use std::fmt;

/// Root element used when rendering an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootElement {
    /// `<bibdata>`: full item description, including the `<ext>` block.
    #[default]
    Bibdata,
    /// `<bibitem>`: citation form, without the `<ext>` block.
    Bibitem,
}

impl fmt::Display for RootElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl RootElement {
    /// Returns the element name for this root.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Bibdata => "bibdata",
            Self::Bibitem => "bibitem",
        }
    }
}

/// Configuration for XML rendering.
///
/// # Examples
///
/// ```
/// use gbbib::config::{RootElement, XmlConfig};
///
/// // Default configuration (<bibdata> root, compact output)
/// let config = XmlConfig::default();
/// assert_eq!(config.root, RootElement::Bibdata);
///
/// // Citation form with two-space indentation
/// let config = XmlConfig {
///     root: RootElement::Bibitem,
///     indent: Some(2),
/// };
/// assert!(!config.is_bibdata());
/// ```
#[derive(Debug, Clone, Default)]
pub struct XmlConfig {
    /// Root element of the rendered item.
    ///
    /// Only [`RootElement::Bibdata`] renders the `<ext>` block, which is where
    /// the GB-specific elements live.
    pub root: RootElement,

    /// Indentation width in spaces. `None` (default) renders compact XML.
    pub indent: Option<usize>,
}

impl XmlConfig {
    /// Configuration for the `<bibitem>` citation form.
    #[must_use]
    pub fn bibitem() -> Self {
        Self {
            root: RootElement::Bibitem,
            ..Self::default()
        }
    }

    /// Returns true when the `<ext>` block is rendered.
    #[must_use]
    pub fn is_bibdata(&self) -> bool {
        self.root == RootElement::Bibdata
    }

    /// Returns a copy of this configuration with the given indent width.
    #[must_use]
    pub fn with_indent(mut self, width: usize) -> Self {
        self.indent = Some(width);
        self
    }
}
