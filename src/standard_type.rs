//! GB standard type: scope, prefix, mandate and topic.
//!
//! Every part is optional. Values outside the known keyword sets are kept as
//! given and reported through `tracing`, so records from newer catalogues
//! still load.

use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::xml::write_text_element;

/// Known scopes.
pub const SCOPES: &[&str] = &[
    "national",
    "sector",
    "professional",
    "local",
    "enterprise",
    "social-group",
];

/// Known mandates.
pub const MANDATES: &[&str] = &["mandatory", "recommended", "guidelines"];

/// Known topics.
pub const TOPICS: &[&str] = &[
    "basic",
    "product",
    "method",
    "management-technology",
    "safety",
    "health",
    "environment-protection",
    "sanitation",
    "other",
];

/// Raw standard type input as it appears in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GbStandardTypeArgs {
    /// Scope keyword.
    pub scope: Option<String>,
    /// Identifier prefix (e.g. "GB", "GB/T").
    pub prefix: Option<String>,
    /// Mandate keyword.
    pub mandate: Option<String>,
    /// Topic keyword.
    pub topic: Option<String>,
}

/// Standard type of a GB item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GbStandardType {
    scope: Option<String>,
    prefix: Option<String>,
    mandate: Option<String>,
    topic: Option<String>,
}

impl GbStandardType {
    /// Build from optional raw input. Absent input yields an empty type.
    #[must_use]
    pub fn new(args: Option<GbStandardTypeArgs>) -> Self {
        let args = args.unwrap_or_default();
        check_keyword("scope", args.scope.as_deref(), SCOPES);
        check_keyword("mandate", args.mandate.as_deref(), MANDATES);
        check_keyword("topic", args.topic.as_deref(), TOPICS);
        GbStandardType {
            scope: args.scope,
            prefix: args.prefix,
            mandate: args.mandate,
            topic: args.topic,
        }
    }

    /// Scope keyword.
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Identifier prefix.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Mandate keyword.
    #[must_use]
    pub fn mandate(&self) -> Option<&str> {
        self.mandate.as_deref()
    }

    /// Topic keyword.
    #[must_use]
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    /// Returns true when no part is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scope.is_none()
            && self.prefix.is_none()
            && self.mandate.is_none()
            && self.topic.is_none()
    }

    /// Append the `<gbtype>` element.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        if self.is_empty() {
            writer.write_event(Event::Empty(BytesStart::new("gbtype")))?;
            return Ok(());
        }
        writer.write_event(Event::Start(BytesStart::new("gbtype")))?;
        for (name, value) in [
            ("gbscope", &self.scope),
            ("gbprefix", &self.prefix),
            ("gbmandate", &self.mandate),
            ("gbtopic", &self.topic),
        ] {
            if let Some(value) = value {
                write_text_element(writer, name, value)?;
            }
        }
        writer.write_event(Event::End(BytesEnd::new("gbtype")))?;
        Ok(())
    }
}

fn check_keyword(field: &str, value: Option<&str>, known: &[&str]) {
    if let Some(value) = value {
        if !known.contains(&value) {
            warn!(field, value, "unknown GB standard type keyword");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(gbtype: &GbStandardType) -> String {
        let mut writer = Writer::new(Vec::new());
        gbtype.write_xml(&mut writer).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_absent_input_yields_empty_type() {
        let gbtype = GbStandardType::new(None);
        assert!(gbtype.is_empty());
        assert_eq!(render(&gbtype), "<gbtype/>");
    }

    #[test]
    fn test_full_type_xml() {
        let gbtype = GbStandardType::new(Some(GbStandardTypeArgs {
            scope: Some("national".to_string()),
            prefix: Some("GB".to_string()),
            mandate: Some("mandatory".to_string()),
            topic: Some("basic".to_string()),
        }));
        assert_eq!(
            render(&gbtype),
            concat!(
                "<gbtype><gbscope>national</gbscope><gbprefix>GB</gbprefix>",
                "<gbmandate>mandatory</gbmandate><gbtopic>basic</gbtopic></gbtype>"
            )
        );
    }

    #[test]
    fn test_unknown_keyword_is_kept() {
        let gbtype = GbStandardType::new(Some(GbStandardTypeArgs {
            scope: Some("galactic".to_string()),
            ..Default::default()
        }));
        assert_eq!(gbtype.scope(), Some("galactic"));
        assert_eq!(render(&gbtype), "<gbtype><gbscope>galactic</gbscope></gbtype>");
    }
}
