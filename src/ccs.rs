//! Chinese Standard Classification (CCS) codes and registries.
//!
//! GB items carry classification codes resolved from raw strings through a
//! [`CcsRegistry`]. The registry is injected into construction so callers can
//! swap in their own code table (or a fake in tests).
//!
//! # Examples
//!
//! ```
//! use gbbib::ccs::{CcsRegistry, MemoryCcsRegistry};
//!
//! let registry = MemoryCcsRegistry::builtin();
//! let ccs = registry.fetch("L").unwrap();
//! assert_eq!(ccs.code, "L");
//! assert!(registry.fetch("nope").is_err());
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BibError, Result};

/// A resolved classification code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ccs {
    /// Code (e.g. "A01").
    pub code: String,
    /// Short description.
    pub description: String,
    /// Description including the parent categories.
    #[serde(default)]
    pub description_full: Option<String>,
}

impl Ccs {
    /// Create a code with a short description.
    #[must_use]
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Ccs {
            code: code.into(),
            description: description.into(),
            description_full: None,
        }
    }
}

/// Lookup of raw classification codes.
pub trait CcsRegistry {
    /// Resolve a raw code.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::CodeNotFound`] when the code has no entry.
    fn fetch(&self, code: &str) -> Result<Ccs>;
}

/// First-level CCS categories.
const CATEGORIES: &[(&str, &str)] = &[
    ("A", "综合"),
    ("B", "农业、林业"),
    ("C", "医药、卫生、劳动保护"),
    ("D", "矿业"),
    ("E", "石油"),
    ("F", "能源、核技术"),
    ("G", "化工"),
    ("H", "冶金"),
    ("J", "机械"),
    ("K", "电工"),
    ("L", "电子元器件与信息技术"),
    ("M", "通信、广播"),
    ("N", "仪器、仪表"),
    ("P", "工程建设"),
    ("Q", "建材"),
    ("R", "公路、水路运输"),
    ("S", "铁路"),
    ("T", "车辆"),
    ("U", "船舶"),
    ("V", "航空、航天"),
    ("W", "纺织"),
    ("X", "食品"),
    ("Y", "轻工、文化与生活用品"),
    ("Z", "环境保护"),
];

/// In-memory registry preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryCcsRegistry {
    codes: IndexMap<String, Ccs>,
}

impl MemoryCcsRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the first-level CCS categories.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (code, description) in CATEGORIES {
            registry.insert(Ccs::new(*code, *description));
        }
        registry
    }

    /// Add or replace a code.
    pub fn insert(&mut self, ccs: Ccs) {
        self.codes.insert(ccs.code.clone(), ccs);
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, ccs: Ccs) -> Self {
        self.insert(ccs);
        self
    }

    /// Number of codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true when the registry holds no codes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over codes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Ccs> {
        self.codes.values()
    }

    /// Load codes from CSV with a `code,description[,description_full]` header.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::CsvError`] for malformed input.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut registry = Self::new();
        for row in csv_reader.deserialize() {
            let ccs: Ccs = row?;
            registry.insert(ccs);
        }
        debug!(codes = registry.len(), "loaded CCS registry from CSV");
        Ok(registry)
    }

    /// Load codes from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be opened, or a CSV error for
    /// malformed content.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_csv_reader(File::open(path)?)
    }

    /// Load codes from a JSON array of objects.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::JsonError`] for malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        let codes: Vec<Ccs> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for ccs in codes {
            registry.insert(ccs);
        }
        Ok(registry)
    }
}

impl CcsRegistry for MemoryCcsRegistry {
    fn fetch(&self, code: &str) -> Result<Ccs> {
        let code = code.trim();
        match self.codes.get(code) {
            Some(ccs) => {
                debug!(code, "resolved CCS code");
                Ok(ccs.clone())
            },
            None => Err(BibError::CodeNotFound(code.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_categories() {
        let registry = MemoryCcsRegistry::builtin();
        assert_eq!(registry.len(), 24);
        assert_eq!(registry.fetch("A").unwrap().description, "综合");
        assert_eq!(registry.iter().last().unwrap().code, "Z");
    }

    #[test]
    fn test_fetch_trims_input() {
        let registry = MemoryCcsRegistry::new().with(Ccs::new("A01", "技术管理"));
        assert_eq!(registry.fetch(" A01 ").unwrap().code, "A01");
    }

    #[test]
    fn test_fetch_unknown() {
        let registry = MemoryCcsRegistry::new();
        let err = registry.fetch("Z.9").unwrap_err();
        assert!(matches!(err, BibError::CodeNotFound(ref c) if c == "Z.9"));
        assert_eq!(err.to_string(), "code not found: Z.9");
    }

    #[test]
    fn test_from_csv_reader() {
        let data =
            "code,description,description_full\nA01,技术管理,综合 - 技术管理\nL70,计算机,\n";
        let registry = MemoryCcsRegistry::from_csv_reader(data.as_bytes()).unwrap();
        assert_eq!(registry.len(), 2);
        let a01 = registry.fetch("A01").unwrap();
        assert_eq!(a01.description_full.as_deref(), Some("综合 - 技术管理"));
        assert_eq!(registry.fetch("L70").unwrap().description, "计算机");
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{"code": "A.1", "description": "Foo"}]"#;
        let registry = MemoryCcsRegistry::from_json(json).unwrap();
        assert_eq!(registry.fetch("A.1").unwrap(), Ccs::new("A.1", "Foo"));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            MemoryCcsRegistry::from_json("{"),
            Err(BibError::JsonError(_))
        ));
    }
}
