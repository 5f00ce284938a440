//! Integration tests for loading CCS registries from files.

use std::io::Write;

use gbbib::{BibError, CcsRegistry, GbBibliographicItem, MemoryCcsRegistry};

#[test]
fn test_registry_from_csv_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "code,description").unwrap();
    writeln!(file, "A01, 技术管理").unwrap();
    writeln!(file, "J04,基础标准与通用方法").unwrap();
    file.flush().unwrap();

    let registry = MemoryCcsRegistry::from_csv_path(file.path()).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.fetch("A01").unwrap().description, "技术管理");

    let item = GbBibliographicItem::builder()
        .ccs("J04")
        .ccs("A01")
        .build(&registry)
        .unwrap();
    assert_eq!(item.ccs()[0].description, "基础标准与通用方法");
}

#[test]
fn test_registry_missing_file() {
    let err = MemoryCcsRegistry::from_csv_path("/nonexistent/ccs.csv").unwrap_err();
    assert!(matches!(err, BibError::IoError(_)));
}

/// A registry that resolves every code, describing it by its own text.
struct EchoRegistry;

impl CcsRegistry for EchoRegistry {
    fn fetch(&self, code: &str) -> gbbib::Result<gbbib::Ccs> {
        Ok(gbbib::Ccs::new(code, format!("echo {code}")))
    }
}

#[test]
fn test_custom_registry_is_injected() {
    let item = GbBibliographicItem::builder()
        .ccs("anything")
        .build(&EchoRegistry)
        .unwrap();
    assert_eq!(item.ccs()[0].description, "echo anything");
}
