//! Common test helpers and utilities shared across test suite.

use gbbib::{
    BibliographicDate, Ccs, CommitteeArgs, Contributor, DocumentIdentifier, GbBibliographicItem,
    GbBibliographicItemBuilder, GbStandardTypeArgs, MemoryCcsRegistry, StructuredIdentifier,
    TypedTitle,
};

/// Registry with the codes used across the test suite.
///
/// `A.1` resolves to "Foo"; `Z.9` is deliberately absent.
pub fn create_test_registry() -> MemoryCcsRegistry {
    MemoryCcsRegistry::builtin()
        .with(Ccs::new("A.1", "Foo"))
        .with(Ccs::new("A01", "技术管理"))
        .with(Ccs::new("L70", "计算机"))
}

/// Builder with the minimum a GB item usually carries.
#[allow(dead_code)]
pub fn create_test_builder() -> GbBibliographicItemBuilder {
    GbBibliographicItem::builder()
        .docidentifier(DocumentIdentifier::new("GB/T 20223-2006", "Chinese Standard"))
        .language("zh")
        .script("Hans")
}

/// Builder for a fully populated record.
#[allow(dead_code)]
pub fn create_realistic_builder() -> GbBibliographicItemBuilder {
    GbBibliographicItem::builder()
        .item_type("standard")
        .title(TypedTitle::new("title-main", "棉花 细绒棉").in_language("zh", "Hans"))
        .title(TypedTitle::new("title-main", "Cotton - Upland cotton").in_language("en", "Latn"))
        .docidentifier(DocumentIdentifier::new("GB 1103.1-2012", "Chinese Standard").primary())
        .docidentifier(DocumentIdentifier::new("10.1000/gb1103", "DOI"))
        .docnumber("1103.1")
        .date(BibliographicDate::on("published", "2012-12-31"))
        .contributor(Contributor {
            role: vec!["publisher".to_string()],
            name: "General Administration of Quality Supervision".to_string(),
            abbreviation: Some("AQSIQ".to_string()),
        })
        .edition("3")
        .language("zh")
        .language("en")
        .script("Hans")
        .script("Latn")
        .keyword("cotton")
        .doctype("standard")
        .structuredidentifier(StructuredIdentifier {
            id_type: Some("Chinese Standard".to_string()),
            project_number: Some("20080523-Q-469".to_string()),
            part: Some("1".to_string()),
            ..Default::default()
        })
        .committee(CommitteeArgs::new("technical", "SAC/TC 406"))
        .gbtype(GbStandardTypeArgs {
            scope: Some("national".to_string()),
            prefix: Some("GB".to_string()),
            mandate: Some("mandatory".to_string()),
            topic: Some("product".to_string()),
        })
        .ccs("A01")
        .ccs("L70")
}
