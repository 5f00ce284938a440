#![allow(missing_docs)]
//! Benchmarks for GB item construction and rendering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gbbib::{
    BibliographicRecord, Ccs, DocumentIdentifier, GbBibliographicItem, GbBibliographicItemBuilder,
    MemoryCcsRegistry, StructuredIdentifier, TypedTitle, XmlConfig,
};

fn registry() -> MemoryCcsRegistry {
    MemoryCcsRegistry::builtin().with(Ccs::new("A01", "技术管理"))
}

fn builder() -> GbBibliographicItemBuilder {
    GbBibliographicItem::builder()
        .item_type("standard")
        .title(TypedTitle::new("title-main", "信息技术").in_language("zh", "Hans"))
        .docidentifier(DocumentIdentifier::new("GB/T 20223-2006", "Chinese Standard"))
        .language("zh")
        .script("Hans")
        .structuredidentifier(StructuredIdentifier::with_project_number("20223"))
        .ccs("A01")
        .ccs("L")
}

/// Benchmark constructing a record.
fn benchmark_build(c: &mut Criterion) {
    let registry = registry();
    c.bench_function("build_gb_item", |b| {
        b.iter(|| builder().build(black_box(&registry)).unwrap());
    });
}

/// Benchmark rendering a record to a string.
fn benchmark_to_xml(c: &mut Criterion) {
    let item = builder().build(&registry()).unwrap();
    let config = XmlConfig::default();
    c.bench_function("gb_item_to_xml", |b| {
        b.iter(|| black_box(&item).to_xml(&config).unwrap());
    });
}

/// Benchmark parsing a rendered record.
fn benchmark_from_xml(c: &mut Criterion) {
    let registry = registry();
    let xml = builder()
        .build(&registry)
        .unwrap()
        .to_xml(&XmlConfig::default())
        .unwrap();
    c.bench_function("gb_item_from_xml", |b| {
        b.iter(|| GbBibliographicItem::from_xml(black_box(&xml), &registry).unwrap());
    });
}

criterion_group!(benches, benchmark_build, benchmark_to_xml, benchmark_from_xml);
criterion_main!(benches);
