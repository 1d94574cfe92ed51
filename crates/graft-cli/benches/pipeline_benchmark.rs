//! Pipeline benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graft_codegen::emit_component;
use graft_convert::{convert, ConverterConfig};
use graft_core::Document;
use graft_tokens::{extract, ExtractOptions};

const SIMPLE_URL: &str = "https://www.figma.com/design/AbC123xyz/Mobile-App?node-id=123-456&t=abc";

const FIXTURE: &str = include_str!("../tests/fixtures/greeting.json");

fn load_fixture() -> Document {
    serde_json::from_str(FIXTURE).expect("fixture parses")
}

fn parse_reference(c: &mut Criterion) {
    c.bench_function("parse_reference", |b| {
        b.iter(|| graft_reference::parse(black_box(SIMPLE_URL)))
    });
}

fn extract_tokens(c: &mut Criterion) {
    let document = load_fixture();
    let options = ExtractOptions::default();
    c.bench_function("extract_tokens", |b| {
        b.iter(|| extract(black_box(document.pages()), &options))
    });
}

fn convert_and_emit(c: &mut Criterion) {
    let document = load_fixture();
    let config = ConverterConfig::default();
    let frame = &document.pages()[0].children[0];
    c.bench_function("convert_and_emit", |b| {
        b.iter(|| emit_component(&convert(black_box(frame), &config)))
    });
}

criterion_group!(benches, parse_reference, extract_tokens, convert_and_emit);
criterion_main!(benches);
