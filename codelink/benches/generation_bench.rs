use codelink::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn bench_extract_exports(c: &mut Criterion) {
    let text = std::fs::read_to_string(fixture_path("ui/dropdown-menu.tsx"))
        .expect("fixture should exist");

    c.bench_function("extract_exports", |b| {
        b.iter(|| codelink::extract_exports(black_box(&text)));
    });
}

fn bench_generate_dry_run(c: &mut Criterion) {
    let options = GenerateOptions {
        links_path: fixture_path("component-links.json"),
        components_dir: fixture_path("ui"),
        dry_run: true,
        ..Default::default()
    };

    c.bench_function("generate_dry_run", |b| {
        b.iter(|| CodeLinkCore::generate(black_box(&options)));
    });
}

criterion_group!(benches, bench_extract_exports, bench_generate_dry_run);
criterion_main!(benches);
