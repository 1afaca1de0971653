//! Performance benchmarks for BOM conversion.
//!
//! Run with: cargo bench --bench convert

use bomgraph::{Converter, SourceBom, SourceComponent, SourceRelationship};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Generate a source BOM with the specified number of components and a
/// relationship fan-out that forces the deduplicator to merge.
fn generate_bom(count: usize) -> SourceBom {
    let mut bom = SourceBom::new("bench-bom", "1");

    for i in 0..count {
        let comp = if i % 4 == 0 {
            SourceComponent::hardware(format!("hw-{i}"), format!("hardware {i}"))
        } else {
            SourceComponent::software(format!("sw-{i}"), format!("software {i}"))
                .with_description("benchmark component")
        };
        bom.components.push(comp);
    }

    for i in 0..count {
        let from = if i % 4 == 0 { format!("hw-{i}") } else { format!("sw-{i}") };
        for offset in 1..=3usize {
            let j = (i + offset) % count;
            let to = if j % 4 == 0 { format!("hw-{j}") } else { format!("sw-{j}") };
            bom.relationships
                .push(SourceRelationship::new(&from, &to, "related"));
        }
    }

    bom
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for size in [100, 1_000, 10_000] {
        let bom = generate_bom(size);
        let converter = Converter::new("1.5", "json");

        group.bench_with_input(BenchmarkId::from_parameter(size), &bom, |b, bom| {
            b.iter(|| {
                let doc = converter.convert(black_box(bom)).expect("convert");
                black_box(doc)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
