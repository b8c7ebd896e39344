use criterion::{Criterion, criterion_group, criterion_main};
use marginalia_engine::{PageRenderer, render_to_string};
mod common;

fn bench_render_content(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(20);

    let content = common::generate_journal_content(200);
    group.bench_function("render_content", |b| {
        b.iter(|| render_to_string(std::hint::black_box(&content)));
    });

    let nested = common::generate_nested_notes(64);
    group.bench_function("nested_notes", |b| {
        b.iter(|| render_to_string(std::hint::black_box(&nested)));
    });

    let renderer = PageRenderer::default();
    group.bench_function("full_page", |b| {
        b.iter(|| {
            renderer.render(
                "Benchmark",
                Some("2024-03-05"),
                std::hint::black_box(&content),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_render_content);
criterion_main!(benches);
