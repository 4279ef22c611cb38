//! Benchmarks for huepick operations.
//!
//! Run with: `cargo bench -p huepick-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use huepick_bench::{colors, screenshot};
use huepick_color::{
    ColorModel, Deficiency, LabContext, ModelColor, NamingService, TransformationChain, convert,
    model_text, rgb_to_lab, lab_to_rgb,
};
use huepick_core::Point;
use huepick_sample::{Falloff, compute_sample_rect, sample};

/// Falloff-weighted sampling at increasing oversample radii.
fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    let shot = screenshot();

    for radius in [0u32, 2, 8, 16] {
        let region = compute_sample_rect(Point::new(960, 540), shot.rect(), radius).unwrap();
        group.throughput(Throughput::Elements(region.rect.area()));
        for falloff in [Falloff::Linear, Falloff::Exponential] {
            group.bench_with_input(
                BenchmarkId::new(falloff.name(), radius),
                &region,
                |b, r| b.iter(|| sample(black_box(&shot), r, falloff).unwrap()),
            );
        }
    }

    group.finish();
}

/// Model conversions through the RGB pivot.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    let ctx = LabContext::d50();
    let input = colors(10_000);
    group.throughput(Throughput::Elements(input.len() as u64));

    group.bench_function("rgb_lab_rgb", |b| {
        b.iter(|| {
            input
                .iter()
                .map(|&c| lab_to_rgb(rgb_to_lab(black_box(c), &ctx), &ctx))
                .collect::<Vec<_>>()
        })
    });

    for model in [ColorModel::Hsl, ColorModel::Cmyk, ColorModel::Lch] {
        group.bench_with_input(BenchmarkId::new("to", model.name()), &model, |b, &m| {
            b.iter(|| {
                input
                    .iter()
                    .map(|&c| convert(ModelColor::Rgb(black_box(c)), m, &ctx))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Per-tick derived work: naming, formatting, display chain.
fn bench_tick_outputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_outputs");
    let ctx = LabContext::d50();
    let names = NamingService::css();
    let chain = TransformationChain::new()
        .vision_deficiency(Deficiency::Deuteranomaly, 0.7)
        .gamma(1.8);
    let input = colors(256);

    group.bench_function("name", |b| {
        b.iter(|| input.iter().map(|&c| names.name(black_box(c), true)).collect::<Vec<_>>())
    });
    group.bench_function("model_text", |b| {
        b.iter(|| input.iter().map(|&c| model_text(black_box(c), &ctx)).collect::<Vec<_>>())
    });
    group.bench_function("chain", |b| {
        b.iter(|| input.iter().map(|&c| chain.apply(black_box(c))).collect::<Vec<_>>())
    });

    group.finish();
}

criterion_group!(benches, bench_sample, bench_convert, bench_tick_outputs);
criterion_main!(benches);
