//! # Renderer Benchmarks
//!
//! Measures listing generation for decoded chips.
//!
//! Run: `cargo bench --bench render_bench`

use chp_core::{ChipBuilder, DecodeOptions, FormatHint, decode_with};
use chp_format::{RenderConfig, render, render_with_config};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn mixed_chip(n: usize) -> Vec<u8> {
    let mut b = ChipBuilder::new([1, 0, 1, 0, 1, 0, 1, 0]);
    for _ in 0..n {
        b.xor(0, 1, &[0x0004, 0x0005])
            .not(1, &[0x0006])
            .flip_flop([0, 1], [1, 0], &[0x0007], &[0x0000]);
    }
    b.end(&[&[0x0000, 0x0001, 0x0002], &[0x0003, 0x0004]]);
    b.build()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let options = DecodeOptions::default().with_format(FormatHint::Chp);
    let compact = RenderConfig::compact();

    for n in [4usize, 64] {
        let circuit = decode_with(&mixed_chip(n), &options).unwrap();

        group.bench_with_input(BenchmarkId::new("default", n), &circuit, |b, circuit| {
            b.iter(|| black_box(render(circuit)))
        });

        group.bench_with_input(BenchmarkId::new("compact", n), &circuit, |b, circuit| {
            b.iter(|| black_box(render_with_config(circuit, &compact)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render);

criterion_main!(benches);
