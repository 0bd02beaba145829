//! # Decoder Benchmarks
//!
//! Measures CHP decoding for gate chains, nested chips and CSV containers.
//!
//! Run: `cargo bench --bench decode_bench`

use chp_core::{ChipBuilder, DecodeOptions, FormatHint, PinDirection, csv_container, decode, decode_with};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// `n` AND gates, each driving the first input of the next; the last drives pin 8
fn gate_chain(n: usize) -> Vec<u8> {
    let mut b = ChipBuilder::new([1, 0, 0, 0, 0, 0, 0, 0]);
    for i in 0..n {
        // AND with one output is 6 bytes; the next gate's first input follows its opcode
        let next_input = b.position() + 7;
        let target = if i + 1 == n { 0x0004 } else { next_input };
        b.and(0, 1, &[target]);
    }
    b.end(&[&[0x0000, 0x0009]]);
    b.build()
}

/// `depth` chips nested inside one another, each holding a NOT gate
fn nested_tower(depth: usize) -> Vec<u8> {
    let mut chip = {
        let mut b = ChipBuilder::new([0; 8]);
        b.not(0, &[0x0000]).end(&[]);
        b.build()
    };
    for _ in 0..depth {
        let mut b = ChipBuilder::new([0; 8]);
        b.nested(&chip).not(1, &[0x0009]).end(&[&[0x0000, 0x0009]]);
        chip = b.build();
    }
    chip
}

fn bench_gate_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_gate_chain");
    let options = DecodeOptions::default().with_format(FormatHint::Chp);

    for n in [8usize, 64, 512] {
        let bytes = gate_chain(n);
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &bytes, |b, bytes| {
            b.iter(|| black_box(decode_with(bytes, &options).unwrap()))
        });
    }

    group.finish();
}

fn bench_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_nested");

    for depth in [1usize, 8, 32] {
        let bytes = nested_tower(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &bytes, |b, bytes| {
            b.iter(|| black_box(decode(bytes).unwrap()))
        });
    }

    group.finish();
}

fn bench_csv(c: &mut Criterion) {
    let csv = csv_container(
        &gate_chain(64),
        [PinDirection::In; 8],
        &["CHAIN", "64 AND gates in a row."],
    );

    c.bench_function("decode_csv_container", |b| {
        b.iter(|| black_box(decode(&csv).unwrap()))
    });
}

criterion_group!(benches, bench_gate_chain, bench_nested, bench_csv);

criterion_main!(benches);
