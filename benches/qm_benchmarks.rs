//! Benchmarks for the tabular minimiser, PLA parsing and the Hamming codec
//!
//! Functions are generated from a fixed seed so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kmap_hamming::hamming::{check, encode, Parity};
use kmap_hamming::pla::{pla_string, read_pla_str};
use kmap_hamming::{simplify, ToolkitConfig};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Ones and don't-cares for a pseudo-random function of `num_vars` inputs
fn sample_function(num_vars: usize, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let mut rng = Pcg64::seed_from_u64(seed);
    let mut ones = Vec::new();
    let mut dont_cares = Vec::new();
    for index in 0..1usize << num_vars {
        match rng.gen_range(0..8) {
            0..=3 => ones.push(index),
            4 => dont_cares.push(index),
            _ => {}
        }
    }
    (ones, dont_cares)
}

/// Benchmark: minimisation cost as the variable count grows
fn bench_simplify(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplify");

    for num_vars in [4, 6, 8, 10] {
        let (ones, dont_cares) = sample_function(num_vars, 0xbeef);
        group.throughput(Throughput::Elements(ones.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("vars", num_vars),
            &(ones, dont_cares),
            |b, (ones, dont_cares)| {
                b.iter(|| {
                    let solution = simplify(num_vars, black_box(ones), black_box(dont_cares));
                    black_box(solution)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark: PLA text parsing into a K-map state
fn bench_pla_parse(c: &mut Criterion) {
    let config = ToolkitConfig::default();
    let mut group = c.benchmark_group("pla_parse");

    for num_vars in [6, 10] {
        let (ones, dont_cares) = sample_function(num_vars, 0xfeed);
        let Ok(text) = pla_string(&config, num_vars, &ones, &dont_cares) else {
            continue;
        };
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("vars", num_vars), &text, |b, text| {
            b.iter(|| black_box(read_pla_str(black_box(text))));
        });
    }

    group.finish();
}

/// Benchmark: encode and check for growing data widths
fn bench_hamming(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming");

    for data_bits in [4, 11, 26, 57] {
        let mut rng = Pcg64::seed_from_u64(data_bits as u64);
        let data: Vec<bool> = (0..data_bits).map(|_| rng.gen()).collect();
        group.bench_with_input(BenchmarkId::new("encode", data_bits), &data, |b, data| {
            b.iter(|| black_box(encode(black_box(data), Parity::Even)));
        });

        if let Ok(encoded) = encode(&data, Parity::Even) {
            let mut received = encoded.bits().to_vec();
            received[2] = !received[2];
            group.bench_with_input(
                BenchmarkId::new("check", data_bits),
                &received,
                |b, received| {
                    b.iter(|| black_box(check(black_box(received), Parity::Even)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_simplify, bench_pla_parse, bench_hamming);
criterion_main!(benches);
