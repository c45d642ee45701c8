use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use wordcodes::ecc::hamming::HammingCode;

const PATTERN: u64 = 0xA5A5_5A5A_C3C3_3C3C;

fn benchmark_hamming_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_encode");

    for n_parity_bits in [3u32, 4, 5, 6] {
        let code = HammingCode::<u64>::new(n_parity_bits).unwrap();
        let data = PATTERN >> (u64::BITS - code.n_data_bits());

        group.bench_with_input(
            BenchmarkId::from_parameter(n_parity_bits),
            &data,
            |b, &data| {
                b.iter(|| black_box(code.encode(black_box(data)).unwrap()));
            },
        );
    }

    group.finish();
}

fn benchmark_hamming_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_decode");

    for n_parity_bits in [3u32, 4, 5, 6] {
        let code = HammingCode::<u64>::new(n_parity_bits).unwrap();
        let data = PATTERN >> (u64::BITS - code.n_data_bits());
        let encoded = code.encode(data).unwrap();

        group.bench_with_input(
            BenchmarkId::new("clean", n_parity_bits),
            &encoded,
            |b, &encoded| {
                b.iter(|| black_box(code.decode(black_box(encoded)).unwrap()));
            },
        );

        let corrupted = encoded ^ (1 << (code.n_encoded_bits() / 2));
        group.bench_with_input(
            BenchmarkId::new("corrupted", n_parity_bits),
            &corrupted,
            |b, &corrupted| {
                b.iter(|| black_box(code.decode(black_box(corrupted)).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_hamming_encode, benchmark_hamming_decode);
criterion_main!(benches);
