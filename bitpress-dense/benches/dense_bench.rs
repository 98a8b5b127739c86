//! Performance benchmarks for bitpress-dense
//!
//! Measures encode and decode throughput across alphabet widths and
//! stream sizes. The codec's ratio is fixed by the alphabet size
//! (bits per entry / 8), so only speed is measured here.

use bitpress_dense::{decode, encode};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Single symbol - zero-width codes, the output is header only
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Four symbols - 2-bit codes
    pub fn narrow(size: usize) -> Vec<u8> {
        (0..size).map(|i| b"ACGT"[i % 4]).collect()
    }

    /// Text-like data - a few dozen symbols, 6-bit codes
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! ";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk_size = remaining.min(text.len());
            data.extend_from_slice(&text[..chunk_size]);
        }
        data
    }

    /// Random data - full byte alphabet, 8-bit codes (worst case)
    pub fn random(size: usize) -> Vec<u8> {
        // Simple PRNG for reproducible random data
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }
}

/// Stream sizes from header-dominated to data-dominated
mod stream_sizes {
    /// 64KB stream
    pub const SMALL: usize = 64 * 1024;

    /// 256KB stream
    pub const MEDIUM: usize = 256 * 1024;

    /// 1MB stream
    pub const LARGE: usize = 1024 * 1024;
}

const SIZES: [(&str, usize); 3] = [
    ("small_64KB", stream_sizes::SMALL),
    ("medium_256KB", stream_sizes::MEDIUM),
    ("large_1MB", stream_sizes::LARGE),
];

const PATTERNS: [(&str, PatternGenerator); 4] = [
    ("uniform", test_data::uniform as PatternGenerator),
    ("narrow", test_data::narrow as PatternGenerator),
    ("text", test_data::text_like as PatternGenerator),
    ("random", test_data::random as PatternGenerator),
];

/// Benchmark encoding speed for different data sizes and alphabets
fn bench_encode_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_speed");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let data = generator(size);
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &data, |b, data| {
                b.iter(|| {
                    let encoded = encode(black_box(data)).unwrap();
                    black_box(encoded);
                });
            });
        }
    }

    group.finish();
}

/// Benchmark decoding speed
fn bench_decode_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_speed");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let original = generator(size);
            let encoded = encode(&original).unwrap();
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &encoded, |b, encoded| {
                b.iter(|| {
                    let decoded = decode(black_box(encoded)).unwrap();
                    black_box(decoded);
                });
            });
        }
    }

    group.finish();
}

/// Benchmark roundtrip (encode + decode)
fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let data = generator(size);
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &data, |b, data| {
                b.iter(|| {
                    let encoded = encode(black_box(data)).unwrap();
                    let decoded = decode(&encoded).unwrap();
                    black_box(decoded);
                });
            });
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encode_speed,
    bench_decode_speed,
    bench_roundtrip,
);
criterion_main!(benches);
