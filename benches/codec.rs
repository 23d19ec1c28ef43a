//! Benchmarks for byte-order conversion and buffer access.
//!
//! Covers the layers protocol code sits on:
//! - Raw swaps (intrinsic vs. portable fallback)
//! - Checked reads through the io functions
//! - Cursor pop/push over a full header, checked and unchecked
//! - Chained serialize/deserialize

extern crate endiancodec;

use criterion::{criterion_group, criterion_main, Criterion};
use endiancodec::endian::swap::{native, portable};
use endiancodec::prelude::*;
use std::hint::black_box;

/// Benchmark the intrinsic and the shift-and-mask 64-bit swap side by side.
fn bench_swap64(c: &mut Criterion) {
    c.bench_function("swap64_native", |b| {
        b.iter(|| native::swap64(black_box(0x0102_0304_0506_0708)));
    });
    c.bench_function("swap64_portable", |b| {
        b.iter(|| portable::swap64(black_box(0x0102_0304_0506_0708)));
    });
}

/// Benchmark reading every 4-byte word of a 4 KiB buffer as big endian.
fn bench_read_be_u32(c: &mut Criterion) {
    let data: Vec<u8> = (0..4096_u32).map(|i| (i % 251) as u8).collect();

    c.bench_function("read_be_u32_4k", |b| {
        b.iter(|| {
            let mut offset = 0;
            let mut acc = 0_u32;
            while let Ok(value) = read_be_at::<u32>(black_box(&data), &mut offset) {
                acc = acc.wrapping_add(value);
            }
            black_box(acc)
        });
    });
}

/// Benchmark decoding a 23-byte header with checked pops.
fn bench_reader_header(c: &mut Criterion) {
    let frame = [
        0xFE, 0xED, 0xFA, 0xCE, 0x03, 0x80, 0x01, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x01,
        0x90, 0x00, 0x00, 0x00, 0x01, 0x3F, 0x40, 0x00, 0x00,
    ];

    c.bench_function("reader_header_checked", |b| {
        b.iter(|| {
            let mut reader = Reader::new(black_box(&frame));
            let magic = reader.pop_be32().unwrap();
            let version = reader.pop_be8().unwrap();
            let flags = reader.pop_be16().unwrap();
            let length = reader.pop_be32().unwrap();
            let timestamp = reader.pop_be64().unwrap();
            let ratio = reader.read_be::<f32>().unwrap();
            black_box((magic, version, flags, length, timestamp, ratio))
        });
    });

    c.bench_function("reader_header_unchecked", |b| {
        b.iter(|| {
            let mut reader = Reader::new(black_box(&frame));
            reader.ensure_remaining(23).unwrap();
            // SAFETY: 23 bytes were validated above.
            unsafe {
                black_box((
                    reader.pop_unchecked::<u32>(Endian::Big),
                    reader.pop_unchecked::<u8>(Endian::Big),
                    reader.pop_unchecked::<u16>(Endian::Big),
                    reader.pop_unchecked::<u32>(Endian::Big),
                    reader.pop_unchecked::<u64>(Endian::Big),
                    reader.pop_unchecked::<f32>(Endian::Big),
                ))
            }
        });
    });
}

/// Benchmark encoding the same header with pushes.
fn bench_writer_header(c: &mut Criterion) {
    let mut frame = [0u8; 23];

    c.bench_function("writer_header_checked", |b| {
        b.iter(|| {
            let mut writer = Writer::new(&mut frame);
            writer.push_be32(black_box(0xFEED_FACE)).unwrap();
            writer.push_be8(black_box(3)).unwrap();
            writer.push_be16(black_box(0x8001)).unwrap();
            writer.push_be32(black_box(512)).unwrap();
            writer.push_be64(black_box(0x0000_0190_0000_0001)).unwrap();
            writer.write_be(black_box(0.75_f32)).unwrap();
            black_box(writer.pos())
        });
    });
}

/// Benchmark a chained encode/decode of mixed-width values in network order.
fn bench_serialize_chain(c: &mut Criterion) {
    let mut buf = [0u8; 14];

    c.bench_function("serialize_chain", |b| {
        b.iter(|| {
            let rest = encode(&mut buf, black_box(0xABCD_u16), Endian::NETWORK).unwrap();
            let rest = encode(rest, black_box(-2_i32), Endian::NETWORK).unwrap();
            encode(rest, black_box(1.0_f64), Endian::NETWORK).unwrap();

            let (half, rest) = decode::<u16>(&buf, Endian::NETWORK).unwrap();
            let (word, rest) = decode::<i32>(rest, Endian::NETWORK).unwrap();
            let (float, _) = decode::<f64>(rest, Endian::NETWORK).unwrap();
            black_box((half, word, float))
        });
    });
}

criterion_group!(
    benches,
    bench_swap64,
    bench_read_be_u32,
    bench_reader_header,
    bench_writer_header,
    bench_serialize_chain,
);
criterion_main!(benches);
