use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use sqlx_datetime::mssql::datetime::{
    BulkDatetimeEncoder, DatetimeDecoder, NativeDatetimeEncoder, StoredDatetime,
    TextualDatetimeParser,
};
use sqlx_datetime::mssql::{quantize, CalendarTimestamp};

fn bench_quantize(c: &mut Criterion) {
    c.bench_function("quantize 1000 ms offsets", |b| {
        b.iter(|| {
            for ms in 0..1000u32 {
                black_box(quantize(black_box(ms * 1_000_000)));
            }
        })
    });
}

fn bench_paths(c: &mut Criterion) {
    let value = match CalendarTimestamp::new(2025, 4, 11, 10, 30, 42, 999_000_000) {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    };

    let mut group = c.benchmark_group("encode");

    let parser = TextualDatetimeParser::new();
    group.bench_with_input(
        BenchmarkId::new("text", "2025-04-11T10:30:42.999Z"),
        "2025-04-11T10:30:42.999Z",
        |b, text| b.iter(|| parser.parse_stored(black_box(text))),
    );

    let native = NativeDatetimeEncoder::new();
    group.bench_with_input(BenchmarkId::new("native", &value), &value, |b, value| {
        b.iter(|| native.encode_stored(black_box(value)))
    });

    let bulk = BulkDatetimeEncoder::new();
    group.bench_with_input(BenchmarkId::new("bulk", &value), &value, |b, value| {
        let mut buf = Vec::with_capacity(9);
        b.iter(|| {
            buf.clear();
            bulk.encode_nullable(Some(black_box(value)), &mut buf)
        })
    });

    group.finish();

    let decoder = DatetimeDecoder::new();
    let stored = match StoredDatetime::new(45_756, 11_352_900) {
        Ok(stored) => stored,
        Err(e) => panic!("{e}"),
    };

    c.bench_function("decode", |b| b.iter(|| decoder.decode(black_box(stored))));
}

criterion_group!(benches, bench_quantize, bench_paths);
criterion_main!(benches);
