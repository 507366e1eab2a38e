//! Criterion micro-benchmarks for string building and formatting.

use std::fmt::Write;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ferrule_bench::integer_samples;
use ferrule_text::{sb_format, Arg, StringBuilder};

/// Benchmark: append 64 integers of mixed width, then clear.
fn bench_builder_write_int(c: &mut Criterion) {
    let samples = integer_samples(7, 64);
    let mut buf = [0u8; 2048];
    let mut sb = StringBuilder::new(&mut buf);

    c.bench_function("builder_write_int", |b| {
        b.iter(|| {
            for &v in &samples {
                sb.write_int(v).unwrap();
                sb.write_byte(b' ').unwrap();
            }
            black_box(sb.len());
            sb.clear();
        });
    });
}

/// Benchmark: printf-style formatting of a short record.
fn bench_builder_format(c: &mut Criterion) {
    let mut buf = [0u8; 256];
    let mut sb = StringBuilder::new(&mut buf);

    c.bench_function("builder_format", |b| {
        b.iter(|| {
            sb_format!(sb, "%s=%d (%u%%) [%c]", "latency", -1234, 98u32, b'x').unwrap();
            black_box(sb.len());
            sb.clear();
        });
    });
}

/// Benchmark: the same record through `std::fmt`, for comparison.
fn bench_builder_std_fmt(c: &mut Criterion) {
    let mut buf = [0u8; 256];
    let mut sb = StringBuilder::new(&mut buf);

    c.bench_function("builder_std_fmt", |b| {
        b.iter(|| {
            write!(sb, "{}={} ({}%) [{}]", "latency", -1234, 98u32, 'x').unwrap();
            black_box(sb.len());
            sb.clear();
        });
    });
}

/// Benchmark: a failing format call, measuring rollback.
fn bench_builder_format_rollback(c: &mut Criterion) {
    let mut buf = [0u8; 24];
    let mut sb = StringBuilder::new(&mut buf);
    let args = [Arg::from("a long enough value"), Arg::Int(i64::MIN)];

    c.bench_function("builder_format_rollback", |b| {
        b.iter(|| black_box(sb.format("%s %d", &args).is_err()));
    });
}

criterion_group!(
    benches,
    bench_builder_write_int,
    bench_builder_format,
    bench_builder_std_fmt,
    bench_builder_format_rollback
);
criterion_main!(benches);
