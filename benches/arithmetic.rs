//! Micro-benchmarks for the arithmetic engine and result rendering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use calculator::{format_double, Calculator, Demo};

fn bench_engine(c: &mut Criterion) {
    let calculator = Calculator::new();

    c.bench_function("add", |b| {
        b.iter(|| calculator.add(black_box(5.0), black_box(3.0)))
    });

    c.bench_function("subtract", |b| {
        b.iter(|| calculator.subtract(black_box(10.0), black_box(4.0)))
    });
}

fn bench_render(c: &mut Criterion) {
    c.bench_function("format_double", |b| {
        b.iter(|| format_double(black_box(12345678.25)))
    });

    let demo = Demo::new(Calculator::new());
    c.bench_function("demo_render", |b| b.iter(|| demo.render()));
}

criterion_group!(benches, bench_engine, bench_render);
criterion_main!(benches);
