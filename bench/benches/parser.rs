use criterion::{criterion_group, criterion_main, Criterion};
use defc::{lexer, parser};
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let input = bench::nested_input(200);
    let tokens = lexer::tokenize(&input).unwrap();

    c.bench_function("parser", |b| {
        b.iter(|| {
            let root = parser::parse(black_box(&tokens)).unwrap();
            black_box(root);
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
