//! Micro-benchmarks for the regex-backed checks and the aggregate.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fieldcheck::Validator;

fn bench_domain(c: &mut Criterion) {
    c.bench_function("domain/valid", |b| {
        b.iter(|| {
            let mut v = Validator::new();
            v.domain("host", black_box("some.subdomain.example.com"), None);
            v.has_errors()
        });
    });

    c.bench_function("domain/invalid", |b| {
        b.iter(|| {
            let mut v = Validator::new();
            v.domain("host", black_box("localhost"), None);
            v.has_errors()
        });
    });
}

fn bench_email(c: &mut Criterion) {
    c.bench_function("email/valid", |b| {
        b.iter(|| {
            let mut v = Validator::new();
            v.email("email", black_box("user.name+tag@sub.example.com"), None)
        });
    });
}

fn bench_aggregate(c: &mut Criterion) {
    c.bench_function("aggregate/append_and_render", |b| {
        b.iter(|| {
            let mut v = Validator::new();
            for i in 0..8 {
                v.append(format!("field{i}"), "must be set");
            }
            black_box(v.to_string())
        });
    });
}

criterion_group!(benches, bench_domain, bench_email, bench_aggregate);
criterion_main!(benches);
