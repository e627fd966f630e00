#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Micro-benchmarks for the query item container:
/// - parsing a query string into items
/// - raw and typed reads
/// - in-place updates
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use query_wrangler::{QueryKey, QueryWrangler};

const QUERY: &str = "str=foo%20bar&num=42&flag=1&flag2=true&page=7&sort=name&dir=asc";

const NUM: QueryKey<i64> = QueryKey::new("num");
const SORT: QueryKey<String> = QueryKey::new("sort");

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_query_string", |b| {
        b.iter(|| QueryWrangler::parse(black_box(QUERY)));
    });
}

fn bench_get(c: &mut Criterion) {
    let wrangler = QueryWrangler::parse(QUERY);

    c.bench_function("get_raw", |b| {
        b.iter(|| wrangler.get_raw(black_box("sort")));
    });

    c.bench_function("get_typed_int", |b| {
        b.iter(|| wrangler.get(black_box(NUM)));
    });

    c.bench_function("get_typed_string", |b| {
        b.iter(|| wrangler.get(black_box(SORT)));
    });
}

fn bench_set(c: &mut Criterion) {
    c.bench_function("set_existing_in_place", |b| {
        let mut wrangler = QueryWrangler::parse(QUERY);
        b.iter(|| wrangler.set(black_box(NUM), black_box(84)));
    });

    c.bench_function("serialize", |b| {
        let wrangler = QueryWrangler::parse(QUERY);
        b.iter(|| black_box(&wrangler).serialize());
    });
}

criterion_group!(benches, bench_parse, bench_get, bench_set);
criterion_main!(benches);
