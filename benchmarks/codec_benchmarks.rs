#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Codec benchmarks: urlsync vs the url crate's form_urlencoded parser
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use url::form_urlencoded;
use urlsync::{MemoryHistory, QueryMap, RouteLocation, SearchParams, set_query_params};

const FILTER_QUERY: &str =
    "?category=12&price=10_200&color=red,blue&size=42&sort=price&direction=asc&page=3";

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    group.bench_function("urlsync_codec", |b| {
        b.iter(|| urlsync::decode(black_box(FILTER_QUERY)));
    });

    group.bench_function("urlsync_search_params", |b| {
        b.iter(|| SearchParams::parse(black_box(FILTER_QUERY)));
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            form_urlencoded::parse(black_box(&FILTER_QUERY.as_bytes()[1..]))
                .into_owned()
                .collect::<Vec<(String, String)>>()
        });
    });

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let map = urlsync::decode(FILTER_QUERY);
    let params = SearchParams::parse(FILTER_QUERY);
    let pairs: Vec<(String, String)> = form_urlencoded::parse(&FILTER_QUERY.as_bytes()[1..])
        .into_owned()
        .collect();

    group.bench_function("urlsync_codec", |b| {
        b.iter(|| urlsync::encode(black_box(&map)));
    });

    group.bench_function("urlsync_search_params", |b| {
        b.iter(|| black_box(&params).to_string());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            form_urlencoded::Serializer::new(String::new())
                .extend_pairs(black_box(&pairs))
                .finish()
        });
    });

    group.finish();
}

fn bench_set_query_params(c: &mut Criterion) {
    let location = RouteLocation::new("/men/shirts.html", FILTER_QUERY);
    let updates = QueryMap::from([("page", "4"), ("color", ""), ("brand", "acme")]);

    let start = format!("/men/shirts.html{FILTER_QUERY}");

    c.bench_function("set_query_params", |b| {
        b.iter(|| {
            let mut history = MemoryHistory::new(&start);
            set_query_params(black_box(&updates), &location, &mut history).unwrap();
            history
        });
    });
}

criterion_group!(benches, bench_decode, bench_encode, bench_set_query_params);
criterion_main!(benches);
