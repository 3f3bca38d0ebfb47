// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmarks for keyword classification and priority scoring.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ff_core::classify::{detect_sentiment, detect_topic, detect_urgency};
use ff_core::{priority_score, Category, Classification, Urgency};

const INPUTS: [(&str, &str); 4] = [
    ("no_match", "Please consider adding a dark theme to the settings page"),
    ("early_match", "Critical outage, the payment system is down"),
    ("late_match", "The reports page could use a small layout improvement"),
    (
        "long",
        "We have been using the product for a while and overall it is fine, but when \
         exporting large reports the page becomes slow and sometimes the sync with the \
         accounting webhook fails without any error shown to the user, which is frustrating",
    ),
];

fn classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");
    for (name, text) in INPUTS {
        group.bench_with_input(BenchmarkId::new("urgency", name), text, |b, t| {
            b.iter(|| detect_urgency(t))
        });
        group.bench_with_input(BenchmarkId::new("sentiment", name), text, |b, t| {
            b.iter(|| detect_sentiment(t))
        });
        group.bench_with_input(BenchmarkId::new("topic", name), text, |b, t| {
            b.iter(|| detect_topic(t))
        });
        group.bench_with_input(BenchmarkId::new("all", name), text, |b, t| {
            b.iter(|| Classification::of(t))
        });
    }
    group.finish();
}

fn scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("priority_score");
    for (name, text) in INPUTS {
        group.bench_with_input(BenchmarkId::new("score", name), text, |b, t| {
            b.iter(|| priority_score("Report", t, Category::Bug, Urgency::High))
        });
    }
    group.finish();
}

criterion_group!(benches, classification, scoring);
criterion_main!(benches);
