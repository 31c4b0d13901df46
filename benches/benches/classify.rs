// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for animation-name classification.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use canopy_transition::AnimationPattern;

const NAMES: &[&str] = &[
    "boo-pressing",
    "boo-releasing",
    "my-pressing-thing",
    "unpressing",
    "ripple",
    "spinner-rotate",
    "deck-shifting",
    "field-invalidating",
];

fn bench_classify(c: &mut Criterion) {
    c.bench_function("suffix_single", |b| {
        let pattern = AnimationPattern::suffix("pressing");
        b.iter(|| {
            NAMES
                .iter()
                .filter(|name| pattern.matches(black_box(name)))
                .count()
        });
    });

    c.bench_function("suffix_list", |b| {
        let pattern = AnimationPattern::suffixes(["pressing", "releasing", "shifting"]);
        b.iter(|| {
            NAMES
                .iter()
                .filter(|name| pattern.matches(black_box(name)))
                .count()
        });
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
