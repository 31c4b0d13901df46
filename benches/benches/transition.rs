// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `canopy_transition`.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use canopy_transition::{
    AnimationEnd, AnimationPattern, LifecycleObserver, Transitioner, TransitionEvent,
};

fn bench_transition(c: &mut Criterion) {
    c.bench_function("request_settle_cycle", |b| {
        let mut machine =
            Transitioner::new(false, AnimationPattern::suffixes(["pressing", "releasing"]));
        let end = AnimationEnd {
            name: "boo-pressing",
            own_element: true,
        };
        b.iter(|| {
            let target = !machine.settled();
            let started: Vec<TransitionEvent<bool>> = machine.request(black_box(target));
            let settled = machine.observe_end(black_box(end));
            (started, settled)
        });
    });

    c.bench_function("pending_overwrite_storm", |b| {
        let mut machine = Transitioner::new(0_i64, AnimationPattern::suffix("sliding"));
        let end = AnimationEnd {
            name: "deck-sliding",
            own_element: true,
        };
        b.iter(|| {
            for i in 1..16 {
                let _ = machine.request(black_box(i));
            }
            while machine.is_animating() {
                let _ = machine.observe_end(end);
            }
            machine.settled()
        });
    });

    c.bench_function("lifecycle_observe", |b| {
        let mut machine =
            Transitioner::new(false, AnimationPattern::suffixes(["pressing", "releasing"]));
        let mut observer = LifecycleObserver::new();
        let end = AnimationEnd {
            name: "boo-pressing",
            own_element: true,
        };
        b.iter(|| {
            let target = !machine.settled();
            let _ = machine.request(target);
            let a = observer.observe(machine.phase());
            let _ = machine.observe_end(end);
            let b2 = observer.observe(machine.phase());
            (a, b2)
        });
    });
}

criterion_group!(benches, bench_transition);
criterion_main!(benches);
