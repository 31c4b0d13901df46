// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the assembled press machine.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use canopy_interaction::press::{Key, PressConfig, PressInputs, PressState};
use canopy_transition::AnimationEnd;

fn bench_press(c: &mut Criterion) {
    c.bench_function("press_keyboard_cycle", |b| {
        let mut press = PressState::new(PressConfig::default(), PressInputs::default());
        let press_end = AnimationEnd {
            name: "btn-pressing",
            own_element: true,
        };
        let release_end = AnimationEnd {
            name: "btn-releasing",
            own_element: true,
        };
        b.iter(|| {
            let a = press.key_down(black_box(Key::Space));
            let b1 = press.animation_end(press_end);
            let c1 = press.key_up(Key::Space);
            let d = press.animation_end(release_end);
            (a, b1, c1, d)
        });
    });

    c.bench_function("press_update_noop", |b| {
        let mut press = PressState::new(PressConfig::default(), PressInputs::default());
        let inputs = PressInputs::default();
        b.iter(|| press.update(black_box(inputs)));
    });
}

criterion_group!(benches, bench_press);
criterion_main!(benches);
