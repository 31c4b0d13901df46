// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View machine basics.
//!
//! Mash the "next" button of a five-view carousel faster than its slide
//! animation and watch intermediate targets coalesce away.
//!
//! Run:
//! - `cargo run -p canopy_demos --example carousel`

use canopy_declare::IndexBounds;
use canopy_demos::ScriptedAnimations;
use canopy_interaction::view::{ViewConfig, ViewInputs, ViewState};
use canopy_transition::AnimationEnd;

fn main() {
    let mut view = ViewState::new(
        ViewConfig {
            bounds: IndexBounds::new(0, 4, 1),
            ..ViewConfig::default()
        },
        ViewInputs::default(),
    );
    let mut browser = ScriptedAnimations::new();

    // Three rapid clicks while the first slide is still animating.
    let _ = view.next();
    browser.launch("deck-shifting");
    let _ = view.next();
    let _ = view.next();
    println!(
        "after 3 clicks: driver={} settled={} ({})",
        view.index(),
        view.settled(),
        view.class_name()
    );

    // Let every launched slide finish; chained legs launch new keyframes.
    while let Some(name) = browser.finish_next() {
        let events = view.animation_end(AnimationEnd {
            name: &name,
            own_element: true,
        });
        println!("'{name}' ended: events: {events:?}");
        if view.is_animating() {
            browser.launch("deck-shifting");
        }
    }

    // The deck went 0 → 1 → 3: view 2 never got its own slide.
    println!(
        "settled:        driver={} settled={} ({})",
        view.index(),
        view.settled(),
        view.class_name()
    );
}
