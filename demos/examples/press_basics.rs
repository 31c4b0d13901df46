// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press machine basics.
//!
//! Drive an uncontrolled press state with pointer events and a scripted
//! browser, printing the classname after every step.
//!
//! Run:
//! - `cargo run -p canopy_demos --example press_basics`

use canopy_demos::ScriptedAnimations;
use canopy_interaction::press::{PressConfig, PressInputs, PressState};
use canopy_transition::AnimationEnd;
use kurbo::Point;

fn main() {
    let mut press = PressState::new(
        PressConfig::default().with_cancel_slop(8.0),
        PressInputs::default(),
    );
    let mut browser = ScriptedAnimations::new();

    println!("mounted:        {}", press.class_name());

    // Pointer goes down: the pressing keyframes start.
    let events = press.pointer_down(Point::new(12.0, 30.0));
    println!("pointer down:   {}  events: {events:?}", press.class_name());
    browser.launch("btn-pressing");

    // The user releases before the keyframes finish; the release waits as
    // the pending intent.
    let events = press.pointer_up(Point::new(12.0, 30.0));
    println!("pointer up:     {}  events: {events:?}", press.class_name());

    // The browser finishes the press leg; the release chains immediately.
    while let Some(name) = browser.finish_next() {
        let events = press.animation_end(AnimationEnd {
            name: &name,
            own_element: true,
        });
        println!("'{name}' ended: {}  events: {events:?}", press.class_name());
        if press.is_animating() {
            browser.launch("btn-releasing");
        }
    }

    println!("settled:        {}", press.class_name());
}
