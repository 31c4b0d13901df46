// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `canopy_interaction` crate.
//!
//! End-to-end scenarios driving whole modalities the way a component host
//! would: declarative updates, user interaction, and browser animation
//! events interleaved.

use canopy_declare::{Declared, IndexBounds, Restrictions};
use canopy_interaction::press::{Key, PressConfig, PressEvent, PressInputs, PressState};
use canopy_interaction::validity::{ValidityConfig, ValidityInputs, ValidityState};
use canopy_interaction::view::{ViewConfig, ViewInputs, ViewState};
use canopy_transition::AnimationEnd;

fn own_end(name: &str) -> AnimationEnd<'_> {
    AnimationEnd {
        name,
        own_element: true,
    }
}

// Mount released, press, observe the matching end: the classname walks
// is-released → is-pressing → is-pressed, and each lifecycle event fires
// exactly once.
#[test]
fn press_end_to_end() {
    let mut press = PressState::new(PressConfig::default(), PressInputs::default());
    assert_eq!(press.class_name(), "is-released");

    let events = press.dispatch(true);
    let starts = events
        .iter()
        .filter(|e| matches!(e, PressEvent::PressingStarted))
        .count();
    assert_eq!(starts, 1);
    assert_eq!(press.class_name(), "is-pressing");
    assert!(!press.settled());

    // A non-matching end changes nothing.
    assert!(press.animation_end(own_end("ripple")).is_empty());

    let events = press.animation_end(own_end("boo-pressing"));
    assert_eq!(events, vec![PressEvent::PressingEnded]);
    assert_eq!(press.class_name(), "is-pressed");
    assert!(press.settled());
}

// Quick double-toggle inside one in-flight window: exactly one pressing
// animation plays, the pending intent ends up empty, and the machine
// settles pressed.
#[test]
fn press_quick_double_toggle() {
    let mut press = PressState::new(PressConfig::default(), PressInputs::default());

    let mut started = 0;
    let mut ended = 0;
    let mut count = |events: &[PressEvent]| {
        started += events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    PressEvent::PressingStarted | PressEvent::ReleasingStarted
                )
            })
            .count();
        ended += events
            .iter()
            .filter(|e| matches!(e, PressEvent::PressingEnded | PressEvent::ReleasingEnded))
            .count();
    };

    count(&press.dispatch(true));
    count(&press.dispatch(false));
    count(&press.dispatch(true));
    count(&press.animation_end(own_end("boo-pressing")));

    assert_eq!(started, 1);
    assert_eq!(ended, 1);
    assert!(press.settled());
    assert!(!press.is_animating());
}

// A keyboard-driven press on a controlled component round-trips through
// the owner.
#[test]
fn controlled_press_via_keyboard() {
    let mut press = PressState::new(
        PressConfig::default(),
        PressInputs {
            pressed: Declared::Value(false),
            ..PressInputs::default()
        },
    );

    let events = press.key_down(Key::Enter);
    assert_eq!(events, vec![PressEvent::ChangeRequested { pressed: true }]);
    assert_eq!(press.class_name(), "is-released");

    let events = press.update(PressInputs {
        pressed: Declared::Value(true),
        ..PressInputs::default()
    });
    assert!(events.contains(&PressEvent::PressingStarted));
    assert_eq!(press.class_name(), "is-pressing");
}

// Bounds 0..=4 with step 1: a request of 7.6 lands on view 4.
#[test]
fn view_clamping_end_to_end() {
    let mut view = ViewState::new(
        ViewConfig {
            bounds: IndexBounds::new(0, 4, 1),
            ..ViewConfig::default()
        },
        ViewInputs::default(),
    );

    let _ = view.show_raw(7.6);
    assert_eq!(view.index(), 4);

    let _ = view.animation_end(own_end("deck-shifting"));
    assert_eq!(view.settled(), 4);
    assert_eq!(view.class_name(), "is-shown");
}

// Validity walks neutral → invalid → valid with direction-aware markers.
#[test]
fn validity_direction_aware_classnames() {
    let mut validity = ValidityState::new(ValidityConfig::default(), ValidityInputs::default());

    let _ = validity.dispatch(Some(false));
    assert_eq!(validity.class_names(), "is-invalidating was-neutral");
    let _ = validity.animation_end(own_end("field-invalidating"));

    let _ = validity.dispatch(Some(true));
    assert_eq!(validity.class_names(), "is-validating was-invalid");
    let _ = validity.animation_end(own_end("field-validating"));
    assert_eq!(validity.class_names(), "is-valid");
    assert_eq!(validity.settled(), Some(true));
}

// A disabled control is forced released even when asked to press, and its
// handlers go inert.
#[test]
fn restrictions_cascade_into_press() {
    let mut press = PressState::new(
        PressConfig::default(),
        PressInputs {
            pressed: Declared::Value(true),
            restrictions: Restrictions::DISABLED,
            ..PressInputs::default()
        },
    );
    // Forced released at construction: no flash, no animation.
    assert_eq!(press.class_name(), "is-released");
    assert!(!press.is_animating());
    assert!(press.key_down(Key::Space).is_empty());

    // Re-enabling lets the declared press through.
    let events = press.update(PressInputs {
        pressed: Declared::Value(true),
        ..PressInputs::default()
    });
    assert!(events.contains(&PressEvent::PressingStarted));
}
