// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `canopy_transition` crate.
//!
//! These exercise the `Transitioner` and `LifecycleObserver` together the
//! way a host drives them: requests and browser events feed the machine,
//! and the observer watches the resulting phase stream.

use canopy_transition::{
    AnimationEnd, AnimationPattern, Course, Lifecycle, LifecycleObserver, Phase, Transitioner,
    TransitionEvent,
};

fn press_machine() -> Transitioner<bool> {
    Transitioner::new(false, AnimationPattern::suffixes(["pressing", "releasing"]))
}

fn end(name: &str) -> AnimationEnd<'_> {
    AnimationEnd {
        name,
        own_element: true,
    }
}

// Mounting directly into a state never produces a transitional phase.
#[test]
fn mount_does_not_flash() {
    let machine = Transitioner::new(true, AnimationPattern::suffix("pressing"));
    assert_eq!(machine.phase(), Phase::Resolved(true));
    assert!(!machine.is_animating());

    let mut observer = LifecycleObserver::new();
    assert!(observer.observe(machine.phase()).is_empty());
}

// Requests equal to the settled value never animate and never notify.
#[test]
fn repeated_identical_requests_are_inert() {
    let mut machine = press_machine();
    let mut observer = LifecycleObserver::new();
    for _ in 0..3 {
        assert!(machine.request(false).is_empty());
        assert!(observer.observe(machine.phase()).is_empty());
    }
    assert_eq!(machine.revision(), 0);
}

// T1 runs to completion; T2 is overwritten by T3 and never animates.
#[test]
fn in_flight_leg_completes_before_any_later_request() {
    let mut machine = Transitioner::new(0_i64, AnimationPattern::suffix("sliding"));

    let started = machine.request(1);
    assert_eq!(
        started,
        vec![TransitionEvent::Started(Course::new(0, 1))]
    );

    // Two conflicting requests while the leg is in flight.
    assert!(machine.request(2).is_empty());
    assert!(machine.request(3).is_empty());
    assert_eq!(machine.course(), Some(Course::new(0, 1)));
    assert_eq!(machine.pending(), Some(3));

    // The original leg settles first; only the last request chains.
    let events = machine.observe_end(end("deck-sliding"));
    assert_eq!(
        events,
        vec![
            TransitionEvent::Settled(Course::new(0, 1)),
            TransitionEvent::Started(Course::new(1, 3)),
        ]
    );

    let events = machine.observe_end(end("deck-sliding"));
    assert_eq!(events, vec![TransitionEvent::Settled(Course::new(1, 3))]);
    assert_eq!(machine.settled(), 3);
}

// Non-matching and foreign end events never move the settled value.
#[test]
fn settled_state_only_moves_on_matching_events() {
    let mut machine = press_machine();
    let _ = machine.request(true);

    assert!(machine.observe_end(end("fade")).is_empty());
    assert!(machine.observe_end(end("my-pressing-thing")).is_empty());
    let bubbled = AnimationEnd {
        name: "boo-pressing",
        own_element: false,
    };
    assert!(machine.observe_end(bubbled).is_empty());
    assert!(!machine.settled());

    let events = machine.observe_end(end("boo-pressing"));
    assert_eq!(
        events,
        vec![TransitionEvent::Settled(Course::new(false, true))]
    );
    assert!(machine.settled());
}

// Every Ended pairs with exactly one prior Started, across chained legs.
#[test]
fn lifecycle_pairing_across_chained_legs() {
    let mut machine = press_machine();
    let mut observer = LifecycleObserver::new();
    let mut log = Vec::new();

    let _ = machine.request(true);
    log.extend(observer.observe(machine.phase()));

    let _ = machine.request(false);
    log.extend(observer.observe(machine.phase()));

    // The settle chains straight into the pending release; the observer
    // sees only the post-chain phase and still pairs both legs.
    let _ = machine.observe_end(end("boo-pressing"));
    log.extend(observer.observe(machine.phase()));

    let _ = machine.observe_end(end("boo-releasing"));
    log.extend(observer.observe(machine.phase()));

    let press = Course::new(false, true);
    let release = Course::new(true, false);
    assert_eq!(
        log,
        vec![
            Lifecycle::Started(press),
            Lifecycle::Ended(press),
            Lifecycle::Started(release),
            Lifecycle::Ended(release),
        ]
    );

    // Nothing left dangling.
    assert_eq!(observer.active(), None);
    assert!(!machine.is_animating());
}

// Press, release, press again while the first leg is still in flight:
// exactly one animation plays and the machine settles pressed.
#[test]
fn quick_double_toggle_plays_one_leg() {
    let mut machine = press_machine();

    let started = machine.request(true);
    assert_eq!(started.len(), 1);
    assert!(machine.request(false).is_empty());
    assert!(machine.request(true).is_empty());
    assert_eq!(machine.pending(), None);

    let events = machine.observe_end(end("boo-pressing"));
    assert_eq!(
        events,
        vec![TransitionEvent::Settled(Course::new(false, true))]
    );
    assert!(machine.settled());
    assert!(!machine.is_animating());
}

// A stalled leg settles through poll, and the pending intent still chains.
#[test]
fn stall_budget_recovers_a_lost_end_event() {
    let mut machine = press_machine().with_stall_budget(250);
    let _ = machine.request(true);
    let _ = machine.request(false);

    assert!(machine.poll(10).is_empty());
    assert!(machine.poll(200).is_empty());
    let events = machine.poll(260);
    assert_eq!(
        events,
        vec![
            TransitionEvent::Settled(Course::new(false, true)),
            TransitionEvent::Started(Course::new(true, false)),
        ]
    );
}
