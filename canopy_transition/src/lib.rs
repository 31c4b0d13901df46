// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_transition --heading-base-level=0

//! Canopy Transition: an animation-aware state machine for UI interaction
//! states.
//!
//! A CSS keyframe animation is an external, asynchronous process: the host
//! decides when a transition *should* happen, but only the browser knows
//! when it has *finished*. In between, the component's requested value, its
//! in-flight animation, and its settled visual state all disagree. This
//! crate owns that reconciliation:
//!
//! - [`Transitioner`]: the state machine. Either idle at a settled value,
//!   or running exactly one animation leg with at most one *pending
//!   intent* — the latest conflicting request, applied only once the
//!   current leg's end event is observed. Newer requests overwrite the
//!   intent (last write wins); in-flight legs are never interrupted.
//! - [`AnimationPattern`] / [`AnimationEnd`] / [`AnimationStart`]:
//!   classification of browser animation events, so a machine only
//!   advances on events that belong to it — word-boundary suffix matching
//!   by default, full regular expressions behind the `regex` feature, and
//!   a bubbling filter for events from nested components.
//! - [`Phase`] / [`Course`]: the public projection of a machine's
//!   position, total over every reachable state.
//! - [`LifecycleObserver`]: turns a stream of phase snapshots into
//!   exactly-once start/end notifications per transition leg.
//!
//! ## A complete exchange
//!
//! ```rust
//! use canopy_transition::{
//!     AnimationEnd, AnimationPattern, Course, Transitioner, TransitionEvent,
//! };
//!
//! let mut machine =
//!     Transitioner::new(false, AnimationPattern::suffixes(["pressing", "releasing"]));
//!
//! // The host asks for a press; one leg starts.
//! let events = machine.request(true);
//! assert_eq!(events, vec![TransitionEvent::Started(Course::new(false, true))]);
//!
//! // Mid-flight, the user lets go and immediately presses again. The
//! // release becomes the pending intent, then the re-press clears it:
//! // the in-flight leg already heads the right way.
//! assert!(machine.request(false).is_empty());
//! assert!(machine.request(true).is_empty());
//! assert_eq!(machine.pending(), None);
//!
//! // Unrelated animations ending elsewhere in the subtree are ignored.
//! let spin = AnimationEnd { name: "spinner-rotate", own_element: true };
//! assert!(machine.observe_end(spin).is_empty());
//!
//! // The press keyframes finish: exactly one leg ran, and it settles.
//! let done = AnimationEnd { name: "boo-pressing", own_element: true };
//! let events = machine.observe_end(done);
//! assert_eq!(events, vec![TransitionEvent::Settled(Course::new(false, true))]);
//! assert!(machine.settled());
//! assert!(!machine.is_animating());
//! ```
//!
//! ## Event batches, not callbacks
//!
//! Every method returns the observable changes it caused as an ordered
//! batch, in the manner of an event-routing dispatcher: the host applies
//! them in sequence and owns all side effects. Dropping a machine is
//! therefore a complete teardown — there is nothing registered anywhere
//! that could fire afterwards.
//!
//! ## Stalls
//!
//! If the browser never delivers the end event (keyframes removed
//! mid-flight, display toggled), a machine would wait forever. Hosts that
//! want insurance configure a stall budget and drive
//! [`Transitioner::poll`] from their own clock; overdue legs settle as if
//! the event had arrived. Hosts that prefer the unvarnished browser
//! contract simply never call `poll`.
//!
//! ## Features
//!
//! - `std`: compile with the standard library.
//! - `regex`: regular-expression animation patterns (implies `std`).
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod classify;
mod lifecycle;
mod machine;
mod phase;

pub use classify::{AnimationEnd, AnimationPattern, AnimationStart};
pub use lifecycle::{Lifecycle, LifecycleObserver};
pub use machine::{TransitionEvent, Transitioner};
pub use phase::{Course, Phase};
