// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The transition machine: settled state, one in-flight course, one
//! pending intent.
//!
//! ## Usage
//!
//! 1) Construct with the initial value (the host's one-shot environment
//!    probe, or the resolved default) and the animation-name pattern the
//!    machine listens for. Construction never starts an animation.
//! 2) Feed target values in with [`Transitioner::request`] as the driver
//!    state changes. The machine decides whether that starts an animation,
//!    replaces the pending intent, or is a no-op.
//! 3) Forward browser animation events to
//!    [`observe_end`](Transitioner::observe_end) (and optionally
//!    [`observe_start`](Transitioner::observe_start)). Only classified
//!    matching events advance the machine.
//! 4) Apply the returned [`TransitionEvent`] batches in order.
//!
//! ## Minimal example
//!
//! ```
//! use canopy_transition::{AnimationEnd, AnimationPattern, Transitioner, TransitionEvent, Course};
//!
//! let mut press = Transitioner::new(false, AnimationPattern::suffixes(["pressing", "releasing"]));
//!
//! // Request a press: one animation leg starts.
//! let events = press.request(true);
//! assert_eq!(events, vec![TransitionEvent::Started(Course::new(false, true))]);
//!
//! // The browser finishes the keyframes.
//! let events = press.observe_end(AnimationEnd { name: "boo-pressing", own_element: true });
//! assert_eq!(events, vec![TransitionEvent::Settled(Course::new(false, true))]);
//! assert!(press.settled());
//! ```

use alloc::vec::Vec;

use crate::classify::{AnimationEnd, AnimationPattern, AnimationStart};
use crate::phase::{Course, Phase};

/// A discrete observable change produced by a [`Transitioner`].
///
/// Batches are ordered; a settle that chains a pending intent yields
/// `Settled` followed by `Started` in the same batch (the same logical
/// tick).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransitionEvent<T> {
    /// An animation leg began along the given course.
    Started(Course<T>),
    /// The given course completed; its target is now the settled value.
    Settled(Course<T>),
}

/// Where the machine currently stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State<T> {
    /// No animation pending or running.
    Idle { settled: T },
    /// One animation leg in flight, with at most one pending intent.
    Animating {
        course: Course<T>,
        pending: Option<T>,
    },
}

/// An animation-aware transition state machine.
///
/// The machine reconciles three things that move at different speeds: the
/// *requested* value (changes whenever the host feels like it), the
/// *in-flight* animation (completes whenever the browser says so), and the
/// *settled* value (advances only when a matching animation-end event is
/// observed). Its invariants:
///
/// - At most one animation leg is in flight at a time.
/// - An in-flight leg is never interrupted; a conflicting request becomes
///   the pending intent, and a newer request overwrites an older intent
///   (last write wins — intermediate targets never animate).
/// - The settled value advances only on a classified matching end event,
///   via [`force_settle`](Self::force_settle), or at construction.
///
/// All methods return batches of [`TransitionEvent`]s instead of invoking
/// callbacks; dropping the machine trivially guarantees nothing fires
/// afterwards.
#[derive(Clone, Debug)]
pub struct Transitioner<T> {
    state: State<T>,
    pattern: AnimationPattern,
    bubbling: bool,
    acknowledged: bool,
    stall_budget: Option<u64>,
    leg_observed_at: Option<u64>,
    revision: u64,
}

impl<T: Copy + Eq> Transitioner<T> {
    /// Creates a machine settled at `initial`, listening for `pattern`.
    ///
    /// Construction never emits events and never starts an animation:
    /// mounting directly into a state produces no transitional flash.
    pub fn new(initial: T, pattern: AnimationPattern) -> Self {
        Self {
            state: State::Idle { settled: initial },
            pattern,
            bubbling: false,
            acknowledged: false,
            stall_budget: None,
            leg_observed_at: None,
            revision: 0,
        }
    }

    /// Accept matching events bubbled up from descendant elements.
    ///
    /// Off by default: a nested component's animations share ancestors'
    /// event listeners, and only the name pattern would tell them apart.
    #[must_use]
    pub fn with_bubbling(mut self, bubbling: bool) -> Self {
        self.bubbling = bubbling;
        self
    }

    /// Configure a stall budget, in host time units.
    ///
    /// See [`poll`](Self::poll). Without a budget the machine waits for a
    /// matching end event indefinitely, which is the browser contract's
    /// own failure mode.
    #[must_use]
    pub fn with_stall_budget(mut self, budget: u64) -> Self {
        self.stall_budget = Some(budget);
        self
    }

    /// The last value for which no animation is pending or running.
    pub fn settled(&self) -> T {
        match self.state {
            State::Idle { settled } => settled,
            State::Animating { course, .. } => course.from,
        }
    }

    /// The unlagged value: the course target while animating, the settled
    /// value otherwise. This is what the machine will next settle to,
    /// ignoring any pending intent.
    pub fn target(&self) -> T {
        match self.state {
            State::Idle { settled } => settled,
            State::Animating { course, .. } => course.to,
        }
    }

    /// The pending intent, if a conflicting request arrived mid-flight.
    pub fn pending(&self) -> Option<T> {
        match self.state {
            State::Idle { .. } => None,
            State::Animating { pending, .. } => pending,
        }
    }

    /// Returns `true` while an animation leg is in flight.
    pub fn is_animating(&self) -> bool {
        matches!(self.state, State::Animating { .. })
    }

    /// The in-flight course, if any.
    pub fn course(&self) -> Option<Course<T>> {
        match self.state {
            State::Idle { .. } => None,
            State::Animating { course, .. } => Some(course),
        }
    }

    /// The machine's position as a [`Phase`].
    pub fn phase(&self) -> Phase<T> {
        match self.state {
            State::Idle { settled } => Phase::Resolved(settled),
            State::Animating { course, .. } => Phase::Transitioning(course),
        }
    }

    /// `true` once a matching animation-start event was observed for the
    /// current leg.
    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }

    /// A counter that bumps on every observable change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Feeds a new target value into the machine.
    ///
    /// - Idle at `target` already: no-op.
    /// - Idle elsewhere: starts an animation leg toward `target`.
    /// - Animating toward `target` already: no-op (the leg is not
    ///   restarted), and any stale pending intent is cleared — the flight
    ///   satisfies the latest request.
    /// - Animating elsewhere: records `target` as the pending intent,
    ///   overwriting a previous one. The in-flight leg is untouched.
    pub fn request(&mut self, target: T) -> Vec<TransitionEvent<T>> {
        match self.state {
            State::Idle { settled } => {
                if settled == target {
                    return Vec::new();
                }
                let course = Course::new(settled, target);
                self.state = State::Animating {
                    course,
                    pending: None,
                };
                self.cross_leg_boundary();
                let mut out = Vec::with_capacity(1);
                out.push(TransitionEvent::Started(course));
                out
            }
            State::Animating { course, pending } => {
                if course.to == target {
                    if pending.is_some() {
                        self.state = State::Animating {
                            course,
                            pending: None,
                        };
                        self.revision += 1;
                    }
                } else if pending != Some(target) {
                    self.state = State::Animating {
                        course,
                        pending: Some(target),
                    };
                    self.revision += 1;
                }
                Vec::new()
            }
        }
    }

    /// Observes a browser animation-start event.
    ///
    /// A classified matching start only acknowledges the in-flight leg
    /// (see [`is_acknowledged`](Self::is_acknowledged)); it never changes
    /// the machine's course. Returns `true` if the event was accepted.
    pub fn observe_start(&mut self, event: AnimationStart<'_>) -> bool {
        if !self.is_animating() || !self.accepts(event.name, event.own_element) {
            return false;
        }
        if !self.acknowledged {
            self.acknowledged = true;
            self.revision += 1;
        }
        true
    }

    /// Observes a browser animation-end event.
    ///
    /// Events that do not match the configured pattern, or that bubbled up
    /// from a descendant while bubbling is disabled, are ignored entirely.
    /// A matching event settles the in-flight course; if a pending intent
    /// is waiting, the next leg starts in the same batch.
    pub fn observe_end(&mut self, event: AnimationEnd<'_>) -> Vec<TransitionEvent<T>> {
        if !self.accepts(event.name, event.own_element) {
            return Vec::new();
        }
        self.force_settle()
    }

    /// Settles the in-flight course as if a matching end event arrived.
    ///
    /// The host escape hatch for animations that can no longer finish
    /// (element removed from the DOM, keyframes swapped out). No-op while
    /// idle. A waiting pending intent chains into a new leg, exactly as on
    /// a real end event.
    pub fn force_settle(&mut self) -> Vec<TransitionEvent<T>> {
        match self.state {
            State::Idle { .. } => Vec::new(),
            State::Animating { course, pending } => {
                let mut out = Vec::with_capacity(2);
                out.push(TransitionEvent::Settled(course));
                match pending {
                    None => {
                        self.state = State::Idle { settled: course.to };
                        self.cross_leg_boundary();
                    }
                    Some(next_target) => {
                        let next = Course::new(course.to, next_target);
                        self.state = State::Animating {
                            course: next,
                            pending: None,
                        };
                        self.cross_leg_boundary();
                        out.push(TransitionEvent::Started(next));
                    }
                }
                out
            }
        }
    }

    /// Drives the stall budget from the host's clock.
    ///
    /// Call this periodically (for example once per frame) with a
    /// monotonic timestamp in the same units as the configured budget. The
    /// first poll that observes an in-flight leg stamps it; once a later
    /// poll finds the leg older than the budget, the leg is force-settled.
    /// With no budget configured, polling does nothing.
    pub fn poll(&mut self, now: u64) -> Vec<TransitionEvent<T>> {
        let Some(budget) = self.stall_budget else {
            return Vec::new();
        };
        if !self.is_animating() {
            return Vec::new();
        }
        match self.leg_observed_at {
            None => {
                self.leg_observed_at = Some(now);
                Vec::new()
            }
            Some(since) if now.saturating_sub(since) >= budget => self.force_settle(),
            Some(_) => Vec::new(),
        }
    }

    fn accepts(&self, name: &str, own_element: bool) -> bool {
        (own_element || self.bubbling) && self.pattern.matches(name)
    }

    // Crossing a leg boundary resets acknowledgement and the stall stamp.
    fn cross_leg_boundary(&mut self) {
        self.acknowledged = false;
        self.leg_observed_at = None;
        self.revision += 1;
    }
}
