// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle pairing: exactly-once start/end events per transition leg.
//!
//! A host that samples [`Phase`] snapshots (say, once per frame) still
//! wants discrete "the press animation started" / "the press animation
//! ended" notifications, fired exactly once each. The settle itself does
//! not say which transition it concluded, so the observer remembers the
//! most recently started course and pairs the eventual settle with it.
//!
//! ## Minimal example
//!
//! ```
//! use canopy_transition::{Course, Lifecycle, LifecycleObserver, Phase};
//!
//! let mut observer = LifecycleObserver::new();
//!
//! let course = Course::new(false, true);
//! assert_eq!(
//!     observer.observe(Phase::Transitioning(course)),
//!     vec![Lifecycle::Started(course)]
//! );
//! // Re-observing the same phase emits nothing.
//! assert!(observer.observe(Phase::Transitioning(course)).is_empty());
//! // The settle pairs with the remembered course.
//! assert_eq!(
//!     observer.observe(Phase::Resolved(true)),
//!     vec![Lifecycle::Ended(course)]
//! );
//! ```

use alloc::vec::Vec;

use crate::phase::{Course, Phase};

/// A paired lifecycle notification for one transition leg.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Lifecycle<T> {
    /// A leg along the given course started.
    Started(Course<T>),
    /// The leg that started along the given course ended.
    Ended(Course<T>),
}

/// Watches a stream of [`Phase`] snapshots and emits exactly-once
/// [`Lifecycle`] events.
///
/// Guarantees, for any snapshot sequence:
///
/// - No `Ended` without a prior matching `Started`.
/// - No `Started` or `Ended` emitted twice for the same leg.
/// - When one leg replaces another between two snapshots (a settle chained
///   straight into a pending intent), the old leg's `Ended` and the new
///   leg's `Started` are emitted together, in that order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LifecycleObserver<T> {
    active: Option<Course<T>>,
}

impl<T: Copy + Eq> LifecycleObserver<T> {
    /// Creates an observer with no active leg.
    pub fn new() -> Self {
        Self { active: None }
    }

    /// The course of the leg currently considered active, if any.
    pub fn active(&self) -> Option<Course<T>> {
        self.active
    }

    /// Feeds the next phase snapshot; returns the lifecycle events the
    /// change implies.
    pub fn observe(&mut self, phase: Phase<T>) -> Vec<Lifecycle<T>> {
        let mut out = Vec::new();
        match (self.active, phase) {
            (None, Phase::Resolved(_)) => {}
            (None, Phase::Transitioning(course)) => {
                self.active = Some(course);
                out.push(Lifecycle::Started(course));
            }
            (Some(active), Phase::Resolved(_)) => {
                self.active = None;
                out.push(Lifecycle::Ended(active));
            }
            (Some(active), Phase::Transitioning(course)) => {
                if course != active {
                    self.active = Some(course);
                    out.push(Lifecycle::Ended(active));
                    out.push(Lifecycle::Started(course));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn resolved_snapshots_alone_emit_nothing() {
        let mut observer = LifecycleObserver::new();
        assert!(observer.observe(Phase::Resolved(false)).is_empty());
        assert!(observer.observe(Phase::Resolved(true)).is_empty());
    }

    #[test]
    fn start_then_settle_pairs_once() {
        let mut observer = LifecycleObserver::new();
        let course = Course::new(false, true);
        assert_eq!(
            observer.observe(Phase::Transitioning(course)),
            vec![Lifecycle::Started(course)]
        );
        // Repeated snapshots of the same leg are silent.
        assert!(observer.observe(Phase::Transitioning(course)).is_empty());
        assert_eq!(
            observer.observe(Phase::Resolved(true)),
            vec![Lifecycle::Ended(course)]
        );
        // The settle is consumed; observing it again is silent.
        assert!(observer.observe(Phase::Resolved(true)).is_empty());
    }

    #[test]
    fn chained_legs_emit_end_then_start() {
        let mut observer = LifecycleObserver::new();
        let first = Course::new(false, true);
        let second = Course::new(true, false);
        let _ = observer.observe(Phase::Transitioning(first));
        // The host sampled after a settle chained straight into the next
        // leg; both notifications arrive, old end before new start.
        assert_eq!(
            observer.observe(Phase::Transitioning(second)),
            vec![Lifecycle::Ended(first), Lifecycle::Started(second)]
        );
        assert_eq!(observer.active(), Some(second));
    }

    #[test]
    fn settle_pairs_with_most_recent_start() {
        let mut observer = LifecycleObserver::<i64>::new();
        let first = Course::new(0, 1);
        let second = Course::new(1, 3);
        let _ = observer.observe(Phase::Transitioning(first));
        let _ = observer.observe(Phase::Transitioning(second));
        // The settle does not carry a direction; it pairs with `second`.
        assert_eq!(
            observer.observe(Phase::Resolved(3)),
            vec![Lifecycle::Ended(second)]
        );
    }

    #[test]
    fn forced_settle_to_unexpected_value_still_pairs() {
        let mut observer = LifecycleObserver::new();
        let course = Course::new(false, true);
        let _ = observer.observe(Phase::Transitioning(course));
        // Whatever value the machine settled on, the active leg ends.
        assert_eq!(
            observer.observe(Phase::Resolved(false)),
            vec![Lifecycle::Ended(course)]
        );
        assert_eq!(observer.active(), None);
    }
}
