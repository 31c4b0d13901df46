// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View state: an animation-aware view-index machine for carousels and
//! wizards.
//!
//! The driver value is an integer index into a bounded, stepped range.
//! Raw requests may be fractional or out of range; they are quantized by
//! the configured [`IndexBounds`] before the state machinery ever sees
//! them, so the machine itself only handles well-formed indices.
//!
//! ## Minimal example
//!
//! ```
//! use canopy_declare::IndexBounds;
//! use canopy_interaction::view::{ViewConfig, ViewPhase, ViewState, ViewInputs};
//! use canopy_transition::AnimationEnd;
//!
//! let config = ViewConfig {
//!     bounds: IndexBounds::new(0, 4, 1),
//!     ..ViewConfig::default()
//! };
//! let mut view = ViewState::new(config, ViewInputs::default());
//!
//! // A wild request is clamped and stepped before it drives anything.
//! let _ = view.show_raw(7.6);
//! assert_eq!(view.index(), 4);
//! assert_eq!(view.phase(), ViewPhase::Shifting);
//!
//! let _ = view.animation_end(AnimationEnd { name: "deck-shifting", own_element: true });
//! assert_eq!(view.settled(), 4);
//! ```

use alloc::vec::Vec;

use canopy_declare::{resolve, Declared, IndexBounds, ResolveContext, Restrictions};
use canopy_store::ValueStore;
use canopy_transition::{
    AnimationEnd, AnimationPattern, AnimationStart, Course, Lifecycle, LifecycleObserver, Phase,
    Transitioner,
};

/// CSS custom-property names published by the view machine.
pub mod css {
    /// Set to the shifting keyframes while animating between views.
    pub const ANIMATION_SHIFTING: &str = "animationShifting";
    /// Set to the current view index.
    pub const VIEW_INDEX: &str = "viewIndex";
    /// Set to the departed view index while shifting.
    pub const PREV_VIEW_INDEX: &str = "prevViewIndex";
}

/// The closed set of view phases.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ViewPhase {
    /// Settled on a view.
    Shown,
    /// Animating between views.
    Shifting,
}

impl ViewPhase {
    /// Projects a raw machine phase into a view phase. Total.
    pub fn from_phase(phase: Phase<i64>) -> Self {
        match phase {
            Phase::Resolved(_) => Self::Shown,
            Phase::Transitioning(_) => Self::Shifting,
        }
    }

    /// The `is-…` classname for this phase.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Shown => "is-shown",
            Self::Shifting => "is-shifting",
        }
    }
}

/// Which way an in-flight shift is heading.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShiftDirection {
    /// Toward a higher index.
    Forward,
    /// Toward a lower index.
    Backward,
}

/// A discrete observable change from a [`ViewState`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    /// A change was requested (controlled mode: the owner accepts it).
    ChangeRequested {
        /// The requested index, already quantized.
        index: i64,
    },
    /// The driver index actually changed.
    Changed {
        /// The new index.
        index: i64,
    },
    /// A shift between views started.
    ShiftStarted {
        /// The index the shift departed from.
        from: i64,
        /// The index the shift heads toward.
        to: i64,
    },
    /// The shift between views ended; `to` is now settled.
    ShiftEnded {
        /// The index the shift departed from.
        from: i64,
        /// The index that settled.
        to: i64,
    },
}

/// Static configuration for a [`ViewState`].
#[derive(Clone, Debug)]
pub struct ViewConfig {
    /// Bounds and step grid every request is quantized against.
    pub bounds: IndexBounds,
    /// Initial index in uncontrolled mode.
    pub default_index: i64,
    /// One-shot environment probe at attach time.
    pub probe: Option<i64>,
    /// Which animation names belong to this machine.
    pub pattern: AnimationPattern,
    /// Accept matching events bubbled from descendants.
    pub bubbling: bool,
    /// Optional stall budget, in host time units.
    pub stall_budget: Option<u64>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            bounds: IndexBounds::default(),
            default_index: 0,
            probe: None,
            pattern: AnimationPattern::suffix("shifting"),
            bubbling: false,
            stall_budget: None,
        }
    }
}

/// The per-update input snapshot for a [`ViewState`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewInputs {
    /// The declarative view request; anything but auto means controlled.
    pub index: Declared<i64>,
    /// A pre-resolved override (also implies controlled mode).
    pub computed: Option<i64>,
    /// The ancestor cascade value for [`Declared::Inherit`].
    pub inherited: Option<i64>,
    /// Active restrictions; a disabled deck stops reacting to navigation.
    pub restrictions: Restrictions,
}

impl ViewInputs {
    fn is_controlled(&self) -> bool {
        !self.index.is_auto() || self.computed.is_some()
    }

    fn context(&self, fallback: i64) -> ResolveContext<i64> {
        ResolveContext::new(fallback)
            .with_computed(self.computed)
            .with_inherited(self.inherited)
    }
}

/// An animation-aware view-index interaction state.
#[derive(Clone, Debug)]
pub struct ViewState {
    store: ValueStore<i64>,
    machine: Transitioner<i64>,
    observer: LifecycleObserver<i64>,
    bounds: IndexBounds,
    restrictions: Restrictions,
}

impl ViewState {
    /// Builds the machine from its configuration and first inputs.
    ///
    /// The initial index — probed, resolved, or defaulted — is quantized
    /// against the bounds before it seeds anything.
    pub fn new(config: ViewConfig, inputs: ViewInputs) -> Self {
        let bounds = config.bounds;
        let controlled = inputs.is_controlled();
        let raw = config.probe.unwrap_or(if controlled {
            resolve(inputs.index, &inputs.context(bounds.min))
        } else {
            config.default_index
        });
        let initial = bounds.snap(raw);
        let store = if controlled {
            ValueStore::controlled(initial)
        } else {
            ValueStore::uncontrolled(initial)
        };
        let mut machine = Transitioner::new(initial, config.pattern).with_bubbling(config.bubbling);
        if let Some(budget) = config.stall_budget {
            machine = machine.with_stall_budget(budget);
        }
        Self {
            store,
            machine,
            observer: LifecycleObserver::new(),
            bounds,
            restrictions: inputs.restrictions,
        }
    }

    /// The driver index, unlagged by animation.
    pub fn index(&self) -> i64 {
        self.store.value()
    }

    /// The settled index.
    pub fn settled(&self) -> i64 {
        self.machine.settled()
    }

    /// The bounds every request is quantized against.
    pub fn bounds(&self) -> IndexBounds {
        self.bounds
    }

    /// The current view phase.
    pub fn phase(&self) -> ViewPhase {
        ViewPhase::from_phase(self.machine.phase())
    }

    /// The current `is-…` classname.
    pub fn class_name(&self) -> &'static str {
        self.phase().class_name()
    }

    /// The in-flight shift, if any.
    pub fn course(&self) -> Option<Course<i64>> {
        self.machine.course()
    }

    /// Which way the in-flight shift is heading, if any.
    pub fn direction(&self) -> Option<ShiftDirection> {
        self.machine.course().map(|c| {
            if c.to > c.from {
                ShiftDirection::Forward
            } else {
                ShiftDirection::Backward
            }
        })
    }

    /// Returns `true` while a shift animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.machine.is_animating()
    }

    /// Re-resolves declarative inputs on a host update.
    pub fn update(&mut self, inputs: ViewInputs) -> Vec<ViewEvent> {
        debug_assert!(
            self.store.is_controlled() == inputs.is_controlled(),
            "controlled/uncontrolled mode is frozen at construction"
        );
        self.restrictions = inputs.restrictions;
        let mut out = Vec::new();
        if self.store.is_controlled() {
            let effective = self
                .bounds
                .snap(resolve(inputs.index, &inputs.context(self.bounds.min)));
            if effective != self.store.value() {
                self.store.sync(effective);
                out.push(ViewEvent::Changed { index: effective });
            }
        }
        let _ = self.machine.request(self.store.value());
        self.drain(&mut out);
        out
    }

    /// The stable change dispatcher. The index is quantized first.
    pub fn dispatch(&mut self, index: i64) -> Vec<ViewEvent> {
        let index = self.bounds.snap(index);
        let mut out = Vec::new();
        let dispatch = self.store.dispatch(index);
        if dispatch.changed {
            out.push(ViewEvent::ChangeRequested { index });
        }
        if dispatch.applied && dispatch.changed {
            out.push(ViewEvent::Changed { index });
        }
        let _ = self.machine.request(self.store.value());
        self.drain(&mut out);
        out
    }

    /// Requests a view by (possibly fractional, possibly wild) raw value.
    pub fn show_raw(&mut self, raw: f64) -> Vec<ViewEvent> {
        if self.is_disabled() {
            return Vec::new();
        }
        let index = self.bounds.quantize(raw);
        self.dispatch(index)
    }

    /// Requests a view by index.
    pub fn show(&mut self, index: i64) -> Vec<ViewEvent> {
        if self.is_disabled() {
            return Vec::new();
        }
        self.dispatch(index)
    }

    /// Advances one step forward, saturating at the top of the range.
    pub fn next(&mut self) -> Vec<ViewEvent> {
        if self.is_disabled() {
            return Vec::new();
        }
        let target = self.bounds.saturating_next(self.store.value());
        self.dispatch(target)
    }

    /// Steps backward, saturating at the bottom of the range.
    pub fn prev(&mut self) -> Vec<ViewEvent> {
        if self.is_disabled() {
            return Vec::new();
        }
        let target = self.bounds.saturating_prev(self.store.value());
        self.dispatch(target)
    }

    /// Observes a browser animation-start event.
    pub fn animation_start(&mut self, event: AnimationStart<'_>) -> bool {
        self.machine.observe_start(event)
    }

    /// Observes a browser animation-end event.
    pub fn animation_end(&mut self, event: AnimationEnd<'_>) -> Vec<ViewEvent> {
        let mut out = Vec::new();
        let _ = self.machine.observe_end(event);
        self.drain(&mut out);
        out
    }

    /// Drives the stall budget from the host's clock.
    pub fn poll(&mut self, now: u64) -> Vec<ViewEvent> {
        let mut out = Vec::new();
        let _ = self.machine.poll(now);
        self.drain(&mut out);
        out
    }

    fn is_disabled(&self) -> bool {
        self.restrictions.contains(Restrictions::DISABLED)
    }

    fn drain(&mut self, out: &mut Vec<ViewEvent>) {
        for event in self.observer.observe(self.machine.phase()) {
            out.push(match event {
                Lifecycle::Started(c) => ViewEvent::ShiftStarted {
                    from: c.from,
                    to: c.to,
                },
                Lifecycle::Ended(c) => ViewEvent::ShiftEnded {
                    from: c.from,
                    to: c.to,
                },
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn deck() -> ViewState {
        ViewState::new(
            ViewConfig {
                bounds: IndexBounds::new(0, 4, 1),
                ..ViewConfig::default()
            },
            ViewInputs::default(),
        )
    }

    fn deck_end() -> AnimationEnd<'static> {
        AnimationEnd {
            name: "deck-shifting",
            own_element: true,
        }
    }

    #[test]
    fn wild_requests_are_quantized() {
        let mut view = deck();
        let events = view.show_raw(7.6);
        assert!(events.contains(&ViewEvent::Changed { index: 4 }));
        assert_eq!(view.index(), 4);

        let mut view = deck();
        assert_eq!(view.show_raw(f64::NAN), vec![]);
        assert_eq!(view.index(), 0);
    }

    #[test]
    fn navigation_saturates_at_the_edges() {
        let mut view = deck();
        let _ = view.prev();
        assert_eq!(view.index(), 0);

        for _ in 0..10 {
            let _ = view.next();
        }
        assert_eq!(view.index(), 4);
    }

    #[test]
    fn shift_carries_direction() {
        let mut view = deck();
        let _ = view.show(3);
        assert_eq!(view.direction(), Some(ShiftDirection::Forward));
        assert_eq!(view.class_name(), "is-shifting");

        let _ = view.animation_end(deck_end());
        assert_eq!(view.direction(), None);
        assert_eq!(view.class_name(), "is-shown");

        let _ = view.show(1);
        assert_eq!(view.direction(), Some(ShiftDirection::Backward));
    }

    #[test]
    fn rapid_navigation_coalesces_to_last_target() {
        let mut view = deck();
        let _ = view.show(1);
        let _ = view.show(2);
        let _ = view.show(3);

        // One leg toward 1 is in flight; only 3 survives as pending.
        let events = view.animation_end(deck_end());
        assert_eq!(
            events,
            vec![
                ViewEvent::ShiftEnded { from: 0, to: 1 },
                ViewEvent::ShiftStarted { from: 1, to: 3 },
            ]
        );
        let events = view.animation_end(deck_end());
        assert_eq!(events, vec![ViewEvent::ShiftEnded { from: 1, to: 3 }]);
        assert_eq!(view.settled(), 3);
    }

    #[test]
    fn controlled_deck_follows_the_owner() {
        let config = ViewConfig {
            bounds: IndexBounds::new(0, 4, 1),
            ..ViewConfig::default()
        };
        let inputs = ViewInputs {
            index: Declared::Value(2),
            ..ViewInputs::default()
        };
        let mut view = ViewState::new(config, inputs);
        assert_eq!(view.index(), 2);
        assert!(!view.is_animating());

        // Interaction only requests.
        let events = view.next();
        assert_eq!(events, vec![ViewEvent::ChangeRequested { index: 3 }]);
        assert_eq!(view.index(), 2);

        // The owner accepts, quantizing on the way in.
        let events = view.update(ViewInputs {
            index: Declared::Value(3),
            ..ViewInputs::default()
        });
        assert_eq!(
            events,
            vec![
                ViewEvent::Changed { index: 3 },
                ViewEvent::ShiftStarted { from: 2, to: 3 },
            ]
        );
    }

    #[test]
    fn disabled_deck_ignores_navigation() {
        let mut view = ViewState::new(
            ViewConfig {
                bounds: IndexBounds::new(0, 4, 1),
                ..ViewConfig::default()
            },
            ViewInputs {
                restrictions: Restrictions::DISABLED,
                ..ViewInputs::default()
            },
        );
        assert!(view.next().is_empty());
        assert_eq!(view.index(), 0);
    }
}
