// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validity state: an animation-aware valid/invalid/neutral machine.
//!
//! Validity is a tri-state: `Some(true)` valid, `Some(false)` invalid,
//! `None` neutral (not yet validated). Six transitions are possible
//! between the three settled facets, and styling often wants to know the
//! direction — turning valid *from invalid* looks different from turning
//! valid *from neutral*. The transitional classname therefore appends a
//! `was-…` marker: `"is-validating was-invalid"`.
//!
//! ## Minimal example
//!
//! ```
//! use canopy_interaction::validity::{ValidityConfig, ValidityInputs, ValidityPhase, ValidityState};
//! use canopy_transition::AnimationEnd;
//!
//! let mut validity = ValidityState::new(ValidityConfig::default(), ValidityInputs::default());
//! assert_eq!(validity.phase(), ValidityPhase::Neutral);
//!
//! // A validation pass reports failure.
//! let _ = validity.dispatch(Some(false));
//! assert_eq!(validity.class_names(), "is-invalidating was-neutral");
//!
//! let _ = validity.animation_end(AnimationEnd { name: "field-invalidating", own_element: true });
//! assert_eq!(validity.class_names(), "is-invalid");
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use canopy_declare::{resolve, Declared, ResolveContext, Restrictions};
use canopy_store::ValueStore;
use canopy_transition::{
    AnimationEnd, AnimationPattern, AnimationStart, Lifecycle, LifecycleObserver, Phase,
    Transitioner,
};

/// CSS custom-property names published by the validity machine.
pub mod css {
    /// Set to the validating keyframes while animating toward valid.
    pub const ANIMATION_VALIDATING: &str = "animationValidating";
    /// Set to the invalidating keyframes while animating toward invalid.
    pub const ANIMATION_INVALIDATING: &str = "animationInvalidating";
    /// Set to the neutralizing keyframes while animating toward neutral.
    pub const ANIMATION_NEUTRALIZING: &str = "animationNeutralizing";
    /// Set while the settled facet is valid.
    pub const IS_VALID: &str = "isValid";
    /// Set while the settled facet is invalid.
    pub const IS_INVALID: &str = "isInvalid";
    /// Set while the settled facet is neutral.
    pub const IS_NEUTRAL: &str = "isNeutral";
}

/// The closed set of validity phases.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValidityPhase {
    /// Settled neutral (not yet validated).
    Neutral,
    /// Settled valid.
    Valid,
    /// Settled invalid.
    Invalid,
    /// Animating toward valid.
    Validating,
    /// Animating toward invalid.
    Invalidating,
    /// Animating toward neutral.
    Neutralizing,
}

impl ValidityPhase {
    /// Projects a raw machine phase into a validity phase. Total.
    pub fn from_phase(phase: Phase<Option<bool>>) -> Self {
        match phase {
            Phase::Resolved(None) => Self::Neutral,
            Phase::Resolved(Some(true)) => Self::Valid,
            Phase::Resolved(Some(false)) => Self::Invalid,
            Phase::Transitioning(c) => match c.to {
                Some(true) => Self::Validating,
                Some(false) => Self::Invalidating,
                None => Self::Neutralizing,
            },
        }
    }

    /// The `is-…` classname for this phase, without the `was-…` marker.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Neutral => "is-neutral",
            Self::Valid => "is-valid",
            Self::Invalid => "is-invalid",
            Self::Validating => "is-validating",
            Self::Invalidating => "is-invalidating",
            Self::Neutralizing => "is-neutralizing",
        }
    }

    /// Returns `true` for the three animating phases.
    pub fn is_transitional(self) -> bool {
        matches!(self, Self::Validating | Self::Invalidating | Self::Neutralizing)
    }
}

fn facet_name(facet: Option<bool>) -> &'static str {
    match facet {
        Some(true) => "valid",
        Some(false) => "invalid",
        None => "neutral",
    }
}

/// A discrete observable change from a [`ValidityState`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValidityEvent {
    /// A change was requested (controlled mode: the owner accepts it).
    ChangeRequested {
        /// The requested facet.
        validity: Option<bool>,
    },
    /// The driver facet actually changed.
    Changed {
        /// The new facet.
        validity: Option<bool>,
    },
    /// An animation toward the given facet started, departing `from`.
    TransitionStarted {
        /// The facet the animation departed from.
        from: Option<bool>,
        /// The facet the animation heads toward.
        to: Option<bool>,
    },
    /// The animation toward the given facet ended; it is now settled.
    TransitionEnded {
        /// The facet the animation departed from.
        from: Option<bool>,
        /// The facet that settled.
        to: Option<bool>,
    },
}

/// Static configuration for a [`ValidityState`].
#[derive(Clone, Debug)]
pub struct ValidityConfig {
    /// Initial facet in uncontrolled mode.
    pub default_validity: Option<bool>,
    /// The facet an unresolvable request degrades to.
    pub fallback: Option<bool>,
    /// One-shot environment probe at attach time.
    pub probe: Option<Option<bool>>,
    /// Which animation names belong to this machine.
    pub pattern: AnimationPattern,
    /// Accept matching events bubbled from descendants.
    pub bubbling: bool,
    /// Optional stall budget, in host time units.
    pub stall_budget: Option<u64>,
}

impl Default for ValidityConfig {
    fn default() -> Self {
        Self {
            default_validity: None,
            fallback: None,
            probe: None,
            pattern: AnimationPattern::suffixes(["validating", "invalidating", "neutralizing"]),
            bubbling: false,
            stall_budget: None,
        }
    }
}

/// The per-update input snapshot for a [`ValidityState`].
///
/// Restrictions are carried for uniformity but force nothing here: a
/// disabled or read-only field keeps displaying the validity it last had.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidityInputs {
    /// The declarative validity request; anything but auto means controlled.
    pub validity: Declared<Option<bool>>,
    /// A pre-resolved override, e.g. from a validation pass (also implies
    /// controlled mode).
    pub computed: Option<Option<bool>>,
    /// The ancestor cascade value for [`Declared::Inherit`].
    pub inherited: Option<Option<bool>>,
    /// Active restrictions (inert for validity).
    pub restrictions: Restrictions,
}

impl ValidityInputs {
    // Only `Auto` is uncontrolled; `inherit` is externally driven too.
    fn is_controlled(&self) -> bool {
        !self.validity.is_auto() || self.computed.is_some()
    }

    fn context(&self, fallback: Option<bool>) -> ResolveContext<Option<bool>> {
        ResolveContext::new(fallback)
            .with_computed(self.computed)
            .with_inherited(self.inherited)
    }
}

/// An animation-aware valid/invalid/neutral interaction state.
#[derive(Clone, Debug)]
pub struct ValidityState {
    store: ValueStore<Option<bool>>,
    machine: Transitioner<Option<bool>>,
    observer: LifecycleObserver<Option<bool>>,
    fallback: Option<bool>,
}

impl ValidityState {
    /// Builds the machine from its configuration and first inputs.
    pub fn new(config: ValidityConfig, inputs: ValidityInputs) -> Self {
        let controlled = inputs.is_controlled();
        let initial = config.probe.unwrap_or(if controlled {
            resolve(inputs.validity, &inputs.context(config.fallback))
        } else {
            config.default_validity
        });
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
            fallback: config.fallback,
        }
    }

    /// The driver facet, unlagged by animation.
    pub fn validity(&self) -> Option<bool> {
        self.store.value()
    }

    /// The settled facet.
    pub fn settled(&self) -> Option<bool> {
        self.machine.settled()
    }

    /// The current validity phase.
    pub fn phase(&self) -> ValidityPhase {
        ValidityPhase::from_phase(self.machine.phase())
    }

    /// The current classnames: the `is-…` phase, plus a `was-…` marker
    /// naming the departed facet while a transition is in flight.
    pub fn class_names(&self) -> String {
        let mut out = String::from(self.phase().class_name());
        if let Some(course) = self.machine.course() {
            out.push_str(" was-");
            out.push_str(facet_name(course.from));
        }
        out
    }

    /// Returns `true` while a validity animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.machine.is_animating()
    }

    /// Re-resolves declarative inputs on a host update.
    pub fn update(&mut self, inputs: ValidityInputs) -> Vec<ValidityEvent> {
        debug_assert!(
            self.store.is_controlled() == inputs.is_controlled(),
            "controlled/uncontrolled mode is frozen at construction"
        );
        let mut out = Vec::new();
        if self.store.is_controlled() {
            let effective = resolve(inputs.validity, &inputs.context(self.fallback));
            if effective != self.store.value() {
                self.store.sync(effective);
                out.push(ValidityEvent::Changed {
                    validity: effective,
                });
            }
        }
        let _ = self.machine.request(self.store.value());
        self.drain(&mut out);
        out
    }

    /// The stable change dispatcher.
    pub fn dispatch(&mut self, validity: Option<bool>) -> Vec<ValidityEvent> {
        let mut out = Vec::new();
        let dispatch = self.store.dispatch(validity);
        if dispatch.changed {
            out.push(ValidityEvent::ChangeRequested { validity });
        }
        if dispatch.applied && dispatch.changed {
            out.push(ValidityEvent::Changed { validity });
        }
        let _ = self.machine.request(self.store.value());
        self.drain(&mut out);
        out
    }

    /// Observes a browser animation-start event.
    pub fn animation_start(&mut self, event: AnimationStart<'_>) -> bool {
        self.machine.observe_start(event)
    }

    /// Observes a browser animation-end event.
    pub fn animation_end(&mut self, event: AnimationEnd<'_>) -> Vec<ValidityEvent> {
        let mut out = Vec::new();
        let _ = self.machine.observe_end(event);
        self.drain(&mut out);
        out
    }

    /// Drives the stall budget from the host's clock.
    pub fn poll(&mut self, now: u64) -> Vec<ValidityEvent> {
        let mut out = Vec::new();
        let _ = self.machine.poll(now);
        self.drain(&mut out);
        out
    }

    fn drain(&mut self, out: &mut Vec<ValidityEvent>) {
        for event in self.observer.observe(self.machine.phase()) {
            out.push(match event {
                Lifecycle::Started(c) => ValidityEvent::TransitionStarted {
                    from: c.from,
                    to: c.to,
                },
                Lifecycle::Ended(c) => ValidityEvent::TransitionEnded {
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

    fn field_end(name: &str) -> AnimationEnd<'_> {
        AnimationEnd {
            name,
            own_element: true,
        }
    }

    #[test]
    fn starts_neutral_with_default_config() {
        let validity = ValidityState::new(ValidityConfig::default(), ValidityInputs::default());
        assert_eq!(validity.phase(), ValidityPhase::Neutral);
        assert_eq!(validity.class_names(), "is-neutral");
        assert!(!validity.is_animating());
    }

    #[test]
    fn transition_classnames_carry_the_departed_facet() {
        let mut validity = ValidityState::new(ValidityConfig::default(), ValidityInputs::default());

        let _ = validity.dispatch(Some(false));
        assert_eq!(validity.class_names(), "is-invalidating was-neutral");

        let _ = validity.animation_end(field_end("field-invalidating"));
        assert_eq!(validity.class_names(), "is-invalid");

        let _ = validity.dispatch(Some(true));
        assert_eq!(validity.class_names(), "is-validating was-invalid");
    }

    #[test]
    fn lifecycle_events_carry_both_facets() {
        let mut validity = ValidityState::new(ValidityConfig::default(), ValidityInputs::default());
        let events = validity.dispatch(Some(true));
        assert_eq!(
            events,
            vec![
                ValidityEvent::ChangeRequested {
                    validity: Some(true)
                },
                ValidityEvent::Changed {
                    validity: Some(true)
                },
                ValidityEvent::TransitionStarted {
                    from: None,
                    to: Some(true)
                },
            ]
        );

        let events = validity.animation_end(field_end("field-validating"));
        assert_eq!(
            events,
            vec![ValidityEvent::TransitionEnded {
                from: None,
                to: Some(true)
            }]
        );
    }

    #[test]
    fn controlled_validity_follows_the_computed_pass() {
        let inputs = ValidityInputs {
            computed: Some(None),
            ..ValidityInputs::default()
        };
        let mut validity = ValidityState::new(ValidityConfig::default(), inputs);

        // The validation pass flips to invalid on the next update.
        let events = validity.update(ValidityInputs {
            computed: Some(Some(false)),
            ..ValidityInputs::default()
        });
        assert!(events.contains(&ValidityEvent::Changed {
            validity: Some(false)
        }));
        assert_eq!(validity.phase(), ValidityPhase::Invalidating);
    }

    #[test]
    fn inherit_without_a_cascade_degrades_to_fallback() {
        let config = ValidityConfig {
            fallback: Some(true),
            ..ValidityConfig::default()
        };
        let inputs = ValidityInputs {
            validity: Declared::Inherit,
            ..ValidityInputs::default()
        };
        let validity = ValidityState::new(config, inputs);
        assert_eq!(validity.validity(), Some(true));

        // With an ancestor offering a facet, the cascade wins.
        let inputs = ValidityInputs {
            validity: Declared::Inherit,
            inherited: Some(Some(false)),
            ..ValidityInputs::default()
        };
        let validity = ValidityState::new(ValidityConfig::default(), inputs);
        assert_eq!(validity.validity(), Some(false));
    }
}
