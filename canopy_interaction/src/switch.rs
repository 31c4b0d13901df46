// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared plumbing for boolean on/off interaction states.
//!
//! Press, hover, focus, and collapse are all the same machine under
//! different names: a boolean driver value held in a hybrid store, an
//! animation-aware transitioner, and a lifecycle observer pairing
//! start/end notifications. This module owns that wiring once; each
//! modality wraps it with its own vocabulary, handlers, and classnames.

use alloc::vec::Vec;

use canopy_declare::{resolve, Declared, ResolveContext, RestrictionPolicy, Restrictions};
use canopy_store::ValueStore;
use canopy_transition::{
    AnimationEnd, AnimationPattern, AnimationStart, Course, Lifecycle, LifecycleObserver, Phase,
    Transitioner,
};

/// A modality-neutral observable change from a boolean interaction state.
///
/// Specializations lift these into their own named event enums.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SwitchEvent {
    /// A dispatch asked for a value the owner has to accept (controlled
    /// mode), or that differed from the current one.
    ChangeRequested(bool),
    /// The driver value actually changed.
    Changed(bool),
    /// An animation leg started along the given course.
    Started(Course<bool>),
    /// The animation leg along the given course ended.
    Ended(Course<bool>),
}

/// The per-update input snapshot shared by all boolean modalities.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SwitchInputs {
    pub declared: Declared<bool>,
    pub computed: Option<bool>,
    pub inherited: Option<bool>,
    pub restrictions: Restrictions,
}

impl SwitchInputs {
    /// Controlled mode is implied by an externally driven value: a
    /// concrete declaration, an inherit from the cascade, or a computed
    /// override. Only `Auto` leaves the component in charge of itself.
    pub(crate) fn is_controlled(&self) -> bool {
        !self.declared.is_auto() || self.computed.is_some()
    }

    fn context(&self, policy: RestrictionPolicy<bool>, fallback: bool) -> ResolveContext<bool> {
        ResolveContext::new(fallback)
            .with_computed(self.computed)
            .with_inherited(self.inherited)
            .with_restrictions(self.restrictions, policy)
    }
}

/// The shared core of a boolean interaction state.
#[derive(Clone, Debug)]
pub(crate) struct Switch {
    store: ValueStore<bool>,
    machine: Transitioner<bool>,
    observer: LifecycleObserver<bool>,
    policy: RestrictionPolicy<bool>,
    restrictions: Restrictions,
    fallback: bool,
}

impl Switch {
    /// Wires up the store, machine, and observer.
    ///
    /// `probe` is the host's one-shot environment reading at attach time
    /// (e.g. the computed style of the just-mounted element); it overrides
    /// the resolved or default initial value so mounting never flashes.
    pub(crate) fn new(
        inputs: SwitchInputs,
        default_value: bool,
        probe: Option<bool>,
        fallback: bool,
        policy: RestrictionPolicy<bool>,
        pattern: AnimationPattern,
        bubbling: bool,
        stall_budget: Option<u64>,
    ) -> Self {
        let controlled = inputs.is_controlled();
        let initial = probe.unwrap_or(if controlled {
            resolve(inputs.declared, &inputs.context(policy, fallback))
        } else {
            default_value
        });
        let store = if controlled {
            ValueStore::controlled(initial)
        } else {
            ValueStore::uncontrolled(initial)
        };
        let mut machine = Transitioner::new(initial, pattern).with_bubbling(bubbling);
        if let Some(budget) = stall_budget {
            machine = machine.with_stall_budget(budget);
        }
        Self {
            store,
            machine,
            observer: LifecycleObserver::new(),
            policy,
            restrictions: inputs.restrictions,
            fallback,
        }
    }

    /// The driver value (unlagged by animation).
    pub(crate) fn value(&self) -> bool {
        self.store.value()
    }

    /// The settled value (lagging until the animation completes).
    pub(crate) fn settled(&self) -> bool {
        self.machine.settled()
    }

    pub(crate) fn phase(&self) -> Phase<bool> {
        self.machine.phase()
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.machine.is_animating()
    }

    pub(crate) fn course(&self) -> Option<Course<bool>> {
        self.machine.course()
    }

    pub(crate) fn is_controlled(&self) -> bool {
        self.store.is_controlled()
    }

    pub(crate) fn restrictions(&self) -> Restrictions {
        self.restrictions
    }

    /// Re-resolves the declarative inputs on a host update.
    ///
    /// In controlled mode the resolved value is mirrored into the store.
    /// In uncontrolled mode the store keeps its own value, except that a
    /// restriction-forced value is applied as an internal dispatch (a
    /// disabled button un-presses itself).
    pub(crate) fn update(&mut self, inputs: SwitchInputs) -> Vec<SwitchEvent> {
        debug_assert!(
            self.store.is_controlled() == inputs.is_controlled(),
            "controlled/uncontrolled mode is frozen at construction"
        );
        self.restrictions = inputs.restrictions;
        let mut out = Vec::new();
        if self.store.is_controlled() {
            let effective = resolve(inputs.declared, &inputs.context(self.policy, self.fallback));
            if effective != self.store.value() {
                self.store.sync(effective);
                out.push(SwitchEvent::Changed(effective));
            }
        } else if let Some(forced) = self.policy.forced(inputs.restrictions) {
            let dispatch = self.store.dispatch(forced);
            if dispatch.changed {
                out.push(SwitchEvent::Changed(forced));
            }
        }
        let _ = self.machine.request(self.store.value());
        self.drain(&mut out);
        out
    }

    /// The stable change dispatcher: asks for a new driver value.
    pub(crate) fn dispatch(&mut self, requested: bool) -> Vec<SwitchEvent> {
        let mut out = Vec::new();
        let dispatch = self.store.dispatch(requested);
        if dispatch.changed {
            out.push(SwitchEvent::ChangeRequested(requested));
        }
        if dispatch.applied && dispatch.changed {
            out.push(SwitchEvent::Changed(requested));
        }
        let _ = self.machine.request(self.store.value());
        self.drain(&mut out);
        out
    }

    pub(crate) fn animation_start(&mut self, event: AnimationStart<'_>) -> bool {
        self.machine.observe_start(event)
    }

    pub(crate) fn animation_end(&mut self, event: AnimationEnd<'_>) -> Vec<SwitchEvent> {
        let mut out = Vec::new();
        let _ = self.machine.observe_end(event);
        self.drain(&mut out);
        out
    }

    pub(crate) fn poll(&mut self, now: u64) -> Vec<SwitchEvent> {
        let mut out = Vec::new();
        let _ = self.machine.poll(now);
        self.drain(&mut out);
        out
    }

    pub(crate) fn force_settle(&mut self) -> Vec<SwitchEvent> {
        let mut out = Vec::new();
        let _ = self.machine.force_settle();
        self.drain(&mut out);
        out
    }

    // Fold the machine's new phase into lifecycle events.
    fn drain(&mut self, out: &mut Vec<SwitchEvent>) {
        for event in self.observer.observe(self.machine.phase()) {
            out.push(match event {
                Lifecycle::Started(course) => SwitchEvent::Started(course),
                Lifecycle::Ended(course) => SwitchEvent::Ended(course),
            });
        }
    }
}
