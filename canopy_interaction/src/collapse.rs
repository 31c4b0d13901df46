// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapse state: an animation-aware expanded/collapsed machine.

use alloc::vec::Vec;

use canopy_declare::{Declared, RestrictionPolicy, Restrictions};
use canopy_transition::{AnimationEnd, AnimationPattern, AnimationStart, Phase};

use crate::switch::{Switch, SwitchEvent, SwitchInputs};

/// CSS custom-property names published by the collapse machine.
pub mod css {
    /// Set to the expanding keyframes while animating toward expanded.
    pub const ANIMATION_EXPANDING: &str = "animationExpanding";
    /// Set to the collapsing keyframes while animating toward collapsed.
    pub const ANIMATION_COLLAPSING: &str = "animationCollapsing";
    /// Set while the settled state is expanded.
    pub const IS_EXPANDED: &str = "isExpanded";
    /// Set while the settled state is collapsed.
    pub const IS_COLLAPSED: &str = "isCollapsed";
}

/// The closed set of collapse phases.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CollapsePhase {
    /// Settled collapsed.
    Collapsed,
    /// Animating toward expanded.
    Expanding,
    /// Settled expanded.
    Expanded,
    /// Animating toward collapsed.
    Collapsing,
}

impl CollapsePhase {
    /// Projects a raw machine phase into a collapse phase. Total.
    pub fn from_phase(phase: Phase<bool>) -> Self {
        match phase {
            Phase::Resolved(false) => Self::Collapsed,
            Phase::Resolved(true) => Self::Expanded,
            Phase::Transitioning(c) if c.to => Self::Expanding,
            Phase::Transitioning(_) => Self::Collapsing,
        }
    }

    /// The `is-…` classname for this phase.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Collapsed => "is-collapsed",
            Self::Expanding => "is-expanding",
            Self::Expanded => "is-expanded",
            Self::Collapsing => "is-collapsing",
        }
    }
}

/// A discrete observable change from a [`CollapseState`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CollapseEvent {
    /// A change was requested (controlled mode: the owner accepts it).
    ChangeRequested {
        /// The requested value.
        expanded: bool,
    },
    /// The driver value actually changed.
    Changed {
        /// The new value.
        expanded: bool,
    },
    /// The expanding animation started.
    ExpandingStarted,
    /// The expanding animation ended.
    ExpandingEnded,
    /// The collapsing animation started.
    CollapsingStarted,
    /// The collapsing animation ended.
    CollapsingEnded,
}

fn lift(event: SwitchEvent) -> CollapseEvent {
    match event {
        SwitchEvent::ChangeRequested(expanded) => CollapseEvent::ChangeRequested { expanded },
        SwitchEvent::Changed(expanded) => CollapseEvent::Changed { expanded },
        SwitchEvent::Started(c) if c.to => CollapseEvent::ExpandingStarted,
        SwitchEvent::Started(_) => CollapseEvent::CollapsingStarted,
        SwitchEvent::Ended(c) if c.to => CollapseEvent::ExpandingEnded,
        SwitchEvent::Ended(_) => CollapseEvent::CollapsingEnded,
    }
}

/// Static configuration for a [`CollapseState`].
#[derive(Clone, Debug)]
pub struct CollapseConfig {
    /// Initial value in uncontrolled mode (`true` = expanded).
    pub default_expanded: bool,
    /// One-shot environment probe at attach time.
    pub probe: Option<bool>,
    /// Which animation names belong to this machine.
    pub pattern: AnimationPattern,
    /// Accept matching events bubbled from descendants.
    pub bubbling: bool,
    /// Optional stall budget, in host time units.
    pub stall_budget: Option<u64>,
}

impl Default for CollapseConfig {
    fn default() -> Self {
        Self {
            default_expanded: false,
            probe: None,
            pattern: AnimationPattern::suffixes(["expanding", "collapsing"]),
            bubbling: false,
            stall_budget: None,
        }
    }
}

/// The per-update input snapshot for a [`CollapseState`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CollapseInputs {
    /// The declarative request; anything but auto means controlled.
    pub expanded: Declared<bool>,
    /// A pre-resolved override (also implies controlled mode).
    pub computed: Option<bool>,
    /// The ancestor cascade value for [`Declared::Inherit`].
    pub inherited: Option<bool>,
    /// Active restrictions. A disabled panel keeps its position; it only
    /// stops reacting to interaction.
    pub restrictions: Restrictions,
}

impl From<CollapseInputs> for SwitchInputs {
    fn from(inputs: CollapseInputs) -> Self {
        Self {
            declared: inputs.expanded,
            computed: inputs.computed,
            inherited: inputs.inherited,
            restrictions: inputs.restrictions,
        }
    }
}

/// An animation-aware expanded/collapsed interaction state.
#[derive(Clone, Debug)]
pub struct CollapseState {
    switch: Switch,
}

impl CollapseState {
    /// Builds the machine from its configuration and first inputs.
    pub fn new(config: CollapseConfig, inputs: CollapseInputs) -> Self {
        Self {
            switch: Switch::new(
                inputs.into(),
                config.default_expanded,
                config.probe,
                false,
                RestrictionPolicy::none(),
                config.pattern,
                config.bubbling,
                config.stall_budget,
            ),
        }
    }

    /// The driver value (`true` = expanded), unlagged by animation.
    pub fn is_expanded(&self) -> bool {
        self.switch.value()
    }

    /// The settled value.
    pub fn settled(&self) -> bool {
        self.switch.settled()
    }

    /// The current collapse phase.
    pub fn phase(&self) -> CollapsePhase {
        CollapsePhase::from_phase(self.switch.phase())
    }

    /// The current `is-…` classname.
    pub fn class_name(&self) -> &'static str {
        self.phase().class_name()
    }

    /// Returns `true` while an expand/collapse animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.switch.is_animating()
    }

    /// Re-resolves declarative inputs on a host update.
    pub fn update(&mut self, inputs: CollapseInputs) -> Vec<CollapseEvent> {
        self.switch
            .update(inputs.into())
            .into_iter()
            .map(lift)
            .collect()
    }

    /// The stable change dispatcher.
    pub fn dispatch(&mut self, expanded: bool) -> Vec<CollapseEvent> {
        self.switch
            .dispatch(expanded)
            .into_iter()
            .map(lift)
            .collect()
    }

    /// Requests the expanded position.
    pub fn expand(&mut self) -> Vec<CollapseEvent> {
        if self.is_disabled() {
            return Vec::new();
        }
        self.dispatch(true)
    }

    /// Requests the collapsed position.
    pub fn collapse(&mut self) -> Vec<CollapseEvent> {
        if self.is_disabled() {
            return Vec::new();
        }
        self.dispatch(false)
    }

    /// Requests the opposite of the current driver value.
    pub fn toggle(&mut self) -> Vec<CollapseEvent> {
        if self.is_disabled() {
            return Vec::new();
        }
        let target = !self.switch.value();
        self.dispatch(target)
    }

    /// Observes a browser animation-start event.
    pub fn animation_start(&mut self, event: AnimationStart<'_>) -> bool {
        self.switch.animation_start(event)
    }

    /// Observes a browser animation-end event.
    pub fn animation_end(&mut self, event: AnimationEnd<'_>) -> Vec<CollapseEvent> {
        self.switch
            .animation_end(event)
            .into_iter()
            .map(lift)
            .collect()
    }

    /// Drives the stall budget from the host's clock.
    pub fn poll(&mut self, now: u64) -> Vec<CollapseEvent> {
        self.switch.poll(now).into_iter().map(lift).collect()
    }

    fn is_disabled(&self) -> bool {
        self.switch.restrictions().contains(Restrictions::DISABLED)
    }
}
