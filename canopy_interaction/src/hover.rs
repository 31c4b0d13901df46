// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state: an animation-aware entered/left machine.
//!
//! The same machine as press under a different vocabulary: the pointer
//! entering the element drives the value up, leaving drives it down, and
//! both directions animate. Wire [`pointer_enter`](HoverState::pointer_enter)
//! and [`pointer_leave`](HoverState::pointer_leave) to the element's
//! events and render with [`class_name`](HoverState::class_name).

use alloc::vec::Vec;

use canopy_declare::{Declared, RestrictionPolicy, Restrictions};
use canopy_transition::{AnimationEnd, AnimationPattern, AnimationStart, Phase};

use crate::switch::{Switch, SwitchEvent, SwitchInputs};

/// CSS custom-property names published by the hover machine.
pub mod css {
    /// Set to the entering keyframes while animating toward entered.
    pub const ANIMATION_ENTERING: &str = "animationEntering";
    /// Set to the leaving keyframes while animating toward left.
    pub const ANIMATION_LEAVING: &str = "animationLeaving";
    /// Set while the settled state is entered.
    pub const IS_ENTERED: &str = "isEntered";
    /// Set while the settled state is left.
    pub const IS_LEFT: &str = "isLeft";
}

/// The closed set of hover phases.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HoverPhase {
    /// Settled with the pointer away.
    Left,
    /// Animating toward entered.
    Entering,
    /// Settled with the pointer over the element.
    Entered,
    /// Animating toward left.
    Leaving,
}

impl HoverPhase {
    /// Projects a raw machine phase into a hover phase. Total.
    pub fn from_phase(phase: Phase<bool>) -> Self {
        match phase {
            Phase::Resolved(false) => Self::Left,
            Phase::Resolved(true) => Self::Entered,
            Phase::Transitioning(c) if c.to => Self::Entering,
            Phase::Transitioning(_) => Self::Leaving,
        }
    }

    /// The `is-…` classname for this phase.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Left => "is-left",
            Self::Entering => "is-entering",
            Self::Entered => "is-entered",
            Self::Leaving => "is-leaving",
        }
    }
}

/// A discrete observable change from a [`HoverState`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    /// A change was requested (controlled mode: the owner accepts it).
    ChangeRequested {
        /// The requested value.
        hovered: bool,
    },
    /// The driver value actually changed.
    Changed {
        /// The new value.
        hovered: bool,
    },
    /// The entering animation started.
    EnteringStarted,
    /// The entering animation ended.
    EnteringEnded,
    /// The leaving animation started.
    LeavingStarted,
    /// The leaving animation ended.
    LeavingEnded,
}

fn lift(event: SwitchEvent) -> HoverEvent {
    match event {
        SwitchEvent::ChangeRequested(hovered) => HoverEvent::ChangeRequested { hovered },
        SwitchEvent::Changed(hovered) => HoverEvent::Changed { hovered },
        SwitchEvent::Started(c) if c.to => HoverEvent::EnteringStarted,
        SwitchEvent::Started(_) => HoverEvent::LeavingStarted,
        SwitchEvent::Ended(c) if c.to => HoverEvent::EnteringEnded,
        SwitchEvent::Ended(_) => HoverEvent::LeavingEnded,
    }
}

/// Static configuration for a [`HoverState`].
#[derive(Clone, Debug)]
pub struct HoverConfig {
    /// Initial value in uncontrolled mode.
    pub default_hovered: bool,
    /// One-shot environment probe at attach time.
    pub probe: Option<bool>,
    /// Which animation names belong to this machine.
    pub pattern: AnimationPattern,
    /// Accept matching events bubbled from descendants.
    pub bubbling: bool,
    /// Optional stall budget, in host time units.
    pub stall_budget: Option<u64>,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            default_hovered: false,
            probe: None,
            pattern: AnimationPattern::suffixes(["entering", "leaving"]),
            bubbling: false,
            stall_budget: None,
        }
    }
}

/// The per-update input snapshot for a [`HoverState`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverInputs {
    /// The declarative hover request; anything but auto means controlled.
    pub hovered: Declared<bool>,
    /// A pre-resolved override (also implies controlled mode).
    pub computed: Option<bool>,
    /// The ancestor cascade value for [`Declared::Inherit`].
    pub inherited: Option<bool>,
    /// Active restrictions; a disabled element is forced un-hovered.
    pub restrictions: Restrictions,
}

impl From<HoverInputs> for SwitchInputs {
    fn from(inputs: HoverInputs) -> Self {
        Self {
            declared: inputs.hovered,
            computed: inputs.computed,
            inherited: inputs.inherited,
            restrictions: inputs.restrictions,
        }
    }
}

/// An animation-aware entered/left interaction state.
#[derive(Clone, Debug)]
pub struct HoverState {
    switch: Switch,
}

impl HoverState {
    /// Builds the machine from its configuration and first inputs.
    pub fn new(config: HoverConfig, inputs: HoverInputs) -> Self {
        let policy = RestrictionPolicy {
            disabled: Some(false),
            read_only: None,
        };
        Self {
            switch: Switch::new(
                inputs.into(),
                config.default_hovered,
                config.probe,
                false,
                policy,
                config.pattern,
                config.bubbling,
                config.stall_budget,
            ),
        }
    }

    /// The driver value, unlagged by animation.
    pub fn is_hovered(&self) -> bool {
        self.switch.value()
    }

    /// The settled value.
    pub fn settled(&self) -> bool {
        self.switch.settled()
    }

    /// The current hover phase.
    pub fn phase(&self) -> HoverPhase {
        HoverPhase::from_phase(self.switch.phase())
    }

    /// The current `is-…` classname.
    pub fn class_name(&self) -> &'static str {
        self.phase().class_name()
    }

    /// Returns `true` while an enter/leave animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.switch.is_animating()
    }

    /// Re-resolves declarative inputs on a host update.
    pub fn update(&mut self, inputs: HoverInputs) -> Vec<HoverEvent> {
        self.switch
            .update(inputs.into())
            .into_iter()
            .map(lift)
            .collect()
    }

    /// The stable change dispatcher.
    pub fn dispatch(&mut self, hovered: bool) -> Vec<HoverEvent> {
        self.switch
            .dispatch(hovered)
            .into_iter()
            .map(lift)
            .collect()
    }

    /// The pointer entered the element.
    pub fn pointer_enter(&mut self) -> Vec<HoverEvent> {
        if self.switch.restrictions().contains(Restrictions::DISABLED) {
            return Vec::new();
        }
        self.dispatch(true)
    }

    /// The pointer left the element.
    pub fn pointer_leave(&mut self) -> Vec<HoverEvent> {
        self.dispatch(false)
    }

    /// Observes a browser animation-start event.
    pub fn animation_start(&mut self, event: AnimationStart<'_>) -> bool {
        self.switch.animation_start(event)
    }

    /// Observes a browser animation-end event.
    pub fn animation_end(&mut self, event: AnimationEnd<'_>) -> Vec<HoverEvent> {
        self.switch
            .animation_end(event)
            .into_iter()
            .map(lift)
            .collect()
    }

    /// Drives the stall budget from the host's clock.
    pub fn poll(&mut self, now: u64) -> Vec<HoverEvent> {
        self.switch.poll(now).into_iter().map(lift).collect()
    }
}
