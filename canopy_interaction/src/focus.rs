// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus state: an animation-aware focused/blurred machine.
//!
//! Tracks whether the element holds keyboard focus, and separately whether
//! that focus should be *visible* (focus acquired via keyboard rather than
//! pointer), mirroring the platform `:focus-visible` distinction.

use alloc::vec::Vec;

use canopy_declare::{Declared, RestrictionPolicy, Restrictions};
use canopy_transition::{AnimationEnd, AnimationPattern, AnimationStart, Phase};

use crate::switch::{Switch, SwitchEvent, SwitchInputs};

/// CSS custom-property names published by the focus machine.
pub mod css {
    /// Set to the focusing keyframes while animating toward focused.
    pub const ANIMATION_FOCUSING: &str = "animationFocusing";
    /// Set to the blurring keyframes while animating toward blurred.
    pub const ANIMATION_BLURRING: &str = "animationBlurring";
    /// Set while the settled state is focused.
    pub const IS_FOCUSED: &str = "isFocused";
    /// Set while the settled state is blurred.
    pub const IS_BLURRED: &str = "isBlurred";
}

/// The closed set of focus phases.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FocusPhase {
    /// Settled blurred.
    Blurred,
    /// Animating toward focused.
    Focusing,
    /// Settled focused.
    Focused,
    /// Animating toward blurred.
    Blurring,
}

impl FocusPhase {
    /// Projects a raw machine phase into a focus phase. Total.
    pub fn from_phase(phase: Phase<bool>) -> Self {
        match phase {
            Phase::Resolved(false) => Self::Blurred,
            Phase::Resolved(true) => Self::Focused,
            Phase::Transitioning(c) if c.to => Self::Focusing,
            Phase::Transitioning(_) => Self::Blurring,
        }
    }

    /// The `is-…` classname for this phase.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Blurred => "is-blurred",
            Self::Focusing => "is-focusing",
            Self::Focused => "is-focused",
            Self::Blurring => "is-blurring",
        }
    }
}

/// A discrete observable change from a [`FocusState`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FocusEvent {
    /// A change was requested (controlled mode: the owner accepts it).
    ChangeRequested {
        /// The requested value.
        focused: bool,
    },
    /// The driver value actually changed.
    Changed {
        /// The new value.
        focused: bool,
    },
    /// The focusing animation started.
    FocusingStarted,
    /// The focusing animation ended.
    FocusingEnded,
    /// The blurring animation started.
    BlurringStarted,
    /// The blurring animation ended.
    BlurringEnded,
}

fn lift(event: SwitchEvent) -> FocusEvent {
    match event {
        SwitchEvent::ChangeRequested(focused) => FocusEvent::ChangeRequested { focused },
        SwitchEvent::Changed(focused) => FocusEvent::Changed { focused },
        SwitchEvent::Started(c) if c.to => FocusEvent::FocusingStarted,
        SwitchEvent::Started(_) => FocusEvent::BlurringStarted,
        SwitchEvent::Ended(c) if c.to => FocusEvent::FocusingEnded,
        SwitchEvent::Ended(_) => FocusEvent::BlurringEnded,
    }
}

/// Static configuration for a [`FocusState`].
#[derive(Clone, Debug)]
pub struct FocusConfig {
    /// Initial value in uncontrolled mode.
    pub default_focused: bool,
    /// One-shot environment probe at attach time.
    pub probe: Option<bool>,
    /// Which animation names belong to this machine.
    pub pattern: AnimationPattern,
    /// Accept matching events bubbled from descendants.
    pub bubbling: bool,
    /// Optional stall budget, in host time units.
    pub stall_budget: Option<u64>,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            default_focused: false,
            probe: None,
            pattern: AnimationPattern::suffixes(["focusing", "blurring"]),
            bubbling: false,
            stall_budget: None,
        }
    }
}

/// The per-update input snapshot for a [`FocusState`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusInputs {
    /// The declarative focus request; anything but auto means controlled.
    pub focused: Declared<bool>,
    /// A pre-resolved override (also implies controlled mode).
    pub computed: Option<bool>,
    /// The ancestor cascade value for [`Declared::Inherit`].
    pub inherited: Option<bool>,
    /// Active restrictions; a disabled element is forced blurred.
    pub restrictions: Restrictions,
}

impl From<FocusInputs> for SwitchInputs {
    fn from(inputs: FocusInputs) -> Self {
        Self {
            declared: inputs.focused,
            computed: inputs.computed,
            inherited: inputs.inherited,
            restrictions: inputs.restrictions,
        }
    }
}

/// An animation-aware focused/blurred interaction state.
#[derive(Clone, Debug)]
pub struct FocusState {
    switch: Switch,
    visible: bool,
}

impl FocusState {
    /// Builds the machine from its configuration and first inputs.
    pub fn new(config: FocusConfig, inputs: FocusInputs) -> Self {
        let policy = RestrictionPolicy {
            disabled: Some(false),
            read_only: None,
        };
        Self {
            switch: Switch::new(
                inputs.into(),
                config.default_focused,
                config.probe,
                false,
                policy,
                config.pattern,
                config.bubbling,
                config.stall_budget,
            ),
            visible: false,
        }
    }

    /// The driver value, unlagged by animation.
    pub fn is_focused(&self) -> bool {
        self.switch.value()
    }

    /// `true` while focused via a modality that should show a focus ring.
    pub fn is_focus_visible(&self) -> bool {
        self.visible && self.is_focused()
    }

    /// The settled value.
    pub fn settled(&self) -> bool {
        self.switch.settled()
    }

    /// The current focus phase.
    pub fn phase(&self) -> FocusPhase {
        FocusPhase::from_phase(self.switch.phase())
    }

    /// The current `is-…` classname.
    pub fn class_name(&self) -> &'static str {
        self.phase().class_name()
    }

    /// Returns `true` while a focus/blur animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.switch.is_animating()
    }

    /// Re-resolves declarative inputs on a host update.
    pub fn update(&mut self, inputs: FocusInputs) -> Vec<FocusEvent> {
        self.switch
            .update(inputs.into())
            .into_iter()
            .map(lift)
            .collect()
    }

    /// The stable change dispatcher.
    pub fn dispatch(&mut self, focused: bool) -> Vec<FocusEvent> {
        self.switch
            .dispatch(focused)
            .into_iter()
            .map(lift)
            .collect()
    }

    /// The element gained focus. `visible` marks keyboard-driven focus.
    pub fn focus_gained(&mut self, visible: bool) -> Vec<FocusEvent> {
        if self.switch.restrictions().contains(Restrictions::DISABLED) {
            return Vec::new();
        }
        self.visible = visible;
        self.dispatch(true)
    }

    /// The element lost focus.
    pub fn focus_lost(&mut self) -> Vec<FocusEvent> {
        self.visible = false;
        self.dispatch(false)
    }

    /// Observes a browser animation-start event.
    pub fn animation_start(&mut self, event: AnimationStart<'_>) -> bool {
        self.switch.animation_start(event)
    }

    /// Observes a browser animation-end event.
    pub fn animation_end(&mut self, event: AnimationEnd<'_>) -> Vec<FocusEvent> {
        self.switch
            .animation_end(event)
            .into_iter()
            .map(lift)
            .collect()
    }

    /// Drives the stall budget from the host's clock.
    pub fn poll(&mut self, now: u64) -> Vec<FocusEvent> {
        self.switch.poll(now).into_iter().map(lift).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn focus_and_blur_cycle() {
        let mut focus = FocusState::new(FocusConfig::default(), FocusInputs::default());
        assert_eq!(focus.phase(), FocusPhase::Blurred);

        let events = focus.focus_gained(true);
        assert!(events.contains(&FocusEvent::FocusingStarted));
        assert!(focus.is_focus_visible());

        let events = focus.animation_end(AnimationEnd {
            name: "field-focusing",
            own_element: true,
        });
        assert_eq!(events, vec![FocusEvent::FocusingEnded]);
        assert_eq!(focus.class_name(), "is-focused");

        let _ = focus.focus_lost();
        assert!(!focus.is_focus_visible());
        assert_eq!(focus.phase(), FocusPhase::Blurring);
    }

    #[test]
    fn pointer_focus_is_not_visible() {
        let mut focus = FocusState::new(FocusConfig::default(), FocusInputs::default());
        let _ = focus.focus_gained(false);
        assert!(focus.is_focused());
        assert!(!focus.is_focus_visible());
    }
}
