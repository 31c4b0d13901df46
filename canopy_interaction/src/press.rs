// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press state: an animation-aware pressed/released machine.
//!
//! ## Usage
//!
//! 1) Build a [`PressState`] from a [`PressConfig`] and the first
//!    [`PressInputs`] snapshot. Supplying `pressed` (or a computed
//!    override) puts the machine in controlled mode; otherwise it is
//!    uncontrolled and seeds from `default_pressed`.
//! 2) On every host update, call [`PressState::update`] with a fresh
//!    snapshot.
//! 3) Wire the interaction handlers ([`pointer_down`](PressState::pointer_down),
//!    [`key_down`](PressState::key_down), …) and the animation observers
//!    ([`animation_end`](PressState::animation_end)) to the rendered
//!    element's events.
//! 4) Render with [`class_name`](PressState::class_name) and apply the
//!    returned [`PressEvent`] batches in order.
//!
//! ## Minimal example
//!
//! ```
//! use canopy_interaction::press::{PressConfig, PressEvent, PressInputs, PressPhase, PressState};
//! use canopy_transition::AnimationEnd;
//!
//! let mut press = PressState::new(PressConfig::default(), PressInputs::default());
//! assert_eq!(press.phase(), PressPhase::Released);
//!
//! // The user presses: the machine animates toward pressed.
//! let events = press.dispatch(true);
//! assert!(events.contains(&PressEvent::PressingStarted));
//! assert_eq!(press.class_name(), "is-pressing");
//!
//! // The pressing keyframes complete.
//! let events = press.animation_end(AnimationEnd { name: "boo-pressing", own_element: true });
//! assert_eq!(events, vec![PressEvent::PressingEnded]);
//! assert_eq!(press.class_name(), "is-pressed");
//! assert!(press.settled());
//! ```

use alloc::vec::Vec;

use canopy_declare::{Declared, RestrictionPolicy, Restrictions};
use canopy_transition::{AnimationEnd, AnimationPattern, AnimationStart, Phase};

#[cfg(feature = "pointer")]
use kurbo::Point;

use crate::switch::{Switch, SwitchEvent, SwitchInputs};

/// CSS custom-property names published by the press machine.
///
/// Style layers gate their declarations on whether these are set or
/// `unset`; the names are part of the public contract.
pub mod css {
    /// Set to the pressing keyframes while animating toward pressed.
    pub const ANIMATION_PRESSING: &str = "animationPressing";
    /// Set to the releasing keyframes while animating toward released.
    pub const ANIMATION_RELEASING: &str = "animationReleasing";
    /// Set while the settled state is pressed.
    pub const IS_PRESSED: &str = "isPressed";
    /// Set while the settled state is released.
    pub const IS_RELEASED: &str = "isReleased";
}

/// Keys that activate a press, per platform button conventions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The space bar.
    Space,
    /// The enter/return key.
    Enter,
    /// Any other key; never activates.
    Other,
}

impl Key {
    fn activates(self) -> bool {
        matches!(self, Self::Space | Self::Enter)
    }
}

/// The closed set of press phases.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PressPhase {
    /// Settled released.
    Released,
    /// Animating toward pressed.
    Pressing,
    /// Settled pressed.
    Pressed,
    /// Animating toward released.
    Releasing,
}

impl PressPhase {
    /// Projects a raw machine phase into a press phase. Total.
    pub fn from_phase(phase: Phase<bool>) -> Self {
        match phase {
            Phase::Resolved(false) => Self::Released,
            Phase::Resolved(true) => Self::Pressed,
            Phase::Transitioning(c) if c.to => Self::Pressing,
            Phase::Transitioning(_) => Self::Releasing,
        }
    }

    /// The `is-…` classname for this phase.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Released => "is-released",
            Self::Pressing => "is-pressing",
            Self::Pressed => "is-pressed",
            Self::Releasing => "is-releasing",
        }
    }

    /// Returns `true` for the two animating phases.
    pub fn is_transitional(self) -> bool {
        matches!(self, Self::Pressing | Self::Releasing)
    }
}

/// A discrete observable change from a [`PressState`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PressEvent {
    /// A change was requested; in controlled mode the owner has to accept
    /// it and feed the new value back through [`PressInputs::pressed`].
    ChangeRequested {
        /// The requested value.
        pressed: bool,
    },
    /// The driver value actually changed.
    Changed {
        /// The new value.
        pressed: bool,
    },
    /// The pressing animation started.
    PressingStarted,
    /// The pressing animation ended; the machine settled pressed.
    PressingEnded,
    /// The releasing animation started.
    ReleasingStarted,
    /// The releasing animation ended; the machine settled released.
    ReleasingEnded,
}

fn lift(event: SwitchEvent) -> PressEvent {
    match event {
        SwitchEvent::ChangeRequested(pressed) => PressEvent::ChangeRequested { pressed },
        SwitchEvent::Changed(pressed) => PressEvent::Changed { pressed },
        SwitchEvent::Started(c) if c.to => PressEvent::PressingStarted,
        SwitchEvent::Started(_) => PressEvent::ReleasingStarted,
        SwitchEvent::Ended(c) if c.to => PressEvent::PressingEnded,
        SwitchEvent::Ended(_) => PressEvent::ReleasingEnded,
    }
}

/// Static configuration for a [`PressState`].
///
/// Everything is enumerated and defaulted; hosts override what they need
/// with the `with_…` builders.
#[derive(Clone, Debug)]
pub struct PressConfig {
    /// Initial value in uncontrolled mode. Consumed once, at construction.
    pub default_pressed: bool,
    /// One-shot environment probe at attach time; overrides the initial
    /// value so mounting never flashes.
    pub probe: Option<bool>,
    /// Which animation names belong to this machine.
    pub pattern: AnimationPattern,
    /// Accept matching events bubbled from descendants.
    pub bubbling: bool,
    /// Optional stall budget, in host time units (see
    /// [`PressState::poll`]).
    pub stall_budget: Option<u64>,
    /// Whether Space/Enter activate the press.
    pub keyboard: bool,
    /// Cancel an active pointer press once the pointer wanders further
    /// than this distance from where it went down.
    #[cfg(feature = "pointer")]
    pub cancel_slop: Option<f64>,
}

impl Default for PressConfig {
    fn default() -> Self {
        Self {
            default_pressed: false,
            probe: None,
            pattern: AnimationPattern::suffixes(["pressing", "releasing"]),
            bubbling: false,
            stall_budget: None,
            keyboard: true,
            #[cfg(feature = "pointer")]
            cancel_slop: None,
        }
    }
}

impl PressConfig {
    /// Sets the uncontrolled initial value.
    #[must_use]
    pub fn with_default_pressed(mut self, default_pressed: bool) -> Self {
        self.default_pressed = default_pressed;
        self
    }

    /// Sets the one-shot attach-time probe result.
    #[must_use]
    pub fn with_probe(mut self, probe: Option<bool>) -> Self {
        self.probe = probe;
        self
    }

    /// Sets the animation-name pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: AnimationPattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Accepts matching events bubbled from descendants.
    #[must_use]
    pub fn with_bubbling(mut self, bubbling: bool) -> Self {
        self.bubbling = bubbling;
        self
    }

    /// Configures the stall budget.
    #[must_use]
    pub fn with_stall_budget(mut self, budget: u64) -> Self {
        self.stall_budget = Some(budget);
        self
    }

    /// Enables or disables keyboard activation.
    #[must_use]
    pub fn with_keyboard(mut self, keyboard: bool) -> Self {
        self.keyboard = keyboard;
        self
    }

    /// Sets the pointer cancel slop distance.
    #[cfg(feature = "pointer")]
    #[must_use]
    pub fn with_cancel_slop(mut self, slop: f64) -> Self {
        self.cancel_slop = Some(slop);
        self
    }
}

/// The per-update input snapshot for a [`PressState`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PressInputs {
    /// The declarative press request. Anything but [`Declared::Auto`]
    /// puts the machine in controlled mode.
    pub pressed: Declared<bool>,
    /// A pre-resolved override (also implies controlled mode).
    pub computed: Option<bool>,
    /// The value offered by the ancestor cascade, for
    /// [`Declared::Inherit`].
    pub inherited: Option<bool>,
    /// Active restrictions; a disabled control is forced released and its
    /// handlers go inert.
    pub restrictions: Restrictions,
}

impl From<PressInputs> for SwitchInputs {
    fn from(inputs: PressInputs) -> Self {
        Self {
            declared: inputs.pressed,
            computed: inputs.computed,
            inherited: inputs.inherited,
            restrictions: inputs.restrictions,
        }
    }
}

/// An animation-aware pressed/released interaction state.
#[derive(Clone, Debug)]
pub struct PressState {
    switch: Switch,
    keyboard: bool,
    #[cfg(feature = "pointer")]
    pressed_at: Option<Point>,
    #[cfg(feature = "pointer")]
    cancel_slop: Option<f64>,
}

impl PressState {
    /// Builds the machine from its configuration and first inputs.
    pub fn new(config: PressConfig, inputs: PressInputs) -> Self {
        // A disabled press control resolves to released; read-only does
        // not affect pressing.
        let policy = RestrictionPolicy {
            disabled: Some(false),
            read_only: None,
        };
        Self {
            switch: Switch::new(
                inputs.into(),
                config.default_pressed,
                config.probe,
                false,
                policy,
                config.pattern,
                config.bubbling,
                config.stall_budget,
            ),
            keyboard: config.keyboard,
            #[cfg(feature = "pointer")]
            pressed_at: None,
            #[cfg(feature = "pointer")]
            cancel_slop: config.cancel_slop,
        }
    }

    /// The driver value: `true` while pressed, unlagged by animation.
    pub fn is_pressed(&self) -> bool {
        self.switch.value()
    }

    /// The settled value, lagging until the animation completes.
    pub fn settled(&self) -> bool {
        self.switch.settled()
    }

    /// The current press phase.
    pub fn phase(&self) -> PressPhase {
        PressPhase::from_phase(self.switch.phase())
    }

    /// The current `is-…` classname.
    pub fn class_name(&self) -> &'static str {
        self.phase().class_name()
    }

    /// Returns `true` while a press/release animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.switch.is_animating()
    }

    /// Returns `true` if the machine is in controlled mode.
    pub fn is_controlled(&self) -> bool {
        self.switch.is_controlled()
    }

    /// Re-resolves declarative inputs on a host update.
    pub fn update(&mut self, inputs: PressInputs) -> Vec<PressEvent> {
        self.lifted(|switch| switch.update(inputs.into()))
    }

    /// The stable change dispatcher.
    pub fn dispatch(&mut self, pressed: bool) -> Vec<PressEvent> {
        self.lifted(|switch| switch.dispatch(pressed))
    }

    /// Pointer went down on the element.
    #[cfg(feature = "pointer")]
    pub fn pointer_down(&mut self, position: Point) -> Vec<PressEvent> {
        if self.is_disabled() {
            return Vec::new();
        }
        self.pressed_at = Some(position);
        self.dispatch(true)
    }

    /// Pointer moved while possibly mid-press.
    ///
    /// With a configured cancel slop, wandering too far from the
    /// down-position releases the press (touch semantics).
    #[cfg(feature = "pointer")]
    pub fn pointer_move(&mut self, position: Point) -> Vec<PressEvent> {
        let (Some(origin), Some(slop)) = (self.pressed_at, self.cancel_slop) else {
            return Vec::new();
        };
        if (position - origin).hypot() > slop {
            self.pressed_at = None;
            return self.dispatch(false);
        }
        Vec::new()
    }

    /// Pointer went up; the press releases.
    #[cfg(feature = "pointer")]
    pub fn pointer_up(&mut self, _position: Point) -> Vec<PressEvent> {
        self.pressed_at = None;
        self.dispatch(false)
    }

    /// The pointer interaction was canceled by the platform.
    #[cfg(feature = "pointer")]
    pub fn pointer_cancel(&mut self) -> Vec<PressEvent> {
        self.pressed_at = None;
        self.dispatch(false)
    }

    /// Key went down; Space/Enter activate when keyboard is enabled.
    ///
    /// Key repeat is harmless: repeated activations of an already-pressed
    /// machine are no-ops.
    pub fn key_down(&mut self, key: Key) -> Vec<PressEvent> {
        if !self.keyboard || !key.activates() || self.is_disabled() {
            return Vec::new();
        }
        self.dispatch(true)
    }

    /// Key went up; an activating key releases the press.
    pub fn key_up(&mut self, key: Key) -> Vec<PressEvent> {
        if !self.keyboard || !key.activates() {
            return Vec::new();
        }
        self.dispatch(false)
    }

    /// Observes a browser animation-start event; returns `true` if it
    /// was accepted for the in-flight leg.
    pub fn animation_start(&mut self, event: AnimationStart<'_>) -> bool {
        self.switch.animation_start(event)
    }

    /// Observes a browser animation-end event.
    pub fn animation_end(&mut self, event: AnimationEnd<'_>) -> Vec<PressEvent> {
        self.lifted(|switch| switch.animation_end(event))
    }

    /// Drives the stall budget from the host's clock.
    pub fn poll(&mut self, now: u64) -> Vec<PressEvent> {
        self.lifted(|switch| switch.poll(now))
    }

    fn is_disabled(&self) -> bool {
        self.switch.restrictions().contains(Restrictions::DISABLED)
    }

    fn lifted(&mut self, f: impl FnOnce(&mut Switch) -> Vec<SwitchEvent>) -> Vec<PressEvent> {
        f(&mut self.switch).into_iter().map(lift).collect()
    }
}
