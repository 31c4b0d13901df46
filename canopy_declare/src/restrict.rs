// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Restriction flags and the policy mapping them to forced values.

bitflags::bitflags! {
    /// Contextual restrictions active on a component.
    ///
    /// Restrictions are supplied by the host (often cascaded from an
    /// ancestor) and take precedence over every other resolution input.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Restrictions: u8 {
        /// The component is disabled and does not react to interaction.
        const DISABLED  = 0b0000_0001;
        /// The component is read-only: visible and focusable, but its
        /// value cannot be edited.
        const READ_ONLY = 0b0000_0010;
    }
}

impl Default for Restrictions {
    fn default() -> Self {
        Self::empty()
    }
}

/// Maps active [`Restrictions`] to the concrete value they force, if any.
///
/// Not every state reacts to every restriction: a disabled button forces
/// its press state to released, but a disabled input keeps whatever
/// validity it last had. Fields left as `None` leave resolution to the
/// remaining inputs.
///
/// When both restrictions are active and both force a value, `disabled`
/// wins.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RestrictionPolicy<T> {
    /// Value forced while [`Restrictions::DISABLED`] is active.
    pub disabled: Option<T>,
    /// Value forced while [`Restrictions::READ_ONLY`] is active.
    pub read_only: Option<T>,
}

impl<T: Copy> RestrictionPolicy<T> {
    /// A policy that forces no value under any restriction.
    pub fn none() -> Self {
        Self {
            disabled: None,
            read_only: None,
        }
    }

    /// A policy that forces `value` under either restriction.
    pub fn force(value: T) -> Self {
        Self {
            disabled: Some(value),
            read_only: Some(value),
        }
    }

    /// Returns the value forced by the given active restrictions, if any.
    pub fn forced(&self, active: Restrictions) -> Option<T> {
        if active.contains(Restrictions::DISABLED)
            && let Some(v) = self.disabled
        {
            return Some(v);
        }
        if active.contains(Restrictions::READ_ONLY)
            && let Some(v) = self.read_only
        {
            return Some(v);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_restrictions_force_nothing() {
        let policy = RestrictionPolicy::force(false);
        assert_eq!(policy.forced(Restrictions::empty()), None);
    }

    #[test]
    fn disabled_forces_configured_value() {
        let policy = RestrictionPolicy {
            disabled: Some(false),
            read_only: None,
        };
        assert_eq!(policy.forced(Restrictions::DISABLED), Some(false));
        // Read-only is configured to force nothing.
        assert_eq!(policy.forced(Restrictions::READ_ONLY), None);
    }

    #[test]
    fn disabled_wins_over_read_only() {
        let policy = RestrictionPolicy {
            disabled: Some(1_i64),
            read_only: Some(2_i64),
        };
        let both = Restrictions::DISABLED | Restrictions::READ_ONLY;
        assert_eq!(policy.forced(both), Some(1));
    }
}
