// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The resolution context and the total `resolve` function.

use crate::declared::Declared;
use crate::restrict::{RestrictionPolicy, Restrictions};

/// A snapshot of everything a declarative request resolves against.
///
/// Hosts rebuild this on every update from current props and context; it is
/// cheap to construct and never stored. The cascade value is an explicit
/// field rather than ambient state, keeping resolution a pure function of
/// its arguments.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ResolveContext<T> {
    /// A pre-resolved override, e.g. derived from live interaction or a
    /// validation pass. Beats the declared value when present.
    pub computed: Option<T>,
    /// The value offered by the ancestor cascade, consulted by
    /// [`Declared::Inherit`].
    pub inherited: Option<T>,
    /// Restrictions currently active on the component.
    pub restrictions: Restrictions,
    /// How active restrictions map to forced values.
    pub policy: RestrictionPolicy<T>,
    /// The value of last resort.
    pub fallback: T,
}

impl<T: Copy> ResolveContext<T> {
    /// A context with no overrides, no cascade value, and no restrictions.
    pub fn new(fallback: T) -> Self {
        Self {
            computed: None,
            inherited: None,
            restrictions: Restrictions::empty(),
            policy: RestrictionPolicy::none(),
            fallback,
        }
    }

    /// Sets the computed override.
    #[must_use]
    pub fn with_computed(mut self, computed: Option<T>) -> Self {
        self.computed = computed;
        self
    }

    /// Sets the ancestor cascade value.
    #[must_use]
    pub fn with_inherited(mut self, inherited: Option<T>) -> Self {
        self.inherited = inherited;
        self
    }

    /// Sets the active restrictions and the policy mapping them to values.
    #[must_use]
    pub fn with_restrictions(
        mut self,
        restrictions: Restrictions,
        policy: RestrictionPolicy<T>,
    ) -> Self {
        self.restrictions = restrictions;
        self.policy = policy;
        self
    }
}

/// Collapses a declarative request into a concrete value.
///
/// Precedence, highest first:
///
/// 1. A value forced by an active restriction.
/// 2. The computed override.
/// 3. An explicit [`Declared::Value`].
/// 4. [`Declared::Inherit`] — the cascade value, falling back when absent.
/// 5. [`Declared::Auto`] — the fallback (the computed input, had there been
///    one, was already consumed in step 2).
///
/// Total and pure: defined for every input, no side effects, no panics.
pub fn resolve<T: Copy>(declared: Declared<T>, cx: &ResolveContext<T>) -> T {
    if let Some(forced) = cx.policy.forced(cx.restrictions) {
        return forced;
    }
    if let Some(computed) = cx.computed {
        return computed;
    }
    match declared {
        Declared::Value(v) => v,
        Declared::Inherit => cx.inherited.unwrap_or(cx.fallback),
        Declared::Auto => cx.fallback,
    }
}
