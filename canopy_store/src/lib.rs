// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_store --heading-base-level=0

//! Canopy Store: hybrid controlled/uncontrolled value storage.
//!
//! Interactive components come in two flavors. A *controlled* component
//! mirrors a value its owner supplies on every update and asks the owner to
//! change it; an *uncontrolled* component seeds itself from a default once
//! and manages the value itself from then on. [`ValueStore`] unifies both
//! behind a single `value()` and a single [`dispatch`](ValueStore::dispatch),
//! so the state machinery layered on top never needs to know which mode it
//! is running in.
//!
//! The mode is frozen at construction. Components that flip a prop between
//! supplied and absent across updates are misusing the pattern; the store
//! flags that in debug builds and otherwise ignores the stray call.
//!
//! ## Controlled
//!
//! ```rust
//! use canopy_store::ValueStore;
//!
//! let mut store = ValueStore::controlled(false);
//!
//! // A dispatch is a request to the owner, not a mutation.
//! let dispatch = store.dispatch(true);
//! assert!(!dispatch.applied);
//! assert!(dispatch.changed);
//! assert!(!store.value());
//!
//! // The owner decides, and feeds the new value back in.
//! store.sync(true);
//! assert!(store.value());
//! ```
//!
//! ## Uncontrolled
//!
//! ```rust
//! use canopy_store::ValueStore;
//!
//! let mut store = ValueStore::uncontrolled(false);
//!
//! // A dispatch applies immediately.
//! let dispatch = store.dispatch(true);
//! assert!(dispatch.applied);
//! assert!(store.value());
//! ```
//!
//! This crate is `no_std` compatible and does not allocate.

#![no_std]

/// Which party owns the stored value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mode {
    /// The owner supplies the value; dispatches only notify.
    Controlled,
    /// The store owns the value; dispatches mutate it.
    Uncontrolled,
}

/// The outcome of a [`ValueStore::dispatch`] call.
///
/// `changed` compares the request against the value *before* the dispatch,
/// so controlled hosts can decide whether a change notification is worth
/// forwarding even though the store itself did not mutate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dispatch<T> {
    /// The value that was requested.
    pub requested: T,
    /// `true` if the store mutated (uncontrolled mode only).
    pub applied: bool,
    /// `true` if the request differs from the pre-dispatch value.
    pub changed: bool,
}

/// A value held in either controlled or uncontrolled mode.
///
/// See the [crate docs](crate) for the two usage patterns. The store tracks
/// a [`revision`](Self::revision) that bumps whenever `value()` changes, so
/// hosts can cheaply detect "did anything change since last frame" without
/// keeping their own copy.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ValueStore<T> {
    mode: Mode,
    value: T,
    revision: u64,
}

impl<T: Copy + Eq> ValueStore<T> {
    /// Creates a store in controlled mode, mirroring `value`.
    ///
    /// Keep the mirror current with [`sync`](Self::sync) on every update.
    pub fn controlled(value: T) -> Self {
        Self {
            mode: Mode::Controlled,
            value,
            revision: 0,
        }
    }

    /// Creates a store in uncontrolled mode, seeded from `default`.
    ///
    /// The seed is consumed exactly once, here; later defaults never
    /// re-initialize the store.
    pub fn uncontrolled(default: T) -> Self {
        Self {
            mode: Mode::Uncontrolled,
            value: default,
            revision: 0,
        }
    }

    /// The unified current value, whichever mode the store is in.
    pub fn value(&self) -> T {
        self.value
    }

    /// Returns `true` if the store is in controlled mode.
    pub fn is_controlled(&self) -> bool {
        self.mode == Mode::Controlled
    }

    /// A counter that bumps whenever [`value`](Self::value) changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Mirrors the externally supplied value (controlled mode).
    ///
    /// Ignored in uncontrolled mode: the mode is frozen at construction,
    /// and a stray `sync` must not clobber internally held state. Debug
    /// builds flag the misuse.
    pub fn sync(&mut self, controlled_value: T) {
        debug_assert!(
            self.mode == Mode::Controlled,
            "sync on an uncontrolled store; the mode is frozen at construction"
        );
        if self.mode == Mode::Controlled && self.value != controlled_value {
            self.value = controlled_value;
            self.revision += 1;
        }
    }

    /// Requests a new value.
    ///
    /// In uncontrolled mode the store mutates and reports `applied`. In
    /// controlled mode the store is untouched; the returned record is the
    /// notification the owner reacts to (feeding the accepted value back
    /// via [`sync`](Self::sync)).
    pub fn dispatch(&mut self, requested: T) -> Dispatch<T> {
        let changed = requested != self.value;
        match self.mode {
            Mode::Controlled => Dispatch {
                requested,
                applied: false,
                changed,
            },
            Mode::Uncontrolled => {
                if changed {
                    self.value = requested;
                    self.revision += 1;
                }
                Dispatch {
                    requested,
                    applied: true,
                    changed,
                }
            }
        }
    }
}
