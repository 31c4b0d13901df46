// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_declare --heading-base-level=0

//! Canopy Declare: declarative interaction-state resolution for UI.
//!
//! Interactive components accept their state in a *declarative* form: a concrete
//! value, or a keyword asking the component to derive the value itself (`auto`)
//! or to pull it from an ancestor (`inherit`). Before anything can render or
//! animate, that declarative input has to be collapsed into a single concrete
//! value, taking into account:
//!
//! - **Restrictions**: a disabled or read-only control cannot hold certain
//!   states (a disabled button resolves to released no matter what was asked).
//! - **Computed overrides**: a pre-resolved value supplied by the host, e.g.
//!   derived from live user interaction or a validation pass.
//! - **Ancestor cascade**: an explicit, read-only value inherited from the
//!   surrounding context.
//! - **Clamping**: numeric index states (carousels, wizards) are clamped to
//!   bounds and snapped to a step grid.
//! - **Fallback**: when nothing else resolves, a documented default wins.
//!
//! Resolution is a total, pure function: it never fails, never allocates, and
//! is safe to re-run on every host update. Nothing in this crate stores state.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_declare::{resolve, Declared, ResolveContext};
//!
//! // An explicit value resolves to itself...
//! let cx = ResolveContext::new(false);
//! assert!(resolve(Declared::Value(true), &cx));
//!
//! // ...while `auto` falls back when no computed value is available.
//! assert!(!resolve(Declared::Auto, &cx));
//! assert!(resolve(Declared::Auto, &cx.with_computed(Some(true))));
//! ```
//!
//! ## Restrictions win
//!
//! ```rust
//! use canopy_declare::{
//!     resolve, Declared, ResolveContext, RestrictionPolicy, Restrictions,
//! };
//!
//! // A disabled press control resolves to released, even when asked to press.
//! let cx = ResolveContext::new(false)
//!     .with_restrictions(Restrictions::DISABLED, RestrictionPolicy::force(false));
//! assert!(!resolve(Declared::Value(true), &cx));
//! ```
//!
//! ## Index clamping
//!
//! ```rust
//! use canopy_declare::IndexBounds;
//!
//! let bounds = IndexBounds::new(0, 4, 1);
//! assert_eq!(bounds.quantize(7.6), 4);
//! assert_eq!(bounds.quantize(2.4), 2);
//! ```
//!
//! This crate is `no_std` compatible and does not allocate.

#![no_std]

mod bounds;
mod declared;
mod resolve;
mod restrict;

pub use bounds::IndexBounds;
pub use declared::Declared;
pub use resolve::{resolve, ResolveContext};
pub use restrict::{RestrictionPolicy, Restrictions};
