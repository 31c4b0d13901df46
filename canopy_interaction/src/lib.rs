// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_interaction --heading-base-level=0

//! Canopy Interaction: animation-aware interaction states for UI
//! components.
//!
//! Each module here is one interaction modality, built from the same three
//! layers: declarative resolution (`canopy_declare`), hybrid
//! controlled/uncontrolled storage (`canopy_store`), and the
//! animation-aware transition machine (`canopy_transition`):
//!
//! - [`press`]: pressed/released, with pointer and keyboard handlers
//! - [`hover`]: entered/left, driven by pointer enter/leave
//! - [`focus`]: focused/blurred, with the focus-visible distinction
//! - [`validity`]: valid/invalid/neutral, with direction-aware classnames
//! - [`view`]: a bounded view index for carousels and wizards
//! - [`collapse`]: expanded/collapsed
//!
//! ## Design Philosophy
//!
//! Every modality follows the same conventions:
//!
//! - **Config + inputs split**: static knobs (animation pattern, defaults,
//!   stall budget) live in a `…Config` built once; per-update data
//!   (declarative request, computed override, cascade value, restrictions)
//!   arrives as a `…Inputs` snapshot on every host update.
//! - **Controlled or uncontrolled, frozen at construction**: an
//!   externally driven request (anything but `auto`) means the owner holds
//!   the value and interaction only emits change requests; `auto` means
//!   the machine holds it. Flipping modes mid-life is flagged in debug
//!   builds and otherwise ignored.
//! - **Event batches, not callbacks**: handlers and observers return
//!   ordered `Vec`s of modality-named events (`PressingStarted`,
//!   `ShiftEnded { .. }`, …). Dropping a state is a complete teardown.
//! - **Closed phases, total classnames**: each modality projects its
//!   machine into a small closed phase enum, and every phase has an
//!   `is-…` classname.
//! - **Published CSS custom-property names**: each modality's `css`
//!   submodule pins the property names style layers rely on.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_interaction::press::{Key, PressConfig, PressInputs, PressState};
//! use canopy_transition::AnimationEnd;
//!
//! let mut press = PressState::new(PressConfig::default(), PressInputs::default());
//!
//! let _ = press.key_down(Key::Space);
//! assert_eq!(press.class_name(), "is-pressing");
//!
//! let _ = press.animation_end(AnimationEnd { name: "btn-pressing", own_element: true });
//! assert_eq!(press.class_name(), "is-pressed");
//! ```
//!
//! ## Features
//!
//! - `pointer`: pointer-position handlers for the press machine (pulls in
//!   the geometry dependency)
//! - `regex`: regular-expression animation patterns (implies `std`)
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod switch;

pub mod collapse;
pub mod focus;
pub mod hover;
pub mod press;
pub mod validity;
pub mod view;
