// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation event classification: which browser events belong to a machine.
//!
//! Keyframe animation events bubble, and a component tree runs many
//! animations at once. A machine must only advance on events that belong to
//! it, so every incoming event is classified against a configured
//! [`AnimationPattern`] before it can settle anything. Name matching uses
//! word-boundary suffix semantics: a configured suffix `"pressing"` matches
//! `"boo-pressing"` and `"pressing"` itself, but not `"unpressing"`, where
//! the suffix sits mid-identifier.

use alloc::string::String;
use alloc::vec::Vec;

/// A rule deciding whether an animation name belongs to a machine.
#[derive(Clone, Debug)]
pub enum AnimationPattern {
    /// A single suffix, matched with word-boundary semantics.
    Suffix(String),
    /// Any of several suffixes, each matched with word-boundary semantics.
    Suffixes(Vec<String>),
    /// An arbitrary regular expression over the full animation name.
    #[cfg(feature = "regex")]
    Regex(regex::Regex),
}

impl AnimationPattern {
    /// A pattern matching names that end with `suffix` at a word boundary.
    pub fn suffix(suffix: impl Into<String>) -> Self {
        Self::Suffix(suffix.into())
    }

    /// A pattern matching any of the given suffixes at a word boundary.
    pub fn suffixes<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Suffixes(suffixes.into_iter().map(Into::into).collect())
    }

    /// Returns `true` if `name` belongs to this pattern.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Suffix(suffix) => suffix_matches(name, suffix),
            Self::Suffixes(suffixes) => suffixes.iter().any(|s| suffix_matches(name, s)),
            #[cfg(feature = "regex")]
            Self::Regex(re) => re.is_match(name),
        }
    }
}

/// Word-boundary suffix match, mimicking a `\b` before the suffix.
///
/// The suffix must terminate `name`, and the character immediately before
/// the matched span must be absent or a non-word character. An empty
/// suffix matches every name.
fn suffix_matches(name: &str, suffix: &str) -> bool {
    if !name.ends_with(suffix) {
        return false;
    }
    let boundary = name.len() - suffix.len();
    match name[..boundary].chars().next_back() {
        None => true,
        Some(c) => !is_word_char(c),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A browser `animationstart` event, reduced to what classification needs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AnimationStart<'a> {
    /// The animation (keyframes) name the browser reported.
    pub name: &'a str,
    /// `true` if the event target is the machine's own bound element, as
    /// opposed to a descendant the event bubbled up from.
    pub own_element: bool,
}

/// A browser `animationend` event, reduced to what classification needs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AnimationEnd<'a> {
    /// The animation (keyframes) name the browser reported.
    pub name: &'a str,
    /// `true` if the event target is the machine's own bound element, as
    /// opposed to a descendant the event bubbled up from.
    pub own_element: bool,
}
