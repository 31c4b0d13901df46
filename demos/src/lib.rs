// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Canopy demo binaries.

/// A pretend browser: remembers which keyframes were launched and
/// completes them on demand.
///
/// The demos use this to stand in for the real animation pipeline — a
/// host launches keyframes when a transitional classname appears, and the
/// "browser" later reports each of them finished.
#[derive(Debug, Default)]
pub struct ScriptedAnimations {
    running: Vec<String>,
}

impl ScriptedAnimations {
    /// Creates an empty scripted browser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that the given keyframes started playing.
    pub fn launch(&mut self, name: impl Into<String>) {
        self.running.push(name.into());
    }

    /// Returns `true` while any keyframes are playing.
    pub fn is_busy(&self) -> bool {
        !self.running.is_empty()
    }

    /// Finishes the oldest running keyframes, returning their name.
    pub fn finish_next(&mut self) -> Option<String> {
        if self.running.is_empty() {
            None
        } else {
            Some(self.running.remove(0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finishes_in_launch_order() {
        let mut browser = ScriptedAnimations::new();
        browser.launch("a-pressing");
        browser.launch("a-releasing");
        assert_eq!(browser.finish_next().as_deref(), Some("a-pressing"));
        assert_eq!(browser.finish_next().as_deref(), Some("a-releasing"));
        assert_eq!(browser.finish_next(), None);
    }
}
