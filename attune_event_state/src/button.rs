// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Digital button state with press and release edges.

/// A key or button sampled once per cycle.
///
/// `pressed` and `released` are edges: each is true for exactly the one update in
/// which the held state changed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DigitalButton {
    /// Held during the latest sample.
    pub is_down: bool,
    /// Went down in the latest sample.
    pub pressed: bool,
    /// Went up in the latest sample.
    pub released: bool,
}

impl DigitalButton {
    /// Create a button that is up.
    pub const fn new() -> Self {
        Self {
            is_down: false,
            pressed: false,
            released: false,
        }
    }

    /// Record a new sample and compute its edges.
    pub fn update(&mut self, is_down: bool) {
        let was_down = self.is_down;
        self.is_down = is_down;
        self.pressed = is_down && !was_down;
        self.released = was_down && !is_down;
    }

    /// Clear both edges, keeping the held state.
    pub fn clear_edges(&mut self) {
        self.pressed = false;
        self.released = false;
    }
}
