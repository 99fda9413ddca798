// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behavior knobs for a [`TreeContext`](crate::TreeContext).

use attune_focus::WrapMode;
use kurbo::Rect;

/// Configuration of a [`TreeContext`](crate::TreeContext).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    /// Visible area that text bounds are clipped to. [`Rect::ZERO`] disables clipping.
    pub viewport: Rect,
    /// What focus traversal does at the first and last node.
    pub wrap: WrapMode,
    /// When nothing is focused, traversal in either direction starts at the first
    /// node. When false, backward traversal starts at the last node instead.
    pub focus_first_on_advance: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport: Rect::ZERO,
            wrap: WrapMode::Never,
            focus_first_on_advance: true,
        }
    }
}

impl Config {
    /// The viewport as a clip, or `None` when clipping is disabled.
    pub fn clip(&self) -> Option<Rect> {
        (self.viewport != Rect::ZERO).then_some(self.viewport)
    }
}
