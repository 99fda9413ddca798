// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attune Focus: focus tracking with edge-triggered change notification.
//!
//! This crate models keyboard focus as a two-state machine: unfocused, or focused on
//! one node. [`FocusState`] records the current target and raises a "changed" flag
//! only on a real transition, so a bridge that announces focus changes hears about
//! each one exactly once.
//!
//! - [`FocusState::set_focus`] is idempotent: repeating the current target is logged
//!   but never flagged.
//! - [`FocusState::advance`] moves to the next or previous candidate in the order
//!   given by the caller (usually the tree's row order), stopping at the ends unless
//!   [`WrapMode::Wrap`] is selected.
//! - [`FocusState::reconcile`] drops a target that no longer exists without raising
//!   the flag: the node vanished, there is no transition to announce.
//!
//! The state is generic over the node identifier `K`, so callers can use
//! `attune_tree::NodeId` or any small, copyable handle.
//!
//! ## Minimal example
//!
//! ```rust
//! use attune_focus::{FocusState, Step, WrapMode};
//!
//! let order = [10_u32, 20, 30];
//! let mut focus = FocusState::new();
//!
//! // With nothing focused, advancing lands on the first candidate.
//! assert_eq!(focus.advance(Step::Forward, &order, WrapMode::Never, true), Some(10));
//! assert_eq!(focus.take_changed(), Some(10));
//!
//! // Repeating the current target is not a transition.
//! focus.set_focus(10);
//! assert_eq!(focus.take_changed(), None);
//!
//! // Without wrapping, backward from the first candidate stays put.
//! assert_eq!(focus.advance(Step::Backward, &order, WrapMode::Never, true), Some(10));
//! assert_eq!(focus.take_changed(), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use core::fmt::Debug;

/// Direction of a linear focus move (for example, Tab and Shift+Tab).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Toward the end of the order.
    Forward,
    /// Toward the start of the order.
    Backward,
}

/// What [`FocusState::advance`] does at either end of the order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Stay on the first or last candidate.
    #[default]
    Never,
    /// Continue from the other end.
    Wrap,
}

/// Current focus target plus a one-cycle "changed" flag.
#[derive(Clone, Debug)]
pub struct FocusState<K> {
    current: Option<K>,
    changed: bool,
}

impl<K> Default for FocusState<K> {
    fn default() -> Self {
        Self {
            current: None,
            changed: false,
        }
    }
}

impl<K> FocusState<K>
where
    K: Copy + Eq + Debug,
{
    /// Create an unfocused state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The focused node, if any.
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Returns true if `id` holds focus.
    pub fn is_focused(&self, id: K) -> bool {
        self.current == Some(id)
    }

    /// Returns true if a transition happened since the flag was last cleared.
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Focus `id`. Returns true if this was a transition.
    pub fn set_focus(&mut self, id: K) -> bool {
        if self.current == Some(id) {
            tracing::debug!(target: "attune_focus", ?id, "redundant set_focus");
            return false;
        }
        tracing::debug!(target: "attune_focus", from = ?self.current, to = ?id, "focus changed");
        self.current = Some(id);
        self.changed = true;
        true
    }

    /// Move focus one step through `order`.
    ///
    /// With nothing focused, or when the focused node is not in `order`, focus goes to
    /// the first candidate if `first_when_unfocused` is set, else to the first
    /// (`Forward`) or last (`Backward`) one. Returns the resulting focus, which is
    /// `None` only when `order` is empty and nothing was focused.
    pub fn advance(
        &mut self,
        step: Step,
        order: &[K],
        wrap: WrapMode,
        first_when_unfocused: bool,
    ) -> Option<K> {
        if let Some(next) = next_in_order(self.current, step, order, wrap, first_when_unfocused) {
            self.set_focus(next);
        }
        self.current
    }

    /// Drop focus if `contains` rejects the focused node.
    ///
    /// A node that disappears is not a transition: the flag is cleared rather than
    /// raised. Returns true if focus was dropped.
    pub fn reconcile(&mut self, contains: impl Fn(K) -> bool) -> bool {
        match self.current {
            Some(id) if !contains(id) => {
                tracing::debug!(target: "attune_focus", ?id, "focused node vanished; focus reset");
                self.current = None;
                self.changed = false;
                true
            }
            _ => false,
        }
    }

    /// Return the focused node if a transition happened, clearing the flag.
    pub fn take_changed(&mut self) -> Option<K> {
        let changed = core::mem::take(&mut self.changed);
        if changed { self.current } else { None }
    }

    /// Clear the flag at the end of a cycle, whether or not it was consumed.
    pub fn end_cycle(&mut self) {
        self.changed = false;
    }
}

/// Candidate that a linear step from `origin` reaches in `order`.
///
/// Returns `None` when `order` is empty or when the step stays on `origin`.
pub fn next_in_order<K>(
    origin: Option<K>,
    step: Step,
    order: &[K],
    wrap: WrapMode,
    first_when_unfocused: bool,
) -> Option<K>
where
    K: Copy + Eq,
{
    let last = order.len().checked_sub(1)?;
    let Some(pos) = origin.and_then(|o| order.iter().position(|&k| k == o)) else {
        return match step {
            _ if first_when_unfocused => Some(order[0]),
            Step::Forward => Some(order[0]),
            Step::Backward => Some(order[last]),
        };
    };
    let next = match (step, wrap) {
        (Step::Forward, _) if pos < last => pos + 1,
        (Step::Forward, WrapMode::Wrap) => 0,
        (Step::Backward, _) if pos > 0 => pos - 1,
        (Step::Backward, WrapMode::Wrap) => last,
        (_, WrapMode::Never) => pos,
    };
    (next != pos).then(|| order[next])
}
