// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Queries and commands issued by an accessibility bridge.
//!
//! Bridges hold node ids, never references, so every call here may receive an id
//! from an older snapshot. Such calls answer "not found" and never panic.

use alloc::{string::String, vec::Vec};

use attune_event_state::keyboard::{Gesture, Keyboard};
use attune_focus::Step;
use attune_text::{TextRange, TextUnit, Unsupported};
use attune_tree::{Capabilities, Direction, NodeId, NodeInfo, NodeKind, Point, Rect};

use crate::context::TreeContext;

impl TreeContext {
    /// Look up a node of the current snapshot.
    pub fn get_node(&self, id: NodeId) -> Option<NodeInfo<'_>> {
        self.snapshot().get(id)
    }

    /// Follow `direction` from `id`.
    pub fn navigate(&self, id: NodeId, direction: Direction) -> Option<NodeId> {
        self.snapshot().navigate(id, direction)
    }

    /// What a bridge may do with `id`.
    pub fn capabilities(&self, id: NodeId) -> Option<Capabilities> {
        self.get_node(id).map(|n| n.kind.capabilities())
    }

    /// Read-only value of a node that exposes one.
    pub fn value(&self, id: NodeId) -> Option<&str> {
        let node = self.get_node(id)?;
        node.kind
            .capabilities()
            .contains(Capabilities::VALUE)
            .then_some(node.name)
    }

    /// Deepest node under `point`.
    pub fn node_at_point(&self, point: Point) -> Option<NodeId> {
        self.snapshot().hit_test(point)
    }

    /// The focused node.
    pub fn get_focus(&self) -> Option<NodeId> {
        self.focus.current()
    }

    /// Returns true if `id` holds focus.
    pub fn has_focus(&self, id: NodeId) -> bool {
        self.focus.is_focused(id)
    }

    /// Focus `id`. Returns false if it is not a focusable node of the current snapshot.
    ///
    /// Requesting the node that already holds focus succeeds without raising an event.
    pub fn request_focus(&mut self, id: NodeId) -> bool {
        let focusable = self
            .capabilities(id)
            .is_some_and(|c| c.contains(Capabilities::FOCUSABLE));
        if focusable {
            self.focus.set_focus(id);
        }
        focusable
    }

    /// Move focus one step in row order, following [`Config::wrap`](crate::Config::wrap).
    pub fn advance_focus(&mut self, step: Step) -> Option<NodeId> {
        self.focus.advance(
            step,
            self.tree.snapshot().ids(),
            self.config.wrap,
            self.config.focus_first_on_advance,
        )
    }

    /// Activate `id`. Returns false if it has no action.
    pub fn activate(&mut self, id: NodeId) -> bool {
        self.actions.activate(id)
    }

    /// Apply keyboard gestures: focus moves, then activation of a focused button.
    pub fn handle_gestures(&mut self, gestures: &[Gesture]) {
        for &gesture in gestures {
            match gesture {
                Gesture::FocusNext => {
                    self.advance_focus(Step::Forward);
                }
                Gesture::FocusPrev => {
                    self.advance_focus(Step::Backward);
                }
                Gesture::Activate => {
                    let button = self
                        .get_focus()
                        .filter(|&id| self.get_node(id).is_some_and(|n| n.kind == NodeKind::Button));
                    if let Some(id) = button {
                        self.activate(id);
                    }
                }
            }
        }
    }

    /// Apply the gestures of the latest [`Keyboard::update`].
    pub fn handle_keyboard(&mut self, keyboard: &Keyboard) {
        self.handle_gestures(keyboard.gestures());
    }

    /// Text of `range`.
    pub fn get_text(&self, range: &TextRange) -> String {
        attune_text::get_text(self.snapshot(), range)
    }

    /// Text of `range`, at most `max_chars` chars.
    pub fn get_text_bounded(&self, range: &TextRange, max_chars: usize) -> String {
        attune_text::get_text_bounded(self.snapshot(), range, max_chars)
    }

    /// Search `range` for `needle`.
    pub fn find_text(
        &self,
        range: &TextRange,
        needle: &str,
        backward: bool,
        ignore_case: bool,
    ) -> Option<TextRange> {
        attune_text::find_text(self.snapshot(), range, needle, backward, ignore_case)
    }

    /// Bounds of the nodes `range` spans, clipped to [`Config::viewport`](crate::Config::viewport).
    pub fn bounding_rects(&self, range: &TextRange) -> Vec<Rect> {
        attune_text::bounding_rects(self.snapshot(), range, self.config.clip())
    }

    /// Deepest node containing `range`.
    pub fn enclosing_node(&self, range: &TextRange) -> Option<NodeId> {
        attune_text::enclosing_node(self.snapshot(), range)
    }

    /// Range covering the content of `id`.
    pub fn document_range(&self, id: NodeId) -> Option<TextRange> {
        attune_text::document_range(self.snapshot(), id)
    }

    /// Nodes starting inside `range`.
    pub fn range_children(&self, range: &TextRange) -> Vec<NodeId> {
        attune_text::children(self.snapshot(), range)
    }

    /// Expand `range` to the enclosing `unit`.
    pub fn expand_to_unit(
        &self,
        range: &TextRange,
        unit: TextUnit,
    ) -> Result<Option<TextRange>, Unsupported> {
        attune_text::expand_to_unit(self.snapshot(), range, unit)
    }

    /// Move `range` by `count` units.
    pub fn move_by_unit(
        &self,
        range: &TextRange,
        unit: TextUnit,
        count: isize,
    ) -> Result<(TextRange, isize), Unsupported> {
        attune_text::move_by_unit(self.snapshot(), range, unit, count)
    }
}
