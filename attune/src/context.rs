// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tree context and its rebuild cycle.

use alloc::{boxed::Box, vec::Vec};

use attune_focus::FocusState;
use attune_tree::{BuildError, Builder, Churn, NodeId, NodeKind, Rect, Snapshot, Tree};

use crate::action::{Action, ActionRegistry};
use crate::config::Config;
use crate::events::Events;

/// Everything needed to answer a bridge: the current snapshot, focus, and actions.
///
/// A context is an explicit value: several can coexist, and every query goes through
/// one. Each cycle the application describes the whole tree through a [`Frame`]
/// obtained from [`TreeContext::begin`], commits it with [`Frame::end`], and then
/// forwards [`TreeContext::drain_events`] to the bridge.
///
/// ## Example
///
/// ```rust
/// use attune::TreeContext;
///
/// let mut ctx = TreeContext::default();
/// let mut frame = ctx.begin();
/// let main = frame.pane("Main").unwrap();
/// let close = frame.button("Close", || {}).unwrap();
/// frame.close(main).unwrap();
/// frame.end().unwrap();
///
/// assert!(ctx.request_focus(close));
/// assert!(ctx.activate(close));
/// let events = ctx.drain_events();
/// assert_eq!(events.focus_changed, Some(close));
/// assert_eq!(events.activated.as_slice(), &[close]);
/// ```
#[derive(Debug, Default)]
pub struct TreeContext {
    pub(crate) tree: Tree,
    pub(crate) focus: FocusState<NodeId>,
    pub(crate) actions: ActionRegistry,
    pub(crate) config: Config,
}

impl TreeContext {
    /// Create a context with an empty tree.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        self.tree.snapshot()
    }

    /// Number of committed rebuilds.
    pub fn epoch(&self) -> u64 {
        self.tree.epoch()
    }

    /// Start a rebuild.
    ///
    /// Events of the previous cycle that were not drained are dropped here, and
    /// actions of nodes missing from the current snapshot are pruned.
    pub fn begin(&mut self) -> Frame<'_> {
        self.focus.end_cycle();
        self.actions.clear_activated();
        let snapshot = self.tree.snapshot();
        self.actions.retain(|id| snapshot.contains(id));
        Frame {
            builder: self.tree.begin(),
            actions: Vec::new(),
            focus: None,
            ctx: self,
        }
    }

    /// Take the transitions of the current cycle.
    pub fn drain_events(&mut self) -> Events {
        Events {
            focus_changed: self.focus.take_changed(),
            activated: self.actions.take_activated(),
        }
    }

    /// Dump the current tree at `debug` level, marking the focused node.
    pub fn log_structure(&self) {
        let focused = self.focus.current().unwrap_or(NodeId::INVALID);
        self.tree.snapshot().log_structure(focused);
    }
}

/// One rebuild in progress, created by [`TreeContext::begin`].
///
/// Nothing changes in the context until [`Frame::end`] succeeds. Dropping a frame
/// abandons the rebuild.
#[must_use = "a frame does nothing until `end` is called"]
pub struct Frame<'a> {
    ctx: &'a mut TreeContext,
    builder: Builder,
    actions: Vec<(NodeId, Action)>,
    focus: Option<NodeId>,
}

impl core::fmt::Debug for Frame<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Frame")
            .field("builder", &self.builder)
            .field("actions", &self.actions.len())
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

impl Frame<'_> {
    /// The context being rebuilt, for reading the previous snapshot and focus.
    pub fn context(&self) -> &TreeContext {
        self.ctx
    }

    /// Open a [`NodeKind::Pane`].
    pub fn pane(&mut self, name: &str) -> Result<NodeId, BuildError> {
        self.builder.pane(name)
    }

    /// Open a [`NodeKind::Document`].
    pub fn document(&mut self, name: &str) -> Result<NodeId, BuildError> {
        self.builder.document(name)
    }

    /// Close the innermost open container, which must be `id`.
    pub fn close(&mut self, id: NodeId) -> Result<(), BuildError> {
        self.builder.close_container(id)
    }

    /// Add a paragraph of text.
    pub fn text(&mut self, text: &str) -> Result<NodeId, BuildError> {
        self.builder.text(text)
    }

    /// Add a button whose label is its name, running `action` when activated.
    pub fn button(
        &mut self,
        name: &str,
        action: impl FnMut() + 'static,
    ) -> Result<NodeId, BuildError> {
        self.button_with_text(name, name, action)
    }

    /// Add a button identified by `name` but labelled `text`.
    pub fn button_with_text(
        &mut self,
        name: &str,
        text: &str,
        action: impl FnMut() + 'static,
    ) -> Result<NodeId, BuildError> {
        let id = self.builder.add_leaf_with_text(name, text, NodeKind::Button)?;
        self.actions.push((id, Box::new(action)));
        Ok(id)
    }

    /// Add a leaf of any kind without an action.
    pub fn leaf(&mut self, name: &str, kind: NodeKind) -> Result<NodeId, BuildError> {
        self.builder.add_leaf(name, kind)
    }

    /// Set the screen-relative bounds of a node added in this frame.
    pub fn set_rect(&mut self, id: NodeId, rect: Rect) -> Result<(), BuildError> {
        self.builder.set_rect(id, rect)
    }

    /// Focus `id` once the frame is committed, if it is part of the new tree.
    pub fn request_focus(&mut self, id: NodeId) {
        self.focus = Some(id);
    }

    /// Commit the rebuild.
    ///
    /// The new snapshot replaces the old one, focus on a vanished node is dropped
    /// without an event, and actions of removed nodes are pruned. On error the
    /// context is left exactly as it was before [`TreeContext::begin`].
    pub fn end(self) -> Result<Churn, BuildError> {
        let Self {
            ctx,
            builder,
            actions,
            focus,
        } = self;
        let churn = ctx.tree.commit(builder)?;
        let snapshot = ctx.tree.snapshot();

        ctx.focus.reconcile(|id| snapshot.contains(id));
        if let Some(id) = focus {
            if snapshot.contains(id) {
                ctx.focus.set_focus(id);
            } else {
                tracing::debug!(target: "attune", %id, "requested focus target not built");
            }
        }

        for (id, action) in actions {
            ctx.actions.register(id, action);
        }
        ctx.actions.retain(|id| snapshot.contains(id));
        tracing::trace!(
            target: "attune",
            rows = snapshot.len(),
            added = churn.added.len(),
            removed = churn.removed.len(),
            "rebuild committed"
        );
        Ok(churn)
    }
}
