// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The columnar, depth-first ordered row store.

use alloc::{string::String, vec::Vec};
use hashbrown::HashMap;
use kurbo::{Point, Rect};
use rustc_hash::FxBuildHasher;

use crate::error::BuildError;
use crate::types::{NodeId, NodeInfo, NodeKind};

/// One finished rebuild of the tree.
///
/// Rows are stored column by column, in depth-first preorder: the descendants of
/// row `i` occupy the contiguous block right after it, each deeper than `i`, and
/// the block ends at the first later row whose depth is `<=` the depth of `i`.
/// Siblings appear in declaration order.
///
/// Lookups go through an id → row index map, rebuilt together with the rows.
#[derive(Clone, Default)]
pub struct Snapshot {
    pub(crate) ids: Vec<NodeId>,
    pub(crate) names: Vec<String>,
    pub(crate) kinds: Vec<NodeKind>,
    pub(crate) depths: Vec<usize>,
    pub(crate) parents: Vec<NodeId>,
    pub(crate) rects: Vec<Rect>,
    /// Own text plus the text of all descendants, in chars.
    pub(crate) text_lens: Vec<usize>,
    pub(crate) index: HashMap<NodeId, usize, FxBuildHasher>,
}

impl core::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Snapshot")
            .field("rows", &self.ids.len())
            .field("top_level", &self.depths.iter().filter(|&&d| d == 0).count())
            .finish_non_exhaustive()
    }
}

impl Snapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(rows: usize) -> Self {
        Self {
            ids: Vec::with_capacity(rows),
            names: Vec::with_capacity(rows),
            kinds: Vec::with_capacity(rows),
            depths: Vec::with_capacity(rows),
            parents: Vec::with_capacity(rows),
            rects: Vec::with_capacity(rows),
            text_lens: Vec::with_capacity(rows),
            index: HashMap::with_capacity_and_hasher(rows, FxBuildHasher),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if the snapshot has no rows.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// All ids, in preorder.
    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }

    /// Row index of `id`, or `None` if it is not part of this snapshot.
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        let found = self.index.get(&id).copied();
        if found.is_none() {
            tracing::trace!(target: "attune_tree", %id, "lookup of id absent from snapshot");
        }
        found
    }

    /// Returns true if `id` is a row of this snapshot.
    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Look up a node by id.
    pub fn get(&self, id: NodeId) -> Option<NodeInfo<'_>> {
        self.index_of(id).map(|i| self.row(i))
    }

    /// The row at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn row(&self, index: usize) -> NodeInfo<'_> {
        NodeInfo {
            id: self.ids[index],
            name: &self.names[index],
            kind: self.kinds[index],
            parent: self.parents[index],
            depth: self.depths[index],
            rect: self.rects[index],
            text_len: self.text_lens[index],
        }
    }

    /// Kind of the row at `index`.
    pub fn kind_at(&self, index: usize) -> NodeKind {
        self.kinds[index]
    }

    /// Depth of the row at `index`.
    pub fn depth_at(&self, index: usize) -> usize {
        self.depths[index]
    }

    /// Id of the row at `index`.
    pub fn id_at(&self, index: usize) -> NodeId {
        self.ids[index]
    }

    /// Screen-relative bounds of the row at `index`.
    pub fn rect_at(&self, index: usize) -> Rect {
        self.rects[index]
    }

    /// Text owned directly by the row at `index`.
    ///
    /// Containers own no text: their name labels them but is not part of their content.
    pub fn own_text(&self, index: usize) -> &str {
        if self.kinds[index].is_container() {
            ""
        } else {
            &self.names[index]
        }
    }

    /// Length in chars of [`Snapshot::own_text`].
    pub fn own_text_len(&self, index: usize) -> usize {
        self.own_text(index).chars().count()
    }

    /// Returns true if `candidate` is a strict ancestor of `of`.
    ///
    /// [`NodeId::ROOT`] is an ancestor of every node in the snapshot.
    pub fn is_ancestor(&self, candidate: NodeId, of: NodeId) -> bool {
        let mut current = of;
        while let Some(i) = self.index_of(current) {
            let parent = self.parents[i];
            if parent == candidate {
                return true;
            }
            if parent.is_root() {
                return false;
            }
            current = parent;
        }
        false
    }

    /// Deepest node whose bounds contain `point`.
    ///
    /// Among nodes of equal depth, the later row wins. Nodes with empty bounds never match.
    pub fn hit_test(&self, point: Point) -> Option<NodeId> {
        let mut best: Option<usize> = None;
        for (i, rect) in self.rects.iter().enumerate() {
            if rect.width() <= 0.0 || rect.height() <= 0.0 || !rect.contains(point) {
                continue;
            }
            if best.is_none_or(|b| self.depths[i] >= self.depths[b]) {
                best = Some(i);
            }
        }
        best.map(|i| self.ids[i])
    }

    /// Log the structure of the tree at `debug` level, marking `focused` with `*`.
    pub fn log_structure(&self, focused: NodeId) {
        tracing::debug!(target: "attune_tree", rows = self.len(), "tree structure");
        for i in 0..self.len() {
            let marker = if self.ids[i] == focused { "*" } else { "" };
            tracing::debug!(
                target: "attune_tree",
                "{:indent$}node: type({}) {}{} ({}) len({})",
                "",
                self.kinds[i].label(),
                self.ids[i],
                marker,
                self.names[i],
                self.text_lens[i],
                indent = 2 + 4 * self.depths[i],
            );
        }
    }

    /// Check the depth-first preorder invariant.
    ///
    /// Every row is at most one level deeper than the row before it, its parent is
    /// the closest preceding row one level up, and only containers have children.
    pub fn validate(&self) -> Result<(), BuildError> {
        // Stack of row indices along the path to the current row.
        let mut path: Vec<usize> = Vec::new();
        for i in 0..self.len() {
            let depth = self.depths[i];
            if depth > path.len() {
                return Err(BuildError::NotPreorder { index: i });
            }
            path.truncate(depth);
            let expected_parent = path.last().map_or(NodeId::ROOT, |&p| self.ids[p]);
            if self.parents[i] != expected_parent {
                return Err(BuildError::NotPreorder { index: i });
            }
            if let Some(&p) = path.last()
                && !self.kinds[p].is_container()
            {
                return Err(BuildError::NotPreorder { index: i });
            }
            if self.index.get(&self.ids[i]) != Some(&i) {
                return Err(BuildError::NotPreorder { index: i });
            }
            path.push(i);
        }
        Ok(())
    }
}
