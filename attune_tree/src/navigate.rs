// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural navigation over a [`Snapshot`].
//!
//! All queries are answered from the depth column alone: a node's subtree is the
//! contiguous block after it whose depths are strictly greater than its own.

use crate::snapshot::Snapshot;
use crate::types::NodeId;

/// A structural relation to follow from a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The containing node; [`NodeId::ROOT`] for top-level nodes.
    Parent,
    /// The first child, if the node is a container with children.
    FirstChild,
    /// The last child, if the node is a container with children.
    LastChild,
    /// The next node with the same parent.
    NextSibling,
    /// The previous node with the same parent.
    PrevSibling,
}

impl Snapshot {
    /// Follow `direction` from `id`.
    ///
    /// Returns `None` when there is no such node, including when `id` is stale.
    /// From [`NodeId::ROOT`], `FirstChild` and `LastChild` reach the first and last
    /// top-level nodes; every other direction returns `None`.
    pub fn navigate(&self, id: NodeId, direction: Direction) -> Option<NodeId> {
        if id.is_root() {
            return match direction {
                Direction::FirstChild => self.ids.first().copied(),
                Direction::LastChild => self.last_at_depth(0, 0, self.len()),
                _ => None,
            };
        }
        let i = self.index_of(id)?;
        match direction {
            Direction::Parent => Some(self.parents[i]),
            Direction::FirstChild => self.first_child_of(i),
            Direction::LastChild => self.last_child_of(i),
            Direction::NextSibling => self.next_sibling_of(i),
            Direction::PrevSibling => self.prev_sibling_of(i),
        }
    }

    /// Parent of `id`, [`NodeId::ROOT`] for top-level nodes.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.navigate(id, Direction::Parent)
    }

    /// Iterate over the children of `id` in declaration order.
    ///
    /// [`NodeId::ROOT`] yields the top-level nodes. Stale ids yield nothing.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let next = self.navigate(id, Direction::FirstChild);
        Children {
            snapshot: self,
            next,
        }
    }

    /// One past the last row of the subtree rooted at row `index`.
    pub fn subtree_end(&self, index: usize) -> usize {
        let depth = self.depths[index];
        self.depths[index + 1..]
            .iter()
            .position(|&d| d <= depth)
            .map_or(self.len(), |p| index + 1 + p)
    }

    fn first_child_of(&self, i: usize) -> Option<NodeId> {
        if !self.kinds[i].is_container() {
            return None;
        }
        let c = i + 1;
        (c < self.len() && self.depths[c] == self.depths[i] + 1).then(|| self.ids[c])
    }

    fn last_child_of(&self, i: usize) -> Option<NodeId> {
        if !self.kinds[i].is_container() {
            return None;
        }
        self.last_at_depth(self.depths[i] + 1, i + 1, self.subtree_end(i))
    }

    fn last_at_depth(&self, depth: usize, start: usize, end: usize) -> Option<NodeId> {
        (start..end)
            .rev()
            .find(|&j| self.depths[j] == depth)
            .map(|j| self.ids[j])
    }

    fn next_sibling_of(&self, i: usize) -> Option<NodeId> {
        let depth = self.depths[i];
        for j in i + 1..self.len() {
            let d = self.depths[j];
            if d < depth {
                return None;
            }
            if d == depth {
                debug_assert_eq!(self.parents[j], self.parents[i], "sibling parents differ");
                return Some(self.ids[j]);
            }
        }
        None
    }

    fn prev_sibling_of(&self, i: usize) -> Option<NodeId> {
        let depth = self.depths[i];
        for j in (0..i).rev() {
            let d = self.depths[j];
            if d < depth {
                return None;
            }
            if d == depth {
                debug_assert_eq!(self.parents[j], self.parents[i], "sibling parents differ");
                return Some(self.ids[j]);
            }
        }
        None
    }
}

/// Iterator over the children of a node, returned by [`Snapshot::children`].
#[derive(Clone, Debug)]
pub struct Children<'a> {
    snapshot: &'a Snapshot,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.snapshot.navigate(current, Direction::NextSibling);
        Some(current)
    }
}
