// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The current snapshot and the rebuild cycle that replaces it.

use alloc::vec::Vec;

use crate::builder::Builder;
use crate::error::BuildError;
use crate::snapshot::Snapshot;
use crate::types::NodeId;

/// Ids that entered or left the tree in one [`Tree::commit`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Churn {
    /// Ids present in the new snapshot but not the previous one, in preorder.
    pub added: Vec<NodeId>,
    /// Ids present in the previous snapshot but not the new one, in previous preorder.
    pub removed: Vec<NodeId>,
}

impl Churn {
    /// Returns true if the set of ids did not change.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Holds the snapshot that every query reads and swaps in new ones.
///
/// The tree is rebuilt wholesale: [`Tree::begin`] hands out a [`Builder`], the
/// caller describes the whole tree, and [`Tree::commit`] replaces the current
/// snapshot. A failed rebuild leaves the previous snapshot in place.
///
/// ## Example
///
/// ```rust
/// use attune_tree::{Direction, NodeId, Tree};
///
/// let mut tree = Tree::new();
/// let mut b = tree.begin();
/// let main = b.pane("Main").unwrap();
/// let close = b.button("Close").unwrap();
/// b.close_container(main).unwrap();
/// let churn = tree.commit(b).unwrap();
/// assert_eq!(churn.added, [main, close]);
///
/// let s = tree.snapshot();
/// assert_eq!(s.navigate(close, Direction::Parent), Some(main));
/// assert_eq!(s.navigate(main, Direction::Parent), Some(NodeId::ROOT));
/// ```
#[derive(Clone, Default)]
pub struct Tree {
    snapshot: Snapshot,
    epoch: u64,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tree")
            .field("rows", &self.snapshot.len())
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

impl Tree {
    /// Create a tree with an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Number of successful commits so far.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Start a rebuild, sized after the current snapshot.
    pub fn begin(&self) -> Builder {
        Builder::with_capacity(self.snapshot.len())
    }

    /// Finish a rebuild started with [`Tree::begin`].
    ///
    /// On error nothing changes: the previous snapshot stays current.
    pub fn commit(&mut self, builder: Builder) -> Result<Churn, BuildError> {
        let next = match builder.end() {
            Ok(next) => next,
            Err(err) => {
                tracing::error!(target: "attune_tree", error = %err, "rebuild rejected");
                return Err(err);
            }
        };
        let churn = self.replace(next);
        Ok(churn)
    }

    /// Install an already finished snapshot.
    pub fn replace(&mut self, next: Snapshot) -> Churn {
        let added = next
            .ids()
            .iter()
            .copied()
            .filter(|&id| !self.snapshot.contains(id))
            .collect();
        let removed = self
            .snapshot
            .ids()
            .iter()
            .copied()
            .filter(|&id| !next.contains(id))
            .collect();
        self.snapshot = next;
        self.epoch += 1;
        Churn { added, removed }
    }
}
