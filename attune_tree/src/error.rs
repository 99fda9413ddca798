// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time errors.

use alloc::string::String;

use crate::types::{NodeId, NodeKind};

/// A bug in the code describing the tree.
///
/// These are never runtime conditions: the first one raised during a rebuild
/// poisons the [`Builder`](crate::Builder), and [`Tree::commit`](crate::Tree::commit)
/// rejects the whole rebuild, keeping the previous snapshot current.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// The derived id collides with [`NodeId::ROOT`] or [`NodeId::INVALID`].
    #[error("node '{name}' derives the reserved id {id}")]
    ReservedId {
        /// Name the id was derived from.
        name: String,
        /// Offending id.
        id: NodeId,
    },
    /// Two rows of one snapshot derive the same id.
    #[error("duplicate id {id} for node '{name}' (same name under the same parent?)")]
    DuplicateId {
        /// Name of the second row.
        name: String,
        /// Offending id.
        id: NodeId,
    },
    /// `close_container` did not match the innermost open container.
    #[error("unbalanced close of {found}: innermost open container is {expected:?}")]
    UnbalancedClose {
        /// Innermost open container, if any.
        expected: Option<NodeId>,
        /// Container the caller tried to close.
        found: NodeId,
    },
    /// The rebuild ended with containers still open.
    #[error("{count} container(s) left open at end of rebuild")]
    UnclosedContainers {
        /// Number of containers still open.
        count: usize,
    },
    /// A leaf kind was opened as a container, or a container kind added as a leaf.
    #[error("node '{name}' cannot be added as {kind:?} here")]
    KindMismatch {
        /// Name of the node.
        name: String,
        /// Kind passed by the caller.
        kind: NodeKind,
    },
    /// An operation referenced an id that was not built in this rebuild.
    #[error("node {id} is not part of this rebuild")]
    UnknownNode {
        /// Offending id.
        id: NodeId,
    },
    /// The finished rows do not form a depth-first preorder.
    #[error("row {index} breaks depth-first preorder")]
    NotPreorder {
        /// First offending row index.
        index: usize,
    },
}
