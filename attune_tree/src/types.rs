// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the accessible tree: node identifiers, kinds, and capabilities.

use core::fmt;

use kurbo::Rect;

/// Identifier of a node, derived from its name and its parent's identifier.
///
/// Identifiers are plain values: holding one does not keep a node alive, and an
/// identifier taken from an older snapshot may simply be absent from the current one.
/// Every query treats such a stale identifier as "not found".
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u64);

impl NodeId {
    /// The implicit root that parents every top-level node. Never a row's id.
    pub const ROOT: Self = Self(0);
    /// Reserved marker for "no node". Never a row's id.
    pub const INVALID: Self = Self(u64::MAX);

    /// Wrap a raw identifier, for example one round-tripped through a platform bridge.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns true for the implicit root.
    pub const fn is_root(self) -> bool {
        self.0 == Self::ROOT.0
    }

    /// Returns true unless this is [`NodeId::ROOT`] or [`NodeId::INVALID`].
    pub const fn is_valid(self) -> bool {
        self.0 != Self::ROOT.0 && self.0 != Self::INVALID.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Semantic role of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A grouping of elements.
    Pane,
    /// A readable document; groups paragraphs.
    Document,
    /// A static paragraph of text.
    Text,
    /// An element that can be activated.
    Button,
}

impl NodeKind {
    /// Returns true for kinds that may have children (`Pane`, `Document`).
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Pane | Self::Document)
    }

    /// The capability table entry for this kind.
    pub const fn capabilities(self) -> Capabilities {
        match self {
            Self::Pane => Capabilities::CONTAINER.union(Capabilities::FOCUSABLE),
            Self::Document => Capabilities::TEXT
                .union(Capabilities::VALUE)
                .union(Capabilities::CONTAINER)
                .union(Capabilities::FOCUSABLE),
            Self::Text => Capabilities::TEXT.union(Capabilities::FOCUSABLE),
            Self::Button => Capabilities::INVOKE.union(Capabilities::FOCUSABLE),
        }
    }

    /// Short human-readable name, used in structure dumps.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pane => "Pane",
            Self::Document => "Document",
            Self::Text => "Text",
            Self::Button => "Button",
        }
    }
}

bitflags::bitflags! {
    /// What a bridge may do with a node of a given [`NodeKind`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Exposes its content through text ranges.
        const TEXT      = 0b0000_0001;
        /// Exposes a read-only value (its name).
        const VALUE     = 0b0000_0010;
        /// Can be invoked through the action registry.
        const INVOKE    = 0b0000_0100;
        /// May have children.
        const CONTAINER = 0b0000_1000;
        /// Can receive keyboard focus.
        const FOCUSABLE = 0b0001_0000;
    }
}

/// A read-only view of one row of a [`Snapshot`](crate::Snapshot).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeInfo<'a> {
    /// Identifier of the node.
    pub id: NodeId,
    /// Display name; also the own text of leaf kinds.
    pub name: &'a str,
    /// Semantic role.
    pub kind: NodeKind,
    /// Identifier of the parent, [`NodeId::ROOT`] for top-level nodes.
    pub parent: NodeId,
    /// Nesting depth; top-level nodes are at depth 0.
    pub depth: usize,
    /// Screen-relative bounds, [`Rect::ZERO`] when unset.
    pub rect: Rect,
    /// Own text length plus the aggregate text length of all descendants, in chars.
    pub text_len: usize,
}
