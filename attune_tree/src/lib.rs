// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attune Tree: a flat, depth-first ordered tree of accessible nodes.
//!
//! Attune Tree is the model an accessibility bridge reads from: a screen reader asks
//! for a node, its neighbours, its text, and its bounds, and this crate answers from
//! a compact per-frame snapshot.
//!
//! - Nodes are identified by a [`NodeId`] derived from their name and their parent's id,
//!   so the same description yields the same ids on every rebuild.
//! - Rows are stored column by column in depth-first preorder. Parent, child, and
//!   sibling queries are answered by scanning depths; there are no child pointers.
//! - Each container caches the aggregate text length of its subtree.
//!
//! ## Rebuild cycle
//!
//! The tree is described from scratch each frame: [`Tree::begin`] returns a
//! [`Builder`], rows are appended with [`Builder::open_container`],
//! [`Builder::add_leaf`] and [`Builder::close_container`], and [`Tree::commit`]
//! swaps in the new [`Snapshot`]. Construction mistakes (duplicate ids, unbalanced
//! closes, wrong kinds) are reported as [`BuildError`] and the previous snapshot
//! stays current.
//!
//! Ids held from an older snapshot are plain values. If the node is gone, every
//! query simply returns `None`.
//!
//! ## API overview
//!
//! - [`Tree`]: owns the current [`Snapshot`] and commits rebuilds, reporting [`Churn`].
//! - [`Builder`]: appends rows and validates the result.
//! - [`Snapshot`]: lookups ([`Snapshot::get`]), [`Snapshot::navigate`] by [`Direction`],
//!   [`Snapshot::children`], [`Snapshot::hit_test`], and [`Snapshot::log_structure`].
//! - [`NodeKind`] and its [`Capabilities`] table.
//! - [`derive_id`]: the id scheme, exposed for bridges that need to predict ids.
//!
//! ## Example
//!
//! ```rust
//! use attune_tree::{Direction, Tree};
//!
//! let mut tree = Tree::new();
//! let mut b = tree.begin();
//! let main = b.pane("Main").unwrap();
//! let doc = b.document("Doc").unwrap();
//! let a = b.text("Hello").unwrap();
//! let c = b.text("World").unwrap();
//! b.close_container(doc).unwrap();
//! b.close_container(main).unwrap();
//! tree.commit(b).unwrap();
//!
//! let s = tree.snapshot();
//! assert_eq!(s.navigate(a, Direction::NextSibling), Some(c));
//! assert_eq!(s.navigate(doc, Direction::LastChild), Some(c));
//! assert_eq!(s.get(main).unwrap().text_len, 10);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod builder;
mod error;
mod id;
mod navigate;
mod snapshot;
mod tree;
mod types;

pub use builder::Builder;
pub use error::BuildError;
pub use id::derive_id;
pub use navigate::{Children, Direction};
pub use snapshot::Snapshot;
pub use tree::{Churn, Tree};
pub use types::{Capabilities, NodeId, NodeInfo, NodeKind};

/// Re-export of the geometry types used in the public API.
pub use kurbo::{Point, Rect};
