// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attune Text: text points and ranges over an `attune_tree` snapshot.
//!
//! A screen reader addresses text as spans that may cross node boundaries: a
//! selection can start in one paragraph and end in the next. This crate models
//! such spans as pairs of [`TextPoint`]s, each a node id plus a char offset into
//! that node's own text, and answers read-only questions about them.
//!
//! - Ordering: [`compare`] and [`compare_endpoints`].
//! - Reading: [`get_text`], [`get_text_bounded`], [`children`].
//! - Geometry: [`bounding_rects`] clipped to a viewport.
//! - Structure: [`enclosing_node`], [`document_range`].
//! - Search: [`find_text`], forward or backward, optionally ignoring case.
//! - Units: [`expand_to_unit`] and [`move_by_unit`] for paragraphs and documents.
//!
//! Points hold ids, never references into the snapshot. A range whose nodes were
//! removed by a rebuild is not an error: reads return empty results.
//!
//! ## Known limitations
//!
//! - Points on different nodes are ordered by preorder row index. A container's
//!   points therefore sort before its children's instead of enclosing them.
//! - Search never matches text that straddles two nodes.
//!
//! ## Example
//!
//! ```rust
//! use attune_text::{TextPoint, TextRange, find_text, get_text};
//! use attune_tree::Builder;
//!
//! let mut b = Builder::new();
//! let doc = b.document("Doc").unwrap();
//! let para_a = b.text("Hello").unwrap();
//! let para_b = b.text("world").unwrap();
//! b.close_container(doc).unwrap();
//! let snapshot = b.end().unwrap();
//!
//! let range = TextRange::new(TextPoint::new(para_a, 3), TextPoint::new(para_b, 2));
//! assert_eq!(get_text(&snapshot, &range), "lowo");
//!
//! let hit = find_text(&snapshot, &range, "wo", false, false).unwrap();
//! assert_eq!(hit.start, TextPoint::new(para_b, 0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod point;
mod read;
mod search;
mod unit;

pub use point::{Endpoint, TextPoint, TextRange, compare, compare_endpoints};
pub use read::{bounding_rects, children, enclosing_node, get_text, get_text_bounded};
pub use search::find_text;
pub use unit::{TextUnit, Unsupported, document_range, expand_to_unit, move_by_unit};

#[cfg(test)]
mod tests {
    use attune_tree::{Builder, NodeId, Rect, Snapshot};

    pub(crate) struct Sample {
        pub(crate) snapshot: Snapshot,
        pub(crate) main: NodeId,
        pub(crate) doc: NodeId,
        pub(crate) a: NodeId,
        pub(crate) b: NodeId,
        pub(crate) close: NodeId,
        pub(crate) side: NodeId,
    }

    // Main { Doc { "Hello", "Bob's book" }, "Close" }, Side {}
    pub(crate) fn sample() -> Sample {
        let mut bld = Builder::new();
        let main = bld.pane("Main").unwrap();
        let doc = bld.document("Doc").unwrap();
        let a = bld.text("Hello").unwrap();
        let b = bld.text("Bob's book").unwrap();
        bld.close_container(doc).unwrap();
        let close = bld.button("Close").unwrap();
        bld.close_container(main).unwrap();
        let side = bld.pane("Side").unwrap();
        bld.close_container(side).unwrap();
        bld.set_rect(main, Rect::new(0.0, 0.0, 200.0, 100.0)).unwrap();
        bld.set_rect(a, Rect::new(0.0, 0.0, 100.0, 20.0)).unwrap();
        bld.set_rect(b, Rect::new(0.0, 20.0, 100.0, 40.0)).unwrap();
        bld.set_rect(close, Rect::new(0.0, 50.0, 60.0, 70.0)).unwrap();
        Sample {
            snapshot: bld.end().unwrap(),
            main,
            doc,
            a,
            b,
            close,
            side,
        }
    }
}
