// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text points, ranges, and their ordering.

use core::cmp::Ordering;

use attune_tree::{NodeId, Snapshot};

/// A character position inside the own text of one node.
///
/// `offset` counts chars and lies in `0..=own text length` of `node`. Containers
/// own no text, so the only valid offset on a container is 0.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextPoint {
    /// Node whose own text the offset indexes.
    pub node: NodeId,
    /// Offset in chars.
    pub offset: usize,
}

impl TextPoint {
    /// Create a point.
    pub const fn new(node: NodeId, offset: usize) -> Self {
        Self { node, offset }
    }

    /// Returns true if the node exists and the offset lies within its own text.
    pub fn is_valid_in(&self, snapshot: &Snapshot) -> bool {
        snapshot
            .index_of(self.node)
            .is_some_and(|i| self.offset <= snapshot.own_text_len(i))
    }
}

/// A span between two [`TextPoint`]s, `start <= end`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextRange {
    /// First point of the span.
    pub start: TextPoint,
    /// One past the last char of the span.
    pub end: TextPoint,
}

impl TextRange {
    /// Create a range from two points.
    pub const fn new(start: TextPoint, end: TextPoint) -> Self {
        Self { start, end }
    }

    /// The empty range at `point`.
    pub const fn degenerate(point: TextPoint) -> Self {
        Self {
            start: point,
            end: point,
        }
    }

    /// Returns true if the range is empty.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// The given endpoint.
    pub fn endpoint(&self, endpoint: Endpoint) -> TextPoint {
        match endpoint {
            Endpoint::Start => self.start,
            Endpoint::End => self.end,
        }
    }
}

/// Selects one end of a [`TextRange`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// [`TextRange::start`].
    Start,
    /// [`TextRange::end`].
    End,
}

/// Order two points of one snapshot.
///
/// Points on the same node compare by offset. Points on different nodes compare by
/// the nodes' preorder row index, which places a container's points before all of
/// its descendants' points rather than around them.
///
/// Returns `None` if either node is absent from `snapshot`.
pub fn compare(snapshot: &Snapshot, a: TextPoint, b: TextPoint) -> Option<Ordering> {
    if a.node == b.node {
        return snapshot.contains(a.node).then(|| a.offset.cmp(&b.offset));
    }
    let ia = snapshot.index_of(a.node)?;
    let ib = snapshot.index_of(b.node)?;
    Some(ia.cmp(&ib))
}

/// Order one endpoint of `range` against one endpoint of `other`.
pub fn compare_endpoints(
    snapshot: &Snapshot,
    range: &TextRange,
    endpoint: Endpoint,
    other: &TextRange,
    other_endpoint: Endpoint,
) -> Option<Ordering> {
    compare(
        snapshot,
        range.endpoint(endpoint),
        other.endpoint(other_endpoint),
    )
}

/// Row indices of both endpoints, or `None` if the range is stale or inverted.
pub(crate) fn span(snapshot: &Snapshot, range: &TextRange) -> Option<(usize, usize)> {
    let first = snapshot.index_of(range.start.node)?;
    let last = snapshot.index_of(range.end.node)?;
    let inverted = first > last || (first == last && range.start.offset > range.end.offset);
    if inverted {
        tracing::trace!(target: "attune_text", ?range, "inverted range");
        return None;
    }
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{Sample, sample};

    #[test]
    fn same_node_orders_by_offset() {
        let Sample { snapshot: s, a, .. } = sample();
        assert_eq!(
            compare(&s, TextPoint::new(a, 0), TextPoint::new(a, 3)),
            Some(Ordering::Less)
        );
        assert_eq!(
            compare(&s, TextPoint::new(a, 2), TextPoint::new(a, 2)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn different_nodes_order_by_preorder() {
        let Sample {
            snapshot: s,
            doc,
            a,
            b,
            ..
        } = sample();
        // A's end still precedes B's start.
        assert_eq!(
            compare(&s, TextPoint::new(a, 5), TextPoint::new(b, 0)),
            Some(Ordering::Less)
        );
        // A container precedes its own children.
        assert_eq!(
            compare(&s, TextPoint::new(b, 0), TextPoint::new(doc, 0)),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn stale_points_do_not_compare() {
        let Sample { snapshot: s, a, .. } = sample();
        let stale = TextPoint::new(NodeId::from_raw(99), 0);
        assert_eq!(compare(&s, stale, TextPoint::new(a, 0)), None);
        assert_eq!(compare(&s, stale, stale), None);
    }

    #[test]
    fn endpoints() {
        let Sample { snapshot: s, a, b, .. } = sample();
        let r1 = TextRange::new(TextPoint::new(a, 0), TextPoint::new(a, 5));
        let r2 = TextRange::new(TextPoint::new(a, 5), TextPoint::new(b, 2));
        assert_eq!(
            compare_endpoints(&s, &r1, Endpoint::End, &r2, Endpoint::Start),
            Some(Ordering::Equal)
        );
        assert_eq!(
            compare_endpoints(&s, &r2, Endpoint::End, &r1, Endpoint::Start),
            Some(Ordering::Greater)
        );
        assert!(TextRange::degenerate(r1.end).is_degenerate());
    }

    #[test]
    fn point_validity() {
        let Sample {
            snapshot: s,
            doc,
            a,
            ..
        } = sample();
        assert!(TextPoint::new(a, 5).is_valid_in(&s));
        assert!(!TextPoint::new(a, 6).is_valid_in(&s));
        assert!(TextPoint::new(doc, 0).is_valid_in(&s));
        assert!(!TextPoint::new(doc, 1).is_valid_in(&s));
    }
}
