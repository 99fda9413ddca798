// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading a range: its text, its bounds, the nodes it covers.

use alloc::{string::String, vec::Vec};

use attune_tree::{NodeId, Rect, Snapshot};

use crate::point::{TextPoint, TextRange, span};

/// Byte index of char offset `chars` in `s`, clamped to the end.
pub(crate) fn byte_at(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(b, _)| b)
}

/// The chars `from..to` of `s`, clamped to its length.
pub(crate) fn char_slice(s: &str, from: usize, to: usize) -> &str {
    let start = byte_at(s, from);
    let end = byte_at(s, to).max(start);
    &s[start..end]
}

/// Own-text char span of row `i` that lies inside the range whose endpoints sit on
/// rows `first` and `last`.
pub(crate) fn row_span(
    snapshot: &Snapshot,
    range: &TextRange,
    (first, last): (usize, usize),
    i: usize,
) -> (usize, usize) {
    let from = if i == first { range.start.offset } else { 0 };
    let to = if i == last {
        range.end.offset
    } else {
        snapshot.own_text_len(i)
    };
    (from, to.max(from))
}

/// Concatenated own text of every node the range spans.
///
/// Containers contribute nothing; they own no text. Stale or inverted ranges give
/// an empty string.
pub fn get_text(snapshot: &Snapshot, range: &TextRange) -> String {
    get_text_bounded(snapshot, range, usize::MAX)
}

/// Like [`get_text`], truncated to at most `max_chars` chars.
pub fn get_text_bounded(snapshot: &Snapshot, range: &TextRange, max_chars: usize) -> String {
    let mut out = String::new();
    let Some(rows) = span(snapshot, range) else {
        return out;
    };
    let mut budget = max_chars;
    for i in rows.0..=rows.1 {
        if budget == 0 {
            break;
        }
        let (from, to) = row_span(snapshot, range, rows, i);
        let take = (to - from).min(budget);
        let piece = char_slice(snapshot.own_text(i), from, from + take);
        budget -= piece.chars().count();
        out.push_str(piece);
    }
    out
}

/// Bounds of every node the range spans, clipped to `viewport`.
///
/// `None` leaves the bounds unclipped. Nodes whose clipped bounds are empty are skipped.
pub fn bounding_rects(snapshot: &Snapshot, range: &TextRange, viewport: Option<Rect>) -> Vec<Rect> {
    let Some((first, last)) = span(snapshot, range) else {
        return Vec::new();
    };
    (first..=last)
        .map(|i| {
            let rect = snapshot.rect_at(i);
            viewport.map_or(rect, |v| rect.intersect(v))
        })
        .filter(|r| r.width() > 0.0 && r.height() > 0.0)
        .collect()
}

/// Nodes whose start lies inside the range, in preorder.
pub fn children(snapshot: &Snapshot, range: &TextRange) -> Vec<NodeId> {
    let Some((first, last)) = span(snapshot, range) else {
        return Vec::new();
    };
    (first..=last)
        .filter(|&i| {
            let after_start = i > first || range.start.offset == 0;
            let before_end = i < last || range.end.offset > 0;
            after_start && before_end
        })
        .map(|i| snapshot.id_at(i))
        .collect()
}

/// Deepest node containing both endpoints of the range.
///
/// Both endpoints are lifted to a common depth, then lifted together until they
/// meet. The result is [`NodeId::ROOT`] when the endpoints sit under different
/// top-level nodes.
pub fn enclosing_node(snapshot: &Snapshot, range: &TextRange) -> Option<NodeId> {
    let (mut a, mut b) = (range.start.node, range.end.node);
    let mut da = snapshot.get(a)?.depth;
    let mut db = snapshot.get(b)?.depth;
    while da > db {
        a = snapshot.parent(a)?;
        da -= 1;
    }
    while db > da {
        b = snapshot.parent(b)?;
        db -= 1;
    }
    while a != b {
        a = snapshot.parent(a)?;
        b = snapshot.parent(b)?;
    }
    debug_assert!(
        a == range.start.node || snapshot.is_ancestor(a, range.start.node),
        "enclosing node must contain the start"
    );
    Some(a)
}

/// Range over the whole own text of row `i`.
pub(crate) fn own_range(snapshot: &Snapshot, i: usize) -> TextRange {
    let id = snapshot.id_at(i);
    TextRange::new(
        TextPoint::new(id, 0),
        TextPoint::new(id, snapshot.own_text_len(i)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{Sample, sample};
    use alloc::vec;

    fn pt(node: NodeId, offset: usize) -> TextPoint {
        TextPoint::new(node, offset)
    }

    #[test]
    fn text_within_one_node() {
        let Sample { snapshot: s, a, .. } = sample();
        let r = TextRange::new(pt(a, 1), pt(a, 4));
        assert_eq!(get_text(&s, &r), "ell");
    }

    #[test]
    fn text_across_nodes_skips_containers() {
        let Sample {
            snapshot: s,
            main,
            a,
            close,
            ..
        } = sample();
        let r = TextRange::new(pt(main, 0), pt(close, 2));
        assert_eq!(get_text(&s, &r), "HelloBob's bookCl");
        let r = TextRange::new(pt(a, 3), pt(close, 0));
        assert_eq!(get_text(&s, &r), "loBob's book");
    }

    #[test]
    fn text_is_char_indexed() {
        let mut b = attune_tree::Builder::new();
        let t = b.text("héllo wörld").unwrap();
        let s = b.end().unwrap();
        let r = TextRange::new(pt(t, 1), pt(t, 8));
        assert_eq!(get_text(&s, &r), "éllo wö");
    }

    #[test]
    fn bounded_text_truncates() {
        let Sample {
            snapshot: s, a, b, ..
        } = sample();
        let r = TextRange::new(pt(a, 0), pt(b, 10));
        assert_eq!(get_text_bounded(&s, &r, 7), "HelloBo");
        assert_eq!(get_text_bounded(&s, &r, 0), "");
    }

    #[test]
    fn stale_or_inverted_ranges_read_empty() {
        let Sample {
            snapshot: s, a, b, ..
        } = sample();
        let stale = TextRange::new(pt(NodeId::from_raw(5), 0), pt(b, 1));
        assert_eq!(get_text(&s, &stale), "");
        let inverted = TextRange::new(pt(b, 0), pt(a, 1));
        assert_eq!(get_text(&s, &inverted), "");
        assert!(bounding_rects(&s, &inverted, None).is_empty());
        assert!(children(&s, &stale).is_empty());
    }

    #[test]
    fn rects_are_clipped_and_empty_ones_dropped() {
        let Sample {
            snapshot: s,
            doc,
            a,
            close,
            ..
        } = sample();
        let r = TextRange::new(pt(a, 0), pt(close, 0));
        assert_eq!(
            bounding_rects(&s, &r, None),
            vec![
                Rect::new(0.0, 0.0, 100.0, 20.0),
                Rect::new(0.0, 20.0, 100.0, 40.0),
                Rect::new(0.0, 50.0, 60.0, 70.0),
            ]
        );
        let viewport = Rect::new(10.0, 10.0, 50.0, 30.0);
        assert_eq!(
            bounding_rects(&s, &r, Some(viewport)),
            vec![
                Rect::new(10.0, 10.0, 50.0, 20.0),
                Rect::new(10.0, 20.0, 50.0, 30.0),
            ]
        );
        // Doc has no bounds of its own.
        let r = TextRange::new(pt(doc, 0), pt(doc, 0));
        assert!(bounding_rects(&s, &r, None).is_empty());
    }

    #[test]
    fn children_start_inside_range() {
        let Sample {
            snapshot: s,
            doc,
            a,
            b,
            close,
            ..
        } = sample();
        let r = TextRange::new(pt(doc, 0), pt(close, 0));
        assert_eq!(children(&s, &r), vec![doc, a, b]);
        let r = TextRange::new(pt(a, 2), pt(close, 1));
        assert_eq!(children(&s, &r), vec![b, close]);
        assert!(children(&s, &TextRange::degenerate(pt(a, 0))).is_empty());
    }

    #[test]
    fn enclosing_node_finds_common_ancestor() {
        let Sample {
            snapshot: s,
            main,
            doc,
            a,
            b,
            close,
            side,
        } = sample();
        assert_eq!(enclosing_node(&s, &TextRange::new(pt(a, 0), pt(a, 2))), Some(a));
        assert_eq!(enclosing_node(&s, &TextRange::new(pt(a, 0), pt(b, 2))), Some(doc));
        assert_eq!(
            enclosing_node(&s, &TextRange::new(pt(a, 0), pt(close, 2))),
            Some(main)
        );
        assert_eq!(
            enclosing_node(&s, &TextRange::new(pt(b, 0), pt(side, 0))),
            Some(NodeId::ROOT)
        );
        assert_eq!(
            enclosing_node(&s, &TextRange::new(pt(NodeId::from_raw(3), 0), pt(b, 0))),
            None
        );
    }

    #[test]
    fn enclosing_text_contains_sub_range_text() {
        let Sample {
            snapshot: s,
            a,
            b,
            close,
            ..
        } = sample();
        for sub in [
            TextRange::new(pt(a, 1), pt(b, 3)),
            TextRange::new(pt(b, 2), pt(close, 4)),
            TextRange::new(pt(a, 0), pt(a, 5)),
        ] {
            let outer = enclosing_node(&s, &sub).unwrap();
            let whole = crate::unit::document_range(&s, outer).unwrap();
            assert!(get_text(&s, &whole).contains(&get_text(&s, &sub)));
        }
    }
}
