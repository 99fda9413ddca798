// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Substring search inside a range.
//!
//! Matching is done per node: text that straddles two nodes is never found.

use alloc::vec::Vec;

use attune_tree::Snapshot;

use crate::point::{TextPoint, TextRange, span};
use crate::read::row_span;

/// Find `needle` inside `range`.
///
/// Forward search returns the first match at or after `range.start`; backward
/// search returns the last match, scanning nodes from the end. A match is only
/// accepted if it lies entirely inside the range. With `ignore_case`, chars are
/// compared by their lowercase mappings.
///
/// Returns `None` for an empty needle, a miss, or a stale range.
pub fn find_text(
    snapshot: &Snapshot,
    range: &TextRange,
    needle: &str,
    backward: bool,
    ignore_case: bool,
) -> Option<TextRange> {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return None;
    }
    let rows = span(snapshot, range)?;
    let mut search_row = |i: usize| {
        let (from, to) = row_span(snapshot, range, rows, i);
        let hay: Vec<char> = snapshot.own_text(i).chars().collect();
        let to = to.min(hay.len());
        let pos = find_in(&hay, &needle, from, to, backward, ignore_case)?;
        let id = snapshot.id_at(i);
        Some(TextRange::new(
            TextPoint::new(id, pos),
            TextPoint::new(id, pos + needle.len()),
        ))
    };
    let found = if backward {
        (rows.0..=rows.1).rev().find_map(&mut search_row)
    } else {
        (rows.0..=rows.1).find_map(&mut search_row)
    };
    if found.is_none() {
        tracing::trace!(target: "attune_text", ?range, "find_text miss");
    }
    found
}

/// Start of a match of `needle` lying within `hay[from..to]`.
fn find_in(
    hay: &[char],
    needle: &[char],
    from: usize,
    to: usize,
    backward: bool,
    ignore_case: bool,
) -> Option<usize> {
    let last_start = to.checked_sub(needle.len())?;
    if last_start < from {
        return None;
    }
    let matches = |p: &usize| {
        hay[*p..*p + needle.len()]
            .iter()
            .zip(needle)
            .all(|(&h, &n)| chars_eq(h, n, ignore_case))
    };
    if backward {
        (from..=last_start).rev().find(matches)
    } else {
        (from..=last_start).find(matches)
    }
}

fn chars_eq(a: char, b: char, ignore_case: bool) -> bool {
    a == b || (ignore_case && a.to_lowercase().eq(b.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{Sample, sample};
    use attune_tree::NodeId;

    fn pt(node: NodeId, offset: usize) -> TextPoint {
        TextPoint::new(node, offset)
    }

    #[test]
    fn finds_inside_the_right_node() {
        let Sample {
            snapshot: s,
            a,
            b,
            close,
            ..
        } = sample();
        let r = TextRange::new(pt(a, 0), pt(close, 0));
        assert_eq!(
            find_text(&s, &r, "B", false, false),
            Some(TextRange::new(pt(b, 0), pt(b, 1)))
        );
    }

    #[test]
    fn match_must_lie_inside_range() {
        let Sample {
            snapshot: s,
            a,
            b,
            close,
            ..
        } = sample();
        // "Close" starts at offset 0 but the range ends there.
        let r = TextRange::new(pt(a, 0), pt(close, 0));
        assert_eq!(find_text(&s, &r, "Cl", false, false), None);
        // A match ending exactly at the range end is inside.
        let r = TextRange::new(pt(a, 0), pt(close, 2));
        assert_eq!(
            find_text(&s, &r, "Cl", false, false),
            Some(TextRange::new(pt(close, 0), pt(close, 2)))
        );
        // Matches before the start are skipped.
        let r = TextRange::new(pt(b, 1), pt(b, 10));
        assert_eq!(
            find_text(&s, &r, "b", false, false),
            Some(TextRange::new(pt(b, 2), pt(b, 3)))
        );
    }

    #[test]
    fn never_matches_across_nodes() {
        let Sample {
            snapshot: s,
            a,
            close,
            ..
        } = sample();
        let r = TextRange::new(pt(a, 0), pt(close, 5));
        // "o" + "B" straddle the A/B boundary.
        assert_eq!(find_text(&s, &r, "oB", false, false), None);
    }

    #[test]
    fn backward_finds_last_occurrence() {
        let Sample {
            snapshot: s,
            a,
            b,
            close,
            ..
        } = sample();
        let r = TextRange::new(pt(a, 0), pt(close, 5));
        assert_eq!(
            find_text(&s, &r, "o", true, false),
            Some(TextRange::new(pt(close, 2), pt(close, 3)))
        );
        let r = TextRange::new(pt(a, 0), pt(b, 10));
        assert_eq!(
            find_text(&s, &r, "o", true, false),
            Some(TextRange::new(pt(b, 8), pt(b, 9)))
        );
    }

    #[test]
    fn ignore_case() {
        let Sample {
            snapshot: s,
            a,
            b,
            close,
            ..
        } = sample();
        let r = TextRange::new(pt(a, 0), pt(close, 5));
        assert_eq!(find_text(&s, &r, "BOOK", false, false), None);
        assert_eq!(
            find_text(&s, &r, "BOOK", false, true),
            Some(TextRange::new(pt(b, 6), pt(b, 10)))
        );
        assert_eq!(
            find_text(&s, &r, "hello", false, true),
            Some(TextRange::new(pt(a, 0), pt(a, 5)))
        );
    }

    #[test]
    fn empty_needle_and_stale_range() {
        let Sample {
            snapshot: s, a, ..
        } = sample();
        let r = TextRange::new(pt(a, 0), pt(a, 5));
        assert_eq!(find_text(&s, &r, "", false, false), None);
        let stale = TextRange::new(pt(NodeId::from_raw(8), 0), pt(a, 5));
        assert_eq!(find_text(&s, &stale, "H", false, false), None);
    }
}
