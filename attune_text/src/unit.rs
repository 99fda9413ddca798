// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text units: expanding a range to one and moving a range by them.
//!
//! A paragraph is the own text of a `Text` node and a document is the content of a
//! `Document` node. Finer units like characters or words are not modelled and are
//! reported as [`Unsupported`].

use attune_tree::{NodeId, NodeKind, Snapshot};

use crate::point::{TextPoint, TextRange};
use crate::read::own_range;

/// Granularity of a text movement or expansion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextUnit {
    /// One char.
    Character,
    /// One word.
    Word,
    /// One visual line.
    Line,
    /// The own text of the nearest `Text` node.
    Paragraph,
    /// One page.
    Page,
    /// The content of the nearest `Document` node.
    Document,
    /// A run of uniform formatting.
    Format,
}

impl TextUnit {
    /// Node kind that delimits this unit, or `Unsupported`.
    fn kind(self) -> Result<NodeKind, Unsupported> {
        match self {
            Self::Paragraph => Ok(NodeKind::Text),
            Self::Document => Ok(NodeKind::Document),
            unit => Err(Unsupported(unit)),
        }
    }
}

/// A text unit that ranges cannot be expanded to or moved by.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("text unit {0:?} is not supported")]
pub struct Unsupported(pub TextUnit);

/// Range covering the content of `id`.
///
/// For a leaf this is its own text. For a container it runs from the container
/// itself to the end of its last descendant, so it encloses all of their text.
pub fn document_range(snapshot: &Snapshot, id: NodeId) -> Option<TextRange> {
    let i = snapshot.index_of(id)?;
    let last = snapshot.subtree_end(i) - 1;
    Some(TextRange::new(
        TextPoint::new(id, 0),
        TextPoint::new(snapshot.id_at(last), snapshot.own_text_len(last)),
    ))
}

/// Expand `range` to the unit enclosing its start.
///
/// Returns `Ok(None)` when the start is stale or has no enclosing node of the unit's kind.
pub fn expand_to_unit(
    snapshot: &Snapshot,
    range: &TextRange,
    unit: TextUnit,
) -> Result<Option<TextRange>, Unsupported> {
    let kind = unit.kind()?;
    Ok(enclosing_of_kind(snapshot, range.start.node, kind)
        .and_then(|i| unit_range(snapshot, i, kind)))
}

/// Move `range` by `count` units, forward when positive.
///
/// The range collapses to its start, snaps to the unit enclosing it, then steps over
/// `count` further nodes of the unit's kind in row order, stopping early at either end.
/// The result covers the unit it landed on. Returns the new range and the signed
/// number of units actually moved. A stale range does not move.
pub fn move_by_unit(
    snapshot: &Snapshot,
    range: &TextRange,
    unit: TextUnit,
    count: isize,
) -> Result<(TextRange, isize), Unsupported> {
    let kind = unit.kind()?;
    let Some(origin) = snapshot.index_of(range.start.node) else {
        return Ok((*range, 0));
    };
    let anchor = enclosing_of_kind(snapshot, range.start.node, kind);
    let mut at = anchor;
    let mut i = anchor.unwrap_or(origin);
    let mut moved = 0;
    while moved != count {
        let forward = count > 0;
        let next = if forward {
            (i + 1..snapshot.len()).find(|&j| snapshot.kind_at(j) == kind)
        } else {
            (0..i).rev().find(|&j| snapshot.kind_at(j) == kind)
        };
        let Some(j) = next else {
            break;
        };
        i = j;
        at = Some(j);
        moved += if forward { 1 } else { -1 };
    }
    let moved_range = at
        .and_then(|j| unit_range(snapshot, j, kind))
        .unwrap_or(*range);
    Ok((moved_range, moved))
}

/// Row of the nearest ancestor-or-self of `id` with `kind`.
fn enclosing_of_kind(snapshot: &Snapshot, id: NodeId, kind: NodeKind) -> Option<usize> {
    let mut current = id;
    loop {
        let i = snapshot.index_of(current)?;
        if snapshot.kind_at(i) == kind {
            return Some(i);
        }
        current = snapshot.parent(current)?;
        if current.is_root() {
            return None;
        }
    }
}

fn unit_range(snapshot: &Snapshot, i: usize, kind: NodeKind) -> Option<TextRange> {
    match kind {
        NodeKind::Document => document_range(snapshot, snapshot.id_at(i)),
        _ => Some(own_range(snapshot, i)),
    }
}
