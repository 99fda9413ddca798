// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative construction of a [`Snapshot`].

use alloc::{string::String, vec::Vec};
use kurbo::Rect;
use smallvec::SmallVec;

use crate::error::BuildError;
use crate::id::derive_id;
use crate::snapshot::Snapshot;
use crate::types::{NodeId, NodeKind};

/// Appends rows in declaration order to produce the next [`Snapshot`].
///
/// Containers are opened with [`Builder::open_container`] and must be closed,
/// innermost first, with [`Builder::close_container`]. Leaves are appended at the
/// current depth with [`Builder::add_leaf`].
///
/// The first error poisons the builder: later calls keep returning errors that
/// nobody may act on, and [`Builder::end`] reports the first one.
///
/// ## Example
///
/// ```rust
/// use attune_tree::{Builder, NodeKind};
///
/// let mut b = Builder::new();
/// let doc = b.open_container("Doc", NodeKind::Document).unwrap();
/// b.add_leaf("A", NodeKind::Text).unwrap();
/// b.add_leaf("B", NodeKind::Text).unwrap();
/// b.close_container(doc).unwrap();
///
/// let snapshot = b.end().unwrap();
/// assert_eq!(snapshot.get(doc).unwrap().text_len, 2);
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    rows: Snapshot,
    /// Row index of each row's parent, `None` for top-level rows.
    parent_rows: Vec<Option<usize>>,
    /// Row indices of the currently open containers, outermost first.
    open: SmallVec<[usize; 8]>,
    error: Option<BuildError>,
}

impl Builder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with room for `rows` rows.
    pub fn with_capacity(rows: usize) -> Self {
        Self {
            rows: Snapshot::with_capacity(rows),
            parent_rows: Vec::with_capacity(rows),
            open: SmallVec::new(),
            error: None,
        }
    }

    /// Depth at which the next row will be added.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Innermost open container, or [`NodeId::ROOT`] when none is open.
    pub fn current_parent(&self) -> NodeId {
        self.open
            .last()
            .map_or(NodeId::ROOT, |&i| self.rows.ids[i])
    }

    /// Returns true if the builder is no longer usable.
    pub fn is_poisoned(&self) -> bool {
        self.error.is_some()
    }

    /// Returns true if `id` was added in this rebuild.
    pub fn contains(&self, id: NodeId) -> bool {
        self.rows.contains(id)
    }

    /// Kind of a row added in this rebuild.
    pub fn kind_of(&self, id: NodeId) -> Option<NodeKind> {
        self.rows.index.get(&id).map(|&i| self.rows.kinds[i])
    }

    /// Append a container row and make it the parent of subsequent rows.
    pub fn open_container(&mut self, name: &str, kind: NodeKind) -> Result<NodeId, BuildError> {
        if !kind.is_container() {
            return Err(self.fail(BuildError::KindMismatch {
                name: String::from(name),
                kind,
            }));
        }
        let id = self.push_row(name, name, kind)?;
        self.open.push(self.rows.len() - 1);
        Ok(id)
    }

    /// Close the innermost open container, which must be `id`.
    pub fn close_container(&mut self, id: NodeId) -> Result<(), BuildError> {
        self.check_poisoned()?;
        let expected = self.open.last().map(|&i| self.rows.ids[i]);
        if expected != Some(id) {
            return Err(self.fail(BuildError::UnbalancedClose {
                expected,
                found: id,
            }));
        }
        self.open.pop();
        Ok(())
    }

    /// Append a leaf row whose own text is its name.
    pub fn add_leaf(&mut self, name: &str, kind: NodeKind) -> Result<NodeId, BuildError> {
        self.add_leaf_with_text(name, name, kind)
    }

    /// Append a leaf row identified by `name` but displaying `text`.
    ///
    /// This keeps the id stable while the displayed text changes between rebuilds.
    pub fn add_leaf_with_text(
        &mut self,
        name: &str,
        text: &str,
        kind: NodeKind,
    ) -> Result<NodeId, BuildError> {
        if kind.is_container() {
            return Err(self.fail(BuildError::KindMismatch {
                name: String::from(name),
                kind,
            }));
        }
        self.push_row(name, text, kind)
    }

    /// Open a [`NodeKind::Pane`].
    pub fn pane(&mut self, name: &str) -> Result<NodeId, BuildError> {
        self.open_container(name, NodeKind::Pane)
    }

    /// Open a [`NodeKind::Document`].
    pub fn document(&mut self, name: &str) -> Result<NodeId, BuildError> {
        self.open_container(name, NodeKind::Document)
    }

    /// Add a [`NodeKind::Text`] paragraph whose content is `text`.
    pub fn text(&mut self, text: &str) -> Result<NodeId, BuildError> {
        self.add_leaf(text, NodeKind::Text)
    }

    /// Add a [`NodeKind::Button`].
    pub fn button(&mut self, name: &str) -> Result<NodeId, BuildError> {
        self.add_leaf(name, NodeKind::Button)
    }

    /// Set the screen-relative bounds of a row added in this rebuild.
    pub fn set_rect(&mut self, id: NodeId, rect: Rect) -> Result<(), BuildError> {
        self.check_poisoned()?;
        match self.rows.index.get(&id) {
            Some(&i) => {
                self.rows.rects[i] = rect;
                Ok(())
            }
            None => Err(self.fail(BuildError::UnknownNode { id })),
        }
    }

    /// Finish the rebuild: aggregate text lengths and validate the rows.
    pub fn end(mut self) -> Result<Snapshot, BuildError> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        if !self.open.is_empty() {
            return Err(BuildError::UnclosedContainers {
                count: self.open.len(),
            });
        }

        // Children always follow their parent, so a reverse pass sees every
        // child's total before its parent needs it.
        let rows = &mut self.rows;
        for i in (0..rows.len()).rev() {
            let own = rows.own_text_len(i);
            rows.text_lens[i] += own;
            if let Some(p) = self.parent_rows[i] {
                rows.text_lens[p] += rows.text_lens[i];
            }
        }

        self.rows.validate()?;
        Ok(self.rows)
    }

    fn push_row(&mut self, name: &str, text: &str, kind: NodeKind) -> Result<NodeId, BuildError> {
        self.check_poisoned()?;
        let parent = self.current_parent();
        let id = derive_id(name, parent);
        if !id.is_valid() {
            return Err(self.fail(BuildError::ReservedId {
                name: String::from(name),
                id,
            }));
        }
        if self.rows.index.contains_key(&id) {
            return Err(self.fail(BuildError::DuplicateId {
                name: String::from(name),
                id,
            }));
        }

        let index = self.rows.len();
        self.rows.ids.push(id);
        self.rows.names.push(String::from(text));
        self.rows.kinds.push(kind);
        self.rows.depths.push(self.open.len());
        self.rows.parents.push(parent);
        self.rows.rects.push(Rect::ZERO);
        self.rows.text_lens.push(0);
        self.rows.index.insert(id, index);
        self.parent_rows.push(self.open.last().copied());
        Ok(id)
    }

    fn check_poisoned(&self) -> Result<(), BuildError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn fail(&mut self, err: BuildError) -> BuildError {
        if self.error.is_none() {
            self.error = Some(err.clone());
        }
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn rows_are_preorder_with_depths() {
        let mut b = Builder::new();
        let main = b.open_container("Main", NodeKind::Pane).unwrap();
        let doc = b.open_container("Doc", NodeKind::Document).unwrap();
        let a = b.add_leaf("A", NodeKind::Text).unwrap();
        b.close_container(doc).unwrap();
        let close = b.add_leaf("Close", NodeKind::Button).unwrap();
        b.close_container(main).unwrap();
        let s = b.end().unwrap();

        assert_eq!(s.ids(), &[main, doc, a, close]);
        let depths: Vec<usize> = (0..s.len()).map(|i| s.depth_at(i)).collect();
        assert_eq!(depths, vec![0, 1, 2, 1]);
        assert_eq!(s.get(a).unwrap().parent, doc);
        assert_eq!(s.get(main).unwrap().parent, NodeId::ROOT);
    }

    #[test]
    fn text_len_aggregates_leaf_text() {
        let mut b = Builder::new();
        let main = b.open_container("Main", NodeKind::Pane).unwrap();
        let doc = b.open_container("Doc", NodeKind::Document).unwrap();
        b.add_leaf("Hello", NodeKind::Text).unwrap();
        b.add_leaf("héllo", NodeKind::Text).unwrap();
        b.close_container(doc).unwrap();
        b.add_leaf("Close", NodeKind::Button).unwrap();
        b.close_container(main).unwrap();
        let s = b.end().unwrap();

        assert_eq!(s.get(doc).unwrap().text_len, 10);
        assert_eq!(s.get(main).unwrap().text_len, 15);
        for i in 0..s.len() {
            let id = s.id_at(i);
            let children: usize = s.children(id).map(|c| s.get(c).unwrap().text_len).sum();
            assert_eq!(s.row(i).text_len, s.own_text_len(i) + children);
        }
    }

    #[test]
    fn duplicate_sibling_names_are_rejected() {
        let mut b = Builder::new();
        b.add_leaf("Same", NodeKind::Text).unwrap();
        let err = b.add_leaf("Same", NodeKind::Text).unwrap_err();
        assert!(matches!(err, BuildError::DuplicateId { .. }));
        assert!(b.is_poisoned());
        assert_eq!(b.end().unwrap_err(), err);
    }

    #[test]
    fn same_name_under_different_parents_is_fine() {
        let mut b = Builder::new();
        let p1 = b.open_container("One", NodeKind::Pane).unwrap();
        let x1 = b.add_leaf("Ok", NodeKind::Button).unwrap();
        b.close_container(p1).unwrap();
        let p2 = b.open_container("Two", NodeKind::Pane).unwrap();
        let x2 = b.add_leaf("Ok", NodeKind::Button).unwrap();
        b.close_container(p2).unwrap();
        assert_ne!(x1, x2);
        assert!(b.end().is_ok());
    }

    #[test]
    fn unbalanced_close_is_rejected() {
        let mut b = Builder::new();
        let outer = b.open_container("Outer", NodeKind::Pane).unwrap();
        let inner = b.open_container("Inner", NodeKind::Pane).unwrap();
        let err = b.close_container(outer).unwrap_err();
        assert_eq!(
            err,
            BuildError::UnbalancedClose {
                expected: Some(inner),
                found: outer,
            }
        );
        assert!(b.end().is_err());
    }

    #[test]
    fn close_without_open_is_rejected() {
        let mut b = Builder::new();
        let leaf = b.add_leaf("Leaf", NodeKind::Text).unwrap();
        assert!(matches!(
            b.close_container(leaf),
            Err(BuildError::UnbalancedClose { expected: None, .. })
        ));
    }

    #[test]
    fn unclosed_container_is_rejected() {
        let mut b = Builder::new();
        b.open_container("Outer", NodeKind::Pane).unwrap();
        assert_eq!(
            b.end().unwrap_err(),
            BuildError::UnclosedContainers { count: 1 }
        );
    }

    #[test]
    fn kinds_must_match_the_call() {
        let mut b = Builder::new();
        assert!(matches!(
            b.open_container("Para", NodeKind::Text),
            Err(BuildError::KindMismatch { .. })
        ));

        let mut b = Builder::new();
        assert!(matches!(
            b.add_leaf("Doc", NodeKind::Document),
            Err(BuildError::KindMismatch { .. })
        ));
    }

    #[test]
    fn display_text_does_not_change_identity() {
        let mut b = Builder::new();
        let shown = b
            .add_leaf_with_text("Toggle", "Show Content", NodeKind::Button)
            .unwrap();
        let s1 = b.end().unwrap();

        let mut b = Builder::new();
        let hidden = b
            .add_leaf_with_text("Toggle", "Hide Content", NodeKind::Button)
            .unwrap();
        let s2 = b.end().unwrap();

        assert_eq!(shown, hidden);
        assert_eq!(s1.get(shown).unwrap().name, "Show Content");
        assert_eq!(s2.get(hidden).unwrap().name, "Hide Content");
    }

    #[test]
    fn set_rect_requires_a_row_of_this_rebuild() {
        let mut b = Builder::new();
        let a = b.add_leaf("A", NodeKind::Text).unwrap();
        b.set_rect(a, Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        let stray = NodeId::from_raw(42);
        assert_eq!(
            b.set_rect(stray, Rect::ZERO),
            Err(BuildError::UnknownNode { id: stray })
        );
    }
}
