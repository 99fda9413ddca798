// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Actions that activatable nodes run when invoked.

use alloc::boxed::Box;
use attune_tree::NodeId;
use hashbrown::HashMap;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;

/// A zero-argument callback run when its node is activated.
pub type Action = Box<dyn FnMut()>;

/// Maps node ids to their [`Action`]s and records activations for notification.
///
/// Entries are keyed by id and survive rebuilds. Call [`ActionRegistry::retain`]
/// after a rebuild to drop entries whose nodes are gone.
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<NodeId, Action, FxBuildHasher>,
    activated: SmallVec<[NodeId; 4]>,
}

impl core::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("actions", &self.actions.len())
            .field("activated", &self.activated)
            .finish()
    }
}

impl ActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if no action is registered.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns true if `id` has an action.
    pub fn contains(&self, id: NodeId) -> bool {
        self.actions.contains_key(&id)
    }

    /// Register `action` for `id`, replacing any previous one.
    pub fn register(&mut self, id: NodeId, action: Action) {
        self.actions.insert(id, action);
    }

    /// Remove the action of `id`. Returns true if there was one.
    pub fn unregister(&mut self, id: NodeId) -> bool {
        self.actions.remove(&id).is_some()
    }

    /// Run the action of `id` and record the activation.
    ///
    /// Returns false, without recording anything, if `id` has no action.
    pub fn activate(&mut self, id: NodeId) -> bool {
        let Some(action) = self.actions.get_mut(&id) else {
            tracing::trace!(target: "attune", %id, "activation of node without action");
            return false;
        };
        tracing::debug!(target: "attune", %id, "activated");
        action();
        self.activated.push(id);
        true
    }

    /// Keep only the actions whose id satisfies `keep`. Returns how many were dropped.
    pub fn retain(&mut self, mut keep: impl FnMut(NodeId) -> bool) -> usize {
        let before = self.actions.len();
        self.actions.retain(|&id, _| {
            let kept = keep(id);
            if !kept {
                tracing::debug!(target: "attune", %id, "pruned action of removed node");
            }
            kept
        });
        before - self.actions.len()
    }

    /// Ids activated since the last call, in activation order.
    pub fn take_activated(&mut self) -> SmallVec<[NodeId; 4]> {
        core::mem::take(&mut self.activated)
    }

    /// Forget activations that were never taken.
    pub fn clear_activated(&mut self) {
        self.activated.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, Action) {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        (count, Box::new(move || c.set(c.get() + 1)))
    }

    #[test]
    fn activate_runs_and_records() {
        let mut reg = ActionRegistry::new();
        let id = NodeId::from_raw(5);
        let (count, action) = counter();
        reg.register(id, action);
        assert!(reg.activate(id));
        assert!(reg.activate(id));
        assert_eq!(count.get(), 2);
        assert_eq!(reg.take_activated().as_slice(), &[id, id]);
        assert!(reg.take_activated().is_empty());
    }

    #[test]
    fn missing_action_is_not_an_error() {
        let mut reg = ActionRegistry::new();
        assert!(!reg.activate(NodeId::from_raw(9)));
        assert!(reg.take_activated().is_empty());
    }

    #[test]
    fn retain_prunes() {
        let mut reg = ActionRegistry::new();
        let keep = NodeId::from_raw(1);
        let drop = NodeId::from_raw(2);
        reg.register(keep, counter().1);
        reg.register(drop, counter().1);
        assert_eq!(reg.retain(|id| id == keep), 1);
        assert!(reg.contains(keep));
        assert!(!reg.contains(drop));
        assert!(reg.unregister(keep));
        assert!(reg.is_empty());
    }
}
