// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications drained once per cycle for an accessibility bridge.

use attune_tree::NodeId;
use smallvec::SmallVec;

/// Transitions that happened during one cycle.
///
/// Produced by [`TreeContext::drain_events`](crate::TreeContext::drain_events).
/// Events that are not drained before the next rebuild are lost.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Events {
    /// The newly focused node, if focus moved.
    pub focus_changed: Option<NodeId>,
    /// Nodes whose action ran, in order.
    pub activated: SmallVec<[NodeId; 4]>,
}

impl Events {
    /// Returns true if nothing happened.
    pub fn is_empty(&self) -> bool {
        self.focus_changed.is_none() && self.activated.is_empty()
    }

    /// Deliver the events to `sink`: the focus change first, then activations.
    pub fn notify(&self, sink: &mut impl EventSink) {
        if let Some(id) = self.focus_changed {
            sink.focus_changed(id);
        }
        for &id in &self.activated {
            sink.invoked(id);
        }
    }
}

/// Receiver of [`Events`], typically the platform accessibility bridge.
pub trait EventSink {
    /// Focus moved to `id`.
    fn focus_changed(&mut self, id: NodeId);
    /// The action of `id` ran.
    fn invoked(&mut self, id: NodeId);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use smallvec::smallvec;

    #[derive(Default)]
    struct Log(Vec<(&'static str, NodeId)>);

    impl EventSink for Log {
        fn focus_changed(&mut self, id: NodeId) {
            self.0.push(("focus", id));
        }
        fn invoked(&mut self, id: NodeId) {
            self.0.push(("invoke", id));
        }
    }

    #[test]
    fn focus_is_delivered_before_activations() {
        let (a, b) = (NodeId::from_raw(1), NodeId::from_raw(2));
        let events = Events {
            focus_changed: Some(b),
            activated: smallvec![a, b],
        };
        let mut log = Log::default();
        events.notify(&mut log);
        assert_eq!(log.0, [("focus", b), ("invoke", a), ("invoke", b)]);
        assert!(Events::default().is_empty());
    }
}
