// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::hash::Hasher;

use rustc_hash::FxHasher;

use crate::types::NodeId;

/// Derive the id of a node from its name and its parent's id.
///
/// The result only depends on its inputs, so rebuilding a node with the same
/// name under the same parent yields the same id. Callers must reject
/// [`NodeId::ROOT`] and [`NodeId::INVALID`], which this function can return.
pub fn derive_id(name: &str, parent: NodeId) -> NodeId {
    let mut hasher = FxHasher::default();
    hasher.write(name.as_bytes());
    hasher.write_u64(parent.get());
    NodeId(hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let parent = derive_id("Main", NodeId::ROOT);
        assert_eq!(derive_id("Close", parent), derive_id("Close", parent));
    }

    #[test]
    fn parent_and_name_both_matter() {
        let a = derive_id("Main", NodeId::ROOT);
        let b = derive_id("Other", NodeId::ROOT);
        assert_ne!(a, b);
        assert_ne!(derive_id("Close", a), derive_id("Close", b));
        assert_ne!(derive_id("Close", a), derive_id("Open", a));
    }

    #[test]
    fn ordinary_names_are_valid() {
        for name in ["Main", "Doc", "A", "B", "Close", ""] {
            assert!(derive_id(name, NodeId::ROOT).is_valid(), "{name} hit a reserved id");
        }
    }
}
