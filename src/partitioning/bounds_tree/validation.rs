use super::tree::{BoundsTree, NodeIndex, MAX_BRANCHES};
use crate::bounding_volume::BoundingVolume;
use std::collections::HashSet;

impl<B> BoundsTree<B> {
    /// Counts the number of leaves that can be reached from the node `node`.
    ///
    /// This is mostly a utility for debugging.
    pub fn reachable_leaf_count(&self, node: NodeIndex) -> usize {
        let node = &self[node];

        if node.is_leaf() {
            1
        } else {
            node.children()
                .iter()
                .map(|c| self.reachable_leaf_count(*c))
                .sum()
        }
    }

    /// Panics if the tree isn’t well-formed.
    ///
    /// The tree is well-formed if it is topologically correct (parent links match child
    /// lists, every stored node is reachable exactly once, non-root internal nodes have at
    /// least two children) and geometrically correct (the bounds of an internal node enclose
    /// the bounds of its children).
    pub fn assert_well_formed(&self) {
        let root = &self[self.root];
        assert!(root.parent.is_none(), "The root has a parent.");
        assert!(!root.is_leaf(), "The root is a leaf.");

        let mut loop_detection = HashSet::new();
        let leaf_count = self.assert_well_formed_recurse(self.root, &mut loop_detection);

        assert_eq!(leaf_count, self.len, "Leaf count mismatch.");
        assert_eq!(
            loop_detection.len(),
            self.nodes.len(),
            "Some nodes are unreachable."
        );
    }

    fn assert_well_formed_recurse(
        &self,
        node_id: NodeIndex,
        loop_detection: &mut HashSet<NodeIndex>,
    ) -> usize {
        if !loop_detection.insert(node_id) {
            panic!("Detected loop. Node {:?} visited twice.", node_id);
        }

        let node = &self[node_id];

        if node.is_leaf() {
            return 1;
        }

        let children = node.children();
        assert!(children.len() <= MAX_BRANCHES);

        if node_id != self.root {
            assert!(
                children.len() >= 2,
                "The internal node {:?} has less than two children.",
                node_id
            );
        }

        let mut leaf_count = 0;

        for child_id in children {
            let child = &self[*child_id];
            assert_eq!(child.parent, Some(node_id));
            assert!(
                node.bounds.contains(&child.bounds),
                "The bounds of {:?} don’t enclose the bounds of its child {:?}.",
                node_id,
                child_id
            );
            leaf_count += self.assert_well_formed_recurse(*child_id, loop_detection);
        }

        leaf_count
    }
}
