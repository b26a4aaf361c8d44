use super::tree::{Boundable, BoundsTree, NodeContent, NodeIndex};
use crate::bounding_volume::{BoundingVolume, Bounds};

impl<B: Boundable> BoundsTree<B> {
    /// Refreshes the bounds of every node of the tree, bottom-up.
    ///
    /// With `strict` set, every leaf takes the exact bounds of its body. Otherwise, a leaf
    /// keeps its current bounds as long as they contain the strict bounds of its body, and
    /// takes the body's loose bounds when it escapes them. Loose bounds thus change rarely
    /// for slowly moving bodies, at the cost of less precise culling.
    ///
    /// # Example
    ///
    /// ```
    /// use physkit3d::bounding_volume::Bounds;
    /// use physkit3d::math::{Position, Vector};
    /// use physkit3d::partitioning::BoundsTree;
    ///
    /// let mut tree = BoundsTree::new();
    /// for i in 0..10 {
    ///     let center = Position::from_reals(i as f64 * 3.0, 0.0, 0.0);
    ///     let _ = tree.add(Bounds::from_half_extents(center, Vector::repeat(1.0)), false);
    /// }
    ///
    /// tree.recalculate_bounds(true);
    /// tree.assert_well_formed();
    /// assert_eq!(tree.root_bounds().unwrap().min, Position::from_reals(-1.0, -1.0, -1.0));
    /// ```
    pub fn recalculate_bounds(&mut self, strict: bool) {
        self.recalculate_bounds_recursive(self.root, strict);
    }

    /// Refreshes the bounds of the subtree rooted at `node`, then of `node` itself.
    ///
    /// See [`Self::recalculate_bounds`] for the meaning of `strict`. The ancestors of `node`
    /// are left untouched.
    pub fn recalculate_bounds_recursive(&mut self, node: NodeIndex, strict: bool) {
        let new_leaf_bounds = match &self[node].content {
            NodeContent::Leaf(body) if strict => Some(body.strict_bounds()),
            NodeContent::Leaf(body) => {
                let current = self[node].bounds;

                if current.contains(&body.strict_bounds()) {
                    None
                } else {
                    Some(body.loose_bounds())
                }
            }
            NodeContent::Internal(children) => {
                for child in children.clone() {
                    self.recalculate_bounds_recursive(child, strict);
                }
                self.recalculate_node_bounds(node);
                None
            }
        };

        if let Some(bounds) = new_leaf_bounds {
            self[node].bounds = bounds;
        }
    }
}

impl<B> BoundsTree<B> {
    /// Sets the bounds of the internal node `node` to the union of the bounds of its children.
    ///
    /// Leaves and childless nodes are left unchanged, except the root which gets invalid bounds
    /// when the tree is empty.
    pub fn recalculate_node_bounds(&mut self, node: NodeIndex) {
        let children = self[node].children();

        if children.is_empty() {
            if node == self.root {
                self[node].bounds = Bounds::new_invalid();
            }
            return;
        }

        let mut bounds = Bounds::new_invalid();
        for child in children {
            bounds.merge(&self[*child].bounds);
        }

        self[node].bounds = bounds;
    }
}
