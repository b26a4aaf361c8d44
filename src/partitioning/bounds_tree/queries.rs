use super::tree::{BoundsTree, BoundsTreeError, NodeContent, NodeIndex};
use crate::bounding_volume::{BoundingVolume, Bounds};
use smallvec::SmallVec;

/// The traversal stack of the tree queries. Trees of a reasonable size never spill it to the
/// heap.
type TraversalStack = SmallVec<[NodeIndex; 32]>;

impl<B> BoundsTree<B> {
    /// Finds the leaf whose bounds are exactly `bounds`.
    ///
    /// Only the subtrees whose bounds contain `bounds` are visited. Fails with
    /// [`BoundsTreeError::EmptyTree`] if the tree is empty, or with
    /// [`BoundsTreeError::NotFound`] if no such leaf exists.
    pub fn find_leaf_node_for(&self, bounds: &Bounds) -> Result<NodeIndex, BoundsTreeError> {
        if self.is_empty() {
            return Err(BoundsTreeError::EmptyTree);
        }

        let mut stack = TraversalStack::new();
        stack.push(self.root);

        while let Some(curr) = stack.pop() {
            let node = &self[curr];

            match &node.content {
                NodeContent::Leaf(_) if node.bounds == *bounds => return Ok(curr),
                NodeContent::Leaf(_) => {}
                NodeContent::Internal(children) => stack.extend(
                    children
                        .iter()
                        .copied()
                        .filter(|c| self[*c].bounds.contains(bounds)),
                ),
            }
        }

        Err(BoundsTreeError::NotFound)
    }

    /// Finds the leaf storing `body`.
    pub fn find_leaf_of(&self, body: &B) -> Option<NodeIndex>
    where
        B: PartialEq,
    {
        self.leaves()
            .find(|(_, leaf_body)| *leaf_body == body)
            .map(|(id, _)| id)
    }

    /// The body stored by `leaf`, failing if `leaf` isn't a leaf of this tree.
    pub fn leaf(&self, leaf: NodeIndex) -> Result<&B, BoundsTreeError> {
        match self.node(leaf) {
            None => Err(BoundsTreeError::NotFound),
            Some(node) => node.body().ok_or(BoundsTreeError::NotALeaf(leaf)),
        }
    }

    /// Iterates through every leaf index and the body it stores.
    pub fn leaves(&self) -> impl Iterator<Item = (NodeIndex, &B)> {
        self.nodes.iter().filter_map(|(id, node)| match &node.content {
            NodeContent::Leaf(body) => Some((NodeIndex(id), body)),
            NodeContent::Internal(_) => None,
        })
    }

    /// Iterates through every body of the tree.
    pub fn bodies(&self) -> impl Iterator<Item = &B> {
        self.leaves().map(|(_, body)| body)
    }

    /// Iterates through the leaves whose bounds intersect `bounds`.
    pub fn intersecting<'a>(&'a self, bounds: &Bounds) -> IntersectingLeaves<'a, B> {
        let mut stack = TraversalStack::new();

        if !self.is_empty() {
            stack.push(self.root);
        }

        IntersectingLeaves {
            tree: self,
            bounds: *bounds,
            stack,
        }
    }

    /// All the pairs of distinct leaves with intersecting bounds.
    ///
    /// This is the broad-phase output: each pair is reported once, with its smallest node
    /// index first.
    pub fn candidate_pairs(&self) -> Vec<(NodeIndex, NodeIndex)> {
        let mut pairs = Vec::new();
        self.self_pairs(self.root, &mut pairs);
        pairs
    }

    /// The number of edges on the longest path from the root to a leaf.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: SmallVec<[(NodeIndex, usize); 32]> = SmallVec::new();
        stack.push((self.root, 0));

        while let Some((curr, depth)) = stack.pop() {
            let node = &self[curr];

            if node.is_leaf() {
                max_depth = max_depth.max(depth);
            } else {
                stack.extend(node.children().iter().map(|c| (*c, depth + 1)));
            }
        }

        max_depth
    }

    fn self_pairs(&self, node: NodeIndex, out: &mut Vec<(NodeIndex, NodeIndex)>) {
        let children = self[node].children();

        for (i, a) in children.iter().enumerate() {
            self.self_pairs(*a, out);

            for b in &children[i + 1..] {
                self.cross_pairs(*a, *b, out);
            }
        }
    }

    fn cross_pairs(&self, a: NodeIndex, b: NodeIndex, out: &mut Vec<(NodeIndex, NodeIndex)>) {
        let (node_a, node_b) = (&self[a], &self[b]);

        if !node_a.bounds.intersects(&node_b.bounds) {
            return;
        }

        match (node_a.is_leaf(), node_b.is_leaf()) {
            (true, true) => out.push((a.min(b), a.max(b))),
            (false, true) => {
                for child in node_a.children() {
                    self.cross_pairs(*child, b, out);
                }
            }
            (true, false) => {
                for child in node_b.children() {
                    self.cross_pairs(a, *child, out);
                }
            }
            (false, false) => {
                // Descend into the largest node first.
                if node_a.bounds.surface_area() >= node_b.bounds.surface_area() {
                    for child in node_a.children() {
                        self.cross_pairs(*child, b, out);
                    }
                } else {
                    for child in node_b.children() {
                        self.cross_pairs(a, *child, out);
                    }
                }
            }
        }
    }
}

/// Iterator through the leaves of a [`BoundsTree`] intersecting some bounds.
///
/// Built by [`BoundsTree::intersecting`].
pub struct IntersectingLeaves<'a, B> {
    tree: &'a BoundsTree<B>,
    bounds: Bounds,
    stack: TraversalStack,
}

impl<'a, B> Iterator for IntersectingLeaves<'a, B> {
    type Item = (NodeIndex, &'a B);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;

        while let Some(curr) = self.stack.pop() {
            let node = &tree[curr];

            if !node.bounds.intersects(&self.bounds) {
                continue;
            }

            match &node.content {
                NodeContent::Leaf(body) => return Some((curr, body)),
                NodeContent::Internal(children) => self.stack.extend(children.iter().copied()),
            }
        }

        None
    }
}
