use super::tree::{Boundable, BoundsTree, Children, NodeContent, NodeIndex, TreeNode, MAX_BRANCHES};
use crate::bounding_volume::{BoundingVolume, Bounds};
use crate::math::Real;
use arrayvec::ArrayVec;
use ordered_float::OrderedFloat;

impl<B> BoundsTree<B> {
    /// Inserts `body` with its strict bounds if `strict` is `true`, or its loose bounds
    /// otherwise.
    ///
    /// Returns the index of the new leaf.
    pub fn add(&mut self, body: B, strict: bool) -> NodeIndex
    where
        B: Boundable,
    {
        let bounds = if strict {
            body.strict_bounds()
        } else {
            body.loose_bounds()
        };
        self.insert(body, bounds)
    }

    /// Inserts `body` with the given bounds and returns the index of its new leaf.
    ///
    /// The insertion descends through the child whose bounds grow the least, in surface
    /// area, to enclose the new leaf. Ties are broken by the smallest merged volume. The
    /// descent stops at the first node whose best child is a leaf, and the new leaf is added
    /// to that node. If the node is full, it is split in two and the new node is added to its
    /// parent, recursively up to the root.
    pub fn insert(&mut self, body: B, bounds: Bounds) -> NodeIndex {
        let leaf = NodeIndex(self.nodes.insert(TreeNode {
            bounds,
            parent: None,
            content: NodeContent::Leaf(body),
        }));
        self.len += 1;

        let mut curr = self.root;

        loop {
            self[curr].bounds.merge(&bounds);

            match self.best_child(curr, &bounds) {
                Some(best) if !self[best].is_leaf() => curr = best,
                _ => break,
            }
        }

        self.add_child(curr, leaf);
        leaf
    }

    /// The child of `node` whose bounds need the least surface-area growth to enclose `bounds`.
    fn best_child(&self, node: NodeIndex, bounds: &Bounds) -> Option<NodeIndex> {
        self[node].children().iter().copied().min_by_key(|child| {
            let child_bounds = &self[*child].bounds;
            let merged = child_bounds.merged(bounds);
            (
                OrderedFloat(merged.surface_area() - child_bounds.surface_area()),
                OrderedFloat(merged.volume()),
            )
        })
    }

    /// Adds `child` to the children of `parent`, splitting `parent` if it is full.
    ///
    /// The bounds of `parent` and its ancestors must already enclose the bounds of `child`.
    fn add_child(&mut self, parent: NodeIndex, child: NodeIndex) {
        if self[parent].children().len() < MAX_BRANCHES {
            self.children_mut(parent).push(child);
            self[child].parent = Some(parent);
            return;
        }

        let sibling = self.split(parent, child);

        match self[parent].parent {
            Some(grand_parent) => self.add_child(grand_parent, sibling),
            None => {
                // The root overflowed: the tree grows by one level.
                let mut children = Children::new();
                children.push(parent);
                children.push(sibling);

                let bounds = self[parent].bounds.merged(&self[sibling].bounds);
                let new_root = NodeIndex(self.nodes.insert(TreeNode {
                    bounds,
                    parent: None,
                    content: NodeContent::Internal(children),
                }));

                self[parent].parent = Some(new_root);
                self[sibling].parent = Some(new_root);
                self.root = new_root;
            }
        }
    }

    /// Splits the children of the full node `node`, plus `extra`, into two groups.
    ///
    /// `node` keeps the first group and a new internal node, without parent, takes the second
    /// one. Every partition into groups of at least two elements is tried and the one with the
    /// smallest total surface area is kept. Returns the new node.
    fn split(&mut self, node: NodeIndex, extra: NodeIndex) -> NodeIndex {
        let mut items: ArrayVec<NodeIndex, { MAX_BRANCHES + 1 }> =
            self[node].children().iter().copied().collect();
        items.push(extra);

        let n = items.len();
        let mut best_mask = 0u32;
        let mut best_cost = Real::MAX;

        // The first item always stays in the first group so each partition is visited once.
        for mask in 0..(1u32 << (n - 1)) {
            let mask = mask << 1;
            let second_len = mask.count_ones() as usize;

            if second_len < 2 || n - second_len < 2 {
                continue;
            }

            let mut first = Bounds::new_invalid();
            let mut second = Bounds::new_invalid();

            for (i, item) in items.iter().enumerate() {
                if mask & (1 << i) == 0 {
                    first.merge(&self[*item].bounds);
                } else {
                    second.merge(&self[*item].bounds);
                }
            }

            let cost = first.surface_area() + second.surface_area();

            if cost < best_cost {
                best_cost = cost;
                best_mask = mask;
            }
        }

        let mut kept = Children::new();
        let mut moved = Children::new();

        for (i, item) in items.iter().enumerate() {
            if best_mask & (1 << i) == 0 {
                kept.push(*item);
            } else {
                moved.push(*item);
            }
        }

        log::trace!(
            "Splitting the node {:?} into groups of {} and {} children.",
            node,
            kept.len(),
            moved.len()
        );

        let sibling = NodeIndex(self.nodes.insert(TreeNode {
            bounds: Bounds::new_invalid(),
            parent: None,
            content: NodeContent::Internal(moved.clone()),
        }));

        for c in kept.iter() {
            self[*c].parent = Some(node);
        }
        for c in moved.iter() {
            self[*c].parent = Some(sibling);
        }

        self[node].content = NodeContent::Internal(kept);
        self.recalculate_node_bounds(node);
        self.recalculate_node_bounds(sibling);

        sibling
    }
}
