use crate::bounding_volume::{BoundingVolume, Bounds};
use crate::math::Real;
use arrayvec::ArrayVec;
use slab::Slab;
use static_assertions::const_assert;
use std::sync::Arc;

/// The maximum number of children of an internal node.
pub const MAX_BRANCHES: usize = 4;

const_assert!(MAX_BRANCHES >= 2);

/// The margin added on each side of strict bounds by [`Boundable::loose_bounds`].
pub const DEFAULT_LOOSE_MARGIN: Real = 0.1;

/// A body which can be stored in a [`BoundsTree`].
pub trait Boundable {
    /// The exact world bounds of this body.
    fn strict_bounds(&self) -> Bounds;

    /// Inflated world bounds of this body.
    ///
    /// A leaf storing loose bounds doesn't have to be refreshed as long as the body stays
    /// within them. Defaults to the strict bounds enlarged by [`DEFAULT_LOOSE_MARGIN`].
    fn loose_bounds(&self) -> Bounds {
        self.strict_bounds().loosened(DEFAULT_LOOSE_MARGIN)
    }
}

impl<T: Boundable + ?Sized> Boundable for &T {
    #[inline]
    fn strict_bounds(&self) -> Bounds {
        (**self).strict_bounds()
    }

    #[inline]
    fn loose_bounds(&self) -> Bounds {
        (**self).loose_bounds()
    }
}

impl<T: Boundable + ?Sized> Boundable for Arc<T> {
    #[inline]
    fn strict_bounds(&self) -> Bounds {
        (**self).strict_bounds()
    }

    #[inline]
    fn loose_bounds(&self) -> Bounds {
        (**self).loose_bounds()
    }
}

impl Boundable for Bounds {
    #[inline]
    fn strict_bounds(&self) -> Bounds {
        *self
    }
}

/// The index of a node of a [`BoundsTree`].
///
/// Indices stay valid until the node they designate is removed. Leaf indices never change
/// while their leaf is in the tree, even when the tree is restructured.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub(super) usize);

impl NodeIndex {
    /// The raw index of this node in the node arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// The children of an internal node.
pub type Children = ArrayVec<NodeIndex, MAX_BRANCHES>;

/// What a node of a [`BoundsTree`] holds.
#[derive(Clone, Debug)]
pub enum NodeContent<B> {
    /// A single body.
    Leaf(B),
    /// Up to [`MAX_BRANCHES`] child nodes.
    Internal(Children),
}

/// A node of a [`BoundsTree`].
#[derive(Clone, Debug)]
pub struct TreeNode<B> {
    /// The bounds of this node.
    ///
    /// For an internal node, they enclose the bounds of all its children.
    pub bounds: Bounds,
    /// The parent of this node. Only the root has none.
    pub parent: Option<NodeIndex>,
    /// The body or children of this node.
    pub content: NodeContent<B>,
}

impl<B> TreeNode<B> {
    /// Is this node a leaf?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.content, NodeContent::Leaf(_))
    }

    /// The body stored by this node, if it's a leaf.
    #[inline]
    pub fn body(&self) -> Option<&B> {
        match &self.content {
            NodeContent::Leaf(body) => Some(body),
            NodeContent::Internal(_) => None,
        }
    }

    /// The children of this node. Empty for leaves.
    #[inline]
    pub fn children(&self) -> &[NodeIndex] {
        match &self.content {
            NodeContent::Leaf(_) => &[],
            NodeContent::Internal(children) => children,
        }
    }
}

/// Error raised by [`BoundsTree`] lookups.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoundsTreeError {
    /// The tree contains no body.
    #[error("the bounds tree is empty.")]
    EmptyTree,
    /// No leaf matches the query.
    #[error("no leaf matches the given bounds.")]
    NotFound,
    /// The node exists but isn't a leaf.
    #[error("the node {0:?} is not a leaf.")]
    NotALeaf(NodeIndex),
}

/// A bounding-volume hierarchy with up to [`MAX_BRANCHES`] children per node.
///
/// Nodes are stored in an arena and addressed by [`NodeIndex`]. The root is always an
/// internal node, possibly without children. Every other internal node has at least two
/// children.
///
/// The tree performs no synchronization: mutations must be serialized by the caller.
#[derive(Clone, Debug)]
pub struct BoundsTree<B> {
    pub(super) nodes: Slab<TreeNode<B>>,
    pub(super) root: NodeIndex,
    pub(super) len: usize,
}

impl<B> Default for BoundsTree<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> BoundsTree<B> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        let mut nodes = Slab::new();
        let root = NodeIndex(nodes.insert(TreeNode {
            bounds: Bounds::new_invalid(),
            parent: None,
            content: NodeContent::Internal(Children::new()),
        }));

        Self {
            nodes,
            root,
            len: 0,
        }
    }

    /// The number of bodies in this tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Does this tree contain no body?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The index of the root node.
    #[inline]
    pub fn root(&self) -> NodeIndex {
        self.root
    }

    /// The bounds of the root node, or `None` if the tree is empty.
    #[inline]
    pub fn root_bounds(&self) -> Option<Bounds> {
        if self.is_empty() {
            None
        } else {
            Some(self[self.root].bounds)
        }
    }

    /// The node at `index`, if it exists.
    #[inline]
    pub fn node(&self, index: NodeIndex) -> Option<&TreeNode<B>> {
        self.nodes.get(index.0)
    }

    /// The body stored by the leaf `index`.
    pub fn body(&self, index: NodeIndex) -> Option<&B> {
        self.node(index).and_then(TreeNode::body)
    }

    /// The body stored by the leaf `index`, mutably.
    ///
    /// The bounds of the tree are not updated if the body moves: call
    /// [`Self::recalculate_bounds`] once all the bodies are updated.
    pub fn body_mut(&mut self, index: NodeIndex) -> Option<&mut B> {
        match &mut self.nodes.get_mut(index.0)?.content {
            NodeContent::Leaf(body) => Some(body),
            NodeContent::Internal(_) => None,
        }
    }

    /// Removes every body from this tree.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Removes the leaf `leaf` and returns its body.
    ///
    /// Returns `None` if `leaf` isn't a leaf of this tree. Internal nodes left with a single
    /// child are collapsed and the bounds of the ancestors are refitted.
    pub fn remove(&mut self, leaf: NodeIndex) -> Option<B> {
        if !self.node(leaf)?.is_leaf() {
            return None;
        }

        let removed = self.nodes.remove(leaf.0);
        let parent = removed.parent?;
        self.len -= 1;
        self.children_mut(parent).retain(|c| *c != leaf);

        let mut refit_from = parent;

        if parent != self.root && self[parent].children().len() == 1 {
            // Collapse the parent: its last child takes its place.
            let only_child = self[parent].children()[0];
            let grand_parent = self.nodes.remove(parent.0).parent;

            if let Some(grand_parent) = grand_parent {
                for c in self.children_mut(grand_parent).iter_mut() {
                    if *c == parent {
                        *c = only_child;
                    }
                }
                self[only_child].parent = Some(grand_parent);
                refit_from = grand_parent;
            }
        }

        self.refit_ancestors(refit_from);
        self.shrink_root();

        match removed.content {
            NodeContent::Leaf(body) => Some(body),
            NodeContent::Internal(_) => None,
        }
    }

    /// Replaces the root by its only child while that child is internal.
    fn shrink_root(&mut self) {
        loop {
            let child = match self[self.root].children() {
                [child] if !self[*child].is_leaf() => *child,
                _ => break,
            };

            let _ = self.nodes.remove(self.root.0);
            self[child].parent = None;
            self.root = child;
        }
    }

    /// Recomputes the bounds of `node` and all its ancestors from their children.
    pub(super) fn refit_ancestors(&mut self, node: NodeIndex) {
        let mut curr = Some(node);

        while let Some(node) = curr {
            self.recalculate_node_bounds(node);
            curr = self[node].parent;
        }
    }

    /// The children of the internal node `node`.
    ///
    /// Panics if `node` is a leaf: callers only use it on nodes known to be internal.
    pub(super) fn children_mut(&mut self, node: NodeIndex) -> &mut Children {
        match &mut self[node].content {
            NodeContent::Internal(children) => children,
            NodeContent::Leaf(_) => unreachable!("the node {:?} is not internal", node),
        }
    }
}

impl<B> core::ops::Index<NodeIndex> for BoundsTree<B> {
    type Output = TreeNode<B>;

    #[inline]
    fn index(&self, index: NodeIndex) -> &TreeNode<B> {
        &self.nodes[index.0]
    }
}

impl<B> core::ops::IndexMut<NodeIndex> for BoundsTree<B> {
    #[inline]
    fn index_mut(&mut self, index: NodeIndex) -> &mut TreeNode<B> {
        &mut self.nodes[index.0]
    }
}
