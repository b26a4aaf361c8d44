//! Spatial partitioning tools.
//!
//! The [`BoundsTree`] is the broad phase of the simulation: it indexes bodies by their world
//! [`Bounds`](crate::bounding_volume::Bounds) so that only pairs of bodies with overlapping
//! bounds are handed to the narrow phase.

pub use self::bounds_tree::{
    Boundable, BoundsTree, BoundsTreeError, Children, IntersectingLeaves, NodeContent,
    NodeIndex, TreeNode, DEFAULT_LOOSE_MARGIN, MAX_BRANCHES,
};

mod bounds_tree;
