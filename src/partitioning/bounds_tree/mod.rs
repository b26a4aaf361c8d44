pub use self::queries::IntersectingLeaves;
pub use self::tree::{
    Boundable, BoundsTree, BoundsTreeError, Children, NodeContent, NodeIndex, TreeNode,
    DEFAULT_LOOSE_MARGIN, MAX_BRANCHES,
};

mod insert;
mod optimize;
mod queries;
mod refit;
mod tree;
mod validation;
