//! Triangle-mesh shapes viewing caller-owned buffers.

pub use self::centered::{CenteredShape, NormalizedShape};
#[doc(inline)]
pub use self::shape::{Shape, ShapeError, TopologyError};
#[doc(inline)]
pub use self::support_map::SupportMap;
pub use self::triangle::Triangle;

mod centered;
mod shape;
mod support_map;
mod triangle;

#[cfg(test)]
pub(crate) mod test_meshes;
