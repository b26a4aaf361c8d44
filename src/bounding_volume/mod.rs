//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::bounding_box::BoundingBox;
#[doc(inline)]
pub use crate::bounding_volume::bounding_sphere::BoundingSphere;
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::BoundingVolume;
#[doc(inline)]
pub use crate::bounding_volume::bounds::Bounds;

#[doc(hidden)]
pub mod bounding_box;
#[doc(hidden)]
pub mod bounding_sphere;
#[doc(hidden)]
pub mod bounding_volume;
#[doc(hidden)]
pub mod bounds;
