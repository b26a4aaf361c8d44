//! Non-persistent geometric queries.
//!
//! * [`gjk::intersection_test()`] determines if two shapes intersect and estimates a contact
//!   point. [`Shape::intersects`](crate::shape::Shape::intersects) and
//!   [`Shape::intersects_at`](crate::shape::Shape::intersects_at) are shortcuts for it.
//! * Ray-casting and point containment on shapes:
//!   [`Shape::cast_ray`](crate::shape::Shape::cast_ray),
//!   [`Shape::intersection_distance`](crate::shape::Shape::intersection_distance) and
//!   [`Shape::contains_point`](crate::shape::Shape::contains_point).

pub use self::gjk::{GjkOptions, GjkResult};
pub use self::ray::{ray_triangle_intersection, Ray, RayTriangleHit, RAY_EPSILON};

pub mod gjk;
mod ray;
