//! Ray-casting against shapes.

pub use self::ray::Ray;
pub use self::ray_triangle::{ray_triangle_intersection, RayTriangleHit, RAY_EPSILON};

mod ray;
mod ray_shape;
mod ray_triangle;
