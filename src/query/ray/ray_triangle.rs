use crate::math::{Point, Real};
use crate::query::Ray;

/// Rays closer than this to being parallel to a triangle are considered to miss it.
///
/// Hits must also lie further than this along the ray to count as forward hits.
pub const RAY_EPSILON: Real = 1.0e-7;

/// The intersection of the line supporting a ray with a triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayTriangleHit {
    /// The parameter of the hit along the ray. May be negative.
    pub t: Real,
    /// The barycentric coordinate of the hit relative to the second vertex.
    pub u: Real,
    /// The barycentric coordinate of the hit relative to the third vertex.
    pub v: Real,
}

/// Intersects the line supporting `ray` with the triangle `(a, b, c)`, with the
/// Möller–Trumbore algorithm.
///
/// Returns `None` if the ray is (almost) parallel to the triangle plane or if the line
/// passes outside of the triangle. Hits on edges and vertices are included. The hit may lie
/// behind the ray origin: check [`RayTriangleHit::t`].
pub fn ray_triangle_intersection(
    ray: &Ray,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
) -> Option<RayTriangleHit> {
    let edge1 = b - a;
    let edge2 = c - a;
    let h = ray.dir.cross(&edge2);
    let det = edge1.dot(&h);

    if det.abs() < RAY_EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let s = ray.origin - a;
    let u = inv_det * s.dot(&h);

    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(&edge1);
    let v = inv_det * ray.dir.dot(&q);

    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = inv_det * edge2.dot(&q);
    Some(RayTriangleHit { t, u, v })
}
