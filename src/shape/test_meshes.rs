//! Closed meshes shared by the unit tests.

use crate::math::{Point, Real, Vector};
use crate::shape::Triangle;

/// An axis-aligned box with its min corner at `min`, triangulated with outward windings.
pub(crate) fn cuboid(min: Point<Real>, extents: Vector<Real>) -> (Vec<Point<Real>>, Vec<Triangle>) {
    let vertices = (0..8)
        .map(|i| {
            Point::new(
                min.x + if i & 1 == 0 { 0.0 } else { extents.x },
                min.y + if i & 2 == 0 { 0.0 } else { extents.y },
                min.z + if i & 4 == 0 { 0.0 } else { extents.z },
            )
        })
        .collect();
    let triangles = [
        [0, 2, 1],
        [1, 2, 3],
        [4, 5, 6],
        [5, 7, 6],
        [0, 1, 4],
        [1, 5, 4],
        [2, 6, 3],
        [3, 6, 7],
        [0, 4, 2],
        [2, 4, 6],
        [1, 3, 5],
        [3, 7, 5],
    ]
    .into_iter()
    .map(Triangle::from)
    .collect();
    (vertices, triangles)
}

/// A cube of side `side` centered at `center`.
pub(crate) fn cube(center: Point<Real>, side: Real) -> (Vec<Point<Real>>, Vec<Triangle>) {
    cuboid(center - Vector::repeat(side / 2.0), Vector::repeat(side))
}
