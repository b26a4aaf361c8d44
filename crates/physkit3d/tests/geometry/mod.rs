use physkit3d::math::{Point, Real, Vector};
use physkit3d::shape::Triangle;

mod bounds_tree;
mod gjk_intersection;
mod mass_properties;
mod normalized_round_trip;
mod shape_queries;

/// A cube of side `side` centered at `center`, with outward windings.
pub fn cube_mesh(center: Point<Real>, side: Real) -> (Vec<Point<Real>>, Vec<Triangle>) {
    let h = side / 2.0;
    let vertices = (0..8)
        .map(|i| {
            center
                + Vector::new(
                    if i & 1 == 0 { -h } else { h },
                    if i & 2 == 0 { -h } else { h },
                    if i & 4 == 0 { -h } else { h },
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

/// The tetrahedron with vertices at the origin and at the tips of the unit axes.
pub fn corner_tetrahedron() -> (Vec<Point<Real>>, Vec<Triangle>) {
    let vertices = vec![
        Point::origin(),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ];
    let triangles = vec![
        Triangle::new(0, 2, 1),
        Triangle::new(0, 1, 3),
        Triangle::new(0, 3, 2),
        Triangle::new(1, 2, 3),
    ];

    (vertices, triangles)
}
