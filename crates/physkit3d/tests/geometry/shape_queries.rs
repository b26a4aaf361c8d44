use super::{corner_tetrahedron, cube_mesh};
use physkit3d::math::{Point, Vector};
use physkit3d::shape::{Shape, TopologyError, Triangle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn closed_meshes_are_valid() {
    let (vertices, triangles) = cube_mesh(Point::new(1.0, 2.0, 3.0), 2.0);
    assert!(Shape::new(&vertices, &triangles).unwrap().is_valid());

    let (vertices, triangles) = corner_tetrahedron();
    assert!(Shape::new(&vertices, &triangles).unwrap().is_valid());
}

#[test]
fn flipped_triangle_is_reported() {
    let (vertices, mut triangles) = cube_mesh(Point::origin(), 1.0);
    triangles[5] = triangles[5].reversed();
    let shape = Shape::new(&vertices, &triangles).unwrap();

    assert!(!shape.is_valid());
    assert!(matches!(
        shape.validate(),
        Err(TopologyError::BadAdjacentTrianglesOrientation { .. })
    ));
}

#[test]
fn edge_shared_by_four_triangles_is_reported() {
    let (vertices, triangles) = corner_tetrahedron();
    let doubled: Vec<_> = triangles.iter().chain(triangles.iter()).copied().collect();
    let shape = Shape::new(&vertices, &doubled).unwrap();

    assert!(!shape.is_valid());
    assert_eq!(
        shape.validate(),
        Err(TopologyError::BadAdjacentTrianglesOrientation {
            triangle1: 0,
            triangle2: 4,
            edge: (0, 2),
        })
    );
}

#[test]
fn open_mesh_is_reported() {
    let (vertices, mut triangles) = cube_mesh(Point::origin(), 1.0);
    let _ = triangles.pop();
    let shape = Shape::new(&vertices, &triangles).unwrap();

    assert!(!shape.is_valid());
    assert!(matches!(
        shape.validate(),
        Err(TopologyError::MissingAdjacentTriangle { .. })
    ));
}

#[test]
fn degenerate_triangle_is_reported() {
    let (vertices, mut triangles) = cube_mesh(Point::origin(), 1.0);
    triangles.push(Triangle::new(0, 0, 1));
    let shape = Shape::new(&vertices, &triangles).unwrap();
    assert_eq!(shape.validate(), Err(TopologyError::BadTriangle(12)));
}

#[test]
fn centroid_is_inside() {
    let center = Point::new(-3.0, 0.25, 8.0);
    let (vertices, triangles) = cube_mesh(center, 2.0);
    let shape = Shape::new(&vertices, &triangles).unwrap();
    assert!(shape.contains_point(&center));

    let (vertices, triangles) = corner_tetrahedron();
    let shape = Shape::new(&vertices, &triangles).unwrap();
    assert!(shape.contains_point(&Point::new(0.25, 0.25, 0.25)));
}

#[test]
fn points_outside_bounds_are_outside() {
    let (vertices, triangles) = cube_mesh(Point::new(0.5, -0.5, 2.0), 3.0);
    let shape = Shape::new(&vertices, &triangles).unwrap();
    let bounds = shape.bounds();
    let mut rng = StdRng::seed_from_u64(3);
    let mut num_tested = 0;

    while num_tested < 500 {
        let point = Point::from(Vector::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        ));

        if !bounds.contains_local_point(&point) {
            assert!(!shape.contains_point(&point), "{:?} is inside", point);
            num_tested += 1;
        }
    }
}

#[test]
fn ray_distance_to_cube() {
    let (vertices, triangles) = cube_mesh(Point::origin(), 2.0);
    let shape = Shape::new(&vertices, &triangles).unwrap();

    let dist = shape.intersection_distance(&Point::new(-5.0, 0.1, 0.2), &Vector::x());
    assert_relative_eq!(dist, 4.0, epsilon = 1.0e-9);

    let miss = shape.intersection_distance(&Point::new(-5.0, 3.0, 0.2), &Vector::x());
    assert_eq!(miss, f64::INFINITY);

    let behind = shape.intersection_distance(&Point::new(5.0, 0.1, 0.2), &Vector::x());
    assert_eq!(behind, f64::INFINITY);
}

#[test]
fn vertex_normals_point_outward() {
    let center = Point::new(4.0, -1.0, 0.5);
    let (vertices, triangles) = cube_mesh(center, 1.0);
    let shape = Shape::new(&vertices, &triangles).unwrap();

    for (vertex, normal) in shape.vertices().iter().zip(shape.normals()) {
        assert_relative_eq!(normal.norm(), 1.0, epsilon = 1.0e-9);
        // Each corner normal is the diagonal through that corner.
        let expected = (vertex - center).normalize();
        assert_relative_eq!(*normal, expected, epsilon = 1.0e-9);
    }
}
