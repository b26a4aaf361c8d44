use super::{corner_tetrahedron, cube_mesh};
use physkit3d::math::{CFrame, Point, Rotation, Vector};
use physkit3d::shape::Shape;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn assert_round_trip(shape: &Shape) {
    let mut buf = vec![Point::origin(); shape.vertices().len()];
    let (normalized, back) = shape.normalized(&mut buf).unwrap();

    assert!(normalized.is_normalized(1.0e-7));
    assert_relative_eq!(back.rotation.matrix().determinant(), 1.0, epsilon = 1.0e-9);

    for (local, original) in normalized.vertices().iter().zip(shape.vertices()) {
        assert_relative_eq!(back.local_to_global(local), *original, epsilon = 1.0e-7);
    }
}

#[test]
fn normalized_tetrahedron_round_trip() {
    let (vertices, triangles) = corner_tetrahedron();
    assert_round_trip(&Shape::new(&vertices, &triangles).unwrap());
}

#[test]
fn normalized_random_boxes_round_trip() {
    let mut rng = StdRng::seed_from_u64(31);

    for _ in 0..20 {
        // Stretch a cube along random axes so the principal moments are distinct.
        let (vertices, triangles) = cube_mesh(Point::origin(), 1.0);
        let scale = Vector::new(
            rng.gen_range(0.5..4.0),
            rng.gen_range(0.5..4.0),
            rng.gen_range(0.5..4.0),
        );
        let frame = CFrame::new(
            Vector::new(
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
            ),
            Rotation::from_euler_angles(
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
            ),
        );
        let placed: Vec<_> = vertices
            .iter()
            .map(|p| frame.local_to_global(&Point::from(p.coords.component_mul(&scale))))
            .collect();

        assert_round_trip(&Shape::new(&placed, &triangles).unwrap());
    }
}

#[test]
fn centered_shape_round_trip() {
    let (vertices, triangles) = cube_mesh(Point::new(7.0, -2.0, 1.5), 2.0);
    let shape = Shape::new(&vertices, &triangles).unwrap();
    let mut buf = vec![Point::origin(); vertices.len()];
    let (centered, back_offset) = shape.centered(&mut buf).unwrap();

    assert!(centered.is_centered(1.0e-9));
    for (local, original) in centered.vertices().iter().zip(&vertices) {
        assert_relative_eq!(local + back_offset, *original, epsilon = 1.0e-9);
    }
}

#[test]
fn output_buffer_must_match() {
    let (vertices, triangles) = cube_mesh(Point::origin(), 1.0);
    let shape = Shape::new(&vertices, &triangles).unwrap();
    let mut short = vec![Point::origin(); vertices.len() - 1];
    assert!(shape.normalized(&mut short).is_err());
}
