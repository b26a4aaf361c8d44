use super::{corner_tetrahedron, cube_mesh};
use na::Unit;
use physkit3d::mass_properties::{MassProperties, MassPropertiesError};
use physkit3d::math::{CFrame, Point, Real, Rotation, Vector};
use physkit3d::shape::{Shape, Triangle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_frame(rng: &mut StdRng) -> CFrame {
    let axis = Unit::new_normalize(Vector::new(
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
    ));
    let rotation = Rotation::from_axis_angle(&axis, rng.gen_range(-3.0..3.0));
    let position = Vector::new(
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
    );
    CFrame::new(position, rotation)
}

#[test]
fn cube_volume_is_side_cubed() {
    for side in [0.5, 1.0, 2.0, 7.5] {
        let (vertices, triangles) = cube_mesh(Point::new(3.0, -1.0, 0.0), side);
        let shape = Shape::new(&vertices, &triangles).unwrap();
        assert_relative_eq!(shape.volume(), side * side * side, epsilon = 1.0e-9);
    }
}

#[test]
fn volume_is_invariant_under_rigid_motions() {
    let (vertices, triangles) = cube_mesh(Point::origin(), 2.0);
    let shape = Shape::new(&vertices, &triangles).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let mut buf = vec![Point::origin(); vertices.len()];

    for _ in 0..50 {
        let frame = random_frame(&mut rng);
        let moved = shape.local_to_global(&frame, &mut buf).unwrap();
        assert_relative_eq!(moved.volume(), 8.0, epsilon = 1.0e-7);
    }
}

#[test]
fn center_of_mass_follows_translations() {
    let (vertices, triangles) = cube_mesh(Point::origin(), 1.0);
    let shape = Shape::new(&vertices, &triangles).unwrap();
    assert_relative_eq!(
        shape.center_of_mass().unwrap(),
        Point::origin(),
        epsilon = 1.0e-12
    );

    let mut buf = vec![Point::origin(); vertices.len()];
    let offset = Vector::new(12.0, -3.5, 0.25);
    let translated = shape.translated(&offset, &mut buf).unwrap();
    assert_relative_eq!(
        translated.center_of_mass().unwrap(),
        Point::from(offset),
        epsilon = 1.0e-9
    );
}

#[test]
fn tetrahedron_mass_properties() {
    let (vertices, triangles) = corner_tetrahedron();
    let shape = Shape::new(&vertices, &triangles).unwrap();

    assert_relative_eq!(shape.volume(), 1.0 / 6.0, epsilon = 1.0e-12);
    assert_relative_eq!(
        shape.center_of_mass().unwrap(),
        Point::new(0.25, 0.25, 0.25),
        epsilon = 1.0e-12
    );

    // ∫(y² + z²) = 2 · 1/60 and ∫xy = 1/120 over the corner tetrahedron.
    let inertia = shape.inertia();
    assert_relative_eq!(inertia.m11, 1.0 / 30.0, epsilon = 1.0e-12);
    assert_relative_eq!(inertia.m22, 1.0 / 30.0, epsilon = 1.0e-12);
    assert_relative_eq!(inertia.m12, -1.0 / 120.0, epsilon = 1.0e-12);
    assert_relative_eq!(inertia.m23, -1.0 / 120.0, epsilon = 1.0e-12);
    assert_relative_eq!(inertia, inertia.transpose(), epsilon = 1.0e-15);
}

#[test]
fn inertia_is_consistent_across_reference_frames() {
    let (vertices, triangles) = cube_mesh(Point::new(1.0, 2.0, -1.0), 2.0);
    let shape = Shape::new(&vertices, &triangles).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let com = shape.center_of_mass().unwrap();
    let about_com = shape.inertia_about(&com);

    for _ in 0..10 {
        let reference = Point::new(
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
        );
        // Parallel axis theorem.
        let d = com - reference;
        let shift = (na::Matrix3::identity() * d.norm_squared() - d * d.transpose()) * shape.volume();
        assert_relative_eq!(
            shape.inertia_about(&reference),
            about_com + shift,
            epsilon = 1.0e-8
        );
    }
}

#[test]
fn flat_shapes_are_rejected() {
    let vertices = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(1.0, 1.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    ];
    let triangles = [
        Triangle::new(0, 1, 2),
        Triangle::new(0, 2, 3),
        Triangle::new(0, 2, 1),
        Triangle::new(0, 3, 2),
    ];
    let shape = Shape::new(&vertices, &triangles).unwrap();

    assert!(matches!(
        shape.center_of_mass(),
        Err(MassPropertiesError::DegenerateShape { .. })
    ));
    assert!(MassProperties::from_shape(&shape, 1.0).is_err());

    let mut buf = vec![Point::origin(); vertices.len()];
    assert!(shape.centered(&mut buf).is_err());
}

#[test]
fn mass_properties_of_scaled_density() {
    let (vertices, triangles) = cube_mesh(Point::new(0.0, 5.0, 0.0), 2.0);
    let shape = Shape::new(&vertices, &triangles).unwrap();
    let density: Real = 2.5;
    let props = MassProperties::from_shape(&shape, density).unwrap();

    assert_relative_eq!(props.mass(), 8.0 * density, epsilon = 1.0e-9);
    assert_relative_eq!(props.local_com, Point::new(0.0, 5.0, 0.0), epsilon = 1.0e-9);
    // A cube of mass m and side s: m s² / 6 about any axis through its center.
    assert_relative_eq!(
        props.principal_inertia(),
        Vector::repeat(8.0 * density * 4.0 / 6.0),
        epsilon = 1.0e-8
    );
}
