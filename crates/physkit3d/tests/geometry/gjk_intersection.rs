use super::cube_mesh;
use physkit3d::bounding_volume::BoundingVolume;
use physkit3d::math::{CFrame, GlobalCFrame, Point, Position, Rotation, Vector};
use physkit3d::query::gjk::{self, GjkOptions};
use physkit3d::shape::Shape;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn separated_cubes_dont_intersect() {
    let (v1, t1) = cube_mesh(Point::origin(), 1.0);
    let s1 = Shape::new(&v1, &t1).unwrap();
    let half_diagonal = 3.0f64.sqrt() / 2.0;
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..100 {
        let dir = Vector::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        )
        .normalize();
        let dist = 2.0 * half_diagonal + rng.gen_range(0.01..3.0);
        let (v2, t2) = cube_mesh(Point::from(dir * dist), 1.0);
        let s2 = Shape::new(&v2, &t2).unwrap();

        assert_eq!(s1.intersects(&s2), None);
        assert_eq!(s2.intersects(&s1), None);
    }
}

#[test]
fn overlapping_cubes_intersect() {
    let (v1, t1) = cube_mesh(Point::origin(), 1.0);
    let s1 = Shape::new(&v1, &t1).unwrap();
    let mut rng = StdRng::seed_from_u64(18);

    for _ in 0..100 {
        let offset = Vector::new(
            rng.gen_range(-0.4..0.4),
            rng.gen_range(-0.4..0.4),
            rng.gen_range(-0.4..0.4),
        );
        let (v2, t2) = cube_mesh(Point::from(offset), 1.0);
        let s2 = Shape::new(&v2, &t2).unwrap();
        let union = s1.bounds().merged(&s2.bounds());

        let contact = s1.intersects(&s2).expect("the cubes overlap");
        assert!(union.loosened(1.0e-9).contains_local_point(&contact));
    }
}

#[test]
fn identical_cubes_intersect() {
    let (vertices, triangles) = cube_mesh(Point::new(-2.0, 1.0, 0.5), 1.0);
    let shape = Shape::new(&vertices, &triangles).unwrap();
    let contact = shape.intersects(&shape).unwrap();
    assert!(shape.bounds().loosened(1.0e-9).contains_local_point(&contact));
}

#[test]
fn rotated_cubes() {
    let (vertices, triangles) = cube_mesh(Point::origin(), 1.0);
    let shape = Shape::new(&vertices, &triangles).unwrap();
    let rotation = Rotation::from_axis_angle(&Vector::z_axis(), std::f64::consts::FRAC_PI_4);
    let options = GjkOptions::default();

    // Corner of the rotated cube pointing toward the face of the other one.
    let touching = CFrame::new(Vector::new(1.15, 0.0, 0.0), rotation);
    let apart = CFrame::new(Vector::new(1.25, 0.0, 0.0), rotation);

    assert!(
        gjk::intersection_test_with_frames(&CFrame::identity(), &shape, &touching, &shape, &options)
            .is_intersection()
    );
    let result =
        gjk::intersection_test_with_frames(&CFrame::identity(), &shape, &apart, &shape, &options);
    assert!(!result.is_intersection());
    assert_eq!(result.contact(), None);
}

#[test]
fn world_placement_far_from_origin() {
    let (vertices, triangles) = cube_mesh(Point::origin(), 1.0);
    let shape = Shape::new(&vertices, &triangles).unwrap();
    let rotation = Rotation::from_euler_angles(0.1, 0.2, 0.3);

    for base in [0.0, 1.0e6, -4.0e8] {
        let frame = GlobalCFrame::new(Position::from_reals(base, base, -base), rotation);
        let near = GlobalCFrame::new(Position::from_reals(base + 0.5, base, -base), rotation);
        let far = GlobalCFrame::new(Position::from_reals(base + 5.0, base, -base), rotation);

        let contact = shape
            .intersects_at(&frame, &shape, &near)
            .expect("the cubes overlap");
        let local = frame.global_to_local(&contact);
        assert!(local.coords.norm() < 2.0);

        assert_eq!(shape.intersects_at(&frame, &shape, &far), None);
    }
}
