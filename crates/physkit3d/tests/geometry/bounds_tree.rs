use super::cube_mesh;
use physkit3d::bounding_volume::{BoundingVolume, Bounds};
use physkit3d::math::{GlobalCFrame, Point, Position, Real, Rotation, Vector};
use physkit3d::partitioning::{Boundable, BoundsTree};
use physkit3d::shape::{Shape, Triangle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::sync::Arc;

/// A rigid body: a shared mesh placed in the world.
struct Body {
    id: usize,
    vertices: Arc<Vec<Point<Real>>>,
    triangles: Arc<Vec<Triangle>>,
    frame: GlobalCFrame,
}

impl Body {
    fn shape(&self) -> Shape<'_> {
        Shape::new(&self.vertices, &self.triangles).unwrap()
    }
}

impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Boundable for Body {
    fn strict_bounds(&self) -> Bounds {
        self.shape().world_bounds(&self.frame)
    }
}

fn random_bodies(rng: &mut StdRng, count: usize) -> Vec<Arc<Body>> {
    let (vertices, triangles) = cube_mesh(Point::origin(), 1.0);
    let vertices = Arc::new(vertices);
    let triangles = Arc::new(triangles);

    (0..count)
        .map(|id| {
            let position = Position::from_reals(
                rng.gen_range(-20.0..20.0),
                rng.gen_range(-20.0..20.0),
                rng.gen_range(-20.0..20.0),
            );
            let rotation = Rotation::from_euler_angles(
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
            );

            Arc::new(Body {
                id,
                vertices: vertices.clone(),
                triangles: triangles.clone(),
                frame: GlobalCFrame::new(position, rotation),
            })
        })
        .collect()
}

#[test]
fn every_body_is_stored_once() {
    let mut rng = StdRng::seed_from_u64(21);
    let bodies = random_bodies(&mut rng, 300);
    let mut tree = BoundsTree::new();

    for body in &bodies {
        let _ = tree.add(body.clone(), rng.gen_bool(0.5));
    }

    tree.assert_well_formed();
    assert_eq!(tree.len(), bodies.len());
    assert_eq!(tree.leaves().count(), bodies.len());

    let ids: HashSet<_> = tree.bodies().map(|b| b.id).collect();
    assert_eq!(ids.len(), bodies.len());

    for body in &bodies {
        let leaf = tree.find_leaf_of(body).unwrap();
        assert_eq!(tree.body(leaf).unwrap().id, body.id);
    }
}

#[test]
fn recalculated_root_encloses_every_leaf() {
    let mut rng = StdRng::seed_from_u64(22);
    let bodies = random_bodies(&mut rng, 200);
    let mut tree = BoundsTree::new();

    for body in &bodies {
        let _ = tree.add(body.clone(), false);
    }

    for strict in [true, false] {
        tree.recalculate_bounds(strict);
        tree.assert_well_formed();

        let root = tree.root_bounds().unwrap();
        let mut union = Bounds::new_invalid();
        for (leaf, _) in tree.leaves() {
            union.merge(&tree[leaf].bounds);
        }

        assert!(root.contains(&union));
    }
}

#[test]
fn broad_phase_reports_every_touching_pair() {
    let mut rng = StdRng::seed_from_u64(23);
    let bodies = random_bodies(&mut rng, 250);
    let mut tree = BoundsTree::new();

    for body in &bodies {
        let _ = tree.add(body.clone(), true);
    }
    let _ = tree.improve_structure();

    let candidates: HashSet<(usize, usize)> = tree
        .candidate_pairs()
        .into_iter()
        .map(|(a, b)| {
            let (a, b) = (tree.body(a).unwrap().id, tree.body(b).unwrap().id);
            (a.min(b), a.max(b))
        })
        .collect();

    // Every pair of actually intersecting bodies must have been reported by the broad phase.
    for i in 0..bodies.len() {
        for j in i + 1..bodies.len() {
            let (b1, b2) = (&bodies[i], &bodies[j]);

            if b1
                .shape()
                .intersects_at(&b1.frame, &b2.shape(), &b2.frame)
                .is_some()
            {
                assert!(candidates.contains(&(i, j)), "missed the pair {:?}", (i, j));
            }
        }
    }
}

#[test]
fn bounds_queries_find_nearby_bodies() {
    let mut rng = StdRng::seed_from_u64(24);
    let bodies = random_bodies(&mut rng, 100);
    let mut tree = BoundsTree::new();

    for body in &bodies {
        let _ = tree.add(body.clone(), true);
    }

    let query = Bounds::from_half_extents(Position::origin(), Vector::repeat(5.0));

    for body in &bodies {
        let found = tree
            .intersecting(&query)
            .any(|(_, other)| Arc::ptr_eq(other, body));
        assert_eq!(found, body.strict_bounds().intersects(&query));
    }
}
