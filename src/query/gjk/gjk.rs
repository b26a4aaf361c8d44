//! The Gilbert-Johnson-Keerthi intersection test.
//!
//! GJK operates on the Minkowski difference (also called Configuration Space Obstacle, or
//! CSO) of two shapes: both shapes intersect if and only if the CSO contains the origin. The
//! algorithm grows a simplex of CSO support points toward the origin, keeping at each step
//! the feature of the simplex closest to the origin, until either a tetrahedron encloses the
//! origin or a support point fails to pass the origin.
//!
//! Only the support functions of the shapes are needed, so non-convex shapes are handled as
//! their convex hulls.

use crate::math::{triple_cross, CFrame, Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::gjk::{CSOPoint, Simplex};
use crate::shape::SupportMap;

/// The default maximum number of GJK iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 20;

/// Parameters of the GJK algorithm.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GjkOptions {
    /// The maximum number of support points computed after the initial one.
    ///
    /// Reaching it yields [`GjkResult::IterationLimitReached`].
    pub max_iterations: usize,
    /// The first search direction.
    pub initial_direction: Vector<Real>,
}

impl Default for GjkOptions {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            initial_direction: Vector::x(),
        }
    }
}

/// Results of the GJK algorithm.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GjkResult {
    /// The shapes intersect.
    Intersection {
        /// An estimate of a point in the intersection: the midpoint of the support points
        /// behind the simplex vertex closest to the origin.
        ///
        /// This is a heuristic, not an exact contact point.
        contact: Point<Real>,
    },
    /// The shapes are separated by a plane orthogonal to `direction`.
    Separated {
        /// A direction along which the second shape lies beyond the first one.
        direction: Vector<Real>,
    },
    /// The algorithm didn't converge within the allowed number of iterations.
    ///
    /// This happens mostly for touching or degenerate configurations and should be treated
    /// as no intersection.
    IterationLimitReached,
}

impl GjkResult {
    /// The estimated contact point, if the shapes intersect.
    #[inline]
    pub fn contact(&self) -> Option<Point<Real>> {
        match self {
            GjkResult::Intersection { contact } => Some(*contact),
            _ => None,
        }
    }

    /// Do the shapes intersect?
    #[inline]
    pub fn is_intersection(&self) -> bool {
        matches!(self, GjkResult::Intersection { .. })
    }
}

/// Tests two shapes expressed in the same space for intersection.
pub fn intersection_test<G1, G2>(g1: &G1, g2: &G2, options: &GjkOptions) -> GjkResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    intersection_test_local(&CFrame::identity(), g1, g2, options)
}

/// Tests two shapes placed by `frame1` and `frame2` for intersection.
///
/// The contact point and separating direction are expressed in the global space of both
/// frames.
pub fn intersection_test_with_frames<G1, G2>(
    frame1: &CFrame,
    g1: &G1,
    frame2: &CFrame,
    g2: &G2,
    options: &GjkOptions,
) -> GjkResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let pos12 = frame1.global_to_local_frame(frame2);
    let local_options = GjkOptions {
        initial_direction: frame1.relative_to_local(&options.initial_direction),
        ..*options
    };

    match intersection_test_local(&pos12, g1, g2, &local_options) {
        GjkResult::Intersection { contact } => GjkResult::Intersection {
            contact: frame1.local_to_global(&contact),
        },
        GjkResult::Separated { direction } => GjkResult::Separated {
            direction: frame1.local_to_relative(&direction),
        },
        GjkResult::IterationLimitReached => GjkResult::IterationLimitReached,
    }
}

/// Tests `g1` and `g2`, placed in the local space of `g1` by `pos12`, for intersection.
///
/// Everything is expressed in the local space of `g1`.
pub fn intersection_test_local<G1, G2>(
    pos12: &CFrame,
    g1: &G1,
    g2: &G2,
    options: &GjkOptions,
) -> GjkResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let first = CSOPoint::from_shapes(pos12, g1, g2, &options.initial_direction);
    let mut simplex = Simplex::new(first);
    let mut dir = -first.point.coords;

    for _ in 0..options.max_iterations {
        if is_degenerate_direction(&dir) {
            // The origin lies on the current simplex: the shapes touch.
            return intersection(&simplex);
        }

        let new_point = CSOPoint::from_shapes(pos12, g1, g2, &dir);

        if new_point.point.coords.dot(&dir) < 0.0 {
            // The whole CSO lies on the other side of the plane through the origin orthogonal
            // to `dir`.
            return GjkResult::Separated { direction: dir };
        }

        simplex.push(new_point);

        match next_direction(&mut simplex) {
            Some(new_dir) => dir = new_dir,
            None => return intersection(&simplex),
        }
    }

    log::debug!(
        "GJK reached its iteration limit ({}) without converging.",
        options.max_iterations
    );
    GjkResult::IterationLimitReached
}

fn is_degenerate_direction(dir: &Vector<Real>) -> bool {
    dir.norm_squared() <= DEFAULT_EPSILON * DEFAULT_EPSILON
}

fn intersection(simplex: &Simplex) -> GjkResult {
    match simplex.closest_to_origin() {
        Some(closest) => GjkResult::Intersection {
            contact: closest.midpoint(),
        },
        None => GjkResult::IterationLimitReached,
    }
}

/// Reduces `simplex` to its feature closest to the origin and returns the next search
/// direction, or `None` if the simplex encloses the origin.
fn next_direction(simplex: &mut Simplex) -> Option<Vector<Real>> {
    let ao = -simplex[0].point.coords;

    if simplex.len() == 4 {
        let ab = simplex[1] - simplex[0];
        let ac = simplex[2] - simplex[0];
        let ad = simplex[3] - simplex[0];

        if ac.cross(&ad).dot(&ao) > 0.0 {
            // Drop B: [A, C, D].
            simplex.remove(1);
        } else if ab.cross(&ac).dot(&ao) > 0.0 {
            // Drop D: [A, B, C].
            simplex.truncate(3);
        } else if ad.cross(&ab).dot(&ao) > 0.0 {
            // Drop C: [A, D, B].
            simplex.remove(2);
            simplex.swap(1, 2);
        } else {
            return None;
        }
    }

    match simplex.len() {
        3 => Some(triangle_direction(simplex, &ao)),
        2 => {
            let ba = simplex[0] - simplex[1];

            if ao.dot(&ba) > 0.0 {
                simplex.truncate(1);
                Some(ao)
            } else {
                Some(triple_cross(&ba, &ao, &ba))
            }
        }
        _ => Some(ao),
    }
}

fn triangle_direction(simplex: &mut Simplex, ao: &Vector<Real>) -> Vector<Real> {
    let ab = simplex[1] - simplex[0];
    let ac = simplex[2] - simplex[0];
    let normal = ab.cross(&ac);
    let n_ab = ab.cross(&normal);
    let n_ac = normal.cross(&ac);

    if ao.dot(&n_ab) > 0.0 {
        if ao.dot(&ab) > 0.0 {
            // Edge AB.
            simplex.truncate(2);
            triple_cross(&ab, ao, &ab)
        } else if ao.dot(&ac) > 0.0 {
            // Edge AC.
            simplex.remove(1);
            triple_cross(&ac, ao, &ac)
        } else {
            simplex.truncate(1);
            *ao
        }
    } else if ao.dot(&n_ac) > 0.0 {
        if ao.dot(&ac) > 0.0 {
            simplex.remove(1);
            triple_cross(&ac, ao, &ac)
        } else {
            simplex.truncate(1);
            *ao
        }
    } else if normal.dot(ao) > 0.0 {
        normal
    } else {
        // Flip the winding so the normal faces the origin.
        simplex.swap(1, 2);
        -normal
    }
}
