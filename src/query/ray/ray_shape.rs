use crate::math::{Point, Real, Vector};
use crate::query::ray::{ray_triangle_intersection, RAY_EPSILON};
use crate::query::Ray;
use crate::shape::Shape;

impl Shape<'_> {
    /// The smallest distance along `ray` at which it enters or exits this shape.
    ///
    /// Hits closer than [`RAY_EPSILON`] to the ray origin are ignored, as well as triangles
    /// (almost) parallel to the ray. The distance is expressed in multiples of `ray.dir`.
    pub fn cast_ray(&self, ray: &Ray) -> Option<Real> {
        let mut best = None;

        for i in 0..self.triangles().len() {
            let [a, b, c] = self.triangle_vertices(i);

            if let Some(hit) = ray_triangle_intersection(ray, &a, &b, &c) {
                if hit.t > RAY_EPSILON && best.map_or(true, |t| hit.t < t) {
                    best = Some(hit.t);
                }
            }
        }

        best
    }

    /// Same as [`Shape::cast_ray`], returning `Real::INFINITY` if nothing is hit.
    pub fn intersection_distance(&self, origin: &Point<Real>, direction: &Vector<Real>) -> Real {
        self.cast_ray(&Ray::new(*origin, *direction))
            .unwrap_or(Real::INFINITY)
    }

    /// Does this shape contain `point`?
    ///
    /// A ray is cast from `point` toward `+X` and the point is inside if the closest surface
    /// crossing is an exit, i.e., if the crossed triangle faces `+X`. A point exactly on the
    /// surface hits it at distance zero. Points whose ray escapes without crossing anything
    /// are outside.
    pub fn contains_point(&self, point: &Point<Real>) -> bool {
        let ray = Ray::new(*point, Vector::x());
        let mut best_t = Real::INFINITY;
        let mut is_exiting = false;

        for i in 0..self.triangles().len() {
            let [a, b, c] = self.triangle_vertices(i);

            if let Some(hit) = ray_triangle_intersection(&ray, &a, &b, &c) {
                if hit.t >= 0.0 && hit.t < best_t {
                    best_t = hit.t;
                    is_exiting = self.triangle_normal(i).dot(&ray.dir) >= 0.0;
                }
            }
        }

        is_exiting
    }
}
