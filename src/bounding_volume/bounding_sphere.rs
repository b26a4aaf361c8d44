//! Bounding sphere.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real, Vec4};

/// A Bounding Sphere.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The center of the sphere.
    pub center: Point<Real>,
    /// The radius of the sphere.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Packs the center and radius as `(x, y, z, radius)`, the layout expected by shaders.
    #[inline]
    pub fn to_vec4(&self) -> Vec4 {
        self.center.coords.push(self.radius)
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn intersects(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance_squared = delta_pos.norm_squared();
        let sum_radius = self.radius + other.radius;

        distance_squared <= sum_radius * sum_radius
    }

    #[inline]
    fn contains(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance = delta_pos.norm();

        distance + other.radius <= self.radius
    }

    #[inline]
    fn merge(&mut self, other: &BoundingSphere) {
        *self = self.merged(other);
    }

    #[inline]
    fn merged(&self, other: &BoundingSphere) -> BoundingSphere {
        let dir = other.center - self.center;
        let dist = dir.norm();

        if dist + other.radius <= self.radius {
            *self
        } else if dist + self.radius <= other.radius {
            *other
        } else {
            let radius = (dist + self.radius + other.radius) * 0.5;
            let center = self.center + dir * ((radius - self.radius) / dist);
            BoundingSphere::new(center, radius)
        }
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.radius += amount
    }

    #[inline]
    fn loosened(&self, amount: Real) -> BoundingSphere {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        BoundingSphere::new(self.center, self.radius + amount)
    }
}
