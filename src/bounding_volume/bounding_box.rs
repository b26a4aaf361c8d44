//! Axis Aligned Bounding Box in local coordinates.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real, Vector};

/// An axis-aligned bounding box expressed with floating-point coordinates.
///
/// This is what [`Shape::bounds`](crate::shape::Shape::bounds) returns: a box in the local
/// space of the shape's vertices. World-space boxes used by the bounds tree are
/// [`Bounds`](crate::bounding_volume::Bounds).
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    /// The point with the smallest coordinates on each axis.
    pub mins: Point<Real>,
    /// The point with the largest coordinates on each axis.
    pub maxs: Point<Real>,
}

impl BoundingBox {
    /// Creates a new box.
    ///
    /// Each component of `mins` must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Self {
        Self { mins, maxs }
    }

    /// Creates an invalid box with `mins` components set to `Real::MAX` and `maxs` components
    /// set to `-Real::MAX`.
    ///
    /// This is often used as the initial value of some box merging algorithms.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Point::new(Real::MAX, Real::MAX, Real::MAX),
            Point::new(-Real::MAX, -Real::MAX, -Real::MAX),
        )
    }

    /// The smallest box containing all the given points.
    pub fn from_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut result = Self::new_invalid();
        for pt in pts {
            result.take_point(*pt);
        }
        result
    }

    /// Enlarges this box so it also contains the point `pt`.
    #[inline]
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.inf(&pt);
        self.maxs = self.maxs.sup(&pt);
    }

    /// The center of this box.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this box.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The extents of this box.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The volume of this box.
    #[inline]
    pub fn volume(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y * extents.z
    }

    /// The total area of the six faces of this box.
    #[inline]
    pub fn surface_area(&self) -> Real {
        let e = self.extents();
        2.0 * (e.x * e.y + e.y * e.z + e.z * e.x)
    }

    /// Does this box contain the given point?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        na::partial_le(&self.mins, point) && na::partial_ge(&self.maxs, point)
    }
}

impl BoundingVolume for BoundingBox {
    #[inline]
    fn intersects(&self, other: &BoundingBox) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    #[inline]
    fn contains(&self, other: &BoundingBox) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    #[inline]
    fn merge(&mut self, other: &BoundingBox) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    #[inline]
    fn merged(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.mins += Vector::repeat(-amount);
        self.maxs += Vector::repeat(amount);
    }

    #[inline]
    fn loosened(&self, amount: Real) -> BoundingBox {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        BoundingBox {
            mins: self.mins + Vector::repeat(-amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }
}
