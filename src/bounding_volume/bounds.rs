//! World-space axis-aligned bounds with fixed-point corners.

use crate::bounding_volume::{BoundingBox, BoundingVolume};
use crate::math::{Fix, GlobalCFrame, Position, Real, Vector};
use num::Bounded;

/// An axis-aligned box in world space, with [`Position`] corners.
///
/// These are the bounding volumes stored by the
/// [`BoundsTree`](crate::partitioning::BoundsTree). Extents and areas are computed from
/// corner differences so they stay accurate far away from the origin.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Bounds {
    /// The corner with the smallest coordinates on each axis.
    pub min: Position,
    /// The corner with the largest coordinates on each axis.
    pub max: Position,
}

impl Bounds {
    /// Creates new bounds from their corners.
    #[inline]
    pub fn new(min: Position, max: Position) -> Self {
        Self { min, max }
    }

    /// Creates invalid bounds, with `min` set to a huge position and `max` to a hugely
    /// negative one.
    ///
    /// Merging anything into invalid bounds gives back that thing. The corners are kept a
    /// quarter of the representable range away from the limits so extents can still be
    /// computed without overflowing.
    #[inline]
    pub fn new_invalid() -> Self {
        let max = Fix::max_value() >> 2;
        let min = Fix::min_value() >> 2;
        Self::new(Position::new(max, max, max), Position::new(min, min, min))
    }

    /// Are `min` and `max` ordered on every axis?
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.partial_le(&self.max)
    }

    /// Bounds centered on `center`, extending `half_extents` on each side.
    #[inline]
    pub fn from_half_extents(center: Position, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The smallest bounds containing every position yielded by `positions`.
    pub fn from_positions<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut result = Self::new_invalid();
        for pos in positions {
            result.take_position(pos);
        }
        result
    }

    /// Places a local box in the world and computes the world bounds of the eight corners.
    pub fn from_local_box(frame: &GlobalCFrame, local: &BoundingBox) -> Self {
        let (mins, maxs) = (local.mins, local.maxs);
        Self::from_positions((0..8).map(|i| {
            let corner = na::Point3::new(
                if i & 1 == 0 { mins.x } else { maxs.x },
                if i & 2 == 0 { mins.y } else { maxs.y },
                if i & 4 == 0 { mins.z } else { maxs.z },
            );
            frame.local_to_global(&corner)
        }))
    }

    /// Enlarges these bounds so they also contain `pos`.
    #[inline]
    pub fn take_position(&mut self, pos: Position) {
        self.min = self.min.inf(&pos);
        self.max = self.max.sup(&pos);
    }

    /// The center of these bounds.
    #[inline]
    pub fn center(&self) -> Position {
        Position::center(&self.min, &self.max)
    }

    /// The extents of these bounds.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.max - self.min
    }

    /// The volume of these bounds.
    #[inline]
    pub fn volume(&self) -> Real {
        let e = self.extents();
        e.x * e.y * e.z
    }

    /// The total area of the six faces of these bounds.
    ///
    /// Unlike the volume, this is non-zero for flat bounds, which makes it the better
    /// metric for comparing tree nodes.
    #[inline]
    pub fn surface_area(&self) -> Real {
        let e = self.extents();
        2.0 * (e.x * e.y + e.y * e.z + e.z * e.x)
    }

    /// The surface area of the bounds resulting from the merge of `self` and `other`.
    #[inline]
    pub fn merged_surface_area(&self, other: &Self) -> Real {
        self.merged(other).surface_area()
    }

    /// Does these bounds contain `pos`?
    #[inline]
    pub fn contains_position(&self, pos: &Position) -> bool {
        self.min.partial_le(pos) && self.max.partial_ge(pos)
    }
}

impl BoundingVolume for Bounds {
    #[inline]
    fn intersects(&self, other: &Bounds) -> bool {
        self.min.partial_le(&other.max) && self.max.partial_ge(&other.min)
    }

    #[inline]
    fn contains(&self, other: &Bounds) -> bool {
        self.min.partial_le(&other.min) && self.max.partial_ge(&other.max)
    }

    #[inline]
    fn merge(&mut self, other: &Bounds) {
        self.min = self.min.inf(&other.min);
        self.max = self.max.sup(&other.max);
    }

    #[inline]
    fn merged(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        *self = self.loosened(amount);
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Bounds {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Bounds {
            min: self.min - Vector::repeat(amount),
            max: self.max + Vector::repeat(amount),
        }
    }
}
