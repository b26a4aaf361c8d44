use crate::math::{Fix, Point, Real, Vector};
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// A world-space point stored with one fixed-point number per axis.
///
/// The difference of two positions is an ordinary floating-point [`Vector`], so geometry
/// can be computed relative to a nearby position without losing precision far away from the
/// origin.
///
/// Positions are intentionally not `PartialOrd`: the comparisons offered here
/// ([`Position::partial_le`] and friends) hold only if they hold on every axis, which isn't
/// an order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Position {
    /// The x coordinate.
    pub x: Fix,
    /// The y coordinate.
    pub y: Fix,
    /// The z coordinate.
    pub z: Fix,
}

impl Position {
    /// Builds a position from its fixed-point coordinates.
    #[inline]
    pub const fn new(x: Fix, y: Fix, z: Fix) -> Self {
        Self { x, y, z }
    }

    /// Builds a position from floating-point coordinates.
    #[inline]
    pub fn from_reals(x: Real, y: Real, z: Real) -> Self {
        Self::new(Fix::from_real(x), Fix::from_real(y), Fix::from_real(z))
    }

    /// The world origin.
    #[inline]
    pub fn origin() -> Self {
        Self::default()
    }

    /// Converts a floating-point point.
    ///
    /// This loses precision for large coordinates: prefer adding relative vectors to a
    /// known position.
    #[inline]
    pub fn from_point(point: &Point<Real>) -> Self {
        Self::from_reals(point.x, point.y, point.z)
    }

    /// Converts `self` to a floating-point point.
    ///
    /// This loses precision for large coordinates: prefer subtracting two positions.
    #[inline]
    pub fn to_point(&self) -> Point<Real> {
        Point::new(self.x.to_real(), self.y.to_real(), self.z.to_real())
    }

    /// The component-wise minimum of `self` and `other`.
    #[inline]
    pub fn inf(&self, other: &Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// The component-wise maximum of `self` and `other`.
    #[inline]
    pub fn sup(&self, other: &Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// The point halfway between `a` and `b`.
    #[inline]
    pub fn center(a: &Self, b: &Self) -> Self {
        Self::new(
            a.x + ((b.x - a.x) >> 1),
            a.y + ((b.y - a.y) >> 1),
            a.z + ((b.z - a.z) >> 1),
        )
    }

    /// Is every coordinate of `self` smaller than or equal to the one of `other`?
    #[inline]
    pub fn partial_le(&self, other: &Self) -> bool {
        self.x <= other.x && self.y <= other.y && self.z <= other.z
    }

    /// Is every coordinate of `self` strictly smaller than the one of `other`?
    #[inline]
    pub fn partial_lt(&self, other: &Self) -> bool {
        self.x < other.x && self.y < other.y && self.z < other.z
    }

    /// Is every coordinate of `self` greater than or equal to the one of `other`?
    #[inline]
    pub fn partial_ge(&self, other: &Self) -> bool {
        self.x >= other.x && self.y >= other.y && self.z >= other.z
    }

    /// Is every coordinate of `self` strictly greater than the one of `other`?
    #[inline]
    pub fn partial_gt(&self, other: &Self) -> bool {
        self.x > other.x && self.y > other.y && self.z > other.z
    }
}

impl Sub for Position {
    type Output = Vector<Real>;

    #[inline]
    fn sub(self, rhs: Position) -> Vector<Real> {
        Vector::new(
            (self.x - rhs.x).to_real(),
            (self.y - rhs.y).to_real(),
            (self.z - rhs.z).to_real(),
        )
    }
}

impl Add<Vector<Real>> for Position {
    type Output = Position;

    #[inline]
    fn add(self, rhs: Vector<Real>) -> Position {
        Position::new(
            self.x + Fix::from_real(rhs.x),
            self.y + Fix::from_real(rhs.y),
            self.z + Fix::from_real(rhs.z),
        )
    }
}

impl Sub<Vector<Real>> for Position {
    type Output = Position;

    #[inline]
    fn sub(self, rhs: Vector<Real>) -> Position {
        Position::new(
            self.x - Fix::from_real(rhs.x),
            self.y - Fix::from_real(rhs.y),
            self.z - Fix::from_real(rhs.z),
        )
    }
}

impl AddAssign<Vector<Real>> for Position {
    #[inline]
    fn add_assign(&mut self, rhs: Vector<Real>) {
        *self = *self + rhs;
    }
}

impl SubAssign<Vector<Real>> for Position {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector<Real>) {
        *self = *self - rhs;
    }
}
