use crate::math::{Real, Vector};
use na::SVector;

/// Component-wise helpers missing from `nalgebra`'s fixed-size vectors.
pub trait VectorExt: Sized {
    /// Each component squared.
    fn squared(&self) -> Self;

    /// Each component cubed.
    fn cubed(&self) -> Self;

    /// The projection of `self` on the line directed by `other`.
    ///
    /// Returns zero if `other` is zero.
    fn projected_onto(&self, other: &Self) -> Self;

    /// The component of `self` orthogonal to `other`.
    fn rejected_from(&self, other: &Self) -> Self;
}

impl<const D: usize> VectorExt for SVector<Real, D> {
    #[inline]
    fn squared(&self) -> Self {
        self.component_mul(self)
    }

    #[inline]
    fn cubed(&self) -> Self {
        self.map(|e| e * e * e)
    }

    #[inline]
    fn projected_onto(&self, other: &Self) -> Self {
        let len2 = other.norm_squared();
        if len2 == 0.0 {
            Self::zeros()
        } else {
            other * (self.dot(other) / len2)
        }
    }

    #[inline]
    fn rejected_from(&self, other: &Self) -> Self {
        self - self.projected_onto(other)
    }
}

/// Computes `(a × b) × c`.
///
/// With `a == c` this gives the component of `b` orthogonal to `a`, scaled by `|a|²`.
#[inline]
pub fn triple_cross(a: &Vector<Real>, b: &Vector<Real>, c: &Vector<Real>) -> Vector<Real> {
    a.cross(b).cross(c)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{Vec2, Vec4};

    #[test]
    fn component_powers() {
        let v = Vector::new(1.0, -2.0, 3.0);
        assert_eq!(v.squared(), Vector::new(1.0, 4.0, 9.0));
        assert_eq!(v.cubed(), Vector::new(1.0, -8.0, 27.0));
        assert_eq!(Vec4::new(1.0, 2.0, 3.0, 4.0).squared().w, 16.0);
    }

    #[test]
    fn projection_and_rejection() {
        let v = Vec2::new(3.0, 4.0);
        let axis = Vec2::new(2.0, 0.0);
        assert_relative_eq!(v.projected_onto(&axis), Vec2::new(3.0, 0.0));
        assert_relative_eq!(v.rejected_from(&axis), Vec2::new(0.0, 4.0));
        assert_eq!(v.projected_onto(&Vec2::zeros()), Vec2::zeros());
    }

    #[test]
    fn triple_cross_points_toward_b() {
        let ab = Vector::new(1.0, 0.0, 0.0);
        let ao = Vector::new(0.5, 1.0, 0.0);
        let dir = triple_cross(&ab, &ao, &ab);
        assert_relative_eq!(dir, ao.rejected_from(&ab));
    }
}
