use crate::math::Real;
use core::fmt;
use core::ops::{Add, AddAssign, Neg, Shr, Sub, SubAssign};
use num::{Bounded, Zero};

/// A signed fixed-point number with [`Fix::FRACTIONAL_BITS`] fractional bits.
///
/// Used for world coordinates: the absolute precision stays the same (about `2.3e-10`) no
/// matter how far from the origin a value lies. The representable range is roughly
/// `±2.1e9`. Additions, subtractions and negations saturate at the bounds of that range
/// instead of overflowing.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Fix(i64);

impl Fix {
    /// The number of fractional bits.
    pub const FRACTIONAL_BITS: u32 = 32;

    const ONE: i64 = 1 << Self::FRACTIONAL_BITS;

    /// Builds a fixed-point number from its raw representation.
    #[inline]
    pub const fn from_bits(bits: i64) -> Self {
        Self(bits)
    }

    /// The raw representation of `self`.
    #[inline]
    pub const fn to_bits(self) -> i64 {
        self.0
    }

    /// Converts a floating-point value, rounding to the nearest representable value.
    ///
    /// Values outside of the representable range saturate.
    #[inline]
    pub fn from_real(value: Real) -> Self {
        Self((value * Self::ONE as Real).round() as i64)
    }

    /// Converts `self` to the closest floating-point value.
    #[inline]
    pub fn to_real(self) -> Real {
        self.0 as Real / Self::ONE as Real
    }
}

impl From<Real> for Fix {
    #[inline]
    fn from(value: Real) -> Self {
        Self::from_real(value)
    }
}

impl From<Fix> for Real {
    #[inline]
    fn from(value: Fix) -> Self {
        value.to_real()
    }
}

impl Add for Fix {
    type Output = Fix;

    #[inline]
    fn add(self, rhs: Fix) -> Fix {
        Fix(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Fix {
    type Output = Fix;

    #[inline]
    fn sub(self, rhs: Fix) -> Fix {
        Fix(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Fix {
    type Output = Fix;

    #[inline]
    fn neg(self) -> Fix {
        Fix(self.0.saturating_neg())
    }
}

impl AddAssign for Fix {
    #[inline]
    fn add_assign(&mut self, rhs: Fix) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl SubAssign for Fix {
    #[inline]
    fn sub_assign(&mut self, rhs: Fix) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

/// Arithmetic shift, i.e., division by a power of two rounding toward negative infinity.
impl Shr<u32> for Fix {
    type Output = Fix;

    #[inline]
    fn shr(self, rhs: u32) -> Fix {
        Fix(self.0 >> rhs)
    }
}

impl Zero for Fix {
    #[inline]
    fn zero() -> Self {
        Fix(0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Bounded for Fix {
    #[inline]
    fn min_value() -> Self {
        Fix(i64::MIN)
    }

    #[inline]
    fn max_value() -> Self {
        Fix(i64::MAX)
    }
}

impl fmt::Debug for Fix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fix({})", self.to_real())
    }
}

impl fmt::Display for Fix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_real(), f)
    }
}
