use crate::math::{CFrame, Point, Real, Vector};
use crate::shape::{Shape, ShapeError};
use core::ops::Deref;

/// A shape whose center of mass lies at the origin of its local space.
///
/// Built by [`Shape::centered`], which writes the translated vertices to a caller-provided
/// buffer.
#[derive(Clone, Debug)]
pub struct CenteredShape<'a>(Shape<'a>);

/// A centered shape whose local axes are the principal axes of inertia.
///
/// Built by [`Shape::normalized`] or [`CenteredShape::normalized`]. Its inertia tensor about
/// the origin is diagonal.
#[derive(Clone, Debug)]
pub struct NormalizedShape<'a>(CenteredShape<'a>);

impl<'a> Shape<'a> {
    /// This shape translated so its center of mass lies at the origin.
    ///
    /// The vertices are written to `buf`. Also returns the offset to add to the vertices of
    /// the centered shape to get back the vertices of `self`, i.e., the center of mass of
    /// `self`.
    pub fn centered<'b>(
        &self,
        buf: &'b mut [Point<Real>],
    ) -> Result<(CenteredShape<'b>, Vector<Real>), ShapeError>
    where
        'a: 'b,
    {
        let back_offset = self.center_of_mass()?.coords;
        let shape = self.translated(&-back_offset, buf)?;
        Ok((CenteredShape(shape), back_offset))
    }

    /// This shape centered and rotated so its local axes are its principal axes of inertia.
    ///
    /// The vertices are written to `buf`. Also returns the frame mapping the vertices of the
    /// normalized shape back to the vertices of `self` with [`CFrame::local_to_global`].
    pub fn normalized<'b>(
        &self,
        buf: &'b mut [Point<Real>],
    ) -> Result<(NormalizedShape<'b>, CFrame), ShapeError>
    where
        'a: 'b,
    {
        let back_transformation = self.inertial_eigen_vectors()?;
        let shape = self.global_to_local(&back_transformation, buf)?;
        Ok((NormalizedShape(CenteredShape(shape)), back_transformation))
    }
}

impl<'a> CenteredShape<'a> {
    /// Is the center of mass of this shape at the origin, up to `tolerance` on each axis?
    ///
    /// Returns `false` for degenerate shapes.
    pub fn is_centered(&self, tolerance: Real) -> bool {
        self.center_of_mass().is_ok_and(|com| {
            relative_eq!(com.coords, Vector::zeros(), epsilon = tolerance)
        })
    }

    /// This shape rotated so its local axes are its principal axes of inertia.
    ///
    /// See [`Shape::normalized`].
    pub fn normalized<'b>(
        &self,
        buf: &'b mut [Point<Real>],
    ) -> Result<(NormalizedShape<'b>, CFrame), ShapeError>
    where
        'a: 'b,
    {
        self.0.normalized(buf)
    }

    /// The underlying shape.
    #[inline]
    pub fn into_inner(self) -> Shape<'a> {
        self.0
    }
}

impl<'a> NormalizedShape<'a> {
    /// Is this shape centered with a diagonal inertia tensor, up to `tolerance`?
    ///
    /// The off-diagonal elements are compared relatively to the largest diagonal element.
    pub fn is_normalized(&self, tolerance: Real) -> bool {
        if !self.0.is_centered(tolerance) {
            return false;
        }

        let inertia = self.inertia();
        let scale = inertia.diagonal().amax();

        (0..3).all(|i| {
            (0..3).all(|j| i == j || inertia[(i, j)].abs() <= tolerance * scale)
        })
    }

    /// The underlying centered shape.
    #[inline]
    pub fn into_centered(self) -> CenteredShape<'a> {
        self.0
    }
}

impl<'a> Deref for CenteredShape<'a> {
    type Target = Shape<'a>;

    #[inline]
    fn deref(&self) -> &Shape<'a> {
        &self.0
    }
}

impl<'a> Deref for NormalizedShape<'a> {
    type Target = CenteredShape<'a>;

    #[inline]
    fn deref(&self) -> &CenteredShape<'a> {
        &self.0
    }
}
