use crate::math::{Isometry, Matrix, Point, Position, Real, Rotation, Vector};
use na::Translation3;

/// A coordinate frame: a position and an orthonormal rotation.
///
/// Maps points between a local space (e.g. the space a shape's vertices are expressed in) and
/// the space the frame itself is expressed in, called "global" here.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CFrame {
    /// The origin of the local space, in global coordinates.
    pub position: Vector<Real>,
    /// The local axes, in global coordinates.
    pub rotation: Rotation<Real>,
}

impl Default for CFrame {
    fn default() -> Self {
        Self::identity()
    }
}

impl CFrame {
    /// Builds a frame from its position and rotation.
    #[inline]
    pub fn new(position: Vector<Real>, rotation: Rotation<Real>) -> Self {
        Self { position, rotation }
    }

    /// The identity frame.
    #[inline]
    pub fn identity() -> Self {
        Self::new(Vector::zeros(), Rotation::identity())
    }

    /// A pure translation.
    #[inline]
    pub fn from_position(position: Vector<Real>) -> Self {
        Self::new(position, Rotation::identity())
    }

    /// A pure rotation.
    #[inline]
    pub fn from_rotation(rotation: Rotation<Real>) -> Self {
        Self::new(Vector::zeros(), rotation)
    }

    /// Builds a frame whose local axes are the columns of `basis`.
    ///
    /// `basis` must be orthonormal. If it is a reflection (negative determinant), its last
    /// column is negated so the frame is a proper rotation and preserves triangle windings.
    pub fn from_basis(position: Vector<Real>, mut basis: Matrix<Real>) -> Self {
        if basis.determinant() < 0.0 {
            basis.column_mut(2).neg_mut();
        }

        Self::new(position, Rotation::from_matrix_unchecked(basis))
    }

    /// Maps a local point to global space.
    #[inline]
    pub fn local_to_global(&self, point: &Point<Real>) -> Point<Real> {
        self.rotation * point + self.position
    }

    /// Maps a global point to local space.
    #[inline]
    pub fn global_to_local(&self, point: &Point<Real>) -> Point<Real> {
        self.rotation.inverse_transform_point(&(point - self.position))
    }

    /// Rotates a local vector into global orientation, without translating it.
    #[inline]
    pub fn local_to_relative(&self, vector: &Vector<Real>) -> Vector<Real> {
        self.rotation * vector
    }

    /// Rotates a global vector into local orientation, without translating it.
    #[inline]
    pub fn relative_to_local(&self, vector: &Vector<Real>) -> Vector<Real> {
        self.rotation.inverse_transform_vector(vector)
    }

    /// Composes two frames: `frame` is expressed in the local space of `self` and the
    /// result is expressed in the global space of `self`.
    #[inline]
    pub fn local_to_global_frame(&self, frame: &CFrame) -> CFrame {
        CFrame::new(
            self.local_to_global(&frame.position.into()).coords,
            self.rotation * frame.rotation,
        )
    }

    /// The inverse of [`Self::local_to_global_frame`]: expresses a global `frame` in the
    /// local space of `self`.
    #[inline]
    pub fn global_to_local_frame(&self, frame: &CFrame) -> CFrame {
        CFrame::new(
            self.global_to_local(&frame.position.into()).coords,
            self.rotation.inverse() * frame.rotation,
        )
    }

    /// The frame mapping global points back to local points.
    #[inline]
    pub fn inverse(&self) -> CFrame {
        let rotation = self.rotation.inverse();
        CFrame::new(-(rotation * self.position), rotation)
    }

    /// Converts `self` to an `nalgebra` isometry.
    #[inline]
    pub fn to_isometry(&self) -> Isometry<Real> {
        Isometry::from_parts(
            Translation3::from(self.position),
            na::UnitQuaternion::from_rotation_matrix(&self.rotation),
        )
    }
}

impl From<Isometry<Real>> for CFrame {
    fn from(iso: Isometry<Real>) -> Self {
        CFrame::new(iso.translation.vector, iso.rotation.to_rotation_matrix())
    }
}

impl From<CFrame> for Isometry<Real> {
    fn from(frame: CFrame) -> Self {
        frame.to_isometry()
    }
}

/// A coordinate frame placed in the world with a fixed-point [`Position`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GlobalCFrame {
    /// The origin of the local space, in world coordinates.
    pub position: Position,
    /// The local axes, in world coordinates.
    pub rotation: Rotation<Real>,
}

impl Default for GlobalCFrame {
    fn default() -> Self {
        Self::new(Position::origin(), Rotation::identity())
    }
}

impl GlobalCFrame {
    /// Builds a world frame from its position and rotation.
    #[inline]
    pub fn new(position: Position, rotation: Rotation<Real>) -> Self {
        Self { position, rotation }
    }

    /// A world frame without rotation.
    #[inline]
    pub fn from_position(position: Position) -> Self {
        Self::new(position, Rotation::identity())
    }

    /// Maps a local point to a world position.
    #[inline]
    pub fn local_to_global(&self, point: &Point<Real>) -> Position {
        self.position + self.rotation * point.coords
    }

    /// Maps a world position to a local point.
    #[inline]
    pub fn global_to_local(&self, position: &Position) -> Point<Real> {
        self.rotation
            .inverse_transform_vector(&(*position - self.position))
            .into()
    }

    /// Expresses `other` in the local space of `self`.
    ///
    /// Only the relative offset between both positions goes through floating point, so the
    /// result is accurate even when both frames lie far away from the world origin.
    #[inline]
    pub fn relative_to(&self, other: &GlobalCFrame) -> CFrame {
        CFrame::new(
            self.rotation
                .inverse_transform_vector(&(other.position - self.position)),
            self.rotation.inverse() * other.rotation,
        )
    }
}
