//! Linear algebra type aliases, fixed-point world positions and coordinate frames.

pub use self::cframe::{CFrame, GlobalCFrame};
pub use self::fix::Fix;
pub use self::position::Position;
pub use self::vector_ext::{triple_cross, VectorExt};

mod cframe;
mod fix;
mod position;
mod vector_ext;

/// The scalar type used throughout this crate.
pub type Real = f64;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The dimension of the space.
pub const DIM: usize = 3;

/// The point type.
pub type Point<N> = na::Point3<N>;

/// The vector type.
pub type Vector<N> = na::Vector3<N>;

/// The unit vector type.
pub type UnitVector<N> = na::UnitVector3<N>;

/// The 3x3 matrix type.
pub type Matrix<N> = na::Matrix3<N>;

/// The rotation type.
///
/// Stored as an orthonormal matrix so that a basis can be read back column by column.
pub type Rotation<N> = na::Rotation3<N>;

/// The rigid transformation type.
pub type Isometry<N> = na::Isometry3<N>;

/// A 2-component vector.
pub type Vec2 = na::Vector2<Real>;

/// A 3-component vector.
pub type Vec3 = na::Vector3<Real>;

/// A 4-component vector.
pub type Vec4 = na::Vector4<Real>;
