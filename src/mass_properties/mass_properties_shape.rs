use crate::mass_properties::MassProperties;
use crate::math::{CFrame, Matrix, Point, Real, Rotation, Vector, VectorExt};
use crate::shape::Shape;

/// Shapes with an absolute volume below this threshold are considered flat.
pub const DEGENERATE_VOLUME_EPSILON: Real = 1.0e-12;

/// Error raised when mass properties are undefined for a shape.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum MassPropertiesError {
    /// The shape encloses no volume, so its center of mass is undefined.
    #[error("the shape is degenerate: its volume {volume} is too close to zero.")]
    DegenerateShape {
        /// The signed volume computed for the shape.
        volume: Real,
    },
}

impl Shape<'_> {
    /// The volume enclosed by this shape.
    ///
    /// Sums the signed volumes of the tetrahedra formed by each triangle and the origin, so
    /// the result is only meaningful for a closed outward-oriented manifold. It is negative if
    /// all windings are reversed.
    pub fn volume(&self) -> Real {
        let mut total = 0.0;

        for tri in self.triangles() {
            let [v0, v1, v2] = self.points_of(tri.indices());
            let d1 = v1 - v0;
            let d2 = v2 - v0;
            let cross_z = d1.x * d2.y - d1.y * d2.x;

            total += cross_z * ((d1.z + d2.z) / 6.0 + v0.z / 2.0);
        }

        total
    }

    /// The center of mass of this shape, assuming a uniform density.
    ///
    /// Fails if the volume of the shape is too close to zero.
    pub fn center_of_mass(&self) -> Result<Point<Real>, MassPropertiesError> {
        let volume = self.volume();

        if volume.abs() <= DEGENERATE_VOLUME_EPSILON {
            log::debug!("Rejecting a degenerate shape with volume {}.", volume);
            return Err(MassPropertiesError::DegenerateShape { volume });
        }

        let mut total = Vector::zeros();

        for tri in self.triangles() {
            let [v0, v1, v2] = self.points_of(tri.indices()).map(|p| p.coords);
            let d_factor = (v1 - v0).cross(&(v2 - v0));
            let v_factor = v0.squared()
                + v1.squared()
                + v2.squared()
                + v0.component_mul(&v1)
                + v1.component_mul(&v2)
                + v2.component_mul(&v0);

            total += d_factor.component_mul(&v_factor);
        }

        Ok(Point::from(total / (24.0 * volume)))
    }

    /// The inertia tensor of this shape, for a unit density, about the origin of its local
    /// space and along its local axes.
    pub fn inertia(&self) -> Matrix<Real> {
        self.inertia_in_frame(&CFrame::identity())
    }

    /// The inertia tensor of this shape, for a unit density, about `reference` and along the
    /// local axes.
    pub fn inertia_about(&self, reference: &Point<Real>) -> Matrix<Real> {
        self.inertia_in_frame(&CFrame::from_position(reference.coords))
    }

    /// The inertia tensor of this shape, for a unit density, about the local origin and along
    /// the axes of `orientation`.
    pub fn inertia_in_orientation(&self, orientation: &Rotation<Real>) -> Matrix<Real> {
        self.inertia_in_frame(&CFrame::from_rotation(*orientation))
    }

    /// The inertia tensor of this shape, for a unit density, about the origin of `reference`
    /// and along its axes.
    ///
    /// The vertices are first mapped into the local space of `reference`. The result is
    /// symmetric.
    pub fn inertia_in_frame(&self, reference: &CFrame) -> Matrix<Real> {
        let mut total = Matrix::zeros();

        for tri in self.triangles() {
            let [v0, v1, v2] = self
                .points_of(tri.indices())
                .map(|p| reference.global_to_local(&p).coords);
            let d_factor = (v1 - v0).cross(&(v2 - v0));

            // ∫x², ∫y² and ∫z² over the volume, through the divergence theorem.
            let squared_integral = v0.cubed()
                + v1.cubed()
                + v2.cubed()
                + v0.squared().component_mul(&(v1 + v2))
                + v1.squared().component_mul(&(v0 + v2))
                + v2.squared().component_mul(&(v0 + v1))
                + v0.component_mul(&v1).component_mul(&v2);
            let diag = d_factor.component_mul(&squared_integral) / 60.0;

            total.m11 += diag.y + diag.z;
            total.m22 += diag.z + diag.x;
            total.m33 += diag.x + diag.y;

            // ∫xyz over the triangle: each product x_i y_j z_k is weighted by 6 if all three
            // indices are equal, by 2 if exactly two are, by 1 otherwise.
            let pts = [v0, v1, v2];
            let mut xyz_sum = 0.0;
            for (i, pi) in pts.iter().enumerate() {
                for (j, pj) in pts.iter().enumerate() {
                    for (k, pk) in pts.iter().enumerate() {
                        let weight = match (i == j, j == k, i == k) {
                            (true, true, _) => 6.0,
                            (false, false, false) => 1.0,
                            _ => 2.0,
                        };
                        xyz_sum += weight * pi.x * pj.y * pk.z;
                    }
                }
            }
            let xyz_integral = -xyz_sum / 120.0;

            total.m12 += d_factor.z * xyz_integral;
            total.m21 += d_factor.z * xyz_integral;
            total.m13 += d_factor.y * xyz_integral;
            total.m31 += d_factor.y * xyz_integral;
            total.m23 += d_factor.x * xyz_integral;
            total.m32 += d_factor.x * xyz_integral;
        }

        total
    }

    /// The frame centered on the center of mass whose axes are the principal axes of inertia
    /// of this shape.
    ///
    /// The axes form a proper rotation.
    pub fn inertial_eigen_vectors(&self) -> Result<CFrame, MassPropertiesError> {
        let com = self.center_of_mass()?;
        let inertia = self.inertia_about(&com);
        let eigen = inertia.symmetric_eigen();

        Ok(CFrame::from_basis(com.coords, eigen.eigenvectors))
    }

    fn points_of(&self, indices: [u32; 3]) -> [Point<Real>; 3] {
        let vertices = self.vertices();
        indices.map(|i| vertices[i as usize])
    }
}

impl MassProperties {
    /// Computes the mass properties of a shape with a uniform `density`.
    pub fn from_shape(shape: &Shape, density: Real) -> Result<Self, MassPropertiesError> {
        let com = shape.center_of_mass()?;
        let volume = shape.volume();
        let inertia = shape.inertia_about(&com) * density;

        Ok(Self::with_inertia_matrix(com, volume * density, inertia))
    }
}
