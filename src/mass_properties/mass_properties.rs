use crate::math::{CFrame, Matrix, Point, Real, Rotation, Vector};

const EPSILON: Real = f32::EPSILON as Real;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// The local mass properties of a rigid-body.
pub struct MassProperties {
    /// The center of mass of a rigid-body expressed in its local-space.
    pub local_com: Point<Real>,
    /// The inverse of the mass of a rigid-body.
    ///
    /// If this is zero, the rigid-body is assumed to have infinite mass.
    pub inv_mass: Real,
    /// The inverse of the square root of the principal angular inertia of the rigid-body.
    ///
    /// Components set to zero are assumed to be infinite along the corresponding principal axis.
    pub inv_principal_inertia_sqrt: Vector<Real>,
    /// The principal vectors of the local angular inertia tensor of the rigid-body.
    pub principal_inertia_local_frame: Rotation<Real>,
}

impl MassProperties {
    /// Initializes the mass properties from the given center-of-mass, mass, and principal angular inertia.
    ///
    /// The principal angular inertia are the angular inertia along the coordinate axes defined by
    /// the `principal_inertia_local_frame` expressed in the local-space of the rigid-body.
    pub fn with_principal_inertia_frame(
        local_com: Point<Real>,
        mass: Real,
        principal_inertia: Vector<Real>,
        principal_inertia_local_frame: Rotation<Real>,
    ) -> Self {
        let inv_mass = inv(mass);
        let inv_principal_inertia_sqrt = principal_inertia.map(|e| inv(e.sqrt()));
        Self {
            local_com,
            inv_mass,
            inv_principal_inertia_sqrt,
            principal_inertia_local_frame,
        }
    }

    /// Initialize a new `MassProperties` from a given center-of-mass, mass, and angular inertia matrix.
    ///
    /// The angular inertia matrix will be diagonalized in order to extract the principal inertia
    /// values and principal inertia frame.
    pub fn with_inertia_matrix(local_com: Point<Real>, mass: Real, inertia: Matrix<Real>) -> Self {
        let eigen = inertia.symmetric_eigen();
        let principal_inertia_local_frame =
            CFrame::from_basis(Vector::zeros(), eigen.eigenvectors).rotation;
        // Drop negative eigenvalues.
        let principal_inertia = eigen.eigenvalues.map(|e| if e < EPSILON { 0.0 } else { e });

        Self::with_principal_inertia_frame(
            local_com,
            mass,
            principal_inertia,
            principal_inertia_local_frame,
        )
    }

    /// The mass of the rigid-body.
    ///
    /// Zero stands for an infinite mass.
    #[inline]
    pub fn mass(&self) -> Real {
        inv(self.inv_mass)
    }

    /// The principal angular inertia values, along the axes of
    /// [`Self::principal_inertia_local_frame`].
    pub fn principal_inertia(&self) -> Vector<Real> {
        self.inv_principal_inertia_sqrt.map(|e| inv(e * e))
    }

    /// The frame centered on the center of mass with the principal axes of inertia.
    pub fn principal_frame(&self) -> CFrame {
        CFrame::new(self.local_com.coords, self.principal_inertia_local_frame)
    }
}

#[inline]
fn inv(val: Real) -> Real {
    if val == 0.0 {
        0.0
    } else {
        1.0 / val
    }
}
