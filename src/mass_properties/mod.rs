//! Mass properties (volume, center-of-mass, inertia) of shapes.

pub use self::mass_properties::MassProperties;
pub use self::mass_properties_shape::{MassPropertiesError, DEGENERATE_VOLUME_EPSILON};

mod mass_properties;
mod mass_properties_shape;
