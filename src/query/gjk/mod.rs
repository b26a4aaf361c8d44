//! The GJK algorithm for intersection tests.

pub use self::cso_point::CSOPoint;
pub use self::gjk::{
    intersection_test, intersection_test_local, intersection_test_with_frames, GjkOptions,
    GjkResult, DEFAULT_MAX_ITERATIONS,
};
pub use self::simplex::{Simplex, MAX_SIMPLEX_LEN};

mod cso_point;
mod gjk;
mod gjk_shape;
mod simplex;
