//! Traits for support mapping based shapes.

use crate::math::{CFrame, Point, Real, Vector};

/// Traits of shapes representable by a support mapping function.
///
/// For a non-convex shape, the support function is the one of its convex hull. This is all
/// the GJK algorithm needs.
pub trait SupportMap {
    /// Evaluates the support function of this shape.
    ///
    /// A support function is a function associating a vector to the shape point which maximizes
    /// their dot product.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Evaluates the support function of this shape placed in the frame `frame`.
    ///
    /// Both `dir` and the returned point are expressed in the global space of `frame`.
    fn support_point(&self, frame: &CFrame, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = frame.relative_to_local(dir);
        frame.local_to_global(&self.local_support_point(&local_dir))
    }
}
