use crate::math::{GlobalCFrame, Point, Position, Real};
use crate::query::gjk::{self, GjkOptions};
use crate::shape::Shape;

impl Shape<'_> {
    /// Tests this shape against `other`, both expressed in the same space.
    ///
    /// Returns an estimate of a contact point if they intersect. Pairs for which GJK doesn't
    /// converge are reported as not intersecting.
    pub fn intersects(&self, other: &Shape) -> Option<Point<Real>> {
        gjk::intersection_test(self, other, &GjkOptions::default()).contact()
    }

    /// Tests this shape placed in the world by `frame` against `other` placed by
    /// `other_frame`.
    ///
    /// The test runs in the local space of `self`, relative to `frame`, so it stays accurate
    /// far away from the world origin. Returns the world position of the estimated contact
    /// point if the shapes intersect.
    pub fn intersects_at(
        &self,
        frame: &GlobalCFrame,
        other: &Shape,
        other_frame: &GlobalCFrame,
    ) -> Option<Position> {
        let pos12 = frame.relative_to(other_frame);
        let contact =
            gjk::intersection_test_local(&pos12, self, other, &GjkOptions::default()).contact()?;
        Some(frame.local_to_global(&contact))
    }
}
