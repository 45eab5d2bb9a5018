use arrayvec::ArrayVec;

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use crate::utils;

/// The maximum number of points a [`ConvexPointCloud`] can hold.
pub const MAX_CLOUD_POINTS: usize = 32;

/// The convex hull of a small set of points, represented only by its support mapping.
///
/// The hull is never computed explicitly: the support point toward a direction is
/// the input point with the largest dot product with that direction. Degenerate
/// clouds (a single point, collinear or coplanar points) are accepted.
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexPointCloud {
    points: ArrayVec<Point<Real>, MAX_CLOUD_POINTS>,
}

impl ConvexPointCloud {
    /// Creates the convex hull of the given points.
    ///
    /// Returns `None` if `points` is empty or holds more than [`MAX_CLOUD_POINTS`] points.
    pub fn new(points: &[Point<Real>]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let points = ArrayVec::try_from(points).ok()?;
        Some(Self { points })
    }

    /// The points whose convex hull is this shape.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }
}

impl SupportMap for ConvexPointCloud {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, &self.points)
    }
}
