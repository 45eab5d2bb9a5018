use crate::math::{Isometry, Point, Real};
use crate::query::details::closest_points_support_map_support_map;
use crate::shape::SupportMap;

use core::mem;

/// Closest points information.
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClosestPoints {
    /// The two objects are intersecting.
    Intersecting,
    /// The two objects are non-intersecting but closer than a given user-defined distance.
    WithinMargin(Point<Real>, Point<Real>),
    /// The two objects are non-intersecting and further than a given user-defined distance.
    Disjoint,
}

impl ClosestPoints {
    /// Swaps the two points.
    pub fn flip(&mut self) {
        if let ClosestPoints::WithinMargin(ref mut p1, ref mut p2) = *self {
            mem::swap(p1, p2)
        }
    }

    /// Returns the result of swapping the two points if `self` is `WithinMargin`.
    #[must_use]
    pub fn flipped(&self) -> Self {
        if let ClosestPoints::WithinMargin(p1, p2) = *self {
            ClosestPoints::WithinMargin(p2, p1)
        } else {
            *self
        }
    }

    /// Transform the points in `self` by `pos1` and `pos2` respectively.
    #[must_use]
    pub fn transform_by(self, pos1: &Isometry<Real>, pos2: &Isometry<Real>) -> Self {
        if let ClosestPoints::WithinMargin(p1, p2) = self {
            ClosestPoints::WithinMargin(pos1 * p1, pos2 * p2)
        } else {
            self
        }
    }
}

/// Computes the pair of closest points between two convex shapes.
///
/// Returns `ClosestPoints::Disjoint` if the shapes are further apart than `max_dist`.
/// The returned points are expressed in world-space.
pub fn closest_points<G1, G2>(
    pos1: &Isometry<Real>,
    g1: &G1,
    pos2: &Isometry<Real>,
    g2: &G2,
    max_dist: Real,
) -> ClosestPoints
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let pos12 = pos1.inv_mul(pos2);
    closest_points_support_map_support_map(&pos12, g1, g2, max_dist).transform_by(pos1, pos2)
}
