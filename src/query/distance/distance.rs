use crate::math::{Isometry, Real};
use crate::query::details::distance_support_map_support_map;
use crate::shape::SupportMap;

/// Computes the minimum distance separating two convex shapes.
///
/// Returns `0.0` if the objects are touching or penetrating.
///
/// ```
/// use nexgeom3d::math::{Isometry, Vector};
/// use nexgeom3d::query;
/// use nexgeom3d::shape::{Ball, Cuboid};
///
/// let ball = Ball::new(0.5);
/// let cuboid = Cuboid::new(Vector::new(1.0, 1.0, 1.0));
/// let pos1 = Isometry::translation(0.0, 3.0, 0.0);
/// let pos2 = Isometry::identity();
///
/// let dist = query::distance(&pos1, &ball, &pos2, &cuboid);
/// assert!((dist - 1.5).abs() < 2.0e-3);
/// ```
pub fn distance<G1, G2>(pos1: &Isometry<Real>, g1: &G1, pos2: &Isometry<Real>, g2: &G2) -> Real
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let pos12 = pos1.inv_mul(pos2);
    distance_support_map_support_map(&pos12, g1, g2)
}
