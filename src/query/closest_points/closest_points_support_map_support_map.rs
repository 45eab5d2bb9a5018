use crate::math::{Isometry, Real};
use crate::query::gjk::{self, GjkOptions, GjkResult, JohnsonSimplex};
use crate::query::ClosestPoints;
use crate::shape::SupportMap;

/// Closest points between support-mapped shapes (`Cuboid`, `Ball`, etc.)
///
/// The first point is in the local-space of `g1`, the second in the local-space of `g2`.
pub fn closest_points_support_map_support_map<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    max_dist: Real,
) -> ClosestPoints
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    match closest_points_support_map_support_map_with_params(
        pos12,
        g1,
        g2,
        max_dist,
        &mut JohnsonSimplex::new(),
        &GjkOptions::default(),
    ) {
        GjkResult::ClosestPoints(pt1, pt2, _) => {
            ClosestPoints::WithinMargin(pt1, pos12.inverse_transform_point(&pt2))
        }
        GjkResult::NoIntersection(_) => ClosestPoints::Disjoint,
        GjkResult::Intersection => ClosestPoints::Intersecting,
        GjkResult::Proximity(_) => unreachable!(),
    }
}

/// Closest points between support-mapped shapes (`Cuboid`, `Ball`, etc.)
///
/// This allows a more fine grained control other the underlying GJK algorithm.
pub fn closest_points_support_map_support_map_with_params<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    max_dist: Real,
    simplex: &mut JohnsonSimplex,
    options: &GjkOptions,
) -> GjkResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    gjk::closest_points(pos12, g1, g2, max_dist, true, simplex, options)
}
