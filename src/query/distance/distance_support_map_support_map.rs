use crate::math::{Isometry, Real};
use crate::query::gjk::{self, GjkOptions, GjkResult, JohnsonSimplex};
use crate::shape::SupportMap;

use na;

/// Distance between support-mapped shapes.
pub fn distance_support_map_support_map<G1, G2>(pos12: &Isometry<Real>, g1: &G1, g2: &G2) -> Real
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    distance_support_map_support_map_with_params(
        pos12,
        g1,
        g2,
        &mut JohnsonSimplex::new(),
        &GjkOptions::default(),
    )
}

/// Distance between support-mapped shapes.
///
/// This allows a more fine grained control other the underlying GJK algorithm.
pub fn distance_support_map_support_map_with_params<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    simplex: &mut JohnsonSimplex,
    options: &GjkOptions,
) -> Real
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    match gjk::closest_points(pos12, g1, g2, Real::MAX, true, simplex, options) {
        GjkResult::Intersection => 0.0,
        GjkResult::ClosestPoints(p1, p2, _) => na::distance(&p1, &p2),
        GjkResult::Proximity(_) | GjkResult::NoIntersection(_) => unreachable!(),
    }
}
