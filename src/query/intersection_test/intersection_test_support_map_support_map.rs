use na::Unit;

use crate::math::{Isometry, Real, Vector};
use crate::query::gjk::{self, GjkOptions, GjkResult, JohnsonSimplex};
use crate::shape::SupportMap;

/// Intersection test between support-mapped shapes (`Cuboid`, `Ball`, etc.)
pub fn intersection_test_support_map_support_map<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
) -> bool
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    intersection_test_support_map_support_map_with_params(
        pos12,
        g1,
        g2,
        &mut JohnsonSimplex::new(),
        &GjkOptions::default(),
    )
    .0
}

/// Intersection test between support-mapped shapes (`Cuboid`, `Ball`, etc.)
///
/// This allows a more fine grained control other the underlying GJK algorithm.
/// Also returns a separating axis candidate, or the initial direction on intersection.
pub fn intersection_test_support_map_support_map_with_params<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    simplex: &mut JohnsonSimplex,
    options: &GjkOptions,
) -> (bool, Unit<Vector<Real>>)
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let dir = Unit::try_new(pos12.translation.vector, crate::math::DEFAULT_EPSILON)
        .unwrap_or_else(Vector::x_axis);

    match gjk::closest_points(pos12, g1, g2, 0.0, false, simplex, options) {
        GjkResult::Intersection => (true, dir),
        GjkResult::Proximity(dir) => (false, dir),
        GjkResult::NoIntersection(dir) => (false, dir),
        GjkResult::ClosestPoints(..) => unreachable!(),
    }
}
