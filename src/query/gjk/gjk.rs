//! The Gilbert-Johnson-Keerthi distance algorithm.
//!
//! GJK operates on the Minkowski difference (or Configuration Space Obstacle, CSO)
//! of two convex shapes: the shapes overlap iff the CSO contains the origin, and
//! their distance is the distance between the origin and the CSO.
//!
//! The loop implemented here samples support points of the CSO toward the origin
//! and feeds them to a [`JohnsonSimplex`], which keeps track of the point of the
//! sampled hull closest to the origin. It stops when the simplex encloses the
//! origin, when the upper and lower distance bounds meet, when the simplex stops
//! making progress, or after [`GjkOptions::max_iterations`] iterations.

use na::{ComplexField, Unit};

use crate::math::{Isometry, Point, Real, Vector};
use crate::query::gjk::{ConstantOrigin, CsoPoint, JohnsonSimplex};
use crate::shape::SupportMap;

/// Results of the GJK algorithm.
///
/// All points and vectors are expressed in the local-space of the first shape.
#[derive(Clone, Debug, PartialEq)]
pub enum GjkResult {
    /// The shapes are intersecting (overlapping).
    ///
    /// GJK cannot compute the penetration depth.
    Intersection,

    /// The closest points on both shapes were found, as well as the unit direction from
    /// the first shape toward the second one.
    ///
    /// Returned only if `exact_dist` is `true`.
    ClosestPoints(Point<Real>, Point<Real>, Unit<Vector<Real>>),

    /// The shapes are separated, and the given unit vector is an approximate separating axis.
    ///
    /// Returned only if `exact_dist` is `false`.
    Proximity(Unit<Vector<Real>>),

    /// The shapes are further apart than the `max_dist` given to [`closest_points`].
    NoIntersection(Unit<Vector<Real>>),
}

/// The absolute tolerance used by the GJK algorithm.
///
/// This is 10 times the machine epsilon of [`Real`].
pub fn eps_tol() -> Real {
    crate::math::DEFAULT_EPSILON * 10.0
}

/// Tuning parameters of the GJK algorithm.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GjkOptions {
    /// The maximum number of support points sampled before giving up.
    ///
    /// When reached, the best result found so far is returned.
    pub max_iterations: usize,
    /// The absolute distance under which the origin is considered to be on the CSO.
    ///
    /// Its square root is used as the relative tolerance on the distance bounds.
    pub tolerance: Real,
}

impl Default for GjkOptions {
    fn default() -> Self {
        GjkOptions {
            max_iterations: 100,
            tolerance: eps_tol(),
        }
    }
}

/// Projects the origin onto the given shape positioned by `m`.
///
/// Returns the projected point in the local-space of the shape, or `None` if the origin is
/// inside of the shape.
///
/// ```
/// use nexgeom3d::math::{Isometry, Point};
/// use nexgeom3d::query::gjk::{project_origin, GjkOptions, JohnsonSimplex};
/// use nexgeom3d::shape::Ball;
///
/// let ball = Ball::new(1.0);
/// let position = Isometry::translation(5.0, 0.0, 0.0);
/// let mut simplex = JohnsonSimplex::new();
///
/// let proj = project_origin(&position, &ball, &mut simplex, &GjkOptions::default()).unwrap();
/// assert!((proj - Point::new(-1.0, 0.0, 0.0)).norm() < 1.0e-3);
/// ```
pub fn project_origin<G: ?Sized + SupportMap>(
    m: &Isometry<Real>,
    g: &G,
    simplex: &mut JohnsonSimplex,
    options: &GjkOptions,
) -> Option<Point<Real>> {
    match closest_points(
        &m.inverse(),
        g,
        &ConstantOrigin,
        Real::MAX,
        true,
        simplex,
        options,
    ) {
        GjkResult::Intersection => None,
        GjkResult::ClosestPoints(p, _, _) => Some(p),
        _ => unreachable!(),
    }
}

/// Computes the closest points between two convex shapes using the GJK algorithm.
///
/// # Parameters
///
/// - `pos12`: the position of `g2` relative to `g1`.
/// - `max_dist`: if the shapes are proven to be further apart than this, returns
///   [`GjkResult::NoIntersection`] early. Use `Real::MAX` to disable.
/// - `exact_dist`: if `false`, returns [`GjkResult::Proximity`] as soon as the shapes are
///   proven to be disjoint instead of refining their closest points.
/// - `simplex`: the simplex used for the computation. It is reset first.
pub fn closest_points<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    max_dist: Real,
    exact_dist: bool,
    simplex: &mut JohnsonSimplex,
    options: &GjkOptions,
) -> GjkResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let eps_tol = options.tolerance;
    let eps_rel: Real = ComplexField::sqrt(eps_tol);

    // The CSO is centered around `-pos12.translation`: its support point toward the
    // translation is a good first guess of the point closest to the origin.
    let init_dir = Unit::try_new(pos12.translation.vector, crate::math::DEFAULT_EPSILON)
        .unwrap_or_else(Vector::x_axis);

    simplex.reset();
    let _ = simplex.add_cso_point(CsoPoint::from_shapes_toward(pos12, g1, g2, &init_dir));

    let mut old_dir = init_dir;
    let mut max_bound = Real::MAX;

    for niter in 0..options.max_iterations {
        if simplex.full_simplex() {
            return GjkResult::Intersection;
        }

        let proj = simplex.closest_point();
        let old_max_bound = max_bound;

        let Some((dir, dist)) = Unit::try_new_and_get(-proj.coords, eps_tol) else {
            // The origin is on the simplex.
            return GjkResult::Intersection;
        };
        max_bound = dist;

        if max_bound >= old_max_bound {
            // Upper bounds inconsistencies.
            return separated(simplex, exact_dist, old_dir);
        }

        let cso_point = CsoPoint::from_shapes_toward(pos12, g1, g2, &dir);
        let min_bound = -dir.dot(&cso_point.point.coords);

        log::trace!(
            "GJK iteration {}: distance in [{}, {}], simplex of {} vertices.",
            niter,
            min_bound,
            max_bound,
            simplex.num_vertices()
        );

        if min_bound > max_dist {
            return GjkResult::NoIntersection(dir);
        } else if !exact_dist && min_bound > 0.0 && max_bound <= max_dist {
            return GjkResult::Proximity(dir);
        } else if max_bound - min_bound <= eps_rel * max_bound {
            // The distance found has a good enough precision.
            return separated(simplex, exact_dist, dir);
        }

        if !simplex.add_cso_point(cso_point) {
            return separated(simplex, exact_dist, dir);
        }

        old_dir = dir;
    }

    log::debug!(
        "GJK reached its iteration limit ({}) without converging.",
        options.max_iterations
    );

    if simplex.full_simplex() {
        GjkResult::Intersection
    } else {
        separated(simplex, exact_dist, old_dir)
    }
}

fn separated(simplex: &JohnsonSimplex, exact_dist: bool, dir: Unit<Vector<Real>>) -> GjkResult {
    if exact_dist {
        let (p1, p2) = result(simplex);
        GjkResult::ClosestPoints(p1, p2, dir)
    } else {
        GjkResult::Proximity(dir)
    }
}

// The witness points of the closest point of the simplex.
fn result(simplex: &JohnsonSimplex) -> (Point<Real>, Point<Real>) {
    let mut res = (Point::origin(), Point::origin());

    for (point, coord) in simplex.vertices() {
        res.0 += point.orig1.coords * coord;
        res.1 += point.orig2.coords * coord;
    }

    res
}
