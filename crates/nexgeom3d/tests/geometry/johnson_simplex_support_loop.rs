use na::{Isometry3, Vector3};
use nexgeom3d::math::Real;
use nexgeom3d::query::gjk::{self, CsoPoint, JohnsonSimplex};
use nexgeom3d::shape::{Ball, Cuboid, SupportMap};

// A direction normal to the segment or triangle currently held by `simplex`.
fn feature_normal(simplex: &JohnsonSimplex) -> Vector3<Real> {
    let pts: Vec<_> = simplex.vertices().map(|(pt, _)| pt.point).collect();

    match pts.len() {
        2 => {
            let mut normal = Vector3::x();
            Vector3::orthonormal_subspace_basis(&[pts[1] - pts[0]], |dir| {
                normal = *dir;
                false
            });
            normal
        }
        3 => (pts[1] - pts[0]).cross(&(pts[2] - pts[0])),
        _ => Vector3::x(),
    }
}

// Feeds the simplex with support points of the CSO of `g1` and `g2` until it encloses
// the origin or stops improving. Returns the number of support points fed.
//
// When the origin lies on the current feature, the next direction is normal to that
// feature, alternating sides for a triangle.
fn run_support_loop<G1: SupportMap, G2: SupportMap>(
    pos12: &Isometry3<Real>,
    g1: &G1,
    g2: &G2,
    simplex: &mut JohnsonSimplex,
    max_iter: usize,
) -> usize {
    let mut dir = if pos12.translation.vector.norm_squared() > 0.0 {
        pos12.translation.vector
    } else {
        Vector3::x()
    };
    let mut flip = false;

    for niter in 0..max_iter {
        let pt = CsoPoint::from_shapes(pos12, g1, g2, &dir);
        let progress = simplex.add_cso_point(pt);

        if simplex.full_simplex() {
            return niter + 1;
        }

        let closest = simplex.closest_point().coords;

        if closest.norm_squared() <= gjk::eps_tol() * simplex.max_length_squared() {
            dir = feature_normal(simplex);

            if simplex.num_vertices() == 3 {
                if flip {
                    dir = -dir;
                }
                flip = !flip;
            }
        } else if !progress {
            return niter + 1;
        } else {
            dir = -closest;
        }
    }

    max_iter
}

#[test]
fn separated_cubes_converge_to_the_gap() {
    let cube = Cuboid::new(Vector3::repeat(0.5));
    let pos12 = Isometry3::translation(3.0, 0.0, 0.0);
    let mut simplex = JohnsonSimplex::new();

    let niter = run_support_loop(&pos12, &cube, &cube, &mut simplex, 32);

    assert!(niter < 32);
    assert!(!simplex.full_simplex());
    assert_relative_eq!(simplex.closest_point().coords.norm(), 2.0, epsilon = 1.0e-5);
    assert_relative_eq!(simplex.closest_point().x, -2.0, epsilon = 1.0e-5);
}

#[test]
fn overlapping_spheres_end_with_a_full_simplex() {
    let ball = Ball::new(1.0);

    for pos12 in [
        Isometry3::translation(1.0, 0.5, 0.25),
        Isometry3::translation(-0.3, 0.2, 0.9),
        Isometry3::translation(0.1, 0.0, 0.0),
        Isometry3::translation(0.0, 0.0, 0.0),
    ] {
        let mut simplex = JohnsonSimplex::new();
        let niter = run_support_loop(&pos12, &ball, &ball, &mut simplex, 4);

        assert!(niter <= 4);
        assert!(
            simplex.full_simplex(),
            "No enclosing tetrahedron found for {:?}",
            pos12.translation
        );
        assert_eq!(simplex.closest_point().coords, Vector3::zeros());
    }
}

#[test]
fn reused_simplex_matches_a_fresh_one() {
    let cube = Cuboid::new(Vector3::new(1.0, 0.5, 0.25));
    let ball = Ball::new(0.75);
    let pos12 = Isometry3::translation(0.5, 4.0, -1.0);

    let mut reused = JohnsonSimplex::new();
    let _ = run_support_loop(&Isometry3::translation(-1.0, 0.0, 0.0), &ball, &ball, &mut reused, 8);
    reused.reset();
    let _ = run_support_loop(&pos12, &cube, &ball, &mut reused, 32);

    let mut fresh = JohnsonSimplex::new();
    let _ = run_support_loop(&pos12, &cube, &ball, &mut fresh, 32);

    assert_eq!(reused.closest_point(), fresh.closest_point());
    assert_eq!(reused.simplex_bits(), fresh.simplex_bits());
    assert_eq!(reused.max_length_squared(), fresh.max_length_squared());
}
