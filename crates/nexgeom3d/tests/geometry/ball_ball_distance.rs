use na::{Isometry3, Point3, UnitQuaternion, Vector3};
use nexgeom3d::math::Real;
use nexgeom3d::query::{self, ClosestPoints};
use nexgeom3d::shape::Ball;

fn random_vector(rng: &mut oorandom::Rand32, half_range: Real) -> Vector3<Real> {
    Vector3::from_fn(|_, _| (rng.rand_float() * 2.0 - 1.0) * half_range)
}

#[test]
fn ball_ball_distance_matches_analytic_distance() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..500 {
        let b1 = Ball::new(0.1 + rng.rand_float() * 2.0);
        let b2 = Ball::new(0.1 + rng.rand_float() * 2.0);
        // Rotations have no effect on balls, but they must not break the support mapping.
        let rot1 = UnitQuaternion::from_scaled_axis(random_vector(&mut rng, 3.0));
        let rot2 = UnitQuaternion::from_scaled_axis(random_vector(&mut rng, 3.0));
        let pos1 = Isometry3::from_parts(random_vector(&mut rng, 10.0).into(), rot1);
        let pos2 = Isometry3::from_parts(random_vector(&mut rng, 10.0).into(), rot2);

        let center_dist = (pos2.translation.vector - pos1.translation.vector).norm();
        let expected = center_dist - b1.radius - b2.radius;
        let dist = query::distance(&pos1, &b1, &pos2, &b2);

        if expected > 1.0e-2 {
            assert_relative_eq!(dist, expected, epsilon = 1.0e-3 * expected + 1.0e-4);
            assert!(!query::intersection_test(&pos1, &b1, &pos2, &b2));
        } else if expected < -1.0e-2 {
            assert_eq!(dist, 0.0);
            assert!(query::intersection_test(&pos1, &b1, &pos2, &b2));
        }
    }
}

#[test]
fn ball_ball_closest_points_in_world_space() {
    let b1 = Ball::new(1.0);
    let b2 = Ball::new(0.5);
    let pos1 = Isometry3::translation(1.0, 1.0, 0.0);
    let pos2 = Isometry3::new(Vector3::new(1.0, 5.0, 0.0), Vector3::new(0.0, 0.0, 1.2));

    match query::closest_points(&pos1, &b1, &pos2, &b2, Real::MAX) {
        ClosestPoints::WithinMargin(p1, p2) => {
            assert_relative_eq!(p1, Point3::new(1.0, 2.0, 0.0), epsilon = 1.0e-5);
            assert_relative_eq!(p2, Point3::new(1.0, 4.5, 0.0), epsilon = 1.0e-5);
        }
        res => panic!("Unexpected closest points: {:?}", res),
    }

    match query::closest_points(&pos2, &b2, &pos1, &b1, Real::MAX).flipped() {
        ClosestPoints::WithinMargin(p1, p2) => {
            assert_relative_eq!(p1, Point3::new(1.0, 2.0, 0.0), epsilon = 1.0e-5);
            assert_relative_eq!(p2, Point3::new(1.0, 4.5, 0.0), epsilon = 1.0e-5);
        }
        res => panic!("Unexpected closest points: {:?}", res),
    }

    assert_eq!(
        query::closest_points(&pos1, &b1, &pos2, &b2, 1.0),
        ClosestPoints::Disjoint
    );

    let overlapping = Isometry3::translation(1.0, 2.0, 0.0);
    assert_eq!(
        query::closest_points(&pos1, &b1, &overlapping, &b2, Real::MAX),
        ClosestPoints::Intersecting
    );
}
