use na::{Isometry3, Point3, Vector3};
use nexgeom3d::math::Real;
use nexgeom3d::query::gjk::{self, GjkOptions, GjkResult, JohnsonSimplex};
use nexgeom3d::query::{self, ClosestPoints};
use nexgeom3d::shape::{ConvexPointCloud, Cuboid};

#[test]
fn unit_cubes_separated_along_x() {
    let cube = Cuboid::new(Vector3::repeat(0.5));
    let pos1 = Isometry3::identity();
    let pos2 = Isometry3::translation(3.0, 0.0, 0.0);

    assert_relative_eq!(query::distance(&pos1, &cube, &pos2, &cube), 2.0, epsilon = 1.0e-5);

    match query::closest_points(&pos1, &cube, &pos2, &cube, Real::MAX) {
        ClosestPoints::WithinMargin(p1, p2) => {
            assert_relative_eq!(p1.x, 0.5, epsilon = 1.0e-5);
            assert_relative_eq!(p2.x, 2.5, epsilon = 1.0e-5);
            assert_relative_eq!(p1.yz(), p2.yz(), epsilon = 1.0e-5);
        }
        res => panic!("Unexpected closest points: {:?}", res),
    }
}

#[test]
fn gjk_reports_the_separating_direction() {
    let cube = Cuboid::new(Vector3::new(1.0, 2.0, 0.5));
    let pos12 = Isometry3::translation(0.0, 0.0, -4.0);
    let mut simplex = JohnsonSimplex::new();

    match gjk::closest_points(
        &pos12,
        &cube,
        &cube,
        Real::MAX,
        true,
        &mut simplex,
        &GjkOptions::default(),
    ) {
        GjkResult::ClosestPoints(p1, p2, dir) => {
            assert_relative_eq!(p1.z, -0.5, epsilon = 1.0e-5);
            assert_relative_eq!(p2.z, -3.5, epsilon = 1.0e-5);
            assert_relative_eq!(*dir, -Vector3::z(), epsilon = 1.0e-5);
        }
        res => panic!("Unexpected GJK result: {:?}", res),
    }
}

#[test]
fn overlapping_cubes_intersect() {
    let cube = Cuboid::new(Vector3::repeat(1.0));
    let pos1 = Isometry3::identity();

    for pos2 in [
        Isometry3::translation(1.5, 0.2, -0.3),
        Isometry3::new(Vector3::new(0.5, 1.0, 0.5), Vector3::new(0.3, 0.5, -0.2)),
        Isometry3::identity(),
    ] {
        assert!(query::intersection_test(&pos1, &cube, &pos2, &cube));
        assert_eq!(query::distance(&pos1, &cube, &pos2, &cube), 0.0);
    }
}

#[test]
fn iteration_cap_returns_a_best_effort_result() {
    let cube = Cuboid::new(Vector3::repeat(0.5));
    let pos12 = Isometry3::translation(3.0, 1.0, 0.0);
    let mut simplex = JohnsonSimplex::new();
    let options = GjkOptions {
        max_iterations: 1,
        ..GjkOptions::default()
    };

    match gjk::closest_points(&pos12, &cube, &cube, Real::MAX, true, &mut simplex, &options) {
        // A single iteration is enough to prove the shapes are separated, but not
        // to converge toward their closest points.
        GjkResult::ClosestPoints(p1, p2, _) => {
            assert!(na::distance(&p1, &p2) >= 2.0 - 1.0e-5);
        }
        res => panic!("Unexpected GJK result: {:?}", res),
    }
}

#[test]
fn collapsed_point_cloud_against_cuboid() {
    // A degenerate hull reduced to a flat square.
    let square = ConvexPointCloud::new(&[
        Point3::new(-1.0, 0.0, -1.0),
        Point3::new(1.0, 0.0, -1.0),
        Point3::new(1.0, 0.0, 1.0),
        Point3::new(-1.0, 0.0, 1.0),
        Point3::new(0.0, 0.0, 0.0),
    ])
    .unwrap();
    let cube = Cuboid::new(Vector3::repeat(0.5));

    let above = Isometry3::translation(0.2, 2.0, -0.1);
    assert_relative_eq!(
        query::distance(&Isometry3::identity(), &square, &above, &cube),
        1.5,
        epsilon = 1.0e-5
    );

    let across = Isometry3::translation(0.2, 0.25, -0.1);
    assert!(query::intersection_test(
        &Isometry3::identity(),
        &square,
        &across,
        &cube
    ));
}
