use na::{Isometry3, Point3, Vector3};
use nexgeom3d::bounding_volume::details::{point_cloud_aabb, point_cloud_bounding_sphere};
use nexgeom3d::bounding_volume::{details, Aabb, BoundingSphere, BoundingVolume};
use nexgeom3d::math::Real;
use nexgeom3d::shape::{Ball, ConvexPointCloud, Cuboid};
use std::f32::consts::FRAC_PI_2;

fn random_points(rng: &mut oorandom::Rand32, n: usize) -> Vec<Point3<Real>> {
    (0..n)
        .map(|_| {
            Point3::new(
                rng.rand_float() * 8.0 - 4.0,
                rng.rand_float() * 2.0 - 1.0,
                rng.rand_float() * 6.0 + 3.0,
            )
        })
        .collect()
}

#[test]
fn sphere_from_points_bounds_random_clouds() {
    let mut rng = oorandom::Rand32::new(7);

    for n in 1..64 {
        let pts = random_points(&mut rng, n);
        let sphere = BoundingSphere::from_points(&pts).unwrap();
        let centroid_sphere = point_cloud_bounding_sphere(&pts);
        let aabb = Aabb::from_points(&pts);

        for pt in &pts {
            assert!(na::distance(pt, &sphere.center) <= sphere.radius * (1.0 + 1.0e-5));
        }

        assert!(centroid_sphere.loosened(1.0e-4).contains_point(&pts[0]).overlaps());
        assert!(aabb.loosened(1.0e-4).contains_local_point(&sphere.center));
    }
}

#[test]
fn point_cloud_bounding_volumes() {
    let pts = [
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(-1.0, 0.0, 0.0),
        Point3::new(0.0, 2.0, 0.0),
        Point3::new(0.0, 0.0, -3.0),
    ];
    let cloud = ConvexPointCloud::new(&pts).unwrap();
    let pos = Isometry3::translation(10.0, 0.0, 0.0);

    let local = cloud.local_aabb();
    assert_eq!(local.mins, Point3::new(-1.0, 0.0, -3.0));
    assert_eq!(local.maxs, Point3::new(1.0, 2.0, 0.0));
    assert_eq!(cloud.aabb(&pos), point_cloud_aabb(&pos, &pts));
    assert_relative_eq!(
        details::support_map_aabb(&pos, &cloud).mins,
        cloud.aabb(&pos).mins
    );
    assert_relative_eq!(details::local_support_map_aabb(&cloud).maxs, local.maxs);

    let sphere = cloud.bounding_sphere(&pos);
    for pt in &pts {
        assert!(na::distance(&(pos * pt), &sphere.center) <= sphere.radius + 1.0e-5);
    }
}

#[test]
fn shape_bounding_volumes() {
    let pos = Isometry3::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(0.0, 0.0, FRAC_PI_2));
    let ball = Ball::new(0.5);
    let cuboid = Cuboid::new(Vector3::new(2.0, 1.0, 0.5));

    let ball_aabb = ball.aabb(&pos);
    assert_eq!(ball_aabb, details::ball_aabb(&Point3::new(1.0, 2.0, 3.0), 0.5));
    assert_eq!(ball.local_aabb(), details::local_ball_aabb(0.5));
    assert_eq!(ball.bounding_sphere(&pos).center, Point3::new(1.0, 2.0, 3.0));

    // The rotation swaps the x and y extents.
    let cuboid_aabb = cuboid.aabb(&pos);
    assert_relative_eq!(cuboid_aabb.half_extents(), Vector3::new(1.0, 2.0, 0.5), epsilon = 1.0e-5);
    assert_relative_eq!(cuboid_aabb.center(), Point3::new(1.0, 2.0, 3.0), epsilon = 1.0e-5);
    assert_relative_eq!(
        cuboid.local_aabb().transform_by(&pos).mins,
        cuboid_aabb.mins,
        epsilon = 1.0e-5
    );
    assert_relative_eq!(
        cuboid.local_bounding_sphere().radius,
        cuboid.local_aabb().bounding_sphere().radius,
        epsilon = 1.0e-5
    );
}
