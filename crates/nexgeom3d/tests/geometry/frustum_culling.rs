use na::{Isometry3, Matrix4, Point3, Vector3};
use nexgeom3d::bounding_volume::{Aabb, BoundingSphere, ContainmentType, Frustum, Plane};
use nexgeom3d::math::Real;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

// A camera at `(0, 0, 5)` looking toward the origin, with a 90 degrees field of view.
// Its near plane is `z = 4` and its far plane is `z = -5`.
fn camera(fovy: Real, znear: Real, zfar: Real) -> Frustum {
    let view = Isometry3::look_at_rh(
        &Point3::new(0.0, 0.0, 5.0),
        &Point3::origin(),
        &Vector3::y(),
    );
    let proj = Matrix4::new_perspective(1.0, fovy, znear, zfar);

    Frustum::new(&(proj * view.to_homogeneous())).unwrap()
}

fn main_camera() -> Frustum {
    camera(FRAC_PI_2, 1.0, 10.0)
}

#[test]
fn perspective_frustum_corners_and_planes() {
    let frustum = main_camera();
    let corners = frustum.corners();

    assert_relative_eq!(corners[0], Point3::new(-1.0, -1.0, 4.0), epsilon = 1.0e-3);
    assert_relative_eq!(corners[2], Point3::new(1.0, 1.0, 4.0), epsilon = 1.0e-3);
    assert_relative_eq!(corners[4], Point3::new(-10.0, -10.0, -5.0), epsilon = 1.0e-2);
    assert_relative_eq!(corners[6], Point3::new(10.0, 10.0, -5.0), epsilon = 1.0e-2);

    let aabb = frustum.aabb();
    assert_relative_eq!(aabb.mins, Point3::new(-10.0, -10.0, -5.0), epsilon = 1.0e-2);
    assert_relative_eq!(aabb.maxs, Point3::new(10.0, 10.0, 4.0), epsilon = 1.0e-2);

    let far: &Plane = &frustum.planes()[Frustum::FAR];
    assert_relative_eq!(far.normal, -Vector3::z(), epsilon = 1.0e-5);
    assert_relative_eq!(far.signed_distance(&Point3::new(3.0, 2.0, -7.0)), 2.0, epsilon = 1.0e-3);

    for corner in corners {
        for plane in frustum.planes() {
            assert!(plane.signed_distance(corner) < 1.0e-3);
        }
    }
}

#[test]
fn frustum_point_culling() {
    let frustum = main_camera();

    assert_eq!(
        frustum.contains_point(&Point3::origin()),
        ContainmentType::Contains
    );
    assert_eq!(
        frustum.contains_point(&Point3::new(4.5, -4.5, 0.0)),
        ContainmentType::Contains
    );
    assert_eq!(
        frustum.contains_point(&Point3::new(6.0, 0.0, 0.0)),
        ContainmentType::Disjoint
    );
    assert_eq!(
        frustum.contains_point(&Point3::new(0.0, 0.0, 4.5)),
        ContainmentType::Disjoint
    );
}

#[test]
fn frustum_sphere_culling() {
    let frustum = main_camera();

    let inner = BoundingSphere::new(Point3::origin(), 1.0);
    let straddling = BoundingSphere::new(Point3::new(5.0, 0.0, 0.0), 1.0);
    let behind = BoundingSphere::new(Point3::new(0.0, 0.0, 20.0), 1.0);
    // Outside of the far top-right corner, but no single plane separates it from the frustum.
    let near_corner = BoundingSphere::new(Point3::new(11.57, 11.57, -4.08), 2.0);

    assert_eq!(frustum.contains_sphere(&inner), ContainmentType::Contains);
    assert_eq!(frustum.contains_sphere(&straddling), ContainmentType::Intersects);
    assert_eq!(frustum.contains_sphere(&behind), ContainmentType::Disjoint);
    assert_eq!(frustum.contains_sphere(&near_corner), ContainmentType::Disjoint);

    assert!(frustum.intersects_sphere(&inner));
    assert!(frustum.intersects_sphere(&straddling));
    assert!(!frustum.intersects_sphere(&near_corner));
}

#[test]
fn frustum_aabb_culling() {
    let frustum = main_camera();

    let inner = Aabb::from_half_extents(Point3::origin(), Vector3::repeat(1.0));
    let straddling = Aabb::from_half_extents(Point3::new(5.0, 0.0, 0.0), Vector3::repeat(1.0));
    let behind = Aabb::from_half_extents(Point3::new(0.0, 0.0, 10.0), Vector3::repeat(1.0));

    assert_eq!(frustum.contains_aabb(&inner), ContainmentType::Contains);
    assert_eq!(frustum.contains_aabb(&straddling), ContainmentType::Intersects);
    assert_eq!(frustum.contains_aabb(&behind), ContainmentType::Disjoint);

    assert!(frustum.intersects_aabb(&straddling));
    assert!(!frustum.intersects_aabb(&behind));
}

#[test]
fn frustum_frustum_culling() {
    let outer = main_camera();
    let inner = camera(FRAC_PI_4, 2.0, 8.0);

    assert_eq!(outer.contains_frustum(&inner), ContainmentType::Contains);
    assert_eq!(inner.contains_frustum(&outer), ContainmentType::Intersects);
    assert!(outer.intersects_frustum(&inner));

    let far_away = Frustum::new(
        &(Matrix4::new_perspective(1.0, FRAC_PI_2, 1.0, 10.0)
            * Isometry3::translation(100.0, 0.0, 0.0).to_homogeneous()),
    )
    .unwrap();
    assert_eq!(outer.contains_frustum(&far_away), ContainmentType::Disjoint);
    assert!(!outer.intersects_frustum(&far_away));
}

#[test]
fn sphere_frustum_containment() {
    let frustum = main_camera();

    let large = BoundingSphere::new(Point3::origin(), 20.0);
    let small = BoundingSphere::new(Point3::origin(), 3.0);
    let remote = BoundingSphere::new(Point3::new(0.0, 50.0, 0.0), 3.0);

    assert_eq!(large.contains_frustum(&frustum), ContainmentType::Contains);
    assert_eq!(small.contains_frustum(&frustum), ContainmentType::Intersects);
    assert_eq!(remote.contains_frustum(&frustum), ContainmentType::Disjoint);
}
