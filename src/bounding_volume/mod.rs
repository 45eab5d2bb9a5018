//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
#[doc(inline)]
pub use crate::bounding_volume::bounding_sphere::BoundingSphere;
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::{BoundingVolume, ContainmentType};
#[doc(inline)]
pub use crate::bounding_volume::frustum::{Frustum, FrustumError, Plane};

#[doc(hidden)]
pub mod bounding_volume;

#[doc(hidden)]
pub mod aabb;
mod aabb_ball;
mod aabb_convex_point_cloud;
mod aabb_cuboid;
mod aabb_utils;

#[doc(hidden)]
pub mod bounding_sphere;
mod bounding_sphere_ball;
mod bounding_sphere_convex_point_cloud;
mod bounding_sphere_cuboid;
mod bounding_sphere_utils;

#[doc(hidden)]
pub mod frustum;

/// Free functions for some special cases of bounding-volume computation.
pub mod details {
    pub use super::aabb_ball::{ball_aabb, local_ball_aabb};
    pub use super::aabb_utils::{local_support_map_aabb, point_cloud_aabb, support_map_aabb};
    pub use super::bounding_sphere_utils::point_cloud_bounding_sphere;
}
