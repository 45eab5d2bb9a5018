//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`closest_points()`] to compute the closest points between two convex shapes.
//! * [`distance()`] to compute the distance between two convex shapes.
//! * [`intersection_test()`] to determine if two convex shapes are intersecting or not.
//!
//! All of them run the GJK algorithm of the [`gjk`] module on the support mappings of
//! the shapes. Penetration depth is not computed.

pub use self::closest_points::{closest_points, ClosestPoints};
pub use self::distance::distance;
pub use self::intersection_test::intersection_test;

mod closest_points;
mod distance;
pub mod gjk;
mod intersection_test;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::closest_points::{
        closest_points_support_map_support_map, closest_points_support_map_support_map_with_params,
    };
    pub use super::distance::{
        distance_support_map_support_map, distance_support_map_support_map_with_params,
    };
    pub use super::intersection_test::{
        intersection_test_support_map_support_map,
        intersection_test_support_map_support_map_with_params,
    };
}
