//! Shapes supported by nexgeom3d.
//!
//! Every shape here is convex and described by its support mapping, which is all
//! the GJK queries of [`crate::query`] need.

pub use self::ball::Ball;
pub use self::convex_point_cloud::{ConvexPointCloud, MAX_CLOUD_POINTS};
pub use self::cuboid::Cuboid;
#[doc(inline)]
pub use self::support_map::SupportMap;

mod ball;
mod convex_point_cloud;
mod cuboid;
mod support_map;
