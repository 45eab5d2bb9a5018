//! The GJK algorithm for distance computation.

pub use self::cso_point::CsoPoint;
pub use self::gjk::*;
pub use self::johnson_simplex::JohnsonSimplex;
pub use self::special_support_maps::*;

mod cso_point;
mod gjk;
mod johnson_simplex;
mod special_support_maps;
