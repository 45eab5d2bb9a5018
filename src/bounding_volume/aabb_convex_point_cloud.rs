use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Real};
use crate::shape::ConvexPointCloud;

impl ConvexPointCloud {
    /// Computes the world-space AABB of this point cloud, transformed by `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        super::details::point_cloud_aabb(pos, self.points())
    }

    /// Computes the local-space AABB of this point cloud.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(self.points())
    }
}
