use crate::bounding_volume::BoundingSphere;
use crate::math::{Isometry, Point, Real};
use crate::shape::ConvexPointCloud;

impl ConvexPointCloud {
    /// Computes the world-space bounding sphere of this point cloud, transformed by `pos`.
    #[inline]
    pub fn bounding_sphere(&self, pos: &Isometry<Real>) -> BoundingSphere {
        let bv: BoundingSphere = self.local_bounding_sphere();
        bv.transform_by(pos)
    }

    /// Computes the local-space bounding sphere of this point cloud.
    #[inline]
    pub fn local_bounding_sphere(&self) -> BoundingSphere {
        // A point cloud is never empty.
        BoundingSphere::from_points(self.points())
            .unwrap_or_else(|| BoundingSphere::new(Point::origin(), 0.0))
    }
}
