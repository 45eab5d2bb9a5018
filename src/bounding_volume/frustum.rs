//! View frustum.

use thiserror::Error;

use crate::bounding_volume::{Aabb, BoundingSphere, ContainmentType};
use crate::math::{HomogeneousMatrix, Isometry, Point, Real, Vector, Vector4, DEFAULT_EPSILON};
use crate::query;
use crate::shape::{Ball, SupportMap};
use crate::utils::{self, WSign};

/// Errors raised while building a [`Frustum`] from a view-projection matrix.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrustumError {
    /// The matrix is not invertible, so the frustum corners cannot be recovered.
    #[error("the view-projection matrix is not invertible")]
    SingularMatrix,
    /// One of the frustum corners lies at infinity (e.g. an infinite far plane).
    #[error("the frustum corner {0} is at infinity")]
    UnboundedCorner(usize),
    /// One of the extracted planes has a zero normal.
    #[error("the frustum plane {0} is degenerate")]
    DegeneratePlane(usize),
}

/// A plane, the set of points `p` such that `normal.dot(p) + bias == 0`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Plane {
    /// The plane normal. Not necessarily normalized.
    pub normal: Vector<Real>,
    /// The plane offset along its normal.
    pub bias: Real,
}

impl Plane {
    /// Creates a plane from its normal and bias.
    #[inline]
    pub fn new(normal: Vector<Real>, bias: Real) -> Self {
        Plane { normal, bias }
    }

    /// Creates the plane `coeffs.xyz().dot(p) + coeffs.w == 0`.
    #[inline]
    pub fn from_coefficients(coeffs: &Vector4<Real>) -> Self {
        Plane::new(coeffs.xyz(), coeffs.w)
    }

    /// The signed distance between `pt` and this plane, scaled by the norm of the normal.
    ///
    /// It is positive on the side the normal points toward.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) + self.bias
    }

    /// Scales this plane so its normal has unit length, and returns the former normal length.
    ///
    /// The plane is left unchanged if its normal is zero.
    #[inline]
    pub fn normalize(&mut self) -> Real {
        let norm = self.normal.norm();

        if norm > 0.0 {
            self.normal /= norm;
            self.bias /= norm;
        }

        norm
    }
}

/// The volume seen by a camera, bounded by six planes.
///
/// The plane normals point outward: a point is inside of the frustum if its signed distance to
/// every plane is non-positive.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Frustum {
    matrix: HomogeneousMatrix<Real>,
    planes: [Plane; 6],
    corners: [Point<Real>; 8],
}

impl Frustum {
    /// Index of the near plane in [`Frustum::planes`].
    pub const NEAR: usize = 0;
    /// Index of the far plane in [`Frustum::planes`].
    pub const FAR: usize = 1;
    /// Index of the left plane in [`Frustum::planes`].
    pub const LEFT: usize = 2;
    /// Index of the right plane in [`Frustum::planes`].
    pub const RIGHT: usize = 3;
    /// Index of the top plane in [`Frustum::planes`].
    pub const TOP: usize = 4;
    /// Index of the bottom plane in [`Frustum::planes`].
    pub const BOTTOM: usize = 5;

    /// Builds the frustum of the given view-projection matrix.
    ///
    /// The matrix maps world-space points to clip-space, with normalized device coordinates
    /// in `[-1, 1]` along all three axes after the perspective division (as done by
    /// [`na::Matrix4::new_perspective`] and [`na::Matrix4::new_orthographic`]).
    pub fn new(matrix: &HomogeneousMatrix<Real>) -> Result<Self, FrustumError> {
        let inverse = matrix
            .try_inverse()
            .ok_or(FrustumError::SingularMatrix)?;

        let row = |i: usize| matrix.row(i).transpose();
        let (x, y, z, w) = (row(0), row(1), row(2), row(3));

        // Gribb-Hartmann extraction yields inward normals, we flip them.
        let coeffs = [-(w + z), -(w - z), -(w + x), -(w - x), -(w - y), -(w + y)];
        let mut planes = [Plane::new(Vector::zeros(), 0.0); 6];

        for (i, c) in coeffs.iter().enumerate() {
            planes[i] = Plane::from_coefficients(c);

            if planes[i].normalize() <= DEFAULT_EPSILON {
                return Err(FrustumError::DegeneratePlane(i));
            }
        }

        let ndc = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0));
        let mut corners = [Point::origin(); 8];

        for (i, pt) in ndc.vertices().iter().enumerate() {
            let clip = inverse * pt.to_homogeneous();
            corners[i] =
                Point::from_homogeneous(clip).ok_or(FrustumError::UnboundedCorner(i))?;
        }

        Ok(Frustum {
            matrix: *matrix,
            planes,
            corners,
        })
    }

    /// The view-projection matrix this frustum was built from.
    #[inline]
    pub fn matrix(&self) -> &HomogeneousMatrix<Real> {
        &self.matrix
    }

    /// The six bounding planes, normalized, in the order given by [`Frustum::NEAR`],
    /// [`Frustum::FAR`], [`Frustum::LEFT`], [`Frustum::RIGHT`], [`Frustum::TOP`] and
    /// [`Frustum::BOTTOM`].
    #[inline]
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// The eight corners of this frustum.
    ///
    /// The four corners of the near plane come first, starting at the bottom-left one.
    #[inline]
    pub fn corners(&self) -> &[Point<Real>; 8] {
        &self.corners
    }

    /// The smallest `Aabb` containing this frustum.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(&self.corners)
    }

    /// Locates `pt` relative to this frustum.
    ///
    /// A point exactly on one of the planes is reported as [`ContainmentType::Intersects`].
    pub fn contains_point(&self, pt: &Point<Real>) -> ContainmentType {
        let mut on_boundary = false;

        for plane in &self.planes {
            let dist = plane.signed_distance(pt);

            if dist > 0.0 {
                return ContainmentType::Disjoint;
            } else if dist == 0.0 {
                on_boundary = true;
            }
        }

        if on_boundary {
            ContainmentType::Intersects
        } else {
            ContainmentType::Contains
        }
    }

    /// Checks if this frustum touches the given sphere.
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        query::intersection_test(
            &Isometry::identity(),
            self,
            &Isometry::translation(sphere.center.x, sphere.center.y, sphere.center.z),
            &Ball::new(sphere.radius),
        )
    }

    /// How much of `sphere` is inside of this frustum.
    pub fn contains_sphere(&self, sphere: &BoundingSphere) -> ContainmentType {
        let mut straddling = false;

        for plane in &self.planes {
            let dist = plane.signed_distance(&sphere.center);

            if dist > sphere.radius {
                return ContainmentType::Disjoint;
            } else if dist > -sphere.radius {
                straddling = true;
            }
        }

        if !straddling {
            ContainmentType::Contains
        } else if self.intersects_sphere(sphere) {
            ContainmentType::Intersects
        } else {
            // Close to an edge or a corner, but outside.
            ContainmentType::Disjoint
        }
    }

    /// Checks if this frustum touches the given `Aabb`.
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        query::intersection_test(&Isometry::identity(), self, &Isometry::identity(), aabb)
    }

    /// How much of `aabb` is inside of this frustum.
    pub fn contains_aabb(&self, aabb: &Aabb) -> ContainmentType {
        let center = aabb.center();
        let half_extents = aabb.half_extents();
        let mut straddling = false;

        for plane in &self.planes {
            let farthest = center + plane.normal.copy_sign_to(half_extents);
            let nearest = center - plane.normal.copy_sign_to(half_extents);

            if plane.signed_distance(&nearest) > 0.0 {
                return ContainmentType::Disjoint;
            } else if plane.signed_distance(&farthest) > 0.0 {
                straddling = true;
            }
        }

        if !straddling {
            ContainmentType::Contains
        } else if self.intersects_aabb(aabb) {
            ContainmentType::Intersects
        } else {
            ContainmentType::Disjoint
        }
    }

    /// Checks if two frustums overlap.
    pub fn intersects_frustum(&self, other: &Frustum) -> bool {
        query::intersection_test(&Isometry::identity(), self, &Isometry::identity(), other)
    }

    /// How much of `other` is inside of this frustum.
    pub fn contains_frustum(&self, other: &Frustum) -> ContainmentType {
        if other
            .corners
            .iter()
            .all(|pt| self.contains_point(pt) != ContainmentType::Disjoint)
        {
            ContainmentType::Contains
        } else if self.intersects_frustum(other) {
            ContainmentType::Intersects
        } else {
            ContainmentType::Disjoint
        }
    }
}

impl SupportMap for Frustum {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, &self.corners)
    }
}
