//! Bounding sphere.

use crate::bounding_volume::{Aabb, BoundingVolume, ContainmentType, Frustum};
use crate::math::{Isometry, Point, Real};
use na::{self, ComplexField};
use num::Zero;

/// A Bounding Sphere.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The center of the sphere.
    pub center: Point<Real>,
    /// The radius of the sphere.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// The smallest bounding sphere containing the given `Aabb`.
    pub fn from_aabb(aabb: &Aabb) -> BoundingSphere {
        aabb.bounding_sphere()
    }

    /// Computes a bounding sphere of a set of points.
    ///
    /// The sphere is first fitted on the most distant pair among the extreme points along
    /// each axis, then grown until it covers every point. The result is not the smallest
    /// enclosing sphere, but it is usually within a few percents of it.
    ///
    /// Returns `None` if `pts` is empty.
    pub fn from_points(pts: &[Point<Real>]) -> Option<BoundingSphere> {
        let first = *pts.first()?;
        let mut mins = [first; 3];
        let mut maxs = [first; 3];

        for pt in pts {
            for k in 0..3 {
                if pt[k] < mins[k][k] {
                    mins[k] = *pt;
                }
                if pt[k] > maxs[k][k] {
                    maxs[k] = *pt;
                }
            }
        }

        let mut widest = 0;
        let mut widest_sq = na::distance_squared(&mins[0], &maxs[0]);

        for k in 1..3 {
            let dist_sq = na::distance_squared(&mins[k], &maxs[k]);
            if dist_sq > widest_sq {
                widest = k;
                widest_sq = dist_sq;
            }
        }

        let mut center = na::center(&mins[widest], &maxs[widest]);
        let mut radius = ComplexField::sqrt(widest_sq) * 0.5;

        for pt in pts {
            let dpt = pt - center;
            let dist = dpt.norm();

            if dist > radius {
                // Move the sphere toward `pt` so that its far side stays where it was.
                radius = (radius + dist) * 0.5;
                center += dpt * (1.0 - radius / dist);
            }
        }

        Some(BoundingSphere::new(center, radius))
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Transforms this bounding sphere by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> BoundingSphere {
        BoundingSphere::new(m * self.center, self.radius)
    }

    /// Checks if this sphere touches the given `Aabb`.
    #[inline]
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        aabb.intersects_sphere(self)
    }

    /// How much of `aabb` is inside of this sphere.
    pub fn contains_aabb(&self, aabb: &Aabb) -> ContainmentType {
        if !self.intersects_aabb(aabb) {
            return ContainmentType::Disjoint;
        }

        let radius_sq = self.radius * self.radius;

        if aabb
            .vertices()
            .iter()
            .all(|pt| na::distance_squared(pt, &self.center) <= radius_sq)
        {
            ContainmentType::Contains
        } else {
            ContainmentType::Intersects
        }
    }

    /// Locates `point` relative to this sphere.
    ///
    /// A point exactly on the sphere boundary is reported as [`ContainmentType::Intersects`].
    pub fn contains_point(&self, point: &Point<Real>) -> ContainmentType {
        let dist_sq = na::distance_squared(point, &self.center);
        let radius_sq = self.radius * self.radius;

        if dist_sq > radius_sq {
            ContainmentType::Disjoint
        } else if dist_sq < radius_sq {
            ContainmentType::Contains
        } else {
            ContainmentType::Intersects
        }
    }

    /// How much of `other` is inside of this sphere.
    pub fn contains_sphere(&self, other: &BoundingSphere) -> ContainmentType {
        let dist = na::distance(&self.center, &other.center);

        if self.radius + other.radius < dist {
            ContainmentType::Disjoint
        } else if self.radius - other.radius < dist {
            ContainmentType::Intersects
        } else {
            ContainmentType::Contains
        }
    }

    /// How much of `frustum` is inside of this sphere.
    pub fn contains_frustum(&self, frustum: &Frustum) -> ContainmentType {
        if !frustum.intersects_sphere(self) {
            return ContainmentType::Disjoint;
        }

        let radius_sq = self.radius * self.radius;

        if frustum
            .corners()
            .iter()
            .all(|pt| na::distance_squared(pt, &self.center) <= radius_sq)
        {
            ContainmentType::Contains
        } else {
            ContainmentType::Intersects
        }
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn center(&self) -> Point<Real> {
        *self.center()
    }

    #[inline]
    fn intersects(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance_squared = delta_pos.norm_squared();
        let sum_radius = self.radius + other.radius;

        distance_squared <= sum_radius * sum_radius
    }

    #[inline]
    fn contains(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance = delta_pos.norm();

        distance + other.radius <= self.radius
    }

    #[inline]
    fn merge(&mut self, other: &BoundingSphere) {
        let mut dir = *other.center() - *self.center();
        let norm = dir.normalize_mut();

        if norm.is_zero() {
            if other.radius > self.radius {
                self.radius = other.radius
            }
        } else {
            let s_center_dir = self.center.coords.dot(&dir);
            let o_center_dir = other.center.coords.dot(&dir);

            let right = if s_center_dir + self.radius > o_center_dir + other.radius {
                self.center + dir * self.radius
            } else {
                other.center + dir * other.radius
            };

            let left = if -s_center_dir + self.radius > -o_center_dir + other.radius {
                self.center - dir * self.radius
            } else {
                other.center - dir * other.radius
            };

            self.center = na::center(&left, &right);
            self.radius = na::distance(&right, &self.center);
        }
    }

    #[inline]
    fn merged(&self, other: &BoundingSphere) -> BoundingSphere {
        let mut res = *self;

        res.merge(other);

        res
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.radius += amount
    }

    #[inline]
    fn loosened(&self, amount: Real) -> BoundingSphere {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        BoundingSphere::new(self.center, self.radius + amount)
    }

    #[inline]
    fn tighten(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The tightening margin must be positive.");
        assert!(amount <= self.radius, "The tightening margin is to large.");
        self.radius -= amount
    }

    #[inline]
    fn tightened(&self, amount: Real) -> BoundingSphere {
        assert!(amount >= 0.0, "The tightening margin must be positive.");
        assert!(amount <= self.radius, "The tightening margin is to large.");
        BoundingSphere::new(self.center, self.radius - amount)
    }
}
