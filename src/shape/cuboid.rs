//! Support mapping based Cuboid shape.

use crate::math::{Point, Real, Vector, DIM};
use crate::shape::SupportMap;
use crate::utils::WSign;

/// Shape of a box.
///
/// The cuboid is centered at the origin of its local-space and aligned with its axes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }

    /// The `i`-th vertex of this cuboid.
    ///
    /// Bit `k` of `i` set means the vertex sits on the negative side of axis `k`.
    pub fn vertex(&self, i: u32) -> Point<Real> {
        let mut res = self.half_extents;

        for k in 0..DIM {
            if i & (1 << k) != 0 {
                res[k] = -res[k]
            }
        }

        Point::from(res)
    }

    /// The eight vertices of this cuboid.
    pub fn vertices(&self) -> [Point<Real>; 8] {
        core::array::from_fn(|i| self.vertex(i as u32))
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        dir.copy_sign_to(self.half_extents).into()
    }
}
