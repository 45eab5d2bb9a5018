use crate::math::{Point, Real};

/// Trait of bounding volumes.
///
/// Bounding volumes are coarse approximations of shapes. It usually have constant time
/// intersection, inclusion test. Two bounding volume must also be mergeable into a bigger bounding
/// volume.
pub trait BoundingVolume {
    /// Returns a point inside of this bounding volume. This is ideally its center.
    fn center(&self) -> Point<Real>;

    /// Checks if this bounding volume intersect with another one.
    fn intersects(&self, _: &Self) -> bool;

    /// Checks if this bounding volume contains another one.
    fn contains(&self, _: &Self) -> bool;

    /// Merges this bounding volume with another one. The merge is done in-place.
    fn merge(&mut self, _: &Self);

    /// Merges this bounding volume with another one.
    fn merged(&self, _: &Self) -> Self;

    /// Enlarges this bounding volume.
    fn loosen(&mut self, _: Real);

    /// Creates a new, enlarged version, of this bounding volume.
    fn loosened(&self, _: Real) -> Self;

    /// Tighten this bounding volume.
    fn tighten(&mut self, _: Real);

    /// Creates a new, tightened version, of this bounding volume.
    fn tightened(&self, _: Real) -> Self;
}

/// How much of a volume (or point) is inside of another volume.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContainmentType {
    /// The two volumes do not overlap.
    Disjoint,
    /// The two volumes overlap, but neither fully contains the other.
    Intersects,
    /// The tested volume is fully inside of the containing one.
    Contains,
}

impl ContainmentType {
    /// Returns `true` unless `self` is `Disjoint`.
    #[inline]
    pub fn overlaps(self) -> bool {
        self != ContainmentType::Disjoint
    }
}
