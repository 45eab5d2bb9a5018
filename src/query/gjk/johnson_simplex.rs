//! Johnson's distance sub-algorithm on an incrementally built simplex.
//!
//! The simplex has four slots. A subset of slots is encoded as a 4-bit mask, and
//! `det[mask][i]` caches the signed cofactor `Δ_i(mask)` of the subset's Cramer
//! system. For affinely independent points, the projection of the origin onto the
//! affine hull of `mask` has barycentric coordinates `Δ_i(mask) / Σ_j Δ_j(mask)`.
//!
//! The cofactors obey Johnson's recursion: with `X = S \ {j}` and any `m ∈ X`,
//! `Δ_j(S) = Σ_{i ∈ X} Δ_i(X) (y_m - y_j) · y_i`, and `Δ_i({i}) = 1`.

use crate::math::{Point, Real, Vector};
use crate::query::gjk::{self, CsoPoint};

const MAX_VERTICES: usize = 4;
const NUM_SUBSETS: usize = 1 << MAX_VERTICES;
const FULL_SIMPLEX_BITS: usize = NUM_SUBSETS - 1;
/// Relative rounding band under which the cofactor of a subset member is still
/// considered non-negative.
const BOUNDARY_TOLERANCE: Real = crate::math::DEFAULT_EPSILON * 100.0;

/// Every subset mask sorted by increasing size, then by increasing mask.
const SUBSETS_BY_SIZE: [usize; NUM_SUBSETS] = [
    0b0000, // empty
    0b0001, 0b0010, 0b0100, 0b1000, // single vertices
    0b0011, 0b0101, 0b0110, 0b1001, 0b1010, 0b1100, // segments
    0b0111, 0b1011, 0b1101, 0b1110, // triangles
    0b1111, // tetrahedron
];

/// Iterates on the slots set in `bits`, lowest first.
#[inline]
fn slots(bits: usize) -> impl Iterator<Item = usize> {
    (0..MAX_VERTICES).filter(move |i| bits & (1 << i) != 0)
}

/// A simplex of dimension up to 3 that computes the point closest to the origin with
/// Johnson's subset-distance algorithm.
///
/// Support points are fed one at a time with [`JohnsonSimplex::add_support_point`]
/// (or [`JohnsonSimplex::add_cso_point`]). After each insertion, the simplex is reduced
/// to the subset of its vertices whose Voronoï region contains the origin, and
/// [`JohnsonSimplex::closest_point`] is updated. If the origin lies on the boundary of
/// that subset (for example on an edge of a triangle), the larger subset is kept: a
/// tetrahedron touching the origin is full.
///
/// # Example
///
/// ```
/// use nexgeom3d::math::Point;
/// use nexgeom3d::query::gjk::JohnsonSimplex;
///
/// let mut simplex = JohnsonSimplex::new();
/// assert!(simplex.add_support_point(&Point::new(-1.0, 1.0, 2.0)));
/// assert!(simplex.add_support_point(&Point::new(1.0, 1.0, 2.0)));
///
/// // The origin projects onto the middle of the segment.
/// assert_eq!(simplex.closest_point(), Point::new(0.0, 1.0, 2.0));
/// assert!(!simplex.full_simplex());
/// ```
#[derive(Clone, Debug)]
pub struct JohnsonSimplex {
    vertices: [CsoPoint; MAX_VERTICES],
    vertex_len_sq: [Real; MAX_VERTICES],
    // edges[i][j] = y_i - y_j
    edges: [[Vector<Real>; MAX_VERTICES]; MAX_VERTICES],
    edge_len_sq: [[Real; MAX_VERTICES]; MAX_VERTICES],
    det: [[Real; MAX_VERTICES]; NUM_SUBSETS],
    simplex_bits: usize,
    closest_point: Point<Real>,
    max_len_sq: Real,
    last_len_sq: Real,
}

impl Default for JohnsonSimplex {
    fn default() -> Self {
        Self::new()
    }
}

impl JohnsonSimplex {
    /// Creates a new empty simplex.
    pub fn new() -> Self {
        JohnsonSimplex {
            vertices: [CsoPoint::origin(); MAX_VERTICES],
            vertex_len_sq: [0.0; MAX_VERTICES],
            edges: [[Vector::zeros(); MAX_VERTICES]; MAX_VERTICES],
            edge_len_sq: [[0.0; MAX_VERTICES]; MAX_VERTICES],
            det: [[0.0; MAX_VERTICES]; NUM_SUBSETS],
            simplex_bits: 0,
            closest_point: Point::origin(),
            max_len_sq: 0.0,
            last_len_sq: Real::MAX,
        }
    }

    /// Empties this simplex so it can be reused for an independent query.
    ///
    /// The cached edges and determinants are left in place: they are rewritten before
    /// being read again.
    pub fn reset(&mut self) {
        self.simplex_bits = 0;
        self.closest_point = Point::origin();
        self.max_len_sq = 0.0;
        self.last_len_sq = Real::MAX;
    }

    /// Does this simplex have four vertices?
    ///
    /// A full simplex is a tetrahedron enclosing the origin (or having it on its boundary).
    #[inline]
    pub fn full_simplex(&self) -> bool {
        self.simplex_bits == FULL_SIMPLEX_BITS
    }

    /// Is this simplex empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.simplex_bits == 0
    }

    /// The number of vertices of this simplex.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.simplex_bits.count_ones() as usize
    }

    /// The dimension of the smallest subspace that can contain this simplex.
    ///
    /// An empty simplex has dimension 0, like a single point.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.num_vertices().saturating_sub(1)
    }

    /// The mask of the slots currently used by this simplex.
    #[inline]
    pub fn simplex_bits(&self) -> usize {
        self.simplex_bits
    }

    /// The largest squared distance between the origin and a vertex of this simplex.
    #[inline]
    pub fn max_length_squared(&self) -> Real {
        self.max_len_sq
    }

    /// The point of this simplex closest to the origin, as computed by the last insertion.
    ///
    /// This is the origin if the simplex is full or empty.
    #[inline]
    pub fn closest_point(&self) -> Point<Real> {
        self.closest_point
    }

    /// The vertices of this simplex, together with the barycentric coordinate of
    /// [`Self::closest_point`] relative to each one of them.
    pub fn vertices(&self) -> impl Iterator<Item = (&CsoPoint, Real)> + '_ {
        let bits = self.simplex_bits;
        let denom: Real = slots(bits).map(|i| self.det[bits][i]).sum();
        slots(bits).map(move |i| (&self.vertices[i], self.det[bits][i] / denom))
    }

    /// Tests if the given point is already a vertex of this simplex.
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        slots(self.simplex_bits).any(|i| self.vertices[i].point == *pt)
    }

    /// Adds a support point that is its own witness on the first shape.
    ///
    /// See [`Self::add_cso_point`].
    #[inline]
    pub fn add_support_point(&mut self, pt: &Point<Real>) -> bool {
        self.add_cso_point(CsoPoint::single_point(*pt))
    }

    /// Adds a support point to this simplex and reduces it to the sub-simplex
    /// closest to the origin.
    ///
    /// Returns `false` if the closest point did not get closer to the origin by more than a
    /// relative tolerance of [`gjk::eps_tol`]. This signals convergence: the caller should stop
    /// sampling support points. `false` is also returned if the simplex is already full.
    pub fn add_cso_point(&mut self, pt: CsoPoint) -> bool {
        if self.full_simplex() {
            log::debug!("Attempted to add a support point to a full simplex.");
            return false;
        }

        let new_id = (!self.simplex_bits & FULL_SIMPLEX_BITS).trailing_zeros() as usize;
        self.vertices[new_id] = pt;
        self.vertex_len_sq[new_id] = pt.point.coords.norm_squared();

        for i in slots(self.simplex_bits) {
            let edge = self.vertices[i].point - pt.point;
            let len_sq = edge.norm_squared();
            self.edges[i][new_id] = edge;
            self.edges[new_id][i] = -edge;
            self.edge_len_sq[i][new_id] = len_sq;
            self.edge_len_sq[new_id][i] = len_sq;
        }

        self.update_determinants(new_id);
        self.update_simplex(new_id)
    }

    // Fills `det` for every subset containing `new_id`, smallest subsets first so that
    // the recursion only reads entries that are already up to date.
    fn update_determinants(&mut self, new_id: usize) {
        let new_bit = 1 << new_id;
        self.det[new_bit][new_id] = 1.0;

        for &rest in &SUBSETS_BY_SIZE[1..] {
            if rest & !self.simplex_bits != 0 {
                continue;
            }

            let bits = rest | new_bit;

            for j in slots(bits) {
                self.det[bits][j] = self.subset_determinant(bits, j);
            }
        }
    }

    // Δ_j(bits), assuming every Δ(bits \ {j}) is known.
    fn subset_determinant(&self, bits: usize, j: usize) -> Real {
        let rest = bits & !(1 << j);

        // Any vertex of `rest` gives the same value in exact arithmetic. The one
        // nearest to `j` keeps the dot products small.
        let mut pivot = j;
        let mut pivot_len_sq = Real::MAX;

        for k in slots(rest) {
            if self.edge_len_sq[k][j] < pivot_len_sq {
                pivot_len_sq = self.edge_len_sq[k][j];
                pivot = k;
            }
        }

        let edge = &self.edges[pivot][j];

        slots(rest)
            .map(|i| self.det[rest][i] * edge.dot(&self.vertices[i].point.coords))
            .sum()
    }

    // Voronoï region test: `x_bits` is the closest feature of `y_bits` iff the origin
    // projects onto it (its cofactors are non-negative, up to rounding) and adding any
    // other vertex of `y_bits` would not pull the projection toward it.
    // Zero-volume subsets have a null cofactor sum and never pass.
    fn satisfies_rule(&self, x_bits: usize, y_bits: usize) -> bool {
        let total: Real = slots(x_bits).map(|i| self.det[x_bits][i]).sum();

        if total <= 0.0 {
            return false;
        }

        let band = total * BOUNDARY_TOLERANCE;

        slots(y_bits).all(|i| {
            let bit = 1 << i;

            if x_bits & bit != 0 {
                self.det[x_bits][i] > -band
            } else {
                self.det[x_bits | bit][i] <= 0.0
            }
        })
    }

    fn update_simplex(&mut self, new_id: usize) -> bool {
        let new_bit = 1 << new_id;
        let all_bits = self.simplex_bits | new_bit;

        // Largest subsets first.
        for &rest in SUBSETS_BY_SIZE.iter().rev() {
            if rest & !self.simplex_bits != 0 {
                continue;
            }

            let bits = rest | new_bit;

            if self.satisfies_rule(bits, all_bits) {
                self.simplex_bits = bits;
                self.closest_point = self.compute_closest_point();

                let len_sq = self.closest_point.coords.norm_squared();
                let progress = self.last_len_sq - len_sq > gjk::eps_tol() * self.last_len_sq;
                self.last_len_sq = self.last_len_sq.min(len_sq);
                return progress;
            }
        }

        // Only reachable through rounding errors. The new point is dropped.
        log::debug!(
            "No sub-simplex of {:#06b} passed the Voronoï region test.",
            all_bits
        );
        false
    }

    fn compute_closest_point(&mut self) -> Point<Real> {
        let bits = self.simplex_bits;
        let mut denom = 0.0;
        let mut res = Vector::zeros();
        self.max_len_sq = 0.0;

        for i in slots(bits) {
            let weight = self.det[bits][i];
            denom += weight;
            res += self.vertices[i].point.coords * weight;
            self.max_len_sq = self.max_len_sq.max(self.vertex_len_sq[i]);
        }

        if bits == FULL_SIMPLEX_BITS {
            // The origin is enclosed.
            Point::origin()
        } else {
            Point::from(res / denom)
        }
    }
}
