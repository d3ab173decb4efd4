use crate::error::NeighborError;
use crate::points::PointSet;
use std::cmp::Ordering;

pub mod brute;
pub mod kdtree;

/// Trait defining a k-nearest-neighbor index over a fixed point set.
/// This allows swapping between a brute-force scan and a kd-tree.
pub trait NearestNeighborIndex<const D: usize>: Send + Sync + Sized {
    /// Build the index over `points`. Indices reported by queries are positions in `points`.
    fn build(points: &PointSet<D>) -> Self;

    /// Number of indexed points.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `k` indexed points closest to `point`, nearest first.
    ///
    /// Equal distances are ordered by ascending index. Fails with
    /// [`NeighborError::InsufficientPoints`] when `k` exceeds [`NearestNeighborIndex::len`].
    fn query(&self, point: &[f64; D], k: usize) -> Result<Vec<usize>, NeighborError>;
}

/// A candidate neighbor ordered by `(distance, index)`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Candidate {
    pub dist_sq: f64,
    pub index: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist_sq
            .total_cmp(&other.dist_sq)
            .then(self.index.cmp(&other.index))
    }
}

pub(crate) fn check_k(k: usize, available: usize) -> Result<(), NeighborError> {
    if k > available {
        return Err(NeighborError::InsufficientPoints { requested: k, available });
    }
    Ok(())
}
