use crate::error::NeighborError;
use crate::knn::{Candidate, NearestNeighborIndex, check_k};
use crate::points::{PointSet, dist_sq};

/// Linear-scan index. Each query is O(N + k log k).
///
/// Preferable for the small candidate sets the classifiers usually see.
pub struct BruteForceIndex<const D: usize> {
    points: Vec<[f64; D]>,
}

impl<const D: usize> NearestNeighborIndex<D> for BruteForceIndex<D> {
    fn build(points: &PointSet<D>) -> Self {
        BruteForceIndex { points: points.as_slice().to_vec() }
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn query(&self, point: &[f64; D], k: usize) -> Result<Vec<usize>, NeighborError> {
        check_k(k, self.points.len())?;
        if k == 0 {
            return Ok(Vec::new());
        }

        let mut candidates: Vec<Candidate> = self
            .points
            .iter()
            .enumerate()
            .map(|(index, p)| Candidate { dist_sq: dist_sq(p, point), index })
            .collect();

        if k < candidates.len() {
            candidates.select_nth_unstable(k - 1);
            candidates.truncate(k);
        }
        candidates.sort_unstable();

        Ok(candidates.into_iter().map(|c| c.index).collect())
    }
}
