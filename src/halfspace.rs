//! Half-space (BSP) neighbors.
//!
//! Each of the k nearest neighbors `q_j` of a point `p` induces the half-space
//! `H_j = { x : (x - q_j) . (p - q_j) >= 0 }`, the side of the plane through `q_j`
//! (orthogonal to `p - q_j`) that faces `p`. A candidate `q_i` is a half-space neighbor
//! iff it lies in every `H_j`, i.e. no other candidate hides it from `p`.

use crate::error::{DegeneracyPolicy, NeighborError};
use crate::knn::NearestNeighborIndex;
use crate::knn::kdtree::KdTree;
use crate::points::PointSet;
use crate::result::NeighborResult;
use crate::timing::Timed;

/// Default number of nearest candidates examined.
pub const DEFAULT_K: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HalfSpaceConfig {
    /// Number of nearest candidates to test.
    pub k: usize,
    pub policy: DegeneracyPolicy,
}

impl Default for HalfSpaceConfig {
    fn default() -> Self {
        Self { k: DEFAULT_K, policy: DegeneracyPolicy::default() }
    }
}

/// Filters the k nearest neighbors of a point down to the mutually visible ones.
#[derive(Clone, Copy, Debug, Default)]
pub struct HalfSpaceClassifier {
    pub config: HalfSpaceConfig,
}

impl HalfSpaceClassifier {
    pub fn new(config: HalfSpaceConfig) -> Self {
        Self { config }
    }

    pub fn with_k(k: usize) -> Self {
        Self::new(HalfSpaceConfig { k, ..HalfSpaceConfig::default() })
    }

    /// Half-space neighbors of `points[center]`, in nearest-first candidate order.
    ///
    /// The index `I` is built over every point except the center, fresh for this call.
    ///
    /// # Errors
    /// - [`NeighborError::OutOfRange`] if `center >= points.len()`.
    /// - [`NeighborError::InsufficientPoints`] if `k > points.len() - 1`.
    /// - [`NeighborError::DegenerateGeometry`] under [`DegeneracyPolicy::Reject`] when the
    ///   center and its candidates contain coincident points.
    pub fn classify<I, const D: usize>(
        &self,
        points: &PointSet<D>,
        center: usize,
    ) -> Result<NeighborResult<D>, NeighborError>
    where
        I: NearestNeighborIndex<D>,
    {
        let k = self.config.k;
        let p = points.point(center)?;
        let available = points.len() - 1;
        if k > available {
            return Err(NeighborError::InsufficientPoints { requested: k, available });
        }

        let others = points.without(center);
        let index = {
            let _t = Timed::debug("nearest-neighbor index build");
            I::build(&others)
        };

        // Positions in `others` skip the center.
        let nearest: Vec<usize> = index
            .query(&p, k)?
            .into_iter()
            .map(|i| if i < center { i } else { i + 1 })
            .collect();

        let mut involved = nearest.clone();
        involved.push(center);
        let degeneracies = self.config.policy.apply(points.coincident_pairs_among(&involved))?;

        let accepted: Vec<usize> = nearest
            .iter()
            .copied()
            .filter(|&i| nearest.iter().all(|&j| in_half_space(&points[i], &points[j], &p)))
            .collect();

        log::debug!(
            "point {}: {} of {} nearest candidates are half-space neighbors",
            center,
            accepted.len(),
            k
        );
        Ok(NeighborResult::gather(points, accepted, degeneracies))
    }
}

/// Whether `x` lies in the half-space induced by `q` relative to `p`: `(x - q) . (p - q) >= 0`.
///
/// Boundary points (and `x == q`) are inside; a NaN product is not.
pub fn in_half_space<const D: usize>(x: &[f64; D], q: &[f64; D], p: &[f64; D]) -> bool {
    let mut dot = 0.0;
    for axis in 0..D {
        dot += (x[axis] - q[axis]) * (p[axis] - q[axis]);
    }
    dot >= 0.0
}

/// Half-space neighbor coordinates of `points[center]` among its `k` nearest neighbors,
/// using a kd-tree and the default degeneracy policy.
pub fn bsp_neighbors<const D: usize>(
    points: &PointSet<D>,
    center: usize,
    k: usize,
) -> Result<PointSet<D>, NeighborError> {
    HalfSpaceClassifier::with_k(k)
        .classify::<KdTree<D>, D>(points, center)
        .map(|result| result.points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knn::brute::BruteForceIndex;

    #[test]
    fn test_half_space_predicate() {
        let p = [0.0, 0.0];
        let q = [1.0, 0.0];
        assert!(in_half_space(&[0.5, 3.0], &q, &p));
        assert!(in_half_space(&[1.0, 5.0], &q, &p)); // on the plane
        assert!(in_half_space(&q, &q, &p));
        assert!(!in_half_space(&[2.0, 0.0], &q, &p));
        assert!(!in_half_space(&[f64::NAN, 0.0], &q, &p));
    }

    #[test]
    fn test_axis_candidates_all_visible() {
        let points = PointSet::new(vec![[0.0, 0.0], [1.0, 0.0], [-1.0, 0.0], [0.0, 1.0]]);
        let result = HalfSpaceClassifier::with_k(3)
            .classify::<BruteForceIndex<2>, 2>(&points, 0)
            .unwrap();
        assert_eq!(result.len(), 3);
        assert!(!result.is_degenerate());
    }

    #[test]
    fn test_hidden_candidate_rejected() {
        // (2, 0) lies behind (1, 0) as seen from the origin
        let points = PointSet::new(vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [0.0, 1.5]]);
        let result = HalfSpaceClassifier::with_k(3)
            .classify::<BruteForceIndex<2>, 2>(&points, 0)
            .unwrap();
        assert_eq!(result.indices, vec![1, 3]);
        assert_eq!(result.points.as_slice(), &[[1.0, 0.0], [0.0, 1.5]]);
    }

    #[test]
    fn test_k_zero_is_empty() {
        let points = PointSet::new(vec![[0.0, 0.0], [1.0, 0.0]]);
        let result = HalfSpaceClassifier::with_k(0)
            .classify::<BruteForceIndex<2>, 2>(&points, 1)
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_errors() {
        let points = PointSet::new(vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]);
        let classifier = HalfSpaceClassifier::with_k(2);
        assert!(matches!(
            classifier.classify::<KdTree<2>, 2>(&points, 3),
            Err(NeighborError::OutOfRange { index: 3, len: 3 })
        ));
        assert!(matches!(
            HalfSpaceClassifier::with_k(3).classify::<KdTree<2>, 2>(&points, 0),
            Err(NeighborError::InsufficientPoints { requested: 3, available: 2 })
        ));
    }

    #[test]
    fn test_duplicates_reported_or_rejected() {
        let points = PointSet::new(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);

        let report = HalfSpaceClassifier::with_k(3)
            .classify::<BruteForceIndex<2>, 2>(&points, 0)
            .unwrap();
        // The zero vector between the duplicates passes the inclusive test.
        assert_eq!(report.indices, vec![1, 2, 3]);
        assert_eq!(report.degeneracies.len(), 1);
        assert_eq!((report.degeneracies[0].first, report.degeneracies[0].second), (1, 2));

        let strict = HalfSpaceClassifier::new(HalfSpaceConfig { k: 3, policy: DegeneracyPolicy::Reject });
        assert!(matches!(
            strict.classify::<BruteForceIndex<2>, 2>(&points, 0),
            Err(NeighborError::DegenerateGeometry { first: 1, second: 2 })
        ));
    }
}
