/// Bijection between original point indices and the canonical diagram input order.
///
/// The canonical order sorts seeds by ascending `y`, then ascending `x`, then by original
/// index, so it is total and deterministic even with repeated coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Permutation {
    // sorted position -> original index
    to_original: Vec<usize>,
    // original index -> sorted position
    to_sorted: Vec<usize>,
}

impl Permutation {
    /// Computes the canonical order of `points` without touching them.
    pub fn sort_by_y_then_x(points: &[[f64; 2]]) -> Self {
        let mut to_original: Vec<usize> = (0..points.len()).collect();
        // Stable, so equal (y, x) keep their original relative order.
        to_original.sort_by(|&a, &b| {
            let (pa, pb) = (points[a], points[b]);
            pa[1].total_cmp(&pb[1]).then(pa[0].total_cmp(&pb[0]))
        });

        let mut to_sorted = vec![0; to_original.len()];
        for (sorted, &original) in to_original.iter().enumerate() {
            to_sorted[original] = sorted;
        }

        Permutation { to_original, to_sorted }
    }

    pub fn len(&self) -> usize {
        self.to_original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_original.is_empty()
    }

    /// Sorted position of the point with the given original index.
    pub fn forward(&self, original: usize) -> Option<usize> {
        self.to_sorted.get(original).copied()
    }

    /// Original index of the point at the given sorted position.
    pub fn inverse(&self, sorted: usize) -> Option<usize> {
        self.to_original.get(sorted).copied()
    }

    /// Gathers `values` into sorted order.
    pub fn apply<T: Copy>(&self, values: &[T]) -> Vec<T> {
        self.to_original.iter().map(|&i| values[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_y_then_x() {
        let points = [[3.0, 1.0], [0.0, 0.0], [1.0, 1.0], [2.0, 0.0]];
        let perm = Permutation::sort_by_y_then_x(&points);

        assert_eq!(perm.apply(&points), vec![[0.0, 0.0], [2.0, 0.0], [1.0, 1.0], [3.0, 1.0]]);
        assert_eq!(perm.forward(0), Some(3));
        assert_eq!(perm.inverse(3), Some(0));
        assert_eq!(perm.forward(4), None);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let points = [[1.0, 1.0], [0.0, 0.0], [1.0, 1.0], [1.0, 1.0]];
        let perm = Permutation::sort_by_y_then_x(&points);
        let order: Vec<usize> = (0..4).map(|s| perm.inverse(s).unwrap()).collect();
        assert_eq!(order, vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_nan_coordinates_sort_without_panic() {
        let points = [[f64::NAN, 1.0], [0.0, f64::NAN], [2.0, 0.0], [1.0, 0.0], [0.0, -f64::NAN]];
        let perm = Permutation::sort_by_y_then_x(&points);
        let order: Vec<usize> = (0..5).map(|s| perm.inverse(s).unwrap()).collect();
        assert_eq!(order, vec![4, 3, 2, 0, 1]);
    }

    #[test]
    fn test_forward_inverse_bijection() {
        let points: Vec<[f64; 2]> = (0..50)
            .map(|i| [((i * 37) % 11) as f64, ((i * 13) % 7) as f64])
            .collect();
        let perm = Permutation::sort_by_y_then_x(&points);
        for i in 0..points.len() {
            assert_eq!(perm.inverse(perm.forward(i).unwrap()), Some(i));
        }
    }
}
