use crate::bounds::BoundingBox;
use crate::error::{Degeneracy, NeighborError};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::cmp::Ordering;
use std::ops::Index;

/// An ordered, index-stable collection of D-dimensional points.
///
/// The position of a point is its identity: sets are never reordered or shrunk in place,
/// derived sets (such as [`PointSet::without`]) are always fresh copies.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet<const D: usize> {
    points: Vec<[f64; D]>,
}

impl<const D: usize> PointSet<D> {
    pub fn new(points: Vec<[f64; D]>) -> Self {
        Self { points }
    }

    /// Builds a set from a flat coordinate array `[x, y, (z), x, y, (z), ...]`.
    ///
    /// Trailing values that do not form a full point are ignored.
    pub fn from_flat(coords: &[f64]) -> Self {
        let points = coords
            .chunks_exact(D)
            .map(|c| {
                let mut p = [0.0; D];
                p.copy_from_slice(c);
                p
            })
            .collect();
        Self { points }
    }

    pub fn to_flat(&self) -> Vec<f64> {
        self.points.iter().flat_map(|p| p.iter().copied()).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[f64; D]> {
        self.points.get(index)
    }

    /// Returns the point at `index`, or [`NeighborError::OutOfRange`].
    pub fn point(&self, index: usize) -> Result<[f64; D], NeighborError> {
        self.points
            .get(index)
            .copied()
            .ok_or(NeighborError::OutOfRange { index, len: self.points.len() })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, [f64; D]> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[[f64; D]] {
        &self.points
    }

    /// A fresh set holding every point except the one at `index`, in the same relative order.
    pub fn without(&self, index: usize) -> Self {
        let points = self
            .points
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, p)| *p)
            .collect();
        Self { points }
    }

    /// Copies the points at `indices`, in that order.
    pub fn select(&self, indices: &[usize]) -> Self {
        Self { points: indices.iter().map(|&i| self.points[i]).collect() }
    }

    /// Index of the first point with a NaN or infinite coordinate.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.points.iter().position(|p| p.iter().any(|v| !v.is_finite()))
    }

    /// Axis-aligned bounds of the set, `None` when empty.
    pub fn bounds(&self) -> Option<BoundingBox<D>> {
        BoundingBox::from_points(self.points.iter())
    }

    /// Every pair of points with identical coordinates, ordered by `(first, second)`.
    ///
    /// Each repeated point is paired with the lowest index sharing its coordinates.
    pub fn coincident_pairs(&self) -> Vec<Degeneracy> {
        let all: Vec<usize> = (0..self.points.len()).collect();
        self.coincident_pairs_among(&all)
    }

    /// Like [`PointSet::coincident_pairs`], restricted to the points at `indices`.
    pub fn coincident_pairs_among(&self, indices: &[usize]) -> Vec<Degeneracy> {
        let mut order = indices.to_vec();
        order.sort_by(|&a, &b| lexicographic(&self.points[a], &self.points[b]).then(a.cmp(&b)));
        order.dedup();

        let mut pairs = Vec::new();
        let mut run_start = 0;
        for i in 1..order.len() {
            if self.points[order[i]] == self.points[order[run_start]] {
                pairs.push(Degeneracy { first: order[run_start], second: order[i] });
            } else {
                run_start = i;
            }
        }
        pairs.sort_by_key(|d| (d.first, d.second));
        pairs
    }

    /// Uniformly distributed points inside `bounds`, reproducible from `seed`.
    pub fn random(count: usize, bounds: &BoundingBox<D>, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let size = bounds.size();
        let points = (0..count)
            .map(|_| {
                let mut p = [0.0; D];
                for axis in 0..D {
                    p[axis] = bounds.min[axis] + rng.r#gen::<f64>() * size[axis];
                }
                p
            })
            .collect();
        Self { points }
    }
}

impl PointSet<3> {
    /// Orthogonal projection onto the z = 0 plane.
    pub fn project_xy(&self) -> PointSet<2> {
        PointSet { points: self.points.iter().map(|p| [p[0], p[1]]).collect() }
    }
}

impl PointSet<2> {
    /// Embeds the set in 3D at z = 0.
    pub fn lift(&self) -> PointSet<3> {
        PointSet { points: self.points.iter().map(|p| [p[0], p[1], 0.0]).collect() }
    }
}

impl<const D: usize> Index<usize> for PointSet<D> {
    type Output = [f64; D];

    fn index(&self, index: usize) -> &[f64; D] {
        &self.points[index]
    }
}

impl<const D: usize> From<Vec<[f64; D]>> for PointSet<D> {
    fn from(points: Vec<[f64; D]>) -> Self {
        Self { points }
    }
}

impl<const D: usize> FromIterator<[f64; D]> for PointSet<D> {
    fn from_iter<I: IntoIterator<Item = [f64; D]>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl<'a, const D: usize> IntoIterator for &'a PointSet<D> {
    type Item = &'a [f64; D];
    type IntoIter = std::slice::Iter<'a, [f64; D]>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Total lexicographic order; `-0.0` and `0.0` compare equal, NaN sorts to the ends.
fn lexicographic<const D: usize>(a: &[f64; D], b: &[f64; D]) -> Ordering {
    for axis in 0..D {
        match (a[axis] + 0.0).total_cmp(&(b[axis] + 0.0)) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Squared Euclidean distance.
pub(crate) fn dist_sq<const D: usize>(a: &[f64; D], b: &[f64; D]) -> f64 {
    let mut d2 = 0.0;
    for axis in 0..D {
        let d = a[axis] - b[axis];
        d2 += d * d;
    }
    d2
}
