use crate::error::Degeneracy;
use crate::points::PointSet;

/// Neighbors of one query point, in the order the classifier reports them.
///
/// `indices` address the caller's point set; `points` holds copies of those coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NeighborResult<const D: usize> {
    pub indices: Vec<usize>,
    pub points: PointSet<D>,
    /// Coincident pairs among the points involved in the call (only under
    /// [`DegeneracyPolicy::Report`](crate::DegeneracyPolicy::Report)).
    pub degeneracies: Vec<Degeneracy>,
}

impl<const D: usize> NeighborResult<D> {
    pub(crate) fn gather(source: &PointSet<D>, indices: Vec<usize>, degeneracies: Vec<Degeneracy>) -> Self {
        let points = source.select(&indices);
        Self { indices, points, degeneracies }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn is_degenerate(&self) -> bool {
        !self.degeneracies.is_empty()
    }
}
