use crate::bounds::SubdivisionRegion;
use crate::error::NeighborError;

mod cell;
pub mod clipped;
pub mod delaunay;
mod grid;

pub use cell::Cell2D;

/// Trait defining a planar Voronoi subdivision built once from an ordered seed list.
/// This allows swapping between a bounded clipping builder and a Delaunay dual.
///
/// Seed ids are positions in the slice passed to [`PlanarSubdivision::build`]. A built
/// diagram is immutable, so every call to its iterators yields the same sequence.
pub trait PlanarSubdivision: Send + Sync + Sized {
    /// Build the full diagram of `seeds` inside `region`.
    fn build(seeds: &[[f64; 2]], region: &SubdivisionRegion) -> Result<Self, NeighborError>;

    /// Number of seeds.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Seeds whose cells share an edge with the cell of `seed`, in counter-clockwise
    /// order around it. Empty for unknown seeds.
    fn neighbor_ids(&self, seed: usize) -> impl Iterator<Item = usize> + '_;

    /// Vertices of the subdivision, for visualization.
    fn vertices(&self) -> impl Iterator<Item = [f64; 2]> + '_;
}
