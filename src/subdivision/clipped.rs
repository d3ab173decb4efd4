use crate::bounds::SubdivisionRegion;
use crate::error::NeighborError;
use crate::subdivision::PlanarSubdivision;
use crate::subdivision::cell::{Cell2D, CellScratch};
use crate::subdivision::grid::SeedGrid;
use crate::timing::Timed;
use rayon::prelude::*;

/// A Voronoi diagram bounded by its working region.
///
/// Each seed's cell starts as the whole region and is clipped by the perpendicular
/// bisectors of nearby seeds, found through a uniform grid. Cells are computed
/// independently (in parallel), then adjacency is made reciprocal: a pair is kept only
/// if both cells report the shared edge.
pub struct ClippedDiagram {
    cells: Vec<Cell2D>,
    neighbors: Vec<Vec<usize>>,
}

impl ClippedDiagram {
    /// The polygon of a seed's cell, counter-clockwise.
    pub fn cell(&self, seed: usize) -> Option<&Cell2D> {
        self.cells.get(seed)
    }

    pub fn cells(&self) -> &[Cell2D] {
        &self.cells
    }
}

impl PlanarSubdivision for ClippedDiagram {
    fn build(seeds: &[[f64; 2]], region: &SubdivisionRegion) -> Result<Self, NeighborError> {
        let bounds = region.to_bounds();
        let [width, height] = bounds.size();
        // Also rejects NaN extents
        if !(width > 0.0 && height > 0.0) {
            return Err(NeighborError::EmptyRegion { width, height });
        }

        let _t = Timed::debug("clipped diagram build");
        let grid = SeedGrid::new(seeds, &bounds);

        let cells: Vec<Cell2D> = (0..seeds.len())
            .into_par_iter()
            .map_init(CellScratch::default, |scratch, i| {
                let g = seeds[i];
                let mut cell = Cell2D::new(&bounds);
                let mut max_dist_sq = cell.max_radius_sq(&g);

                grid.visit_neighbors(seeds, i, &mut max_dist_sq, |j, s, cur_dist| {
                    let dx = s[0] - g[0];
                    let dy = s[1] - g[1];
                    let dist_sq = dx * dx + dy * dy;
                    // Coincident seeds have no bisector
                    if dist_sq == 0.0 || dist_sq > 4.0 * cur_dist {
                        return cur_dist;
                    }

                    let mid = [g[0] + dx * 0.5, g[1] + dy * 0.5];
                    match cell.clip(&mid, &[dx, dy], j as i32, scratch, &g) {
                        (true, new_radius) => new_radius,
                        (false, _) => cur_dist,
                    }
                });
                cell
            })
            .collect();

        let raw: Vec<Vec<usize>> = cells.iter().map(Cell2D::neighbor_seeds).collect();
        let neighbors = raw
            .iter()
            .enumerate()
            .map(|(i, list)| {
                list.iter()
                    .copied()
                    .filter(|&j| {
                        let reciprocal = raw[j].contains(&i);
                        if !reciprocal {
                            log::trace!("dropping one-sided adjacency {} -> {}", i, j);
                        }
                        reciprocal
                    })
                    .collect::<Vec<usize>>()
            })
            .collect();

        Ok(ClippedDiagram { cells, neighbors })
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn neighbor_ids(&self, seed: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors.get(seed).into_iter().flatten().copied()
    }

    fn vertices(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.cells.iter().flat_map(|c| c.vertices().iter().copied())
    }
}
