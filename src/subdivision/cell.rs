use crate::bounds::{BoundingBox, box_side};

/// Relative tolerance for plane-side tests and vertex merging.
const CLIP_EPS: f64 = 1e-9;

/// Scratch buffer to reuse allocations during clipping.
#[derive(Default, Clone)]
pub struct CellScratch {
    vertices: Vec<[f64; 2]>,
    neighbors: Vec<i32>,
    dists: Vec<f64>,
}

/// A bounded 2D Voronoi cell represented as a counter-clockwise polygon.
///
/// Every edge remembers what produced it: a seed id (`>= 0`) for bisector edges,
/// or a [`box_side`] id for the region boundary.
#[derive(Clone, Debug)]
pub struct Cell2D {
    vertices: Vec<[f64; 2]>,
    // edge_neighbors[i] labels the edge from vertices[i] to vertices[i + 1]
    edge_neighbors: Vec<i32>,
    merge_tol_sq: f64,
}

impl Cell2D {
    /// A cell covering the whole region.
    pub fn new(bounds: &BoundingBox<2>) -> Cell2D {
        let [w, h] = bounds.size();
        let merge_tol = CLIP_EPS * (w * w + h * h).sqrt();

        Cell2D {
            vertices: vec![
                [bounds.min[0], bounds.min[1]], // Bottom-Left
                [bounds.max[0], bounds.min[1]], // Bottom-Right
                [bounds.max[0], bounds.max[1]], // Top-Right
                [bounds.min[0], bounds.max[1]], // Top-Left
            ],
            edge_neighbors: vec![
                box_side(1, false), // Bottom / Y-Min
                box_side(0, true),  // Right / X-Max
                box_side(1, true),  // Top / Y-Max
                box_side(0, false), // Left / X-Min
            ],
            merge_tol_sq: merge_tol * merge_tol,
        }
    }

    pub fn vertices(&self) -> &[[f64; 2]] {
        &self.vertices
    }

    pub fn edge_neighbors(&self) -> &[i32] {
        &self.edge_neighbors
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.len() < 3
    }

    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 { return 0.0; }

        let mut area = 0.0;
        for i in 0..n {
            let [xi, yi] = self.vertices[i];
            let [xj, yj] = self.vertices[(i + 1) % n];
            area += xi * yj - xj * yi;
        }
        (area * 0.5).abs()
    }

    /// Squared distance from `center` to the furthest vertex.
    pub fn max_radius_sq(&self, center: &[f64; 2]) -> f64 {
        self.vertices
            .iter()
            .map(|v| (v[0] - center[0]).powi(2) + (v[1] - center[1]).powi(2))
            .fold(0.0, f64::max)
    }

    /// Seed ids of the bisector edges in boundary order, without repeats.
    pub fn neighbor_seeds(&self) -> Vec<usize> {
        let mut seeds: Vec<usize> = Vec::with_capacity(self.edge_neighbors.len());
        for &id in &self.edge_neighbors {
            if id >= 0 && seeds.last() != Some(&(id as usize)) {
                seeds.push(id as usize);
            }
        }
        if seeds.len() > 1 && seeds.first() == seeds.last() {
            seeds.pop();
        }
        seeds
    }

    /// Keeps the part of the cell where `(x - point) . normal <= 0`.
    ///
    /// The new edge is labelled `neighbor_id`. Returns `(true, max_radius_sq)` measured from
    /// `generator` if the cell changed, `(false, 0.0)` otherwise. A cell clipped away
    /// entirely becomes empty and reports a radius of zero.
    pub(crate) fn clip(
        &mut self,
        point: &[f64; 2],
        normal: &[f64; 2],
        neighbor_id: i32,
        scratch: &mut CellScratch,
        generator: &[f64; 2],
    ) -> (bool, f64) {
        let num_verts = self.vertices.len();
        if num_verts < 3 { return (false, 0.0); }

        let tol = CLIP_EPS * (normal[0] * normal[0] + normal[1] * normal[1]);

        scratch.dists.clear();
        let mut all_inside = true;
        let mut all_outside = true;
        for v in &self.vertices {
            let d = (v[0] - point[0]) * normal[0] + (v[1] - point[1]) * normal[1];
            scratch.dists.push(d);
            if d > tol {
                all_inside = false;
            } else if d < -tol {
                all_outside = false;
            }
        }

        if all_inside { return (false, 0.0); }
        if all_outside {
            self.vertices.clear();
            self.edge_neighbors.clear();
            return (true, 0.0);
        }

        scratch.vertices.clear();
        scratch.neighbors.clear();

        for i in 0..num_verts {
            let j = (i + 1) % num_verts;
            let (d_i, d_j) = (scratch.dists[i], scratch.dists[j]);
            let neighbor = self.edge_neighbors[i];
            let i_inside = d_i <= tol;
            let j_inside = d_j <= tol;

            if i_inside {
                scratch.vertices.push(self.vertices[i]);
                scratch.neighbors.push(neighbor);
                if !j_inside {
                    // Leaving: the clipping edge starts at the crossing
                    scratch.vertices.push(crossing(&self.vertices[i], &self.vertices[j], d_i, d_j));
                    scratch.neighbors.push(neighbor_id);
                }
            } else if j_inside {
                // Entering: the remainder of edge i leads to vertex j
                scratch.vertices.push(crossing(&self.vertices[i], &self.vertices[j], d_i, d_j));
                scratch.neighbors.push(neighbor);
            }
        }

        std::mem::swap(&mut self.vertices, &mut scratch.vertices);
        std::mem::swap(&mut self.edge_neighbors, &mut scratch.neighbors);
        self.merge_short_edges();

        (true, self.max_radius_sq(generator))
    }

    /// Drops edges shorter than the merge tolerance so that cells touching at a single
    /// point are not reported as neighbors.
    fn merge_short_edges(&mut self) {
        let mut i = 0;
        while self.vertices.len() > 1 && i < self.vertices.len() {
            let j = (i + 1) % self.vertices.len();
            let a = self.vertices[i];
            let b = self.vertices[j];
            if (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) <= self.merge_tol_sq {
                // The edge into vertex i now ends at vertex j
                self.vertices.remove(i);
                self.edge_neighbors.remove(i);
            } else {
                i += 1;
            }
        }
        if self.vertices.len() < 3 {
            self.vertices.clear();
            self.edge_neighbors.clear();
        }
    }
}

fn crossing(a: &[f64; 2], b: &[f64; 2], d_a: f64, d_b: f64) -> [f64; 2] {
    let t = d_a / (d_a - d_b);
    [a[0] + t * (b[0] - a[0]), a[1] + t * (b[1] - a[1])]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cell() -> Cell2D {
        Cell2D::new(&BoundingBox::new([0.0, 0.0], [1.0, 1.0]))
    }

    #[test]
    fn test_cell2d_box() {
        let cell = unit_cell();
        assert!((cell.area() - 1.0).abs() < 1e-12);
        assert!(cell.neighbor_seeds().is_empty());
        assert!((cell.max_radius_sq(&[0.5, 0.5]) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_cell2d_clip() {
        let mut cell = unit_cell();
        let mut scratch = CellScratch::default();

        // Keeps x <= 0.5
        let (changed, r2) = cell.clip(&[0.5, 0.5], &[1.0, 0.0], 10, &mut scratch, &[0.25, 0.5]);

        assert!(changed);
        assert!((cell.area() - 0.5).abs() < 1e-12);
        assert!((r2 - (0.25f64.powi(2) + 0.5f64.powi(2))).abs() < 1e-12);
        assert_eq!(cell.neighbor_seeds(), vec![10]);
        assert_eq!(cell.vertices().len(), 4);
    }

    #[test]
    fn test_cell2d_clip_miss_and_full() {
        let mut cell = unit_cell();
        let mut scratch = CellScratch::default();

        assert_eq!(cell.clip(&[2.0, 0.0], &[1.0, 0.0], 3, &mut scratch, &[0.5, 0.5]), (false, 0.0));
        assert_eq!(cell.clip(&[-1.0, 0.0], &[1.0, 0.0], 3, &mut scratch, &[0.5, 0.5]), (true, 0.0));
        assert!(cell.is_empty());
    }

    #[test]
    fn test_clip_through_corner_leaves_no_sliver() {
        let mut cell = unit_cell();
        let mut scratch = CellScratch::default();

        // Diagonal through (0,1) and (1,0), keeping the lower-left triangle
        cell.clip(&[0.5, 0.5], &[1.0, 1.0], 4, &mut scratch, &[0.0, 0.0]);
        assert_eq!(cell.vertices().len(), 3);
        assert!((cell.area() - 0.5).abs() < 1e-12);

        // Another line through the corner (1,0) only touches it
        cell.clip(&[1.0, 0.0], &[1.0, -1.0], 7, &mut scratch, &[0.0, 0.0]);
        assert_eq!(cell.neighbor_seeds(), vec![4]);
    }
}
