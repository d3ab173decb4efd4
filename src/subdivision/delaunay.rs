use crate::bounds::SubdivisionRegion;
use crate::error::NeighborError;
use crate::subdivision::PlanarSubdivision;
use crate::timing::Timed;
use delaunator::{EMPTY, Point, next_halfedge, triangulate};

/// Relative distance below which two circumcenters are the same Voronoi vertex.
const COLLAPSE_EPS: f64 = 1e-9;

/// A Voronoi diagram read off its dual Delaunay triangulation.
///
/// Two seeds are neighbors iff they share a Delaunay edge whose dual Voronoi edge has
/// positive length; a diagonal between co-circular seeds does not count. Adjacency is
/// unbounded: cells that would only meet outside the working region still count. Diagram vertices
/// are the triangle circumcenters. Fully collinear input has no triangles; each seed is
/// then adjacent to its predecessor and successor along the line.
pub struct DelaunayDiagram {
    neighbors: Vec<Vec<usize>>,
    circumcenters: Vec<[f64; 2]>,
}

impl PlanarSubdivision for DelaunayDiagram {
    fn build(seeds: &[[f64; 2]], _region: &SubdivisionRegion) -> Result<Self, NeighborError> {
        let _t = Timed::debug("delaunay diagram build");

        let points: Vec<Point> = seeds.iter().map(|s| Point { x: s[0], y: s[1] }).collect();
        let triangulation = triangulate(&points);

        let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); seeds.len()];
        let circumcenters: Vec<[f64; 2]> = triangulation
            .triangles
            .chunks_exact(3)
            .map(|t| circumcenter(&seeds[t[0]], &seeds[t[1]], &seeds[t[2]]))
            .collect();

        if triangulation.triangles.is_empty() {
            // The hull of collinear input lists the seeds in order along the line.
            for pair in triangulation.hull.windows(2) {
                neighbors[pair[0]].push(pair[1]);
                neighbors[pair[1]].push(pair[0]);
            }
        } else {
            for (e, &a) in triangulation.triangles.iter().enumerate() {
                let twin = triangulation.halfedges[e];
                // Interior edges are seen from both sides; handle each once.
                if twin != EMPTY && twin < e {
                    continue;
                }
                let b = triangulation.triangles[next_halfedge(e)];
                if twin != EMPTY {
                    // Co-circular seeds: the dual Voronoi edge has collapsed to a point.
                    let (c0, c1) = (circumcenters[e / 3], circumcenters[twin / 3]);
                    let gap_sq = (c0[0] - c1[0]).powi(2) + (c0[1] - c1[1]).powi(2);
                    let scale_sq = (seeds[a][0] - seeds[b][0]).powi(2) + (seeds[a][1] - seeds[b][1]).powi(2);
                    if gap_sq <= COLLAPSE_EPS * COLLAPSE_EPS * scale_sq {
                        log::trace!("seeds {} and {} meet only at a vertex", a, b);
                        continue;
                    }
                }
                neighbors[a].push(b);
                neighbors[b].push(a);
            }
        }

        for (i, list) in neighbors.iter_mut().enumerate() {
            let s = seeds[i];
            list.sort_by(|&a, &b| {
                let angle_a = (seeds[a][1] - s[1]).atan2(seeds[a][0] - s[0]);
                let angle_b = (seeds[b][1] - s[1]).atan2(seeds[b][0] - s[0]);
                angle_a.total_cmp(&angle_b).then(a.cmp(&b))
            });
            list.dedup();
        }

        Ok(DelaunayDiagram { neighbors, circumcenters })
    }

    fn len(&self) -> usize {
        self.neighbors.len()
    }

    fn neighbor_ids(&self, seed: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors.get(seed).into_iter().flatten().copied()
    }

    fn vertices(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.circumcenters.iter().copied()
    }
}

fn circumcenter(a: &[f64; 2], b: &[f64; 2], c: &[f64; 2]) -> [f64; 2] {
    let (bx, by) = (b[0] - a[0], b[1] - a[1]);
    let (cx, cy) = (c[0] - a[0], c[1] - a[1]);
    let b2 = bx * bx + by * by;
    let c2 = cx * cx + cy * cy;
    let d = 2.0 * (bx * cy - by * cx);
    [a[0] + (cy * b2 - by * c2) / d, a[1] + (bx * c2 - cx * b2) / d]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::{BoundingBox, ExtentMode};

    fn build(seeds: &[[f64; 2]]) -> DelaunayDiagram {
        let bounds = BoundingBox::from_points(seeds.iter()).unwrap();
        DelaunayDiagram::build(seeds, &SubdivisionRegion::from_bounds(&bounds, ExtentMode::Absolute)).unwrap()
    }

    #[test]
    fn test_circumcenter() {
        let c = circumcenter(&[0.0, 0.0], &[2.0, 0.0], &[0.0, 2.0]);
        assert!((c[0] - 1.0).abs() < 1e-12);
        assert!((c[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_center_of_square() {
        let seeds = [[25.0, 25.0], [75.0, 25.0], [50.0, 50.0], [25.0, 75.0], [75.0, 75.0]];
        let diagram = build(&seeds);
        // Counter-clockwise from the negative x axis
        assert_eq!(diagram.neighbor_ids(2).collect::<Vec<_>>(), vec![0, 1, 4, 3]);
        assert_eq!(diagram.vertices().count(), 4);
    }

    #[test]
    fn test_cocircular_diagonal_is_not_an_edge() {
        let square = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
        let diagram = build(&square);
        for seed in 0..4 {
            assert_eq!(diagram.neighbor_ids(seed).count(), 2, "seed {}", seed);
        }
        let mut n1: Vec<usize> = diagram.neighbor_ids(1).collect();
        n1.sort();
        assert_eq!(n1, vec![0, 3]);
    }

    #[test]
    fn test_grid_center_has_four_neighbors() {
        let mut seeds = Vec::new();
        for y in 0..3 {
            for x in 0..3 {
                seeds.push([x as f64, y as f64]);
            }
        }
        let diagram = build(&seeds);
        let mut center: Vec<usize> = diagram.neighbor_ids(4).collect();
        center.sort();
        assert_eq!(center, vec![1, 3, 5, 7]);
        for corner in [0, 2, 6, 8] {
            assert_eq!(diagram.neighbor_ids(corner).count(), 2, "corner {}", corner);
        }
    }

    #[test]
    fn test_collinear_chain() {
        let seeds = [[2.0, 0.0], [0.0, 0.0], [3.0, 0.0], [1.0, 0.0]];
        let diagram = build(&seeds);
        let mut n0: Vec<usize> = diagram.neighbor_ids(0).collect();
        n0.sort();
        assert_eq!(n0, vec![2, 3]);
        assert_eq!(diagram.neighbor_ids(1).collect::<Vec<_>>(), vec![3]);
        assert_eq!(diagram.vertices().count(), 0);
    }
}
