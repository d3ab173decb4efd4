use crate::bounds::BoundingBox;

/// Upper limit on bins per axis.
const MAX_RES: usize = 1024;

/// A uniform grid over the seeds of a diagram, used to visit nearby seeds in
/// order of increasing bin distance.
pub struct SeedGrid {
    /// Number of bins along the X axis.
    res_x: usize,
    /// Number of bins along the Y axis.
    res_y: usize,
    /// Scale factors from coordinates to bin index.
    scale: [f64; 2],
    /// Maximum valid fractional index per axis.
    limit: [f64; 2],
    min: [f64; 2],
    /// The grid bins, each containing a list of seed indices.
    bins: Vec<Vec<usize>>,
    /// Map from seed index to its bin index.
    seed_bins: Vec<usize>,
    /// Bin offsets sorted by the smallest squared distance any two points in the two bins can have.
    search_order: Vec<(isize, isize, f64)>,
}

impl SeedGrid {
    /// Bins `seeds` over `bounds`, aiming for about two seeds per bin.
    pub fn new(seeds: &[[f64; 2]], bounds: &BoundingBox<2>) -> Self {
        let [w, h] = bounds.size();
        let target = (seeds.len() as f64 / 2.0).max(1.0);
        let res_x = ((target * w / h).sqrt().ceil() as usize).clamp(1, MAX_RES);
        let res_y = ((target * h / w).sqrt().ceil() as usize).clamp(1, MAX_RES);

        let scale = [res_x as f64 / w, res_y as f64 / h];
        let cell_size = [w / res_x as f64, h / res_y as f64];

        let min_dist_sq = |dx: isize, dy: isize| {
            let mx = (dx.unsigned_abs().saturating_sub(1)) as f64 * cell_size[0];
            let my = (dy.unsigned_abs().saturating_sub(1)) as f64 * cell_size[1];
            mx * mx + my * my
        };

        let (rx, ry) = (res_x as isize, res_y as isize);
        let mut search_order = Vec::with_capacity((2 * res_x + 1) * (2 * res_y + 1));
        for y in -ry..=ry {
            for x in -rx..=rx {
                search_order.push((x, y, min_dist_sq(x, y)));
            }
        }
        search_order.sort_by(|a, b| a.2.total_cmp(&b.2));

        let mut grid = SeedGrid {
            res_x,
            res_y,
            scale,
            limit: [res_x as f64 - 1e-5, res_y as f64 - 1e-5],
            min: bounds.min,
            bins: vec![Vec::new(); res_x * res_y],
            seed_bins: Vec::with_capacity(seeds.len()),
            search_order,
        };

        for (i, s) in seeds.iter().enumerate() {
            let bin = grid.bin_index(s);
            grid.bins[bin].push(i);
            grid.seed_bins.push(bin);
        }
        grid
    }

    /// Linear index of the bin containing `p`, clamped to the grid.
    pub fn bin_index(&self, p: &[f64; 2]) -> usize {
        let ix = ((p[0] - self.min[0]) * self.scale[0]).clamp(0.0, self.limit[0]) as usize;
        let iy = ((p[1] - self.min[1]) * self.scale[1]).clamp(0.0, self.limit[1]) as usize;
        ix + iy * self.res_x
    }

    /// Visit seeds that may clip the cell of seed `index`.
    ///
    /// Bins are visited nearest first until no remaining bin can hold a seed within
    /// twice the current cell radius. The visitor receives the seed index and position
    /// and returns the (possibly shrunk) squared radius.
    pub fn visit_neighbors<F>(&self, seeds: &[[f64; 2]], index: usize, max_dist_sq: &mut f64, mut visitor: F)
    where
        F: FnMut(usize, [f64; 2], f64) -> f64,
    {
        let bin = self.seed_bins[index];
        let bx = (bin % self.res_x) as isize;
        let by = (bin / self.res_x) as isize;

        for &(dx, dy, min_d2) in &self.search_order {
            if min_d2 > 4.0 * *max_dist_sq {
                break;
            }
            let (x, y) = (bx + dx, by + dy);
            if x < 0 || y < 0 || x >= self.res_x as isize || y >= self.res_y as isize {
                continue;
            }
            for &j in &self.bins[x as usize + y as usize * self.res_x] {
                if j == index { continue; }
                *max_dist_sq = visitor(j, seeds[j], *max_dist_sq);
            }
        }
    }
}
