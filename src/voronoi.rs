//! Voronoi neighbors in the plane.
//!
//! The diagram of the whole point set is built once per call, from the seeds in
//! canonical (y, then x) order; adjacency of the query seed is then mapped back to
//! the caller's indices.

use crate::bounds::{ExtentMode, SubdivisionRegion};
use crate::error::{DegeneracyPolicy, NeighborError};
use crate::permutation::Permutation;
use crate::points::PointSet;
use crate::result::NeighborResult;
use crate::subdivision::PlanarSubdivision;
use crate::subdivision::clipped::ClippedDiagram;
use crate::timing::Timed;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoronoiConfig {
    /// How the region's extent is expressed to the subdivision builder.
    pub extent: ExtentMode,
    /// Absolute margin added on every side of the point bounds.
    pub padding: f64,
    pub policy: DegeneracyPolicy,
}

impl Default for VoronoiConfig {
    fn default() -> Self {
        Self {
            extent: ExtentMode::default(),
            padding: 0.0,
            policy: DegeneracyPolicy::default(),
        }
    }
}

/// Finds the seeds whose Voronoi cells border the cell of a query point.
#[derive(Clone, Copy, Debug, Default)]
pub struct VoronoiClassifier {
    pub config: VoronoiConfig,
}

impl VoronoiClassifier {
    pub fn new(config: VoronoiConfig) -> Self {
        Self { config }
    }

    /// Working region for `points`: their bounds grown by the configured padding.
    pub fn region(&self, points: &PointSet<2>) -> Option<SubdivisionRegion> {
        let bounds = points.bounds()?.padded(self.config.padding);
        Some(SubdivisionRegion::from_bounds(&bounds, self.config.extent))
    }

    /// Voronoi neighbors of `points[center]`, in the adjacency order of the diagram `S`.
    ///
    /// # Errors
    /// - [`NeighborError::OutOfRange`] if `center >= points.len()`.
    /// - [`NeighborError::InsufficientPoints`] if there is no other point.
    /// - [`NeighborError::DegenerateGeometry`] under [`DegeneracyPolicy::Reject`] when any
    ///   two points coincide.
    /// - [`NeighborError::NonFinite`] if any coordinate is NaN or infinite.
    /// - Any error of the diagram builder, e.g. [`NeighborError::EmptyRegion`].
    pub fn classify<S: PlanarSubdivision>(
        &self,
        points: &PointSet<2>,
        center: usize,
    ) -> Result<NeighborResult<2>, NeighborError> {
        points.point(center)?;
        if points.len() < 2 {
            return Err(NeighborError::InsufficientPoints { requested: 1, available: 0 });
        }
        if let Some(index) = points.first_non_finite() {
            return Err(NeighborError::NonFinite { index });
        }
        let degeneracies = self.config.policy.apply(points.coincident_pairs())?;

        let region = self.region(points).ok_or(NeighborError::InsufficientPoints {
            requested: 1,
            available: 0,
        })?;
        log::debug!("subdivision origin {:?}, extent {:?} ({:?})", region.origin, region.extent, region.mode);

        let permutation = Permutation::sort_by_y_then_x(points.as_slice());
        let seeds = permutation.apply(points.as_slice());
        let diagram = {
            let _t = Timed::debug("voronoi diagram build");
            S::build(&seeds, &region)?
        };

        let sorted_center = permutation
            .forward(center)
            .ok_or(NeighborError::OutOfRange { index: center, len: points.len() })?;
        log::trace!("point {} is seed {} in diagram order", center, sorted_center);

        let indices: Vec<usize> = diagram
            .neighbor_ids(sorted_center)
            .filter_map(|seed| permutation.inverse(seed))
            .filter(|&i| i != center)
            .collect();

        log::debug!("point {}: {} voronoi neighbors", center, indices.len());
        Ok(NeighborResult::gather(points, indices, degeneracies))
    }
}

/// Voronoi neighbor coordinates of `points[center]`, using the bounded clipping
/// diagram and the default configuration.
pub fn voronoi_neighbors(points: &PointSet<2>, center: usize) -> Result<PointSet<2>, NeighborError> {
    VoronoiClassifier::default()
        .classify::<ClippedDiagram>(points, center)
        .map(|result| result.points)
}
