//! # point-neighbors
//!
//! `point-neighbors` classifies the local neighbors of a query point inside an unordered
//! point cloud under two geometric definitions used in surface reconstruction:
//!
//! - **Half-space (BSP) neighbors**: the subset of the k nearest neighbors that remain
//!   mutually visible under pairwise half-space tests ([`HalfSpaceClassifier`]).
//! - **Voronoi neighbors**: the seeds whose cells border the query's cell in the planar
//!   Voronoi diagram of the whole set ([`VoronoiClassifier`]).
//!
//! Both classifiers are pure: every call builds its own nearest-neighbor index or diagram
//! and returns copies of the neighbor coordinates together with their indices.
//!
//! ## Collaborators
//!
//! The nearest-neighbor index and the planar subdivision are traits
//! ([`NearestNeighborIndex`], [`PlanarSubdivision`]) so implementations can be swapped:
//! [`BruteForceIndex`] or [`KdTree`], and [`ClippedDiagram`] (bounded by the working
//! region) or [`DelaunayDiagram`] (unbounded Delaunay dual).
//!
//! ## Example
//!
//! ```
//! use point_neighbors::{PointSet, bsp_neighbors, voronoi_neighbors};
//!
//! let points = PointSet::new(vec![
//!     [50.0, 50.0], [25.0, 25.0], [75.0, 25.0], [25.0, 75.0], [75.0, 75.0],
//! ]);
//! assert_eq!(voronoi_neighbors(&points, 0).unwrap().len(), 4);
//! assert_eq!(bsp_neighbors(&points, 0, 4).unwrap().len(), 4);
//! ```

mod bounds;
mod error;
mod halfspace;
pub mod io;
pub mod knn;
mod permutation;
mod points;
mod result;
pub mod subdivision;
mod timing;
mod voronoi;
mod wasm;

pub use bounds::BoundingBox;
pub use bounds::ExtentMode;
pub use bounds::SubdivisionRegion;
pub use bounds::box_side;
pub use error::Degeneracy;
pub use error::DegeneracyPolicy;
pub use error::NeighborError;
pub use halfspace::DEFAULT_K;
pub use halfspace::HalfSpaceClassifier;
pub use halfspace::HalfSpaceConfig;
pub use halfspace::bsp_neighbors;
pub use halfspace::in_half_space;
pub use knn::NearestNeighborIndex;
pub use knn::brute::BruteForceIndex;
pub use knn::kdtree::KdTree;
pub use permutation::Permutation;
pub use points::PointSet;
pub use result::NeighborResult;
pub use subdivision::PlanarSubdivision;
pub use subdivision::clipped::ClippedDiagram;
pub use subdivision::delaunay::DelaunayDiagram;
pub use voronoi::VoronoiClassifier;
pub use voronoi::VoronoiConfig;
pub use voronoi::voronoi_neighbors;
