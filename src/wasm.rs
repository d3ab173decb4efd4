use crate::bounds::ExtentMode;
use crate::error::{DegeneracyPolicy, NeighborError};
use crate::halfspace::{HalfSpaceClassifier, HalfSpaceConfig};
use crate::knn::kdtree::KdTree;
use crate::points::PointSet;
use crate::result::NeighborResult;
use crate::subdivision::clipped::ClippedDiagram;
use crate::subdivision::delaunay::DelaunayDiagram;
use crate::voronoi::{VoronoiClassifier, VoronoiConfig};
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = initThreads)]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

fn to_js(err: NeighborError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn policy(reject_degenerate: bool) -> DegeneracyPolicy {
    if reject_degenerate { DegeneracyPolicy::Reject } else { DegeneracyPolicy::Report }
}

/// Half-space neighbors of point `center` in a flat `[x, y, z, ...]` array.
/// Returns the neighbor coordinates, flat.
#[wasm_bindgen(js_name = bspNeighbors)]
pub fn bsp_neighbors(points: &[f64], center: usize, k: usize) -> Result<Vec<f64>, JsValue> {
    let set = PointSet::<3>::from_flat(points);
    crate::halfspace::bsp_neighbors(&set, center, k)
        .map(|n| n.to_flat())
        .map_err(to_js)
}

/// Voronoi neighbors of point `center` in a flat `[x, y, ...]` array.
/// Returns the neighbor coordinates, flat.
#[wasm_bindgen(js_name = voronoiNeighbors)]
pub fn voronoi_neighbors(points: &[f64], center: usize) -> Result<Vec<f64>, JsValue> {
    let set = PointSet::<2>::from_flat(points);
    crate::voronoi::voronoi_neighbors(&set, center)
        .map(|n| n.to_flat())
        .map_err(to_js)
}

// --- Result ---

#[wasm_bindgen(js_name = NeighborResult)]
pub struct NeighborResultWASM {
    indices: Vec<u32>,
    points: Vec<f64>,
    degeneracies: Vec<u32>,
}

impl<const D: usize> From<NeighborResult<D>> for NeighborResultWASM {
    fn from(r: NeighborResult<D>) -> Self {
        NeighborResultWASM {
            points: r.points.to_flat(),
            degeneracies: r.degeneracies.iter().flat_map(|d| [d.first as u32, d.second as u32]).collect(),
            indices: r.indices.iter().map(|&i| i as u32).collect(),
        }
    }
}

#[wasm_bindgen(js_class = NeighborResult)]
impl NeighborResultWASM {
    #[wasm_bindgen(getter)]
    pub fn indices(&self) -> Vec<u32> { self.indices.clone() }
    /// Flat neighbor coordinates.
    #[wasm_bindgen(getter)]
    pub fn points(&self) -> Vec<f64> { self.points.clone() }
    /// Coincident pairs, flat `[first, second, ...]`.
    #[wasm_bindgen(getter)]
    pub fn degeneracies(&self) -> Vec<u32> { self.degeneracies.clone() }
}

// --- Classifiers ---

#[wasm_bindgen(js_name = HalfSpaceClassifier)]
pub struct HalfSpaceClassifierWASM {
    inner: HalfSpaceClassifier,
}

#[wasm_bindgen(js_class = HalfSpaceClassifier)]
impl HalfSpaceClassifierWASM {
    #[wasm_bindgen(constructor)]
    pub fn new(k: usize, reject_degenerate: bool) -> HalfSpaceClassifierWASM {
        let config = HalfSpaceConfig { k, policy: policy(reject_degenerate) };
        HalfSpaceClassifierWASM { inner: HalfSpaceClassifier::new(config) }
    }

    /// Classifies point `center` of a flat 3D array.
    pub fn classify(&self, points: &[f64], center: usize) -> Result<NeighborResultWASM, JsValue> {
        let set = PointSet::<3>::from_flat(points);
        self.inner.classify::<KdTree<3>, 3>(&set, center).map(Into::into).map_err(to_js)
    }
}

#[wasm_bindgen(js_name = VoronoiClassifier)]
pub struct VoronoiClassifierWASM {
    inner: VoronoiClassifier,
    unbounded: bool,
}

#[wasm_bindgen(js_class = VoronoiClassifier)]
impl VoronoiClassifierWASM {
    /// `unbounded` selects Delaunay-dual adjacency instead of the diagram clipped to the bounds.
    #[wasm_bindgen(constructor)]
    pub fn new(padding: f64, size_extent: bool, reject_degenerate: bool, unbounded: bool) -> VoronoiClassifierWASM {
        let config = VoronoiConfig {
            extent: if size_extent { ExtentMode::Size } else { ExtentMode::Absolute },
            padding,
            policy: policy(reject_degenerate),
        };
        VoronoiClassifierWASM { inner: VoronoiClassifier::new(config), unbounded }
    }

    /// Classifies point `center` of a flat 2D array.
    pub fn classify(&self, points: &[f64], center: usize) -> Result<NeighborResultWASM, JsValue> {
        let set = PointSet::<2>::from_flat(points);
        let result = if self.unbounded {
            self.inner.classify::<DelaunayDiagram>(&set, center)
        } else {
            self.inner.classify::<ClippedDiagram>(&set, center)
        };
        result.map(Into::into).map_err(to_js)
    }
}
