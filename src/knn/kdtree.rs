use crate::error::NeighborError;
use crate::knn::{Candidate, NearestNeighborIndex, check_k};
use crate::points::{PointSet, dist_sq};
use std::collections::BinaryHeap;

const LEAF_SIZE: usize = 16;

#[derive(Clone, Copy, Debug)]
struct KdNode<const D: usize> {
    min: [f64; D],
    max: [f64; D],
    left: u32, // u32::MAX if leaf
    right: u32,
    // Leaf data: indices[start..end]
    start: u32,
    end: u32,
    // Internal node data
    split_val: f64,
    axis: u8,
}

/// Median-split kd-tree with bounding-box pruning.
pub struct KdTree<const D: usize> {
    points: Vec<[f64; D]>,
    nodes: Vec<KdNode<D>>,
    indices: Vec<usize>,
}

impl<const D: usize> KdTree<D> {
    fn build_recursive(&mut self, start: usize, end: usize) -> u32 {
        let count = end - start;

        // Compute bounding box for this range
        let mut min = [f64::INFINITY; D];
        let mut max = [f64::NEG_INFINITY; D];
        for &idx in &self.indices[start..end] {
            let p = &self.points[idx];
            for axis in 0..D {
                if p[axis] < min[axis] { min[axis] = p[axis]; }
                if p[axis] > max[axis] { max[axis] = p[axis]; }
            }
        }

        if count <= LEAF_SIZE {
            let node_idx = self.nodes.len() as u32;
            self.nodes.push(KdNode {
                min,
                max,
                left: u32::MAX,
                right: u32::MAX,
                start: start as u32,
                end: end as u32,
                split_val: 0.0,
                axis: 0,
            });
            return node_idx;
        }

        // Split along the widest axis
        let mut axis = 0;
        for a in 1..D {
            if max[a] - min[a] > max[axis] - min[axis] {
                axis = a;
            }
        }

        let mid = start + count / 2;
        let points = &self.points;
        self.indices[start..end].select_nth_unstable_by(count / 2, |&a, &b| {
            points[a][axis].total_cmp(&points[b][axis])
        });
        let split_val = self.points[self.indices[mid]][axis];

        let left = self.build_recursive(start, mid);
        let right = self.build_recursive(mid, end);

        let node_idx = self.nodes.len() as u32;
        self.nodes.push(KdNode {
            min,
            max,
            left,
            right,
            start: 0,
            end: 0,
            split_val,
            axis: axis as u8,
        });
        node_idx
    }

    fn query_recursive(&self, node_idx: u32, point: &[f64; D], k: usize, heap: &mut BinaryHeap<Candidate>) {
        let node = &self.nodes[node_idx as usize];

        // Pruning: distance from point to node bounding box
        let mut d2 = 0.0;
        for i in 0..D {
            let v = point[i];
            if v < node.min[i] { d2 += (node.min[i] - v).powi(2); }
            else if v > node.max[i] { d2 += (v - node.max[i]).powi(2); }
        }
        // Equal distances must still be visited so lower indices can win ties.
        if heap.len() == k && heap.peek().is_some_and(|worst| d2 > worst.dist_sq) {
            return;
        }

        // Leaf
        if node.left == u32::MAX {
            for &index in &self.indices[node.start as usize..node.end as usize] {
                let candidate = Candidate { dist_sq: dist_sq(&self.points[index], point), index };
                if heap.len() < k {
                    heap.push(candidate);
                } else if heap.peek().is_some_and(|worst| candidate < *worst) {
                    heap.pop();
                    heap.push(candidate);
                }
            }
            return;
        }

        // Visit nearest child first
        let diff = point[node.axis as usize] - node.split_val;
        let (first, second) = if diff <= 0.0 { (node.left, node.right) } else { (node.right, node.left) };

        self.query_recursive(first, point, k, heap);
        self.query_recursive(second, point, k, heap);
    }
}

impl<const D: usize> NearestNeighborIndex<D> for KdTree<D> {
    fn build(points: &PointSet<D>) -> Self {
        let count = points.len();
        let mut tree = KdTree {
            points: points.as_slice().to_vec(),
            // A balanced tree has 2*N / LEAF_SIZE nodes roughly
            nodes: Vec::with_capacity(2 * count / LEAF_SIZE + 1),
            indices: (0..count).collect(),
        };
        if count > 0 {
            tree.build_recursive(0, count);
        }
        tree
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn query(&self, point: &[f64; D], k: usize) -> Result<Vec<usize>, NeighborError> {
        check_k(k, self.points.len())?;
        if k == 0 {
            return Ok(Vec::new());
        }

        let mut heap = BinaryHeap::with_capacity(k + 1);
        // Root is the last node pushed in the recursive build
        let root_idx = (self.nodes.len() - 1) as u32;
        self.query_recursive(root_idx, point, k, &mut heap);

        Ok(heap.into_sorted_vec().into_iter().map(|c| c.index).collect())
    }
}
