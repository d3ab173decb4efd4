use point_neighbors::{
    BoundingBox, BruteForceIndex, HalfSpaceClassifier, KdTree, NearestNeighborIndex, NeighborError, PointSet,
    bsp_neighbors, in_half_space,
};

fn random_cloud(count: usize, seed: u64) -> PointSet<3> {
    PointSet::random(count, &BoundingBox::new([0.0, 0.0, 0.0], [10.0, 10.0, 10.0]), seed)
}

#[test]
fn test_result_is_filtered_nearest_candidates() {
    let points = random_cloud(300, 7);
    let classifier = HalfSpaceClassifier::with_k(12);

    for center in [0, 17, 150, 299] {
        let result = classifier.classify::<KdTree<3>, 3>(&points, center).unwrap();
        assert!(result.len() <= 12);
        assert!(!result.indices.contains(&center));

        let others = points.without(center);
        let nearest: Vec<usize> = BruteForceIndex::build(&others)
            .query(&points[center], 12)
            .unwrap()
            .into_iter()
            .map(|i| if i < center { i } else { i + 1 })
            .collect();

        // Accepted candidates keep their nearest-first order.
        let filtered: Vec<usize> = nearest.iter().copied().filter(|i| result.indices.contains(i)).collect();
        assert_eq!(filtered, result.indices);

        for (&i, p) in result.indices.iter().zip(result.points.iter()) {
            assert_eq!(points[i], *p);
            for &j in &nearest {
                assert!(in_half_space(&points[i], &points[j], &points[center]));
            }
        }
    }
}

#[test]
fn test_kdtree_and_brute_force_agree() {
    let points = random_cloud(500, 99);
    let classifier = HalfSpaceClassifier::with_k(10);

    for center in (0..500).step_by(37) {
        let kd = classifier.classify::<KdTree<3>, 3>(&points, center).unwrap();
        let brute = classifier.classify::<BruteForceIndex<3>, 3>(&points, center).unwrap();
        assert_eq!(kd.indices, brute.indices, "center {}", center);
    }
}

#[test]
fn test_nearest_neighbor_always_accepted() {
    // The closest candidate can never be hidden by a farther one.
    let points = random_cloud(200, 3);
    for center in 0..20 {
        let result = HalfSpaceClassifier::with_k(6).classify::<KdTree<3>, 3>(&points, center).unwrap();
        assert!(!result.is_empty(), "center {} lost its nearest neighbor", center);
    }
}

#[test]
fn test_cospherical_candidates_all_visible() {
    let points = PointSet::new(vec![
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ]);
    let result = bsp_neighbors(&points, 0, 6).unwrap();
    assert_eq!(result.len(), 6);
}

#[test]
fn test_axis_scenario() {
    let points = PointSet::new(vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    let result = bsp_neighbors(&points, 0, 3).unwrap();
    assert_eq!(result.len(), 3);
}

#[test]
fn test_repeated_calls_are_identical() {
    let points = random_cloud(100, 11);
    let classifier = HalfSpaceClassifier::with_k(8);
    let first = classifier.classify::<KdTree<3>, 3>(&points, 42).unwrap();
    let second = classifier.classify::<KdTree<3>, 3>(&points, 42).unwrap();
    assert_eq!(first.indices, second.indices);
    assert_eq!(first.points, second.points);
}

#[test]
fn test_nan_coordinates_do_not_panic() {
    let mut coords = random_cloud(200, 13).as_slice().to_vec();
    for (i, p) in coords.iter_mut().enumerate() {
        if i % 3 == 0 {
            p[0] = f64::NAN;
        }
        if i % 7 == 0 {
            p[1] = f64::NAN;
        }
    }
    let points = PointSet::new(coords);
    let classifier = HalfSpaceClassifier::with_k(8);

    for center in [0, 1, 2, 21] {
        let result = classifier.classify::<KdTree<3>, 3>(&points, center).unwrap();
        assert!(result.len() <= 8);
        // A NaN center fails every half-space test.
        if points[center].iter().any(|v| v.is_nan()) {
            assert!(result.is_empty());
        }
        assert!(classifier.classify::<BruteForceIndex<3>, 3>(&points, center).is_ok());
    }
}

#[test]
fn test_center_out_of_range() {
    let points = random_cloud(10, 1);
    assert!(matches!(
        bsp_neighbors(&points, 10, 3),
        Err(NeighborError::OutOfRange { index: 10, len: 10 })
    ));
    assert!(matches!(
        bsp_neighbors(&points, 0, 10),
        Err(NeighborError::InsufficientPoints { requested: 10, available: 9 })
    ));
}
