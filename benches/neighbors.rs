use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use point_neighbors::{
    BoundingBox, BruteForceIndex, ClippedDiagram, DelaunayDiagram, HalfSpaceClassifier, KdTree, PointSet,
    VoronoiClassifier,
};

fn benchmark_bsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("bsp_neighbors");
    let bounds = BoundingBox::new([0.0, 0.0, 0.0], [100.0, 100.0, 100.0]);
    let classifier = HalfSpaceClassifier::with_k(16);

    for &count in &[1_000, 10_000, 100_000] {
        let points = PointSet::random(count, &bounds, 42);
        group.bench_with_input(BenchmarkId::new("kdtree", count), &points, |b, points| {
            b.iter(|| classifier.classify::<KdTree<3>, 3>(black_box(points), 0).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("brute", count), &points, |b, points| {
            b.iter(|| classifier.classify::<BruteForceIndex<3>, 3>(black_box(points), 0).unwrap())
        });
    }
    group.finish();
}

fn benchmark_voronoi(c: &mut Criterion) {
    let mut group = c.benchmark_group("voronoi_neighbors");
    let bounds = BoundingBox::new([0.0, 0.0], [100.0, 100.0]);
    let classifier = VoronoiClassifier::default();

    for &count in &[1_000, 10_000, 100_000] {
        let points = PointSet::random(count, &bounds, 42);
        group.bench_with_input(BenchmarkId::new("clipped", count), &points, |b, points| {
            b.iter(|| classifier.classify::<ClippedDiagram>(black_box(points), 0).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("delaunay", count), &points, |b, points| {
            b.iter(|| classifier.classify::<DelaunayDiagram>(black_box(points), 0).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_bsp, benchmark_voronoi);
criterion_main!(benches);
