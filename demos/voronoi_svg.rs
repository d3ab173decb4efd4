use plotters::prelude::*;
use point_neighbors::{
    BoundingBox, ClippedDiagram, HalfSpaceClassifier, KdTree, PlanarSubdivision, PointSet, VoronoiClassifier,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filename = "voronoi_neighbors.svg";
    let root = SVGBackend::new(filename, (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root).build_cartesian_2d(0.0..100.0, 0.0..100.0)?;

    let points = PointSet::random(200, &BoundingBox::new([0.0, 0.0], [100.0, 100.0]), 1);
    let center = 25;

    let classifier = VoronoiClassifier::default();
    let voronoi = classifier.classify::<ClippedDiagram>(&points, center)?;
    let bsp = HalfSpaceClassifier::default().classify::<KdTree<2>, 2>(&points, center)?;

    // The diagram itself is only needed for drawing.
    let region = classifier.region(&points).ok_or("empty point set")?;
    let diagram = ClippedDiagram::build(points.as_slice(), &region)?;

    for cell in diagram.cells() {
        let mut poly: Vec<(f64, f64)> = cell.vertices().iter().map(|v| (v[0], v[1])).collect();
        if poly.len() < 3 {
            continue;
        }
        chart.draw_series(std::iter::once(Polygon::new(poly.clone(), BLUE.mix(0.05).filled())))?;
        poly.push(poly[0]);
        chart.draw_series(std::iter::once(PathElement::new(poly, BLACK.mix(0.5))))?;
    }

    chart.draw_series(points.iter().map(|p| Circle::new((p[0], p[1]), 2, BLACK.filled())))?;
    chart.draw_series(voronoi.points.iter().map(|p| Circle::new((p[0], p[1]), 6, BLUE.stroke_width(2))))?;
    chart.draw_series(bsp.points.iter().map(|p| Circle::new((p[0], p[1]), 4, GREEN.filled())))?;
    let c = points[center];
    chart.draw_series(std::iter::once(Circle::new((c[0], c[1]), 5, RED.filled())))?;

    root.present()?;
    println!(
        "{} voronoi and {} half-space neighbors of point {}; output saved to {}",
        voronoi.len(),
        bsp.len(),
        center,
        filename
    );
    Ok(())
}
