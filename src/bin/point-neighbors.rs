use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use point_neighbors::io::{read_points, save_points, write_points};
use point_neighbors::{
    ClippedDiagram, DEFAULT_K, DegeneracyPolicy, DelaunayDiagram, ExtentMode, HalfSpaceClassifier,
    HalfSpaceConfig, KdTree, NeighborError, NeighborResult, PointSet, VoronoiClassifier, VoronoiConfig,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Method {
    /// Half-space neighbors among the k nearest
    Bsp,
    /// Planar Voronoi neighbors (the z coordinate is dropped)
    Voronoi,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Backend {
    /// Diagram clipped to the bounds of the input
    Clipped,
    /// Unbounded Delaunay dual
    Delaunay,
}

/// Find the local neighbors of one point of a point cloud.
#[derive(Parser, Debug)]
#[command(name = "point-neighbors", version, about)]
struct Cli {
    /// Point cloud, one `x y [z]` row per point
    input: PathBuf,

    /// Index of the point whose neighbors are sought
    center: usize,

    /// Where to write the neighbors (stdout if omitted)
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Method::Voronoi)]
    method: Method,

    /// Number of nearest candidates for the half-space test
    #[arg(short, default_value_t = DEFAULT_K)]
    k: usize,

    #[arg(long, value_enum, default_value_t = Backend::Clipped)]
    backend: Backend,

    /// Pass the region to the diagram as width/height instead of its upper corner
    #[arg(long)]
    size_extent: bool,

    /// Margin added around the point bounds for the diagram region
    #[arg(long, default_value_t = 0.0)]
    padding: f64,

    /// Fail instead of warning when points coincide
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), NeighborError> {
    let points: PointSet<3> = read_points(&cli.input)?;
    log::info!("read {} points from {}", points.len(), cli.input.display());

    let policy = if cli.strict { DegeneracyPolicy::Reject } else { DegeneracyPolicy::Report };

    match cli.method {
        Method::Bsp => {
            let classifier = HalfSpaceClassifier::new(HalfSpaceConfig { k: cli.k, policy });
            let result = classifier.classify::<KdTree<3>, 3>(&points, cli.center)?;
            emit(cli, &result)
        }
        Method::Voronoi => {
            let config = VoronoiConfig {
                extent: if cli.size_extent { ExtentMode::Size } else { ExtentMode::Absolute },
                padding: cli.padding,
                policy,
            };
            let classifier = VoronoiClassifier::new(config);
            let flat = points.project_xy();
            let result = match cli.backend {
                Backend::Clipped => classifier.classify::<ClippedDiagram>(&flat, cli.center)?,
                Backend::Delaunay => classifier.classify::<DelaunayDiagram>(&flat, cli.center)?,
            };
            emit(cli, &result)
        }
    }
}

fn emit<const D: usize>(cli: &Cli, result: &NeighborResult<D>) -> Result<(), NeighborError> {
    log::info!("point {} has {} neighbors: {:?}", cli.center, result.len(), result.indices);
    match &cli.output {
        Some(path) => save_points(path, &result.points),
        None => write_points(std::io::stdout().lock(), &result.points),
    }
}
