use std::path::PathBuf;

use indexsis_engine::{BoardGenerator, BoardSeed, Point};
use rand::Rng as _;
use serde::Serialize;

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateBoardArg {
    /// Number of points to attempt to place
    #[arg(long, default_value_t = 50_000)]
    target_count: usize,
    /// Board side length in board units
    #[arg(long, default_value_t = 600.0)]
    board_size: f64,
    /// Board seed (32 hex characters); random when omitted
    #[arg(long)]
    seed: Option<BoardSeed>,
    /// Output file path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

/// A generated board plus its summary statistics, as written to the output.
#[derive(Debug, Serialize)]
struct BoardReport {
    seed: BoardSeed,
    target_count: usize,
    board_size: f64,
    point_count: usize,
    actual_density: f64,
    standard_deviation: f64,
    points: Vec<Point>,
}

pub(crate) fn run(arg: &GenerateBoardArg) -> anyhow::Result<()> {
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let mut generator = BoardGenerator::with_seed(seed);
    let board = generator.generate(arg.target_count, arg.board_size);

    eprintln!(
        "Generated {} points out of {} requested",
        board.point_count(),
        arg.target_count
    );

    let report = BoardReport {
        seed,
        target_count: arg.target_count,
        board_size: arg.board_size,
        point_count: board.point_count(),
        actual_density: board.actual_density(),
        standard_deviation: board.spatial_std_dev(),
        points: board.points().to_vec(),
    };
    Output::save_json(&report, arg.output.clone())
}
