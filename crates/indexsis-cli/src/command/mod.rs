use std::path::Path;

use clap::{Parser, Subcommand};
use indexsis_engine::GameConfig;

use self::{generate_board::GenerateBoardArg, play::PlayArg, simulate::SimulateArg};

mod generate_board;
mod play;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play an interactive pass-and-play game in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Auto-play games with a mean-of-samples strategy and report score statistics
    Simulate(#[clap(flatten)] SimulateArg),
    /// Generate a single board and write its point set as JSON
    GenerateBoard(#[clap(flatten)] GenerateBoardArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
        Mode::GenerateBoard(arg) => generate_board::run(&arg)?,
    }
    Ok(())
}

/// Loads game settings from a JSON file, falling back to the defaults.
fn load_config(path: Option<&Path>) -> anyhow::Result<GameConfig> {
    match path {
        Some(path) => crate::util::read_json_file("game settings", path),
        None => Ok(GameConfig::default()),
    }
}
