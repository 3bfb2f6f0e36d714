use std::{
    io::{self, BufRead, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use indexsis_engine::{BoardSeed, GamePhase, GameSession, Sample};

use crate::record::GameRecord;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Number of pass-and-play players
    #[arg(long, default_value_t = 1)]
    players: u8,
    /// Board seed (32 hex characters) for a reproducible game
    #[arg(long)]
    seed: Option<BoardSeed>,
    /// Game settings file (JSON); omitted fields use the defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Save the finished game as JSON to this path
    #[arg(long)]
    record: Option<PathBuf>,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            players: 1,
            seed: None,
            config: None,
            record: None,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let config = super::load_config(arg.config.as_deref())?;
    let mut session = match arg.seed {
        Some(seed) => GameSession::with_seed(config, arg.players, seed),
        None => GameSession::new(config, arg.players),
    };
    session.start()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        match session.phase() {
            GamePhase::Sampling => {
                if session.samples().is_empty() {
                    println!();
                    println!(
                        "Round {} - Player {} ({} samples of radius {} available)",
                        session.current_round(),
                        session.current_player(),
                        session.samples_remaining(),
                        session.config().sample_radius,
                    );
                }
                let sample_number = session.samples().len() + 1;
                let board_size = session.config().board_size;
                let prompt = format!("sample {sample_number} (x y, 0..{board_size})> ");
                let Some((x, y)) = read_coordinates(&mut input, &prompt)? else {
                    break;
                };
                let sample = session.take_sample(x, y)?;
                print_sample(sample);
            }
            GamePhase::Guessing => {
                let Some(guess) = read_number(&mut input, "density guess> ")? else {
                    break;
                };
                let result = session.submit_guess(guess)?;
                println!("  actual density:  {:.6}", result.actual_density);
                println!("  spatial std dev: {:.6}", result.standard_deviation);
                println!("  score:           {:.2}", result.score);
            }
            GamePhase::Reveal => {
                session.advance()?;
            }
            GamePhase::Handoff => {
                print!(
                    "Hand the device to player {} and press Enter...",
                    session.current_player()
                );
                io::stdout().flush().context("failed to flush stdout")?;
                if read_line(&mut input)?.is_none() {
                    break;
                }
                session.begin_next_round()?;
            }
            GamePhase::Setup | GamePhase::Complete => break,
        }
    }

    println!();
    for player in 1..=session.player_count() {
        println!(
            "Player {player} total score: {:.2}",
            session.total_score(player)
        );
    }

    if let Some(path) = &arg.record {
        GameRecord::from_session(&session).save(path)?;
        eprintln!("Saved game record to {}", path.display());
    }

    Ok(())
}

fn print_sample(sample: Sample) {
    println!(
        "  local density: {:.6} points per square unit",
        sample.local_density
    );
}

/// Reads one trimmed line, returning `None` at end of input.
fn read_line<R>(input: &mut R) -> anyhow::Result<Option<String>>
where
    R: BufRead,
{
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn read_coordinates<R>(input: &mut R, prompt: &str) -> anyhow::Result<Option<(f64, f64)>>
where
    R: BufRead,
{
    loop {
        print!("{prompt}");
        io::stdout().flush().context("failed to flush stdout")?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let mut parts = line.split_whitespace().map(str::parse::<f64>);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(Ok(x)), Some(Ok(y)), None) => return Ok(Some((x, y))),
            _ => println!("  expected two numbers, e.g. `120 450`"),
        }
    }
}

fn read_number<R>(input: &mut R, prompt: &str) -> anyhow::Result<Option<f64>>
where
    R: BufRead,
{
    loop {
        print!("{prompt}");
        io::stdout().flush().context("failed to flush stdout")?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("  expected a number, e.g. `0.15`"),
        }
    }
}
