use std::path::PathBuf;

use indexsis_engine::{GamePhase, GameSession};
use indexsis_stats::descriptive::DescriptiveStats;
use rand::Rng as _;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Number of games to play
    #[arg(long, default_value_t = 20)]
    num_games: usize,
    /// Game settings file (JSON); omitted fields use the defaults
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Auto-plays single-player games with a naive strategy: samples are placed
/// uniformly at random and the guess is the mean of the sampled local
/// densities. The resulting score distribution is a useful baseline for
/// judging how hard a given configuration is.
#[expect(clippy::cast_precision_loss)]
pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let config = super::load_config(arg.config.as_deref())?;
    let mut rng = rand::rng();

    let mut game_totals = Vec::with_capacity(arg.num_games);
    let mut round_scores = Vec::new();

    for game in 1..=arg.num_games {
        let mut session = GameSession::new(config.clone(), 1);
        session.start()?;

        while !session.phase().is_complete() {
            match session.phase() {
                GamePhase::Sampling => {
                    let x = rng.random_range(0.0..config.board_size);
                    let y = rng.random_range(0.0..config.board_size);
                    session.take_sample(x, y)?;
                }
                GamePhase::Guessing => {
                    let samples = session.samples();
                    let guess = samples.iter().map(|s| s.local_density).sum::<f64>()
                        / samples.len() as f64;
                    let result = session.submit_guess(guess)?;
                    round_scores.push(result.score);
                }
                GamePhase::Reveal => {
                    session.advance()?;
                }
                GamePhase::Handoff => session.begin_next_round()?,
                GamePhase::Setup | GamePhase::Complete => break,
            }
        }

        let total = session.total_score(1);
        eprintln!("game {game}/{}: total score {total:.2}", arg.num_games);
        game_totals.push(total);
    }

    println!(
        "Simulated {} games ({} rounds each, mean-of-samples strategy)",
        arg.num_games, config.rounds_per_game
    );
    print_stats("Game totals ", &game_totals);
    print_stats("Round scores", &round_scores);
    Ok(())
}

fn print_stats(label: &str, values: &[f64]) {
    let Some(stats) = DescriptiveStats::new(values.iter().copied()) else {
        println!("{label}: no data");
        return;
    };
    println!(
        "{label}: min {:.3}, max {:.3}, mean {:.3}, median {:.3}, std dev {:.3}",
        stats.min, stats.max, stats.mean, stats.median, stats.std_dev
    );
}
