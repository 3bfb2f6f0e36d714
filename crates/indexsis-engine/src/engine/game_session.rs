use crate::{PhaseError, core::board::Board};

use super::{
    board_generator::{BoardGenerator, BoardSeed},
    game_config::GameConfig,
    round::{RoundResult, Sample},
    scoring,
};

/// Phase of the round state machine.
///
/// Transitions:
///
/// ```text
/// setup -> sampling -> guessing -> reveal -> handoff -> sampling
///                                         \-> complete
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum GamePhase {
    /// Session created, first board not generated yet.
    #[display("setup")]
    Setup,
    /// The player is spending the round's sample budget.
    #[display("sampling")]
    Sampling,
    /// Samples exhausted; waiting for the density guess.
    #[display("guessing")]
    Guessing,
    /// Guess scored; the round result can be shown.
    #[display("reveal")]
    Reveal,
    /// Waiting for the next player to take over the device.
    #[display("handoff")]
    Handoff,
    /// All rounds played.
    #[display("complete")]
    Complete,
}

/// A multi-round game session: the orchestrator driving the phase state
/// machine over the core statistical functions.
///
/// The session is an explicit value threaded through calls; there is no
/// global "current game" state. Each round's board, sample list, and result
/// are independently owned, and nothing is shared between logical rounds.
///
/// In pass-and-play games, players rotate every round; the round number
/// increments when the rotation wraps back to player 1. The game completes
/// after `rounds_per_game` rounds per player.
///
/// # Example
///
/// ```
/// use indexsis_engine::{GameConfig, GameSession};
///
/// let config = GameConfig {
///     min_dots: 500,
///     max_dots: 1000,
///     ..GameConfig::default()
/// };
/// let mut session = GameSession::new(config, 1);
/// session.start().unwrap();
/// assert!(session.phase().is_sampling());
///
/// while session.phase().is_sampling() {
///     session.take_sample(300.0, 300.0).unwrap();
/// }
///
/// let result = session.submit_guess(0.002).unwrap();
/// assert!((0.0..=10.0).contains(&result.score));
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    generator: BoardGenerator,
    phase: GamePhase,
    player_count: u8,
    current_player: u8,
    current_round: usize,
    board: Board,
    pending_board: Option<Board>,
    actual_density: f64,
    standard_deviation: f64,
    samples: Vec<Sample>,
    rounds: Vec<RoundResult>,
}

impl GameSession {
    /// Creates a session in the setup phase with a randomly seeded generator.
    ///
    /// # Panics
    ///
    /// Panics if `player_count` is zero.
    #[must_use]
    pub fn new(config: GameConfig, player_count: u8) -> Self {
        Self::with_generator(config, player_count, BoardGenerator::new())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic boards.
    #[must_use]
    pub fn with_seed(config: GameConfig, player_count: u8, seed: BoardSeed) -> Self {
        Self::with_generator(config, player_count, BoardGenerator::with_seed(seed))
    }

    fn with_generator(config: GameConfig, player_count: u8, generator: BoardGenerator) -> Self {
        assert!(player_count > 0, "a game needs at least one player");
        let board = Board::new(config.board_size, Vec::new());
        Self {
            config,
            generator,
            phase: GamePhase::Setup,
            player_count,
            current_player: 1,
            current_round: 1,
            board,
            pending_board: None,
            actual_density: 0.0,
            standard_deviation: 0.0,
            samples: Vec::new(),
            rounds: Vec::new(),
        }
    }

    /// The session configuration.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Number of players in the session.
    #[must_use]
    pub const fn player_count(&self) -> u8 {
        self.player_count
    }

    /// The player whose turn it is (1-based).
    #[must_use]
    pub const fn current_player(&self) -> u8 {
        self.current_player
    }

    /// The current round number (1-based).
    #[must_use]
    pub const fn current_round(&self) -> usize {
        self.current_round
    }

    /// The current round's board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Samples taken so far in the current round, in order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Samples still available in the current round.
    #[must_use]
    pub fn samples_remaining(&self) -> usize {
        self.config.samples_per_round.saturating_sub(self.samples.len())
    }

    /// The current board's true density.
    ///
    /// This is the hidden answer; UIs must not show it before the reveal.
    #[must_use]
    pub const fn actual_density(&self) -> f64 {
        self.actual_density
    }

    /// The current board's spatial standard deviation (scoring tolerance).
    #[must_use]
    pub const fn standard_deviation(&self) -> f64 {
        self.standard_deviation
    }

    /// History of completed rounds.
    #[must_use]
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    /// Sum of the given player's round scores.
    #[must_use]
    pub fn total_score(&self, player_number: u8) -> f64 {
        self.rounds
            .iter()
            .filter(|round| round.player_number == player_number)
            .map(|round| round.score)
            .sum()
    }

    /// Generates the first board and enters the sampling phase.
    pub fn start(&mut self) -> Result<(), PhaseError> {
        self.require(GamePhase::Setup)?;
        let board = self.generator.generate_round(&self.config);
        self.install_board(board);
        self.phase = GamePhase::Sampling;
        Ok(())
    }

    /// Takes a disk sample at `(x, y)` with the configured sample radius.
    ///
    /// Consumes one unit of the round's sample budget. When the budget runs
    /// out, the session moves to the guessing phase.
    pub fn take_sample(&mut self, x: f64, y: f64) -> Result<Sample, PhaseError> {
        self.require(GamePhase::Sampling)?;

        let radius = self.config.sample_radius;
        let sample = Sample {
            x,
            y,
            radius,
            local_density: self.board.local_density(x, y, radius),
        };
        self.samples.push(sample);

        if self.samples.len() >= self.config.samples_per_round {
            self.phase = GamePhase::Guessing;
        }
        Ok(sample)
    }

    /// Scores the guess, records the round, and enters the reveal phase.
    pub fn submit_guess(&mut self, guess: f64) -> Result<&RoundResult, PhaseError> {
        self.require(GamePhase::Guessing)?;

        let score = scoring::score(guess, self.actual_density, self.standard_deviation);
        let result = RoundResult {
            player_number: self.current_player,
            samples: std::mem::take(&mut self.samples),
            guess,
            actual_density: self.actual_density,
            standard_deviation: self.standard_deviation,
            score,
        };
        self.rounds.push(result);
        self.phase = GamePhase::Reveal;

        Ok(self
            .rounds
            .last()
            .expect("round history cannot be empty after a push"))
    }

    /// Leaves the reveal phase.
    ///
    /// Completes the game when every player has played `rounds_per_game`
    /// rounds; otherwise rotates to the next player and enters the handoff
    /// phase, pre-generating the next board so it is ready the moment the
    /// handoff is confirmed.
    pub fn advance(&mut self) -> Result<GamePhase, PhaseError> {
        self.require(GamePhase::Reveal)?;

        let total_rounds = self.config.rounds_per_game * usize::from(self.player_count);
        if self.rounds.len() >= total_rounds {
            self.phase = GamePhase::Complete;
            return Ok(self.phase);
        }

        self.pending_board = Some(self.generator.generate_round(&self.config));
        self.current_player = self.current_player % self.player_count + 1;
        if self.current_player == 1 {
            self.current_round += 1;
        }
        self.phase = GamePhase::Handoff;
        Ok(self.phase)
    }

    /// Confirms the handoff and starts the next round's sampling phase.
    ///
    /// Installs the board pre-generated by [`Self::advance`]; generates one
    /// on the spot if none is pending.
    pub fn begin_next_round(&mut self) -> Result<(), PhaseError> {
        self.require(GamePhase::Handoff)?;

        let board = match self.pending_board.take() {
            Some(board) => board,
            None => self.generator.generate_round(&self.config),
        };
        self.install_board(board);
        self.phase = GamePhase::Sampling;
        Ok(())
    }

    fn install_board(&mut self, board: Board) {
        self.actual_density = board.actual_density();
        self.standard_deviation = board.spatial_std_dev();
        self.samples.clear();
        self.board = board;
    }

    fn require(&self, required: GamePhase) -> Result<(), PhaseError> {
        if self.phase == required {
            Ok(())
        } else {
            Err(PhaseError {
                required,
                actual: self.phase,
            })
        }
    }
}
