use serde::{Deserialize, Serialize};

/// Tunable game settings.
///
/// The engine consumes these values but does not own their source; they come
/// from the embedding application (CLI flags, a settings file, an admin
/// panel). Defaults match the standard game setup.
///
/// All numeric values are assumed positive by contract; the engine performs
/// no defensive validation.
///
/// # Example
///
/// ```
/// use indexsis_engine::GameConfig;
///
/// let config = GameConfig::default();
/// assert_eq!(config.board_size, 600.0);
/// assert_eq!(config.samples_per_round, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board, in board units.
    pub board_size: f64,
    /// Rounds each player plays before the game completes.
    pub rounds_per_game: usize,
    /// Disk samples available per round.
    pub samples_per_round: usize,
    /// Radius of every sample disk, in board units.
    pub sample_radius: f64,
    /// Lower bound of the per-round target dot count.
    pub min_dots: usize,
    /// Upper bound of the per-round target dot count.
    pub max_dots: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 600.0,
            rounds_per_game: 7,
            samples_per_round: 5,
            sample_radius: 50.0,
            min_dots: 25_000,
            max_dots: 100_000,
        }
    }
}

impl GameConfig {
    /// Sample radius derived from the board size, `board_size / (5 * sqrt(pi))`.
    ///
    /// With this radius each sample disk covers 1/25 of the board area, so a
    /// default budget of five samples can probe a fifth of the board. An
    /// alternative to the fixed default radius, not a different algorithm.
    #[must_use]
    pub fn derived_sample_radius(board_size: f64) -> f64 {
        board_size / (5.0 * std::f64::consts::PI.sqrt())
    }
}
