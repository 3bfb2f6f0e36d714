use serde::{Deserialize, Serialize};

/// One disk sample taken by a player during the sampling phase.
///
/// Carries the derived local density so the UI can show past probes without
/// re-querying the point set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Sample disk center, x coordinate.
    pub x: f64,
    /// Sample disk center, y coordinate.
    pub y: f64,
    /// Sample disk radius.
    pub radius: f64,
    /// Points-per-unit-area inside the disk.
    pub local_density: f64,
}

/// The immutable record of one completed round.
///
/// Created when the guess is scored; owned by the session's round history and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    /// The player who played the round (1-based).
    pub player_number: u8,
    /// The samples the player took, in order.
    pub samples: Vec<Sample>,
    /// The submitted density guess.
    pub guess: f64,
    /// The board's true density at reveal time.
    pub actual_density: f64,
    /// The board's spatial standard deviation, the scoring tolerance.
    pub standard_deviation: f64,
    /// The round score, in `[0, 10]` with two-decimal precision.
    pub score: f64,
}
