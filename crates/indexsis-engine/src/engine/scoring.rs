//! Scoring of density guesses.

/// Maximum attainable round score.
pub const MAX_SCORE: f64 = 10.0;

/// Slope of the linear decay between a perfect guess and the one-sigma
/// boundary.
const DECAY_RATE: f64 = 9.0;

/// Scores a density guess against the board's true density, on a 0-10 scale.
///
/// The score decays linearly with the absolute error, measured in units of
/// the board's spatial standard deviation:
///
/// - An exact guess scores 10
/// - An error equal to the standard deviation scores exactly 1
/// - Any error beyond the standard deviation scores 0
///
/// The drop from 1 to 0 at the boundary is intentional: only guesses inside
/// the tolerance earn partial credit. The result is rounded to two decimal
/// places.
///
/// A zero standard deviation (a perfectly uniform board) with a nonzero
/// error takes the over-tolerance branch, so the division below never sees a
/// zero divisor.
///
/// # Examples
///
/// ```
/// use indexsis_engine::scoring;
///
/// assert_eq!(scoring::score(0.05, 0.05, 0.01), 10.0);
/// assert_eq!(scoring::score(0.055, 0.05, 0.01), 5.5);
/// assert_eq!(scoring::score(0.07, 0.05, 0.01), 0.0);
/// ```
#[must_use]
pub fn score(guess: f64, actual_density: f64, standard_deviation: f64) -> f64 {
    let difference = (guess - actual_density).abs();

    if difference == 0.0 {
        return MAX_SCORE;
    }
    if difference > standard_deviation {
        return 0.0;
    }

    let score = (MAX_SCORE - DECAY_RATE * (difference / standard_deviation)).max(0.0);
    (score * 100.0).round() / 100.0
}
