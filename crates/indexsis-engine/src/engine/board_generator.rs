use std::{fmt::Write as _, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{board::Board, cluster, point::Point, spatial_grid::SpatialGrid};

use super::game_config::GameConfig;

/// Fraction of the board side used as the minimum pairwise separation.
const MIN_DISTANCE_FACTOR: f64 = 0.002;
/// Baseline acceptance probability for candidates outside every cluster.
const BASE_ACCEPTANCE: f64 = 0.2;
/// Attempt budget per requested point.
const ATTEMPTS_PER_POINT: usize = 20;

/// Seed for deterministic board generation.
///
/// This is a 128-bit (16-byte) seed used to initialize the random number
/// generator for board generation. Using the same seed will produce the same
/// cluster layout and point set, enabling:
///
/// - Reproducible boards for debugging
/// - Game recording and replay
/// - Deterministic testing
///
/// # Example
///
/// ```
/// use indexsis_engine::BoardGenerator;
/// use rand::Rng as _;
///
/// let seed = rand::rng().random();
///
/// let board1 = BoardGenerator::with_seed(seed).generate(1000, 600.0);
/// let board2 = BoardGenerator::with_seed(seed).generate(1000, 600.0);
///
/// assert_eq!(board1.points(), board2.points());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoardSeed([u8; 16]);

/// Error returned when parsing a [`BoardSeed`] from a hex string fails.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid board seed: expected 32 hex characters, got {input:?}")]
pub struct ParseBoardSeedError {
    input: String,
}

impl FromStr for BoardSeed {
    type Err = ParseBoardSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseBoardSeedError {
                input: s.to_string(),
            });
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseBoardSeedError {
            input: s.to_string(),
        })?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for BoardSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let num = u128::from_be_bytes(self.0);
        let mut hex_str = String::with_capacity(2 * self.0.len());
        write!(&mut hex_str, "{num:032x}").unwrap();
        serializer.serialize_str(&hex_str)
    }
}

impl<'de> Deserialize<'de> for BoardSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `BoardSeed` values using the standard random distribution.
///
/// This implementation enables idiomatic seed generation with `rng.random()`.
impl Distribution<BoardSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BoardSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        BoardSeed(seed)
    }
}

/// Generates boards with a hidden, spatially clustered point set.
///
/// # Placement algorithm
///
/// One generation call works as follows:
///
/// 1. Draw 3-5 density clusters with random center, radius, and intensity
/// 2. Draw candidate points uniformly over the board, accepting each with
///    probability `0.2 + sum of cluster contributions` (values above 1 mean
///    certain acceptance)
/// 3. Discard accepted candidates that fall within the minimum separation
///    (`board_size * 0.002`) of an already placed point, checked through a
///    spatial hash so each check stays near constant time
/// 4. Stop at the requested count, or when the attempt budget
///    (`target_count * 20`) runs out
///
/// Budget exhaustion is a degraded success, not an error: the partial point
/// set is returned as-is and callers must tolerate a realized count below the
/// requested one.
#[derive(Debug, Clone)]
pub struct BoardGenerator {
    rng: Pcg32,
}

impl Default for BoardGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardGenerator {
    /// Creates a new generator with a random seed.
    ///
    /// For deterministic generation, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic
    /// board generation.
    #[must_use]
    pub fn with_seed(seed: BoardSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
        }
    }

    /// Generates a board with up to `target_count` points.
    ///
    /// All returned points lie within `[0, board_size]^2` and are mutually
    /// separated by at least `board_size * 0.002`. The realized count is at
    /// most `target_count` and may be lower when the attempt budget runs out.
    pub fn generate(&mut self, target_count: usize, board_size: f64) -> Board {
        let min_distance = board_size * MIN_DISTANCE_FACTOR;
        let clusters = cluster::sample_clusters(&mut self.rng, board_size);

        let mut grid = SpatialGrid::new(min_distance);
        let mut points = Vec::with_capacity(target_count);

        let max_attempts = target_count * ATTEMPTS_PER_POINT;
        for _ in 0..max_attempts {
            if points.len() >= target_count {
                break;
            }

            let candidate = Point::new(
                self.rng.random_range(0.0..board_size),
                self.rng.random_range(0.0..board_size),
            );

            let probability = BASE_ACCEPTANCE
                + clusters
                    .iter()
                    .map(|cluster| cluster.weight_at(candidate))
                    .sum::<f64>();
            if self.rng.random::<f64>() >= probability {
                continue;
            }
            if !grid.is_separated(candidate) {
                continue;
            }

            grid.insert(candidate);
            points.push(candidate);
        }

        Board::new(board_size, points)
    }

    /// Generates a round board, drawing the target dot count uniformly from
    /// the configured `[min_dots, max_dots]` range.
    pub fn generate_round(&mut self, config: &GameConfig) -> Board {
        let target_count = self.rng.random_range(config.min_dots..=config.max_dots);
        self.generate(target_count, config.board_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod board_seed_serialization {
        use super::*;

        #[test]
        fn test_roundtrip_random_seed() {
            let seed: BoardSeed = rand::rng().random();
            let serialized = serde_json::to_string(&seed).unwrap();
            let deserialized: BoardSeed = serde_json::from_str(&serialized).unwrap();
            assert_eq!(seed.0, deserialized.0);
        }

        #[test]
        fn test_format_is_32_char_hex_string() {
            let seed: BoardSeed = rand::rng().random();
            let serialized = serde_json::to_string(&seed).unwrap();
            let hex_str = serialized.trim_matches('"');

            assert_eq!(hex_str.len(), 32);
            assert!(hex_str.chars().all(|c| c.is_ascii_hexdigit()));
        }

        #[test]
        fn test_known_value_all_zeros() {
            let seed = BoardSeed([0; 16]);
            let serialized = serde_json::to_string(&seed).unwrap();
            assert_eq!(serialized, "\"00000000000000000000000000000000\"");
        }

        #[test]
        fn test_parse_rejects_wrong_length() {
            assert!("0123".parse::<BoardSeed>().is_err());
            assert!("zz".repeat(16).parse::<BoardSeed>().is_err());
        }
    }

    mod generation_invariants {
        use super::*;

        const BOARD_SIZE: f64 = 600.0;

        fn generated_board(target_count: usize) -> Board {
            BoardGenerator::with_seed(BoardSeed([21; 16])).generate(target_count, BOARD_SIZE)
        }

        #[test]
        fn test_count_never_exceeds_target() {
            for target in [0, 1, 100, 5000] {
                let board = generated_board(target);
                assert!(board.point_count() <= target);
            }
        }

        #[test]
        fn test_all_points_within_bounds() {
            let board = generated_board(5000);
            for point in board.points() {
                assert!((0.0..=BOARD_SIZE).contains(&point.x));
                assert!((0.0..=BOARD_SIZE).contains(&point.y));
            }
        }

        #[test]
        fn test_pairwise_separation() {
            let board = generated_board(2000);
            let min_distance = BOARD_SIZE * MIN_DISTANCE_FACTOR;
            let limit = min_distance * min_distance * (1.0 - 1e-9);
            let points = board.points();
            for (i, a) in points.iter().enumerate() {
                for b in &points[i + 1..] {
                    assert!(
                        a.distance_squared(*b) >= limit,
                        "points {a:?} and {b:?} violate the minimum separation",
                    );
                }
            }
        }

        #[test]
        fn test_large_board_scenario() {
            // 50k points on a 600-unit board leaves plenty of headroom under
            // the separation constraint (the grid admits far more points), so
            // the realized count should land close to the target.
            let board = generated_board(50_000);
            assert!(board.point_count() <= 50_000);
            assert!(
                board.point_count() > 40_000,
                "unexpectedly heavy degradation: {} points",
                board.point_count()
            );
            for point in board.points() {
                assert!((0.0..=BOARD_SIZE).contains(&point.x));
                assert!((0.0..=BOARD_SIZE).contains(&point.y));
            }
        }

        #[test]
        fn test_same_seed_reproduces_board() {
            let board1 = generated_board(3000);
            let board2 = generated_board(3000);
            assert_eq!(board1.points(), board2.points());
        }

        #[test]
        fn test_zero_target_yields_empty_board() {
            let board = generated_board(0);
            assert_eq!(board.point_count(), 0);
            assert_eq!(board.actual_density(), 0.0);
        }

        #[test]
        fn test_generate_round_respects_dot_range() {
            let config = GameConfig {
                min_dots: 100,
                max_dots: 200,
                ..GameConfig::default()
            };
            let mut generator = BoardGenerator::with_seed(BoardSeed([3; 16]));
            for _ in 0..10 {
                let board = generator.generate_round(&config);
                assert!(board.point_count() <= 200);
            }
        }
    }
}
