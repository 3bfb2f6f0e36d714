use serde::{Deserialize, Serialize};

use super::{density, point::Point};

/// A generated game board: a square region and the hidden point set placed
/// on it.
///
/// Immutable once generated for a round. The point set satisfies the
/// generator's guarantees: every coordinate lies in `[0, size]`, and no two
/// points are closer than the minimum separation used during generation.
///
/// # Example
///
/// ```
/// use indexsis_engine::BoardGenerator;
///
/// let mut generator = BoardGenerator::new();
/// let board = generator.generate(1000, 600.0);
///
/// assert!(board.point_count() <= 1000);
/// let density = board.local_density(300.0, 300.0, 50.0);
/// assert!(density >= 0.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    size: f64,
    points: Vec<Point>,
}

impl Board {
    pub(crate) fn new(size: f64, points: Vec<Point>) -> Self {
        Self { size, points }
    }

    /// Side length of the square board, in board units.
    #[must_use]
    pub const fn size(&self) -> f64 {
        self.size
    }

    /// The hidden point set.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of placed points (the realized dot count).
    ///
    /// May be less than the count requested at generation when placement
    /// exhausted its attempt budget under the density and separation
    /// constraints.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// True points-per-unit-area over the whole board.
    #[must_use]
    pub fn actual_density(&self) -> f64 {
        density::actual_density(self.points.len(), self.size)
    }

    /// Local density estimate inside the sample disk centered at `(x, y)`.
    #[must_use]
    pub fn local_density(&self, x: f64, y: f64, radius: f64) -> f64 {
        density::local_density(&self.points, x, y, radius)
    }

    /// Spatial standard deviation of local density across the board.
    #[must_use]
    pub fn spatial_std_dev(&self) -> f64 {
        density::spatial_std_dev(&self.points, self.size)
    }
}
