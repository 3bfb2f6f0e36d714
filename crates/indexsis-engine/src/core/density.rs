//! Density estimation and spatial dispersion over a point set.

use std::f64::consts::PI;

use indexsis_stats::descriptive::DescriptiveStats;

use super::point::Point;

/// Side of the uniform grid partition used for the spatial standard
/// deviation (`10 x 10` equal-area cells).
const DISPERSION_GRID_SIZE: usize = 10;

/// Estimates local density inside a sample disk, in points per unit area.
///
/// Counts the points whose squared distance to `(cx, cy)` is at most
/// `radius^2` and divides by the disk area. The disk is not clipped to the
/// board: a sample near the edge simply finds no points in the part of the
/// disk that hangs outside, so edge samples read low. That boundary bias is
/// accepted as part of the game's difficulty.
///
/// # Examples
///
/// ```
/// use indexsis_engine::core::density;
///
/// assert_eq!(density::local_density(&[], 100.0, 100.0, 50.0), 0.0);
/// ```
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn local_density(points: &[Point], cx: f64, cy: f64, radius: f64) -> f64 {
    let center = Point::new(cx, cy);
    let radius_squared = radius * radius;
    let inside = points
        .iter()
        .filter(|point| point.distance_squared(center) <= radius_squared)
        .count();
    inside as f64 / (PI * radius_squared)
}

/// True points-per-unit-area over the whole board.
///
/// Exact, not sampled: `point_count / board_size^2`.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn actual_density(point_count: usize, board_size: f64) -> f64 {
    point_count as f64 / (board_size * board_size)
}

/// Spatial standard deviation of local density across a `10 x 10` grid
/// partition of the board.
///
/// Each point is bucketed into its grid cell in a single pass; every cell's
/// count is divided by the cell area, and the population standard deviation
/// across the 100 cell densities is returned. A near-uniform board yields a
/// value near zero (demanding near-exact guesses); a heavily clustered board
/// yields a larger value and is more forgiving, since this statistic is the
/// tolerance used by the scorer.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn spatial_std_dev(points: &[Point], board_size: f64) -> f64 {
    let cell_size = board_size / DISPERSION_GRID_SIZE as f64;
    let cell_area = cell_size * cell_size;

    let mut counts = [0_usize; DISPERSION_GRID_SIZE * DISPERSION_GRID_SIZE];
    for point in points {
        // A coordinate exactly on the far board edge is clamped into the
        // last cell so every point lands in exactly one cell.
        let col = ((point.x / cell_size) as usize).min(DISPERSION_GRID_SIZE - 1);
        let row = ((point.y / cell_size) as usize).min(DISPERSION_GRID_SIZE - 1);
        counts[row * DISPERSION_GRID_SIZE + col] += 1;
    }

    let densities = counts.iter().map(|&count| count as f64 / cell_area);
    DescriptiveStats::new(densities).map_or(0.0, |stats| stats.std_dev)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_density_on_empty_point_set_is_zero() {
        assert_eq!(local_density(&[], 100.0, 100.0, 50.0), 0.0);
    }

    #[test]
    fn test_local_density_counts_boundary_points() {
        let points = [
            Point::new(0.0, 0.0),  // center
            Point::new(3.0, 4.0),  // distance 5, exactly on the boundary
            Point::new(5.1, 0.0),  // just outside
            Point::new(-2.0, 1.0), // inside
        ];
        let density = local_density(&points, 0.0, 0.0, 5.0);
        let expected = 3.0 / (PI * 25.0);
        assert!((density - expected).abs() < 1e-12);
    }

    #[test]
    fn test_local_density_disk_may_extend_past_board() {
        // Sample centered on the board corner: only the one point inside the
        // quarter-disk that overlaps the board is counted, and the density is
        // still computed against the full disk area.
        let points = [Point::new(2.0, 2.0)];
        let density = local_density(&points, 0.0, 0.0, 10.0);
        assert!((density - 1.0 / (PI * 100.0)).abs() < 1e-15);
    }

    #[test]
    fn test_actual_density_is_exact() {
        assert_eq!(actual_density(50_000, 600.0), 50_000.0 / 360_000.0);
        assert_eq!(actual_density(0, 600.0), 0.0);
        assert_eq!(actual_density(1, 1.0), 1.0);
    }

    #[test]
    fn test_spatial_std_dev_zero_for_identical_cell_densities() {
        // One point at the center of each of the 100 cells.
        let board_size = 100.0;
        let mut points = Vec::new();
        for row in 0..10 {
            for col in 0..10 {
                points.push(Point::new(
                    f64::from(col) * 10.0 + 5.0,
                    f64::from(row) * 10.0 + 5.0,
                ));
            }
        }
        assert_eq!(spatial_std_dev(&points, board_size), 0.0);
    }

    #[test]
    fn test_spatial_std_dev_empty_board_is_zero() {
        assert_eq!(spatial_std_dev(&[], 600.0), 0.0);
    }

    #[test]
    fn test_spatial_std_dev_of_concentrated_points() {
        // All points in one cell: 99 cells at density 0, one cell at 5/100.
        let board_size = 100.0;
        let points = [
            Point::new(1.0, 1.0),
            Point::new(2.0, 1.0),
            Point::new(3.0, 1.0),
            Point::new(4.0, 1.0),
            Point::new(5.0, 1.0),
        ];
        let cell_density: f64 = 5.0 / 100.0;
        let mean = cell_density / 100.0;
        let variance =
            ((cell_density - mean).powi(2) + 99.0 * mean * mean) / 100.0;
        let expected = variance.sqrt();
        assert!((spatial_std_dev(&points, board_size) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_spatial_std_dev_is_non_negative() {
        let points = [
            Point::new(10.0, 20.0),
            Point::new(400.0, 30.0),
            Point::new(599.0, 599.0),
        ];
        assert!(spatial_std_dev(&points, 600.0) >= 0.0);
    }

    #[test]
    fn test_point_on_far_edge_is_clamped_into_last_cell() {
        // Must not panic or drop the point.
        let points = [Point::new(600.0, 600.0)];
        assert!(spatial_std_dev(&points, 600.0) > 0.0);
    }
}
