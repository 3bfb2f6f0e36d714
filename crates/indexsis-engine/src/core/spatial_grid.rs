use std::collections::HashMap;

use super::point::Point;

/// Uniform spatial hash enforcing the minimum-separation constraint during
/// board generation.
///
/// Cells have side `2 * min_distance`, so every point within `min_distance`
/// of a candidate lives either in the candidate's own cell or in one of its
/// eight neighbors. A separation check scans at most nine cells, keeping each
/// acceptance test near constant time even with tens of thousands of points
/// already placed.
///
/// The grid is an auxiliary index scoped to one generation call; it is
/// dropped together with the call and never outlives the point set.
#[derive(Debug)]
pub(crate) struct SpatialGrid {
    cell_size: f64,
    min_distance_squared: f64,
    cells: HashMap<(i64, i64), Vec<Point>>,
}

impl SpatialGrid {
    pub(crate) fn new(min_distance: f64) -> Self {
        Self {
            cell_size: min_distance * 2.0,
            min_distance_squared: min_distance * min_distance,
            cells: HashMap::new(),
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    fn cell_of(&self, point: Point) -> (i64, i64) {
        let col = (point.x / self.cell_size).floor() as i64;
        let row = (point.y / self.cell_size).floor() as i64;
        (col, row)
    }

    /// Returns `true` when no stored point lies strictly within the minimum
    /// distance of `candidate`.
    pub(crate) fn is_separated(&self, candidate: Point) -> bool {
        let (col, row) = self.cell_of(candidate);
        for dy in -1..=1 {
            for dx in -1..=1 {
                let Some(cell) = self.cells.get(&(col + dx, row + dy)) else {
                    continue;
                };
                if cell
                    .iter()
                    .any(|p| p.distance_squared(candidate) < self.min_distance_squared)
                {
                    return false;
                }
            }
        }
        true
    }

    pub(crate) fn insert(&mut self, point: Point) {
        let key = self.cell_of(point);
        self.cells.entry(key).or_default().push(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_accepts_everything() {
        let grid = SpatialGrid::new(1.0);
        assert!(grid.is_separated(Point::new(0.0, 0.0)));
        assert!(grid.is_separated(Point::new(123.4, 567.8)));
    }

    #[test]
    fn test_rejects_within_min_distance() {
        let mut grid = SpatialGrid::new(1.0);
        grid.insert(Point::new(10.0, 10.0));

        assert!(!grid.is_separated(Point::new(10.0, 10.0)));
        assert!(!grid.is_separated(Point::new(10.5, 10.0)));
        // Exactly at the minimum distance is allowed (strict inequality).
        assert!(grid.is_separated(Point::new(11.0, 10.0)));
        assert!(grid.is_separated(Point::new(12.0, 10.0)));
    }

    #[test]
    fn test_detects_neighbors_across_cell_boundaries() {
        let mut grid = SpatialGrid::new(1.0);
        // Cell side is 2.0, so these two positions land in adjacent cells.
        grid.insert(Point::new(1.9, 1.9));
        assert!(!grid.is_separated(Point::new(2.1, 2.1)));
    }

    #[test]
    fn test_far_points_do_not_interfere() {
        let mut grid = SpatialGrid::new(1.0);
        grid.insert(Point::new(0.0, 0.0));
        assert!(grid.is_separated(Point::new(100.0, 100.0)));
    }
}
