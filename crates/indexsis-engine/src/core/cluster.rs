use arrayvec::ArrayVec;
use rand::Rng;

use super::point::Point;

/// Minimum number of density clusters per generated board.
pub const MIN_CLUSTERS: usize = 3;
/// Maximum number of density clusters per generated board.
pub const MAX_CLUSTERS: usize = 5;

/// A transient density cluster influencing point acceptance during generation.
///
/// Clusters exist only for the duration of one generation call; they are
/// discarded once the point set is produced and are not part of the round's
/// persisted state. Within its radius a cluster raises the acceptance
/// probability of candidate points, falling off linearly from `intensity` at
/// the center to zero at the edge.
#[derive(Debug, Clone, Copy)]
pub struct Cluster {
    center: Point,
    radius: f64,
    intensity: f64,
}

impl Cluster {
    /// Draws one randomized cluster: center uniform over the board, radius
    /// `board_size * U[0.15, 0.40)`, intensity `U[0.3, 1.0)`.
    fn sample<R>(rng: &mut R, board_size: f64) -> Self
    where
        R: Rng,
    {
        Self {
            center: Point::new(
                rng.random_range(0.0..board_size),
                rng.random_range(0.0..board_size),
            ),
            radius: board_size * rng.random_range(0.15..0.40),
            intensity: rng.random_range(0.3..1.0),
        }
    }

    /// Acceptance-probability contribution of this cluster at `point`.
    ///
    /// Zero outside the cluster radius.
    #[must_use]
    pub fn weight_at(&self, point: Point) -> f64 {
        let distance = self.center.distance_squared(point).sqrt();
        if distance >= self.radius {
            return 0.0;
        }
        self.intensity * (1.0 - distance / self.radius)
    }
}

/// Draws a randomized set of 3 to 5 clusters for one generation call.
pub(crate) fn sample_clusters<R>(rng: &mut R, board_size: f64) -> ArrayVec<Cluster, MAX_CLUSTERS>
where
    R: Rng,
{
    let count = rng.random_range(MIN_CLUSTERS..=MAX_CLUSTERS);
    (0..count).map(|_| Cluster::sample(rng, board_size)).collect()
}
