use std::path::Path;

use chrono::{DateTime, Utc};
use indexsis_engine::{GameConfig, GameSession, RoundResult};
use serde::Serialize;

use crate::util::Output;

/// A finished game saved as JSON for later inspection.
///
/// Captures everything needed to review a game after the fact: the settings
/// it was played under, every round's samples, guess, and score, and the
/// per-player totals (index 0 is player 1).
#[derive(Debug, Serialize)]
pub struct GameRecord {
    pub created_at: DateTime<Utc>,
    pub player_count: u8,
    pub config: GameConfig,
    pub rounds: Vec<RoundResult>,
    pub total_scores: Vec<f64>,
}

impl GameRecord {
    /// Captures the state of a (normally completed) session.
    pub fn from_session(session: &GameSession) -> Self {
        let total_scores = (1..=session.player_count())
            .map(|player| session.total_score(player))
            .collect();
        Self {
            created_at: Utc::now(),
            player_count: session.player_count(),
            config: session.config().clone(),
            rounds: session.rounds().to_vec(),
            total_scores,
        }
    }

    /// Writes the record as pretty-printed JSON.
    pub fn save<P>(&self, path: P) -> anyhow::Result<()>
    where
        P: AsRef<Path>,
    {
        Output::save_json(self, Some(path.as_ref().to_path_buf()))
    }
}
