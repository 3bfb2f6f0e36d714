//! Game engine logic and round orchestration.
//!
//! This module provides the high-level game logic that orchestrates the core
//! statistical functions into rounds of play:
//!
//! - [`BoardGenerator`] - Seeded clustered point placement
//! - [`BoardSeed`] - Seed for deterministic board generation
//! - [`GameConfig`] - Tunable game settings (board size, sample budget, ...)
//! - [`GameSession`] - Multi-round session with the phase state machine
//! - [`scoring`] - Mapping a density guess to a bounded score
//!
//! # Game Flow
//!
//! A round progresses as follows:
//!
//! 1. [`GameSession::start`] generates a board with a hidden point set
//! 2. The player spends a limited budget of disk samples
//!    ([`GameSession::take_sample`]) to probe local density
//! 3. Once samples are exhausted, the player submits a density guess
//!    ([`GameSession::submit_guess`]), which is scored against the board's
//!    true density and spatial standard deviation
//! 4. [`GameSession::advance`] either completes the game or hands off to the
//!    next round, pre-generating the next board during the handoff
//!
//! # Example
//!
//! ```
//! use indexsis_engine::{GameConfig, GameSession};
//!
//! let config = GameConfig {
//!     min_dots: 500,
//!     max_dots: 1000,
//!     ..GameConfig::default()
//! };
//! let mut session = GameSession::new(config, 1);
//! session.start().unwrap();
//!
//! let sample = session.take_sample(300.0, 300.0).unwrap();
//! assert!(sample.local_density >= 0.0);
//! ```

pub use self::{board_generator::*, game_config::*, game_session::*, round::*};

mod board_generator;
mod game_config;
mod game_session;
mod round;
pub mod scoring;
