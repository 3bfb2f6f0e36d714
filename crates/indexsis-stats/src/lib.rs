//! Statistical analysis utilities for the Indexsis project.
//!
//! This crate provides the descriptive statistics shared by the game engine
//! and the CLI:
//!
//! - The engine computes the spatial standard deviation of a board (the
//!   population standard deviation of per-cell densities), which is the
//!   tolerance against which density guesses are scored.
//! - The CLI summarizes sample densities and per-game scores.
//!
//! # Examples
//!
//! ```
//! use indexsis_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.variance, 2.0);
//! ```

pub mod descriptive;
