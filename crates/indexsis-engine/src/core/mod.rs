//! Core data structures and pure statistical functions.
//!
//! This module provides the building blocks the game engine orchestrates:
//!
//! - [`Point`] - A single placed dot on the board
//! - [`Board`] - A square board and the hidden point set placed on it
//! - [`Cluster`] - A transient density cluster used during generation
//! - [`density`] - Local density, global density, and spatial dispersion
//!
//! Everything here is a pure, synchronous, CPU-bound computation with no I/O.

pub use self::{board::*, cluster::*, point::*};

pub mod board;
pub mod cluster;
pub mod density;
pub mod point;
pub(crate) mod spatial_grid;
