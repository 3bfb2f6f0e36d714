pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Error returned when a session operation is invoked in the wrong phase.
#[derive(Debug, Clone, Copy, derive_more::Display, derive_more::Error)]
#[display("operation requires the {required} phase, but the session is in the {actual} phase")]
pub struct PhaseError {
    /// The phase the rejected operation is valid in.
    pub required: GamePhase,
    /// The phase the session was actually in.
    pub actual: GamePhase,
}
