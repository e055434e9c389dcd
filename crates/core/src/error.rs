//! Engine error type.
//!
//! Contract violations (`is_fatal`) mean the caller broke an invariant; the board
//! that produced one must not be used further. Everything else is recoverable.

use cube_match3_types::{Face, GridPoint};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("point {point} is outside a board of extent {extent}")]
    OutOfRange { point: GridPoint, extent: usize },
    #[error("invalid shift in column {column}: from row {from} to row {to}")]
    InvalidShift { column: i32, from: i32, to: i32 },
    #[error("no visual node at {point} on face {face}")]
    MissingNode { point: GridPoint, face: Face },
    #[error("invalid rule set: {0}")]
    InvalidRule(&'static str),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("unknown debug map token {0:?}")]
    UnknownToken(char),
    #[error("not supported yet: {0}")]
    Unsupported(&'static str),
}

impl EngineError {
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::OutOfRange { .. } => "out_of_range",
            EngineError::InvalidShift { .. } => "invalid_shift",
            EngineError::MissingNode { .. } => "missing_node",
            EngineError::InvalidRule(_) => "invalid_rule",
            EngineError::InvalidConfig(_) => "invalid_config",
            EngineError::UnknownToken(_) => "unknown_token",
            EngineError::Unsupported(_) => "unsupported",
        }
    }

    /// True for invariant violations that leave the board untrustworthy
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            EngineError::OutOfRange { .. }
                | EngineError::InvalidShift { .. }
                | EngineError::MissingNode { .. }
        )
    }
}
