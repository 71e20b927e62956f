//! # Traversal Errors
//!
//! Every variant is fatal: the traversal halts where it failed and nothing
//! is retried.

use crate::maze::models::{ConsistencyError, Coordinate, GRID_SIZE};
use crate::maze::services::RemoteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraversalError {
    /// The maze server could not be reached or refused the call
    #[error(transparent)]
    Transport(#[from] RemoteError),

    #[error("coordinate {coordinate} lies outside the {size}x{size} grid", size = GRID_SIZE)]
    BoundsViolation { coordinate: Coordinate },

    #[error(transparent)]
    StateConsistency(#[from] ConsistencyError),

    #[error("cell at {coordinate} has no open side")]
    Enclosed { coordinate: Coordinate },

    #[error("no cell known at {coordinate}")]
    UnknownPosition { coordinate: Coordinate },

    #[error("gave up after {limit} steps without reaching the end")]
    StepLimit { limit: u64 },
}

impl TraversalError {
    /// Whether this failure came from the maze server round trip
    pub fn is_transport(&self) -> bool {
        matches!(self, TraversalError::Transport(_))
    }
}
