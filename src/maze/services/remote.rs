//! # Remote Maze Contract
//!
//! The three calls the maze server offers. Implementations own the transport;
//! the traversal engine only sees decoded cells or a [`RemoteError`].

use crate::maze::models::{Cell, Coordinate, Direction};
use crate::maze::services::history::Exchange;
use thiserror::Error;

/// A maze call that could not be completed
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl RemoteError {
    pub fn url(&self) -> &str {
        match self {
            RemoteError::Transport { url, .. }
            | RemoteError::Status { url, .. }
            | RemoteError::Decode { url, .. } => url,
        }
    }

    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Transport { .. } => None,
            RemoteError::Status { status, .. } | RemoteError::Decode { status, .. } => {
                Some(*status)
            }
        }
    }

    /// Raw response body, when one was received
    pub fn body(&self) -> Option<&str> {
        match self {
            RemoteError::Transport { .. } => None,
            RemoteError::Status { body, .. } | RemoteError::Decode { body, .. } => Some(body),
        }
    }
}

/// Client side of the maze API.
///
/// Calls against one session token must never overlap; `&mut self` keeps
/// them strictly sequential.
pub trait RemoteMaze {
    /// Start a session; the returned cell carries the new token and start coordinate
    fn init(&mut self) -> Result<Cell, RemoteError>;

    /// Advance the server cursor one step and reveal the cell it lands on
    fn move_toward(&mut self, token: &str, direction: Direction) -> Result<Cell, RemoteError>;

    /// Relocate the server cursor without consuming a move
    fn jump(&mut self, token: &str, to: Coordinate) -> Result<Cell, RemoteError>;

    /// Every exchange so far, oldest first
    fn history(&self) -> &[Exchange] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_should_expose_status_and_body() {
        let err = RemoteError::Status {
            url: "http://maze/api/move".to_string(),
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.body(), Some("boom"));
        assert_eq!(err.url(), "http://maze/api/move");
        assert_eq!(err.to_string(), "http://maze/api/move returned status 500");
    }

    #[test]
    fn transport_error_should_have_no_status_or_body() {
        let err = RemoteError::Transport {
            url: "http://maze/api/init".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(err.status(), None);
        assert_eq!(err.body(), None);
    }
}
