//! # Maze Explorer
//!
//! Walks a remote maze with one hand on the wall, keeping a local map of
//! every revealed cell so already-known ground costs no requests.

pub mod controllers;
pub mod error;
pub mod io;
pub mod models;
pub mod navigator;
pub mod services;
pub mod views;

// Re-export core types
pub use controllers::{
    AppController, TraversalController, TraversalOutcome, TraversalState, TraversalStats,
    TraversalStatus,
};
pub use error::TraversalError;
pub use models::{Cell, ConsistencyError, Coordinate, Direction, MazeMap, Turn, Wall, Walls};
pub use navigator::{next_direction, Navigator};
pub use services::{Exchange, HttpMazeClient, RemoteError, RemoteMaze};
pub use views::{DisplaySink, LogDisplay, TerminalDisplay};
