//! # Mazeline - Wall-Following Maze Explorer
//!
//! Explores a maze hosted behind an HTTP API that reveals one cell per
//! request, drawing its progress live in the terminal.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  cells, debug  ┌─────────────────────┐  init/move/jump  ┌──────────────┐
//! │ DisplaySink  │◄───────────────│ TraversalController │─────────────────►│  RemoteMaze  │
//! │              │                │                     │                  │              │
//! │ - Terminal   │                │ - MazeMap           │                  │ - HTTP       │
//! │ - Log        │                │ - Navigator         │                  │ - History    │
//! └──────────────┘                └─────────────────────┘                  └──────────────┘
//!                                           ▲
//!                                           │ settings
//!                                  ┌─────────────────┐
//!                                  │  AppController  │
//!                                  └─────────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod maze;

// Re-export main types for easy access
pub use maze::*;
