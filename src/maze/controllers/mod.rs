//! # Controllers
//!
//! [`TraversalController`] is the maze-walking state machine;
//! [`AppController`] wires it to configuration, the network and a display.

pub mod app_controller;
pub mod traversal;

pub use app_controller::AppController;
pub use traversal::{
    TraversalController, TraversalOutcome, TraversalState, TraversalStats, TraversalStatus,
};
