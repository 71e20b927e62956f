//! # Views
//!
//! Everything the traversal engine reports to is a [`DisplaySink`].

pub mod display_sink;
pub mod terminal_display;

pub use display_sink::{DisplaySink, LogDisplay};
pub use terminal_display::TerminalDisplay;
