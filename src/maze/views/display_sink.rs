//! # Display Sink
//!
//! Fire-and-forget notifications from the traversal engine. Nothing a sink
//! does can influence navigation; rendering problems stay inside the sink.

use crate::maze::models::{Cell, Coordinate, Direction};
use crate::maze::services::Exchange;

pub trait DisplaySink {
    /// A cell was added to the maze map
    fn on_cell_revealed(&mut self, cell: &Cell);

    /// The assumed position or facing changed
    fn on_position(&mut self, _at: Coordinate, _facing: Direction) {}

    /// Diagnostic text such as request URLs and raw responses
    fn on_debug(&mut self, message: &str);

    /// Step the operator through the accumulated request history.
    ///
    /// Only invoked by the application after a fatal remote failure.
    fn replay(&mut self, _history: &[Exchange]) {}
}

/// Headless sink that turns every notification into a tracing event
#[derive(Debug, Default)]
pub struct LogDisplay;

impl DisplaySink for LogDisplay {
    fn on_cell_revealed(&mut self, cell: &Cell) {
        tracing::info!(
            "Revealed {} {} at {}{}",
            cell.glyph(),
            cell.walls.open_mask(),
            cell.coordinate(),
            if cell.is_terminal() { " (end)" } else { "" }
        );
    }

    fn on_position(&mut self, at: Coordinate, facing: Direction) {
        tracing::debug!("At {} facing {}", at, facing.symbol());
    }

    fn on_debug(&mut self, message: &str) {
        tracing::debug!("{}", message);
    }

    fn replay(&mut self, history: &[Exchange]) {
        tracing::error!("Replaying {} exchanges", history.len());
        for (i, exchange) in history.iter().enumerate() {
            tracing::error!("{}", exchange.replay_entry(i));
        }
    }
}
