//! Display sink that remembers every notification.

use mazeline::{Cell, Coordinate, Direction, DisplaySink, Exchange};

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub revealed: Vec<Coordinate>,
    pub positions: Vec<(Coordinate, Direction)>,
    pub debug: Vec<String>,
    /// History length handed to each replay request
    pub replays: Vec<usize>,
}

impl RecordingDisplay {
    pub fn saw_debug(&self, needle: &str) -> bool {
        self.debug.iter().any(|line| line.contains(needle))
    }
}

impl DisplaySink for RecordingDisplay {
    fn on_cell_revealed(&mut self, cell: &Cell) {
        self.revealed.push(cell.coordinate());
    }

    fn on_position(&mut self, at: Coordinate, facing: Direction) {
        self.positions.push((at, facing));
    }

    fn on_debug(&mut self, message: &str) {
        self.debug.push(message.to_string());
    }

    fn replay(&mut self, history: &[Exchange]) {
        self.replays.push(history.len());
    }
}
