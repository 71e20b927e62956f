//! # Wall-Following Navigator
//!
//! Keeps one hand on the wall: first try turning toward the bias side, then
//! sweep back the other way until an open side is found. With the default
//! LEFT bias the order is left, ahead, right, back.

use crate::maze::models::{Cell, Direction, Turn};

/// Pick the next facing direction from the current cell.
///
/// Returns `None` when every side of the cell is blocked. At most four
/// candidates are examined.
pub fn next_direction(cell: &Cell, facing: Direction, bias: Turn) -> Option<Direction> {
    let mut candidate = facing.turn(bias);
    for _ in 0..4 {
        if candidate.is_open(cell) {
            return Some(candidate);
        }
        candidate = candidate.turn(bias.other());
    }
    None
}

/// Stateless wall follower holding its turn bias
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    bias: Turn,
}

impl Navigator {
    pub fn new(bias: Turn) -> Self {
        Self { bias }
    }

    pub fn bias(&self) -> Turn {
        self.bias
    }

    pub fn next_direction(&self, cell: &Cell, facing: Direction) -> Option<Direction> {
        next_direction(cell, facing, self.bias)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Turn::Left)
    }
}
