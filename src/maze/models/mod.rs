//! # Maze Models
//!
//! Plain value types describing what the explorer knows about the maze.

pub mod cell;
pub mod direction;
pub mod maze_map;

pub use cell::{Cell, Wall, Walls, CELL_GLYPHS};
pub use direction::{Coordinate, Direction, Turn, GRID_SIZE};
pub use maze_map::{ConsistencyError, MazeMap};
