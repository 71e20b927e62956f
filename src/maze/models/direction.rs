//! # Direction and Turn Primitives
//!
//! Cardinal directions are stored as ordinals 0-3 (NORTH, EAST, SOUTH, WEST)
//! so that rotating is plain modular arithmetic on the ordinal.

use crate::maze::models::cell::{Cell, Wall};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width and height of the remote maze grid
pub const GRID_SIZE: i32 = 100;

/// A grid coordinate, `0 <= x, y < GRID_SIZE` for every valid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check whether the coordinate lies inside the grid
    pub fn in_bounds(&self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Turn amount, expressed as the number of clockwise quarter steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Right,
    Left,
}

impl Turn {
    /// Clockwise quarter steps for this turn (LEFT is three rights)
    pub fn steps(self) -> u8 {
        match self {
            Turn::Right => 1,
            Turn::Left => 3,
        }
    }

    /// The opposite turn
    pub fn other(self) -> Self {
        match self {
            Turn::Right => Turn::Left,
            Turn::Left => Turn::Right,
        }
    }
}

impl FromStr for Turn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LEFT" => Ok(Turn::Left),
            "RIGHT" => Ok(Turn::Right),
            other => Err(format!("unknown turn bias '{other}', expected LEFT or RIGHT")),
        }
    }
}

/// One of the four cardinal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in ordinal order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn ordinal(self) -> u8 {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Self {
        Self::ALL[(ordinal % 4) as usize]
    }

    /// Rotate by -90 degrees
    pub fn left(self) -> Self {
        self.turn(Turn::Left)
    }

    /// Rotate by +90 degrees
    pub fn right(self) -> Self {
        self.turn(Turn::Right)
    }

    /// Rotate by the given turn
    pub fn turn(self, turn: Turn) -> Self {
        Self::from_ordinal(self.ordinal() + turn.steps())
    }

    pub fn opposite(self) -> Self {
        self.right().right()
    }

    /// Check whether this side of the cell is blocked
    pub fn is_closed(self, cell: &Cell) -> bool {
        cell.walls.get(self) == Wall::Blocked
    }

    pub fn is_open(self, cell: &Cell) -> bool {
        !self.is_closed(cell)
    }

    /// Adjacent coordinate one step in this direction.
    ///
    /// No clamping is done; the caller validates the result with
    /// [`Coordinate::in_bounds`].
    pub fn step(self, from: Coordinate) -> Coordinate {
        let (dx, dy) = match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        };
        Coordinate::new(from.x + dx, from.y + dy)
    }

    /// Arrow glyph used when showing the facing direction
    pub fn symbol(self) -> char {
        match self {
            Direction::North => '^',
            Direction::East => '>',
            Direction::South => 'v',
            Direction::West => '<',
        }
    }

    /// Wire name used by the maze API
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NORTH" | "N" => Ok(Direction::North),
            "EAST" | "E" => Ok(Direction::East),
            "SOUTH" | "S" => Ok(Direction::South),
            "WEST" | "W" => Ok(Direction::West),
            other => Err(format!("unknown direction '{other}'")),
        }
    }
}
