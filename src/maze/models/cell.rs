//! # Cell Model
//!
//! A snapshot of one maze cell as revealed by the server. Cells are never
//! mutated after they are fetched; the server owns the truth.

use crate::maze::models::direction::{Coordinate, Direction};
use serde::{Deserialize, Serialize};

/// Box-drawing glyphs indexed by the bitmask of open walls (bit = direction ordinal)
pub const CELL_GLYPHS: [char; 16] = [
    ' ', '╨', '╞', '╚', '╥', '║', '╔', '╠', '╡', '╝', '═', '╩', '╗', '╣', '╦', '╬',
];

/// State of one side of a cell.
///
/// The server reports `"BLOCKED"` for walls and several other values
/// (`"UNEXPLORED"`, `"VISITED"`) for passages; all of those mean open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Wall {
    Blocked,
    #[serde(other)]
    Open,
}

/// The four sides of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Walls {
    pub north: Wall,
    pub east: Wall,
    pub south: Wall,
    pub west: Wall,
}

impl Walls {
    /// Build walls from the set of open directions; everything else is blocked
    pub fn open_towards(open: &[Direction]) -> Self {
        let side = |d: Direction| {
            if open.contains(&d) {
                Wall::Open
            } else {
                Wall::Blocked
            }
        };
        Self {
            north: side(Direction::North),
            east: side(Direction::East),
            south: side(Direction::South),
            west: side(Direction::West),
        }
    }

    /// Build walls from a bitmask of open sides (bit = direction ordinal)
    pub fn from_open_mask(mask: u8) -> Self {
        let open: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|d| mask & (1 << d.ordinal()) != 0)
            .collect();
        Self::open_towards(&open)
    }

    pub fn get(&self, direction: Direction) -> Wall {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    /// Bitmask of open sides (bit = direction ordinal)
    pub fn open_mask(&self) -> u8 {
        Direction::ALL
            .into_iter()
            .filter(|d| self.get(*d) == Wall::Open)
            .fold(0, |mask, d| mask | (1 << d.ordinal()))
    }
}

/// A discovered maze cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Session token of the maze instance this cell belongs to
    pub maze_guid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub at_end: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previously_visited: Option<bool>,
    #[serde(flatten)]
    pub walls: Walls,
    pub x: i32,
    pub y: i32,
}

/// Envelope the maze API wraps every cell in
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CellResponse {
    current_cell: Cell,
}

impl Cell {
    pub fn new(maze_guid: impl Into<String>, at: Coordinate, walls: Walls, at_end: bool) -> Self {
        Self {
            maze_guid: maze_guid.into(),
            note: None,
            at_end,
            previously_visited: None,
            walls,
            x: at.x,
            y: at.y,
        }
    }

    /// Decode the `{"currentCell": {...}}` body returned by every maze call
    pub fn from_response_body(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<CellResponse>(body).map(|r| r.current_cell)
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }

    /// Whether this is the maze's end cell
    pub fn is_terminal(&self) -> bool {
        self.at_end
    }

    /// Compare the parts of a cell that describe the maze itself.
    ///
    /// `note` and `previouslyVisited` change between visits and are ignored.
    pub fn same_layout(&self, other: &Cell) -> bool {
        self.maze_guid == other.maze_guid
            && self.coordinate() == other.coordinate()
            && self.walls == other.walls
            && self.at_end == other.at_end
    }

    pub fn open_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| d.is_open(self))
    }

    /// Box-drawing glyph for this cell's open sides
    pub fn glyph(&self) -> char {
        CELL_GLYPHS[self.walls.open_mask() as usize]
    }
}
