//! # Maze Map
//!
//! Sparse store of every cell the server has revealed, keyed by coordinate.
//! The map only grows; a coordinate is present iff its cell was received.

use crate::maze::models::cell::Cell;
use crate::maze::models::direction::Coordinate;
use std::collections::HashMap;
use thiserror::Error;

/// A revealed cell disagrees with what the map already holds
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyError {
    #[error("cell at {coordinate} was already revealed with a different layout")]
    ConflictingCell {
        coordinate: Coordinate,
        existing: Box<Cell>,
        incoming: Box<Cell>,
    },
    #[error("cell reporting {reported} cannot be stored at {coordinate}")]
    MisplacedCell {
        coordinate: Coordinate,
        reported: Coordinate,
    },
}

#[derive(Debug, Default, Clone)]
pub struct MazeMap {
    cells: HashMap<Coordinate, Cell>,
}

impl MazeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, coordinate: Coordinate) -> Option<&Cell> {
        self.cells.get(&coordinate)
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.cells.contains_key(&coordinate)
    }

    /// Store a revealed cell.
    ///
    /// Re-inserting a cell with the same layout is a no-op and returns
    /// `Ok(false)`; `Ok(true)` means the coordinate was new. A different
    /// layout at an occupied coordinate is a [`ConsistencyError`].
    pub fn insert(&mut self, coordinate: Coordinate, cell: Cell) -> Result<bool, ConsistencyError> {
        if cell.coordinate() != coordinate {
            return Err(ConsistencyError::MisplacedCell {
                coordinate,
                reported: cell.coordinate(),
            });
        }

        match self.cells.get(&coordinate) {
            Some(existing) if existing.same_layout(&cell) => Ok(false),
            Some(existing) => Err(ConsistencyError::ConflictingCell {
                coordinate,
                existing: Box::new(existing.clone()),
                incoming: Box::new(cell),
            }),
            None => {
                self.cells.insert(coordinate, cell);
                Ok(true)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::models::cell::{Wall, Walls};
    use crate::maze::models::direction::Direction;

    fn cell_at(x: i32, y: i32, open: &[Direction]) -> Cell {
        Cell::new("maze", Coordinate::new(x, y), Walls::open_towards(open), false)
    }

    #[test]
    fn insert_then_get_should_return_the_same_cell() {
        let mut map = MazeMap::new();
        let cell = cell_at(2, 3, &[Direction::North, Direction::West]);

        assert!(map.insert(Coordinate::new(2, 3), cell.clone()).unwrap());

        assert_eq!(map.get(Coordinate::new(2, 3)), Some(&cell));
        assert!(map.contains(Coordinate::new(2, 3)));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn get_should_return_none_for_undiscovered_coordinates() {
        let map = MazeMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get(Coordinate::new(0, 0)), None);
        assert!(!map.contains(Coordinate::new(0, 0)));
    }

    #[test]
    fn reinserting_identical_cell_should_be_idempotent() {
        let mut map = MazeMap::new();
        let cell = cell_at(1, 1, &[Direction::East]);
        map.insert(Coordinate::new(1, 1), cell.clone()).unwrap();

        let mut revisit = cell.clone();
        revisit.previously_visited = Some(true);

        assert!(!map.insert(Coordinate::new(1, 1), revisit).unwrap());
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(Coordinate::new(1, 1)), Some(&cell));
    }

    #[test]
    fn inserting_conflicting_cell_should_fail_and_keep_original() {
        let mut map = MazeMap::new();
        let cell = cell_at(1, 1, &[Direction::East]);
        map.insert(Coordinate::new(1, 1), cell.clone()).unwrap();

        let mut changed = cell.clone();
        changed.walls.north = Wall::Open;
        let err = map.insert(Coordinate::new(1, 1), changed).unwrap_err();

        assert!(matches!(
            err,
            ConsistencyError::ConflictingCell { coordinate, .. } if coordinate == Coordinate::new(1, 1)
        ));
        assert_eq!(map.get(Coordinate::new(1, 1)), Some(&cell));
    }

    #[test]
    fn inserting_under_wrong_coordinate_should_fail() {
        let mut map = MazeMap::new();
        let err = map
            .insert(Coordinate::new(4, 4), cell_at(4, 5, &[Direction::South]))
            .unwrap_err();

        assert_eq!(
            err,
            ConsistencyError::MisplacedCell {
                coordinate: Coordinate::new(4, 4),
                reported: Coordinate::new(4, 5),
            }
        );
        assert!(map.is_empty());
    }
}
