//! In-memory maze server.
//!
//! Behaves like the real API: one cursor per session, moves into walls are
//! refused, and every call is recorded both as a [`Call`] and as an
//! [`Exchange`] in the history.

use mazeline::{Cell, Coordinate, Direction, Exchange, RemoteError, RemoteMaze, Walls};
use std::collections::{HashMap, HashSet};

pub const TOKEN: &str = "fake-maze-guid";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Init,
    Move(Direction),
    Jump(Coordinate),
}

pub struct FakeMaze {
    walls: HashMap<Coordinate, Walls>,
    start: Coordinate,
    end: Coordinate,
    cursor: Coordinate,
    revealed: HashSet<Coordinate>,
    fail_on: Option<usize>,
    pub calls: Vec<Call>,
    history: Vec<Exchange>,
}

impl FakeMaze {
    /// Parse a maze drawn with `+`, `-` and `|`.
    ///
    /// Cell (x, y) sits at text row `2y + 1`, column `2x + 1`; `S` marks the
    /// start and `E` the end. A space where a wall could be is a passage.
    pub fn parse(layout: &str) -> Self {
        let rows: Vec<Vec<char>> = layout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.chars().collect())
            .collect();
        let height = (rows.len() - 1) / 2;
        let width = (rows[0].len() - 1) / 2;
        let at = |row: usize, col: usize| rows[row].get(col).copied().unwrap_or(' ');

        let mut walls = HashMap::new();
        let mut start = None;
        let mut end = None;
        for y in 0..height {
            for x in 0..width {
                let (row, col) = (2 * y + 1, 2 * x + 1);
                let open: Vec<Direction> = [
                    (Direction::North, at(row - 1, col)),
                    (Direction::East, at(row, col + 1)),
                    (Direction::South, at(row + 1, col)),
                    (Direction::West, at(row, col - 1)),
                ]
                .into_iter()
                .filter(|(_, ch)| *ch == ' ')
                .map(|(d, _)| d)
                .collect();

                let coordinate = Coordinate::new(x as i32, y as i32);
                walls.insert(coordinate, Walls::open_towards(&open));
                match at(row, col) {
                    'S' => start = Some(coordinate),
                    'E' => end = Some(coordinate),
                    _ => {}
                }
            }
        }

        let start = start.expect("layout needs an S");
        Self {
            walls,
            start,
            end: end.unwrap_or(Coordinate::new(-1, -1)),
            cursor: start,
            revealed: HashSet::new(),
            fail_on: None,
            calls: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Answer call number `index` (0 = init) with a 500
    pub fn failing_on(mut self, index: usize) -> Self {
        self.fail_on = Some(index);
        self
    }

    #[allow(dead_code)]
    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    #[allow(dead_code)]
    pub fn jumps(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Jump(_))).count()
    }

    pub fn cell(&self, at: Coordinate) -> Cell {
        let walls = self.walls[&at];
        Cell::new(TOKEN, at, walls, at == self.end)
    }

    fn answer(&mut self, call: Call, url: String) -> Result<Cell, RemoteError> {
        let index = self.calls.len();
        self.calls.push(call.clone());

        if self.fail_on == Some(index) {
            return Err(self.refuse(url, 500, "internal error"));
        }

        let landed = match call {
            Call::Init => self.start,
            Call::Move(direction) => {
                if direction.is_closed(&self.cell(self.cursor)) {
                    return Err(self.refuse(url, 400, "cannot move through a wall"));
                }
                direction.step(self.cursor)
            }
            Call::Jump(to) => {
                if !self.revealed.contains(&to) {
                    return Err(self.refuse(url, 400, "cannot jump to an unvisited cell"));
                }
                to
            }
        };

        self.cursor = landed;
        self.revealed.insert(landed);
        let cell = self.cell(landed);
        let body = serde_json::json!({ "currentCell": cell }).to_string();
        self.history.push(Exchange::new(url, Some(200), body));
        Ok(cell)
    }

    fn refuse(&mut self, url: String, status: u16, body: &str) -> RemoteError {
        self.history
            .push(Exchange::new(url.clone(), Some(status), body));
        RemoteError::Status {
            url,
            status,
            body: body.to_string(),
        }
    }
}

impl RemoteMaze for FakeMaze {
    fn init(&mut self) -> Result<Cell, RemoteError> {
        self.answer(Call::Init, "fake://maze/init".to_string())
    }

    fn move_toward(&mut self, token: &str, direction: Direction) -> Result<Cell, RemoteError> {
        assert_eq!(token, TOKEN);
        let url = format!("fake://maze/move?mazeGuid={token}&direction={direction}");
        self.answer(Call::Move(direction), url)
    }

    fn jump(&mut self, token: &str, to: Coordinate) -> Result<Cell, RemoteError> {
        assert_eq!(token, TOKEN);
        let url = format!("fake://maze/jump?mazeGuid={token}&x={}&y={}", to.x, to.y);
        self.answer(Call::Jump(to), url)
    }

    fn history(&self) -> &[Exchange] {
        &self.history
    }
}
