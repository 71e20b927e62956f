//! # Traversal Controller
//!
//! Owns the explorer's view of the session: the maze map, the assumed
//! position, the last position the server confirmed and the facing. Each
//! call to [`TraversalController::advance`] takes exactly one step.
//!
//! Steps into already-known cells are local and cost no request. Before the
//! next step into unknown territory the server cursor is stale, so one jump
//! to the assumed position is issued first, then the move.

use crate::maze::error::TraversalError;
use crate::maze::models::{Cell, Coordinate, Direction, MazeMap};
use crate::maze::navigator::Navigator;
use crate::maze::services::RemoteMaze;
use crate::maze::views::DisplaySink;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalStatus {
    Running,
    Completed,
}

/// Position bookkeeping for one maze session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalState {
    /// Server-issued session token
    pub token: String,
    /// Where the explorer believes it is
    pub position: Coordinate,
    /// Where the server cursor was left by the last round trip
    pub last_confirmed: Coordinate,
    pub facing: Direction,
}

impl TraversalState {
    /// Whether local moves have left the server cursor behind
    pub fn is_diverged(&self) -> bool {
        self.position != self.last_confirmed
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraversalStats {
    pub steps: u64,
    pub local_moves: u64,
    pub remote_moves: u64,
    pub jumps: u64,
}

/// Everything left once a traversal is over
#[derive(Debug, Clone)]
pub struct TraversalOutcome {
    pub status: TraversalStatus,
    pub state: TraversalState,
    pub map: MazeMap,
    pub stats: TraversalStats,
}

impl TraversalOutcome {
    /// Cell at the last server-confirmed position
    pub fn final_cell(&self) -> Option<&Cell> {
        self.map.get(self.state.last_confirmed)
    }
}

#[derive(Debug)]
pub struct TraversalController {
    state: TraversalState,
    map: MazeMap,
    navigator: Navigator,
    status: TraversalStatus,
    stats: TraversalStats,
    max_steps: Option<u64>,
}

impl TraversalController {
    /// Open a session with the server and seed the map with the start cell
    pub fn start<R, D>(
        remote: &mut R,
        display: &mut D,
        facing: Direction,
        navigator: Navigator,
    ) -> Result<Self, TraversalError>
    where
        R: RemoteMaze + ?Sized,
        D: DisplaySink + ?Sized,
    {
        let before = remote.history().len();
        let result = remote.init();
        report_exchanges(remote, display, before);
        let cell = result?;

        let start = cell.coordinate();
        if !start.in_bounds() {
            return Err(TraversalError::BoundsViolation { coordinate: start });
        }

        let mut map = MazeMap::new();
        map.insert(start, cell.clone())?;
        display.on_cell_revealed(&cell);
        display.on_position(start, facing);

        let status = if cell.is_terminal() {
            TraversalStatus::Completed
        } else {
            TraversalStatus::Running
        };

        tracing::info!(
            "Maze session {} started at {} facing {}",
            cell.maze_guid,
            start,
            facing
        );

        Ok(Self {
            state: TraversalState {
                token: cell.maze_guid,
                position: start,
                last_confirmed: start,
                facing,
            },
            map,
            navigator,
            status,
            stats: TraversalStats::default(),
            max_steps: None,
        })
    }

    /// Halt with [`TraversalError::StepLimit`] once `limit` steps were taken
    pub fn with_max_steps(mut self, limit: Option<u64>) -> Self {
        self.max_steps = limit;
        self
    }

    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    pub fn map(&self) -> &MazeMap {
        &self.map
    }

    pub fn status(&self) -> TraversalStatus {
        self.status
    }

    pub fn stats(&self) -> TraversalStats {
        self.stats
    }

    pub fn is_completed(&self) -> bool {
        self.status == TraversalStatus::Completed
    }

    /// Cell at the assumed position; always known once the session started
    pub fn current_cell(&self) -> Result<&Cell, TraversalError> {
        self.map
            .get(self.state.position)
            .ok_or(TraversalError::UnknownPosition {
                coordinate: self.state.position,
            })
    }

    /// Take one wall-following step
    pub fn advance<R, D>(
        &mut self,
        remote: &mut R,
        display: &mut D,
    ) -> Result<TraversalStatus, TraversalError>
    where
        R: RemoteMaze + ?Sized,
        D: DisplaySink + ?Sized,
    {
        if self.is_completed() {
            tracing::warn!("advance called on a completed traversal");
            return Ok(self.status);
        }

        let cell = self.current_cell()?;
        let next = self
            .navigator
            .next_direction(cell, self.state.facing)
            .ok_or(TraversalError::Enclosed {
                coordinate: self.state.position,
            })?;

        self.advance_in(next, remote, display)
    }

    /// Take one step in a caller-chosen direction.
    ///
    /// On error neither the map nor the traversal state is touched.
    pub fn advance_in<R, D>(
        &mut self,
        direction: Direction,
        remote: &mut R,
        display: &mut D,
    ) -> Result<TraversalStatus, TraversalError>
    where
        R: RemoteMaze + ?Sized,
        D: DisplaySink + ?Sized,
    {
        if self.is_completed() {
            return Ok(self.status);
        }
        if let Some(limit) = self.max_steps {
            if self.stats.steps >= limit {
                return Err(TraversalError::StepLimit { limit });
            }
        }

        display.on_debug(&format!(
            "previous direction was {} and new direction is {}",
            self.state.facing, direction
        ));

        let target = direction.step(self.state.position);
        if !target.in_bounds() {
            return Err(TraversalError::BoundsViolation { coordinate: target });
        }

        if self.map.contains(target) {
            tracing::debug!("Local move to {}", target);
            self.state.position = target;
            self.stats.local_moves += 1;
        } else {
            let (cell, jumped) = self.fetch(direction, remote, display)?;
            let reported = cell.coordinate();
            if !reported.in_bounds() {
                return Err(TraversalError::BoundsViolation {
                    coordinate: reported,
                });
            }
            if reported != target {
                tracing::warn!(
                    "Server placed us at {} after moving {} toward {}",
                    reported,
                    direction,
                    target
                );
            }
            if direction.opposite().is_closed(&cell) {
                tracing::warn!(
                    "Cell {} reports a wall on the {} side we entered through",
                    reported,
                    direction.opposite()
                );
                display.on_debug(&format!(
                    "warning: entered {} through a blocked {} wall",
                    reported,
                    direction.opposite()
                ));
            }

            if self.map.insert(reported, cell.clone())? {
                display.on_cell_revealed(&cell);
            }
            self.state.position = reported;
            self.state.last_confirmed = reported;
            self.stats.remote_moves += 1;
            if jumped {
                self.stats.jumps += 1;
            }
        }

        self.state.facing = direction;
        self.stats.steps += 1;
        display.on_position(self.state.position, direction);

        if self.current_cell()?.is_terminal() {
            tracing::info!(
                "Reached the end at {} after {} steps",
                self.state.position,
                self.stats.steps
            );
            self.status = TraversalStatus::Completed;
        }

        Ok(self.status)
    }

    /// Step until the end cell is reached
    pub fn run<R, D>(&mut self, remote: &mut R, display: &mut D) -> Result<(), TraversalError>
    where
        R: RemoteMaze + ?Sized,
        D: DisplaySink + ?Sized,
    {
        while !self.is_completed() {
            self.advance(remote, display)?;
        }
        Ok(())
    }

    pub fn into_outcome(self) -> TraversalOutcome {
        TraversalOutcome {
            status: self.status,
            state: self.state,
            map: self.map,
            stats: self.stats,
        }
    }

    /// Resync the server cursor if needed, then move. Does not mutate `self`.
    fn fetch<R, D>(
        &self,
        direction: Direction,
        remote: &mut R,
        display: &mut D,
    ) -> Result<(Cell, bool), TraversalError>
    where
        R: RemoteMaze + ?Sized,
        D: DisplaySink + ?Sized,
    {
        let token = self.state.token.as_str();
        let jumped = self.state.is_diverged();

        if jumped {
            tracing::debug!(
                "Server cursor at {}, jumping to {}",
                self.state.last_confirmed,
                self.state.position
            );
            let before = remote.history().len();
            let result = remote.jump(token, self.state.position);
            report_exchanges(remote, display, before);
            // the echoed cell is already known locally and is not re-checked
            result?;
        }

        let before = remote.history().len();
        let result = remote.move_toward(token, direction);
        report_exchanges(remote, display, before);
        Ok((result?, jumped))
    }
}

/// Forward the exchanges recorded since `from` to the debug pane
fn report_exchanges<R, D>(remote: &R, display: &mut D, from: usize)
where
    R: RemoteMaze + ?Sized,
    D: DisplaySink + ?Sized,
{
    for exchange in remote.history().iter().skip(from) {
        display.on_debug(&exchange.url);
        display.on_debug(&exchange.body);
    }
}
