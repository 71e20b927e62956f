//! # Terminal Display
//!
//! Two bordered panes: MAZE on the left, where each revealed cell is drawn as
//! a box-drawing glyph at its grid position, and a scrolling DEBUG pane on
//! the right. The terminal cursor sits on the explorer's assumed position.

use crate::maze::io::{EventStream, RenderStream};
use crate::maze::models::{Cell, Coordinate, Direction, GRID_SIZE};
use crate::maze::services::Exchange;
use crate::maze::views::DisplaySink;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use std::collections::VecDeque;
use std::time::Duration;

/// Gap between the two panes
const PANE_GAP: u16 = 2;

/// Column of the pane title inside the top border
const TITLE_OFFSET: u16 = 5;

/// Screen rectangle of a pane's inner area (borders excluded)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneArea {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Split the terminal into the maze and debug panes
pub fn layout(terminal: (u16, u16)) -> (PaneArea, PaneArea) {
    let (columns, rows) = terminal;
    let inner_height = rows.saturating_sub(2).min(GRID_SIZE as u16);
    let maze_width = (columns.saturating_sub(PANE_GAP + 4) / 2).min(GRID_SIZE as u16);

    let maze = PaneArea {
        x: 1,
        y: 1,
        width: maze_width,
        height: inner_height,
    };
    let debug_x = maze_width + 2 + PANE_GAP + 1;
    let debug = PaneArea {
        x: debug_x,
        y: 1,
        width: columns.saturating_sub(debug_x + 1),
        height: rows.saturating_sub(2),
    };
    (maze, debug)
}

pub struct TerminalDisplay<RS: RenderStream, ES: EventStream> {
    render_stream: RS,
    event_stream: ES,
    maze_area: PaneArea,
    debug_area: PaneArea,
    debug_lines: VecDeque<String>,
    position: Option<(Coordinate, Direction)>,
}

impl<RS: RenderStream, ES: EventStream> TerminalDisplay<RS, ES> {
    pub fn new(render_stream: RS, event_stream: ES) -> Result<Self> {
        let (maze_area, debug_area) = layout(render_stream.get_size()?);
        tracing::debug!("Maze pane {:?}, debug pane {:?}", maze_area, debug_area);

        Ok(Self {
            render_stream,
            event_stream,
            maze_area,
            debug_area,
            debug_lines: VecDeque::new(),
            position: None,
        })
    }

    pub fn render_stream(&self) -> &RS {
        &self.render_stream
    }

    pub fn event_stream(&self) -> &ES {
        &self.event_stream
    }

    /// Take over the terminal and draw the empty panes
    pub fn initialize(&mut self) -> Result<()> {
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.enable_raw_mode()?;
        self.render_stream.clear_screen()?;
        self.draw_frames()?;
        self.render_stream.flush()?;
        Ok(())
    }

    /// Give the terminal back
    pub fn cleanup(&mut self) -> Result<()> {
        self.render_stream.show_cursor()?;
        self.render_stream.disable_raw_mode()?;
        self.render_stream.leave_alternate_screen()?;
        Ok(())
    }

    /// Block until the operator presses a key.
    ///
    /// Returns early when the event source can never produce another event.
    pub fn wait_for_key(&mut self) -> Result<()> {
        loop {
            if self.event_stream.poll(Duration::from_millis(100))? {
                if let Event::Key(key) = self.event_stream.read()? {
                    if key.kind == KeyEventKind::Press {
                        return Ok(());
                    }
                }
            } else if self.event_stream.is_exhausted() {
                return Ok(());
            }
        }
    }

    fn draw_frames(&mut self) -> Result<()> {
        let maze = self.maze_area;
        let debug = self.debug_area;
        self.draw_border(maze, "[MAZE]")?;
        self.draw_border(debug, "[DEBUG]")
    }

    fn draw_border(&mut self, area: PaneArea, title: &str) -> Result<()> {
        let left = area.x - 1;
        let top = area.y - 1;
        let right = area.x + area.width;
        let bottom = area.y + area.height;
        let horizontal = "─".repeat(area.width as usize);

        self.render_stream.move_cursor(left, top)?;
        write!(self.render_stream, "┌{horizontal}┐")?;
        for row in area.y..bottom {
            self.render_stream.move_cursor(left, row)?;
            write!(self.render_stream, "│")?;
            self.render_stream.move_cursor(right, row)?;
            write!(self.render_stream, "│")?;
        }
        self.render_stream.move_cursor(left, bottom)?;
        write!(self.render_stream, "└{horizontal}┘")?;

        self.draw_title(area, title)
    }

    fn draw_title(&mut self, area: PaneArea, title: &str) -> Result<()> {
        let room = area.width.saturating_sub(TITLE_OFFSET) as usize;
        let shown: String = title.chars().take(room).collect();
        let blank = "─".repeat(room.saturating_sub(shown.chars().count()));
        self.render_stream.move_cursor(area.x - 1 + TITLE_OFFSET, area.y - 1)?;
        write!(self.render_stream, "{shown}{blank}")?;
        Ok(())
    }

    /// Screen position of a grid coordinate, if it fits in the maze pane
    fn screen_position(&self, at: Coordinate) -> Option<(u16, u16)> {
        let area = self.maze_area;
        let inside = at.x >= 0
            && at.y >= 0
            && (at.x as u16) < area.width
            && (at.y as u16) < area.height;
        inside.then(|| (area.x + at.x as u16, area.y + at.y as u16))
    }

    fn draw_cell(&mut self, cell: &Cell) -> Result<()> {
        if let Some((x, y)) = self.screen_position(cell.coordinate()) {
            self.render_stream.move_cursor(x, y)?;
            write!(self.render_stream, "{}", cell.glyph())?;
        }
        self.park_cursor()
    }

    fn draw_position(&mut self, at: Coordinate, facing: Direction) -> Result<()> {
        self.position = Some((at, facing));
        let title = format!("[MAZE {} {}]", facing.symbol(), at);
        self.draw_title(self.maze_area, &title)?;
        self.park_cursor()
    }

    /// Leave the terminal cursor on the explorer's position
    fn park_cursor(&mut self) -> Result<()> {
        match self.position.and_then(|(at, _)| self.screen_position(at)) {
            Some((x, y)) => {
                self.render_stream.move_cursor(x, y)?;
                self.render_stream.show_cursor()?;
            }
            None => self.render_stream.hide_cursor()?,
        }
        self.render_stream.flush()?;
        Ok(())
    }

    fn push_debug(&mut self, message: &str) -> Result<()> {
        for line in message.lines() {
            self.debug_lines.push_back(line.to_string());
        }
        while self.debug_lines.len() > self.debug_area.height as usize {
            self.debug_lines.pop_front();
        }
        self.draw_debug()
    }

    fn clear_debug(&mut self) -> Result<()> {
        self.debug_lines.clear();
        self.draw_debug()
    }

    fn draw_debug(&mut self) -> Result<()> {
        let area = self.debug_area;
        let width = area.width as usize;
        for row in 0..area.height {
            let text = self
                .debug_lines
                .get(row as usize)
                .map(String::as_str)
                .unwrap_or("");
            let shown: String = text.chars().take(width).collect();
            self.render_stream.move_cursor(area.x, area.y + row)?;
            write!(self.render_stream, "{shown:<width$}")?;
        }
        self.park_cursor()
    }

    fn run_replay(&mut self, history: &[Exchange]) -> Result<()> {
        self.push_debug("Prepare to step through an action replay")?;
        self.wait_for_key()?;
        self.clear_debug()?;
        self.push_debug("REPLAY")?;
        for (i, exchange) in history.iter().enumerate() {
            self.push_debug(&exchange.replay_entry(i))?;
            self.wait_for_key()?;
        }
        Ok(())
    }
}

impl<RS: RenderStream, ES: EventStream> DisplaySink for TerminalDisplay<RS, ES> {
    fn on_cell_revealed(&mut self, cell: &Cell) {
        if let Err(e) = self.draw_cell(cell) {
            tracing::warn!("Failed to draw cell {}: {}", cell.coordinate(), e);
        }
    }

    fn on_position(&mut self, at: Coordinate, facing: Direction) {
        if let Err(e) = self.draw_position(at, facing) {
            tracing::warn!("Failed to draw position {}: {}", at, e);
        }
    }

    fn on_debug(&mut self, message: &str) {
        if let Err(e) = self.push_debug(message) {
            tracing::warn!("Failed to write debug pane: {}", e);
        }
    }

    fn replay(&mut self, history: &[Exchange]) {
        if let Err(e) = self.run_replay(history) {
            tracing::warn!("Replay aborted: {}", e);
        }
    }
}
