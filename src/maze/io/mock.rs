//! # Mock I/O
//!
//! Scripted input and a recording screen for exercising the terminal display
//! without a TTY.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::collections::{HashMap, VecDeque};
use std::io::Write;
use std::time::Duration;

/// Event stream replaying a fixed queue of events
#[derive(Debug, Default)]
pub struct MockEventStream {
    events: VecDeque<Event>,
    reads: usize,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
            reads: 0,
        }
    }

    /// Queue `count` plain key presses
    pub fn with_key_presses(count: usize) -> Self {
        Self::new(
            (0..count)
                .map(|_| Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::empty())))
                .collect(),
        )
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Number of events consumed so far
    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        let event = self
            .events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))?;
        self.reads += 1;
        Ok(event)
    }

    fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}

/// Terminal operation recorded by [`MockRenderStream`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    ClearScreen,
    MoveCursor(u16, u16),
    HideCursor,
    ShowCursor,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    Flush,
}

/// Render stream that keeps a character grid of what would be on screen
#[derive(Debug)]
pub struct MockRenderStream {
    size: TerminalSize,
    cursor: (u16, u16),
    screen: HashMap<(u16, u16), char>,
    commands: Vec<RenderCommand>,
    raw_mode: bool,
    alternate_screen: bool,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((160, 50))
    }

    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            size,
            cursor: (0, 0),
            screen: HashMap::new(),
            commands: Vec::new(),
            raw_mode: false,
            alternate_screen: false,
        }
    }

    /// Character at (column, row), space when nothing was drawn there
    pub fn char_at(&self, x: u16, y: u16) -> char {
        self.screen.get(&(x, y)).copied().unwrap_or(' ')
    }

    /// Text of one screen row with trailing spaces removed
    pub fn row_text(&self, y: u16) -> String {
        let row: String = (0..self.size.0).map(|x| self.char_at(x, y)).collect();
        row.trim_end().to_string()
    }

    /// Whether any row contains `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        (0..self.size.1).any(|y| self.row_text(y).contains(needle))
    }

    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode
    }

    pub fn is_alternate_screen(&self) -> bool {
        self.alternate_screen
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        for ch in String::from_utf8_lossy(buf).chars() {
            if self.cursor.0 < self.size.0 && self.cursor.1 < self.size.1 {
                self.screen.insert(self.cursor, ch);
            }
            self.cursor.0 = self.cursor.0.saturating_add(1);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.commands.push(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::ClearScreen);
        self.screen.clear();
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.commands.push(RenderCommand::MoveCursor(x, y));
        self.cursor = (x, y);
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::HideCursor);
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::ShowCursor);
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(self.size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::EnterAlternateScreen);
        self.alternate_screen = true;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::LeaveAlternateScreen);
        self.alternate_screen = false;
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::EnableRawMode);
        self.raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::DisableRawMode);
        self.raw_mode = false;
        Ok(())
    }
}
