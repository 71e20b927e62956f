//! # I/O Abstraction Layer
//!
//! Trait seams between the terminal display and crossterm, so the display
//! can be driven by recorded mocks in tests.
//!
//! ```text
//! Production:  TerminalDisplay ──▶ TerminalEventStream  ──▶ crossterm::event::read()
//!                              ──▶ TerminalRenderStream ──▶ crossterm::execute!()
//!
//! Testing:     TerminalDisplay ──▶ MockEventStream      ──▶ VecDeque<Event>
//!                              ──▶ MockRenderStream     ──▶ screen grid + command log
//! ```

use anyhow::Result;
use crossterm::event::Event;
use std::io::Write;
use std::time::Duration;

pub mod mock;
pub mod terminal;

pub use mock::{MockEventStream, MockRenderStream, RenderCommand};
pub use terminal::{TerminalEventStream, TerminalRenderStream};

/// Terminal size as (columns, rows)
pub type TerminalSize = (u16, u16);

/// Source of operator input
pub trait EventStream {
    /// Check if an event is ready within `timeout`
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next event; call only after `poll` returned true
    fn read(&mut self) -> Result<Event>;

    /// True when no event will ever arrive again (scripted sources only)
    fn is_exhausted(&self) -> bool {
        false
    }
}

/// Sink for terminal drawing operations
pub trait RenderStream: Write {
    fn clear_screen(&mut self) -> Result<()>;

    /// Move cursor to (column, row)
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    fn hide_cursor(&mut self) -> Result<()>;

    fn show_cursor(&mut self) -> Result<()>;

    fn get_size(&self) -> Result<TerminalSize>;

    fn enter_alternate_screen(&mut self) -> Result<()>;

    fn leave_alternate_screen(&mut self) -> Result<()>;

    fn enable_raw_mode(&mut self) -> Result<()>;

    fn disable_raw_mode(&mut self) -> Result<()>;
}
