//! Common test utilities for traversal integration tests
//!
//! - A fake maze server driven by an ASCII layout
//! - A display sink recording every notification

pub mod fake_maze;
pub mod recording_display;

#[allow(unused_imports)]
pub use fake_maze::{Call, FakeMaze, TOKEN};
#[allow(unused_imports)]
pub use recording_display::RecordingDisplay;

/// Five cells in a row, start in the middle, end at the far west
#[allow(dead_code)]
pub const CORRIDOR: &str = "
+-+-+-+-+-+
|E   S    |
+-+-+-+-+-+
";

/// 4x3 maze with one loop; the end touches the east border
#[allow(dead_code)]
pub const SMALL_MAZE: &str = "
+-+-+-+-+
|S|     |
+ + +-+ +
|   |  E|
+ +-+-+ +
|       |
+-+-+-+-+
";
