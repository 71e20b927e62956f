//! # Services
//!
//! Talking to the maze server and remembering what was said.

pub mod history;
pub mod http;
pub mod remote;

pub use history::Exchange;
pub use http::{HttpMazeClient, DEFAULT_BASE_URL};
pub use remote::{RemoteError, RemoteMaze};
