//! # Application Controller
//!
//! Wires settings, the remote client and a display together and drives one
//! traversal to its end. After a fatal remote failure it can hand the
//! request history to the display for an operator-paced replay.

use crate::cmd_args::CommandLineArgs;
use crate::config::{self, MazeSettings};
use crate::maze::controllers::traversal::{TraversalController, TraversalOutcome};
use crate::maze::error::TraversalError;
use crate::maze::io::{EventStream, RenderStream};
use crate::maze::navigator::Navigator;
use crate::maze::services::{HttpMazeClient, RemoteMaze};
use crate::maze::views::{DisplaySink, TerminalDisplay};
use anyhow::{Context, Result};

const BANNER_WIDTH: usize = 40;

pub struct AppController<R: RemoteMaze> {
    settings: MazeSettings,
    remote: R,
}

impl AppController<HttpMazeClient> {
    /// Load the profile named on the command line and build the HTTP client
    pub fn new(cmd_args: &CommandLineArgs) -> Result<Self> {
        let profile_path = config::get_profile_path();
        let settings = MazeSettings::load(&profile_path, cmd_args.profile())?
            .with_overrides(cmd_args);
        tracing::debug!("Effective settings: {:?}", settings);

        let remote = HttpMazeClient::new(&settings.base_url, settings.timeout)?;
        Ok(Self::with_remote(settings, remote))
    }
}

impl<R: RemoteMaze> AppController<R> {
    pub fn with_remote(settings: MazeSettings, remote: R) -> Self {
        Self { settings, remote }
    }

    pub fn settings(&self) -> &MazeSettings {
        &self.settings
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Explore until the end cell is reached, reporting to `display`
    pub fn run<D: DisplaySink + ?Sized>(&mut self, display: &mut D) -> Result<TraversalOutcome> {
        match self.traverse(display) {
            Ok(outcome) => {
                let stats = outcome.stats;
                tracing::info!(
                    "Finished in {} steps: {} remote moves, {} local moves, {} jumps, {} cells known",
                    stats.steps,
                    stats.remote_moves,
                    stats.local_moves,
                    stats.jumps,
                    outcome.map.len()
                );
                Ok(outcome)
            }
            Err(e) => {
                tracing::error!("Traversal halted: {}", e);
                if e.is_transport() {
                    self.report_remote_failure(&e, display);
                }
                Err(e).context("maze traversal failed")
            }
        }
    }

    /// Run with the full-screen display, waiting for a key before restoring the terminal
    pub fn run_in_terminal<RS, ES>(&mut self, render_stream: RS, event_stream: ES) -> Result<TraversalOutcome>
    where
        RS: RenderStream,
        ES: EventStream,
    {
        let mut display = TerminalDisplay::new(render_stream, event_stream)?;
        display.initialize()?;

        let result = self.run(&mut display);
        display.on_debug(match &result {
            Ok(_) => "Reached the end. Press any key to exit",
            Err(_) => "Traversal failed. Press any key to exit",
        });
        let waited = display.wait_for_key();

        display.cleanup()?;
        waited?;
        result
    }

    fn traverse<D: DisplaySink + ?Sized>(
        &mut self,
        display: &mut D,
    ) -> Result<TraversalOutcome, TraversalError> {
        let navigator = Navigator::new(self.settings.bias);
        let mut controller =
            TraversalController::start(&mut self.remote, display, self.settings.facing, navigator)?
                .with_max_steps(self.settings.max_steps);

        controller.run(&mut self.remote, display)?;
        Ok(controller.into_outcome())
    }

    fn report_remote_failure<D: DisplaySink + ?Sized>(&self, error: &TraversalError, display: &mut D) {
        let banner = "*".repeat(BANNER_WIDTH);
        display.on_debug(&banner);
        display.on_debug(&format!("ERROR: {error}"));
        if let TraversalError::Transport(remote) = error {
            if let Some(status) = remote.status() {
                display.on_debug(&format!("ERROR: status code {status}"));
            }
        }
        display.on_debug(&banner);

        if self.settings.replay_on_error {
            display.replay(self.remote.history());
        }
    }
}
