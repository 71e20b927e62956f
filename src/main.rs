//! # Mazeline Main Entry Point
//!
//! Explores the remote maze, then prints the final cell as JSON.

use anyhow::Result;
use mazeline::cmd_args::CommandLineArgs;
use mazeline::config::LOG_LEVEL_ENV_VAR;
use mazeline::io::{TerminalEventStream, TerminalRenderStream};
use mazeline::{AppController, LogDisplay};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();
    init_tracing_subscriber(&cmd_args)?;

    let mut app = AppController::new(&cmd_args)?;
    let outcome = if app.settings().headless {
        app.run(&mut LogDisplay)?
    } else {
        app.run_in_terminal(TerminalRenderStream::new(), TerminalEventStream::new())?
    };

    if let Some(cell) = outcome.final_cell() {
        println!("{}", serde_json::to_string_pretty(cell)?);
    }
    Ok(())
}

fn env_filter() -> EnvFilter {
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_LEVEL_ENV_VAR)
        .from_env_lossy();
    for target in ["reqwest", "hyper", "hyper_util", "rustls", "tracing_subscriber"] {
        if let Ok(directive) = format!("{target}=warn").parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// Where tracing output goes
#[derive(Debug, PartialEq, Eq)]
enum LogTarget {
    File(PathBuf),
    Stderr,
    /// The full-screen display owns the terminal, so stray log lines are dropped
    Discard,
}

fn log_target(cmd_args: &CommandLineArgs) -> LogTarget {
    match cmd_args.log_file() {
        Some(path) => LogTarget::File(path.clone()),
        None if cmd_args.headless() => LogTarget::Stderr,
        None => LogTarget::Discard,
    }
}

fn init_tracing_subscriber(cmd_args: &CommandLineArgs) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_timer(ChronoLocal::rfc_3339());

    match log_target(cmd_args) {
        LogTarget::File(path) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(File::create(path)?))
            .init(),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).init(),
        LogTarget::Discard => builder.with_writer(std::io::sink).init(),
    }
    Ok(())
}
