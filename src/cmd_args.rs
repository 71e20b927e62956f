use crate::maze::models::{Direction, Turn};
use std::ffi::OsString;
use std::path::PathBuf;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Section of the profile file to read settings from. Default is 'default'.
    /// A missing profile falls back to built-in defaults.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    #[clap(long, help = "maze API base url, overrides the profile")]
    base_url: Option<String>,

    #[clap(long, help = "initial facing: NORTH, EAST, SOUTH or WEST")]
    facing: Option<Direction>,

    #[clap(long, help = "wall-following bias: LEFT or RIGHT")]
    bias: Option<Turn>,

    #[clap(long, help = "give up after this many steps")]
    max_steps: Option<u64>,

    #[clap(long, help = "log progress instead of drawing the maze")]
    headless: bool,

    #[clap(long, help = "skip the request replay after a failed call")]
    no_replay: bool,

    #[clap(long, help = "write logs to this file instead of stderr")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    base_url: Option<String>,
    facing: Option<Direction>,
    bias: Option<Turn>,
    max_steps: Option<u64>,
    headless: bool,
    no_replay: bool,
    log_file: Option<PathBuf>,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            base_url: args.base_url,
            facing: args.facing,
            bias: args.bias,
            max_steps: args.max_steps,
            headless: args.headless,
            no_replay: args.no_replay,
            log_file: args.log_file,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn facing(&self) -> Option<Direction> {
        self.facing
    }

    pub fn bias(&self) -> Option<Turn> {
        self.bias
    }

    pub fn max_steps(&self) -> Option<u64> {
        self.max_steps
    }

    pub fn headless(&self) -> bool {
        self.headless
    }

    pub fn no_replay(&self) -> bool {
        self.no_replay
    }

    pub fn log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }
}
