//! Configuration for mazeline
//!
//! Settings come from an INI profile file (one section per profile) and are
//! then overridden by command line flags.
//!
//! ```ini
//! [default]
//! base_url = http://www.epdeveloperchallenge.com/api
//! timeout = 30
//! facing = EAST
//! bias = LEFT
//! max_steps = 100000
//! replay_on_error = true
//! ```

use crate::cmd_args::CommandLineArgs;
use crate::maze::models::{Direction, Turn};
use crate::maze::services::DEFAULT_BASE_URL;
use ini::Ini;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Default profile file path for mazeline
pub const DEFAULT_PROFILE_PATH: &str = "~/.mazeline/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "MAZELINE_PROFILE_PATH";

/// Environment variable holding the tracing filter
pub const LOG_LEVEL_ENV_VAR: &str = "MAZELINE_LOG_LEVEL";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read profile file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: ini::Error,
    },

    #[error("invalid value '{value}' for '{key}' in profile [{profile}]: {reason}")]
    InvalidValue {
        profile: String,
        key: String,
        value: String,
        reason: String,
    },
}

/// Everything needed to run one traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeSettings {
    pub base_url: String,
    /// Per-request deadline; none by default
    pub timeout: Option<Duration>,
    pub facing: Direction,
    pub bias: Turn,
    pub max_steps: Option<u64>,
    pub replay_on_error: bool,
    pub headless: bool,
}

impl Default for MazeSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            facing: Direction::East,
            bias: Turn::Left,
            max_steps: None,
            replay_on_error: true,
            headless: false,
        }
    }
}

impl MazeSettings {
    /// Load `profile` from the INI file at `path`.
    ///
    /// A missing file or section yields the defaults.
    pub fn load(path: &str, profile: &str) -> Result<Self, ConfigError> {
        let expanded = shellexpand::tilde(path).to_string();
        tracing::debug!("Loading profile '{}' from '{}'", profile, expanded);

        if !Path::new(&expanded).exists() {
            tracing::debug!("Profile file '{}' not found, using defaults", expanded);
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(&expanded).map_err(|source| ConfigError::Read {
            path: expanded.clone(),
            source,
        })?;

        let mut settings = Self::default();
        let Some(section) = ini.section(Some(profile)) else {
            tracing::debug!("Profile '{}' not found, using defaults", profile);
            return Ok(settings);
        };

        let invalid = |key: &str, value: &str, reason: String| ConfigError::InvalidValue {
            profile: profile.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason,
        };

        for (key, value) in section.iter() {
            let value = value.trim();
            match key {
                "base_url" => settings.base_url = value.to_string(),
                "timeout" => {
                    let secs = value
                        .parse::<u64>()
                        .map_err(|e| invalid(key, value, e.to_string()))?;
                    settings.timeout = Some(Duration::from_secs(secs));
                }
                "facing" => settings.facing = value.parse().map_err(|e| invalid(key, value, e))?,
                "bias" => settings.bias = value.parse().map_err(|e| invalid(key, value, e))?,
                "max_steps" => {
                    let limit = value
                        .parse::<u64>()
                        .map_err(|e| invalid(key, value, e.to_string()))?;
                    settings.max_steps = Some(limit);
                }
                "replay_on_error" => {
                    settings.replay_on_error = value
                        .parse::<bool>()
                        .map_err(|e| invalid(key, value, e.to_string()))?;
                }
                other => tracing::warn!("Ignoring unknown profile key '{}'", other),
            }
        }

        tracing::debug!("Profile loaded successfully, server: {}", settings.base_url);
        Ok(settings)
    }

    /// Apply command line overrides on top of the profile values
    pub fn with_overrides(mut self, args: &CommandLineArgs) -> Self {
        if let Some(url) = args.base_url() {
            self.base_url = url.to_string();
        }
        if let Some(facing) = args.facing() {
            self.facing = facing;
        }
        if let Some(bias) = args.bias() {
            self.bias = bias;
        }
        if let Some(limit) = args.max_steps() {
            self.max_steps = Some(limit);
        }
        if args.no_replay() {
            self.replay_on_error = false;
        }
        self.headless = args.headless();
        self
    }
}
