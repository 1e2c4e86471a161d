//! Runtime configuration, read from the environment (and `.env`).

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use serde::de::value::{self, MapDeserializer};
use thiserror::Error;

use crate::playback::CoordinatorOptions;
use crate::playback::coordinator::DEFAULT_POLL_INTERVAL;

pub const DEFAULT_PREFIX: &str = "!";
pub const DEFAULT_TEST_SOUND_PATH: &str = "./sound_effect.mp3";

/// Environment variables read into [`Config`], named as its fields.
const KEYS: [&str; 4] = [
    "DISCORD_TOKEN",
    "COMMAND_PREFIX",
    "POLL_INTERVAL",
    "TEST_SOUND_PATH",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("DISCORD_TOKEN must be set in the environment or .env file")]
    MissingToken,

    #[error("Malformed configuration: {0}")]
    Malformed(#[from] value::Error),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Config {
    pub discord_token: String,
    #[serde(default = "default_prefix")]
    pub command_prefix: String,
    #[serde(with = "humantime_serde", default = "default_poll_interval")]
    pub poll_interval: Duration,
    #[serde(default = "default_test_sound_path")]
    pub test_sound_path: PathBuf,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.into()
}

fn default_poll_interval() -> Duration {
    DEFAULT_POLL_INTERVAL
}

fn default_test_sound_path() -> PathBuf {
    DEFAULT_TEST_SOUND_PATH.into()
}

impl Config {
    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup. Blank values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut vars: HashMap<&str, String> = KEYS
            .iter()
            .filter_map(|&key| non_empty(key).map(|value| (key, value.trim().to_owned())))
            .collect();

        if !vars.contains_key("DISCORD_TOKEN") {
            let token = non_empty("BOT_TOKEN").ok_or(ConfigError::MissingToken)?;
            vars.insert("DISCORD_TOKEN", token.trim().to_owned());
        }

        let deserializer: MapDeserializer<_, value::Error> = MapDeserializer::new(vars.into_iter());
        let config = Config::deserialize(deserializer)?;

        if config.poll_interval.is_zero() {
            return Err(ConfigError::Invalid {
                name: "POLL_INTERVAL",
                reason: "must be greater than zero".into(),
            });
        }

        Ok(config)
    }

    pub fn coordinator_options(&self) -> CoordinatorOptions {
        CoordinatorOptions {
            poll_interval: self.poll_interval,
        }
    }
}
