//! Runtime configuration read from the environment
//!
//! Every setting has a default, so an empty environment (or the browser,
//! where there is none) yields a working configuration.

use thiserror::Error;

/// Joins the parts of one `print` call
pub const DEFAULT_SEPARATOR: &str = " ";

/// Ends every printed line; markup because the browser target sets inner HTML
pub const DEFAULT_LINE_BREAK: &str = "<br/>";

/// Number of frames the player binary renders
pub const DEFAULT_FRAMES: u32 = 3;

pub const SEPARATOR_ENV: &str = "HUDKIT_READOUT_SEPARATOR";
pub const LINE_BREAK_ENV: &str = "HUDKIT_READOUT_LINE_BREAK";
pub const FRAMES_ENV: &str = "HUDKIT_FRAMES";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
}

/// How the debug readout joins parts and terminates lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadoutConfig {
    pub separator: String,
    pub line_break: String,
}

impl Default for ReadoutConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            line_break: DEFAULT_LINE_BREAK.to_string(),
        }
    }
}

impl ReadoutConfig {
    /// Defaults overridden by `HUDKIT_READOUT_SEPARATOR` and
    /// `HUDKIT_READOUT_LINE_BREAK` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            separator: lookup(SEPARATOR_ENV).unwrap_or(defaults.separator),
            line_break: lookup(LINE_BREAK_ENV).unwrap_or(defaults.line_break),
        }
    }
}

/// Settings for the player binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub frames: u32,
    pub readout: ReadoutConfig,
}

impl RunnerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let frames = match lookup(FRAMES_ENV) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber {
                    key: FRAMES_ENV,
                    value: raw.clone(),
                })?,
            None => DEFAULT_FRAMES,
        };
        Ok(Self {
            frames,
            readout: ReadoutConfig::from_lookup(&lookup),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_readout_defaults() {
        let config = ReadoutConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ReadoutConfig::default());
        assert_eq!(config.separator, " ");
        assert_eq!(config.line_break, "<br/>");
    }

    #[test]
    fn test_readout_overrides() {
        let config = ReadoutConfig::from_lookup(lookup_from(&[
            (SEPARATOR_ENV, ", "),
            (LINE_BREAK_ENV, "\n"),
        ]));
        assert_eq!(config.separator, ", ");
        assert_eq!(config.line_break, "\n");
    }

    #[test]
    fn test_runner_default_frames() {
        let config = RunnerConfig::from_lookup(lookup_from(&[])).expect("valid config");
        assert_eq!(config.frames, DEFAULT_FRAMES);
        assert_eq!(config.readout, ReadoutConfig::default());
    }

    #[test]
    fn test_runner_frames_override() {
        let config =
            RunnerConfig::from_lookup(lookup_from(&[(FRAMES_ENV, " 10 ")])).expect("valid config");
        assert_eq!(config.frames, 10);
    }

    #[test]
    fn test_runner_rejects_bad_frames() {
        let err = RunnerConfig::from_lookup(lookup_from(&[(FRAMES_ENV, "many")]))
            .expect_err("invalid frame count");
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                key: FRAMES_ENV,
                value: "many".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "HUDKIT_FRAMES must be a non-negative integer, got 'many'"
        );
    }
}
