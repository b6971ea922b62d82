//! Pipeline configuration.
//!
//! The statistical thresholds are fixed constants of the battery, so
//! configuration stays small: the pinned extraction channel and how the
//! demo binary renders its output.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::extraction::ChannelPolicy;

/// Configuration for pipeline runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PipelineConfig {
    /// Color channel whose LSB is harvested, fixed for the whole run.
    ///
    /// Changing the channel changes the statistical character of the
    /// extracted stream; it is a deployment constant, never varied
    /// per image.
    #[serde(default)]
    pub channel: ChannelPolicy,
}

impl PipelineConfig {
    /// Creates a configuration with the given channel.
    pub fn with_channel(channel: ChannelPolicy) -> Self {
        Self { channel }
    }
}

/// Output rendering settings for the demo binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print the full per-window result logs instead of the summary only.
    pub full_log: bool,
    /// Leading hex digits of each stream to print as a preview (0 disables).
    pub preview_digits: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            full_log: false,
            preview_digits: 64,
        }
    }
}

/// Configuration loading errors.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_channel_is_red() {
        assert_eq!(PipelineConfig::default().channel, ChannelPolicy::Red);
    }

    #[test]
    fn test_parse_full_config() {
        let config: FileConfig = toml::from_str(
            r#"
            [pipeline]
            channel = "green"

            [output]
            full_log = true
            preview_digits = 32
            "#,
        )
        .unwrap();

        assert_eq!(config.pipeline.channel, ChannelPolicy::Green);
        assert!(config.output.full_log);
        assert_eq!(config.output.preview_digits, 32);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();

        assert_eq!(config.pipeline, PipelineConfig::default());
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_unknown_channel_rejected() {
        let parsed: Result<FileConfig, _> = toml::from_str("[pipeline]\nchannel = \"luma\"\n");
        assert!(parsed.is_err());
    }
}
