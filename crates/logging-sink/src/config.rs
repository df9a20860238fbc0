//! crates/logging-sink/src/config.rs
//! Configuration for the standard writer-backed sink.

use std::borrow::Cow;
use std::fmt;
use std::io;
use std::str::FromStr;

use crate::global::{SetSinkError, set_global_sink};
use crate::line_mode::LineMode;
use crate::sink::{DEFAULT_PREFIX, Sink, WriterSink};

/// Standard stream a configured sink writes to.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Target {
    /// Standard error; the server-log default.
    #[default]
    Stderr,
    /// Standard output.
    Stdout,
}

impl Target {
    /// Returns the stream name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stderr => "stderr",
            Self::Stdout => "stdout",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = ConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "stderr" => Ok(Self::Stderr),
            "stdout" => Ok(Self::Stdout),
            _ => Err(ConfigError::UnknownTarget(input.to_owned())),
        }
    }
}

/// Errors raised while building a [`SinkConfig`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The output target name is not recognised.
    #[error("unknown output target '{0}' (expected 'stderr' or 'stdout')")]
    UnknownTarget(String),
}

/// Settings for a [`WriterSink`] over a standard stream.
///
/// # Examples
///
/// ```
/// use logging_sink::{LineMode, SinkConfig, Target};
///
/// let config = SinkConfig::default()
///     .with_prefix("Aria")
///     .with_target(Target::Stdout)
///     .with_line_mode(LineMode::WithoutNewline);
/// assert_eq!(config.prefix, "Aria");
/// let _sink = config.build();
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SinkConfig {
    /// Component prefix rendered before each message.
    pub prefix: String,
    /// Newline policy.
    pub line_mode: LineMode,
    /// Stream the sink writes to.
    pub target: Target,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_owned(),
            line_mode: LineMode::WithNewline,
            target: Target::Stderr,
        }
    }
}

impl SinkConfig {
    /// Replaces the component prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Replaces the newline policy.
    #[must_use]
    pub const fn with_line_mode(mut self, line_mode: LineMode) -> Self {
        self.line_mode = line_mode;
        self
    }

    /// Replaces the output stream.
    #[must_use]
    pub const fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Builds the configured sink.
    #[must_use]
    pub fn build(&self) -> Box<dyn Sink> {
        let prefix: Cow<'static, str> = Cow::Owned(self.prefix.clone());
        match self.target {
            Target::Stderr => Box::new(WriterSink::with_parts(io::stderr(), prefix, self.line_mode)),
            Target::Stdout => Box::new(WriterSink::with_parts(io::stdout(), prefix, self.line_mode)),
        }
    }

    /// Builds the configured sink and installs it as the process-wide sink.
    pub fn install(&self) -> Result<(), SetSinkError> {
        set_global_sink(self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_server_log() {
        let config = SinkConfig::default();
        assert_eq!(config.prefix, "InnoDB");
        assert_eq!(config.line_mode, LineMode::WithNewline);
        assert_eq!(config.target, Target::Stderr);
    }

    #[test]
    fn target_parses_case_insensitively() {
        assert_eq!("STDOUT".parse::<Target>(), Ok(Target::Stdout));
        assert_eq!("stderr".parse::<Target>(), Ok(Target::Stderr));
    }

    #[test]
    fn unknown_target_is_rejected() {
        let err = "syslog".parse::<Target>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownTarget("syslog".to_owned()));
        assert!(err.to_string().contains("'syslog'"));
    }

    #[test]
    fn builder_methods_replace_fields() {
        let config = SinkConfig::default()
            .with_prefix("")
            .with_line_mode(LineMode::WithoutNewline)
            .with_target(Target::Stdout);
        assert!(config.prefix.is_empty());
        assert_eq!(config.line_mode, LineMode::WithoutNewline);
        assert_eq!(config.target.to_string(), "stdout");
    }
}
