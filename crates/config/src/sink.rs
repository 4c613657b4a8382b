//! Event sink configuration
//!
//! Selects where sessions built by the sample deliver their events.

use serde::Deserialize;

/// Sink implementation
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Print each event to stdout (default)
    #[default]
    Stdout,
    /// Emit each event through `tracing`
    Log,
    /// Discard events, counting them
    Null,
}

impl SinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Log => "log",
            Self::Null => "null",
        }
    }
}

/// Rendering of a single event
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventFormat {
    /// One human-readable line per event (default)
    #[default]
    Line,
    /// One JSON document per event
    Json,
}

/// Sink configuration
///
/// # Example
///
/// ```toml
/// [sink]
/// type = "stdout"
/// color = true
/// format = "line"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    /// Sink type (stdout, log, null)
    /// Default: stdout
    #[serde(rename = "type")]
    pub kind: SinkKind,

    /// Colorize line output
    /// Default: true
    pub color: bool,

    /// Event rendering (line, json)
    /// Default: line
    pub format: EventFormat,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            kind: SinkKind::Stdout,
            color: true,
            format: EventFormat::Line,
        }
    }
}
