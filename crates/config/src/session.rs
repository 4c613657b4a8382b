//! Media session configuration
//!
//! Dispatch defaults applied to every session built from configuration.

use serde::Deserialize;

/// Default and maximum content complete limit, in percent
pub const DEFAULT_CONTENT_COMPLETE_LIMIT: u8 = 100;

/// Session configuration
///
/// # Example
///
/// ```toml
/// [session]
/// log_media_events = true
/// log_custom_events = false
/// content_complete_limit = 90
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Forward media events to the sink
    /// Default: true
    pub log_media_events: bool,

    /// Also forward each media event converted to a custom event
    /// Default: false
    pub log_custom_events: bool,

    /// Playhead percentage at which content counts as complete (1-100)
    /// Default: 100
    pub content_complete_limit: u8,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            log_media_events: true,
            log_custom_events: false,
            content_complete_limit: DEFAULT_CONTENT_COMPLETE_LIMIT,
        }
    }
}
