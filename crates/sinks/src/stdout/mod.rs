//! Stdout Sink - Human-readable event output
//!
//! Prints every logged event as one line, either a compact text summary or
//! a JSON document. Intended for development and for the sample binary.
//!
//! # Example Output
//!
//! ```text
//! 07:34:59.161 media  Media Session Start      hello#123 session:3f2a9c1e playhead:-
//! 07:34:59.162 media  Play                     hello#123 session:3f2a9c1e playhead:0
//! 07:35:00.100 custom Media Session Summary    {"content_id":"123",...}
//! ```

#[cfg(test)]
mod stdout_test;

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{TimeZone, Utc};
use owo_colors::{OwoColorize, Style};
use parking_lot::Mutex;
use reel_config::EventFormat;
use reel_media::event::{CustomEvent, MediaEvent, MediaEventName};
use reel_media::{EventSink, LoggedEvent};

/// Longest payload printed in line format
const MAX_PAYLOAD_LEN: usize = 120;

/// Configuration for stdout sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StdoutConfig {
    /// Enable colored output
    pub color: bool,

    /// Line or JSON rendering
    pub format: EventFormat,
}

impl Default for StdoutConfig {
    fn default() -> Self {
        Self {
            color: true,
            format: EventFormat::Line,
        }
    }
}

impl StdoutConfig {
    /// Create config with colors disabled (for piped output)
    pub fn no_color() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }

    /// Create config printing one JSON document per event
    pub fn json() -> Self {
        Self {
            color: false,
            format: EventFormat::Json,
        }
    }
}

impl From<&reel_config::SinkConfig> for StdoutConfig {
    fn from(config: &reel_config::SinkConfig) -> Self {
        Self {
            color: config.color,
            format: config.format,
        }
    }
}

// =============================================================================
// Color Styles
// =============================================================================

/// Color styles for terminal output
struct Styles {
    timestamp: Style,
    label: Style,
    payload: Style,
}

impl Styles {
    fn new(enabled: bool) -> Self {
        if enabled {
            Self {
                timestamp: Style::new().dimmed(),
                label: Style::new().dimmed(),
                payload: Style::new().dimmed(),
            }
        } else {
            Self {
                timestamp: Style::new(),
                label: Style::new(),
                payload: Style::new(),
            }
        }
    }
}

/// Get style for an event name
fn name_style(name: MediaEventName, enabled: bool) -> Style {
    if !enabled {
        return Style::new();
    }
    match name {
        MediaEventName::Error => Style::new().red(),
        MediaEventName::BufferStart | MediaEventName::BufferEnd => Style::new().yellow(),
        MediaEventName::SessionStart | MediaEventName::SessionEnd => Style::new().green(),
        MediaEventName::UpdatePlayheadPosition => Style::new().dimmed(),
        _ => Style::new(),
    }
}

// =============================================================================
// Metrics
// =============================================================================

/// Metrics for stdout sink
#[derive(Debug, Default)]
pub struct StdoutSinkMetrics {
    media_events: AtomicU64,
    custom_events: AtomicU64,
    bytes_written: AtomicU64,
    write_errors: AtomicU64,
}

impl StdoutSinkMetrics {
    #[inline]
    pub const fn new() -> Self {
        Self {
            media_events: AtomicU64::new(0),
            custom_events: AtomicU64::new(0),
            bytes_written: AtomicU64::new(0),
            write_errors: AtomicU64::new(0),
        }
    }

    #[inline]
    fn record_event(&self, event: &LoggedEvent) {
        let counter = match event {
            LoggedEvent::Media(_) => &self.media_events,
            LoggedEvent::Custom(_) => &self.custom_events,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    fn record_write(&self, result: &io::Result<usize>) {
        match result {
            Ok(bytes) => {
                self.bytes_written
                    .fetch_add(*bytes as u64, Ordering::Relaxed);
            }
            Err(_) => {
                self.write_errors.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            media_events: self.media_events.load(Ordering::Relaxed),
            custom_events: self.custom_events.load(Ordering::Relaxed),
            bytes_written: self.bytes_written.load(Ordering::Relaxed),
            write_errors: self.write_errors.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time snapshot of stdout sink metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub media_events: u64,
    pub custom_events: u64,
    pub bytes_written: u64,
    pub write_errors: u64,
}

impl MetricsSnapshot {
    pub fn events(&self) -> u64 {
        self.media_events + self.custom_events
    }
}

// =============================================================================
// StdoutSink Implementation
// =============================================================================

/// Stdout sink for debug output
///
/// Writes go through a lock so lines from concurrent sessions never
/// interleave.
pub struct StdoutSink {
    config: StdoutConfig,
    writer: Mutex<Box<dyn Write + Send>>,
    metrics: StdoutSinkMetrics,
}

impl std::fmt::Debug for StdoutSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdoutSink")
            .field("config", &self.config)
            .field("metrics", &self.metrics.snapshot())
            .finish_non_exhaustive()
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl StdoutSink {
    /// Create a new stdout sink with default config
    pub fn new() -> Self {
        Self::with_config(StdoutConfig::default())
    }

    /// Create a new stdout sink with custom config
    pub fn with_config(config: StdoutConfig) -> Self {
        Self::with_writer(config, io::stdout())
    }

    /// Write to `writer` instead of stdout
    pub fn with_writer(config: StdoutConfig, writer: impl Write + Send + 'static) -> Self {
        Self {
            config,
            writer: Mutex::new(Box::new(writer)),
            metrics: StdoutSinkMetrics::new(),
        }
    }

    /// Get reference to metrics
    #[inline]
    pub fn metrics(&self) -> &StdoutSinkMetrics {
        &self.metrics
    }

    #[inline]
    pub fn config(&self) -> &StdoutConfig {
        &self.config
    }

    /// Render one event without the trailing newline
    pub fn render(&self, event: &LoggedEvent) -> String {
        match self.config.format {
            EventFormat::Json => render_json(event),
            EventFormat::Line => {
                let styles = Styles::new(self.config.color);
                match event {
                    LoggedEvent::Media(media) => self.render_media(media, &styles),
                    LoggedEvent::Custom(custom) => render_custom(custom, &styles),
                }
            }
        }
    }

    fn render_media(&self, event: &MediaEvent, styles: &Styles) -> String {
        let ts = format_timestamp(event.timestamp);
        let name = format!("{:24}", event.event_name.as_str());
        let content = format!(
            "{}#{}",
            event.media_content.name, event.media_content.content_id
        );
        let session = event
            .session_id
            .as_deref()
            .map(format_id_short)
            .unwrap_or("-");
        let playhead = event
            .playhead_position
            .map_or_else(|| "-".to_string(), |p| p.to_string());

        let mut line = format!(
            "{} {} {} {} {} {}",
            ts.style(styles.timestamp),
            "media ".style(styles.label),
            name.style(name_style(event.event_name, self.config.color)),
            content,
            format!("session:{session}").style(styles.label),
            format!("playhead:{playhead}").style(styles.label),
        );

        let mut attrs = event.event_attributes();
        attrs.extend(event.custom_attributes.clone());
        if !attrs.is_empty() {
            let payload = format_payload(&serde_json::to_string(&attrs).unwrap_or_default());
            line.push(' ');
            line.push_str(&payload.style(styles.payload).to_string());
        }
        line
    }

    fn write_line(&self, line: &str) {
        let mut writer = self.writer.lock();
        let result = writeln!(writer, "{line}").map(|()| line.len() + 1);
        if let Err(e) = &result {
            tracing::warn!(error = %e, "stdout sink write failed");
        }
        self.metrics.record_write(&result);
    }
}

impl EventSink for StdoutSink {
    fn log_event(&self, event: LoggedEvent) {
        self.metrics.record_event(&event);
        let line = self.render(&event);
        self.write_line(&line);
    }
}

fn render_custom(event: &CustomEvent, styles: &Styles) -> String {
    let ts = format_timestamp(Utc::now().timestamp_millis().max(0) as u64);
    let name = format!("{:24}", event.name);
    let payload = format_payload(&serde_json::to_string(&event.custom_attributes).unwrap_or_default());
    format!(
        "{} {} {} {}",
        ts.style(styles.timestamp),
        "custom".style(styles.label),
        name,
        payload.style(styles.payload)
    )
}

fn render_json(event: &LoggedEvent) -> String {
    let json = match event {
        LoggedEvent::Media(media) => serde_json::to_string(media),
        LoggedEvent::Custom(custom) => serde_json::to_string(custom),
    };
    json.unwrap_or_else(|e| format!(r#"{{"error":"{e}"}}"#))
}

/// Format timestamp as HH:MM:SS.mmm
fn format_timestamp(ts_millis: u64) -> String {
    Utc.timestamp_millis_opt(ts_millis as i64)
        .single()
        .map(|dt| dt.format("%H:%M:%S%.3f").to_string())
        .unwrap_or_else(|| format!("{}", ts_millis))
}

/// First 8 characters of an id
fn format_id_short(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Truncate long payloads
fn format_payload(json: &str) -> String {
    if json.len() > MAX_PAYLOAD_LEN {
        let cut = (0..=MAX_PAYLOAD_LEN - 3)
            .rev()
            .find(|i| json.is_char_boundary(*i))
            .unwrap_or(0);
        format!("{}...", &json[..cut])
    } else {
        json.to_string()
    }
}
