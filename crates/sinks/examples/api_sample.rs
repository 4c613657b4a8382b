//! Scripted media session
//!
//! Loads an optional TOML config, builds a session against the configured
//! sink and plays through content with an ad break, a segment and a few
//! player hiccups.
//!
//! ```text
//! cargo run -p reel-sinks --example api_sample -- [config.toml] [--verify]
//! ```
//!
//! With `--verify`, every log operation is additionally driven once through
//! the verification harness.

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use reel_config::{Config, LogConfig, LogFormat, LogOutput};
use reel_media::event::{MediaAdBreak, MediaEvent, MediaQos, Options};
use reel_media::sink::LastEventSink;
use reel_media::verify::{self, Fixtures};
use reel_media::{ContentType, MediaSession, StreamType};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self, writer::BoxMakeWriter};
use tracing_subscriber::prelude::*;

fn main() -> Result<()> {
    let mut config_path = None;
    let mut run_verify = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--verify" => run_verify = true,
            _ => config_path = Some(arg),
        }
    }

    let config = match &config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::from_str("")?,
    };
    init_logging(&config.log)?;
    info!(config = ?config_path, sink = config.sink.kind.as_str(), "starting sample");

    play_scripted_session(&config)?;
    if run_verify {
        verify_all_operations(&config)?;
    }
    Ok(())
}

/// Initialize tracing from the `[log]` section
fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.filter_directive()))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    let writer = match &config.output {
        LogOutput::Stdout => BoxMakeWriter::new(io::stdout),
        LogOutput::Stderr => BoxMakeWriter::new(io::stderr),
        LogOutput::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file '{path}'"))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
    };

    match config.format {
        LogFormat::Console => tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(writer))
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(writer))
            .with(filter)
            .init(),
    }

    Ok(())
}

fn play_scripted_session(config: &Config) -> Result<()> {
    let sink = reel_sinks::from_config(&config.sink);

    let mut session = MediaSession::builder()
        .title("Big Buck Bunny")
        .content_id("bbb-1080p")
        .duration(596_000)
        .content_type(ContentType::Video)
        .stream_type(StreamType::OnDemand)
        .apply_config(&config.session)
        .sink(sink)
        .build()?;

    session.set_listener(|event: &MediaEvent| {
        tracing::trace!(name = %event.event_name, "listener");
    });

    session.log_media_session_start(None);
    session.log_qos_with(None, |qos| {
        qos.startup_time = Some(820);
        qos.bit_rate = Some(4_500_000);
    });
    session.log_play(Some(&Options::new().playhead(0)));

    // Pre-roll
    session.log_ad_break_start(
        MediaAdBreak {
            id: Some("preroll".into()),
            title: Some("Pre-roll".into()),
            duration: Some(15_000),
        },
        None,
    );
    session.log_ad_start_with(None, |ad| {
        ad.id = Some("ad-42".into());
        ad.title = Some("Sponsor".into());
        ad.advertiser = Some("Acme".into());
        ad.position = Some(1);
    });
    session.log_ad_click(None);
    session.log_ad_end(None);
    session.log_ad_break_end(None);

    session.log_segment_start_with(None, |segment| {
        segment.title = Some("Opening".into());
        segment.index = Some(0);
        segment.duration = Some(60_000);
    });
    session.log_playhead_position(30_000);
    session.log_buffer_start(0, 12.5, 30_000, None);
    session.log_buffer_end(450, 100.0, 30_000, None);
    session.log_segment_end(Some(&Options::new().playhead(60_000)));

    session.log_seek_start(60_000, None);
    session.log_seek_end(540_000, Some(&Options::new().playhead(540_000)));
    session.log_qos(
        MediaQos {
            dropped_frames: Some(3),
            ..MediaQos::default()
        },
        None,
    );

    let mut details = BTreeMap::new();
    details.insert("code".to_string(), "MEDIA_ERR_DECODE".to_string());
    session.log_error("decoder stalled", details, None);

    session.log_playhead_position(596_000);
    session.log_pause(None);
    session.log_media_content_end(None);
    session.log_media_session_end(None);

    info!(
        session_id = session.session_id().unwrap_or("-"),
        ads = session.ad_total(),
        segments = session.segment_total(),
        content_complete = session.is_content_complete(),
        "session finished"
    );
    Ok(())
}

fn verify_all_operations(config: &Config) -> Result<()> {
    let sink = Arc::new(LastEventSink::new());
    let mut session = MediaSession::builder()
        .title("hello")
        .content_id("123")
        .duration(1000)
        .stream_type(StreamType::LiveStream)
        .content_type(ContentType::Video)
        .apply_config(&config.session)
        .sink(sink.clone())
        .build()?;

    let report = verify::verify_session(&mut session, &sink, &mut Fixtures::new())?;
    for operation in &report.operations {
        info!(%operation, "verified");
    }
    info!(operations = report.operations.len(), "all operations verified");
    Ok(())
}
