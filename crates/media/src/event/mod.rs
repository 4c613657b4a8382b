//! Event module - media events and their payloads
//!
//! [`MediaEvent`] is what every session log operation produces. It can be
//! flattened into a [`CustomEvent`] for platforms that only accept generic
//! string-keyed events.

mod custom;
mod media_event;
mod name;
mod options;
mod payload;

pub mod keys;


pub use custom::{CustomEvent, EventType};
pub use media_event::MediaEvent;
pub use name::MediaEventName;
pub use options::Options;
pub use payload::{MediaAd, MediaAdBreak, MediaQos, MediaSegment, PlaybackError};
