//! Session module - the builder and the session it produces
//!
//! A [`MediaSession`] owns the content metadata, the playback statistics and
//! the route to the sink. Summary events for sessions, ads and segments are
//! assembled in [`summary`].

mod builder;
mod media_session;

pub mod summary;


pub use builder::{DEFAULT_CONTENT_COMPLETE_LIMIT, MediaSessionBuilder};
pub use media_session::MediaSession;
