//! Media event listener
//!
//! A listener sees every [`MediaEvent`] a session creates, synchronously and
//! before the event reaches the sink. It is called even when the session is
//! configured not to forward media events.

use crate::event::MediaEvent;

/// Callback registered on a session
///
/// Implemented for every `Fn(&MediaEvent) + Send`, so closures work directly:
///
/// ```
/// use reel_media::MediaEventListener;
/// use reel_media::event::MediaEvent;
///
/// fn takes_listener(_listener: impl MediaEventListener) {}
/// takes_listener(|event: &MediaEvent| println!("{}", event.event_name));
/// ```
pub trait MediaEventListener: Send {
    fn on_log_media_event(&self, event: &MediaEvent);
}

impl<F> MediaEventListener for F
where
    F: Fn(&MediaEvent) + Send,
{
    #[inline]
    fn on_log_media_event(&self, event: &MediaEvent) {
        self(event)
    }
}
