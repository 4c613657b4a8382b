//! Per-call options accepted by most log operations

use std::collections::BTreeMap;

/// Extra data applied to a single logged event
///
/// # Example
///
/// ```
/// use reel_media::event::Options;
///
/// let options = Options::new()
///     .playhead(120_000)
///     .attribute("player_name", "JWPlayer");
/// assert_eq!(options.current_playhead_position, Some(120_000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Playhead for this event; also becomes the session's playhead
    pub current_playhead_position: Option<u64>,

    /// Copied into the event's custom attributes
    pub custom_attributes: BTreeMap<String, String>,
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn playhead(mut self, position_ms: u64) -> Self {
        self.current_playhead_position = Some(position_ms);
        self
    }

    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_attributes.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.custom_attributes
            .extend(attributes.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let options = Options::default();
        assert!(options.current_playhead_position.is_none());
        assert!(options.custom_attributes.is_empty());
    }

    #[test]
    fn test_attributes_extend() {
        let options = Options::new()
            .attribute("a", "1")
            .attributes([("b", "2"), ("c", "3")]);
        assert_eq!(options.custom_attributes.len(), 3);
        assert_eq!(options.custom_attributes["b"], "2");
    }
}
