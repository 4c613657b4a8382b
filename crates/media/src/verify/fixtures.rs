//! Argument values for harness-driven invocations

use std::collections::{BTreeMap, HashSet};

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::event::{MediaAd, MediaAdBreak, MediaQos, MediaSegment, Options};
use crate::verify::error::{HarnessError, Result};
use crate::verify::operation::{ArgKind, Argument, LogOperation};

const ATTRIBUTE_COUNT: usize = 6;

/// Produces one argument value per parameter type
///
/// Integers and decimals are random, text is a fresh UUID, attribute maps
/// hold random alphanumeric pairs and structured payloads are their
/// defaults. The options argument is whatever the caller configured
/// (none by default).
#[derive(Debug)]
pub struct Fixtures {
    rng: StdRng,
    options: Option<Options>,
    unmapped: HashSet<ArgKind>,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixtures {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible values
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            options: None,
            // A callback has no sensible generated value
            unmapped: HashSet::from([ArgKind::Callback]),
        }
    }

    /// Pass `options` wherever an operation takes options
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Stop producing values for `kind`
    #[must_use]
    pub fn without(mut self, kind: ArgKind) -> Self {
        self.unmapped.insert(kind);
        self
    }

    /// Value for one parameter of `operation`
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::UnknownType`] if no value is mapped for `kind`.
    pub fn argument(&mut self, operation: LogOperation, kind: ArgKind) -> Result<Argument> {
        if self.unmapped.contains(&kind) {
            return Err(HarnessError::UnknownType { operation, kind });
        }

        let arg = match kind {
            ArgKind::Integer => Argument::Integer(self.rng.r#gen()),
            ArgKind::Decimal => Argument::Decimal(self.rng.r#gen()),
            ArgKind::Text => Argument::Text(Uuid::new_v4().to_string()),
            ArgKind::Ad => Argument::Ad(MediaAd::default()),
            ArgKind::AdBreak => Argument::AdBreak(MediaAdBreak::default()),
            ArgKind::Segment => Argument::Segment(MediaSegment::default()),
            ArgKind::Qos => Argument::Qos(MediaQos::default()),
            ArgKind::Attributes => Argument::Attributes(self.random_attributes()),
            ArgKind::Options => Argument::Options(self.options.clone()),
            ArgKind::Callback => return Err(HarnessError::UnknownType { operation, kind }),
        };
        Ok(arg)
    }

    /// Values for every parameter of `operation`, in order
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::UnknownType`] for the first unmapped parameter.
    pub fn arguments_for(&mut self, operation: LogOperation) -> Result<Vec<Argument>> {
        operation
            .params()
            .iter()
            .map(|kind| self.argument(operation, *kind))
            .collect()
    }

    fn random_attributes(&mut self) -> BTreeMap<String, String> {
        (0..ATTRIBUTE_COUNT)
            .map(|_| (self.random_text(8), self.random_text(16)))
            .collect()
    }

    fn random_text(&mut self, len: usize) -> String {
        (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }
}
