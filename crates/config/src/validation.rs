//! Configuration validation
//!
//! Serde already rejects unknown enum values and out-of-type numbers; this
//! checks the ranges and combinations it cannot express.

use crate::Config;
use crate::error::{ConfigError, Result};
use crate::logging::LogOutput;
use crate::session::DEFAULT_CONTENT_COMPLETE_LIMIT;

/// Validate the entire configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_session(config)?;
    validate_log(config)?;
    Ok(())
}

fn validate_session(config: &Config) -> Result<()> {
    let limit = config.session.content_complete_limit;
    if !(1..=DEFAULT_CONTENT_COMPLETE_LIMIT).contains(&limit) {
        return Err(ConfigError::invalid_value(
            "session",
            "content_complete_limit",
            format!("{limit} is not within 1..=100"),
        ));
    }
    Ok(())
}

fn validate_log(config: &Config) -> Result<()> {
    if let LogOutput::File(path) = &config.log.output
        && path.trim().is_empty()
    {
        return Err(ConfigError::invalid_value(
            "log",
            "output",
            "file path must not be empty",
        ));
    }
    Ok(())
}
