//! Handles plugin option parsing.
//!
//! This module defines the `SlidesOptions` struct which holds the single
//! recognized plugin option, the `slides` list. It provides `parse_options`
//! to deserialize it from the JSON value the host passes at plugin setup.

use log::{debug, info};
use serde::Deserialize;
use serde_json::Value;

use super::errors::PluginError;
use super::model::SlideItem;

/// The options object accepted by the slides plugin.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct SlidesOptions {
    /// The timed slides to display, in order. Absent means no slides, so the
    /// overlay is built empty.
    #[serde(default)]
    pub slides: Vec<SlideItem>,
}

/// Parses the plugin options value passed by the host.
///
/// Unrecognized keys are ignored, and a missing `slides` key yields the empty
/// default, matching how the host merges options over plugin defaults.
///
/// # Errors
/// Returns `PluginError::Options` if the value is not an object or the
/// `slides` entries are malformed.
#[must_use = "parsing options can fail, the Result must be handled"]
pub fn parse_options(value: &Value) -> Result<SlidesOptions, PluginError> {
    debug!("Parsing slides plugin options: {}", value);
    let options: SlidesOptions = serde_json::from_value(value.clone())?;
    info!("Parsed slides plugin options: {} slide(s)", options.slides.len());
    Ok(options)
}
