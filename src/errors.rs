//! Defines the error types used by the `video-slides` plugin.
//!
//! Only setup-time problems are modeled as errors: malformed plugin options and
//! plugin registry misuse. Faults caused by a broken host UI tree (a parentless
//! control-bar anchor, a stale element id) are deliberately *not* represented
//! here; overlay construction and slide selection fail fast on those instead of
//! reporting them to the caller.

use std::error::Error as StdError;
use std::fmt;

/// Errors that can occur while registering or setting up a plugin.
#[must_use = "a plugin error should be handled or propagated"]
#[derive(Debug)]
pub enum PluginError {
    /// The options value passed to the plugin could not be deserialized.
    Options(serde_json::Error),
    /// No plugin with the given name is registered.
    UnknownPlugin(String),
    /// A plugin with the given name is already registered.
    DuplicatePlugin(String),
}

impl fmt::Display for PluginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginError::Options(e) => write!(f, "Invalid plugin options: {}", e),
            PluginError::UnknownPlugin(name) => write!(f, "Unknown plugin: '{}'", name),
            PluginError::DuplicatePlugin(name) => {
                write!(f, "Plugin '{}' is already registered", name)
            }
        }
    }
}

impl StdError for PluginError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            PluginError::Options(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PluginError {
    fn from(err: serde_json::Error) -> Self {
        PluginError::Options(err)
    }
}
