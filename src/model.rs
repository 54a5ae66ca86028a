//! Defines the core data structures used by the slides overlay.
//!
//! These structs are deserialized from the plugin options value or used to
//! track the selector's internal state while the player is alive.

use serde::Deserialize;

/// A single timed slide: an image resource and the playback second at which it
/// should appear.
///
/// The configured list is assumed to be sorted ascending by `time`; this is not
/// enforced.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SlideItem {
    /// The image resource shown for this slide.
    pub url: String,
    /// The integer playback second at which the slide becomes visible.
    pub time: u32,
}

/// The selector's owned state for one overlay instance.
///
/// Created once when the overlay is built and discarded with the player; there
/// is no persistence and no sharing between player instances.
#[derive(Clone, Debug)]
pub struct SlideSetState {
    /// The configured slides, in display order.
    pub items: Vec<SlideItem>,
    /// The most recently matched playback second, used to suppress redundant
    /// visibility toggles within the same second. Starts at 0, which means a
    /// slide configured at time 0 is never selected.
    pub last_shown_time: u32,
}

impl SlideSetState {
    pub fn new(items: Vec<SlideItem>) -> Self {
        Self {
            items,
            last_shown_time: 0,
        }
    }
}
