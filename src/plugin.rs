//! The slides plugin itself: the named extension point glueing options,
//! overlay construction, and the slide selector to the player lifecycle.
//!
//! Setup parses the options value and queues a ready hook; the hook builds
//! the overlay once and moves the selector into a `timeupdate` handler whose
//! lifetime matches the player's.

use log::info;
use serde_json::Value;

use super::config::{self, SlidesOptions};
use super::errors::PluginError;
use super::overlay::SlidesOverlay;
use super::player::{Player, PluginRegistry};
use super::selector::SlideSelector;

/// Name the plugin registers under.
pub const PLUGIN_NAME: &str = "slides";

/// Registers the slides plugin with a registry. Done once at load time.
///
/// # Errors
/// Returns [`PluginError::DuplicatePlugin`] if the name is already taken.
pub fn register(registry: &mut PluginRegistry) -> Result<(), PluginError> {
    registry.register(PLUGIN_NAME, slides)
}

/// Plugin setup function: parses options and defers overlay construction to
/// player readiness.
///
/// # Errors
/// Returns [`PluginError::Options`] if the options value is malformed.
pub fn slides(player: &mut Player, options: &Value) -> Result<(), PluginError> {
    let options = config::parse_options(options)?;
    player.ready(Box::new(move |player| on_player_ready(player, options)));
    Ok(())
}

/// Runs once the player is ready: tags the root, builds the overlay before
/// the control bar, and installs the selector on `timeupdate`.
fn on_player_ready(player: &mut Player, options: SlidesOptions) {
    info!("Player ready, attaching slides overlay");
    player.add_class("vjs-slides");
    let control_bar = player.control_bar();
    let overlay = SlidesOverlay::build(&mut player.tree, control_bar, &options.slides);
    let mut selector = SlideSelector::for_overlay(&overlay, options.slides);
    player.on_timeupdate(Box::new(move |tree, seconds| {
        selector.select_for_time(tree, seconds);
    }));
}
