//! Timed slide overlay plugin for a video player.
//!
//! Displays a sequence of timed images synchronized to playback, with a
//! Full/Half display-mode toggle inserted next to the player's control bar.
//! The host surface ([`Player`]) and the retained UI tree ([`ElementTree`])
//! are passed in explicitly; the plugin never reaches into ambient globals
//! and never re-queries the tree by class name during playback.
//!
//! Typical wiring:
//!
//! ```
//! use serde_json::json;
//! use video_slides::{plugin, Player, PluginRegistry};
//!
//! let mut registry = PluginRegistry::new();
//! plugin::register(&mut registry).unwrap();
//!
//! let mut player = Player::new();
//! registry
//!     .apply(&mut player, plugin::PLUGIN_NAME, &json!({
//!         "slides": [
//!             { "url": "intro.png", "time": 2 },
//!             { "url": "outro.png", "time": 9 },
//!         ]
//!     }))
//!     .unwrap();
//! player.trigger_ready();
//! player.set_current_time(2.4);
//! ```

pub mod config;
pub mod errors;
pub mod model;
pub mod overlay;
pub mod player;
pub mod plugin;
pub mod selector;
pub mod tree;

pub use config::SlidesOptions;
pub use errors::PluginError;
pub use model::{SlideItem, SlideSetState};
pub use overlay::SlidesOverlay;
pub use player::{Player, PluginRegistry};
pub use selector::SlideSelector;
pub use tree::{Display, ElementId, ElementKind, ElementTree};

/// Crate version, exported for host compatibility checks.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
