//! The host player surface the overlay plugs into.
//!
//! [`Player`] owns the UI tree, a root element and the control-bar anchor the
//! overlay inserts itself before. It exposes the two lifecycle events the
//! plugin consumes: `ready` (fires once, when the host finishes initializing)
//! and `timeupdate` (fires on every playback clock tick with the current time
//! in seconds as a float).
//!
//! [`PluginRegistry`] is the named extension point: plugins are registered
//! once at load time and applied to a player with a JSON options value.

use std::collections::HashMap;
use std::mem;

use log::{debug, info};
use serde_json::Value;

use super::errors::PluginError;
use super::tree::{ElementId, ElementKind, ElementTree};

/// Callback invoked once the player is ready.
pub type ReadyHook = Box<dyn FnOnce(&mut Player)>;

/// Callback invoked on every `timeupdate` tick. Handlers receive the UI tree
/// rather than the whole player so they can mutate elements while the player
/// dispatches.
pub type TimeUpdateHandler = Box<dyn FnMut(&mut ElementTree, f64)>;

/// A minimal host video player: a UI tree with a control bar, a playback
/// clock, and the two events the slides overlay listens to.
pub struct Player {
    pub tree: ElementTree,
    root: ElementId,
    control_bar: ElementId,
    current_time: f64,
    is_ready: bool,
    ready_hooks: Vec<ReadyHook>,
    timeupdate_handlers: Vec<TimeUpdateHandler>,
}

impl Player {
    /// Creates a player whose tree holds a root element with the control bar
    /// as its only child, mirroring the host DOM shape the overlay expects.
    pub fn new() -> Self {
        let mut tree = ElementTree::new();
        let root = tree.create(ElementKind::Div);
        tree.set_class(root, "video-js");
        let control_bar = tree.create(ElementKind::Div);
        tree.set_class(control_bar, "vjs-control-bar");
        tree.append_child(root, control_bar);
        debug!("Created player with root {:?} and control bar {:?}", root, control_bar);
        Self {
            tree,
            root,
            control_bar,
            current_time: 0.0,
            is_ready: false,
            ready_hooks: Vec::new(),
            timeupdate_handlers: Vec::new(),
        }
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    /// The anchor element the overlay is inserted before.
    pub fn control_bar(&self) -> ElementId {
        self.control_bar
    }

    /// Adds a class token to the player's root element.
    pub fn add_class(&mut self, class: &str) {
        self.tree.add_class(self.root, class);
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn is_ready(&self) -> bool {
        self.is_ready
    }

    /// Queues `hook` to run when the player becomes ready. If the player is
    /// already ready the hook runs immediately.
    pub fn ready(&mut self, hook: ReadyHook) {
        if self.is_ready {
            debug!("Player already ready, running hook immediately");
            hook(self);
        } else {
            self.ready_hooks.push(hook);
        }
    }

    /// Marks the player ready and runs all queued ready hooks in registration
    /// order. Subsequent calls are no-ops beyond draining hooks queued since.
    pub fn trigger_ready(&mut self) {
        info!("Player ready, running {} queued hook(s)", self.ready_hooks.len());
        self.is_ready = true;
        while !self.ready_hooks.is_empty() {
            let hooks = mem::take(&mut self.ready_hooks);
            for hook in hooks {
                hook(self);
            }
        }
    }

    /// Registers a handler for the `timeupdate` event.
    pub fn on_timeupdate(&mut self, handler: TimeUpdateHandler) {
        self.timeupdate_handlers.push(handler);
    }

    /// Advances the playback clock and fires `timeupdate`. The host calls
    /// this many times per second during playback.
    pub fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds;
        let mut handlers = mem::take(&mut self.timeupdate_handlers);
        for handler in &mut handlers {
            handler(&mut self.tree, seconds);
        }
        // Handlers registered during dispatch start receiving the next tick.
        handlers.extend(mem::take(&mut self.timeupdate_handlers));
        self.timeupdate_handlers = handlers;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Setup function invoked when a registered plugin is applied to a player.
pub type PluginSetup = fn(&mut Player, &Value) -> Result<(), PluginError>;

/// Named extension point mapping plugin names to their setup functions.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: HashMap<String, PluginSetup>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `setup` under `name`.
    ///
    /// # Errors
    /// Returns [`PluginError::DuplicatePlugin`] if the name is taken.
    pub fn register(&mut self, name: &str, setup: PluginSetup) -> Result<(), PluginError> {
        if self.plugins.contains_key(name) {
            return Err(PluginError::DuplicatePlugin(name.to_string()));
        }
        info!("Registered plugin '{}'", name);
        self.plugins.insert(name.to_string(), setup);
        Ok(())
    }

    /// Applies the plugin registered under `name` to `player` with the given
    /// options value.
    ///
    /// # Errors
    /// Returns [`PluginError::UnknownPlugin`] if no such plugin exists, or
    /// whatever error the plugin's setup function produces.
    pub fn apply(
        &self,
        player: &mut Player,
        name: &str,
        options: &Value,
    ) -> Result<(), PluginError> {
        let setup = self
            .plugins
            .get(name)
            .ok_or_else(|| PluginError::UnknownPlugin(name.to_string()))?;
        debug!("Applying plugin '{}'", name);
        setup(player, options)
    }
}
