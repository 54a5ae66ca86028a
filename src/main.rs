//! Demo driver: wires the slides plugin into a host player and simulates a
//! playback session, printing each slide transition.
//!
//! Run with `RUST_LOG=debug` to see the plugin's internal logging.

use log::info;
use serde_json::json;

use video_slides::{plugin, Display, Player, PluginError, PluginRegistry};

const SLIDE_TIMES: [u32; 3] = [2, 5, 9];

fn main() -> Result<(), PluginError> {
    env_logger::init();
    info!("Starting video-slides demo (v{})", video_slides::VERSION);

    let mut registry = PluginRegistry::new();
    plugin::register(&mut registry)?;

    let mut player = Player::new();
    registry.apply(
        &mut player,
        plugin::PLUGIN_NAME,
        &json!({
            "slides": [
                { "url": "intro.png", "time": 2 },
                { "url": "agenda.png", "time": 5 },
                { "url": "outro.png", "time": 9 },
            ]
        }),
    )?;
    player.trigger_ready();

    // Fire timeupdate four times per simulated second, the way a host player
    // ticks during playback.
    let mut last_visible = None;
    for tick in 0..=44 {
        let seconds = f64::from(tick) * 0.25;
        player.set_current_time(seconds);
        let visible = visible_slide(&player);
        if visible != last_visible {
            match visible {
                Some(time) => println!("t={:>5.2}s  showing slide_{}", seconds, time),
                None => println!("t={:>5.2}s  no slide visible", seconds),
            }
            last_visible = visible;
        }
    }
    Ok(())
}

/// The trigger second of the currently visible slide entry, if any.
fn visible_slide(player: &Player) -> Option<u32> {
    SLIDE_TIMES.into_iter().find(|time| {
        player
            .tree
            .first_by_class(&format!("slide_{}", time))
            .map(|id| player.tree.display(id) == Display::Visible)
            .unwrap_or(false)
    })
}
