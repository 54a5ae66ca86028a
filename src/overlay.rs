//! Builds the slides overlay into the host player's UI tree.
//!
//! The builder runs once, when the player becomes ready. It constructs the
//! slide list and the mode-toggle controls and inserts the whole container
//! immediately before the control bar. Element handles for every slide entry
//! are retained at build time, keyed by trigger second, so the selector never
//! has to search the tree by class name during playback.

use std::collections::HashMap;

use log::{debug, info};

use super::model::SlideItem;
use super::tree::{Display, ElementId, ElementKind, ElementTree};

/// The constructed overlay: direct handles to the elements the plugin touches
/// after construction.
#[derive(Clone, Debug)]
pub struct SlidesOverlay {
    /// `div.video-slides-container`, inserted before the control bar.
    pub container: ElementId,
    /// `ul.video-slides` holding one entry per slide.
    pub list: ElementId,
    /// `div.video-mode` wrapping the two mode-toggle links.
    pub mode_bar: ElementId,
    /// `a.video_full_mode.full-screen-icon`.
    pub full_mode: ElementId,
    /// `a.video_half_mode.half-screen-icon`.
    pub half_mode: ElementId,
    /// Slide entry elements keyed by trigger second. When several entries
    /// share a second, the first constructed one wins, matching first-match
    /// class lookup order.
    slide_handles: HashMap<u32, ElementId>,
}

impl SlidesOverlay {
    /// Constructs the overlay under `tree` and inserts it immediately before
    /// `control_bar`.
    ///
    /// No validation is performed on `items`; the list is rendered as given.
    ///
    /// # Panics
    /// Panics if `control_bar` is detached or stale. The overlay has a hard
    /// dependency on the host tree shape and does not recover from it.
    pub fn build(tree: &mut ElementTree, control_bar: ElementId, items: &[SlideItem]) -> Self {
        info!("Building slides overlay with {} item(s)", items.len());
        let container = tree.create(ElementKind::Div);
        tree.set_class(container, "video-slides-container");
        let list = tree.create(ElementKind::Ul);
        tree.set_class(list, "video-slides");
        tree.append_child(container, list);
        tree.insert_before(control_bar, container);

        let mut slide_handles = HashMap::new();
        for item in items {
            let entry = tree.create(ElementKind::Li);
            tree.set_class(entry, &format!("slide_{}", item.time));
            tree.set_display(entry, Display::Hidden);
            let image = tree.create(ElementKind::Img);
            tree.set_src(image, &item.url);
            tree.append_child(entry, image);
            tree.append_child(list, entry);
            slide_handles.entry(item.time).or_insert(entry);
            debug!("Built slide entry for second {} ({})", item.time, item.url);
        }

        let (mode_bar, full_mode, half_mode) = build_mode_toggle(tree, container);

        Self {
            container,
            list,
            mode_bar,
            full_mode,
            half_mode,
            slide_handles,
        }
    }

    /// Handle to the slide entry triggered at `time`, if one was built.
    pub fn slide_handle(&self, time: u32) -> Option<ElementId> {
        self.slide_handles.get(&time).copied()
    }

    /// The retained handle map, for handing to the slide selector.
    pub fn slide_handles(&self) -> &HashMap<u32, ElementId> {
        &self.slide_handles
    }
}

/// Builds the Full/Half mode toggle and appends it to the container.
fn build_mode_toggle(
    tree: &mut ElementTree,
    container: ElementId,
) -> (ElementId, ElementId, ElementId) {
    let mode_bar = tree.create(ElementKind::Div);
    tree.set_class(mode_bar, "video-mode");

    let full_mode = tree.create(ElementKind::Anchor);
    tree.set_class(full_mode, "video_full_mode full-screen-icon");
    let full_label = tree.create_text("Full Mode");
    tree.append_child(full_mode, full_label);

    let half_mode = tree.create(ElementKind::Anchor);
    tree.set_class(half_mode, "video_half_mode half-screen-icon");
    let half_span = tree.create(ElementKind::Span);
    let half_label = tree.create_text("Half Mode");
    tree.append_child(half_span, half_label);
    tree.append_child(half_mode, half_span);

    tree.append_child(mode_bar, full_mode);
    tree.append_child(mode_bar, half_mode);
    tree.append_child(container, mode_bar);
    (mode_bar, full_mode, half_mode)
}
