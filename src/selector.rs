//! Drives slide visibility from the playback clock.
//!
//! The selector owns one [`SlideSetState`] per overlay instance plus the
//! element handles the builder retained, and is moved into the player's
//! `timeupdate` handler. Each tick it decides which slide, if any, should
//! become visible and applies the change directly through its handles.

use std::collections::HashMap;

use log::debug;

use super::model::{SlideItem, SlideSetState};
use super::overlay::SlidesOverlay;
use super::tree::{Display, ElementId, ElementTree};

/// Per-overlay selector state: the configured items and the entry elements
/// they toggle.
#[derive(Clone, Debug)]
pub struct SlideSelector {
    state: SlideSetState,
    slide_handles: HashMap<u32, ElementId>,
}

impl SlideSelector {
    pub fn new(items: Vec<SlideItem>, slide_handles: HashMap<u32, ElementId>) -> Self {
        Self {
            state: SlideSetState::new(items),
            slide_handles,
        }
    }

    /// Builds a selector over the entry handles an overlay retained.
    pub fn for_overlay(overlay: &SlidesOverlay, items: Vec<SlideItem>) -> Self {
        Self::new(items, overlay.slide_handles().clone())
    }

    /// The most recently matched playback second.
    pub fn last_shown_time(&self) -> u32 {
        self.state.last_shown_time
    }

    /// Applies the slide transition for playback time `seconds`, if any.
    ///
    /// The continuous time is truncated to a whole second. If that second
    /// already matched on an earlier tick the call is a no-op, so the
    /// high-frequency `timeupdate` stream causes at most one visibility
    /// change per second. Otherwise the items are scanned in order for the
    /// first entry triggered at the current second; on a match its
    /// predecessor is hidden, the entry is shown, and scanning stops.
    ///
    /// The first item has no predecessor and hides itself instead, a quirk of
    /// the predecessor-index computation kept for compatibility.
    ///
    /// Returns whether a transition was applied.
    ///
    /// # Panics
    /// Panics if a matched time has no retained element handle, which can
    /// only happen when the selector is constructed from items inconsistent
    /// with the overlay it drives.
    pub fn select_for_time(&mut self, tree: &mut ElementTree, seconds: f64) -> bool {
        let current = seconds as u32;
        if current == self.state.last_shown_time {
            return false;
        }
        for (index, item) in self.state.items.iter().enumerate() {
            if item.time == current {
                let previous_time = if index == 0 {
                    item.time
                } else {
                    self.state.items[index - 1].time
                };
                let previous = self.slide_handles[&previous_time];
                let matched = self.slide_handles[&item.time];
                tree.set_display(previous, Display::Hidden);
                tree.set_display(matched, Display::Visible);
                self.state.last_shown_time = current;
                debug!(
                    "Slide transition at second {}: showing slide_{}, hiding slide_{}",
                    current, item.time, previous_time
                );
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ElementKind;

    fn items(times: &[u32]) -> Vec<SlideItem> {
        times
            .iter()
            .map(|&time| SlideItem {
                url: format!("slide-{}.png", time),
                time,
            })
            .collect()
    }

    /// Builds a host tree with an attached control bar, the overlay, and a
    /// selector over it.
    fn setup(times: &[u32]) -> (ElementTree, SlidesOverlay, SlideSelector) {
        let mut tree = ElementTree::new();
        let root = tree.create(ElementKind::Div);
        let control_bar = tree.create(ElementKind::Div);
        tree.append_child(root, control_bar);
        let overlay = SlidesOverlay::build(&mut tree, control_bar, &items(times));
        let selector = SlideSelector::for_overlay(&overlay, items(times));
        (tree, overlay, selector)
    }

    fn displays(tree: &ElementTree, overlay: &SlidesOverlay, times: &[u32]) -> Vec<Display> {
        times
            .iter()
            .map(|&t| tree.display(overlay.slide_handle(t).unwrap()))
            .collect()
    }

    #[test]
    fn non_matching_time_leaves_visibility_unchanged() {
        let (mut tree, overlay, mut selector) = setup(&[2, 5, 9]);
        assert!(!selector.select_for_time(&mut tree, 4.2));
        assert_eq!(
            displays(&tree, &overlay, &[2, 5, 9]),
            vec![Display::Hidden, Display::Hidden, Display::Hidden]
        );
        assert_eq!(selector.last_shown_time(), 0);
    }

    #[test]
    fn fractional_time_truncates_and_hides_the_predecessor() {
        let (mut tree, overlay, mut selector) = setup(&[2, 5, 9]);
        assert!(selector.select_for_time(&mut tree, 2.0));
        assert!(selector.select_for_time(&mut tree, 5.9));
        assert_eq!(
            displays(&tree, &overlay, &[2, 5, 9]),
            vec![Display::Hidden, Display::Visible, Display::Hidden]
        );
        assert_eq!(selector.last_shown_time(), 5);
    }

    #[test]
    fn repeated_ticks_within_a_second_are_idempotent() {
        let (mut tree, _overlay, mut selector) = setup(&[2, 5, 9]);
        assert!(selector.select_for_time(&mut tree, 5.1));
        assert!(!selector.select_for_time(&mut tree, 5.6));
        assert!(!selector.select_for_time(&mut tree, 5.9));
        assert_eq!(selector.last_shown_time(), 5);
    }

    #[test]
    fn first_item_hides_itself_instead_of_a_predecessor() {
        let (mut tree, overlay, mut selector) = setup(&[2, 5, 9]);
        assert!(selector.select_for_time(&mut tree, 2.3));
        // Hide-then-show on the same element nets out to visible.
        assert_eq!(
            displays(&tree, &overlay, &[2, 5, 9]),
            vec![Display::Visible, Display::Hidden, Display::Hidden]
        );
        assert_eq!(selector.last_shown_time(), 2);
    }

    #[test]
    fn duplicate_times_only_match_the_first_entry() {
        let (mut tree, overlay, mut selector) = setup(&[2, 3, 3]);
        assert!(selector.select_for_time(&mut tree, 3.0));
        let entries = tree.children(overlay.list).to_vec();
        // Both duplicates map onto the first entry's element; the second one
        // built is never shown.
        assert_eq!(overlay.slide_handle(3), Some(entries[1]));
        assert_eq!(tree.display(entries[1]), Display::Visible);
        assert_eq!(tree.display(entries[2]), Display::Hidden);
        // A later tick in the same second stays a no-op.
        assert!(!selector.select_for_time(&mut tree, 3.9));
    }

    #[test]
    fn empty_slide_list_never_matches() {
        let (mut tree, _overlay, mut selector) = setup(&[]);
        for tick in [0.5, 1.0, 2.7, 100.0] {
            assert!(!selector.select_for_time(&mut tree, tick));
        }
        assert_eq!(selector.last_shown_time(), 0);
    }

    #[test]
    fn a_slide_at_second_zero_is_never_selected() {
        // last_shown_time starts at 0, so second 0 always short-circuits.
        let (mut tree, overlay, mut selector) = setup(&[0, 4]);
        assert!(!selector.select_for_time(&mut tree, 0.0));
        assert!(!selector.select_for_time(&mut tree, 0.9));
        assert_eq!(
            tree.display(overlay.slide_handle(0).unwrap()),
            Display::Hidden
        );
        assert!(selector.select_for_time(&mut tree, 4.0));
    }

    #[test]
    #[should_panic]
    fn inconsistent_items_fault_on_match() {
        let (mut tree, _overlay, _selector) = setup(&[2]);
        // Selector built over items the overlay never rendered.
        let mut selector = SlideSelector::new(items(&[7]), HashMap::new());
        selector.select_for_time(&mut tree, 7.0);
    }
}
