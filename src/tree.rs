//! A minimal retained UI tree standing in for the host player's DOM subtree.
//!
//! The overlay builder and slide selector operate on this tree through element
//! ids handed out at creation time, so nothing ever has to be re-queried by
//! class name during playback. Class strings are still carried on every
//! element because the host's stylesheet hooks onto them.
//!
//! Lookups through a stale [`ElementId`] and insertions relative to a
//! parentless anchor panic. The overlay has a hard dependency on the host
//! handing it a live control-bar element; there is no recovery path.

use log::trace;

/// Handle to an element owned by an [`ElementTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// The element vocabulary needed by the overlay. `Text` is a leaf carrying its
/// content directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Div,
    Ul,
    Li,
    Img,
    Anchor,
    Span,
    Text(String),
}

/// Visibility state of an element. Freshly created elements are `Visible`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    Visible,
    Hidden,
}

#[derive(Clone, Debug)]
struct Node {
    kind: ElementKind,
    class: String,
    src: Option<String>,
    display: Display,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

/// An append-only tree of elements with parent/child links.
#[derive(Clone, Debug, Default)]
pub struct ElementTree {
    nodes: Vec<Node>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached element of the given kind with an empty class string.
    pub fn create(&mut self, kind: ElementKind) -> ElementId {
        let id = ElementId(self.nodes.len());
        trace!("Creating element {:?} of kind {:?}", id, kind);
        self.nodes.push(Node {
            kind,
            class: String::new(),
            src: None,
            display: Display::Visible,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Creates a detached text leaf.
    pub fn create_text(&mut self, content: &str) -> ElementId {
        self.create(ElementKind::Text(content.to_string()))
    }

    fn node(&self, id: ElementId) -> &Node {
        self.nodes.get(id.0).expect("stale element id")
    }

    fn node_mut(&mut self, id: ElementId) -> &mut Node {
        self.nodes.get_mut(id.0).expect("stale element id")
    }

    pub fn set_class(&mut self, id: ElementId, class: &str) {
        self.node_mut(id).class = class.to_string();
    }

    /// Appends a whitespace-separated class token, as `classList.add` would.
    pub fn add_class(&mut self, id: ElementId, class: &str) {
        let node = self.node_mut(id);
        if node.class.is_empty() {
            node.class = class.to_string();
        } else {
            node.class.push(' ');
            node.class.push_str(class);
        }
    }

    pub fn set_src(&mut self, id: ElementId, src: &str) {
        self.node_mut(id).src = Some(src.to_string());
    }

    pub fn set_display(&mut self, id: ElementId, display: Display) {
        trace!("Setting display of {:?} to {:?}", id, display);
        self.node_mut(id).display = display;
    }

    /// Appends `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        self.node(parent);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    /// Inserts `new` as a sibling immediately before `anchor`.
    ///
    /// # Panics
    /// Panics if `anchor` has no parent. The control bar the overlay anchors
    /// to is assumed to be attached; its absence is a host integration bug.
    pub fn insert_before(&mut self, anchor: ElementId, new: ElementId) {
        let parent = self
            .node(anchor)
            .parent
            .expect("anchor element has no parent");
        let position = self
            .node(parent)
            .children
            .iter()
            .position(|&c| c == anchor)
            .expect("anchor element missing from its parent's children");
        self.node_mut(new).parent = Some(parent);
        self.node_mut(parent).children.insert(position, new);
    }

    pub fn kind(&self, id: ElementId) -> &ElementKind {
        &self.node(id).kind
    }

    pub fn class(&self, id: ElementId) -> &str {
        &self.node(id).class
    }

    pub fn src(&self, id: ElementId) -> Option<&str> {
        self.node(id).src.as_deref()
    }

    pub fn display(&self, id: ElementId) -> Display {
        self.node(id).display
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.node(id).parent
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        &self.node(id).children
    }

    /// Whether the element's class string contains `class` as a token.
    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.node(id).class.split_whitespace().any(|c| c == class)
    }

    /// Returns the first element (in creation order) carrying `class` as a
    /// class token. Intended for inspection and tests; the overlay itself
    /// holds direct element handles instead of querying by class.
    pub fn first_by_class(&self, class: &str) -> Option<ElementId> {
        (0..self.nodes.len())
            .map(ElementId)
            .find(|&id| self.has_class(id, class))
    }

    /// Counts elements carrying `class` as a class token.
    pub fn count_by_class(&self, class: &str) -> usize {
        (0..self.nodes.len())
            .map(ElementId)
            .filter(|&id| self.has_class(id, class))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_child_links_both_directions() {
        let mut tree = ElementTree::new();
        let parent = tree.create(ElementKind::Div);
        let child = tree.create(ElementKind::Ul);
        tree.append_child(parent, child);
        assert_eq!(tree.children(parent), &[child]);
        assert_eq!(tree.parent(child), Some(parent));
    }

    #[test]
    fn insert_before_places_new_sibling_ahead_of_anchor() {
        let mut tree = ElementTree::new();
        let parent = tree.create(ElementKind::Div);
        let first = tree.create(ElementKind::Div);
        let anchor = tree.create(ElementKind::Div);
        tree.append_child(parent, first);
        tree.append_child(parent, anchor);

        let new = tree.create(ElementKind::Div);
        tree.insert_before(anchor, new);
        assert_eq!(tree.children(parent), &[first, new, anchor]);
        assert_eq!(tree.parent(new), Some(parent));
    }

    #[test]
    #[should_panic(expected = "anchor element has no parent")]
    fn insert_before_detached_anchor_panics() {
        let mut tree = ElementTree::new();
        let anchor = tree.create(ElementKind::Div);
        let new = tree.create(ElementKind::Div);
        tree.insert_before(anchor, new);
    }

    #[test]
    fn class_tokens_accumulate_and_match() {
        let mut tree = ElementTree::new();
        let el = tree.create(ElementKind::Anchor);
        tree.set_class(el, "video_full_mode");
        tree.add_class(el, "full-screen-icon");
        assert_eq!(tree.class(el), "video_full_mode full-screen-icon");
        assert!(tree.has_class(el, "video_full_mode"));
        assert!(tree.has_class(el, "full-screen-icon"));
        assert!(!tree.has_class(el, "full"));
    }

    #[test]
    fn elements_start_visible_until_toggled() {
        let mut tree = ElementTree::new();
        let el = tree.create(ElementKind::Li);
        assert_eq!(tree.display(el), Display::Visible);
        tree.set_display(el, Display::Hidden);
        assert_eq!(tree.display(el), Display::Hidden);
    }

    #[test]
    fn first_by_class_follows_creation_order() {
        let mut tree = ElementTree::new();
        let a = tree.create(ElementKind::Li);
        let b = tree.create(ElementKind::Li);
        tree.set_class(a, "slide_3");
        tree.set_class(b, "slide_3");
        assert_eq!(tree.first_by_class("slide_3"), Some(a));
        assert_eq!(tree.count_by_class("slide_3"), 2);
    }
}
