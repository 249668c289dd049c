//! Render targets: the capability handed to the visualizer in place of a
//! raw document handle.
//!
//! `Region` is the headless in-memory target; `Page` is a registry of named
//! regions standing in for the surrounding document. Everything here is
//! single-threaded and synchronous; shared handles are `Rc`-based.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::markup::Node;

/// A thing that can replace or prepend display content.
pub trait RenderTarget {
    /// Replace the target's entire content.
    fn replace(&mut self, content: Vec<Node>);

    /// Insert a node in front of whatever currently occupies the target.
    fn prepend(&mut self, node: Node);

    /// Current content, cloned.
    fn snapshot(&self) -> Vec<Node>;
}

/// An in-memory display region: an ordered list of content nodes.
#[derive(Debug, Clone, Default)]
pub struct Region {
    children: Vec<Node>,
}

impl Region {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Serialize the region content to HTML.
    pub fn html(&self) -> String {
        self.children.iter().map(Node::to_html).collect()
    }
}

impl RenderTarget for Region {
    fn replace(&mut self, content: Vec<Node>) {
        self.children = content;
    }

    fn prepend(&mut self, node: Node) {
        self.children.insert(0, node);
    }

    fn snapshot(&self) -> Vec<Node> {
        self.children.clone()
    }
}

/// Shared handle to a region owned by a [`Page`].
///
/// Cloning the handle aliases the same region, so a visualizer bound to it
/// and the page render the same content.
#[derive(Debug, Clone)]
pub struct SharedRegion(Rc<RefCell<Region>>);

impl SharedRegion {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Region::new())))
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn html(&self) -> String {
        self.0.borrow().html()
    }
}

impl Default for SharedRegion {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTarget for SharedRegion {
    fn replace(&mut self, content: Vec<Node>) {
        self.0.borrow_mut().replace(content);
    }

    fn prepend(&mut self, node: Node) {
        self.0.borrow_mut().prepend(node);
    }

    fn snapshot(&self) -> Vec<Node> {
        self.0.borrow().snapshot()
    }
}

/// A registry of named display regions standing in for the surrounding
/// document. Regions keep their registration order when the page is
/// serialized.
#[derive(Debug, Default)]
pub struct Page {
    regions: Vec<(String, SharedRegion)>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a region and return a shared handle to it. Re-registering
    /// an id returns the existing region.
    pub fn add_region(&mut self, id: impl Into<String>) -> SharedRegion {
        let id = id.into();
        if let Some((_, region)) = self.regions.iter().find(|(name, _)| *name == id) {
            return region.clone();
        }
        let region = SharedRegion::new();
        self.regions.push((id, region.clone()));
        region
    }

    /// Look up a previously registered region.
    pub fn region(&self, id: &str) -> Result<SharedRegion> {
        self.regions
            .iter()
            .find(|(name, _)| name == id)
            .map(|(_, region)| region.clone())
            .ok_or_else(|| Error::RegionNotFound(id.to_string()))
    }

    /// Serialize every region as a `<div id="...">` wrapper around its
    /// content, in registration order.
    pub fn html(&self) -> String {
        let mut out = String::new();
        for (id, region) in &self.regions {
            let mut wrapper = crate::markup::Element::new("div").attr("id", id.clone());
            for node in region.snapshot() {
                wrapper.push(node);
            }
            out.push_str(&wrapper.to_html());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Element;

    #[test]
    fn replace_discards_prior_content() {
        let mut region = Region::new();
        region.replace(vec![Element::new("p").text("old").into()]);
        region.replace(vec![Element::new("p").text("new").into()]);

        assert_eq!(region.html(), "<p>new</p>");
    }

    #[test]
    fn prepend_stacks_in_front() {
        let mut region = Region::new();
        region.replace(vec![Element::new("p").text("body").into()]);
        region.prepend(Element::new("div").text("first banner").into());
        region.prepend(Element::new("div").text("second banner").into());

        assert_eq!(
            region.html(),
            "<div>second banner</div><div>first banner</div><p>body</p>"
        );
    }

    #[test]
    fn shared_region_aliases_page_content() {
        let mut page = Page::new();
        let mut handle = page.add_region("trace-container");
        handle.replace(vec![Element::new("p").text("rendered").into()]);

        assert_eq!(
            page.region("trace-container").unwrap().html(),
            "<p>rendered</p>"
        );
        assert_eq!(
            page.html(),
            "<div id=\"trace-container\"><p>rendered</p></div>\n"
        );
    }

    #[test]
    fn missing_region_is_an_error() {
        let page = Page::new();
        let err = page.region("nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
