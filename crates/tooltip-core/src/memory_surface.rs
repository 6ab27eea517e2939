//! In-memory element tree implementing [`ChartSurface`]
//!
//! Lets the controller run without a browser: headless rendering, server
//! side previews, and the tests in this workspace. Elements live in an
//! arena and are addressed by [`NodeId`].

use std::collections::BTreeMap;

use chart_tooltip_shared::{Placement, Point, Size, TooltipHost, TooltipResult, TOOLTIP_CLASS};

use crate::surface::ChartSurface;
use crate::visibility::has_class;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct MemoryElement {
    tag: String,
    class_name: String,
    attributes: BTreeMap<String, String>,
    text: String,
    inner_html: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    size: Size,
    placement: Option<Placement>,
    endpoint: Option<Point>,
}

#[derive(Debug, Clone)]
pub struct MemorySurface {
    elements: Vec<MemoryElement>,
    body: NodeId,
    container: NodeId,
    container_origin: Point,
    scroll: Point,
    tooltip_size: Size,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    /// A document body holding one empty chart container
    pub fn new() -> Self {
        let mut surface = Self {
            elements: vec![MemoryElement {
                tag: "body".to_string(),
                ..Default::default()
            }],
            body: NodeId(0),
            container: NodeId(0),
            container_origin: Point::default(),
            scroll: Point::default(),
            tooltip_size: Size::default(),
        };
        surface.container = surface.append_element(surface.body, "div", "ct-chart");
        surface
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Append a child element and return its id
    pub fn append_element(&mut self, parent: NodeId, tag: &str, class_name: &str) -> NodeId {
        let id = NodeId(self.elements.len());
        self.elements.push(MemoryElement {
            tag: tag.to_string(),
            class_name: class_name.to_string(),
            parent: Some(parent),
            ..Default::default()
        });
        self.elements[parent.0].children.push(id);
        id
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.elements[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) {
        self.elements[node.0].text = text.to_string();
    }

    pub fn set_size(&mut self, node: NodeId, size: Size) {
        self.elements[node.0].size = size;
    }

    /// Give a node line geometry, like an SVG `<line>` with `x2`/`y2`
    pub fn set_line_endpoint(&mut self, node: NodeId, endpoint: Point) {
        self.elements[node.0].endpoint = Some(endpoint);
    }

    pub fn set_container_origin(&mut self, origin: Point) {
        self.container_origin = origin;
    }

    pub fn set_scroll(&mut self, scroll: Point) {
        self.scroll = scroll;
    }

    /// Size given to tooltip elements created from now on
    pub fn set_tooltip_size(&mut self, size: Size) {
        self.tooltip_size = size;
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.elements[node.0].tag
    }

    pub fn inner_html(&self, node: NodeId) -> &str {
        &self.elements[node.0].inner_html
    }

    pub fn placement(&self, node: NodeId) -> Option<Placement> {
        self.elements[node.0].placement
    }

    pub fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.elements[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.elements[node.0].children
    }

    /// Every element carrying `class`, in document order of creation
    pub fn find_by_class(&self, class: &str) -> Vec<NodeId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| has_class(&element.class_name, class))
            .map(|(index, _)| NodeId(index))
            .collect()
    }

    fn descendants_of(&self, node: NodeId, out: &mut Vec<NodeId>) {
        for &child in &self.elements[node.0].children {
            out.push(child);
            self.descendants_of(child, out);
        }
    }
}

impl ChartSurface for MemorySurface {
    type Node = NodeId;

    fn find_tooltip(&self) -> Option<NodeId> {
        let mut nodes = Vec::new();
        self.descendants_of(self.container, &mut nodes);
        nodes
            .into_iter()
            .find(|node| has_class(&self.elements[node.0].class_name, TOOLTIP_CLASS))
    }

    fn create_tooltip(&mut self, class_name: &str, host: TooltipHost) -> TooltipResult<NodeId> {
        let parent = match host {
            TooltipHost::Chart => self.container,
            TooltipHost::Body => self.body,
        };
        let tooltip = self.append_element(parent, "div", class_name);
        self.elements[tooltip.0].size = self.tooltip_size;
        Ok(tooltip)
    }

    fn class_name(&self, node: &NodeId) -> String {
        self.elements[node.0].class_name.clone()
    }

    fn set_class_name(&mut self, node: &NodeId, class_name: &str) {
        self.elements[node.0].class_name = class_name.to_string();
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.elements[node.0].attributes.get(name).cloned()
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.elements[node.0].parent
    }

    fn next_sibling(&self, node: &NodeId) -> Option<NodeId> {
        let parent = self.elements[node.0].parent?;
        let siblings = &self.elements[parent.0].children;
        let index = siblings.iter().position(|id| id == node)?;
        siblings.get(index + 1).copied()
    }

    fn text_content(&self, node: &NodeId) -> String {
        let mut text = self.elements[node.0].text.clone();
        for child in &self.elements[node.0].children {
            text.push_str(&self.text_content(child));
        }
        text
    }

    fn set_inner_html(&mut self, node: &NodeId, html: &str) {
        self.elements[node.0].inner_html = html.to_string();
    }

    fn offset_size(&self, node: &NodeId) -> Size {
        self.elements[node.0].size
    }

    fn set_position(&mut self, node: &NodeId, placement: Placement) {
        self.elements[node.0].placement = Some(placement);
    }

    fn container_origin(&self) -> Point {
        self.container_origin
    }

    fn scroll_offset(&self) -> Point {
        self.scroll
    }

    fn line_endpoint(&self, node: &NodeId) -> Option<Point> {
        self.elements[node.0].endpoint
    }
}
