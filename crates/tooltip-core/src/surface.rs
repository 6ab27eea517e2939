//! Adapter between the controller and a rendered chart

use chart_tooltip_shared::{Placement, Point, Size, TooltipHost, TooltipResult};

/// Everything the controller needs from the chart's element tree.
///
/// The chart owns every node except the tooltip; the controller only
/// reads them. Reads that cannot be answered (missing attribute, detached
/// node) return `None` or an empty value rather than failing.
pub trait ChartSurface {
    type Node: Clone;

    /// Existing tooltip element inside the chart container, if any
    fn find_tooltip(&self) -> Option<Self::Node>;

    /// Create the tooltip `<div>` with `class_name` and insert it into `host`
    fn create_tooltip(&mut self, class_name: &str, host: TooltipHost) -> TooltipResult<Self::Node>;

    /// Class attribute of a node, empty when absent
    fn class_name(&self, node: &Self::Node) -> String;

    fn set_class_name(&mut self, node: &Self::Node, class_name: &str);

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Next element sibling
    fn next_sibling(&self, node: &Self::Node) -> Option<Self::Node>;

    fn text_content(&self, node: &Self::Node) -> String;

    fn set_inner_html(&mut self, node: &Self::Node, html: &str);

    /// Rendered size; zero when the node has not been laid out
    fn offset_size(&self, node: &Self::Node) -> Size;

    /// Apply absolute `top`/`left` in pixels
    fn set_position(&mut self, node: &Self::Node, placement: Placement);

    /// Top-left of the chart container's bounding box
    fn container_origin(&self) -> Point;

    /// Current page scroll offset
    fn scroll_offset(&self) -> Point;

    /// Terminal endpoint (`x2`, `y2`) of a line-like element
    fn line_endpoint(&self, node: &Self::Node) -> Option<Point>;
}
