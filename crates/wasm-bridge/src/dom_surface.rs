//! `ChartSurface` over the browser DOM

use chart_tooltip_core::ChartSurface;
use chart_tooltip_shared::{
    Placement, Point, Size, TooltipError, TooltipHost, TooltipResult, TOOLTIP_CLASS,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, SvgLineElement, Window};

pub struct DomSurface {
    window: Window,
    document: Document,
    container: Element,
}

impl DomSurface {
    pub fn new(container: Element) -> TooltipResult<Self> {
        let window =
            web_sys::window().ok_or_else(|| TooltipError::dom("window", "No window object"))?;
        let document = window
            .document()
            .ok_or_else(|| TooltipError::dom("document", "No document object"))?;

        Ok(Self {
            window,
            document,
            container,
        })
    }

    pub fn container(&self) -> &Element {
        &self.container
    }
}

fn js_error(operation: &str, err: JsValue) -> TooltipError {
    TooltipError::dom(operation, format!("{err:?}"))
}

impl ChartSurface for DomSurface {
    type Node = Element;

    fn find_tooltip(&self) -> Option<Element> {
        self.container
            .query_selector(&format!(".{TOOLTIP_CLASS}"))
            .ok()
            .flatten()
    }

    fn create_tooltip(&mut self, class_name: &str, host: TooltipHost) -> TooltipResult<Element> {
        let tooltip = self
            .document
            .create_element("div")
            .map_err(|e| js_error("createElement", e))?;
        tooltip.set_class_name(class_name);

        let appended = match host {
            TooltipHost::Chart => self.container.append_child(&tooltip),
            TooltipHost::Body => {
                let body = self
                    .document
                    .body()
                    .ok_or_else(|| TooltipError::dom("appendChild", "Document has no body"))?;
                body.append_child(&tooltip)
            }
        };
        appended.map_err(|e| js_error("appendChild", e))?;

        Ok(tooltip)
    }

    fn class_name(&self, node: &Element) -> String {
        // SVG elements expose className as an animated string, read the attribute instead
        node.get_attribute("class").unwrap_or_default()
    }

    fn set_class_name(&mut self, node: &Element, class_name: &str) {
        if let Err(e) = node.set_attribute("class", class_name) {
            log::debug!("Failed to set tooltip class: {e:?}");
        }
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn next_sibling(&self, node: &Element) -> Option<Element> {
        node.next_element_sibling()
    }

    fn text_content(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_inner_html(&mut self, node: &Element, html: &str) {
        node.set_inner_html(html);
    }

    fn offset_size(&self, node: &Element) -> Size {
        node.dyn_ref::<HtmlElement>()
            .map(|el| Size::new(el.offset_width() as f64, el.offset_height() as f64))
            .unwrap_or_default()
    }

    fn set_position(&mut self, node: &Element, placement: Placement) {
        let Some(el) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = el.style();
        let applied = style
            .set_property("top", &format!("{}px", placement.top))
            .and_then(|_| style.set_property("left", &format!("{}px", placement.left)));
        if let Err(e) = applied {
            log::debug!("Failed to position tooltip: {e:?}");
        }
    }

    fn container_origin(&self) -> Point {
        let rect = self.container.get_bounding_client_rect();
        Point::new(rect.left(), rect.top())
    }

    fn scroll_offset(&self) -> Point {
        Point::new(
            self.window.page_x_offset().unwrap_or(0.0),
            self.window.page_y_offset().unwrap_or(0.0),
        )
    }

    fn line_endpoint(&self, node: &Element) -> Option<Point> {
        let line = node.dyn_ref::<SvgLineElement>()?;
        let x = line.x2().base_val().value().ok()?;
        let y = line.y2().base_val().value().ok()?;
        Some(Point::new(x.trunc() as f64, y.trunc() as f64))
    }
}
