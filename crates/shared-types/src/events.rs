//! Pointer event kinds and the small geometry types used for placement

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rendered size of an element in pixels
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when the element has not been laid out yet
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Absolute `top`/`left` applied to the tooltip, in pixels
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Placement {
    pub top: f64,
    pub left: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// `mouseover` inside the chart container
    Over,
    /// `mousemove` inside the chart container
    Move,
    /// `mouseout` inside the chart container
    Out,
    /// `click` inside the chart container
    Click,
    /// `click` that reached the document
    DocumentClick,
}

impl PointerEventKind {
    /// DOM event type name this kind is registered under
    pub fn dom_type(&self) -> &'static str {
        match self {
            PointerEventKind::Over => "mouseover",
            PointerEventKind::Move => "mousemove",
            PointerEventKind::Out => "mouseout",
            PointerEventKind::Click | PointerEventKind::DocumentClick => "click",
        }
    }
}
