//! Shared types for the chart tooltip
//!
//! This crate contains the plain data used by both the tooltip controller
//! and the wasm bridge: configuration, chart kinds, geometry and pointer
//! event kinds. Option keys serialize to the same camelCase names the
//! JavaScript plugin accepts, so a JS options object deserializes directly.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[cfg(feature = "typescript")]
use tsify::Tsify;

pub mod errors;
pub mod events;

pub use errors::{TooltipError, TooltipResult};
pub use events::{Placement, Point, PointerEventKind, Size};

/// Class carried by every tooltip element.
pub const TOOLTIP_CLASS: &str = "chartist-tooltip";

/// Marker class toggled to show the tooltip.
pub const SHOW_CLASS: &str = "tooltip-show";

/// Default trigger class for line-like charts.
pub const DEFAULT_POINT_CLASS: &str = "ct-point";

pub const BAR_CLASS: &str = "ct-bar";
pub const PIE_SLICE_CLASS: &str = "ct-slice-pie";
pub const DONUT_SLICE_CLASS: &str = "ct-slice-donut";

/// Chart kinds the tooltip knows how to target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Pie,
    Donut,
}

impl ChartKind {
    /// Resolve a kind from a chart type tag such as `"bar"` or `"Pie"`.
    ///
    /// Unknown tags fall back to [`ChartKind::Line`], which targets the
    /// configured point class.
    pub fn from_tag(tag: &str, donut: bool) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "bar" => ChartKind::Bar,
            "pie" if donut => ChartKind::Donut,
            "pie" => ChartKind::Pie,
            "donut" => ChartKind::Donut,
            _ => ChartKind::Line,
        }
    }

    pub fn is_pie_like(&self) -> bool {
        matches!(self, ChartKind::Pie | ChartKind::Donut)
    }

    /// Class carried by the elements that trigger the tooltip for this kind
    pub fn trigger_class<'a>(&self, options: &'a TooltipOptions) -> &'a str {
        match self {
            ChartKind::Line => &options.point_class,
            ChartKind::Bar => BAR_CLASS,
            ChartKind::Pie => PIE_SLICE_CLASS,
            ChartKind::Donut => DONUT_SLICE_CLASS,
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Line => write!(f, "line"),
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Pie => write!(f, "pie"),
            ChartKind::Donut => write!(f, "donut"),
        }
    }
}

/// Horizontal anchor keyword
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAnchor {
    Left,
    #[default]
    Center,
    Right,
    /// Any keyword we do not recognize; positioning becomes a no-op
    #[serde(other)]
    Unrecognized,
}

/// Vertical anchor keyword
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
#[serde(rename_all = "lowercase")]
pub enum VerticalAnchor {
    #[default]
    Top,
    Middle,
    Bottom,
    #[serde(other)]
    Unrecognized,
}

/// Where the tooltip sits relative to the anchor point
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
#[serde(default)]
pub struct AnchorPosition {
    pub x: HorizontalAnchor,
    pub y: VerticalAnchor,
}

/// Pixel offset applied after anchoring
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
#[serde(default)]
pub struct TooltipOffset {
    pub x: f64,
    pub y: f64,
}

impl Default for TooltipOffset {
    fn default() -> Self {
        Self { x: 0.0, y: -20.0 }
    }
}

/// Which interaction shows the tooltip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerMode {
    Hover,
    Click,
}

/// Where the tooltip element is inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipHost {
    /// Inside the chart container, positioned relative to it
    Chart,
    /// At the document body, positioned in page coordinates
    Body,
}

/// Tooltip configuration.
///
/// Every field is optional on the wire; missing keys take the values of
/// [`TooltipOptions::default`]. Callbacks are not part of this struct,
/// see `TooltipHooks` in the core crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipOptions {
    /// Currency symbol prefixed to values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub tooltip_offset: TooltipOffset,
    /// Pin the tooltip to the point geometry instead of the pointer
    pub anchor_to_point: bool,
    pub append_to_body: bool,
    /// Extra class added next to `chartist-tooltip`
    #[serde(rename = "class", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub point_class: String,
    pub show_on_click: bool,
    pub show_value: bool,
    pub position: AnchorPosition,
    #[serde(rename = "metaIsHTML")]
    pub meta_is_html: bool,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            currency: None,
            tooltip_offset: TooltipOffset::default(),
            anchor_to_point: false,
            append_to_body: false,
            class: None,
            point_class: DEFAULT_POINT_CLASS.to_string(),
            show_on_click: false,
            show_value: true,
            position: AnchorPosition::default(),
            meta_is_html: false,
        }
    }
}

impl TooltipOptions {
    /// Parse options from a JSON document
    pub fn from_json(json: &str) -> TooltipResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply a loosely typed options object on top of the defaults, one key
    /// at a time.
    ///
    /// Boolean options take the truthiness of whatever value was given.
    /// Any other key whose value does not fit keeps its default and comes
    /// back as an `InvalidConfig` error naming the key, so one bad key never
    /// discards the rest.
    pub fn from_value_lenient(value: Value) -> (Self, Vec<TooltipError>) {
        let mut rejected = Vec::new();
        let patch = match value {
            Value::Object(patch) => patch,
            other => {
                rejected.push(TooltipError::InvalidConfig {
                    message: format!("expected an options object, got {other}"),
                    field: None,
                });
                return (Self::default(), rejected);
            }
        };

        let mut accepted = match serde_json::to_value(Self::default()) {
            Ok(defaults) => defaults,
            Err(e) => {
                rejected.push(e.into());
                return (Self::default(), rejected);
            }
        };
        overlay(&mut accepted, "", &patch, &mut rejected);

        match serde_json::from_value(accepted) {
            Ok(options) => (options, rejected),
            Err(e) => {
                rejected.push(e.into());
                (Self::default(), rejected)
            }
        }
    }

    /// Full class attribute for a freshly created tooltip element
    pub fn tooltip_class_name(&self) -> String {
        match self.class.as_deref().map(str::trim) {
            Some(extra) if !extra.is_empty() => format!("{TOOLTIP_CLASS} {extra}"),
            _ => TOOLTIP_CLASS.to_string(),
        }
    }

    pub fn trigger_mode(&self) -> TriggerMode {
        if self.show_on_click {
            TriggerMode::Click
        } else {
            TriggerMode::Hover
        }
    }

    pub fn host(&self) -> TooltipHost {
        if self.append_to_body {
            TooltipHost::Body
        } else {
            TooltipHost::Chart
        }
    }
}

fn fits(candidate: &Value) -> bool {
    TooltipOptions::deserialize(candidate).is_ok()
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn set_entry(root: &mut Value, pointer: &str, key: &str, value: Option<Value>) {
    if let Some(Value::Object(entries)) = root.pointer_mut(pointer) {
        match value {
            Some(value) => {
                entries.insert(key.to_string(), value);
            }
            None => {
                entries.remove(key);
            }
        }
    }
}

/// Merge `patch` into the object at `pointer`, recursing into nested option
/// groups so `{"tooltipOffset": {"x": 5}}` keeps the default `y`.
fn overlay(
    accepted: &mut Value,
    pointer: &str,
    patch: &Map<String, Value>,
    rejected: &mut Vec<TooltipError>,
) {
    for (key, value) in patch {
        let child = format!("{pointer}/{}", key.replace('~', "~0").replace('/', "~1"));
        let previous = accepted.pointer(&child).cloned();

        if let (Some(Value::Object(_)), Value::Object(nested)) = (&previous, value) {
            overlay(accepted, &child, nested, rejected);
            continue;
        }

        set_entry(accepted, pointer, key, Some(value.clone()));
        if fits(accepted) {
            continue;
        }

        if let Some(Value::Bool(_)) = previous {
            set_entry(accepted, pointer, key, Some(Value::Bool(truthy(value))));
            continue;
        }

        set_entry(accepted, pointer, key, previous);
        let field = match pointer.strip_prefix('/') {
            Some(parent) => format!("{}.{key}", parent.replace('/', ".")),
            None => key.clone(),
        };
        rejected.push(TooltipError::invalid_field(field, format!("unusable value {value}")));
    }
}
