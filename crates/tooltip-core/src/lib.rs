//! Tooltip controller for rendered charts
//!
//! Attaches to a chart's element tree through the [`ChartSurface`]
//! adapter, reacts to pointer events on points, bars and slices, and
//! keeps one tooltip element filled with the hovered value and meta.

pub mod content;
pub mod controller;
pub mod escape;
pub mod hooks;
pub mod memory_surface;
pub mod position;
pub mod surface;
pub mod trigger;
pub mod visibility;

pub use controller::{Dispatch, PointerEvent, TooltipController};
pub use hooks::TooltipHooks;
pub use memory_surface::{MemorySurface, NodeId};
pub use surface::ChartSurface;
pub use trigger::TriggerPredicate;

pub use chart_tooltip_shared::{
    ChartKind, Placement, Point, PointerEventKind, Size, TooltipError, TooltipOptions,
    TooltipResult,
};
