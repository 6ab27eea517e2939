//! The tooltip controller: reacts to pointer events on a chart and keeps a
//! single tooltip element filled, positioned and shown or hidden.

use chart_tooltip_shared::{
    ChartKind, Point, PointerEventKind, Size, TooltipHost, TooltipOptions, TooltipResult,
    TriggerMode, SHOW_CLASS,
};

use crate::content::{
    self, PointText, LABEL_CLASS, META_ATTRIBUTE, SERIES_NAME_ATTRIBUTE, VALUE_ATTRIBUTE,
};
use crate::hooks::TooltipHooks;
use crate::position::{self, PointerFrame};
use crate::surface::ChartSurface;
use crate::trigger::TriggerPredicate;
use crate::visibility;

/// A pointer event delivered to the controller
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent<N> {
    pub kind: PointerEventKind,
    /// Element the event was dispatched to
    pub target: Option<N>,
    /// Pointer position in page coordinates
    pub page: Point,
}

impl<N> PointerEvent<N> {
    pub fn new(kind: PointerEventKind, target: Option<N>, page: Point) -> Self {
        Self { kind, target, page }
    }
}

/// What the host should do with the event after the controller handled it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Continue,
    /// Keep the event from reaching document-level listeners
    StopPropagation,
}

pub struct TooltipController<S: ChartSurface> {
    surface: S,
    kind: ChartKind,
    options: TooltipOptions,
    hooks: TooltipHooks,
    trigger: TriggerPredicate,
    tooltip: S::Node,
    last_size: Size,
}

impl<S: ChartSurface> TooltipController<S> {
    /// Attach to a chart, targeting the elements of `kind`
    pub fn attach(
        surface: S,
        kind: ChartKind,
        options: TooltipOptions,
        hooks: TooltipHooks,
    ) -> TooltipResult<Self> {
        let trigger = TriggerPredicate::for_kind(kind, &options);
        Self::attach_with_trigger(surface, kind, options, hooks, trigger)
    }

    /// Attach with an explicit trigger predicate instead of the kind's class
    pub fn attach_with_trigger(
        mut surface: S,
        kind: ChartKind,
        options: TooltipOptions,
        hooks: TooltipHooks,
        trigger: TriggerPredicate,
    ) -> TooltipResult<Self> {
        let tooltip = match surface.find_tooltip() {
            Some(existing) => existing,
            None => surface.create_tooltip(&options.tooltip_class_name(), options.host())?,
        };
        let last_size = surface.offset_size(&tooltip);

        log::debug!(
            "Tooltip attached to {kind} chart, trigger {trigger:?}, mode {:?}",
            options.trigger_mode()
        );

        let mut controller = Self {
            surface,
            kind,
            options,
            hooks,
            trigger,
            tooltip,
            last_size,
        };
        controller.hide();
        Ok(controller)
    }

    pub fn handle_event(&mut self, event: &PointerEvent<S::Node>) -> Dispatch {
        let mode = self.options.trigger_mode();

        match (event.kind, mode) {
            (PointerEventKind::Over, TriggerMode::Hover) => {
                if let Some(target) = self.trigger_target(event) {
                    self.activate(event, &target);
                }
            }
            (PointerEventKind::Click, TriggerMode::Click) => {
                if let Some(target) = self.trigger_target(event) {
                    self.activate(event, &target);
                    return Dispatch::StopPropagation;
                }
            }
            (PointerEventKind::Out, TriggerMode::Hover) => {
                if self.trigger_target(event).is_some() {
                    self.hide();
                }
            }
            (PointerEventKind::Move, TriggerMode::Hover) if !self.options.anchor_to_point => {
                self.reposition(event);
            }
            (PointerEventKind::DocumentClick, TriggerMode::Click) => self.hide(),
            _ => {}
        }

        Dispatch::Continue
    }

    /// Fill, position and show the tooltip for `target`.
    ///
    /// Returns false when the composed content is empty; visibility is
    /// left as it was in that case.
    fn activate(&mut self, event: &PointerEvent<S::Node>, target: &S::Node) -> bool {
        let point = self.read_point(target);
        let html = content::compose(&point, &self.options, &self.hooks);
        if html.is_empty() {
            log::trace!("Tooltip content empty, nothing to show");
            return false;
        }

        self.surface.set_inner_html(&self.tooltip, &html);
        self.reposition(event);
        self.show();

        let measured = self.surface.offset_size(&self.tooltip);
        if !measured.is_empty() {
            self.last_size = measured;
        }
        true
    }

    fn read_point(&self, target: &S::Node) -> PointText {
        let value = self.surface.attribute(target, VALUE_ATTRIBUTE).map(|value| {
            match &self.hooks.value_transform {
                Some(transform) => transform(&value),
                None => value,
            }
        });

        let meta = self.non_empty_attribute(target, META_ATTRIBUTE).or_else(|| {
            if !self.kind.is_pie_like() {
                return None;
            }
            let group = self.surface.parent(target)?;
            self.non_empty_attribute(&group, META_ATTRIBUTE)
                .or_else(|| self.non_empty_attribute(&group, SERIES_NAME_ATTRIBUTE))
        });

        let label = if meta.is_none() && self.kind.is_pie_like() {
            self.next_label(target)
        } else {
            None
        };

        PointText { value, meta, label }
    }

    fn non_empty_attribute(&self, node: &S::Node, name: &str) -> Option<String> {
        self.surface
            .attribute(node, name)
            .filter(|value| !value.is_empty())
    }

    fn next_label(&self, target: &S::Node) -> Option<String> {
        let mut sibling = self.surface.next_sibling(target);
        while let Some(node) = sibling {
            if visibility::has_class(&self.surface.class_name(&node), LABEL_CLASS) {
                return Some(self.surface.text_content(&node));
            }
            sibling = self.surface.next_sibling(&node);
        }
        None
    }

    fn trigger_target(&self, event: &PointerEvent<S::Node>) -> Option<S::Node> {
        event
            .target
            .as_ref()
            .filter(|target| self.trigger.matches(&self.surface.class_name(target)))
            .cloned()
    }

    fn reposition(&mut self, event: &PointerEvent<S::Node>) {
        let frame = match self.options.host() {
            TooltipHost::Chart => {
                let anchor = if self.options.anchor_to_point {
                    event
                        .target
                        .as_ref()
                        .and_then(|target| self.surface.line_endpoint(target))
                } else {
                    None
                };
                PointerFrame::Container {
                    origin: self.surface.container_origin(),
                    scroll: self.surface.scroll_offset(),
                    anchor,
                }
            }
            TooltipHost::Body => PointerFrame::Page,
        };

        let placement = position::compute_placement(
            self.options.position,
            self.options.tooltip_offset,
            self.current_size(),
            event.page,
            frame,
        );

        match placement {
            Some(placement) => self.surface.set_position(&self.tooltip, placement),
            None => log::trace!("Unrecognized anchor position, tooltip not moved"),
        }
    }

    /// Fresh measurement, or the last good one while the tooltip has no layout
    fn current_size(&self) -> Size {
        let measured = self.surface.offset_size(&self.tooltip);
        if measured.is_empty() {
            self.last_size
        } else {
            measured
        }
    }

    pub fn show(&mut self) {
        let class_name = visibility::shown(&self.surface.class_name(&self.tooltip));
        self.surface.set_class_name(&self.tooltip, &class_name);
    }

    pub fn hide(&mut self) {
        let class_name = visibility::hidden(&self.surface.class_name(&self.tooltip));
        self.surface.set_class_name(&self.tooltip, &class_name);
    }

    pub fn is_visible(&self) -> bool {
        visibility::has_class(&self.surface.class_name(&self.tooltip), SHOW_CLASS)
    }

    pub fn tooltip(&self) -> &S::Node {
        &self.tooltip
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn options(&self) -> &TooltipOptions {
        &self.options
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
