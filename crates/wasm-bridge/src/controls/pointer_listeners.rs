//! Wires DOM mouse events to a tooltip controller

use std::cell::RefCell;
use std::rc::Rc;

use chart_tooltip_core::{Dispatch, PointerEvent, TooltipController};
use chart_tooltip_shared::{Point, PointerEventKind, TooltipError, TooltipResult, TriggerMode};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, MouseEvent};

use crate::dom_surface::DomSurface;

pub type SharedController = Rc<RefCell<TooltipController<DomSurface>>>;

/// Register the listeners for the controller's trigger mode.
///
/// Listeners stay attached for the lifetime of the page; they go away with
/// the chart container.
pub fn register(controller: &SharedController) -> TooltipResult<()> {
    let (container, mode) = {
        let controller = controller.borrow();
        (
            controller.surface().container().clone(),
            controller.options().trigger_mode(),
        )
    };

    match mode {
        TriggerMode::Hover => {
            listen(&container, PointerEventKind::Over, controller)?;
            listen(&container, PointerEventKind::Out, controller)?;
            listen(&container, PointerEventKind::Move, controller)?;
        }
        TriggerMode::Click => {
            listen(&container, PointerEventKind::Click, controller)?;
            let document = web_sys::window()
                .and_then(|window| window.document())
                .ok_or_else(|| TooltipError::dom("document", "No document object"))?;
            listen(&document, PointerEventKind::DocumentClick, controller)?;
        }
    }

    log::info!("Tooltip listeners registered ({mode:?})");
    Ok(())
}

fn listen(
    target: &EventTarget,
    kind: PointerEventKind,
    controller: &SharedController,
) -> TooltipResult<()> {
    let controller = Rc::clone(controller);
    let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
        dispatch(&controller, kind, &event);
    }) as Box<dyn FnMut(MouseEvent)>);

    target
        .add_event_listener_with_callback(kind.dom_type(), closure.as_ref().unchecked_ref())
        .map_err(|e| {
            TooltipError::js_interop(format!("addEventListener({}): {e:?}", kind.dom_type()))
        })?;
    closure.forget();
    Ok(())
}

fn dispatch(controller: &SharedController, kind: PointerEventKind, event: &MouseEvent) {
    // A JS callback can synchronously raise another event while we hold the borrow
    let Ok(mut controller) = controller.try_borrow_mut() else {
        log::debug!("Dropping re-entrant {} event", kind.dom_type());
        return;
    };

    let target = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok());
    let pointer = PointerEvent::new(
        kind,
        target,
        Point::new(event.page_x() as f64, event.page_y() as f64),
    );

    if controller.handle_event(&pointer) == Dispatch::StopPropagation {
        event.stop_propagation();
    }
}
