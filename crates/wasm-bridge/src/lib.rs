//! WASM bridge for the chart tooltip
//! Exposes the tooltip plugin to JavaScript and runs it against the live DOM

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use chart_tooltip_core::TooltipController;
use chart_tooltip_shared::{TooltipError, TooltipOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub mod chart_adapter;
pub mod controls;
pub mod dom_surface;
pub mod js_hooks;

use controls::pointer_listeners;
use dom_surface::DomSurface;

fn to_js_error(err: TooltipError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Install the panic hook and the console logger. Safe to call repeatedly.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        let level = level
            .as_deref()
            .and_then(|level| level.parse::<log::Level>().ok())
            .unwrap_or(log::Level::Info);
        // Another logger may already be installed by the host page
        let _ = console_log::init_with_level(level);
    });
}

/// Parse a JS options object. When it does not deserialize as a whole,
/// keys are applied one at a time and the unusable ones keep their defaults.
fn parse_options(options: &JsValue) -> TooltipOptions {
    if options.is_undefined() || options.is_null() {
        return TooltipOptions::default();
    }

    match serde_wasm_bindgen::from_value::<TooltipOptions>(options.clone()) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::debug!("Coercing tooltip options key by key: {e}");
            let (parsed, rejected) = TooltipOptions::from_value_lenient(plain_data(options));
            for err in rejected {
                match err.field() {
                    Some(field) => log::warn!("Ignoring tooltip option `{field}`: {err}"),
                    None => log::warn!("Ignoring tooltip options: {err}"),
                }
            }
            parsed
        }
    }
}

/// The data part of a JS value. Callbacks and `undefined` entries are
/// skipped; anything serde cannot read becomes `null`.
fn plain_data(value: &JsValue) -> serde_json::Value {
    if value.is_object() && !js_sys::Array::is_array(value) {
        let mut entries = serde_json::Map::new();
        for entry in js_sys::Object::entries(value.unchecked_ref()).iter() {
            let entry: js_sys::Array = entry.unchecked_into();
            let (key, field) = (entry.get(0), entry.get(1));
            let Some(key) = key.as_string() else {
                continue;
            };
            if field.is_undefined() || field.is_function() {
                continue;
            }
            entries.insert(key, plain_data(&field));
        }
        return serde_json::Value::Object(entries);
    }

    serde_wasm_bindgen::from_value(value.clone()).unwrap_or(serde_json::Value::Null)
}

fn interop_error(err: serde_wasm_bindgen::Error) -> TooltipError {
    TooltipError::js_interop(err.to_string())
}

/// A configured tooltip, ready to be attached to any number of charts
#[wasm_bindgen]
#[derive(Clone)]
pub struct TooltipPlugin {
    options: TooltipOptions,
    raw_options: JsValue,
}

#[wasm_bindgen]
impl TooltipPlugin {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> TooltipPlugin {
        TooltipPlugin {
            options: parse_options(&options),
            raw_options: options,
        }
    }

    /// Attach the tooltip to a rendered chart.
    ///
    /// `kind` is one of `line`, `bar`, `pie`, `donut`; when omitted it is
    /// detected from the chart object's constructor name.
    #[wasm_bindgen]
    pub fn attach(&self, chart: &JsValue, kind: Option<String>) -> Result<(), JsValue> {
        let container = chart_adapter::container(chart).map_err(to_js_error)?;
        let kind = chart_adapter::chart_kind(chart, kind.as_deref());
        let surface = DomSurface::new(container).map_err(to_js_error)?;
        let hooks = js_hooks::hooks_from_options(&self.raw_options, &self.options);

        let controller = TooltipController::attach(surface, kind, self.options.clone(), hooks)
            .map_err(to_js_error)?;
        let controller = Rc::new(RefCell::new(controller));
        pointer_listeners::register(&controller).map_err(to_js_error)?;

        log::info!("Tooltip attached to {kind} chart");
        Ok(())
    }

    /// A `(chart) => void` function for a chart library's plugin list
    #[wasm_bindgen(js_name = asPlugin)]
    pub fn as_plugin(&self) -> js_sys::Function {
        let plugin = self.clone();
        let closure = Closure::wrap(Box::new(move |chart: JsValue| {
            if let Err(e) = plugin.attach(&chart, None) {
                log::error!("Failed to attach tooltip: {e:?}");
            }
        }) as Box<dyn FnMut(JsValue)>);
        closure.into_js_value().unchecked_into()
    }

    /// Options after defaults were applied, as a plain JS object
    #[wasm_bindgen(getter)]
    pub fn options(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.options)
            .map_err(interop_error)
            .map_err(to_js_error)
    }
}

/// Factory mirroring `new TooltipPlugin(options)`
#[wasm_bindgen(js_name = tooltipPlugin)]
pub fn tooltip_plugin(options: JsValue) -> TooltipPlugin {
    TooltipPlugin::new(options)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use chart_tooltip_shared::SHOW_CLASS;
    use wasm_bindgen_test::*;
    use web_sys::{Element, MouseEvent, MouseEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    /// A container with one point, wrapped in a chart-like object
    fn chart_with_point(value: &str) -> (JsValue, Element, Element) {
        let document = document();
        let container = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&container).unwrap();

        let point = document.create_element("span").unwrap();
        point.set_attribute("class", "ct-point").unwrap();
        point.set_attribute("ct:value", value).unwrap();
        container.append_child(&point).unwrap();

        let chart = js_sys::Object::new();
        js_sys::Reflect::set(&chart, &"container".into(), &container).unwrap();
        (chart.into(), container, point)
    }

    /// A chart object built by a class of the given name, around a container
    /// holding one element per `(class, value)` pair
    fn chart_of(
        constructor: &str,
        donut: bool,
        elements: &[(&str, &str)],
    ) -> (JsValue, Element, Vec<Element>) {
        let document = document();
        let container = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&container).unwrap();

        let elements = elements
            .iter()
            .map(|(class, value)| {
                let element = document.create_element("span").unwrap();
                element.set_attribute("class", class).unwrap();
                element.set_attribute("ct:value", value).unwrap();
                container.append_child(&element).unwrap();
                element
            })
            .collect();

        let build = format!("return new (class {constructor} {{}})();");
        let chart = js_sys::Function::new_no_args(&build).call0(&JsValue::NULL).unwrap();
        js_sys::Reflect::set(&chart, &"container".into(), &container).unwrap();

        let chart_options = js_sys::Object::new();
        js_sys::Reflect::set(&chart_options, &"donut".into(), &JsValue::from_bool(donut)).unwrap();
        js_sys::Reflect::set(&chart, &"options".into(), &chart_options).unwrap();

        (chart, container, elements)
    }

    fn fire(target: &Element, kind: &str) {
        let init = MouseEventInit::new();
        init.set_bubbles(true);
        let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
        target.dispatch_event(&event).unwrap();
    }

    fn tooltip(container: &Element) -> Element {
        container.query_selector(".chartist-tooltip").unwrap().unwrap()
    }

    fn is_shown(tooltip: &Element) -> bool {
        tooltip
            .get_attribute("class")
            .unwrap_or_default()
            .split_whitespace()
            .any(|c| c == SHOW_CLASS)
    }

    #[wasm_bindgen_test]
    fn test_hover_shows_and_hides() {
        let (chart, container, point) = chart_with_point("1234567");
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"currency".into(), &"$".into()).unwrap();

        tooltip_plugin(options.into()).attach(&chart, None).unwrap();
        let tooltip = tooltip(&container);
        assert!(!is_shown(&tooltip));

        fire(&point, "mouseover");
        assert!(is_shown(&tooltip));
        assert!(tooltip.inner_html().contains("$1,234,567"));

        fire(&point, "mouseout");
        assert!(!is_shown(&tooltip));
    }

    #[wasm_bindgen_test]
    fn test_click_mode() {
        let (chart, container, point) = chart_with_point("42");
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"showOnClick".into(), &JsValue::TRUE).unwrap();

        TooltipPlugin::new(options.into()).attach(&chart, Some("line".to_string())).unwrap();
        let tooltip = tooltip(&container);

        fire(&point, "click");
        assert!(is_shown(&tooltip));

        fire(&document().body().unwrap(), "click");
        assert!(!is_shown(&tooltip));
    }

    #[wasm_bindgen_test]
    fn test_render_callback() {
        let (chart, container, point) = chart_with_point("7");
        let options = js_sys::Object::new();
        let render = js_sys::Function::new_with_args("meta, value", "return 'v=' + value;");
        js_sys::Reflect::set(&options, &"tooltipFnc".into(), &render).unwrap();

        TooltipPlugin::new(options.into()).attach(&chart, None).unwrap();
        fire(&point, "mouseover");

        assert_eq!(tooltip(&container).inner_html(), "v=7");
    }

    #[wasm_bindgen_test]
    fn test_bar_chart_detected_from_constructor() {
        let (chart, container, elements) =
            chart_of("Bar", false, &[("ct-point", "1"), ("ct-bar", "2")]);

        TooltipPlugin::new(JsValue::UNDEFINED).attach(&chart, None).unwrap();
        let tooltip = tooltip(&container);

        fire(&elements[0], "mouseover");
        assert!(!is_shown(&tooltip));

        fire(&elements[1], "mouseover");
        assert!(is_shown(&tooltip));
        assert!(tooltip.inner_html().contains(">2<"));
    }

    #[wasm_bindgen_test]
    fn test_donut_detected_from_chart_options() {
        let (chart, container, elements) =
            chart_of("Pie", true, &[("ct-slice-pie", "10"), ("ct-slice-donut", "20")]);

        TooltipPlugin::new(JsValue::UNDEFINED).attach(&chart, None).unwrap();
        let tooltip = tooltip(&container);

        fire(&elements[0], "mouseover");
        assert!(!is_shown(&tooltip));

        fire(&elements[1], "mouseover");
        assert!(is_shown(&tooltip));
        assert!(tooltip.inner_html().contains(">20<"));
    }

    #[wasm_bindgen_test]
    fn test_explicit_kind_overrides_detection() {
        let (chart, container, elements) =
            chart_of("Bar", false, &[("ct-bar", "1"), ("ct-point", "2")]);

        TooltipPlugin::new(JsValue::UNDEFINED)
            .attach(&chart, Some("line".to_string()))
            .unwrap();
        let tooltip = tooltip(&container);

        fire(&elements[0], "mouseover");
        assert!(!is_shown(&tooltip));

        fire(&elements[1], "mouseover");
        assert!(is_shown(&tooltip));
    }

    #[wasm_bindgen_test]
    fn test_currency_callback_sees_defaults() {
        let (chart, container, point) = chart_with_point("1234");
        let options = js_sys::Object::new();
        let format = js_sys::Function::new_with_args(
            "value, options",
            "return options.tooltipOffset.y + '|' + options.pointClass + '|' + value;",
        );
        js_sys::Reflect::set(&options, &"currency".into(), &"$".into()).unwrap();
        js_sys::Reflect::set(&options, &"currencyFormatCallback".into(), &format).unwrap();

        TooltipPlugin::new(options.into()).attach(&chart, None).unwrap();
        fire(&point, "mouseover");

        assert!(tooltip(&container).inner_html().contains("-20|ct-point|1234"));
    }

    #[wasm_bindgen_test]
    fn test_mistyped_option_keeps_the_others() {
        let options = js_sys::Object::new();
        let offset = js_sys::Object::new();
        js_sys::Reflect::set(&offset, &"x".into(), &JsValue::from_f64(4.0)).unwrap();
        js_sys::Reflect::set(&offset, &"y".into(), &JsValue::NULL).unwrap();
        js_sys::Reflect::set(&options, &"currency".into(), &"$".into()).unwrap();
        js_sys::Reflect::set(&options, &"showValue".into(), &JsValue::from_f64(1.0)).unwrap();
        js_sys::Reflect::set(&options, &"showOnClick".into(), &"".into()).unwrap();
        js_sys::Reflect::set(&options, &"tooltipOffset".into(), &offset).unwrap();

        let plugin = TooltipPlugin::new(options.into());

        assert_eq!(plugin.options.currency.as_deref(), Some("$"));
        assert!(plugin.options.show_value);
        assert!(!plugin.options.show_on_click);
        assert_eq!(plugin.options.tooltip_offset.x, 4.0);
        assert_eq!(plugin.options.tooltip_offset.y, -20.0);
    }

    #[wasm_bindgen_test]
    fn test_missing_container_is_an_error() {
        let chart: JsValue = js_sys::Object::new().into();
        assert!(TooltipPlugin::new(JsValue::UNDEFINED).attach(&chart, None).is_err());
    }
}
