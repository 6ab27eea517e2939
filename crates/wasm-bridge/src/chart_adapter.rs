//! Reads what the tooltip needs from a chart library's chart object

use chart_tooltip_shared::{ChartKind, TooltipError, TooltipResult};
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

fn property(target: &JsValue, key: &str) -> Option<JsValue> {
    if !target.is_object() && !target.is_function() {
        return None;
    }
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// The chart's container element (`chart.container`)
pub fn container(chart: &JsValue) -> TooltipResult<Element> {
    property(chart, "container")
        .and_then(|value| value.dyn_into::<Element>().ok())
        .ok_or_else(|| TooltipError::MissingContainer {
            message: "chart.container is not an element".to_string(),
        })
}

/// Constructor name of the chart object, e.g. `"Bar"`
pub fn type_name(chart: &JsValue) -> Option<String> {
    property(chart, "constructor")
        .and_then(|ctor| property(&ctor, "name"))
        .and_then(|name| name.as_string())
}

/// `chart.options.donut`
pub fn is_donut(chart: &JsValue) -> bool {
    property(chart, "options")
        .and_then(|options| property(&options, "donut"))
        .map(|donut| donut.is_truthy())
        .unwrap_or(false)
}

/// Chart kind from an explicit tag, or detected from the chart object
pub fn chart_kind(chart: &JsValue, tag: Option<&str>) -> ChartKind {
    let donut = is_donut(chart);
    match tag {
        Some(tag) => ChartKind::from_tag(tag, donut),
        None => type_name(chart)
            .map(|name| ChartKind::from_tag(&name, donut))
            .unwrap_or_default(),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn instance_of(constructor: &str) -> JsValue {
        let build = format!("return new (class {constructor} {{}})();");
        js_sys::Function::new_no_args(&build)
            .call0(&JsValue::NULL)
            .unwrap()
    }

    fn with_donut(chart: &JsValue, donut: JsValue) {
        let options = js_sys::Object::new();
        Reflect::set(&options, &"donut".into(), &donut).unwrap();
        Reflect::set(chart, &"options".into(), &options).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_chart_kind_from_constructor_name() {
        assert_eq!(type_name(&instance_of("Bar")).as_deref(), Some("Bar"));
        assert_eq!(chart_kind(&instance_of("Bar"), None), ChartKind::Bar);
        assert_eq!(chart_kind(&instance_of("Pie"), None), ChartKind::Pie);
        assert_eq!(chart_kind(&instance_of("Line"), None), ChartKind::Line);

        let plain: JsValue = js_sys::Object::new().into();
        assert_eq!(chart_kind(&plain, None), ChartKind::Line);
        assert_eq!(chart_kind(&JsValue::UNDEFINED, None), ChartKind::Line);
    }

    #[wasm_bindgen_test]
    fn test_donut_flag_is_truthy() {
        let pie = instance_of("Pie");
        with_donut(&pie, JsValue::from_f64(1.0));
        assert!(is_donut(&pie));
        assert_eq!(chart_kind(&pie, None), ChartKind::Donut);

        with_donut(&pie, JsValue::from_str(""));
        assert!(!is_donut(&pie));
        assert_eq!(chart_kind(&pie, None), ChartKind::Pie);
    }

    #[wasm_bindgen_test]
    fn test_explicit_tag_wins() {
        let bar = instance_of("Bar");
        assert_eq!(chart_kind(&bar, Some("line")), ChartKind::Line);

        let pie = instance_of("Pie");
        with_donut(&pie, JsValue::TRUE);
        assert_eq!(chart_kind(&pie, Some("pie")), ChartKind::Donut);
    }
}
