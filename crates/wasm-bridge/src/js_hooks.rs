//! Bridge JavaScript option callbacks into `TooltipHooks`

use chart_tooltip_core::TooltipHooks;
use chart_tooltip_shared::{TooltipError, TooltipOptions, TooltipResult};
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

const CURRENCY_FORMAT_KEY: &str = "currencyFormatCallback";
const VALUE_TRANSFORM_KEY: &str = "transformTooltipTextFnc";
const RENDER_KEY: &str = "tooltipFnc";

fn function_option(options: &JsValue, key: &str) -> Option<Function> {
    if !options.is_object() {
        return None;
    }
    Reflect::get(options, &JsValue::from_str(key))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Text of a callback result, the way string concatenation would render it
fn result_text(result: &JsValue) -> Option<String> {
    if let Some(text) = result.as_string() {
        return Some(text);
    }
    if let Some(number) = result.as_f64() {
        return Some(number.to_string());
    }
    None
}

/// The options object handed to callbacks: parsed options with defaults
/// applied, plus the user's callbacks.
pub fn callback_options(options: &TooltipOptions, raw: &JsValue) -> TooltipResult<JsValue> {
    let merged = serde_wasm_bindgen::to_value(options)
        .map_err(|e| TooltipError::js_interop(e.to_string()))?;

    for key in [CURRENCY_FORMAT_KEY, VALUE_TRANSFORM_KEY, RENDER_KEY] {
        if let Some(callback) = function_option(raw, key) {
            Reflect::set(&merged, &JsValue::from_str(key), &callback)
                .map_err(|e| TooltipError::js_interop(format!("{e:?}")))?;
        }
    }
    Ok(merged)
}

/// Read the callback options from the raw JS options object.
///
/// A callback that throws degrades: the currency formatter to the raw
/// value, the transform to the untransformed value, the renderer to empty
/// content (tooltip not shown).
pub fn hooks_from_options(raw: &JsValue, options: &TooltipOptions) -> TooltipHooks {
    let mut hooks = TooltipHooks::new();

    if let Some(format) = function_option(raw, CURRENCY_FORMAT_KEY) {
        let merged = callback_options(options, raw).unwrap_or_else(|e| {
            log::warn!("{CURRENCY_FORMAT_KEY} gets the raw options: {e}");
            raw.clone()
        });
        hooks = hooks.with_currency_format(move |value, _| {
            match format.call2(&JsValue::NULL, &JsValue::from_str(value), &merged) {
                Ok(result) => result_text(&result).unwrap_or_else(|| value.to_string()),
                Err(e) => {
                    log::warn!("{CURRENCY_FORMAT_KEY} threw: {e:?}");
                    value.to_string()
                }
            }
        });
    }

    if let Some(transform) = function_option(raw, VALUE_TRANSFORM_KEY) {
        hooks = hooks.with_value_transform(move |value| {
            match transform.call1(&JsValue::NULL, &JsValue::from_str(value)) {
                Ok(result) => result_text(&result).unwrap_or_default(),
                Err(e) => {
                    log::warn!("{VALUE_TRANSFORM_KEY} threw: {e:?}");
                    value.to_string()
                }
            }
        });
    }

    if let Some(render) = function_option(raw, RENDER_KEY) {
        hooks = hooks.with_render(move |meta, value| {
            let value = value.map(JsValue::from_str).unwrap_or(JsValue::NULL);
            match render.call2(&JsValue::NULL, &JsValue::from_str(meta), &value) {
                Ok(result) => result_text(&result).unwrap_or_default(),
                Err(e) => {
                    log::warn!("{RENDER_KEY} threw: {e:?}");
                    String::new()
                }
            }
        });
    }

    hooks
}
