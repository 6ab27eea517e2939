//! Tooltip text composition
//!
//! Turns the value, meta and label read from a chart element into the
//! inner HTML of the tooltip. The controller does the DOM reads; this
//! module is pure string work.

use chart_tooltip_shared::TooltipOptions;

use crate::escape::{escape_html, unescape_html};
use crate::hooks::TooltipHooks;

pub const VALUE_ATTRIBUTE: &str = "ct:value";
pub const META_ATTRIBUTE: &str = "ct:meta";
pub const SERIES_NAME_ATTRIBUTE: &str = "ct:series-name";

/// Class of the text labels drawn next to pie slices
pub const LABEL_CLASS: &str = "ct-label";

pub const META_CLASS: &str = "chartist-tooltip-meta";
pub const VALUE_CLASS: &str = "chartist-tooltip-value";

/// Text gathered from a trigger element.
///
/// `value` is the value attribute after the transform hook ran. `label` is
/// only looked up for pie-like charts when no meta is available.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointText {
    pub value: Option<String>,
    pub meta: Option<String>,
    pub label: Option<String>,
}

/// Compose the tooltip's inner HTML. An empty result means "do not show".
pub fn compose(point: &PointText, options: &TooltipOptions, hooks: &TooltipHooks) -> String {
    let meta = point.meta.as_deref().filter(|m| !m.is_empty());

    if let Some(render) = &hooks.render {
        return render(meta.unwrap_or(""), point.value.as_deref());
    }

    let mut text = String::new();

    if let Some(meta) = meta {
        let meta = if options.meta_is_html {
            unescape_html(meta)
        } else {
            meta.to_string()
        };
        text.push_str(&format!("( <span class=\"{META_CLASS}\">{meta}</span> )"));
    } else if let Some(label) = point.label.as_deref() {
        text.push_str(&escape_html(label));
        if options.show_value {
            text.push_str("<br>");
        }
    }

    match point.value.as_deref() {
        Some(value) if !value.is_empty() && options.show_value => {
            let value = match options.currency.as_deref() {
                Some(currency) if !currency.is_empty() => format_currency(value, options, hooks),
                _ => value.to_string(),
            };
            format!("<span class=\"{VALUE_CLASS}\">{value}</span>{text}")
        }
        _ => text,
    }
}

/// Format a value as currency, through the caller's hook when one is set
pub fn format_currency(value: &str, options: &TooltipOptions, hooks: &TooltipHooks) -> String {
    match &hooks.currency_format {
        Some(format) => format(value, options),
        None => format!(
            "{}{}",
            options.currency.as_deref().unwrap_or_default(),
            group_thousands(value)
        ),
    }
}

/// Insert `,` between groups of three digits of the integer part.
///
/// Only the run of digits directly before the last decimal point is
/// grouped; a sign or any other prefix is kept as is and the fraction is
/// untouched. A value whose tail after the last `.` is not all digits (or
/// is empty) is returned unchanged.
pub fn group_thousands(value: &str) -> String {
    let (integer, fraction) = match value.rfind('.') {
        Some(index) if is_fraction(&value[index + 1..]) => value.split_at(index),
        Some(_) => return value.to_string(),
        None => (value, ""),
    };

    let digits_start = integer
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(0, |(index, c)| index + c.len_utf8());
    let (prefix, digits) = integer.split_at(digits_start);

    let mut grouped = String::with_capacity(value.len() + digits.len() / 3);
    grouped.push_str(prefix);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push_str(fraction);
    grouped
}

fn is_fraction(digits: &str) -> bool {
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
