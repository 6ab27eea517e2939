//! Class-list helpers for showing and hiding the tooltip

use chart_tooltip_shared::SHOW_CLASS;

/// Whole-token class membership on a space separated class attribute
pub fn has_class(class_name: &str, class: &str) -> bool {
    class_name.split_whitespace().any(|token| token == class)
}

/// Class attribute with the show marker present
pub fn shown(class_name: &str) -> String {
    if has_class(class_name, SHOW_CLASS) {
        return class_name.to_string();
    }

    let trimmed = class_name.trim_end();
    if trimmed.is_empty() {
        SHOW_CLASS.to_string()
    } else {
        format!("{trimmed} {SHOW_CLASS}")
    }
}

/// Class attribute with every show marker stripped
pub fn hidden(class_name: &str) -> String {
    class_name
        .split_whitespace()
        .filter(|token| !token.eq_ignore_ascii_case(SHOW_CLASS))
        .collect::<Vec<_>>()
        .join(" ")
}
