use std::fmt;
use std::rc::Rc;

use chart_tooltip_shared::{ChartKind, TooltipOptions};

use crate::visibility::has_class;

/// Decides whether an element's class attribute marks it as a tooltip trigger
#[derive(Clone)]
pub struct TriggerPredicate {
    label: String,
    matches: Rc<dyn Fn(&str) -> bool>,
}

impl TriggerPredicate {
    /// Match elements carrying `class` as one of their class tokens
    pub fn class(class: impl Into<String>) -> Self {
        let class = class.into();
        let needle = class.clone();
        Self {
            label: class,
            matches: Rc::new(move |class_name| has_class(class_name, &needle)),
        }
    }

    /// Trigger class for the chart kind: points, bars or slices
    pub fn for_kind(kind: ChartKind, options: &TooltipOptions) -> Self {
        Self::class(kind.trigger_class(options))
    }

    pub fn custom<F>(label: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str) -> bool + 'static,
    {
        Self {
            label: label.into(),
            matches: Rc::new(f),
        }
    }

    pub fn matches(&self, class_name: &str) -> bool {
        (self.matches)(class_name)
    }
}

impl fmt::Debug for TriggerPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TriggerPredicate").field(&self.label).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_kind() {
        let options = TooltipOptions::default();

        let line = TriggerPredicate::for_kind(ChartKind::Line, &options);
        assert!(line.matches("ct-point"));
        assert!(!line.matches("ct-bar"));

        let donut = TriggerPredicate::for_kind(ChartKind::Donut, &options);
        assert!(donut.matches("ct-series ct-slice-donut"));
        assert!(!donut.matches("ct-slice-pie"));
    }

    #[test]
    fn test_custom() {
        let any_series = TriggerPredicate::custom("series", |class_name| {
            class_name.split_whitespace().any(|c| c.starts_with("ct-series-"))
        });
        assert!(any_series.matches("ct-point ct-series-b"));
        assert!(!any_series.matches("ct-point"));
        assert_eq!(format!("{any_series:?}"), "TriggerPredicate(\"series\")");
    }
}
