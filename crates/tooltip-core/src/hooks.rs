//! Caller-supplied callbacks that customize tooltip text

use std::fmt;
use std::rc::Rc;

use chart_tooltip_shared::TooltipOptions;

/// `(value, options) -> formatted value`, replaces the default currency grouping
pub type CurrencyFormatFn = Rc<dyn Fn(&str, &TooltipOptions) -> String>;

/// `value -> value`, applied to the raw value attribute before anything else
pub type ValueTransformFn = Rc<dyn Fn(&str) -> String>;

/// `(meta, value) -> html`, replaces content composition entirely
pub type TooltipRenderFn = Rc<dyn Fn(&str, Option<&str>) -> String>;

#[derive(Clone, Default)]
pub struct TooltipHooks {
    pub currency_format: Option<CurrencyFormatFn>,
    pub value_transform: Option<ValueTransformFn>,
    pub render: Option<TooltipRenderFn>,
}

impl TooltipHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_currency_format<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &TooltipOptions) -> String + 'static,
    {
        self.currency_format = Some(Rc::new(f));
        self
    }

    pub fn with_value_transform<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + 'static,
    {
        self.value_transform = Some(Rc::new(f));
        self
    }

    pub fn with_render<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, Option<&str>) -> String + 'static,
    {
        self.render = Some(Rc::new(f));
        self
    }
}

impl fmt::Debug for TooltipHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TooltipHooks")
            .field("currency_format", &self.currency_format.is_some())
            .field("value_transform", &self.value_transform.is_some())
            .field("render", &self.render.is_some())
            .finish()
    }
}
