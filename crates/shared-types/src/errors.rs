//! Error types shared by the tooltip crates
//!
//! Runtime DOM oddities (missing attributes, zero-size elements, unknown
//! anchor keywords) never surface here; they degrade silently. These
//! errors cover configuration parsing and host environment failures.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TooltipError {
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: String,
        field: Option<String>,
    },

    #[error("Chart container not found: {message}")]
    MissingContainer { message: String },

    #[error("DOM operation failed: {operation}: {message}")]
    Dom { operation: String, message: String },

    #[error("JavaScript interop error: {message}")]
    JsInterop { message: String },
}

/// Result type alias for tooltip operations
pub type TooltipResult<T> = Result<T, TooltipError>;

impl TooltipError {
    pub fn dom(operation: &str, message: impl Into<String>) -> Self {
        TooltipError::Dom {
            operation: operation.to_string(),
            message: message.into(),
        }
    }

    pub fn js_interop(message: impl Into<String>) -> Self {
        TooltipError::JsInterop {
            message: message.into(),
        }
    }

    /// A single option whose value could not be used
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        TooltipError::InvalidConfig {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// The option key an `InvalidConfig` error points at, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            TooltipError::InvalidConfig { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TooltipError {
    fn from(err: serde_json::Error) -> Self {
        TooltipError::InvalidConfig {
            message: err.to_string(),
            field: None,
        }
    }
}
