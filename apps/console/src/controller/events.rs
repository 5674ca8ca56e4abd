//! Backend events and error modeling for the operator console.

use actuator::{DeliveryError, DeliveryReceipt};
use shared::protocol::CommandKey;

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    DeliverySucceeded {
        sequence: u64,
        receipt: DeliveryReceipt,
    },
    DeliveryFailed {
        sequence: u64,
        key: CommandKey,
        error: UiError,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Timeout,
    Transport,
    Actuator,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Delivery,
    Input,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("invalid")
            || message_lower.contains("unrecognized")
            || message_lower.contains("missing")
            || message_lower.contains("unexpected")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("dns")
            || message_lower.contains("disconnected")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    /// Classifies an actuator failure from its variant rather than its text.
    pub fn from_delivery(error: &DeliveryError) -> Self {
        let category = if error.is_timeout() {
            UiErrorCategory::Timeout
        } else {
            match error {
                DeliveryError::Status { .. } => UiErrorCategory::Actuator,
                DeliveryError::InvalidUrl { .. } | DeliveryError::UnsupportedScheme { .. } => {
                    UiErrorCategory::Validation
                }
                DeliveryError::Transport { .. } => UiErrorCategory::Transport,
                DeliveryError::Client(_) => UiErrorCategory::Unknown,
            }
        };

        Self {
            category,
            context: UiErrorContext::Delivery,
            message: error.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// One-line operator hint; the signal heads keep their local state either way.
    pub fn hint(&self) -> &'static str {
        match self.category {
            UiErrorCategory::Timeout => {
                "actuator did not answer in time; check request_timeout_ms, signals unchanged"
            }
            UiErrorCategory::Transport => {
                "actuator unreachable; check the base URL and network, signals unchanged"
            }
            UiErrorCategory::Actuator => "actuator rejected the command; signals unchanged",
            UiErrorCategory::Validation => "check the input and retry",
            UiErrorCategory::Unknown => "unexpected failure; see logs",
        }
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
