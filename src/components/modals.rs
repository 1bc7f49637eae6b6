//! Alert modal for the Diligence GUI
//!
//! A single-purpose cut of a modal system: an overlay alert card with a
//! dismissible backdrop, used for input validation and fetch failures.

use crate::theme::Theme;
use gpui::*;

/// Width of the alert card (small modal preset)
pub const ALERT_WIDTH: f32 = 360.0;

/// Alert severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertType {
    #[default]
    Info,
    Error,
}

impl AlertType {
    pub fn title(&self) -> &'static str {
        match self {
            AlertType::Info => "Notice",
            AlertType::Error => "Error",
        }
    }

    pub fn color(&self, theme: &Theme) -> Hsla {
        match self {
            AlertType::Info => theme.accent,
            AlertType::Error => theme.negative,
        }
    }
}

/// A user-facing alert message
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: AlertType,
    pub message: String,
}

impl Alert {
    pub fn new(kind: AlertType, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Shown when the ticker field is empty after trimming
    pub fn empty_ticker() -> Self {
        Self::new(AlertType::Info, "Please enter a stock ticker.")
    }

    /// Shown for any failed fetch, regardless of cause
    pub fn fetch_failed() -> Self {
        Self::new(
            AlertType::Error,
            "Failed to fetch due diligence. Please try again later.",
        )
    }
}
