//! Ticker text input
//!
//! GPUI has no native input widget, so the field is a styled div backed by
//! plain string state; the app feeds keystrokes into it while the window is
//! focused.

use crate::theme::Theme;
use gpui::prelude::*;
use gpui::*;

/// Stateful text input owned by the application entity
pub struct TextInputState {
    pub value: String,
    pub placeholder: String,
    pub label: Option<String>,
    pub focused: bool,
}

impl TextInputState {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            placeholder: String::new(),
            label: None,
            focused: true,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Append typed characters
    pub fn insert(&mut self, text: &str) {
        self.value.push_str(text);
    }

    /// Remove the last character, if any
    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// The value as the request handler reads it
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn render(&self, theme: &Theme) -> impl IntoElement {
        let border_color = if self.focused {
            theme.accent
        } else {
            theme.border
        };

        div()
            .flex()
            .flex_col()
            .gap(px(6.0))
            // Label
            .when_some(self.label.clone(), |el, label| {
                el.child(
                    div()
                        .text_size(px(12.0))
                        .font_weight(FontWeight::MEDIUM)
                        .text_color(theme.text_secondary)
                        .child(label),
                )
            })
            // Input container
            .child(
                div()
                    .h(px(40.0))
                    .px(px(12.0))
                    .rounded(px(6.0))
                    .bg(theme.card_bg_elevated)
                    .border_1()
                    .border_color(border_color)
                    .flex()
                    .items_center()
                    .cursor_text()
                    .child(
                        div()
                            .flex_grow()
                            .text_size(px(13.0))
                            .text_color(if self.value.is_empty() {
                                theme.text_dimmed
                            } else {
                                theme.text
                            })
                            .child(if self.value.is_empty() {
                                self.placeholder.clone()
                            } else {
                                self.value.clone()
                            }),
                    ),
            )
    }
}

impl Default for TextInputState {
    fn default() -> Self {
        Self::new()
    }
}
