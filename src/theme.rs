//! Theme configuration for the Diligence GUI
//!
//! Provides dark and light theme variants with a consistent palette for
//! report reading.

use gpui::*;

/// Theme colors for the application
#[allow(dead_code)]
#[derive(Clone)]
pub struct Theme {
    // Backgrounds, layered for visual hierarchy
    pub background: Hsla,
    pub card_bg: Hsla,
    pub card_bg_elevated: Hsla,
    pub hover_bg: Hsla,

    // Text contrast hierarchy
    pub text: Hsla,
    pub text_secondary: Hsla,
    pub text_muted: Hsla,
    pub text_dimmed: Hsla,

    // Borders
    pub border: Hsla,
    pub border_subtle: Hsla,
    pub border_strong: Hsla,

    // Accent colors
    pub accent: Hsla,
    pub accent_hover: Hsla,
    pub accent_subtle: Hsla,
    pub accent_muted: Hsla,

    // Semantic colors
    pub positive: Hsla,
    pub positive_subtle: Hsla,
    pub negative: Hsla,
    pub negative_subtle: Hsla,
    pub negative_muted: Hsla,
    pub warning: Hsla,
}

impl Theme {
    /// Dark theme optimized for long-form report reading
    pub fn dark() -> Self {
        Self {
            // Base canvas is darkest, cards sit above it
            background: hsla(228.0 / 360.0, 0.14, 0.09, 1.0),
            card_bg: hsla(228.0 / 360.0, 0.13, 0.13, 1.0),
            card_bg_elevated: hsla(228.0 / 360.0, 0.13, 0.15, 1.0),
            hover_bg: hsla(228.0 / 360.0, 0.15, 0.17, 1.0),

            text: hsla(0.0, 0.0, 0.96, 1.0),
            text_secondary: hsla(226.0 / 360.0, 0.08, 0.80, 1.0),
            text_muted: hsla(226.0 / 360.0, 0.11, 0.58, 1.0),
            text_dimmed: hsla(226.0 / 360.0, 0.09, 0.44, 1.0),

            border: hsla(228.0 / 360.0, 0.13, 0.21, 1.0),
            border_subtle: hsla(228.0 / 360.0, 0.11, 0.16, 1.0),
            border_strong: hsla(228.0 / 360.0, 0.15, 0.29, 1.0),

            // Accent: calm teal-blue
            accent: hsla(200.0 / 360.0, 0.85, 0.56, 1.0),
            accent_hover: hsla(200.0 / 360.0, 0.88, 0.63, 1.0),
            accent_subtle: hsla(200.0 / 360.0, 0.75, 0.52, 0.18),
            accent_muted: hsla(200.0 / 360.0, 0.55, 0.45, 0.55),

            positive: hsla(150.0 / 360.0, 0.70, 0.46, 1.0),
            positive_subtle: hsla(150.0 / 360.0, 0.62, 0.44, 0.18),
            negative: hsla(6.0 / 360.0, 0.74, 0.56, 1.0),
            negative_subtle: hsla(6.0 / 360.0, 0.68, 0.50, 0.18),
            negative_muted: hsla(6.0 / 360.0, 0.54, 0.46, 0.55),
            warning: hsla(42.0 / 360.0, 0.90, 0.52, 1.0),
        }
    }

    /// Light theme variant, selected via settings
    pub fn light() -> Self {
        Self {
            background: hsla(226.0 / 360.0, 0.12, 0.97, 1.0),
            card_bg: hsla(0.0, 0.0, 1.0, 1.0),
            card_bg_elevated: hsla(226.0 / 360.0, 0.06, 0.99, 1.0),
            hover_bg: hsla(226.0 / 360.0, 0.12, 0.92, 1.0),

            text: hsla(228.0 / 360.0, 0.24, 0.12, 1.0),
            text_secondary: hsla(228.0 / 360.0, 0.14, 0.30, 1.0),
            text_muted: hsla(228.0 / 360.0, 0.10, 0.46, 1.0),
            text_dimmed: hsla(228.0 / 360.0, 0.08, 0.58, 1.0),

            border: hsla(226.0 / 360.0, 0.13, 0.86, 1.0),
            border_subtle: hsla(226.0 / 360.0, 0.10, 0.92, 1.0),
            border_strong: hsla(226.0 / 360.0, 0.15, 0.78, 1.0),

            accent: hsla(200.0 / 360.0, 0.82, 0.42, 1.0),
            accent_hover: hsla(200.0 / 360.0, 0.85, 0.48, 1.0),
            accent_subtle: hsla(200.0 / 360.0, 0.78, 0.42, 0.12),
            accent_muted: hsla(200.0 / 360.0, 0.50, 0.40, 0.45),

            positive: hsla(150.0 / 360.0, 0.66, 0.36, 1.0),
            positive_subtle: hsla(150.0 / 360.0, 0.58, 0.36, 0.12),
            negative: hsla(6.0 / 360.0, 0.70, 0.48, 1.0),
            negative_subtle: hsla(6.0 / 360.0, 0.64, 0.48, 0.12),
            negative_muted: hsla(6.0 / 360.0, 0.50, 0.44, 0.45),
            warning: hsla(42.0 / 360.0, 0.86, 0.46, 1.0),
        }
    }
}
