//! Shared color constants for the UI.

use egui::Color32;
use sitedesk_business::table::{Tone, Variant};

/// Forest green color for healthy/active/success status.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red color for error/inactive/failed status.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber color for checking/pending status.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Blue used for primary buttons and the active sidebar entry.
pub const COLOR_BLUE: Color32 = Color32::from_rgb(37, 99, 235);

/// Slate used for secondary text.
pub const COLOR_MUTED: Color32 = Color32::from_rgb(100, 116, 139);

/// Text color of a table cell tone; `None` keeps the theme default.
pub fn tone_color(tone: Tone) -> Option<Color32> {
    match tone {
        Tone::Default => None,
        Tone::Muted => Some(COLOR_MUTED),
        Tone::Success => Some(COLOR_GREEN),
        Tone::Danger => Some(COLOR_RED),
        Tone::Warning => Some(COLOR_AMBER),
        Tone::Accent => Some(COLOR_BLUE),
    }
}

/// Fill color of an action button.
pub fn variant_fill(variant: Variant) -> Option<Color32> {
    match variant {
        Variant::Primary => Some(COLOR_BLUE),
        Variant::Secondary => None,
        Variant::Danger => Some(COLOR_RED),
    }
}
