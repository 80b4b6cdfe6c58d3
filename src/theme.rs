//! Theme palettes
//!
//! Pure derived data: the light and dark palettes carry every color role
//! the UI layer consumes, and the active palette is picked from the
//! `dark_mode` setting. Colors are `#RRGGBB` hex strings so any front end
//! can map them to its own color type.

use crate::settings::Settings;

/// Color roles consumed by the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Screen background
    pub background: &'static str,
    /// Card/list-item surface
    pub surface: &'static str,
    /// Secondary surface (info panels)
    pub surface_alt: &'static str,
    /// Primary text
    pub text: &'static str,
    /// Secondary text
    pub text_secondary: &'static str,
    /// Tertiary text (labels, captions)
    pub text_tertiary: &'static str,
    /// Hairline borders and separators
    pub border: &'static str,
    /// Accent (section titles, counter value)
    pub accent: &'static str,
    /// Positive state (enabled switches)
    pub success: &'static str,
    /// Cautionary state
    pub warning: &'static str,
    /// Destructive state
    pub danger: &'static str,
    /// Icon chip background
    pub icon_bg: &'static str,
    /// Switch track when off
    pub switch_track: &'static str,
}

/// Light palette
pub const LIGHT_THEME: Theme = Theme {
    background: "#F7F8FA",
    surface: "#FFFFFF",
    surface_alt: "#EEF1F5",
    text: "#1C1C1E",
    text_secondary: "#3A3A3C",
    text_tertiary: "#8E8E93",
    border: "#E5E5EA",
    accent: "#007AFF",
    success: "#34C759",
    warning: "#FF9500",
    danger: "#FF3B30",
    icon_bg: "#F2F2F7",
    switch_track: "#E9E9EB",
};

/// Dark palette
pub const DARK_THEME: Theme = Theme {
    background: "#000000",
    surface: "#1C1C1E",
    surface_alt: "#2C2C2E",
    text: "#FFFFFF",
    text_secondary: "#EBEBF5",
    text_tertiary: "#8E8E93",
    border: "#38383A",
    accent: "#0A84FF",
    success: "#30D158",
    warning: "#FF9F0A",
    danger: "#FF453A",
    icon_bg: "#2C2C2E",
    switch_track: "#39393D",
};

impl Theme {
    /// The palette for the current settings
    #[must_use]
    pub fn for_settings(settings: &Settings) -> &'static Theme {
        if settings.dark_mode {
            &DARK_THEME
        } else {
            &LIGHT_THEME
        }
    }
}
