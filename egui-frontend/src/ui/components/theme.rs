//! # Theme Configuration
//!
//! Centralized colors for the progress wheel demo. Layout and text colors are
//! egui colors; the wheel palettes are packed ARGB so they can be handed
//! straight to the wheel's style builder.
//!
//! ## Usage
//! ```rust
//! use crate::ui::components::theme::CURRENT_THEME;
//!
//! let accent = CURRENT_THEME.wheels.indigo.bar;
//! ```

use eframe::egui::Color32;
use progress_wheel_shared::Argb;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background and card colors
    pub layout: LayoutColors,
    /// Text and typography colors
    pub typography: TypographyColors,
    /// Color sets for the showcased wheels
    pub wheels: WheelPalettes,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub background: Color32,
    pub card_background: Color32,
    pub card_shadow: Color32,
    pub card_border: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
}

/// Colors for a single wheel
#[derive(Debug, Clone, Copy)]
pub struct WheelPalette {
    pub bar: Argb,
    pub rim: Argb,
    pub circle: Argb,
    pub contour: Argb,
    pub text: Argb,
}

#[derive(Debug, Clone)]
pub struct WheelPalettes {
    pub indigo: WheelPalette,
    pub pink: WheelPalette,
    pub teal: WheelPalette,
}

/// The current active theme
pub const CURRENT_THEME: Theme = Theme {
    layout: LayoutColors {
        background: Color32::from_rgb(245, 245, 250),
        card_background: Color32::WHITE,
        card_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 20),
        card_border: Color32::from_rgb(220, 220, 220),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(60, 60, 60),
        secondary: Color32::from_rgb(120, 120, 120),
    },
    wheels: WheelPalettes {
        indigo: WheelPalette {
            bar: Argb::from_rgb(79, 109, 245),
            rim: Argb(0x334F_6DF5),
            circle: Argb::TRANSPARENT,
            contour: Argb(0x664F_6DF5),
            text: Argb::from_rgb(60, 60, 60),
        },
        // Soft pink with a faint filled center
        pink: WheelPalette {
            bar: Argb::from_rgb(200, 120, 200),
            rim: Argb::from_rgb(240, 240, 240),
            circle: Argb(0x22C8_78C8),
            contour: Argb::TRANSPARENT,
            text: Argb::from_rgb(80, 80, 80),
        },
        teal: WheelPalette {
            bar: Argb::from_rgb(0, 150, 136),
            rim: Argb::RIM_GRAY,
            circle: Argb::from_rgb(224, 242, 241),
            contour: Argb::from_rgb(0, 105, 92),
            text: Argb::from_rgb(0, 77, 64),
        },
    },
};

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;

    pub const CARD_BACKGROUND: Color32 = CURRENT_THEME.layout.card_background;
    pub const CARD_SHADOW: Color32 = CURRENT_THEME.layout.card_shadow;
    pub const CARD_BORDER: Color32 = CURRENT_THEME.layout.card_border;
}
