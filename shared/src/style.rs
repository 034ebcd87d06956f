//! # Style Configuration
//!
//! The scalar properties of a progress wheel and the builder that supplies
//! their defaults.
//!
//! ## Key Types:
//! - `StyleConfig` - Every style property, consumed by the drawable
//! - `StyleBuilder` - Chainable builder seeded with the default look
//! - `TextLayout` - How multi-line text is positioned

use serde::{Deserialize, Serialize};

use crate::color::Argb;

/// How the lines of the center text are positioned vertically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextLayout {
    /// Every line is drawn on the same centered baseline, so lines overlap
    #[default]
    Overlapping,
    /// Lines are stacked by line height and centered as a block
    Stacked,
}

/// Full set of style properties for a progress wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    pub text: String,
    pub text_size: i32,
    pub text_color: Argb,
    pub text_layout: TextLayout,
    pub circle_color: Argb,
    /// Arc length of the bar while spinning, in degrees
    pub bar_length: i32,
    pub bar_color: Argb,
    pub bar_width: i32,
    pub rim_color: Argb,
    pub rim_width: i32,
    /// Degrees added to the progress angle on every tick
    pub spin_speed: i32,
    pub contour_color: Argb,
    pub contour_size: f32,
    pub full_radius: i32,
    pub circle_radius: i32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            text_size: 20,
            text_color: Argb::BLACK,
            text_layout: TextLayout::Overlapping,
            circle_color: Argb::TRANSPARENT,
            bar_length: 20,
            bar_color: Argb::RED,
            bar_width: 20,
            rim_color: Argb::RIM_GRAY,
            rim_width: 20,
            spin_speed: 2,
            contour_color: Argb::TRANSPARENT,
            contour_size: 0.0,
            full_radius: 100,
            circle_radius: 80,
        }
    }
}

impl StyleConfig {
    pub fn builder() -> StyleBuilder {
        StyleBuilder::new()
    }
}

/// Builder for `StyleConfig`; unset properties keep their defaults
#[derive(Debug, Clone, Default)]
pub struct StyleBuilder {
    config: StyleConfig,
}

impl StyleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.config.text = text.into();
        self
    }

    pub fn text_size(mut self, text_size: i32) -> Self {
        self.config.text_size = text_size;
        self
    }

    pub fn text_color(mut self, text_color: Argb) -> Self {
        self.config.text_color = text_color;
        self
    }

    pub fn text_layout(mut self, text_layout: TextLayout) -> Self {
        self.config.text_layout = text_layout;
        self
    }

    pub fn circle_color(mut self, circle_color: Argb) -> Self {
        self.config.circle_color = circle_color;
        self
    }

    pub fn bar_length(mut self, bar_length: i32) -> Self {
        self.config.bar_length = bar_length;
        self
    }

    pub fn bar_color(mut self, bar_color: Argb) -> Self {
        self.config.bar_color = bar_color;
        self
    }

    pub fn bar_width(mut self, bar_width: i32) -> Self {
        self.config.bar_width = bar_width;
        self
    }

    pub fn rim_color(mut self, rim_color: Argb) -> Self {
        self.config.rim_color = rim_color;
        self
    }

    pub fn rim_width(mut self, rim_width: i32) -> Self {
        self.config.rim_width = rim_width;
        self
    }

    pub fn spin_speed(mut self, spin_speed: i32) -> Self {
        self.config.spin_speed = spin_speed;
        self
    }

    pub fn contour_color(mut self, contour_color: Argb) -> Self {
        self.config.contour_color = contour_color;
        self
    }

    pub fn contour_size(mut self, contour_size: f32) -> Self {
        self.config.contour_size = contour_size;
        self
    }

    pub fn full_radius(mut self, full_radius: i32) -> Self {
        self.config.full_radius = full_radius;
        self
    }

    pub fn circle_radius(mut self, circle_radius: i32) -> Self {
        self.config.circle_radius = circle_radius;
        self
    }

    pub fn build(self) -> StyleConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let style = StyleBuilder::new().build();

        assert_eq!(style.text_size, 20);
        assert_eq!(style.text_color, Argb(0xFF00_0000));
        assert_eq!(style.circle_color, Argb(0x0000_0000));
        assert_eq!(style.bar_length, 20);
        assert_eq!(style.bar_color, Argb(0xFFFF_0000));
        assert_eq!(style.bar_width, 20);
        assert_eq!(style.rim_color, Argb(0xAADD_DDDD));
        assert_eq!(style.rim_width, 20);
        assert_eq!(style.spin_speed, 2);
        assert_eq!(style.contour_color, Argb::TRANSPARENT);
        assert_eq!(style.contour_size, 0.0);
        assert_eq!(style.full_radius, 100);
        assert_eq!(style.circle_radius, 80);
        assert_eq!(style.text_layout, TextLayout::Overlapping);
        assert!(style.text.is_empty());
    }

    #[test]
    fn test_builder_overrides_only_named_fields() {
        let style = StyleConfig::builder()
            .bar_width(8)
            .rim_color(Argb::WHITE)
            .text("Loading")
            .build();

        assert_eq!(style.bar_width, 8);
        assert_eq!(style.rim_color, Argb::WHITE);
        assert_eq!(style.text, "Loading");
        // Untouched fields keep their defaults
        assert_eq!(style.rim_width, 20);
        assert_eq!(style.bar_color, Argb::RED);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let style: StyleConfig =
            serde_json::from_str(r#"{"barWidth": 4, "textLayout": "stacked"}"#).unwrap();

        assert_eq!(style.bar_width, 4);
        assert_eq!(style.text_layout, TextLayout::Stacked);
        assert_eq!(style.spin_speed, 2);
        assert_eq!(style.rim_color, Argb::RIM_GRAY);
    }
}
