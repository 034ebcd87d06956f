//! # Paint State
//!
//! The five paint descriptors used to render a wheel. They are a pure function
//! of the style plus the drawable-wide alpha and color filter, so they are
//! simply rebuilt whenever any of those change.

use crate::color::{Argb, ColorFilter};
use crate::style::StyleConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    Fill,
    Stroke,
}

/// Everything a surface needs to know to draw one primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Argb,
    pub style: PaintStyle,
    pub stroke_width: f32,
    pub anti_alias: bool,
    /// Overrides the color's alpha channel when set
    pub alpha: Option<u8>,
    pub color_filter: Option<ColorFilter>,
    /// Only meaningful for the text paint
    pub text_size: f32,
}

impl Paint {
    fn stroke(color: Argb, width: f32) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke,
            stroke_width: width,
            anti_alias: true,
            alpha: None,
            color_filter: None,
            text_size: 0.0,
        }
    }

    fn fill(color: Argb) -> Self {
        Self {
            style: PaintStyle::Fill,
            stroke_width: 0.0,
            ..Self::stroke(color, 0.0)
        }
    }

    /// Color to actually draw with once alpha and filter are applied
    pub fn effective_color(&self) -> Argb {
        let color = match self.alpha {
            Some(alpha) => self.color.with_alpha(alpha),
            None => self.color,
        };
        match &self.color_filter {
            Some(filter) => filter.apply(color),
            None => color,
        }
    }
}

/// The bar, rim, circle fill, contour and text paints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintSet {
    pub bar: Paint,
    pub rim: Paint,
    pub circle: Paint,
    pub contour: Paint,
    pub text: Paint,
}

impl PaintSet {
    pub fn from_style(style: &StyleConfig, alpha: Option<u8>, color_filter: Option<ColorFilter>) -> Self {
        let mut text = Paint::fill(style.text_color);
        text.text_size = style.text_size as f32;

        let mut paints = Self {
            bar: Paint::stroke(style.bar_color, style.bar_width as f32),
            rim: Paint::stroke(style.rim_color, style.rim_width as f32),
            circle: Paint::fill(style.circle_color),
            contour: Paint::stroke(style.contour_color, style.contour_size),
            text,
        };
        paints.for_each_mut(|paint| {
            paint.alpha = alpha;
            paint.color_filter = color_filter;
        });
        paints
    }

    fn for_each_mut(&mut self, mut f: impl FnMut(&mut Paint)) {
        for paint in [&mut self.bar, &mut self.rim, &mut self.circle, &mut self.contour, &mut self.text] {
            f(paint);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paints_follow_style() {
        let style = StyleConfig::builder()
            .bar_width(12)
            .rim_width(6)
            .contour_size(1.5)
            .text_size(18)
            .circle_color(Argb::WHITE)
            .build();
        let paints = PaintSet::from_style(&style, None, None);

        assert_eq!(paints.bar.style, PaintStyle::Stroke);
        assert_eq!(paints.bar.stroke_width, 12.0);
        assert_eq!(paints.bar.color, Argb::RED);
        assert_eq!(paints.rim.stroke_width, 6.0);
        assert_eq!(paints.rim.color, Argb::RIM_GRAY);
        assert_eq!(paints.contour.stroke_width, 1.5);
        assert_eq!(paints.circle.style, PaintStyle::Fill);
        assert_eq!(paints.circle.color, Argb::WHITE);
        assert_eq!(paints.text.style, PaintStyle::Fill);
        assert_eq!(paints.text.text_size, 18.0);
        assert!(paints.bar.anti_alias && paints.text.anti_alias);
    }

    #[test]
    fn test_alpha_and_filter_reach_every_paint() {
        let filter = ColorFilter::Tint(Argb::from_rgb(0, 255, 0));
        let paints = PaintSet::from_style(&StyleConfig::default(), Some(0x40), Some(filter));

        for paint in [paints.bar, paints.rim, paints.circle, paints.contour, paints.text] {
            assert_eq!(paint.alpha, Some(0x40));
            assert_eq!(paint.color_filter, Some(filter));
            assert_eq!(paint.effective_color(), Argb(0x4000_FF00));
        }
    }

    #[test]
    fn test_effective_color_without_overrides() {
        let paints = PaintSet::from_style(&StyleConfig::default(), None, None);
        assert_eq!(paints.rim.effective_color(), Argb::RIM_GRAY);
    }
}
