//! # Wheel Renderer
//!
//! Paints one frame of a progress wheel onto any `Surface`.
//!
//! ## Draw Order:
//! rim → outer contour → inner contour → bar arc → inner circle → text.
//! Later primitives cover earlier ones where they overlap.
//!
//! ## Angles:
//! Degrees, 0° at three o'clock, positive sweeps run clockwise on a y-down
//! surface. The bar therefore starts at -90° (twelve o'clock).

use crate::geometry::{RectF, WheelLayout};
use crate::paint::{Paint, PaintSet};
use crate::style::TextLayout;

/// Vertical font metrics relative to the baseline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Distance above the baseline, negative
    pub ascent: f32,
    /// Distance below the baseline, positive
    pub descent: f32,
}

impl FontMetrics {
    pub fn line_height(&self) -> f32 {
        self.descent - self.ascent
    }
}

/// Drawing target supplied by the host toolkit
pub trait Surface {
    /// Stroke the arc of the ellipse inscribed in `oval`
    fn draw_arc(&mut self, oval: RectF, start_angle: f32, sweep_angle: f32, paint: &Paint);

    fn draw_circle(&mut self, center_x: f32, center_y: f32, radius: f32, paint: &Paint);

    /// Draw `text` with its left edge at `x` and its baseline at `baseline`
    fn draw_text(&mut self, text: &str, x: f32, baseline: f32, paint: &Paint);

    fn measure_text(&self, text: &str, paint: &Paint) -> f32;

    fn font_metrics(&self, paint: &Paint) -> FontMetrics;
}

/// Where and how far the bar arc sweeps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarArc {
    pub start_angle: f32,
    pub sweep_angle: f32,
}

impl BarArc {
    /// Spinning: a fixed-length arc chasing the progress angle.
    /// Stopped: a gauge filled from twelve o'clock up to the progress angle.
    pub fn for_state(running: bool, progress: i32, bar_length: i32) -> Self {
        if running {
            Self {
                start_angle: (progress - 90) as f32,
                sweep_angle: bar_length as f32,
            }
        } else {
            Self {
                start_angle: -90.0,
                sweep_angle: progress as f32,
            }
        }
    }
}

/// Borrowed snapshot of everything needed to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct WheelFrame<'a> {
    pub layout: &'a WheelLayout,
    pub paints: &'a PaintSet,
    pub running: bool,
    pub progress: i32,
    pub bar_length: i32,
    pub rim_width: i32,
    pub circle_radius: i32,
    pub lines: &'a [String],
    pub text_layout: TextLayout,
}

impl WheelFrame<'_> {
    pub fn draw(&self, surface: &mut impl Surface) {
        let layout = self.layout;
        let paints = self.paints;

        surface.draw_arc(layout.circle_bounds, 360.0, 360.0, &paints.rim);
        surface.draw_arc(layout.outer_contour, 360.0, 360.0, &paints.contour);
        surface.draw_arc(layout.inner_contour, 360.0, 360.0, &paints.contour);

        let bar = BarArc::for_state(self.running, self.progress, self.bar_length);
        surface.draw_arc(layout.circle_bounds, bar.start_angle, bar.sweep_angle, &paints.bar);

        let (center_x, center_y) = self.inner_circle_center();
        surface.draw_circle(center_x, center_y, self.circle_radius as f32, &paints.circle);

        self.draw_text(surface);
    }

    /// Offset by the rim width, not the bar width
    pub fn inner_circle_center(&self) -> (f32, f32) {
        let layout = self.layout;
        (
            layout.circle_bounds.width() / 2.0 + self.rim_width as f32 + layout.padding.left as f32,
            layout.circle_bounds.height() / 2.0 + self.rim_width as f32 + layout.padding.top as f32,
        )
    }

    fn draw_text(&self, surface: &mut impl Surface) {
        if self.lines.is_empty() {
            return;
        }

        let paint = &self.paints.text;
        let metrics = surface.font_metrics(paint);
        let vertical_offset = metrics.line_height() / 2.0 - metrics.descent;
        let baseline = (self.layout.height / 2) as f32 + vertical_offset;
        let half_width = (self.layout.width / 2) as f32;

        let count = self.lines.len();
        for (index, line) in self.lines.iter().enumerate() {
            let x = half_width - surface.measure_text(line, paint) / 2.0;
            let y = match self.text_layout {
                TextLayout::Overlapping => baseline,
                TextLayout::Stacked => {
                    let shift = index as f32 - (count - 1) as f32 / 2.0;
                    baseline + shift * metrics.line_height()
                }
            };
            surface.draw_text(line, x, y, paint);
        }
    }
}
