//! # egui Surface
//!
//! Draws progress wheel frames with egui painting primitives. egui has no
//! native arc shape, so arcs are tessellated into line paths.

use eframe::egui;
use progress_wheel_shared::{Argb, FontMetrics, Paint, PaintStyle, RectF, Surface};

/// Share of the row height that sits above the baseline
const ASCENT_RATIO: f32 = 0.8;

/// Convert a packed ARGB color into egui's color type
pub fn to_color32(color: Argb) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.red(), color.green(), color.blue(), color.alpha())
}

/// Convert back from egui, used by the demo's color pickers
pub fn from_color32(color: egui::Color32) -> Argb {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    Argb::from_argb(a, r, g, b)
}

/// Number of segments for an arc, roughly 3 pixels per segment
fn segment_count(radius: f32, sweep_radians: f32) -> usize {
    let arc_length = (sweep_radians * radius).abs();
    ((arc_length / 3.0).ceil() as usize).clamp(8, 120)
}

/// Points along the ellipse inscribed in `oval`, starting at `start_angle`
/// degrees and sweeping `sweep_angle` degrees (positive is clockwise)
pub fn arc_points(oval: RectF, start_angle: f32, sweep_angle: f32) -> Vec<egui::Pos2> {
    let radius_x = oval.width() / 2.0;
    let radius_y = oval.height() / 2.0;
    let start = start_angle.to_radians();
    let sweep = sweep_angle.to_radians();
    let segments = segment_count(radius_x.abs().max(radius_y.abs()), sweep);

    (0..=segments)
        .map(|i| {
            let angle = start + sweep * i as f32 / segments as f32;
            egui::pos2(
                oval.center_x() + radius_x * angle.cos(),
                oval.center_y() + radius_y * angle.sin(),
            )
        })
        .collect()
}

/// `Surface` over an egui painter, translating wheel-local coordinates by
/// the widget's origin
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self { painter, origin }
    }

    fn font_id(paint: &Paint) -> egui::FontId {
        // egui cannot lay out text at a zero or negative size
        egui::FontId::proportional(paint.text_size.max(1.0))
    }

    fn stroke(paint: &Paint) -> egui::Stroke {
        egui::Stroke::new(paint.stroke_width, to_color32(paint.effective_color()))
    }
}

impl Surface for EguiSurface<'_> {
    fn draw_arc(&mut self, oval: RectF, start_angle: f32, sweep_angle: f32, paint: &Paint) {
        if sweep_angle == 0.0 {
            return;
        }

        let offset = self.origin.to_vec2();
        let mut points: Vec<egui::Pos2> = arc_points(oval, start_angle, sweep_angle)
            .into_iter()
            .map(|point| point + offset)
            .collect();

        if sweep_angle.abs() >= 360.0 {
            // Last point repeats the first
            points.pop();
            self.painter.add(egui::Shape::closed_line(points, Self::stroke(paint)));
        } else {
            self.painter.add(egui::Shape::line(points, Self::stroke(paint)));
        }
    }

    fn draw_circle(&mut self, center_x: f32, center_y: f32, radius: f32, paint: &Paint) {
        if radius <= 0.0 {
            return;
        }

        let center = self.origin + egui::vec2(center_x, center_y);
        match paint.style {
            PaintStyle::Fill => {
                self.painter.circle_filled(center, radius, to_color32(paint.effective_color()));
            }
            PaintStyle::Stroke => {
                self.painter.circle_stroke(center, radius, Self::stroke(paint));
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, baseline: f32, paint: &Paint) {
        let metrics = self.font_metrics(paint);
        let color = to_color32(paint.effective_color());
        let galley = self.painter.layout_no_wrap(text.to_owned(), Self::font_id(paint), color);
        let top_left = self.origin + egui::vec2(x, baseline + metrics.ascent);
        self.painter.galley(top_left, galley, color);
    }

    fn measure_text(&self, text: &str, paint: &Paint) -> f32 {
        self.painter
            .layout_no_wrap(text.to_owned(), Self::font_id(paint), egui::Color32::PLACEHOLDER)
            .size()
            .x
    }

    fn font_metrics(&self, paint: &Paint) -> FontMetrics {
        let font_id = Self::font_id(paint);
        let row_height = self.painter.fonts(|fonts| fonts.row_height(&font_id));
        FontMetrics {
            ascent: -row_height * ASCENT_RATIO,
            descent: row_height * (1.0 - ASCENT_RATIO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: egui::Pos2, b: egui::Pos2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_color_conversion_round_trips_opaque_colors() {
        let color = Argb::from_rgb(200, 120, 200);
        assert_eq!(to_color32(color), egui::Color32::from_rgb(200, 120, 200));
        assert_eq!(from_color32(to_color32(color)), color);
        assert_eq!(to_color32(Argb::TRANSPARENT).a(), 0);
    }

    #[test]
    fn test_quarter_arc_runs_clockwise_from_twelve() {
        let oval = RectF::new(0.0, 0.0, 100.0, 100.0);
        let points = arc_points(oval, -90.0, 90.0);

        assert!(approx(points[0], egui::pos2(50.0, 0.0)));
        assert!(approx(*points.last().unwrap(), egui::pos2(100.0, 50.0)));
    }

    #[test]
    fn test_arc_follows_ellipse() {
        let oval = RectF::new(10.0, 20.0, 110.0, 60.0);
        let points = arc_points(oval, 0.0, 180.0);

        assert!(approx(points[0], egui::pos2(110.0, 40.0)));
        assert!(approx(*points.last().unwrap(), egui::pos2(10.0, 40.0)));
    }

    #[test]
    fn test_segment_count_is_bounded() {
        assert_eq!(segment_count(1.0, 0.1), 8);
        assert_eq!(segment_count(10_000.0, std::f32::consts::TAU), 120);
        assert_eq!(segment_count(30.0, 1.0), 10);
    }
}
