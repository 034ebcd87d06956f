//! # Progress Wheel View
//!
//! The egui widget wrapping a `ProgressWheelDrawable`. It owns the drawable
//! and the scheduler that drives its animation, forwards property accessors,
//! and turns every `Invalidate::Yes` into a repaint request.

use eframe::egui;
use log::debug;
use progress_wheel_shared::{
    Argb, ColorFilter, Invalidate, ProgressWheelDrawable, StyleConfig, TextLayout,
};

use super::attributes::{AttributeError, StyleAttributes};
use super::scheduler::EguiScheduler;
use super::surface::EguiSurface;

/// Forwards a getter and a repainting setter to the drawable
macro_rules! forward_properties {
    ($($getter:ident / $setter:ident : $ty:ty),* $(,)?) => {
        $(
            pub fn $getter(&self) -> $ty {
                self.drawable.$getter()
            }

            pub fn $setter(&mut self, value: $ty) {
                let invalidate = self.drawable.$setter(value);
                self.invalidate(invalidate);
            }
        )*
    };
}

pub struct ProgressWheelView {
    drawable: ProgressWheelDrawable,
    scheduler: EguiScheduler,
    desired_size: egui::Vec2,
}

impl ProgressWheelView {
    /// Create a view sized to fit the style's full radius
    pub fn new(ctx: &egui::Context, style: StyleConfig) -> Self {
        let side = style.full_radius.saturating_mul(2).max(0) as f32;
        Self {
            drawable: ProgressWheelDrawable::new(style),
            scheduler: EguiScheduler::new(ctx),
            desired_size: egui::vec2(side, side),
        }
    }

    /// Create a view from markup attributes. Wheel coordinates are egui
    /// points, so `px` values are divided by the context's pixels per point
    pub fn from_attributes(ctx: &egui::Context, attributes: &StyleAttributes) -> Result<Self, AttributeError> {
        let style = attributes.to_style(ctx.pixels_per_point())?;
        Ok(Self::new(ctx, style))
    }

    pub fn with_size(mut self, size: impl Into<egui::Vec2>) -> Self {
        self.desired_size = size.into();
        self
    }

    pub fn desired_size(&self) -> egui::Vec2 {
        self.desired_size
    }

    pub fn drawable(&self) -> &ProgressWheelDrawable {
        &self.drawable
    }

    pub fn start(&mut self) {
        let invalidate = self.drawable.start(&mut self.scheduler);
        self.invalidate(invalidate);
    }

    pub fn stop(&mut self) {
        self.drawable.stop(&mut self.scheduler);
    }

    /// Start if stopped, stop if running
    pub fn toggle(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    pub fn is_running(&self) -> bool {
        self.drawable.is_running()
    }

    pub fn is_spinning(&self) -> bool {
        self.drawable.is_spinning()
    }

    pub fn progress(&self) -> i32 {
        self.drawable.progress()
    }

    pub fn text(&self) -> &str {
        self.drawable.text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        let invalidate = self.drawable.set_text(text);
        self.invalidate(invalidate);
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        let invalidate = self.drawable.set_alpha(alpha);
        self.invalidate(invalidate);
    }

    pub fn set_color_filter(&mut self, color_filter: Option<ColorFilter>) {
        let invalidate = self.drawable.set_color_filter(color_filter);
        self.invalidate(invalidate);
    }

    forward_properties! {
        full_radius / set_full_radius: i32,
        circle_radius / set_circle_radius: i32,
        bar_length / set_bar_length: i32,
        bar_width / set_bar_width: i32,
        rim_width / set_rim_width: i32,
        text_size / set_text_size: i32,
        contour_size / set_contour_size: f32,
        bar_color / set_bar_color: Argb,
        contour_color / set_contour_color: Argb,
        circle_color / set_circle_color: Argb,
        rim_color / set_rim_color: Argb,
        text_color / set_text_color: Argb,
        spin_speed / set_spin_speed: i32,
        text_layout / set_text_layout: TextLayout,
    }

    fn invalidate(&self, invalidate: Invalidate) {
        if invalidate.is_requested() {
            self.scheduler.ctx().request_repaint();
        }
    }

    /// Follow the allocated size and fire a due tick
    fn update(&mut self, rect: egui::Rect) {
        let width = rect.width().round() as i32;
        let height = rect.height().round() as i32;
        if (width, height) != self.drawable.bounds() {
            debug!("Progress wheel resized to {}x{}", width, height);
            let invalidate = self.drawable.set_bounds(width, height);
            self.invalidate(invalidate);
        }

        if self.scheduler.take_due() {
            let invalidate = self.drawable.tick(&mut self.scheduler);
            self.invalidate(invalidate);
        }
    }
}

impl egui::Widget for &mut ProgressWheelView {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(self.desired_size, egui::Sense::click());
        self.update(rect);

        if ui.is_rect_visible(rect) {
            let mut surface = EguiSurface::new(ui.painter(), rect.min);
            self.drawable.draw(&mut surface);
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn run_frame(ctx: &egui::Context, view: &mut ProgressWheelView, time: f64) -> egui::FullOutput {
        let input = egui::RawInput {
            time: Some(time),
            ..Default::default()
        };
        ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.add(&mut *view);
            });
        })
    }

    #[test]
    fn test_default_size_follows_full_radius() {
        let ctx = egui::Context::default();
        let view = ProgressWheelView::new(&ctx, StyleConfig::default());
        assert_eq!(view.desired_size(), egui::vec2(200.0, 200.0));

        let sized = view.with_size([64.0, 32.0]);
        assert_eq!(sized.desired_size(), egui::vec2(64.0, 32.0));
    }

    #[test]
    fn test_huge_full_radius_saturates_size() {
        let ctx = egui::Context::default();
        let view = ProgressWheelView::new(&ctx, StyleConfig::builder().full_radius(i32::MAX).build());
        assert_eq!(view.desired_size().x, i32::MAX as f32);

        let negative = ProgressWheelView::new(&ctx, StyleConfig::builder().full_radius(-5).build());
        assert_eq!(negative.desired_size(), egui::vec2(0.0, 0.0));
    }

    #[test]
    fn test_attributes_resolve_in_points_on_hidpi() {
        let ctx = egui::Context::default();
        ctx.set_pixels_per_point(2.0);
        ctx.run(egui::RawInput::default(), |_| {});
        assert_eq!(ctx.pixels_per_point(), 2.0);

        let attributes = StyleAttributes::from_yaml("barWidth: 10dp\nrimWidth: 8px\ntextSize: 14sp").unwrap();
        let mut view = ProgressWheelView::from_attributes(&ctx, &attributes)
            .unwrap()
            .with_size([100.0, 100.0]);
        run_frame(&ctx, &mut view, 0.0);

        assert_eq!(view.drawable().bounds(), (100, 100));
        assert_eq!(view.bar_width(), 10);
        assert_eq!(view.rim_width(), 4);
        assert_eq!(view.text_size(), 14);
    }

    #[test]
    fn test_setters_forward_to_drawable() {
        let ctx = egui::Context::default();
        let mut view = ProgressWheelView::new(&ctx, StyleConfig::default());

        view.set_bar_color(Argb::WHITE);
        view.set_text("A\nB");
        view.set_spin_speed(9);

        assert_eq!(view.bar_color(), Argb::WHITE);
        assert_eq!(view.rim_color(), Argb::RIM_GRAY);
        assert_eq!(view.drawable().lines().len(), 2);
        assert_eq!(view.spin_speed(), 9);
        assert_eq!(view.text(), "A\nB");
    }

    #[test]
    fn test_from_attributes() {
        let ctx = egui::Context::default();
        let attributes = StyleAttributes::from_yaml("barWidth: 8\ntext: hi").unwrap();
        let view = ProgressWheelView::from_attributes(&ctx, &attributes).unwrap();

        assert_eq!(view.bar_width(), 8);
        assert_eq!(view.text(), "hi");
    }

    #[test]
    fn test_toggle_flips_running_state() {
        let ctx = egui::Context::default();
        let mut view = ProgressWheelView::new(&ctx, StyleConfig::default());

        view.toggle();
        assert!(view.is_running());
        view.toggle();
        assert!(!view.is_spinning());
    }

    #[test]
    fn test_frames_lay_out_and_tick() {
        let ctx = egui::Context::default();
        let mut view = ProgressWheelView::new(&ctx, StyleConfig::builder().spin_speed(5).build())
            .with_size([120.0, 80.0]);

        run_frame(&ctx, &mut view, 0.0);
        assert_eq!(view.drawable().bounds(), (120, 80));
        assert_eq!(view.drawable().layout().padding.left, 20);

        view.start();
        assert_eq!(view.scheduler.pending(), Some(Duration::from_millis(16)));

        // Not due yet
        run_frame(&ctx, &mut view, 0.010);
        assert_eq!(view.progress(), 0);

        let output = run_frame(&ctx, &mut view, 0.020);
        assert_eq!(view.progress(), 5);
        assert!(!output.shapes.is_empty());

        view.stop();
        run_frame(&ctx, &mut view, 0.100);
        assert_eq!(view.progress(), 5);
        assert_eq!(view.scheduler.pending(), None);
    }
}
