//! # Progress Wheel Drawable
//!
//! `ProgressWheelDrawable` ties the style, layout, paints, animation state and
//! split text together and exposes the contract a host widget talks to.
//!
//! Mutations never call back into the host. Anything that changes what would
//! be drawn returns `Invalidate::Yes` and the host decides when to repaint.

use log::debug;

use crate::animation::{Animator, FrameScheduler};
use crate::color::{Argb, ColorFilter};
use crate::geometry::WheelLayout;
use crate::paint::PaintSet;
use crate::render::{Surface, WheelFrame};
use crate::style::{StyleConfig, TextLayout};

/// Whether the host should redraw after a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalidate {
    Yes,
    No,
}

impl Invalidate {
    pub fn is_requested(self) -> bool {
        self == Invalidate::Yes
    }
}

impl std::ops::BitOr for Invalidate {
    type Output = Invalidate;

    fn bitor(self, rhs: Self) -> Self::Output {
        if self.is_requested() || rhs.is_requested() {
            Invalidate::Yes
        } else {
            Invalidate::No
        }
    }
}

/// How much of its bounds a drawable covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opacity {
    Opaque,
    Translucent,
    Transparent,
}

/// Generates a getter and an invalidating setter per style field
macro_rules! style_accessors {
    ($($field:ident / $setter:ident : $ty:ty),* $(,)?) => {
        $(
            pub fn $field(&self) -> $ty {
                self.style.$field
            }

            pub fn $setter(&mut self, $field: $ty) -> Invalidate {
                self.style.$field = $field;
                self.rebuild_paints();
                Invalidate::Yes
            }
        )*
    };
}

#[derive(Debug, Clone)]
pub struct ProgressWheelDrawable {
    style: StyleConfig,
    layout: WheelLayout,
    paints: PaintSet,
    animator: Animator,
    lines: Vec<String>,
    alpha: Option<u8>,
    color_filter: Option<ColorFilter>,
}

impl ProgressWheelDrawable {
    pub fn new(style: StyleConfig) -> Self {
        let paints = PaintSet::from_style(&style, None, None);
        let lines = split_lines(&style.text);
        Self {
            style,
            layout: WheelLayout::default(),
            paints,
            animator: Animator::new(),
            lines,
            alpha: None,
            color_filter: None,
        }
    }

    /// Bounds-changed notification from the host.
    ///
    /// Recomputes the layout and paints. The derived full and circle radii
    /// replace whatever was configured.
    pub fn set_bounds(&mut self, width: i32, height: i32) -> Invalidate {
        let style = &self.style;
        self.layout = WheelLayout::compute(width, height, style.bar_width, style.rim_width, style.contour_size);
        self.style.full_radius = self.layout.full_radius;
        self.style.circle_radius = self.layout.circle_radius;
        self.rebuild_paints();
        debug!(
            "Progress wheel bounds {}x{}: full radius {}, circle radius {}",
            width, height, self.layout.full_radius, self.layout.circle_radius
        );
        Invalidate::Yes
    }

    pub fn bounds(&self) -> (i32, i32) {
        (self.layout.width, self.layout.height)
    }

    pub fn layout(&self) -> &WheelLayout {
        &self.layout
    }

    pub fn paints(&self) -> &PaintSet {
        &self.paints
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    // Animatable contract

    pub fn start(&mut self, scheduler: &mut impl FrameScheduler) -> Invalidate {
        self.animator.start(scheduler)
    }

    pub fn stop(&mut self, scheduler: &mut impl FrameScheduler) {
        self.animator.stop(scheduler);
    }

    pub fn is_running(&self) -> bool {
        self.animator.is_running()
    }

    /// Callback for the tick requested through the scheduler
    pub fn tick(&mut self, scheduler: &mut impl FrameScheduler) -> Invalidate {
        self.animator.tick(self.style.spin_speed, scheduler)
    }

    pub fn is_spinning(&self) -> bool {
        self.is_running()
    }

    pub fn progress(&self) -> i32 {
        self.animator.progress()
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        WheelFrame {
            layout: &self.layout,
            paints: &self.paints,
            running: self.animator.is_running(),
            progress: self.animator.progress(),
            bar_length: self.style.bar_length,
            rim_width: self.style.rim_width,
            circle_radius: self.style.circle_radius,
            lines: &self.lines,
            text_layout: self.style.text_layout,
        }
        .draw(surface);
    }

    /// The drawable never covers its whole bounds
    pub fn opacity(&self) -> Opacity {
        Opacity::Transparent
    }

    pub fn alpha(&self) -> Option<u8> {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: u8) -> Invalidate {
        self.alpha = Some(alpha);
        self.rebuild_paints();
        Invalidate::Yes
    }

    pub fn color_filter(&self) -> Option<ColorFilter> {
        self.color_filter
    }

    pub fn set_color_filter(&mut self, color_filter: Option<ColorFilter>) -> Invalidate {
        self.color_filter = color_filter;
        self.rebuild_paints();
        Invalidate::Yes
    }

    pub fn text(&self) -> &str {
        &self.style.text
    }

    /// Lines as split when the text was set
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Set the center text; `'\n'` starts a new line
    pub fn set_text(&mut self, text: impl Into<String>) -> Invalidate {
        self.style.text = text.into();
        self.lines = split_lines(&self.style.text);
        Invalidate::Yes
    }

    pub fn text_layout(&self) -> TextLayout {
        self.style.text_layout
    }

    pub fn set_text_layout(&mut self, text_layout: TextLayout) -> Invalidate {
        self.style.text_layout = text_layout;
        Invalidate::Yes
    }

    style_accessors! {
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
    }

    fn rebuild_paints(&mut self) {
        self.paints = PaintSet::from_style(&self.style, self.alpha, self.color_filter);
    }
}

impl Default for ProgressWheelDrawable {
    fn default() -> Self {
        Self::new(StyleConfig::default())
    }
}

impl From<StyleConfig> for ProgressWheelDrawable {
    fn from(style: StyleConfig) -> Self {
        Self::new(style)
    }
}

/// Split on newlines, dropping trailing empty lines
fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::tests::FakeScheduler;
    use crate::animation::FRAME_INTERVAL;
    use crate::render::tests::{DrawOp, RecordingSurface};

    fn drawable() -> ProgressWheelDrawable {
        let mut drawable = ProgressWheelDrawable::default();
        let _ = drawable.set_bounds(200, 200);
        drawable
    }

    fn bar_arc(drawable: &ProgressWheelDrawable) -> (f32, f32) {
        let mut surface = RecordingSurface::default();
        drawable.draw(&mut surface);
        let arcs = surface.arcs();
        (arcs[3].1, arcs[3].2)
    }

    #[test]
    fn test_split_text() {
        assert_eq!(split_lines("A\nB"), vec!["A", "B"]);
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("A\n\n"), vec!["A"]);
        assert_eq!(split_lines("\nB"), vec!["", "B"]);
        assert!(split_lines("\n").is_empty());
    }

    #[test]
    fn test_set_text_splits_at_set_time() {
        let mut drawable = drawable();
        assert_eq!(drawable.set_text("A\nB"), Invalidate::Yes);

        assert_eq!(drawable.text(), "A\nB");
        assert_eq!(drawable.lines(), ["A".to_string(), "B".to_string()]);

        let mut surface = RecordingSurface::default();
        drawable.draw(&mut surface);
        let texts = surface.texts();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].2, texts[1].2);
    }

    #[test]
    fn test_builder_text_is_split() {
        let drawable = ProgressWheelDrawable::new(StyleConfig::builder().text("12%\nloading").build());
        assert_eq!(drawable.lines().len(), 2);
    }

    #[test]
    fn test_setter_leaves_other_properties_alone() {
        let mut drawable = drawable();
        let before = drawable.style().clone();

        assert_eq!(drawable.set_bar_color(Argb::WHITE), Invalidate::Yes);

        assert_eq!(drawable.bar_color(), Argb::WHITE);
        assert_eq!(drawable.rim_color(), before.rim_color);
        assert_eq!(drawable.paints().bar.color, Argb::WHITE);
        assert_eq!(drawable.paints().rim.color, before.rim_color);
        let after = StyleConfig { bar_color: before.bar_color, ..drawable.style().clone() };
        assert_eq!(after, before);
    }

    #[test]
    fn test_stroke_setters_update_paints() {
        let mut drawable = drawable();
        let _ = drawable.set_rim_width(4) | drawable.set_contour_size(2.5) | drawable.set_text_size(30);

        assert_eq!(drawable.paints().rim.stroke_width, 4.0);
        assert_eq!(drawable.paints().contour.stroke_width, 2.5);
        assert_eq!(drawable.paints().text.text_size, 30.0);
        // Layout only follows on the next bounds change
        assert_eq!(drawable.layout().inner_contour, drawable.layout().circle_bounds.inset(10.0));
    }

    #[test]
    fn test_bounds_change_overrides_radii() {
        let mut drawable = ProgressWheelDrawable::default();
        assert_eq!(drawable.full_radius(), 100);
        assert_eq!(drawable.circle_radius(), 80);

        assert_eq!(drawable.set_bounds(300, 200), Invalidate::Yes);
        assert_eq!(drawable.bounds(), (300, 200));
        assert_eq!(drawable.full_radius(), (300 - 50 - 20) / 2);
        assert_eq!(drawable.circle_radius(), 115 - 20 + 1);

        let _ = drawable.set_circle_radius(10);
        assert_eq!(drawable.circle_radius(), 10);
    }

    #[test]
    fn test_spin_cycle_through_drawable() {
        let mut drawable = drawable();
        let _ = drawable.set_spin_speed(45);
        let mut scheduler = FakeScheduler::default();

        assert_eq!(drawable.start(&mut scheduler), Invalidate::Yes);
        assert!(drawable.is_running() && drawable.is_spinning());

        scheduler.advance(FRAME_INTERVAL);
        assert!(scheduler.take_due());
        assert_eq!(drawable.tick(&mut scheduler), Invalidate::Yes);
        assert_eq!(drawable.progress(), 45);
        assert_eq!(bar_arc(&drawable), (-45.0, 20.0));

        drawable.stop(&mut scheduler);
        assert!(!drawable.is_running());
        assert_eq!(bar_arc(&drawable), (-90.0, 45.0));
        assert_eq!(drawable.tick(&mut scheduler), Invalidate::No);
        assert_eq!(drawable.progress(), 45);
    }

    #[test]
    fn test_alpha_and_filter_apply_to_all_paints() {
        let mut drawable = drawable();
        let filter = ColorFilter::Modulate(Argb::WHITE);
        let _ = drawable.set_alpha(0x80) | drawable.set_color_filter(Some(filter));

        let paints = *drawable.paints();
        for paint in [paints.bar, paints.rim, paints.circle, paints.contour, paints.text] {
            assert_eq!(paint.alpha, Some(0x80));
            assert_eq!(paint.color_filter, Some(filter));
        }

        // Survives a bounds change
        let _ = drawable.set_bounds(100, 100);
        assert_eq!(drawable.paints().bar.alpha, Some(0x80));
        assert_eq!(drawable.alpha(), Some(0x80));
    }

    #[test]
    fn test_opacity_is_transparent() {
        assert_eq!(drawable().opacity(), Opacity::Transparent);
    }

    #[test]
    fn test_draw_before_bounds_uses_empty_layout() {
        let drawable = ProgressWheelDrawable::default();
        let mut surface = RecordingSurface::default();
        drawable.draw(&mut surface);

        assert!(matches!(surface.ops[4], DrawOp::Circle { radius, .. } if radius == 80.0));
    }

    #[test]
    fn test_invalidate_combines() {
        assert_eq!(Invalidate::No | Invalidate::No, Invalidate::No);
        assert_eq!(Invalidate::No | Invalidate::Yes, Invalidate::Yes);
        assert!(Invalidate::Yes.is_requested());
    }
}
