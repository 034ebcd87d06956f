//! # Wheel Geometry
//!
//! Maps the drawable's pixel bounds and stroke widths onto the concentric
//! rectangles the renderer strokes and fills.
//!
//! The wheel is always laid out as a square centered in the region: the longer
//! axis is padded by half the difference on each side (integer division, so an
//! odd difference leaves the square one pixel wider or taller). No clamping is
//! done, so regions smaller than the strokes produce inverted rectangles.

use serde::{Deserialize, Serialize};

/// Floating point rectangle in drawable-local coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }

    /// Shrink every side by `amount` (negative grows)
    pub fn inset(&self, amount: f32) -> Self {
        Self::new(
            self.left + amount,
            self.top + amount,
            self.right - amount,
            self.bottom - amount,
        )
    }

    pub fn outset(&self, amount: f32) -> Self {
        self.inset(-amount)
    }

    pub fn contains_rect(&self, other: &RectF) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    pub fn is_inverted(&self) -> bool {
        self.right < self.left || self.bottom < self.top
    }
}

/// Padding applied on each side to center the square wheel in its region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Derived layout for one set of bounds
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WheelLayout {
    pub width: i32,
    pub height: i32,
    pub padding: Padding,
    /// Region inset by padding
    pub outer_bounds: RectF,
    /// Outer bounds inset by the bar width; the rim and bar are stroked on it
    pub circle_bounds: RectF,
    pub inner_contour: RectF,
    pub outer_contour: RectF,
    pub full_radius: i32,
    /// Radius of the inner filled circle
    pub circle_radius: i32,
}

impl WheelLayout {
    pub fn compute(width: i32, height: i32, bar_width: i32, rim_width: i32, contour_size: f32) -> Self {
        let min_side = width.min(height);
        let x_offset = width - min_side;
        let y_offset = height - min_side;

        let padding = Padding {
            left: x_offset / 2,
            top: y_offset / 2,
            right: x_offset / 2,
            bottom: y_offset / 2,
        };

        let outer_bounds = RectF::new(
            padding.left as f32,
            padding.top as f32,
            (width - padding.right) as f32,
            (height - padding.bottom) as f32,
        );
        let circle_bounds = outer_bounds.inset(bar_width as f32);

        // Contours hug the rim: half the rim stroke plus half their own stroke
        let contour_offset = rim_width as f32 / 2.0 + contour_size / 2.0;
        let inner_contour = circle_bounds.inset(contour_offset);
        let outer_contour = circle_bounds.outset(contour_offset);

        let full_radius = (width - padding.right - bar_width) / 2;
        let circle_radius = full_radius - bar_width + 1;

        Self {
            width,
            height,
            padding,
            outer_bounds,
            circle_bounds,
            inner_contour,
            outer_contour,
            full_radius,
            circle_radius,
        }
    }

    pub fn region(&self) -> RectF {
        RectF::new(0.0, 0.0, self.width as f32, self.height as f32)
    }
}
