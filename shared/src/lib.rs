//! # Progress Wheel Core
//!
//! Host-agnostic pieces of a circular progress indicator: a rim, an optional
//! spinning bar, an inner filled circle, contour rings and centered text.
//!
//! ## Key Components:
//! - `style` - Style properties and the builder holding their defaults
//! - `geometry` - Concentric rectangles derived from the pixel bounds
//! - `paint` - The five paint descriptors derived from the style
//! - `animation` - Fixed-interval tick driven through an injected scheduler
//! - `render` - Frame rendering onto a host `Surface`
//! - `drawable` - `ProgressWheelDrawable`, the object a host widget owns
//!
//! ## Usage:
//! ```rust
//! use progress_wheel_shared::{ProgressWheelDrawable, StyleConfig};
//!
//! let mut wheel = ProgressWheelDrawable::new(StyleConfig::builder().text("Loading").build());
//! let redraw = wheel.set_bounds(120, 120);
//! assert!(redraw.is_requested());
//! ```

pub mod animation;
pub mod color;
pub mod drawable;
pub mod geometry;
pub mod paint;
pub mod render;
pub mod style;

pub use animation::{AnimationState, Animator, FrameScheduler, FRAME_INTERVAL};
pub use color::{Argb, ColorFilter};
pub use drawable::{Invalidate, Opacity, ProgressWheelDrawable};
pub use geometry::{Padding, RectF, WheelLayout};
pub use paint::{Paint, PaintSet, PaintStyle};
pub use render::{BarArc, FontMetrics, Surface, WheelFrame};
pub use style::{StyleBuilder, StyleConfig, TextLayout};
