//! # Progress Wheel Module
//!
//! egui host for the circular progress wheel from `progress-wheel-shared`.
//!
//! ## Key Components:
//! - `view.rs` - `ProgressWheelView`, the widget owning a drawable
//! - `surface.rs` - `Surface` implementation over an egui painter
//! - `scheduler.rs` - Frame scheduler backed by egui's repaint requests
//! - `attributes.rs` - Style attribute sets loaded from YAML or JSON
//!
//! ## Purpose:
//! The core crate knows nothing about egui. This module supplies the drawing
//! surface, the clock and the repaint sink it needs, and wraps it all in a
//! widget that can be added with `ui.add(&mut view)`.

pub mod attributes;
pub mod scheduler;
pub mod surface;
pub mod view;

// Re-export main components
pub use attributes::{load_attributes_file, StyleAttributes};
pub use surface::{from_color32, to_color32};
pub use view::ProgressWheelView;
