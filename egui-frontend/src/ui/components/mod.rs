//! # UI Components Module
//!
//! This module organizes the UI components of the progress wheel demo.
//!
//! ## Module Organization:
//! - `progress_wheel` - The progress wheel widget, its egui surface and scheduler
//! - `styling` - Global egui styling and card containers
//! - `theme` - Colors and wheel palettes

pub mod progress_wheel;
pub mod styling;
pub mod theme;
