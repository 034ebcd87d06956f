//! # App Module
//!
//! Entry point for the progress wheel demo application, re-exporting the
//! application type so `main` does not reach into the UI module tree.

pub use crate::ui::app_state::ProgressWheelDemoApp;
