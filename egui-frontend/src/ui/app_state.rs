//! # App State Module
//!
//! This module defines the state of the progress wheel demo and its
//! initialization logic.
//!
//! ## Key Types:
//! - `DemoWheel` - A titled wheel shown in its own card
//! - `ProgressWheelDemoApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Build the showcased wheels, restoring persisted text
//!
//! ## State Management:
//! Controls in the top panel edit `text_input`, `bar_color`, `alpha` and
//! `tint`; `apply_controls()` pushes them into every wheel so they all stay
//! in sync.

use anyhow::Result;
use eframe::egui;
use log::info;
use progress_wheel_shared::{ColorFilter, StyleBuilder, StyleConfig, TextLayout};

use crate::ui::components::progress_wheel::{from_color32, to_color32, ProgressWheelView, StyleAttributes};
use crate::ui::components::theme::{WheelPalette, CURRENT_THEME};

/// Storage key for the text shared by all wheels
pub const TEXT_STORAGE_KEY: &str = "progress_wheel_text";

const DEFAULT_TEXT: &str = "Loading";

/// A wheel plus the title of the card it is drawn in
pub struct DemoWheel {
    pub title: &'static str,
    pub view: ProgressWheelView,
}

/// Main application struct for the egui progress wheel demo
pub struct ProgressWheelDemoApp {
    pub wheels: Vec<DemoWheel>,

    // Control state
    pub text_input: String,
    pub bar_color: egui::Color32,
    pub alpha: u8,
    pub tint: bool,
}

fn palette_style(palette: &WheelPalette) -> StyleBuilder {
    StyleConfig::builder()
        .bar_color(palette.bar)
        .rim_color(palette.rim)
        .circle_color(palette.circle)
        .contour_color(palette.contour)
        .text_color(palette.text)
}

impl ProgressWheelDemoApp {
    /// Build the demo wheels. `attributes` styles the first wheel when given.
    pub fn new(cc: &eframe::CreationContext<'_>, attributes: Option<StyleAttributes>) -> Result<Self> {
        let ctx = &cc.egui_ctx;

        let primary = match &attributes {
            Some(attributes) => ProgressWheelView::from_attributes(ctx, attributes)?,
            None => ProgressWheelView::new(ctx, palette_style(&CURRENT_THEME.wheels.indigo).build()),
        };

        // Saved text wins over the attribute file's text
        let text_input = cc
            .storage
            .and_then(|storage| eframe::get_value::<String>(storage, TEXT_STORAGE_KEY))
            .or_else(|| (!primary.text().is_empty()).then(|| primary.text().replace('\n', "\\n")))
            .unwrap_or_else(|| DEFAULT_TEXT.to_string());
        info!("Initial wheel text: {:?}", text_input);

        let mut wheels = vec![
            DemoWheel {
                title: if attributes.is_some() { "From attributes" } else { "Spinner" },
                view: primary,
            },
            DemoWheel {
                title: "Thick bar",
                view: ProgressWheelView::new(
                    ctx,
                    palette_style(&CURRENT_THEME.wheels.pink)
                        .bar_width(32)
                        .rim_width(32)
                        .bar_length(90)
                        .spin_speed(4)
                        .build(),
                ),
            },
            DemoWheel {
                title: "Overlapping lines",
                view: ProgressWheelView::new(
                    ctx,
                    palette_style(&CURRENT_THEME.wheels.teal).contour_size(2.0).build(),
                ),
            },
            DemoWheel {
                title: "Stacked lines",
                view: ProgressWheelView::new(
                    ctx,
                    palette_style(&CURRENT_THEME.wheels.teal)
                        .contour_size(2.0)
                        .text_layout(TextLayout::Stacked)
                        .build(),
                ),
            },
        ];

        let bar_color = wheels
            .first()
            .map(|wheel| to_color32(wheel.view.bar_color()))
            .unwrap_or(egui::Color32::BLACK);

        for wheel in &mut wheels {
            wheel.view.start();
        }

        let mut app = Self {
            wheels,
            text_input,
            bar_color,
            alpha: u8::MAX,
            tint: false,
        };
        app.apply_text();
        Ok(app)
    }

    /// Push the text field into every wheel
    pub fn apply_text(&mut self) {
        // Escaped newlines let a single-line field produce multi-line text
        let text = self.text_input.replace("\\n", "\n");
        for wheel in &mut self.wheels {
            wheel.view.set_text(text.clone());
        }
    }

    /// Push the color, alpha and tint controls into every wheel
    pub fn apply_controls(&mut self) {
        let bar_color = from_color32(self.bar_color);
        let filter = self
            .tint
            .then(|| ColorFilter::Tint(CURRENT_THEME.wheels.pink.bar));

        for wheel in &mut self.wheels {
            wheel.view.set_bar_color(bar_color);
            wheel.view.set_alpha(self.alpha);
            wheel.view.set_color_filter(filter);
        }
    }

    pub fn start_all(&mut self) {
        for wheel in &mut self.wheels {
            wheel.view.start();
        }
    }

    pub fn stop_all(&mut self) {
        for wheel in &mut self.wheels {
            wheel.view.stop();
        }
    }
}
