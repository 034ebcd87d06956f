use eframe::egui;
use log::{error, info, warn};
use std::path::PathBuf;

mod app;
mod ui;

use app::ProgressWheelDemoApp;
use ui::components::progress_wheel::load_attributes_file;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging; set RUST_LOG=debug to follow layout and animation
    env_logger::init();
    info!("Starting progress wheel demo");

    // Optional YAML or JSON attribute file styling the first wheel
    let attributes = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => match load_attributes_file(&path) {
            Ok(attributes) => {
                info!("Using style attributes from {}", path.display());
                Some(attributes)
            }
            Err(e) => {
                warn!("Ignoring style attributes: {:#}", e);
                None
            }
        },
        None => None,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title("Progress Wheel")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Progress Wheel",
        options,
        Box::new(move |cc| {
            if cc.storage.is_some() {
                info!("Persistence storage available");
            }

            match ProgressWheelDemoApp::new(cc, attributes) {
                Ok(app) => {
                    info!("Successfully initialized progress wheel demo");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
