use eframe::egui;
use crate::ui::app_state::{ProgressWheelDemoApp, TEXT_STORAGE_KEY};
use crate::ui::components::styling::{draw_card_container, setup_demo_style};
use crate::ui::components::theme::colors;

const CARD_PADDING: f32 = 12.0;
const CARD_ROUNDING: f32 = 12.0;

impl eframe::App for ProgressWheelDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_demo_style(ctx);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.render_header(ui);
            ui.separator();
            self.render_controls(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_wheels(ui);
            });
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, TEXT_STORAGE_KEY, &self.text_input);
    }
}

impl ProgressWheelDemoApp {
    /// Render the header
    fn render_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Progress Wheel")
                .font(egui::FontId::new(26.0, egui::FontFamily::Proportional))
                .strong());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let running = self.wheels.iter().filter(|wheel| wheel.view.is_running()).count();
                ui.label(egui::RichText::new(format!("{} of {} spinning", running, self.wheels.len()))
                    .color(colors::TEXT_SECONDARY));
            });
        });
    }

    /// Render the shared controls
    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Start").clicked() {
                self.start_all();
            }
            if ui.button("Stop").clicked() {
                self.stop_all();
            }

            ui.separator();

            ui.label("Text:");
            let response = ui.add(egui::TextEdit::singleline(&mut self.text_input)
                .hint_text("Use \\n for a new line")
                .desired_width(180.0));
            if response.changed() {
                self.apply_text();
            }
        });

        ui.horizontal(|ui| {
            let mut changed = false;

            ui.label("Bar color:");
            changed |= ui.color_edit_button_srgba(&mut self.bar_color).changed();

            ui.label("Alpha:");
            changed |= ui.add(egui::Slider::new(&mut self.alpha, 0..=255)).changed();

            changed |= ui.checkbox(&mut self.tint, "Tint").changed();

            if changed {
                self.apply_controls();
            }
        });
    }

    /// Render each wheel in its own card, wrapping across the available width
    fn render_wheels(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for wheel in &mut self.wheels {
                let card_size = wheel.view.desired_size()
                    + egui::vec2(CARD_PADDING * 2.0, CARD_PADDING * 2.0 + 24.0);

                ui.allocate_ui(card_size, |ui| {
                    let rect = egui::Rect::from_min_size(ui.cursor().min, card_size);
                    draw_card_container(ui, rect, CARD_ROUNDING);

                    ui.vertical(|ui| {
                        ui.add_space(CARD_PADDING);
                        ui.horizontal(|ui| {
                            ui.add_space(CARD_PADDING);
                            ui.label(egui::RichText::new(wheel.title).strong());
                        });
                        ui.horizontal(|ui| {
                            ui.add_space(CARD_PADDING);
                            let response = ui.add(&mut wheel.view);
                            if response.clicked() {
                                wheel.view.toggle();
                            }
                        });
                    });
                });
            }
        });
    }
}
