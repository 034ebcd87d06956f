//! # Styling Module
//!
//! Global egui styling and the card container used to frame each wheel in
//! the demo.
//!
//! ## Key Functions:
//! - `setup_demo_style()` - Configure global egui styling
//! - `draw_card_container()` - Draw card-style containers with shadows

use eframe::egui;

use super::theme::{colors, CURRENT_THEME};

/// Setup the demo's global egui style
pub fn setup_demo_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.panel_fill = CURRENT_THEME.layout.background;
        style.visuals.override_text_color = Some(colors::TEXT_PRIMARY);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(26.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        // Rounded corners and padding
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.item_spacing = egui::vec2(10.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);

        style
    });
}

/// Draw a card background with a subtle offset shadow
pub fn draw_card_container(ui: &mut egui::Ui, rect: egui::Rect, rounding: f32) {
    let painter = ui.painter();

    let shadow_rect = egui::Rect::from_min_size(rect.min + egui::vec2(2.0, 2.0), rect.size());
    painter.rect_filled(shadow_rect, egui::Rounding::same(rounding), colors::CARD_SHADOW);

    painter.rect_filled(rect, egui::Rounding::same(rounding), colors::CARD_BACKGROUND);
    painter.rect_stroke(
        rect,
        egui::Rounding::same(rounding),
        egui::Stroke::new(1.0, colors::CARD_BORDER),
    );
}
