//! Top bar showing the current route, acting user, and API endpoint.

use super::super::*;
use eframe::egui::{self, RichText};

impl ArticlePadApp {
    pub(crate) fn render_top_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("ArticlePad").strong().color(COLOR_ACCENT));
                ui.separator();
                ui.label(
                    RichText::new(self.route.path())
                        .small()
                        .monospace()
                        .color(COLOR_TEXT_MUTED),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("API: {}", self.api_base_url))
                            .small()
                            .color(COLOR_TEXT_MUTED),
                    );
                    ui.separator();
                    ui.label(
                        RichText::new(format!("User: {}", self.identity))
                            .small()
                            .color(COLOR_TEXT_LABEL),
                    );
                });
            });
        });
    }
}
