//! Dismissible toast notifications for operation outcomes.

use super::super::*;
use eframe::egui::{self, RichText};

impl ArticlePadApp {
    /// Renders toasts in the top-right overlay, newest first.
    pub(crate) fn render_toasts(&mut self, ctx: &egui::Context) {
        if self.toasts.is_empty() {
            return;
        }

        let mut dismissed = None;
        egui::Area::new(egui::Id::new("toast_area"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 48.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.set_max_width(360.0);
                for toast in self.toasts.iter().rev() {
                    let accent = match toast.kind {
                        ToastKind::Success => COLOR_SUCCESS,
                        ToastKind::Error => COLOR_DESTRUCTIVE,
                    };
                    egui::Frame::popup(ui.style())
                        .fill(COLOR_BG_CARD)
                        .stroke(egui::Stroke::new(1.0, accent))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    ui.label(RichText::new(&toast.title).strong().color(accent));
                                    ui.label(RichText::new(&toast.description).small());
                                });
                                if ui.small_button("✕").clicked() {
                                    dismissed = Some(toast.id);
                                }
                            });
                        });
                }
            });

        if let Some(id) = dismissed {
            self.dismiss_toast(id);
        }
    }
}
