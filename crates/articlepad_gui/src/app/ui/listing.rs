//! Listing of the acting user's articles.

use super::super::*;
use eframe::egui::{self, RichText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeleteAction {
    Request(i64),
    Confirm,
    Dismiss,
}

impl ArticlePadApp {
    pub(crate) fn render_listing(&mut self, ui: &mut egui::Ui) {
        let mut open_id = None;
        let mut refresh = false;
        let mut delete_action = None;

        ui.horizontal(|ui| {
            ui.heading("Generation History");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(!self.listing_in_flight, egui::Button::new("Refresh"))
                    .clicked()
                {
                    refresh = true;
                }
            });
        });
        ui.label(
            RichText::new(format!("Articles by {}", self.identity))
                .small()
                .color(COLOR_TEXT_MUTED),
        );
        ui.separator();

        if !self.listing_loaded {
            if self.listing_in_flight {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading...");
                });
            }
        } else if self.listing.is_empty() {
            ui.label(RichText::new("No articles yet.").color(COLOR_TEXT_MUTED));
        } else {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    egui::Grid::new("history_grid")
                        .num_columns(5)
                        .striped(true)
                        .spacing([16.0, 10.0])
                        .show(ui, |ui| {
                            for header in ["Title", "Entities", "Updated", "", ""] {
                                ui.label(RichText::new(header).small().color(COLOR_TEXT_LABEL));
                            }
                            ui.end_row();

                            for item in &self.listing {
                                let title = if item.title.trim().is_empty() {
                                    "(untitled)"
                                } else {
                                    item.title.as_str()
                                };
                                ui.label(RichText::new(title).strong());
                                ui.label(
                                    RichText::new(item.entity_tags().join(", "))
                                        .small()
                                        .color(COLOR_TEXT_MUTED),
                                );
                                ui.label(RichText::new(item.last_touched_label()).small());
                                if ui.button("Edit").clicked() {
                                    open_id = Some(item.id);
                                }
                                delete_action = self
                                    .render_delete_cell(ui, item.id)
                                    .or(delete_action);
                                ui.end_row();
                            }
                        });
                });
        }

        match delete_action {
            Some(DeleteAction::Request(id)) => self.request_delete(id),
            Some(DeleteAction::Confirm) => self.confirm_delete(),
            Some(DeleteAction::Dismiss) => self.dismiss_delete(),
            None => {}
        }
        if refresh {
            self.refresh_listing();
        }
        if let Some(id) = open_id {
            self.navigate(Route::Editor { id });
        }
    }

    fn render_delete_cell(&self, ui: &mut egui::Ui, id: i64) -> Option<DeleteAction> {
        let mut action = None;
        ui.horizontal(|ui| {
            if self.delete_in_flight == Some(id) {
                ui.spinner();
            } else if self.pending_delete == Some(id) {
                let confirm =
                    egui::Button::new(RichText::new("Confirm").color(egui::Color32::WHITE))
                        .fill(COLOR_DESTRUCTIVE);
                if ui.add(confirm).clicked() {
                    action = Some(DeleteAction::Confirm);
                }
                if ui.small_button("Keep").clicked() {
                    action = Some(DeleteAction::Dismiss);
                }
            } else if ui
                .add_enabled(
                    self.delete_in_flight.is_none(),
                    egui::Button::new(RichText::new("Delete").color(COLOR_DESTRUCTIVE)),
                )
                .clicked()
            {
                action = Some(DeleteAction::Request(id));
            }
        });
        action
    }
}
