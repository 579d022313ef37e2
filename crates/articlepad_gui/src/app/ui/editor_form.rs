//! Editor form for one article's title, entities, and content.

use super::super::state_ops::{EditorView, ImageBlock};
use super::super::*;
use super::image_panel::render_image_block;
use articlepad_core::models::article::EditableField;
use eframe::egui::{self, RichText};
use tracing::trace;

/// User intents collected while rendering, applied once the frame's
/// widgets are laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EditorAction {
    Save,
    Cancel,
    ImageFailed,
    RetryImage { source: String },
}

/// Binds the text edit straight to the draft field so large bodies are
/// never copied per frame.
fn field_input(ui: &mut egui::Ui, field: EditableField, value: &mut String) {
    ui.label(RichText::new(field.label()).small().color(COLOR_TEXT_LABEL));
    let editor = match field {
        EditableField::Content => egui::TextEdit::multiline(value).desired_rows(14),
        EditableField::Title | EditableField::Entities => egui::TextEdit::singleline(value),
    };
    if ui
        .add(editor.desired_width(f32::INFINITY).id_salt(field.label()))
        .changed()
    {
        trace!("edited {}", field.label());
    }
    ui.add_space(8.0);
}

impl ArticlePadApp {
    /// Renders the editor route: a loading placeholder until the draft
    /// arrives, then the form.
    pub(crate) fn render_editor(&mut self, ui: &mut egui::Ui) {
        let (image, save_enabled) = match self.editor_view() {
            EditorView::Loading => {
                ui.centered_and_justified(|ui| {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading...");
                    });
                });
                return;
            }
            EditorView::Form(form) => (form.image, form.save_enabled),
        };

        let mut actions = Vec::new();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(CARD_MAX_WIDTH);
                    egui::Frame::group(ui.style())
                        .fill(COLOR_BG_CARD)
                        .corner_radius(egui::CornerRadius::same(8))
                        .inner_margin(egui::Margin::same(24))
                        .show(ui, |ui| {
                            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                                self.render_form(ui, image.as_ref(), save_enabled, &mut actions);
                            });
                        });
                });
            });

        let ctx = ui.ctx().clone();
        for action in actions {
            self.apply_editor_action(&ctx, action);
        }
    }

    fn render_form(
        &mut self,
        ui: &mut egui::Ui,
        image: Option<&ImageBlock>,
        save_enabled: bool,
        actions: &mut Vec<EditorAction>,
    ) {
        ui.heading(RichText::new("Edit Article").strong().color(COLOR_ACCENT));
        ui.add_space(12.0);
        for field in EditableField::ALL {
            if let Some(value) = self.draft_field_mut(field) {
                field_input(ui, field, value);
            }
        }
        if let Some(block) = image {
            render_image_block(ui, block, actions);
        }
        ui.add_space(12.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let save = egui::Button::new(RichText::new("Save Changes").color(egui::Color32::WHITE))
                .fill(COLOR_ACCENT);
            if ui.add_enabled(save_enabled, save).clicked() {
                actions.push(EditorAction::Save);
            }
            if ui.button("Cancel").clicked() {
                actions.push(EditorAction::Cancel);
            }
        });
    }

    pub(crate) fn apply_editor_action(&mut self, ctx: &egui::Context, action: EditorAction) {
        match action {
            EditorAction::Save => self.save_changes(),
            EditorAction::Cancel => self.cancel(),
            EditorAction::ImageFailed => {
                self.image_failed();
                ctx.request_repaint();
            }
            EditorAction::RetryImage { source } => {
                // Drop the cached failure so the loader fetches again.
                ctx.forget_image(&source);
                self.retry_image();
            }
        }
    }
}
