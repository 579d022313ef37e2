//! Article image with a retryable failure placeholder.

use super::super::state_ops::ImageBlock;
use super::super::*;
use super::editor_form::EditorAction;
use eframe::egui::{self, load::TexturePoll, RichText};
use tracing::debug;

pub(super) fn render_image_block(
    ui: &mut egui::Ui,
    block: &ImageBlock,
    actions: &mut Vec<EditorAction>,
) {
    ui.add_space(8.0);
    ui.label(RichText::new("Image").size(18.0).strong());
    let size = egui::vec2(ui.available_width(), IMAGE_BLOCK_HEIGHT);

    egui::Frame::new()
        .fill(COLOR_BG_PLACEHOLDER)
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_size(size);
            match block.display {
                ImageDisplay::Showing => {
                    let image = egui::Image::new(block.source.as_str())
                        .fit_to_exact_size(size)
                        .alt_text("Article image");
                    match image.load_for_size(ui.ctx(), size) {
                        Ok(TexturePoll::Ready { .. }) => {
                            ui.add(image);
                        }
                        Ok(TexturePoll::Pending { .. }) => {
                            ui.centered_and_justified(|ui| {
                                ui.spinner();
                            });
                        }
                        Err(err) => {
                            debug!("image {} failed: {}", block.source, err);
                            actions.push(EditorAction::ImageFailed);
                        }
                    }
                }
                ImageDisplay::Errored => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(size.y * 0.25);
                        ui.label(RichText::new("⚠").size(40.0).color(COLOR_ICON_MUTED));
                        ui.label(
                            RichText::new("Image failed to load")
                                .small()
                                .color(COLOR_TEXT_MUTED),
                        );
                        if ui.small_button("Retry").clicked() {
                            actions.push(EditorAction::RetryImage {
                                source: block.source.clone(),
                            });
                        }
                    });
                }
            }
        });

    ui.add_space(4.0);
    ui.label(RichText::new(&block.caption).small().color(COLOR_TEXT_MUTED));
}
