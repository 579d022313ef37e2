//! Theme constants and one-time style application for the egui app.

use super::ArticlePadApp;
use eframe::egui::{
    self, style::WidgetVisuals, Color32, CornerRadius, FontFamily, FontId, Margin, Stroke,
    TextStyle, Visuals,
};

pub(super) const COLOR_BG_PAGE: Color32 = Color32::from_rgb(0xf3, 0xf4, 0xf6);
pub(super) const COLOR_BG_CARD: Color32 = Color32::from_rgb(0xff, 0xff, 0xff);
pub(super) const COLOR_BG_PLACEHOLDER: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb);
pub(super) const COLOR_TEXT_PRIMARY: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);
pub(super) const COLOR_TEXT_LABEL: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);
pub(super) const COLOR_TEXT_MUTED: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80);
pub(super) const COLOR_ICON_MUTED: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf);
pub(super) const COLOR_ACCENT: Color32 = Color32::from_rgb(0x25, 0x63, 0xeb);
pub(super) const COLOR_ACCENT_HOVER: Color32 = Color32::from_rgb(0x7c, 0x3a, 0xed);
pub(super) const COLOR_BORDER: Color32 = Color32::from_rgb(0xd1, 0xd5, 0xdb);
pub(super) const COLOR_SUCCESS: Color32 = Color32::from_rgb(0x16, 0xa3, 0x4a);
pub(super) const COLOR_DESTRUCTIVE: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26);
pub(super) const CARD_MAX_WIDTH: f32 = 896.0;
pub(super) const IMAGE_BLOCK_HEIGHT: f32 = 256.0;

fn widget(bg: Color32, stroke: Color32, fg: Color32, expansion: f32) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill: bg,
        weak_bg_fill: bg,
        bg_stroke: Stroke::new(1.0, stroke),
        corner_radius: CornerRadius::same(6),
        fg_stroke: Stroke::new(1.0, fg),
        expansion,
    }
}

impl ArticlePadApp {
    pub(super) fn ensure_style(&mut self, ctx: &egui::Context) {
        if self.style_applied {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = Visuals::light();
        style.visuals.override_text_color = Some(COLOR_TEXT_PRIMARY);
        style.visuals.window_fill = COLOR_BG_CARD;
        style.visuals.panel_fill = COLOR_BG_PAGE;
        style.visuals.extreme_bg_color = COLOR_BG_CARD;
        style.visuals.window_stroke = Stroke::new(1.0, COLOR_BORDER);
        style.visuals.hyperlink_color = COLOR_ACCENT;
        style.visuals.text_edit_bg_color = Some(COLOR_BG_CARD);

        style.visuals.widgets.noninteractive =
            widget(COLOR_BG_CARD, COLOR_BORDER, COLOR_TEXT_LABEL, 0.0);
        style.visuals.widgets.inactive =
            widget(COLOR_BG_CARD, COLOR_BORDER, COLOR_TEXT_PRIMARY, 0.0);
        style.visuals.widgets.hovered =
            widget(COLOR_ACCENT_HOVER, COLOR_ACCENT_HOVER, Color32::WHITE, 0.5);
        style.visuals.widgets.active = widget(COLOR_ACCENT, COLOR_ACCENT, Color32::WHITE, 0.5);
        style.visuals.widgets.open = widget(COLOR_ACCENT, COLOR_ACCENT, Color32::WHITE, 0.0);

        style.spacing.window_margin = Margin::same(12);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        style.spacing.item_spacing = egui::vec2(12.0, 8.0);
        style.spacing.interact_size.y = 34.0;

        style.text_styles.insert(
            TextStyle::Heading,
            FontId::new(24.0, FontFamily::Proportional),
        );
        style
            .text_styles
            .insert(TextStyle::Body, FontId::new(16.0, FontFamily::Proportional));
        style.text_styles.insert(
            TextStyle::Button,
            FontId::new(15.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Small,
            FontId::new(13.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
        self.style_applied = true;
    }
}
