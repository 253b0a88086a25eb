mod hint;
mod hud;
mod screen_links;

use bevy::prelude::*;
use bevy_egui::{egui, EguiPlugin};

pub use hint::{hint_plugin, HINT_TEXT};
pub use hud::hud_plugin;
pub use screen_links::{is_readable, screen_links_plugin, ScreenContent};

pub(crate) fn ensure_egui(app: &mut App) {
    if !app.is_plugin_added::<EguiPlugin>() {
        app.add_plugins(EguiPlugin);
    }
}

fn overlay_frame() -> egui::Frame {
    egui::Frame::default()
        .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 210))
        .inner_margin(egui::Margin::same(12))
        .corner_radius(egui::CornerRadius::same(6))
}

fn apply_overlay_style(ui: &mut egui::Ui) {
    ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
    ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(200, 220, 240));
}
