use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::schedule::{configure_showcase_sets, ShowcaseSet};
use crate::ui::ensure_egui;

pub const HINT_TEXT: &str =
    "Click a laptop to focus • Click the background to return to the panorama";

pub fn hint_plugin(app: &mut App) {
    configure_showcase_sets(app);
    ensure_egui(app);
    app.add_systems(Update, hint_overlay_system.in_set(ShowcaseSet::Presentation));
}

fn hint_overlay_system(mut contexts: EguiContexts) {
    egui::Area::new(egui::Id::new("hint"))
        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -24.0])
        .interactable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.label(
                egui::RichText::new(HINT_TEXT)
                    .size(14.0)
                    .color(egui::Color32::from_rgba_premultiplied(200, 200, 200, 180)),
            );
        });
}
