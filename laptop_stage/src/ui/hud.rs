//! HUD overlay: focus mode, camera position, transition status, FPS.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::camera::{CameraMotion, CameraTarget, OrbitControls, ShowcaseCamera};
use crate::focus::{FocusMode, FocusState};
use crate::schedule::{configure_showcase_sets, ShowcaseSet};
use crate::ui::{apply_overlay_style, ensure_egui, overlay_frame};

pub fn hud_plugin(app: &mut App) {
    configure_showcase_sets(app);
    ensure_egui(app);
    if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
        app.add_plugins(FrameTimeDiagnosticsPlugin);
    }
    app.add_systems(Update, hud_overlay_system.in_set(ShowcaseSet::Presentation));
}

fn hud_overlay_system(
    mut contexts: EguiContexts,
    focus: Res<FocusState>,
    motion: Res<CameraMotion>,
    target: Res<CameraTarget>,
    orbit: Option<Res<OrbitControls>>,
    camera: Query<&Transform, With<ShowcaseCamera>>,
    diagnostics: Res<DiagnosticsStore>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
        .unwrap_or(0.0);
    let position = camera
        .get_single()
        .map(|tf| tf.translation)
        .unwrap_or(motion.spring().position());

    egui::Window::new("Showcase")
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(overlay_frame())
        .show(contexts.ctx_mut(), |ui| {
            apply_overlay_style(ui);

            ui.label(
                egui::RichText::new(mode_label(focus.mode()))
                    .size(16.0)
                    .color(egui::Color32::from_rgb(100, 220, 180)),
            );
            ui.add_space(4.0);

            ui.label(format!("Camera  {}", format_vec(position)));
            ui.label(format!("Target  {}", format_vec(target.position)));
            ui.label(format!("Aim     {}", format_vec(target.look_at)));
            ui.add_space(4.0);

            let status = if motion.is_settled() { "at rest" } else { "moving" };
            ui.label(format!("Camera is {status}"));
            if let Some(orbit) = orbit {
                let state = if orbit.is_enabled() { "on" } else { "off" };
                ui.label(format!("Orbit {state}"));
            }

            ui.separator();
            ui.label(format!("FPS  {fps:.0}"));
        });
}

fn mode_label(mode: &FocusMode) -> String {
    match mode {
        FocusMode::Panoramic => "Panorama".to_string(),
        FocusMode::Focused(id) => format!("Focused on {id}"),
    }
}

fn format_vec(v: Vec3) -> String {
    format!("{:>6.2} {:>6.2} {:>6.2}", v.x, v.y, v.z)
}
