//! Interaction router: pointer clicks on laptops focus them, clicks on the
//! ground return to the panorama, Escape also returns.

mod gesture;
mod picking;
mod router;

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::render::primitives::Aabb;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::camera::ShowcaseCamera;
use crate::focus::FocusRequest;
use crate::scene::{Ground, Laptop, LaptopPart};
use crate::schedule::{configure_showcase_sets, ShowcaseSet};
use crate::ui::ensure_egui;

pub use gesture::{PointerGesture, CLICK_SLOP_PX};
pub use picking::{ray_obb_distance, ray_plane_distance};
pub use router::{
    dispatch_click, on_object_clicked, on_background_clicked, Hit, HitTarget, PointerEvent,
};

/// A completed left click at a window position, in logical pixels.
#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub struct PointerClick {
    pub position: Vec2,
}

/// Whether the pointer is over an egui area this frame.
#[derive(Resource, Debug, Default)]
pub struct PointerOverUi(pub bool);

pub fn interaction_plugin(app: &mut App) {
    ensure_egui(app);
    pointer_plugin(app);
    app.add_systems(
        Update,
        track_ui_pointer
            .in_set(ShowcaseSet::Input)
            .before(pointer_gesture_system),
    );
}

/// Click detection and routing without the egui hookup.
fn pointer_plugin(app: &mut App) {
    configure_showcase_sets(app);
    app.init_resource::<PointerOverUi>()
        .add_event::<PointerClick>()
        .add_systems(
            Update,
            (
                (pointer_gesture_system, pick_click_system).chain(),
                escape_unfocus_system,
            )
                .in_set(ShowcaseSet::Input),
        );
}

fn track_ui_pointer(mut contexts: EguiContexts, mut over_ui: ResMut<PointerOverUi>) {
    over_ui.0 = contexts.ctx_mut().is_pointer_over_area();
}

/// Turns left-button presses and releases into clicks. A press and release
/// landing in the same frame still counts.
fn pointer_gesture_system(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    over_ui: Res<PointerOverUi>,
    mut gesture: Local<PointerGesture>,
    mut clicks: EventWriter<PointerClick>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        gesture.cancel();
        return;
    };

    if mouse.just_pressed(MouseButton::Left) {
        if over_ui.0 {
            gesture.cancel();
        } else {
            gesture.press(cursor);
        }
    } else if mouse.pressed(MouseButton::Left) {
        gesture.track(cursor);
    }

    if mouse.just_released(MouseButton::Left) && gesture.release(cursor) {
        clicks.send(PointerClick { position: cursor });
    }
}

/// Everything a click can land on. Parts without an `Aabb` are not pickable.
#[derive(SystemParam)]
pub struct PickTargets<'w, 's> {
    parts: Query<'w, 's, (&'static LaptopPart, &'static GlobalTransform, &'static Aabb)>,
    laptops: Query<'w, 's, &'static Laptop>,
    ground: Query<'w, 's, (&'static Ground, &'static GlobalTransform)>,
}

impl PickTargets<'_, '_> {
    /// Surfaces crossed by the ray from `origin` along unit `dir`.
    pub fn hits(&self, origin: Vec3, dir: Vec3) -> Vec<Hit> {
        let mut hits = Vec::new();
        for (part, transform, aabb) in &self.parts {
            let Ok(laptop) = self.laptops.get(part.laptop) else {
                continue;
            };
            if let Some(distance) = ray_obb_distance(origin, dir, transform, aabb) {
                hits.push(Hit::object(laptop.id.clone(), distance));
            }
        }
        for (ground, transform) in &self.ground {
            if let Some(distance) = ray_plane_distance(origin, dir, transform, ground.half_size) {
                hits.push(Hit::background(distance));
            }
        }
        hits
    }
}

fn pick_click_system(
    mut clicks: EventReader<PointerClick>,
    cameras: Query<(&Camera, &GlobalTransform), With<ShowcaseCamera>>,
    targets: PickTargets,
    mut requests: EventWriter<FocusRequest>,
) {
    for click in clicks.read() {
        let Ok((camera, cam_transform)) = cameras.get_single() else {
            return;
        };
        let Ok(ray) = camera.viewport_to_world(cam_transform, click.position) else {
            continue;
        };
        let hits = targets.hits(ray.origin, *ray.direction);
        debug!("pick: {} hit(s) at {}", hits.len(), click.position);
        requests.send_batch(dispatch_click(hits));
    }
}

fn escape_unfocus_system(keys: Res<ButtonInput<KeyCode>>, mut requests: EventWriter<FocusRequest>) {
    if keys.just_pressed(KeyCode::Escape) {
        requests.send(FocusRequest::Unfocus);
    }
}
