//! Free orbit controls for the panoramic view: left drag rotates around the
//! panorama look-at point, scroll zooms. Disabled while a laptop is focused
//! or the camera is still flying.

use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::transition::CameraMotion;
use crate::camera::ShowcaseCamera;
use crate::catalog::Catalog;
use crate::focus::FocusState;
use crate::schedule::{configure_showcase_sets, ShowcaseSet};

const MIN_POLAR: f32 = 1e-3;
const PIXELS_PER_LINE: f32 = 100.0;
const FALLBACK_VIEWPORT_HEIGHT: f32 = 720.0;

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitSettings {
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub max_polar_angle: f32,
    pub rotate_speed: f32,
    /// Radius multiplier per scroll line.
    pub zoom_step: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            damping_factor: 0.05,
            min_distance: 5.0,
            max_distance: 20.0,
            max_polar_angle: FRAC_PI_2,
            rotate_speed: 1.0,
            zoom_step: 0.95,
        }
    }
}

/// Spherical camera placement around a pivot, with damped pending rotation.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitState {
    pub pivot: Vec3,
    azimuth: f32,
    polar: f32,
    radius: f32,
    pending_azimuth: f32,
    pending_polar: f32,
}

impl OrbitState {
    pub fn from_position(position: Vec3, pivot: Vec3, settings: &OrbitSettings) -> Self {
        let offset = position - pivot;
        let radius = offset.length();
        let (azimuth, polar) = if radius > f32::EPSILON {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, FRAC_PI_2)
        };
        Self {
            pivot,
            azimuth,
            polar: polar.clamp(MIN_POLAR, settings.max_polar_angle),
            radius: radius.clamp(settings.min_distance, settings.max_distance),
            pending_azimuth: 0.0,
            pending_polar: 0.0,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Queues a drag of `delta` pixels; a full viewport height is one turn.
    pub fn rotate(&mut self, delta: Vec2, viewport_height: f32, settings: &OrbitSettings) {
        let scale = TAU * settings.rotate_speed / viewport_height.max(1.0);
        self.pending_azimuth -= delta.x * scale;
        self.pending_polar -= delta.y * scale;
    }

    /// Positive lines zoom in.
    pub fn zoom(&mut self, lines: f32, settings: &OrbitSettings) {
        let factor = settings.zoom_step.powf(lines);
        self.radius = (self.radius * factor).clamp(settings.min_distance, settings.max_distance);
    }

    /// Applies a damped share of the pending rotation. Returns whether
    /// anything is still in motion.
    pub fn update(&mut self, settings: &OrbitSettings) -> bool {
        let f = settings.damping_factor;
        self.azimuth += self.pending_azimuth * f;
        self.polar =
            (self.polar + self.pending_polar * f).clamp(MIN_POLAR, settings.max_polar_angle);
        self.pending_azimuth *= 1.0 - f;
        self.pending_polar *= 1.0 - f;
        if self.pending_azimuth.abs() < 1e-5 {
            self.pending_azimuth = 0.0;
        }
        if self.pending_polar.abs() < 1e-5 {
            self.pending_polar = 0.0;
        }
        self.pending_azimuth != 0.0 || self.pending_polar != 0.0
    }

    pub fn position(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.pivot + self.radius * Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a)
    }
}

#[derive(Resource, Debug, Default)]
pub struct OrbitControls {
    pub settings: OrbitSettings,
    state: Option<OrbitState>,
}

impl OrbitControls {
    pub fn is_enabled(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&OrbitState> {
        self.state.as_ref()
    }
}

pub fn orbit_camera_plugin(app: &mut App) {
    configure_showcase_sets(app);
    app.init_resource::<OrbitControls>().add_systems(
        Update,
        (gate_orbit_controls, orbit_camera_system)
            .chain()
            .in_set(ShowcaseSet::Orbit),
    );
}

/// Orbit is live only in panoramic mode once the camera has come to rest.
fn gate_orbit_controls(
    focus: Res<FocusState>,
    motion: Res<CameraMotion>,
    catalog: Res<Catalog>,
    mut controls: ResMut<OrbitControls>,
    camera: Query<&Transform, With<ShowcaseCamera>>,
) {
    let should_enable = focus.is_panoramic() && motion.is_settled();
    match (should_enable, controls.is_enabled()) {
        (true, false) => {
            let Ok(tf) = camera.get_single() else {
                return;
            };
            let pivot = catalog.panorama().look_at;
            let state = OrbitState::from_position(tf.translation, pivot, &controls.settings);
            controls.state = Some(state);
            debug!("orbit: enabled");
        }
        (false, true) => {
            controls.state = None;
            debug!("orbit: disabled");
        }
        _ => {}
    }
}

fn orbit_camera_system(
    mouse: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut controls: ResMut<OrbitControls>,
    mut camera: Query<&mut Transform, With<ShowcaseCamera>>,
) {
    let OrbitControls { settings, state } = &mut *controls;
    let Some(state) = state.as_mut() else {
        return;
    };

    let mut changed = false;
    if mouse.pressed(MouseButton::Left) && motion.delta != Vec2::ZERO {
        let height = windows
            .get_single()
            .map(|w| w.height())
            .unwrap_or(FALLBACK_VIEWPORT_HEIGHT);
        state.rotate(motion.delta, height, settings);
    }
    let lines = match scroll.unit {
        MouseScrollUnit::Line => scroll.delta.y,
        MouseScrollUnit::Pixel => scroll.delta.y / PIXELS_PER_LINE,
    };
    if lines != 0.0 {
        state.zoom(lines, settings);
        changed = true;
    }
    changed |= state.update(settings);
    if !changed {
        return;
    }

    let Ok(mut tf) = camera.get_single_mut() else {
        return;
    };
    tf.translation = state.position();
    tf.look_at(state.pivot, Vec3::Y);
}
