//! Camera transition driver: redirects the spring on focus changes, integrates
//! it each frame, then commits position and aim to the camera.

use bevy::prelude::*;

use crate::camera::spring::{Spring3, SpringConfig};
use crate::camera::target::CameraTarget;
use crate::camera::ShowcaseCamera;
use crate::catalog::{CameraPose, Catalog};
use crate::focus::{FocusChanged, FocusState};
use crate::schedule::{configure_showcase_sets, ShowcaseSet};

/// Live spring state of the camera. Written only by the driver systems.
#[derive(Resource, Debug)]
pub struct CameraMotion {
    spring: Spring3,
    pending_commit: bool,
}

impl CameraMotion {
    pub fn new(position: Vec3, config: SpringConfig) -> Self {
        Self {
            spring: Spring3::at_rest(position, config),
            pending_commit: false,
        }
    }

    pub fn spring(&self) -> &Spring3 {
        &self.spring
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_settled()
    }

    /// Redirects toward `target`, starting from the camera's live position.
    pub fn redirect(&mut self, live_position: Option<Vec3>, target: Vec3) {
        if let Some(position) = live_position {
            if let Err(err) = self.spring.set_position(position) {
                warn!("camera: ignoring live position: {err}");
            }
        }
        match self.spring.retarget(target) {
            Ok(()) => self.pending_commit = true,
            Err(err) => warn!("camera: {err}"),
        }
    }

    /// One integration tick. Returns true on the tick the spring comes to rest.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.spring.is_settled() {
            return false;
        }
        let moving = self.spring.step(dt);
        self.pending_commit = true;
        !moving
    }

    /// Position to write to the camera this frame, if any.
    pub fn take_commit(&mut self) -> Option<Vec3> {
        std::mem::take(&mut self.pending_commit).then(|| self.spring.position())
    }
}

impl Default for CameraMotion {
    fn default() -> Self {
        Self::new(CameraPose::PANORAMA.position, SpringConfig::default())
    }
}

pub fn camera_transition_plugin(app: &mut App) {
    configure_showcase_sets(app);
    app.init_resource::<CameraTarget>()
        .init_resource::<CameraMotion>()
        .add_systems(PostStartup, seed_camera_motion)
        .add_systems(
            Update,
            (retarget_camera, step_camera_spring, commit_camera)
                .chain()
                .in_set(ShowcaseSet::Camera),
        );
}

/// Starts the spring wherever the camera was spawned, aimed at the current focus.
fn seed_camera_motion(
    focus: Res<FocusState>,
    catalog: Res<Catalog>,
    mut target: ResMut<CameraTarget>,
    mut motion: ResMut<CameraMotion>,
    camera: Query<&Transform, With<ShowcaseCamera>>,
) {
    *target = CameraTarget::resolve(focus.mode(), &catalog);
    let live = camera.get_single().ok().map(|tf| tf.translation);
    motion.redirect(live, target.position);
}

pub fn retarget_camera(
    mut changes: EventReader<FocusChanged>,
    focus: Res<FocusState>,
    catalog: Res<Catalog>,
    mut target: ResMut<CameraTarget>,
    mut motion: ResMut<CameraMotion>,
    camera: Query<&Transform, With<ShowcaseCamera>>,
) {
    if changes.read().last().is_none() {
        return;
    }
    *target = CameraTarget::resolve(focus.mode(), &catalog);
    let live = camera.get_single().ok().map(|tf| tf.translation);
    motion.redirect(live, target.position);
    debug!("camera: heading for {} looking at {}", target.position, target.look_at);
}

pub fn step_camera_spring(time: Res<Time>, mut motion: ResMut<CameraMotion>) {
    if motion.is_settled() && !motion.pending_commit {
        return;
    }
    if motion.advance(time.delta_secs()) {
        info!("camera: settled at {}", motion.spring().position());
    }
}

/// Applies the integrated position, then aims at the current look-at point.
pub fn commit_camera(
    target: Res<CameraTarget>,
    mut motion: ResMut<CameraMotion>,
    mut camera: Query<&mut Transform, With<ShowcaseCamera>>,
) {
    if !motion.pending_commit {
        return;
    }
    let Ok(mut tf) = camera.get_single_mut() else {
        return;
    };
    let Some(position) = motion.take_commit() else {
        return;
    };
    tf.translation = position;
    tf.look_at(target.look_at, Vec3::Y);
}
