mod orbit;
pub mod spring;
mod target;
mod transition;

use bevy::prelude::*;

pub use orbit::{orbit_camera_plugin, OrbitControls, OrbitSettings, OrbitState};
pub use spring::{Spring3, SpringConfig, SpringError};
pub use target::CameraTarget;
pub use transition::{camera_transition_plugin, CameraMotion};

/// Marker for the one camera the showcase drives.
#[derive(Component, Debug, Default)]
pub struct ShowcaseCamera;
