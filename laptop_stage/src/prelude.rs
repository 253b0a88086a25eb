//! Minimal prelude for app builders.

pub use crate::camera::{
    camera_transition_plugin, orbit_camera_plugin, CameraMotion, CameraTarget, ShowcaseCamera,
    SpringConfig,
};
pub use crate::catalog::{CameraPose, Catalog, ObjectDescriptor, ObjectId};
pub use crate::focus::{focus_plugin, FocusMode, FocusRequest, FocusState};
pub use crate::sdk::ShowcaseBuilder;
