use bevy::prelude::*;

use crate::catalog::{CameraPose, Catalog};
use crate::focus::FocusMode;

/// Pose the camera is heading for, derived from the focus mode.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct CameraTarget {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraTarget {
    /// Focus pose of the focused object, or the panorama. A focused id that
    /// is missing from the catalog also resolves to the panorama.
    pub fn resolve(mode: &FocusMode, catalog: &Catalog) -> Self {
        let pose = match mode {
            FocusMode::Focused(id) => catalog
                .lookup(id.as_str())
                .map(|d| d.focus_pose())
                .unwrap_or_else(|| catalog.panorama()),
            FocusMode::Panoramic => catalog.panorama(),
        };
        Self::from(pose)
    }
}

impl From<CameraPose> for CameraTarget {
    fn from(pose: CameraPose) -> Self {
        Self {
            position: pose.position,
            look_at: pose.look_at,
        }
    }
}

impl Default for CameraTarget {
    fn default() -> Self {
        Self::from(CameraPose::PANORAMA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ObjectId;

    #[test]
    fn panoramic_resolves_to_panorama_pose() {
        let target = CameraTarget::resolve(&FocusMode::Panoramic, &Catalog::default());
        assert_eq!(target.position, Vec3::new(0.0, 3.0, 12.0));
        assert_eq!(target.look_at, Vec3::ZERO);
    }

    #[test]
    fn focused_resolves_to_descriptor_pose() {
        let mode = FocusMode::Focused(ObjectId::new("laptop3"));
        let target = CameraTarget::resolve(&mode, &Catalog::default());
        assert_eq!(target.position, Vec3::new(-2.5, 1.5, 5.5));
        assert_eq!(target.look_at, Vec3::new(-2.5, 0.5, 2.5));
    }

    #[test]
    fn dangling_focus_falls_back_to_panorama() {
        let mode = FocusMode::Focused(ObjectId::new("gone"));
        let target = CameraTarget::resolve(&mode, &Catalog::default());
        assert_eq!(target, CameraTarget::default());
    }
}
