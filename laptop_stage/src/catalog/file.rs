// On-disk catalog format. Coordinates are plain arrays so the file doesn't
// depend on math-library serde support.

use bevy::math::Vec3;
use serde::Deserialize;

use super::{CameraPose, Catalog, CatalogError, ObjectDescriptor, ObjectId};

#[derive(Clone, Debug, Deserialize)]
pub struct PoseFile {
    pub position: [f32; 3],
    pub look_at: [f32; 3],
}

#[derive(Clone, Debug, Deserialize)]
pub struct DescriptorFile {
    pub id: String,
    pub position: [f32; 3],
    #[serde(default)]
    pub rotation: [f32; 3],
    pub focus_camera: [f32; 3],
    pub look_at: [f32; 3],
}

#[derive(Clone, Debug, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub panorama: Option<PoseFile>,
    pub objects: Vec<DescriptorFile>,
}

impl CatalogFile {
    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        let panorama = self
            .panorama
            .map(|p| CameraPose {
                position: Vec3::from(p.position),
                look_at: Vec3::from(p.look_at),
            })
            .unwrap_or_default();
        let objects = self
            .objects
            .into_iter()
            .map(|d| ObjectDescriptor {
                id: ObjectId::new(d.id),
                rest_position: Vec3::from(d.position),
                rest_orientation: Vec3::from(d.rotation),
                focus_camera_position: Vec3::from(d.focus_camera),
                focus_look_at: Vec3::from(d.look_at),
            })
            .collect();
        Catalog::new(panorama, objects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_with_default_panorama_and_rotation() {
        let json = r#"{
            "objects": [
                { "id": "desk", "position": [1, 0, 1],
                  "focus_camera": [1, 1.5, 4], "look_at": [1, 0.5, 1] }
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();

        assert_eq!(catalog.panorama(), CameraPose::PANORAMA);
        let desk = catalog.lookup("desk").unwrap();
        assert_eq!(desk.rest_orientation, Vec3::ZERO);
        assert_eq!(desk.focus_camera_position, Vec3::new(1.0, 1.5, 4.0));
    }

    #[test]
    fn explicit_panorama_overrides_default() {
        let json = r#"{
            "panorama": { "position": [0, 6, 20], "look_at": [0, 1, 0] },
            "objects": [
                { "id": "a", "position": [0, 0, 0], "rotation": [0, 1.5, 0],
                  "focus_camera": [0, 1, 3], "look_at": [0, 0, 0] }
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.panorama().position, Vec3::new(0.0, 6.0, 20.0));
        assert_eq!(catalog.lookup("a").unwrap().rest_orientation.y, 1.5);
    }

    #[test]
    fn duplicate_ids_in_file_fail_validation() {
        let json = r#"{ "objects": [
            { "id": "a", "position": [0,0,0], "focus_camera": [0,1,3], "look_at": [0,0,0] },
            { "id": "a", "position": [1,0,0], "focus_camera": [1,1,3], "look_at": [1,0,0] }
        ] }"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateId(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Catalog::from_json("{ \"objects\": 3 }"),
            Err(CatalogError::Json(_))
        ));
    }
}
