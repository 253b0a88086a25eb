//! Scene object catalog: the static table of focusable laptops and their poses.

mod file;

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use bevy::prelude::*;
use thiserror::Error;

pub use file::{CatalogFile, DescriptorFile, PoseFile};

/// Stable identifier of a focusable scene object.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Where the camera sits and what it aims at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    pub const PANORAMA: Self = Self {
        position: Vec3::new(0.0, 3.0, 12.0),
        look_at: Vec3::ZERO,
    };

    fn is_finite(&self) -> bool {
        self.position.is_finite() && self.look_at.is_finite()
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::PANORAMA
    }
}

/// One focusable object: where it rests and how the camera frames it.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectDescriptor {
    pub id: ObjectId,
    pub rest_position: Vec3,
    /// Euler angles in radians, XYZ order.
    pub rest_orientation: Vec3,
    pub focus_camera_position: Vec3,
    pub focus_look_at: Vec3,
}

impl ObjectDescriptor {
    pub fn rest_transform(&self) -> Transform {
        let r = self.rest_orientation;
        Transform::from_translation(self.rest_position)
            .with_rotation(Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z))
    }

    pub fn focus_pose(&self) -> CameraPose {
        CameraPose {
            position: self.focus_camera_position,
            look_at: self.focus_look_at,
        }
    }

    fn is_finite(&self) -> bool {
        self.rest_position.is_finite()
            && self.rest_orientation.is_finite()
            && self.focus_camera_position.is_finite()
            && self.focus_look_at.is_finite()
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has no objects")]
    Empty,
    #[error("duplicate object id {0:?}")]
    DuplicateId(String),
    #[error("non-finite coordinate in {0}")]
    NonFinite(String),
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-only table of focusable objects, fixed for the session.
#[derive(Resource, Clone, Debug)]
pub struct Catalog {
    panorama: CameraPose,
    objects: Vec<ObjectDescriptor>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty tables, duplicate ids and non-finite poses.
    pub fn new(
        panorama: CameraPose,
        objects: Vec<ObjectDescriptor>,
    ) -> Result<Self, CatalogError> {
        if objects.is_empty() {
            return Err(CatalogError::Empty);
        }
        if !panorama.is_finite() {
            return Err(CatalogError::NonFinite("panorama".to_string()));
        }
        let mut seen = HashSet::new();
        for object in &objects {
            if !seen.insert(object.id.as_str()) {
                return Err(CatalogError::DuplicateId(object.id.to_string()));
            }
            if !object.is_finite() {
                return Err(CatalogError::NonFinite(object.id.to_string()));
            }
        }
        Ok(Self { panorama, objects })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        file.into_catalog()
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn lookup(&self, id: &str) -> Option<&ObjectDescriptor> {
        self.objects.iter().find(|o| o.id.as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObjectDescriptor> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn panorama(&self) -> CameraPose {
        self.panorama
    }
}

/// Four laptops on a 5×5 square, each turned toward the panorama camera.
impl Default for Catalog {
    fn default() -> Self {
        let laptop = |id: &str, position: [f32; 3], yaw: f32, camera: [f32; 3], look: [f32; 3]| {
            ObjectDescriptor {
                id: ObjectId::new(id),
                rest_position: Vec3::from(position),
                rest_orientation: Vec3::new(0.0, yaw, 0.0),
                focus_camera_position: Vec3::from(camera),
                focus_look_at: Vec3::from(look),
            }
        };
        Self {
            panorama: CameraPose::PANORAMA,
            objects: vec![
                laptop(
                    "laptop1",
                    [-2.5, 0.0, -2.5],
                    10.0f32.atan2(-2.5),
                    [-2.5, 1.5, 0.5],
                    [-2.5, 0.5, -2.5],
                ),
                laptop(
                    "laptop2",
                    [2.5, 0.0, -2.5],
                    2.5f32.atan2(0.0),
                    [2.5, 1.5, 0.5],
                    [2.5, 0.5, -2.5],
                ),
                laptop(
                    "laptop3",
                    [-2.5, 0.0, 2.5],
                    2.0f32.atan2(-0.5),
                    [-2.5, 1.5, 5.5],
                    [-2.5, 0.5, 2.5],
                ),
                laptop(
                    "laptop4",
                    [2.5, 0.0, 2.5],
                    10.0f32.atan2(0.0),
                    [2.5, 1.5, 5.5],
                    [2.5, 0.5, 2.5],
                ),
            ],
        }
    }
}
