//! Procedural laptops: pedestal, base, hinged lid and screen panel.

use std::f32::consts::PI;

use bevy::prelude::*;

use crate::catalog::{Catalog, ObjectDescriptor, ObjectId};
use crate::scene::materials;

const MODEL_SCALE: f32 = 0.3;
const MODEL_TILT_X: f32 = PI * 0.02;
/// Heading of the screen inside the model frame; the rest yaws in the
/// catalog are expressed relative to it.
const MODEL_YAW: f32 = -1.75;
const LID_OPEN: f32 = -0.26;

const BASE_SIZE: Vec3 = Vec3::new(4.0, 0.2, 2.8);
const LID_SIZE: Vec3 = Vec3::new(4.0, 2.8, 0.12);
const SCREEN_SIZE: Vec2 = Vec2::new(3.6, 2.4);
const PEDESTAL_RADIUS: f32 = 0.9;
const PEDESTAL_HEIGHT: f32 = 0.5;

/// Root of one laptop instance.
#[derive(Component, Debug, Clone)]
pub struct Laptop {
    pub id: ObjectId,
}

/// A clickable piece of a laptop.
#[derive(Component, Debug, Clone, Copy)]
pub struct LaptopPart {
    pub laptop: Entity,
}

/// The rectangle the embedded page is shown in, centered in its local XY
/// plane and facing local +Z.
#[derive(Component, Debug, Clone, Copy)]
pub struct ScreenSurface {
    pub laptop: Entity,
    pub half_size: Vec2,
}

/// Mesh and material handles shared by every laptop.
#[derive(Resource, Clone)]
pub struct LaptopAssets {
    pedestal: Handle<Mesh>,
    base: Handle<Mesh>,
    lid: Handle<Mesh>,
    screen: Handle<Mesh>,
    body_material: Handle<StandardMaterial>,
    screen_material: Handle<StandardMaterial>,
    pedestal_material: Handle<StandardMaterial>,
}

impl LaptopAssets {
    pub fn new(meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) -> Self {
        Self {
            pedestal: meshes.add(Cylinder::new(PEDESTAL_RADIUS, PEDESTAL_HEIGHT)),
            base: meshes.add(Cuboid::from_size(BASE_SIZE)),
            lid: meshes.add(Cuboid::from_size(LID_SIZE)),
            screen: meshes.add(Rectangle::from_size(SCREEN_SIZE)),
            body_material: materials.add(materials::laptop_body()),
            screen_material: materials.add(materials::laptop_screen()),
            pedestal_material: materials.add(materials::pedestal()),
        }
    }
}

pub fn spawn_laptops(commands: &mut Commands, assets: &LaptopAssets, catalog: &Catalog) {
    for descriptor in catalog.iter() {
        spawn_laptop(commands, assets, descriptor);
    }
}

pub fn spawn_laptop(
    commands: &mut Commands,
    assets: &LaptopAssets,
    descriptor: &ObjectDescriptor,
) -> Entity {
    let root = commands
        .spawn((
            Laptop {
                id: descriptor.id.clone(),
            },
            descriptor.rest_transform(),
            Visibility::default(),
            Name::new(format!("laptop {}", descriptor.id)),
        ))
        .id();
    let part = LaptopPart { laptop: root };

    commands.entity(root).with_children(|laptop| {
        laptop.spawn((
            part,
            Mesh3d(assets.pedestal.clone()),
            MeshMaterial3d(assets.pedestal_material.clone()),
            Transform::from_xyz(0.0, -PEDESTAL_HEIGHT / 2.0, 0.0),
        ));

        let model = Transform::from_rotation(Quat::from_euler(
            EulerRot::YXZ,
            MODEL_YAW,
            MODEL_TILT_X,
            0.0,
        ))
        .with_scale(Vec3::splat(MODEL_SCALE));

        laptop
            .spawn((model, Visibility::default()))
            .with_children(|model| {
                model.spawn((
                    part,
                    Mesh3d(assets.base.clone()),
                    MeshMaterial3d(assets.body_material.clone()),
                    Transform::from_xyz(0.0, BASE_SIZE.y / 2.0, 0.0),
                ));

                let hinge = Transform::from_xyz(0.0, BASE_SIZE.y, -BASE_SIZE.z / 2.0)
                    .with_rotation(Quat::from_rotation_x(LID_OPEN));
                model
                    .spawn((hinge, Visibility::default()))
                    .with_children(|lid| {
                        lid.spawn((
                            part,
                            Mesh3d(assets.lid.clone()),
                            MeshMaterial3d(assets.body_material.clone()),
                            Transform::from_xyz(0.0, LID_SIZE.y / 2.0, -LID_SIZE.z / 2.0),
                        ));
                        lid.spawn((
                            part,
                            ScreenSurface {
                                laptop: root,
                                half_size: SCREEN_SIZE / 2.0,
                            },
                            Mesh3d(assets.screen.clone()),
                            MeshMaterial3d(assets.screen_material.clone()),
                            Transform::from_xyz(0.0, LID_SIZE.y / 2.0 + 0.05, 0.005),
                        ));
                    });
            });
    });

    root
}
