//! Stage composition: camera, lights, floor and one instance per catalog laptop.

mod laptops;
mod lighting;
pub(crate) mod materials;
mod screens;
mod screenshot;

use bevy::prelude::*;

use crate::camera::ShowcaseCamera;
use crate::catalog::Catalog;
use crate::schedule::{configure_showcase_sets, ShowcaseSet};

pub use laptops::{spawn_laptop, spawn_laptops, Laptop, LaptopAssets, LaptopPart, ScreenSurface};
pub use lighting::spawn_lighting;
pub use screens::{bounding_rect, screen_corners, ScreenRect, ScreenRects};
pub use screenshot::{screenshot_plugin, ScreenshotMode};

const GROUND_SIZE: f32 = 50.0;
const GROUND_Y: f32 = -0.5;
const CAMERA_FOV_DEGREES: f32 = 45.0;

/// The floor. Clicking it returns to the panorama.
#[derive(Component, Debug, Clone, Copy)]
pub struct Ground {
    pub half_size: Vec2,
}

pub fn scene_plugin(app: &mut App) {
    configure_showcase_sets(app);
    app.init_resource::<ScreenRects>()
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            screens::project_screens_system.in_set(ShowcaseSet::Presentation),
        );
}

pub fn setup_scene(
    mut commands: Commands,
    catalog: Res<Catalog>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let panorama = catalog.panorama();
    commands.spawn((
        ShowcaseCamera,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: 0.1,
            far: 200.0,
            ..default()
        }),
        Transform::from_translation(panorama.position).looking_at(panorama.look_at, Vec3::Y),
    ));

    spawn_lighting(&mut commands);

    commands.spawn((
        Ground {
            half_size: Vec2::splat(GROUND_SIZE / 2.0),
        },
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(materials::ground())),
        Transform::from_xyz(0.0, GROUND_Y, 0.0),
        Name::new("ground"),
    ));

    let assets = LaptopAssets::new(&mut meshes, &mut materials);
    spawn_laptops(&mut commands, &assets, &catalog);
    commands.insert_resource(assets);
}
