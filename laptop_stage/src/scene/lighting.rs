//! Lighting rig: soft ambient fill, one shadow-casting key light and two
//! colored accent point lights.

use bevy::pbr::{CascadeShadowConfigBuilder, DirectionalLightShadowMap};
use bevy::prelude::*;

const AMBIENT_BRIGHTNESS: f32 = 200.0;
const KEY_ILLUMINANCE: f32 = 6_000.0;
const ACCENT_INTENSITY: f32 = 150_000.0;
const SHADOW_MAP_SIZE: usize = 2048;
const SHADOW_DISTANCE: f32 = 50.0;

pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
    });
    commands.insert_resource(DirectionalLightShadowMap {
        size: SHADOW_MAP_SIZE,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: KEY_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        CascadeShadowConfigBuilder {
            maximum_distance: SHADOW_DISTANCE,
            first_cascade_far_bound: 10.0,
            ..default()
        }
        .build(),
        Transform::from_xyz(5., 8., 5.).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("key light"),
    ));

    for (position, color, name) in [
        (Vec3::new(-5., 5., 5.), Color::srgb_u8(0x4a, 0x9e, 0xff), "blue accent"),
        (Vec3::new(5., 5., -5.), Color::srgb_u8(0xff, 0x6b, 0x9d), "pink accent"),
    ] {
        commands.spawn((
            PointLight {
                color,
                intensity: ACCENT_INTENSITY,
                range: 30.0,
                ..default()
            },
            Transform::from_translation(position),
            Name::new(name),
        ));
    }
}
