//! Shared materials for laptops and the stage floor.

use bevy::prelude::*;

pub fn laptop_body() -> StandardMaterial {
    StandardMaterial {
        base_color: Color::srgb(0.62, 0.64, 0.68),
        metallic: 0.3,
        perceptual_roughness: 0.7,
        ..default()
    }
}

/// Dark panel the page link is laid over.
pub fn laptop_screen() -> StandardMaterial {
    let glow = Color::srgb_u8(0x11, 0x11, 0x11).to_linear();
    StandardMaterial {
        base_color: Color::BLACK,
        metallic: 0.1,
        perceptual_roughness: 0.9,
        emissive: LinearRgba::rgb(glow.red * 0.2, glow.green * 0.2, glow.blue * 0.2),
        ..default()
    }
}

pub fn pedestal() -> StandardMaterial {
    StandardMaterial {
        base_color: Color::srgb_u8(0x22, 0x22, 0x26),
        metallic: 0.2,
        perceptual_roughness: 0.6,
        ..default()
    }
}

pub fn ground() -> StandardMaterial {
    StandardMaterial {
        base_color: Color::srgb_u8(0x0f, 0x0f, 0x0f),
        perceptual_roughness: 1.0,
        ..default()
    }
}
