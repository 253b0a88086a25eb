//! Ray tests against laptop parts and the ground.
//!
//! Manual intersection instead of Bevy's mesh picking so egui keeps its
//! input and the ground never swallows a laptop click.

use bevy::prelude::*;
use bevy::render::primitives::Aabb;

/// Distance along a unit-length ray to a (possibly rotated) bounding box.
pub fn ray_obb_distance(
    origin: Vec3,
    dir: Vec3,
    transform: &GlobalTransform,
    aabb: &Aabb,
) -> Option<f32> {
    let to_local = transform.affine().inverse();
    let local_origin = to_local.transform_point3(origin);
    let local_dir = to_local.transform_vector3(dir);
    let center: Vec3 = aabb.center.into();
    let half: Vec3 = aabb.half_extents.into();
    ray_aabb_intersect(local_origin, local_dir, center - half, center + half)
}

fn ray_aabb_intersect(origin: Vec3, dir: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Option<f32> {
    let inv_dir = 1.0 / dir;
    let t1 = (aabb_min - origin) * inv_dir;
    let t2 = (aabb_max - origin) * inv_dir;
    let t_min = t1.min(t2);
    let t_max = t1.max(t2);
    let t_enter = t_min.x.max(t_min.y).max(t_min.z);
    let t_exit = t_max.x.min(t_max.y).min(t_max.z);
    if t_enter <= t_exit && t_exit > 0.0 {
        Some(t_enter.max(0.0))
    } else {
        None
    }
}

/// Distance to a rectangle lying in the local XZ plane of `transform`.
pub fn ray_plane_distance(
    origin: Vec3,
    dir: Vec3,
    transform: &GlobalTransform,
    half_size: Vec2,
) -> Option<f32> {
    let to_local = transform.affine().inverse();
    let o = to_local.transform_point3(origin);
    let d = to_local.transform_vector3(dir);
    if d.y.abs() < 1e-6 {
        return None;
    }
    let t = -o.y / d.y;
    if t <= 0.0 {
        return None;
    }
    let p = o + d * t;
    (p.x.abs() <= half_size.x && p.z.abs() <= half_size.y).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::from_min_max(Vec3::splat(-0.5), Vec3::splat(0.5))
    }

    #[test]
    fn ray_hits_box_in_front() {
        let tf = GlobalTransform::from_translation(Vec3::new(0.0, 0.0, -5.0));
        let hit = ray_obb_distance(Vec3::ZERO, Vec3::NEG_Z, &tf, &unit_box());
        assert!((hit.unwrap() - 4.5).abs() < 1e-5);
    }

    #[test]
    fn ray_misses_box_behind() {
        let tf = GlobalTransform::from_translation(Vec3::new(0.0, 0.0, 5.0));
        assert!(ray_obb_distance(Vec3::ZERO, Vec3::NEG_Z, &tf, &unit_box()).is_none());
    }

    #[test]
    fn rotation_is_respected() {
        // A long thin box along X, turned 90° so it runs along Z.
        let aabb = Aabb::from_min_max(Vec3::new(-2.0, -0.1, -0.1), Vec3::new(2.0, 0.1, 0.1));
        let turned = GlobalTransform::from(
            Transform::from_xyz(0.0, 0.0, -5.0)
                .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)),
        );
        let offset_origin = Vec3::new(1.5, 0.0, 0.0);

        assert!(ray_obb_distance(offset_origin, Vec3::NEG_Z, &turned, &aabb).is_none());
        let head_on = ray_obb_distance(Vec3::ZERO, Vec3::NEG_Z, &turned, &aabb);
        assert!((head_on.unwrap() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn ray_hits_ground_inside_bounds() {
        let ground = GlobalTransform::from_translation(Vec3::new(0.0, -0.5, 0.0));
        let dir = Vec3::new(0.0, -3.5, -12.0).normalize();
        let t = ray_plane_distance(Vec3::new(0.0, 3.0, 12.0), dir, &ground, Vec2::splat(25.0));
        let p = Vec3::new(0.0, 3.0, 12.0) + dir * t.unwrap();
        assert!((p.y + 0.5).abs() < 1e-4);
    }

    #[test]
    fn ray_parallel_to_or_away_from_ground_misses() {
        let ground = GlobalTransform::from_translation(Vec3::new(0.0, -0.5, 0.0));
        let half = Vec2::splat(25.0);
        assert!(ray_plane_distance(Vec3::Y, Vec3::X, &ground, half).is_none());
        assert!(ray_plane_distance(Vec3::Y, Vec3::Y, &ground, half).is_none());
    }

    #[test]
    fn ray_past_ground_edge_misses() {
        let ground = GlobalTransform::from_translation(Vec3::new(0.0, -0.5, 0.0));
        let dir = Vec3::new(0.0, -0.01, -1.0).normalize();
        assert!(ray_plane_distance(Vec3::ZERO, dir, &ground, Vec2::splat(25.0)).is_none());
    }
}
