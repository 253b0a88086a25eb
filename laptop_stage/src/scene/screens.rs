//! Window-space rectangles of the laptop screens, recomputed every frame.
//! The embedded page is laid over these; its content is opaque to us.

use bevy::prelude::*;

use crate::camera::ShowcaseCamera;
use crate::catalog::ObjectId;
use crate::scene::{Laptop, ScreenSurface};

#[derive(Clone, Debug, PartialEq)]
pub struct ScreenRect {
    pub laptop: ObjectId,
    pub rect: Rect,
    /// Whether the screen's front side is turned toward the camera.
    pub facing: bool,
}

#[derive(Resource, Debug, Default)]
pub struct ScreenRects(pub Vec<ScreenRect>);

/// Smallest rectangle containing all `points`.
pub fn bounding_rect(points: &[Vec2]) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    Some(
        rest.iter()
            .fold(Rect::from_corners(*first, *first), |r, p| {
                r.union_point(*p)
            }),
    )
}

pub fn screen_corners(transform: &GlobalTransform, half_size: Vec2) -> [Vec3; 4] {
    let Vec2 { x, y } = half_size;
    [
        Vec3::new(-x, -y, 0.0),
        Vec3::new(x, -y, 0.0),
        Vec3::new(x, y, 0.0),
        Vec3::new(-x, y, 0.0),
    ]
    .map(|corner| transform.transform_point(corner))
}

pub fn project_screens_system(
    cameras: Query<(&Camera, &GlobalTransform), With<ShowcaseCamera>>,
    screens: Query<(&ScreenSurface, &GlobalTransform)>,
    laptops: Query<&Laptop>,
    mut rects: ResMut<ScreenRects>,
) {
    rects.0.clear();
    let Ok((camera, cam_transform)) = cameras.get_single() else {
        return;
    };
    let eye = cam_transform.translation();

    for (screen, transform) in &screens {
        let Ok(laptop) = laptops.get(screen.laptop) else {
            continue;
        };
        let corners = screen_corners(transform, screen.half_size);
        let projected: Option<Vec<Vec2>> = corners
            .iter()
            .map(|c| camera.world_to_viewport(cam_transform, *c).ok())
            .collect();
        let Some(rect) = projected.as_deref().and_then(bounding_rect) else {
            continue;
        };
        let normal: Vec3 = *transform.back();
        let facing = normal.dot(eye - transform.translation()) > 0.0;
        rects.0.push(ScreenRect {
            laptop: laptop.id.clone(),
            rect,
            facing,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_rect_spans_all_points() {
        let rect = bounding_rect(&[
            Vec2::new(10.0, 40.0),
            Vec2::new(30.0, 20.0),
            Vec2::new(25.0, 60.0),
        ])
        .unwrap();
        assert_eq!(rect.min, Vec2::new(10.0, 20.0));
        assert_eq!(rect.max, Vec2::new(30.0, 60.0));
    }

    #[test]
    fn no_points_no_rect() {
        assert!(bounding_rect(&[]).is_none());
    }

    #[test]
    fn corners_follow_the_screen_transform() {
        let tf = GlobalTransform::from(
            Transform::from_xyz(1.0, 2.0, 3.0).with_scale(Vec3::splat(2.0)),
        );
        let corners = screen_corners(&tf, Vec2::new(1.0, 0.5));
        assert_eq!(corners[0], Vec3::new(-1.0, 1.0, 3.0));
        assert_eq!(corners[2], Vec3::new(3.0, 3.0, 3.0));
    }
}
