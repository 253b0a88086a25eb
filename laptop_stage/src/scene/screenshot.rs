//! Auto-screenshot: once the camera has come to rest after a warm-up,
//! captures the primary window and exits.

use std::path::PathBuf;

use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};

use crate::camera::CameraMotion;

#[derive(Resource, Debug)]
pub struct ScreenshotMode {
    pub path: PathBuf,
    pub warmup_frames: u32,
    pub captured: bool,
}

impl ScreenshotMode {
    pub fn new(path: PathBuf, warmup_frames: u32) -> Self {
        Self {
            path,
            warmup_frames,
            captured: false,
        }
    }

    /// Counts down one frame; true when it's time to capture.
    pub fn tick(&mut self, camera_settled: bool) -> bool {
        if self.captured {
            return false;
        }
        if self.warmup_frames > 0 {
            self.warmup_frames -= 1;
            return false;
        }
        camera_settled
    }
}

pub fn auto_screenshot_system(
    mut commands: Commands,
    mut mode: ResMut<ScreenshotMode>,
    motion: Res<CameraMotion>,
    mut exit: EventWriter<AppExit>,
) {
    if mode.captured {
        exit.send(AppExit::Success);
        return;
    }
    if !mode.tick(motion.is_settled()) {
        return;
    }

    let path = mode.path.clone();
    info!("screenshot: saving {}", path.display());
    commands
        .spawn(Screenshot::primary_window())
        .observe(save_to_disk(path));
    mode.captured = true;
}

pub fn screenshot_plugin(app: &mut App) {
    app.add_systems(Update, auto_screenshot_system);
}
