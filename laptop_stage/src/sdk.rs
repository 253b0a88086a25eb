//! Builder for composing the showcase app.

use std::path::PathBuf;

use bevy::prelude::*;
use url::Url;

use crate::camera::{camera_transition_plugin, orbit_camera_plugin};
use crate::catalog::{Catalog, CatalogError};
use crate::config;
use crate::focus::focus_plugin;
use crate::interaction::interaction_plugin;
use crate::scene::{scene_plugin, screenshot_plugin, ScreenshotMode};
use crate::ui::{hint_plugin, hud_plugin, screen_links_plugin, ScreenContent};

const SCREENSHOT_WARMUP_FRAMES: u32 = 30;

/// Builder for a showcase app with optional overlays and controls.
pub struct ShowcaseBuilder {
    catalog: Catalog,
    screen_url: Url,
    screenshot: Option<PathBuf>,
    window_title: String,
    window_resolution: (f32, f32),
    clear_color: Color,
    enable_orbit: bool,
    enable_hint: bool,
    enable_hud: bool,
    enable_screen_links: bool,
}

impl Default for ShowcaseBuilder {
    fn default() -> Self {
        Self {
            catalog: Catalog::default(),
            screen_url: config::default_screen_url(),
            screenshot: None,
            window_title: "Laptop Showcase".to_string(),
            window_resolution: (1280.0, 720.0),
            clear_color: Color::srgb_u8(0x1a, 0x1a, 0x1a),
            enable_orbit: true,
            enable_hint: true,
            enable_hud: true,
            enable_screen_links: true,
        }
    }
}

impl ShowcaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads catalog, screen URL and screenshot settings from the environment.
    pub fn with_env(self) -> Result<Self, CatalogError> {
        let catalog = config::catalog()?;
        Ok(Self {
            catalog,
            screen_url: config::screen_url(),
            screenshot: config::screenshot_path(),
            ..self
        })
    }

    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn screen_url(mut self, url: Url) -> Self {
        self.screen_url = url;
        self
    }

    /// Capture the window to `path` once the camera has settled, then exit.
    pub fn screenshot(mut self, path: impl Into<PathBuf>) -> Self {
        self.screenshot = Some(path.into());
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn disable_orbit(mut self) -> Self {
        self.enable_orbit = false;
        self
    }

    pub fn disable_hint(mut self) -> Self {
        self.enable_hint = false;
        self
    }

    pub fn disable_hud(mut self) -> Self {
        self.enable_hud = false;
        self
    }

    pub fn disable_screen_links(mut self) -> Self {
        self.enable_screen_links = false;
        self
    }

    /// Build the Bevy app with the selected configuration and plugins.
    pub fn build(self) -> App {
        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title,
                resolution: self.window_resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(self.clear_color))
        .insert_resource(self.catalog)
        .insert_resource(ScreenContent {
            url: self.screen_url,
        })
        .add_plugins((
            focus_plugin,
            camera_transition_plugin,
            interaction_plugin,
            scene_plugin,
        ));

        if self.enable_orbit {
            app.add_plugins(orbit_camera_plugin);
        }
        if self.enable_hint {
            app.add_plugins(hint_plugin);
        }
        if self.enable_hud {
            app.add_plugins(hud_plugin);
        }
        if self.enable_screen_links {
            app.add_plugins(screen_links_plugin);
        }
        if let Some(path) = self.screenshot {
            app.insert_resource(ScreenshotMode::new(path, SCREENSHOT_WARMUP_FRAMES))
                .add_plugins(screenshot_plugin);
        }

        app
    }
}
