//! Laptop stage: four laptops on a dark stage. Click one and the camera
//! springs into a close-up of its screen; click the floor to fly back.
//!
//! Library root: catalog, focus state, camera driver, interaction and scene.

pub mod camera;
pub mod catalog;
pub mod config;
pub mod focus;
pub mod interaction;
pub mod scene;
mod schedule;
mod ui;

pub mod prelude;
pub mod sdk;

pub use catalog::{CameraPose, Catalog, CatalogError, ObjectDescriptor, ObjectId};
pub use focus::{FocusChanged, FocusError, FocusMode, FocusRequest, FocusState};
pub use schedule::ShowcaseSet;
pub use ui::{hint_plugin, hud_plugin, is_readable, screen_links_plugin, ScreenContent, HINT_TEXT};
