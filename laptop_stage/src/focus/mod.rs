//! Focus state: which laptop, if any, the camera is framing.

use bevy::prelude::*;
use thiserror::Error;

use crate::catalog::{Catalog, ObjectId};
use crate::schedule::{configure_showcase_sets, ShowcaseSet};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FocusMode {
    #[default]
    Panoramic,
    Focused(ObjectId),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FocusError {
    #[error("no object {0:?} in the catalog")]
    UnknownObject(String),
}

/// Session-scoped focus. Mutated only by `apply_focus_requests`.
#[derive(Resource, Debug, Default)]
pub struct FocusState {
    mode: FocusMode,
}

impl FocusState {
    pub fn mode(&self) -> &FocusMode {
        &self.mode
    }

    pub fn focused_id(&self) -> Option<&ObjectId> {
        match &self.mode {
            FocusMode::Focused(id) => Some(id),
            FocusMode::Panoramic => None,
        }
    }

    pub fn is_panoramic(&self) -> bool {
        self.mode == FocusMode::Panoramic
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused_id().is_some_and(|f| f.as_str() == id)
    }

    /// Focuses `id`. Unknown ids leave the state untouched.
    /// Returns whether the mode changed.
    pub fn focus(&mut self, id: &str, catalog: &Catalog) -> Result<bool, FocusError> {
        let Some(descriptor) = catalog.lookup(id) else {
            return Err(FocusError::UnknownObject(id.to_string()));
        };
        if self.is_focused(id) {
            return Ok(false);
        }
        self.mode = FocusMode::Focused(descriptor.id.clone());
        Ok(true)
    }

    /// Returns to the panorama. Idempotent.
    pub fn unfocus(&mut self) -> bool {
        if self.is_panoramic() {
            return false;
        }
        self.mode = FocusMode::Panoramic;
        true
    }
}

/// Requested transition, produced by the interaction router.
#[derive(Event, Clone, Debug, PartialEq, Eq)]
pub enum FocusRequest {
    Focus(ObjectId),
    Unfocus,
}

/// An effective transition, consumed by the camera driver.
#[derive(Event, Clone, Debug, PartialEq, Eq)]
pub struct FocusChanged {
    pub previous: FocusMode,
    pub current: FocusMode,
}

pub fn focus_plugin(app: &mut App) {
    configure_showcase_sets(app);
    app.init_resource::<FocusState>()
        .add_event::<FocusRequest>()
        .add_event::<FocusChanged>()
        .add_systems(Update, apply_focus_requests.in_set(ShowcaseSet::Focus));
}

pub fn apply_focus_requests(
    mut requests: EventReader<FocusRequest>,
    mut changed: EventWriter<FocusChanged>,
    mut focus: ResMut<FocusState>,
    catalog: Res<Catalog>,
) {
    for request in requests.read() {
        let previous = focus.mode().clone();
        let result = match request {
            FocusRequest::Focus(id) => focus.focus(id.as_str(), &catalog),
            FocusRequest::Unfocus => Ok(focus.unfocus()),
        };
        match result {
            Ok(true) => {
                let current = focus.mode().clone();
                info!("focus: {previous:?} -> {current:?}");
                changed.send(FocusChanged { previous, current });
            }
            Ok(false) => {}
            Err(err) => warn!("focus request rejected: {err}"),
        }
    }
}
