use bevy::prelude::*;

/// Per-frame ordering: input is routed before focus changes are applied,
/// and the camera reads the target only after that.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowcaseSet {
    Input,
    Focus,
    Camera,
    Orbit,
    Presentation,
}

pub(crate) fn configure_showcase_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            ShowcaseSet::Input,
            ShowcaseSet::Focus,
            ShowcaseSet::Camera,
            ShowcaseSet::Orbit,
            ShowcaseSet::Presentation,
        )
            .chain(),
    );
}
