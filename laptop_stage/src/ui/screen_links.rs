//! Places a link to the embedded page inside each visible laptop screen.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use url::Url;

use crate::scene::{ScreenRect, ScreenRects};
use crate::schedule::{configure_showcase_sets, ShowcaseSet};
use crate::ui::ensure_egui;

/// Screens narrower than this on screen are too small to read.
const MIN_READABLE_WIDTH: f32 = 140.0;

/// The page every laptop screen presents.
#[derive(Resource, Debug, Clone)]
pub struct ScreenContent {
    pub url: Url,
}

pub fn screen_links_plugin(app: &mut App) {
    configure_showcase_sets(app);
    ensure_egui(app);
    app.init_resource::<ScreenRects>().add_systems(
        Update,
        screen_links_system.in_set(ShowcaseSet::Presentation),
    );
}

pub fn is_readable(screen: &ScreenRect) -> bool {
    screen.facing && screen.rect.width() >= MIN_READABLE_WIDTH
}

fn screen_links_system(
    mut contexts: EguiContexts,
    content: Option<Res<ScreenContent>>,
    rects: Res<ScreenRects>,
) {
    let Some(content) = content else {
        return;
    };
    let ctx = contexts.ctx_mut();
    for screen in rects.0.iter().filter(|s| is_readable(s)) {
        let rect = screen.rect;
        let center = rect.center();
        egui::Area::new(egui::Id::new(("screen", screen.laptop.as_str())))
            .pivot(egui::Align2::CENTER_CENTER)
            .fixed_pos(egui::pos2(center.x, center.y))
            .order(egui::Order::Background)
            .show(ctx, |ui| {
                ui.hyperlink_to(
                    egui::RichText::new(content.url.host_str().unwrap_or(content.url.as_str()))
                        .size((rect.width() / 18.0).clamp(10.0, 22.0))
                        .color(egui::Color32::from_rgb(140, 190, 255)),
                    content.url.as_str(),
                );
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ObjectId;

    fn rect(width: f32, facing: bool) -> ScreenRect {
        ScreenRect {
            laptop: ObjectId::new("laptop1"),
            rect: Rect::new(0.0, 0.0, width, width * 0.6),
            facing,
        }
    }

    #[test]
    fn only_large_front_facing_screens_get_links() {
        assert!(is_readable(&rect(400.0, true)));
        assert!(!is_readable(&rect(400.0, false)));
        assert!(!is_readable(&rect(40.0, true)));
    }
}
