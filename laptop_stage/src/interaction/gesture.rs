use bevy::math::Vec2;

/// Pointer travel beyond which a press is a drag, not a click.
pub const CLICK_SLOP_PX: f32 = 5.0;

/// Tells clicks from orbit drags for one mouse button.
#[derive(Debug, Default)]
pub struct PointerGesture {
    last: Option<Vec2>,
    travelled: f32,
}

impl PointerGesture {
    pub fn press(&mut self, at: Vec2) {
        self.last = Some(at);
        self.travelled = 0.0;
    }

    pub fn track(&mut self, at: Vec2) {
        if let Some(last) = self.last {
            self.travelled += last.distance(at);
            self.last = Some(at);
        }
    }

    /// Ends the gesture; true when it was a click.
    pub fn release(&mut self, at: Vec2) -> bool {
        self.track(at);
        let was_pressed = self.last.take().is_some();
        was_pressed && self.travelled < CLICK_SLOP_PX
    }

    pub fn cancel(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_in_place_is_a_click() {
        let mut g = PointerGesture::default();
        g.press(Vec2::new(100.0, 100.0));
        assert!(g.release(Vec2::new(101.0, 100.0)));
    }

    #[test]
    fn drag_out_and_back_is_not_a_click() {
        let mut g = PointerGesture::default();
        g.press(Vec2::new(100.0, 100.0));
        g.track(Vec2::new(160.0, 100.0));
        assert!(!g.release(Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut g = PointerGesture::default();
        assert!(!g.release(Vec2::ZERO));

        g.press(Vec2::ZERO);
        g.cancel();
        assert!(!g.release(Vec2::ZERO));
    }
}
