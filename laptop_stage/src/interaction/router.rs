//! Click routing: laptops under the pointer see the click first, nearest
//! first, and the first one stops propagation. The ground only gets the
//! click when no laptop claimed it, wherever it lies along the ray.

use crate::catalog::ObjectId;
use crate::focus::FocusRequest;

#[derive(Clone, Debug, PartialEq)]
pub enum HitTarget {
    Object(ObjectId),
    Background,
}

/// A surface under the pointer, `distance` along the pick ray.
#[derive(Clone, Debug, PartialEq)]
pub struct Hit {
    pub target: HitTarget,
    pub distance: f32,
}

impl Hit {
    pub fn object(id: impl Into<ObjectId>, distance: f32) -> Self {
        Self {
            target: HitTarget::Object(id.into()),
            distance,
        }
    }

    pub fn background(distance: f32) -> Self {
        Self {
            target: HitTarget::Background,
            distance,
        }
    }
}

#[derive(Debug, Default)]
pub struct PointerEvent {
    stopped: bool,
}

impl PointerEvent {
    pub fn stop_propagation(&mut self) {
        self.stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.stopped
    }
}

pub fn on_object_clicked(event: &mut PointerEvent, id: &ObjectId) -> FocusRequest {
    event.stop_propagation();
    FocusRequest::Focus(id.clone())
}

pub fn on_background_clicked(_event: &mut PointerEvent) -> FocusRequest {
    FocusRequest::Unfocus
}

/// Delivers one click to `hits` and returns the focus requests it produced.
pub fn dispatch_click(mut hits: Vec<Hit>) -> Vec<FocusRequest> {
    hits.retain(|h| h.distance.is_finite());
    hits.sort_by(|a, b| {
        let is_background = |h: &Hit| matches!(h.target, HitTarget::Background);
        is_background(a)
            .cmp(&is_background(b))
            .then(a.distance.total_cmp(&b.distance))
    });

    let mut event = PointerEvent::default();
    let mut requests = Vec::new();
    for hit in &hits {
        if event.is_propagation_stopped() {
            break;
        }
        let request = match &hit.target {
            HitTarget::Object(id) => on_object_clicked(&mut event, id),
            HitTarget::Background => on_background_clicked(&mut event),
        };
        requests.push(request);
    }
    requests
}
