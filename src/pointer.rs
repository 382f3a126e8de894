use crate::camera::{Camera, Ray};
use glam::Vec2;

/// Host element placement consumed for pointer normalization and resizing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBounds {
    pub width: f32,
    pub height: f32,
    pub offset_left: f32,
    pub offset_top: f32,
}

/// Map page coordinates to normalized device coordinates relative to an
/// element: `[-1, 1]` on both axes, y up, `(0, 0)` at the element center.
///
/// Kept as a pure function so the mapping is testable without any event
/// plumbing.
#[inline]
pub fn normalize_pointer(page_x: f32, page_y: f32, bounds: &ElementBounds) -> Vec2 {
    let x = (page_x - bounds.offset_left) / bounds.width * 2.0 - 1.0;
    let y = -((page_y - bounds.offset_top) / bounds.height) * 2.0 + 1.0;
    Vec2::new(x, y)
}

/// Pointer tracking state: normalized coordinates, the cached camera ray,
/// and the update throttle that lets the highlight decay instead of
/// recomputing (or flickering) every frame.
#[derive(Clone, Debug)]
pub struct PointerState {
    pub ndc: Vec2,
    pub raw_y: f32,
    pub updated: bool,
    pub updated_count: i32,
    /// The very first move after load is skipped; the cached position would
    /// produce a spurious jump.
    pub ran: bool,
    /// True while the pointer is over designated foreground UI regions.
    pub suppressed: bool,
    ray: Option<Ray>,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            ndc: Vec2::ZERO,
            raw_y: 0.0,
            updated: false,
            // -1 keeps the throttle disarmed until the first real movement.
            updated_count: -1,
            ran: false,
            suppressed: false,
            ray: None,
        }
    }
}

impl PointerState {
    /// Record a pointer movement already debounced by the caller. Returns
    /// true when the normalized coordinates actually changed; only then is
    /// the camera ray recomputed.
    pub fn record_move(
        &mut self,
        page_x: f32,
        page_y: f32,
        bounds: &ElementBounds,
        camera: &Camera,
    ) -> bool {
        if self.suppressed {
            return false;
        }
        if !self.ran {
            self.ran = true;
            return false;
        }

        let ndc = normalize_pointer(page_x, page_y, bounds);
        self.raw_y = page_y;
        if ndc == self.ndc {
            return false;
        }
        self.ndc = ndc;
        self.updated = true;
        self.updated_count = -1;
        self.ray = Some(camera.ndc_ray(ndc));
        true
    }

    /// Advance the update throttle one frame. Once a movement arms the
    /// counter, `updated` pulses true every `decay_frames` frames and stays
    /// false in between, so the highlight refreshes without churning every
    /// single frame.
    pub fn tick_throttle(&mut self, decay_frames: u32) {
        if self.updated || self.updated_count >= 0 {
            self.updated_count += 1;
            self.updated = self.updated_count % decay_frames as i32 == 0;
        }
    }

    pub fn set_suppressed(&mut self, suppressed: bool) {
        self.suppressed = suppressed;
        // Entering a foreground region drops the highlight; leaving rearms
        // it. Without a cached ray there is nothing to refresh, so the
        // throttle stays disarmed.
        self.updated = !suppressed && self.ray.is_some();
        if self.ray.is_some() {
            self.updated_count = 0;
        }
    }

    /// The cached ray, when fresh enough to drive highlighting this frame.
    pub fn active_ray(&self) -> Option<&Ray> {
        if self.updated {
            self.ray.as_ref()
        } else {
            None
        }
    }

    pub fn has_ray(&self) -> bool {
        self.ray.is_some()
    }
}
