//! Camera: a rectangular viewport into the world.

use crate::world::World;

/// Viewport rectangle in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Camera {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Camera {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Fresh copy of the region under the camera.
    ///
    /// The camera is not clamped here; regions outside the world come back
    /// transparent.
    pub fn view(&self, world: &World) -> World {
        world.sub_view(self.x, self.y, self.w, self.h)
    }

    /// Shrink the extent so it never exceeds the world size.
    pub fn fit_extent(&mut self, world: &World) {
        self.w = self.w.min(dim(world.width()));
        self.h = self.h.min(dim(world.height()));
    }

    /// Move by (`dx`, `dy`), keeping the viewport inside the world.
    pub fn pan_within(&mut self, dx: i32, dy: i32, world: &World) {
        self.x = clamp(self.x.saturating_add(dx), 0, dim(world.width()) - self.w);
        self.y = clamp(self.y.saturating_add(dy), 0, dim(world.height()) - self.h);
    }
}

fn dim(v: usize) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

// Unlike `i32::clamp`, tolerates `max < min` (camera wider than the world).
fn clamp(v: i32, min: i32, max: i32) -> i32 {
    v.min(max).max(min)
}
