//! Virtual canvas scaling
//!
//! The scene is drawn to a fixed-size canvas, which is then scaled uniformly
//! to fit the window and centred, leaving bars on the sides or top/bottom.
//! The inverse transform maps the mouse back into canvas space for hit-testing.

use macroquad::prelude::{Rect, Vec2};

/// Where the canvas lands in the window this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    /// Destination rectangle in window coordinates
    pub dest: Rect,
}

impl Viewport {
    /// Fit `canvas` inside `window`, preserving aspect ratio.
    ///
    /// Returns `None` when the canvas has no area, since no scale exists.
    pub fn fit(window: Vec2, canvas: Vec2) -> Option<Self> {
        if canvas.x <= 0.0 || canvas.y <= 0.0 {
            return None;
        }

        let scale = (window.x / canvas.x).min(window.y / canvas.y);
        let w = canvas.x * scale;
        let h = canvas.y * scale;

        Some(Self {
            scale,
            dest: Rect::new((window.x - w) / 2.0, (window.y - h) / 2.0, w, h),
        })
    }

    /// Map a window-space point into canvas space.
    ///
    /// `None` while the window is collapsed to zero size.
    pub fn to_virtual(&self, point: Vec2) -> Option<Vec2> {
        if self.scale <= 0.0 {
            return None;
        }
        Some((point - self.dest.point()) / self.scale)
    }
}
