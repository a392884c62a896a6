//! Pointer and surface geometry in client (CSS pixel) coordinates.

use glam::Vec2;

/// Bounding box of the tilted surface, as reported by the host's layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A surface that has not been laid out yet (or collapsed) cannot be
    /// normalized against.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn half_extent(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin() + self.half_extent()
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left
            && p.x <= self.left + self.width
            && p.y >= self.top
            && p.y <= self.top + self.height
    }
}

/// One pointer event: client coordinates plus the viewport width at that
/// instant, which feeds the mobile breakpoint predicate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub position: Vec2,
    pub viewport_width: f32,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, viewport_width: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            viewport_width,
        }
    }
}
