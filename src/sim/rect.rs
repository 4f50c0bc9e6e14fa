//! Axis-aligned rectangle geometry
//!
//! All entity bounds and overlap tests use this primitive. Positions
//! are the top-left corner in arena coordinates (y grows downward).

use glam::Vec2;

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width,
            height,
        }
    }

    /// Rect with the given center point
    pub fn centered(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            pos: center - Vec2::new(width / 2.0, height / 2.0),
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    /// AABB overlap test (edge-touching rects do not overlap)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Clamp the rect so it lies fully inside an arena of the given size
    pub fn clamp_to_arena(&mut self, arena_width: f32, arena_height: f32) {
        self.pos.x = self.pos.x.clamp(0.0, arena_width - self.width);
        self.pos.y = self.pos.y.clamp(0.0, arena_height - self.height);
    }

    /// True once the rect has fully left the arena vertically
    pub fn out_of_vertical_bounds(&self, arena_height: f32) -> bool {
        self.bottom() < 0.0 || self.top() > arena_height
    }
}
