// Integer axis-aligned rectangles used for every overlap test in the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world pixels, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from a float position, truncating toward zero.
    pub fn at(position: Vec2, width: i32, height: i32) -> Self {
        Self::new(position.x as i32, position.y as i32, width, height)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Strict overlap: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        other.left() < self.right()
            && self.left() < other.right()
            && other.top() < self.bottom()
            && self.top() < other.bottom()
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// False when the right or bottom edge does not fit in an `i32`.
    pub fn edges_in_range(&self) -> bool {
        self.x.checked_add(self.width).is_some() && self.y.checked_add(self.height).is_some()
    }
}

/// True when a rotation swaps the footprint's width and height.
///
/// Only exact quarter and three-quarter turns count; any other angle keeps the
/// unrotated footprint.
pub fn swaps_axes(rotation_degrees: f32) -> bool {
    let degrees = rotation_degrees % 360.0;
    degrees == 90.0 || degrees == 270.0 || degrees == -90.0 || degrees == -270.0
}
