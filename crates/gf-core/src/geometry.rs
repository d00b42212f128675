use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A width/height pair in whole pixels: a sprite footprint or an arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: u32,
    /// Vertical extent.
    pub height: u32,
}

impl Size {
    /// Create a size from width and height.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Return `true` if either side is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The size as a float vector, for arithmetic against positions.
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Axis-aligned integer rectangle used for drawing and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Horizontal extent.
    pub width: u32,
    /// Vertical extent.
    pub height: u32,
}

impl BoundingBox {
    /// Project a float top-left position onto the pixel grid by truncation.
    pub fn from_position(position: Vec2, size: Size) -> Self {
        Self {
            x: position.x.trunc() as i32,
            y: position.y.trunc() as i32,
            width: size.width,
            height: size.height,
        }
    }

    /// Top-left corner as a float vector.
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    /// Return `true` if the point lies inside the box.
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && y >= self.y
            && i64::from(x) < self.right()
            && i64::from(y) < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_position_truncates() {
        let bbox = BoundingBox::from_position(Vec2::new(10.9, 3.2), Size::new(20, 20));
        assert_eq!((bbox.x, bbox.y), (10, 3));
        assert_eq!(bbox.right(), 30);
        assert_eq!(bbox.bottom(), 23);
    }

    #[test]
    fn contains_point_is_half_open() {
        let bbox = BoundingBox::from_position(Vec2::ZERO, Size::new(4, 4));
        assert!(bbox.contains_point(0, 0));
        assert!(bbox.contains_point(3, 3));
        assert!(!bbox.contains_point(4, 0));
        assert!(!bbox.contains_point(-1, 2));
    }

    #[test]
    fn size_display_and_empty() {
        assert_eq!(Size::new(800, 600).to_string(), "800x600");
        assert!(Size::new(0, 5).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }
}
