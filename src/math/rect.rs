//! Axis-aligned rectangle type

use serde::{Deserialize, Serialize};
use super::{Size, Vec2};

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create from position and size
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Size) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Get position (top-left corner)
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get size
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    /// Top-left position that centers `size` inside this rectangle
    pub fn centered_position(&self, size: Size) -> Vec2 {
        let c = self.center();
        Vec2::new(c.x - size.width / 2.0, c.y - size.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_center() {
        let r = Rect::new(100.0, 200.0, 50.0, 30.0);
        let c = r.center();
        assert!((c.x - 125.0).abs() < 0.001);
        assert!((c.y - 215.0).abs() < 0.001);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(Vec2::new(50.0, 40.0)));
        assert!(!rect.contains(Vec2::new(5.0, 40.0)));
        assert!(!rect.contains(Vec2::new(50.0, 100.0)));
    }

    #[test]
    fn test_rect_centered_position() {
        let area = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let pos = area.centered_position(Size::new(400.0, 300.0));
        assert!((pos.x - 760.0).abs() < 0.001);
        assert!((pos.y - 390.0).abs() < 0.001);
    }

    #[test]
    fn test_rect_from_pos_size() {
        let r = Rect::from_pos_size(Vec2::new(10.0, 20.0), Size::new(30.0, 40.0));
        assert!((r.x - 10.0).abs() < 0.001);
        assert!((r.y - 20.0).abs() < 0.001);
        assert!((r.width - 30.0).abs() < 0.001);
        assert!((r.height - 40.0).abs() < 0.001);
        assert_eq!(r.position(), Vec2::new(10.0, 20.0));
        assert_eq!(r.size(), Size::new(30.0, 40.0));
    }
}
