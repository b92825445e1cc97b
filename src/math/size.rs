//! 2D size type for window dimensions

use serde::{Deserialize, Serialize};

/// 2D size for width and height
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check if size is zero or negative in either dimension
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check that both dimensions are finite and non-negative
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }

    /// Clamp both dimensions to a lower bound
    #[inline]
    pub fn max(self, min: Size) -> Self {
        Self::new(self.width.max(min.width), self.height.max(min.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(-1.0, 10.0).is_empty());
        assert!(!Size::new(10.0, 10.0).is_empty());
    }

    #[test]
    fn test_size_is_valid() {
        assert!(Size::new(0.0, 0.0).is_valid());
        assert!(Size::new(400.0, 300.0).is_valid());
        assert!(!Size::new(-1.0, 300.0).is_valid());
        assert!(!Size::new(400.0, f32::NAN).is_valid());
    }

    #[test]
    fn test_size_max() {
        let clamped = Size::new(50.0, 500.0).max(Size::new(100.0, 100.0));
        assert!((clamped.width - 100.0).abs() < 0.001);
        assert!((clamped.height - 500.0).abs() < 0.001);
    }
}
