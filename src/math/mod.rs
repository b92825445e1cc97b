//! Core geometry types for window placement
//!
//! These types cover the positioning and sizing math the window
//! collection needs: live offsets, dimensions, and the area
//! rectangles used for maximize and centered placement.

mod vec2;
mod size;
mod rect;

pub use vec2::Vec2;
pub use size::Size;
pub use rect::Rect;
