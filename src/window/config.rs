//! Window configuration for creation

use crate::math::{Size, Vec2};
use super::{WindowContent, WindowId};

/// Configuration for opening a window
///
/// Only `size` is required. Everything else defaults to "feature
/// enabled": no flag set, id and position assigned by the manager.
#[derive(Clone, Debug, Default)]
pub struct WindowConfig {
    /// Caller-assigned identifier (None = manager assigns one)
    pub id: Option<WindowId>,
    /// Initial position (None = auto-cascade, or centered when
    /// `start_centered` is set)
    pub position: Option<Vec2>,
    /// Initial size
    pub size: Size,
    /// Renderable payload for the window body
    pub content: Option<WindowContent>,
    /// Suppress the close affordance
    pub disable_close: bool,
    /// Suppress the maximize affordance
    pub disable_maximise: bool,
    /// Suppress the minimize affordance
    pub disable_minimise: bool,
    /// Suppress resize handling
    pub disable_resize: bool,
    /// Chrome and body share one background treatment
    pub unified_background: bool,
    /// Center in the container instead of using `position`
    pub start_centered: bool,
}

impl WindowConfig {
    /// Config with the given size and everything else defaulted
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            ..Default::default()
        }
    }
}
