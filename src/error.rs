//! Error taxonomy for window operations

use thiserror::Error;

use crate::window::WindowId;

/// Chrome affordance that can be suppressed per window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowFeature {
    Close,
    Maximise,
    Minimise,
    Resize,
}

impl std::fmt::Display for WindowFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WindowFeature::Close => "close",
            WindowFeature::Maximise => "maximise",
            WindowFeature::Minimise => "minimise",
            WindowFeature::Resize => "resize",
        };
        f.write_str(name)
    }
}

/// Errors from window collection operations
#[derive(Clone, Debug, Error, PartialEq)]
pub enum WindowError {
    /// No live window with this id
    #[error("window {0} not found")]
    NotFound(WindowId),

    /// Caller-assigned id collides with an existing window
    #[error("window id {0} already in use")]
    IdAlreadyInUse(WindowId),

    /// Negative or non-finite dimensions
    #[error("invalid geometry: {width}x{height}")]
    InvalidGeometry { width: f32, height: f32 },

    /// The operation's affordance is suppressed for this window
    #[error("{feature} is disabled for window {id}")]
    FeatureDisabled { id: WindowId, feature: WindowFeature },

    /// Geometry mutations are rejected while maximized; the stored
    /// offset/size are the restorable pre-maximize values
    #[error("window {0} is maximized")]
    CurrentlyMaximized(WindowId),
}
