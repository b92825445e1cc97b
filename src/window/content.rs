//! Renderable content abstraction
//!
//! The record's payload is polymorphic over anything the host can
//! render. The capability is a trait rather than a concrete component
//! type, so the crate stays independent of any one UI framework.

use std::fmt::Debug;
use std::sync::Arc;

/// Capability for values a window body can host
pub trait Renderable: Debug {
    /// Key identifying what the host should render (component name,
    /// route, asset id - whatever the rendering surface resolves)
    fn content_key(&self) -> &str;
}

/// Shared handle to a window's renderable payload
///
/// Cloning the record clones the handle, not the payload; the payload
/// is released when the last record referencing it is closed.
pub type WindowContent = Arc<dyn Renderable + Send + Sync>;

impl Renderable for String {
    fn content_key(&self) -> &str {
        self
    }
}

impl Renderable for &'static str {
    fn content_key(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_content_key() {
        let content: WindowContent = Arc::new("SYS_TERMINAL".to_string());
        assert_eq!(content.content_key(), "SYS_TERMINAL");
    }

    #[test]
    fn test_static_str_content_key() {
        let content: WindowContent = Arc::new("file-browser");
        assert_eq!(content.content_key(), "file-browser");
    }
}
