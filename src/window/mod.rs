//! Window state module
//!
//! Provides the per-window record, its construction config, the
//! renderable-content abstraction, and the owning collection.

mod record;
mod config;
mod content;
mod manager;

pub use record::{SavedGeometry, WindowRecord};
pub use config::WindowConfig;
pub use content::{Renderable, WindowContent};
pub use manager::WindowManager;

/// Unique window identifier
pub type WindowId = u64;
