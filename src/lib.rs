//! Window state management for a desktop-style UI
//!
//! This crate provides the window model for a multi-window,
//! desktop-like interface:
//! - Per-window records (position, size, z-order, maximize state, chrome flags)
//! - The owning collection (open/close, focus, stacking, maximize/minimize)
//! - Geometry primitives for placement math
//!
//! ## Architecture
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`, `Rect`)
//! - [`window`]: The [`WindowRecord`] contract and its [`WindowManager`]
//!
//! ## Example
//!
//! ```rust
//! use deskwin::{Rect, Size, Vec2, WindowConfig, WindowManager};
//!
//! let mut wm = WindowManager::new();
//!
//! let id = wm.open(WindowConfig {
//!     position: Some(Vec2::new(100.0, 100.0)),
//!     size: Size::new(800.0, 600.0),
//!     ..Default::default()
//! })?;
//!
//! wm.move_to(id, Vec2::new(240.0, 160.0))?;
//! wm.maximize(id, Rect::new(0.0, 0.0, 1920.0, 1080.0))?;
//! wm.restore_maximized(id)?;
//! # Ok::<(), deskwin::WindowError>(())
//! ```
//!
//! ## Design Principles
//!
//! 1. **Passive contract, active owner**: the record carries no
//!    behavior; every invariant (stacking order, geometry bounds,
//!    restore slots) is enforced by the manager
//! 2. **Pure Rust core**: no UI-framework dependency; window content
//!    is an opaque [`Renderable`] capability
//! 3. **Stable wire shape**: records serialize to a flat camelCase
//!    contract, and fields added by later schema revisions default
//!    when absent

pub mod math;
pub mod window;

mod error;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use error::{WindowError, WindowFeature};
pub use math::{Rect, Size, Vec2};
pub use window::{
    Renderable, SavedGeometry, WindowConfig, WindowContent, WindowId, WindowManager, WindowRecord,
};
