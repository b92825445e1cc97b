//! WASM exports for the window collection
//!
//! Provides wasm-bindgen exports wrapping [`WindowManager`] with a
//! JS-friendly API: numeric arguments in, JSON snapshots out.

use wasm_bindgen::prelude::*;

use crate::error::WindowError;
use crate::math::{Rect, Size, Vec2};
use crate::window::{WindowConfig, WindowId, WindowManager};

fn to_js(err: WindowError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Window collection controller for WASM hosts
#[wasm_bindgen]
pub struct DesktopWindows {
    manager: WindowManager,
}

#[wasm_bindgen]
impl DesktopWindows {
    /// Create a controller with the given container dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            manager: WindowManager::with_container(Rect::new(0.0, 0.0, width, height)),
        }
    }

    /// Update the container area after a host resize
    #[wasm_bindgen]
    pub fn set_container(&mut self, width: f32, height: f32) {
        self.manager.set_container(Rect::new(0.0, 0.0, width, height));
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Open a window; negative x/y mean "no position" (auto-placement)
    #[wasm_bindgen]
    #[allow(clippy::too_many_arguments)]
    pub fn open_window(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        has_position: bool,
        start_centered: bool,
    ) -> Result<u64, JsValue> {
        let config = WindowConfig {
            position: has_position.then_some(Vec2::new(x, y)),
            size: Size::new(width, height),
            start_centered,
            ..Default::default()
        };
        self.manager.open(config).map_err(to_js)
    }

    /// Close a window
    #[wasm_bindgen]
    pub fn close_window(&mut self, id: u64) -> Result<(), JsValue> {
        self.manager.close(id).map(|_| ()).map_err(to_js)
    }

    // =========================================================================
    // Focus and stacking
    // =========================================================================

    /// Raise a window to the top of the stacking order
    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: u64) -> Result<(), JsValue> {
        self.manager.focus(id).map_err(to_js)
    }

    /// Get the focused window id (0 when none)
    #[wasm_bindgen]
    pub fn focused_window(&self) -> u64 {
        self.manager.focused().unwrap_or(0)
    }

    /// Focus the next window in creation order (0 when none)
    #[wasm_bindgen]
    pub fn cycle_focus(&mut self) -> u64 {
        self.manager.cycle_focus().unwrap_or(0)
    }

    /// Topmost visible window at a container position (0 when none)
    #[wasm_bindgen]
    pub fn window_at(&self, x: f32, y: f32) -> u64 {
        self.manager.window_at(Vec2::new(x, y)).unwrap_or(0)
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Move a window to a new offset
    #[wasm_bindgen]
    pub fn move_window(&mut self, id: u64, x: f32, y: f32) -> Result<(), JsValue> {
        self.manager.move_to(id, Vec2::new(x, y)).map_err(to_js)
    }

    /// Resize a window
    #[wasm_bindgen]
    pub fn resize_window(&mut self, id: u64, width: f32, height: f32) -> Result<(), JsValue> {
        self.manager.resize(id, Size::new(width, height)).map_err(to_js)
    }

    /// Maximize a window into the full container area
    #[wasm_bindgen]
    pub fn maximize_window(&mut self, id: u64) -> Result<(), JsValue> {
        let area = self.manager.container();
        self.manager.maximize(id, area).map_err(to_js)
    }

    /// Restore a maximized window to its saved geometry
    #[wasm_bindgen]
    pub fn restore_window(&mut self, id: u64) -> Result<(), JsValue> {
        self.manager.restore_maximized(id).map_err(to_js)
    }

    /// Minimize (hide) a window
    #[wasm_bindgen]
    pub fn minimize_window(&mut self, id: u64) -> Result<(), JsValue> {
        self.manager.minimize(id).map_err(to_js)
    }

    /// Return a minimized window to the visible set
    #[wasm_bindgen]
    pub fn unminimize_window(&mut self, id: u64) -> Result<(), JsValue> {
        self.manager.unminimize(id).map_err(to_js)
    }

    /// Whether a window is minimized
    #[wasm_bindgen]
    pub fn is_minimized(&self, id: u64) -> bool {
        self.manager.is_minimized(id)
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// All windows in paint order as JSON
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        serde_json::to_string(&self.manager.windows_by_z())
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Visible (non-minimized) windows in paint order as JSON
    #[wasm_bindgen]
    pub fn get_visible_json(&self) -> String {
        serde_json::to_string(&self.manager.visible_by_z())
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// One window as JSON ("null" when the id is dead)
    #[wasm_bindgen]
    pub fn get_window_json(&self, id: WindowId) -> String {
        serde_json::to_string(&self.manager.get(id)).unwrap_or_else(|_| "null".to_string())
    }
}
