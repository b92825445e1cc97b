//! Window manager: lifecycle, stacking order, and focus

use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use crate::error::{WindowError, WindowFeature};
use crate::math::{Rect, Size, Vec2};
use super::{SavedGeometry, WindowConfig, WindowId, WindowRecord};

/// Offset applied when cascading windows opened without a position
const CASCADE_OFFSET: f32 = 50.0;

/// The owning collection for window records
///
/// Enforces the invariants the passive record cannot: a total
/// stacking order (z, then creation order), non-negative dimensions,
/// `initial` immutability, and restorable maximize geometry.
/// Minimization is tracked here as a hidden set - it is deliberately
/// not a record field, so a minimized window keeps its full geometry
/// and stacking rank for when it returns.
pub struct WindowManager {
    /// All live records by id
    windows: HashMap<WindowId, WindowRecord>,
    /// Windows currently hidden by minimize
    minimized: HashSet<WindowId>,
    /// Next manager-assigned id
    next_id: WindowId,
    /// Next creation-order index
    next_index: u32,
    /// Area used for centered placement and first-window default
    container: Rect,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create a manager with the default 1920x1080 container
    pub fn new() -> Self {
        Self::with_container(Rect::new(0.0, 0.0, 1920.0, 1080.0))
    }

    /// Create a manager for the given container area
    pub fn with_container(container: Rect) -> Self {
        Self {
            windows: HashMap::new(),
            minimized: HashSet::new(),
            next_id: 1,
            next_index: 0,
            container,
        }
    }

    /// Get the container area
    #[inline]
    pub fn container(&self) -> Rect {
        self.container
    }

    /// Update the container area (e.g. after a host resize)
    pub fn set_container(&mut self, container: Rect) {
        self.container = container;
    }

    /// Open a window
    ///
    /// Assigns id (unless the config carries one), creation index and
    /// `z_index = max(existing) + 1`, resolves placement, and sets
    /// `initial` equal to the resolved offset.
    pub fn open(&mut self, config: WindowConfig) -> Result<WindowId, WindowError> {
        if !config.size.is_valid() {
            return Err(WindowError::InvalidGeometry {
                width: config.size.width,
                height: config.size.height,
            });
        }

        let id = match config.id {
            Some(id) => {
                if self.windows.contains_key(&id) {
                    return Err(WindowError::IdAlreadyInUse(id));
                }
                // Keep assigned ids ahead of caller-chosen ones
                self.next_id = id
                    .checked_add(1)
                    .map_or(self.next_id, |n| self.next_id.max(n));
                id
            }
            None => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
        };

        let window_index = self.next_index;
        self.next_index += 1;

        let z_index = self.top_z() + 1;

        let offset = if config.start_centered {
            self.container.centered_position(config.size)
        } else {
            match config.position {
                Some(position) => position,
                None => self.default_position(config.size),
            }
        };

        let record = WindowRecord {
            id,
            window_index,
            z_index,
            offset,
            initial: offset,
            size: config.size,
            maximized: false,
            saved_geometry: None,
            disable_close: config.disable_close,
            disable_maximise: config.disable_maximise,
            disable_minimise: config.disable_minimise,
            disable_resize: config.disable_resize,
            unified_background: config.unified_background,
            start_centered: config.start_centered,
            content: config.content,
        };

        debug!(
            "open window {} at ({}, {}) size {}x{} z {}",
            id, offset.x, offset.y, config.size.width, config.size.height, z_index
        );

        self.windows.insert(id, record);
        Ok(id)
    }

    /// Placement for windows opened without a position: cascade from
    /// the most recently opened window, or center the first one
    fn default_position(&self, size: Size) -> Vec2 {
        let last_opened = self
            .windows
            .values()
            .max_by_key(|w| w.window_index)
            .map(|w| w.offset);

        match last_opened {
            Some(last) => last + Vec2::new(CASCADE_OFFSET, CASCADE_OFFSET),
            None => self.container.centered_position(size),
        }
    }

    /// Close a window, removing its record and releasing the content
    /// reference
    pub fn close(&mut self, id: WindowId) -> Result<WindowRecord, WindowError> {
        let record = self.windows.get(&id).ok_or(WindowError::NotFound(id))?;
        if !record.can_close() {
            return Err(WindowError::FeatureDisabled {
                id,
                feature: WindowFeature::Close,
            });
        }

        self.minimized.remove(&id);
        let record = self.windows.remove(&id).ok_or(WindowError::NotFound(id))?;
        debug!("close window {}", id);
        Ok(record)
    }

    /// Get a record by id
    pub fn get(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.get(&id)
    }

    /// Get a mutable record by id
    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord> {
        self.windows.get_mut(&id)
    }

    /// Iterate over all records in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.values()
    }

    /// Number of live windows (including minimized)
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    // =========================================================================
    // Stacking and focus
    // =========================================================================

    /// Highest z among live windows (0 when empty)
    fn top_z(&self) -> u32 {
        self.windows.values().map(|w| w.z_index).max().unwrap_or(0)
    }

    /// Raise a window to the top of the stacking order
    ///
    /// No-op when the window already wins stacking arbitration, so
    /// repeated focusing does not inflate z.
    pub fn focus(&mut self, id: WindowId) -> Result<(), WindowError> {
        if !self.windows.contains_key(&id) {
            return Err(WindowError::NotFound(id));
        }

        // Already wins stacking arbitration (including z ties broken
        // by creation order): nothing to raise
        let top_ranked = self
            .windows
            .values()
            .max_by_key(|w| (w.z_index, w.window_index))
            .map(|w| w.id);
        if top_ranked == Some(id) {
            return Ok(());
        }

        let top = self.top_z();
        if let Some(record) = self.windows.get_mut(&id) {
            record.z_index = top + 1;
            trace!("raise window {} to z {}", id, top + 1);
        }
        Ok(())
    }

    /// Topmost visible window: highest z, ties broken by creation
    /// order, minimized windows excluded
    pub fn focused(&self) -> Option<WindowId> {
        self.windows
            .values()
            .filter(|w| !self.minimized.contains(&w.id))
            .max_by_key(|w| (w.z_index, w.window_index))
            .map(|w| w.id)
    }

    /// Focus the next visible window in creation order, wrapping
    /// around; returns the newly focused id
    pub fn cycle_focus(&mut self) -> Option<WindowId> {
        let mut order: Vec<(u32, WindowId)> = self
            .windows
            .values()
            .filter(|w| !self.minimized.contains(&w.id))
            .map(|w| (w.window_index, w.id))
            .collect();
        order.sort_unstable();

        if order.is_empty() {
            return None;
        }

        let current = self.focused()?;
        let pos = order.iter().position(|&(_, id)| id == current)?;
        let (_, next) = order[(pos + 1) % order.len()];
        self.focus(next).ok()?;
        Some(next)
    }

    /// All windows in paint order (back to front)
    pub fn windows_by_z(&self) -> Vec<&WindowRecord> {
        let mut windows: Vec<&WindowRecord> = self.windows.values().collect();
        windows.sort_by_key(|w| (w.z_index, w.window_index));
        windows
    }

    /// Non-minimized windows in paint order
    pub fn visible_by_z(&self) -> Vec<&WindowRecord> {
        let mut windows: Vec<&WindowRecord> = self
            .windows
            .values()
            .filter(|w| !self.minimized.contains(&w.id))
            .collect();
        windows.sort_by_key(|w| (w.z_index, w.window_index));
        windows
    }

    /// Topmost visible window at a container position
    pub fn window_at(&self, pos: Vec2) -> Option<WindowId> {
        self.visible_by_z()
            .into_iter()
            .rev()
            .find(|w| w.rect().contains(pos))
            .map(|w| w.id)
    }

    // =========================================================================
    // Geometry mutation
    // =========================================================================

    /// Move a window (live drag mutation of `offset`)
    pub fn move_to(&mut self, id: WindowId, offset: Vec2) -> Result<(), WindowError> {
        let record = self.windows.get_mut(&id).ok_or(WindowError::NotFound(id))?;
        if record.maximized {
            return Err(WindowError::CurrentlyMaximized(id));
        }
        record.offset = offset;
        trace!("move window {} to ({}, {})", id, offset.x, offset.y);
        Ok(())
    }

    /// Resize a window
    pub fn resize(&mut self, id: WindowId, size: Size) -> Result<(), WindowError> {
        let record = self.windows.get_mut(&id).ok_or(WindowError::NotFound(id))?;
        if !record.can_resize() {
            return Err(WindowError::FeatureDisabled {
                id,
                feature: WindowFeature::Resize,
            });
        }
        if record.maximized {
            return Err(WindowError::CurrentlyMaximized(id));
        }
        if !size.is_valid() {
            return Err(WindowError::InvalidGeometry {
                width: size.width,
                height: size.height,
            });
        }
        record.size = size;
        trace!("resize window {} to {}x{}", id, size.width, size.height);
        Ok(())
    }

    // =========================================================================
    // Maximize / minimize
    // =========================================================================

    /// Maximize a window into the given full-area rectangle
    ///
    /// Stashes the live geometry in `saved_geometry` before
    /// substituting the area. `initial` is untouched. No-op when
    /// already maximized.
    pub fn maximize(&mut self, id: WindowId, area: Rect) -> Result<(), WindowError> {
        let record = self.windows.get_mut(&id).ok_or(WindowError::NotFound(id))?;
        if !record.can_maximise() {
            return Err(WindowError::FeatureDisabled {
                id,
                feature: WindowFeature::Maximise,
            });
        }
        if record.maximized {
            return Ok(());
        }

        record.saved_geometry = Some(SavedGeometry {
            offset: record.offset,
            size: record.size,
        });
        record.maximized = true;
        record.offset = area.position();
        record.size = area.size();
        debug!("maximize window {}", id);
        Ok(())
    }

    /// Return a maximized window to its saved geometry; no-op when
    /// not maximized
    pub fn restore_maximized(&mut self, id: WindowId) -> Result<(), WindowError> {
        let record = self.windows.get_mut(&id).ok_or(WindowError::NotFound(id))?;
        if !record.maximized {
            return Ok(());
        }

        record.maximized = false;
        if let Some(saved) = record.saved_geometry.take() {
            record.offset = saved.offset;
            record.size = saved.size;
        }
        debug!("restore window {}", id);
        Ok(())
    }

    /// Toggle between maximized and normal
    pub fn toggle_maximize(&mut self, id: WindowId, area: Rect) -> Result<(), WindowError> {
        let maximized = self
            .windows
            .get(&id)
            .ok_or(WindowError::NotFound(id))?
            .maximized;
        if maximized {
            self.restore_maximized(id)
        } else {
            self.maximize(id, area)
        }
    }

    /// Hide a window without disturbing its geometry or stacking rank
    pub fn minimize(&mut self, id: WindowId) -> Result<(), WindowError> {
        let record = self.windows.get(&id).ok_or(WindowError::NotFound(id))?;
        if !record.can_minimise() {
            return Err(WindowError::FeatureDisabled {
                id,
                feature: WindowFeature::Minimise,
            });
        }
        self.minimized.insert(id);
        debug!("minimize window {}", id);
        Ok(())
    }

    /// Return a minimized window to the visible set
    pub fn unminimize(&mut self, id: WindowId) -> Result<(), WindowError> {
        if !self.windows.contains_key(&id) {
            return Err(WindowError::NotFound(id));
        }
        self.minimized.remove(&id);
        Ok(())
    }

    /// Whether a window is currently hidden by minimize
    pub fn is_minimized(&self, id: WindowId) -> bool {
        self.minimized.contains(&id)
    }
}
