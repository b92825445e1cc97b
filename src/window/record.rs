//! WindowRecord - per-window presentation state

use serde::{Deserialize, Serialize};

use crate::math::{Rect, Size, Vec2};
use super::{WindowContent, WindowId};

/// Geometry stashed on maximize and restored on un-maximize
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedGeometry {
    /// Pre-maximize top-left position
    pub offset: Vec2,
    /// Pre-maximize dimensions
    pub size: Size,
}

impl SavedGeometry {
    /// Saved geometry as a rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.offset, self.size)
    }
}

/// Presentation state of one window in a multi-window desktop UI
///
/// The record is a passive contract: the owning [`WindowManager`]
/// mutates `offset` during drag, `size` during resize, `z_index` on
/// focus changes, and `maximized`/`saved_geometry` on maximize
/// toggles. `initial` is set once at creation and never mutated.
///
/// The wire format is camelCase and flat (`offsetX`, `zIndex`,
/// `disableMaximise`, ...). Fields added by the second schema
/// revision default to false when absent, so records written under
/// the first revision still deserialize.
///
/// [`WindowManager`]: super::WindowManager
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "WireRecord", into = "WireRecord")]
pub struct WindowRecord {
    /// Unique identifier, assigned by the manager when the caller
    /// does not supply one
    pub id: WindowId,
    /// Creation/registration order among siblings; deterministic
    /// tie-breaker for stacking and focus cycling
    pub window_index: u32,
    /// Stacking order; higher paints above lower
    pub z_index: u32,
    /// Live top-left position, mutated as the window is dragged
    pub offset: Vec2,
    /// Position at creation time; immutable thereafter
    pub initial: Vec2,
    /// Live dimensions, mutated by resize
    pub size: Size,
    /// Whether the window occupies the maximized layout state
    pub maximized: bool,
    /// Restore slot populated while maximized
    pub saved_geometry: Option<SavedGeometry>,
    /// Suppress the close affordance/action
    pub disable_close: bool,
    /// Suppress the maximize affordance/action
    pub disable_maximise: bool,
    /// Suppress the minimize affordance/action
    pub disable_minimise: bool,
    /// Suppress resize affordances and resize handling
    pub disable_resize: bool,
    /// Styling: chrome and body share one background treatment
    pub unified_background: bool,
    /// Window was requested centered in its container at creation
    pub start_centered: bool,
    /// Renderable payload hosted in the window body; not serialized
    pub content: Option<WindowContent>,
}

impl WindowRecord {
    /// Current bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.offset, self.size)
    }

    /// The rectangle a restore would return to: the saved geometry
    /// while maximized, the live geometry otherwise
    pub fn restorable_rect(&self) -> Rect {
        match self.saved_geometry {
            Some(saved) => saved.rect(),
            None => self.rect(),
        }
    }

    /// Whether the close affordance should be offered
    #[inline]
    pub fn can_close(&self) -> bool {
        !self.disable_close
    }

    /// Whether the maximize affordance should be offered
    #[inline]
    pub fn can_maximise(&self) -> bool {
        !self.disable_maximise
    }

    /// Whether the minimize affordance should be offered
    #[inline]
    pub fn can_minimise(&self) -> bool {
        !self.disable_minimise
    }

    /// Whether resize handles should be offered
    #[inline]
    pub fn can_resize(&self) -> bool {
        !self.disable_resize
    }
}

/// Equality over the primitive fields; the opaque `content` handle
/// is excluded, matching the serialized form.
impl PartialEq for WindowRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.window_index == other.window_index
            && self.z_index == other.z_index
            && self.offset == other.offset
            && self.initial == other.initial
            && self.size == other.size
            && self.maximized == other.maximized
            && self.saved_geometry == other.saved_geometry
            && self.disable_close == other.disable_close
            && self.disable_maximise == other.disable_maximise
            && self.disable_minimise == other.disable_minimise
            && self.disable_resize == other.disable_resize
            && self.unified_background == other.unified_background
            && self.start_centered == other.start_centered
    }
}

/// Flat camelCase wire shape shared by both schema revisions
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRecord {
    #[serde(default)]
    id: WindowId,
    #[serde(default)]
    window_index: u32,
    z_index: u32,
    offset_x: f32,
    offset_y: f32,
    initial_x: f32,
    initial_y: f32,
    width: f32,
    height: f32,
    // Required by revision one, optional since revision two
    #[serde(default)]
    is_maximized: bool,
    #[serde(default)]
    saved_geometry: Option<SavedGeometry>,
    #[serde(default)]
    disable_close: bool,
    #[serde(default)]
    disable_maximise: bool,
    #[serde(default)]
    disable_minimise: bool,
    #[serde(default)]
    disable_resize: bool,
    #[serde(default)]
    unified_background: bool,
    #[serde(default)]
    start_centered: bool,
}

impl From<WireRecord> for WindowRecord {
    fn from(w: WireRecord) -> Self {
        Self {
            id: w.id,
            window_index: w.window_index,
            z_index: w.z_index,
            offset: Vec2::new(w.offset_x, w.offset_y),
            initial: Vec2::new(w.initial_x, w.initial_y),
            size: Size::new(w.width, w.height),
            maximized: w.is_maximized,
            saved_geometry: w.saved_geometry,
            disable_close: w.disable_close,
            disable_maximise: w.disable_maximise,
            disable_minimise: w.disable_minimise,
            disable_resize: w.disable_resize,
            unified_background: w.unified_background,
            start_centered: w.start_centered,
            content: None,
        }
    }
}

impl From<WindowRecord> for WireRecord {
    fn from(r: WindowRecord) -> Self {
        Self {
            id: r.id,
            window_index: r.window_index,
            z_index: r.z_index,
            offset_x: r.offset.x,
            offset_y: r.offset.y,
            initial_x: r.initial.x,
            initial_y: r.initial.y,
            width: r.size.width,
            height: r.size.height,
            is_maximized: r.maximized,
            saved_geometry: r.saved_geometry,
            disable_close: r.disable_close,
            disable_maximise: r.disable_maximise,
            disable_minimise: r.disable_minimise,
            disable_resize: r.disable_resize,
            unified_background: r.unified_background,
            start_centered: r.start_centered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn create_test_record() -> WindowRecord {
        WindowRecord {
            id: 1,
            window_index: 0,
            z_index: 1,
            offset: Vec2::new(10.0, 10.0),
            initial: Vec2::new(10.0, 10.0),
            size: Size::new(400.0, 300.0),
            maximized: false,
            saved_geometry: None,
            disable_close: false,
            disable_maximise: false,
            disable_minimise: false,
            disable_resize: false,
            unified_background: false,
            start_centered: false,
            content: None,
        }
    }

    #[test]
    fn test_record_rect() {
        let r = create_test_record();
        let rect = r.rect();
        assert!((rect.x - 10.0).abs() < 0.001);
        assert!((rect.y - 10.0).abs() < 0.001);
        assert!((rect.width - 400.0).abs() < 0.001);
        assert!((rect.height - 300.0).abs() < 0.001);
    }

    #[test]
    fn test_restorable_rect_prefers_saved_geometry() {
        let mut r = create_test_record();
        assert_eq!(r.restorable_rect(), r.rect());

        r.saved_geometry = Some(SavedGeometry {
            offset: Vec2::new(50.0, 60.0),
            size: Size::new(640.0, 480.0),
        });
        let restorable = r.restorable_rect();
        assert!((restorable.x - 50.0).abs() < 0.001);
        assert!((restorable.y - 60.0).abs() < 0.001);
        assert!((restorable.width - 640.0).abs() < 0.001);
    }

    #[test]
    fn test_affordance_predicates() {
        let mut r = create_test_record();
        assert!(r.can_close());
        assert!(r.can_maximise());
        assert!(r.can_minimise());
        assert!(r.can_resize());

        r.disable_close = true;
        r.disable_resize = true;
        assert!(!r.can_close());
        assert!(!r.can_resize());
        assert!(r.can_maximise());
    }

    #[test]
    fn test_round_trip_preserves_primitive_fields() {
        let mut r = create_test_record();
        r.z_index = 42;
        r.window_index = 3;
        r.maximized = true;
        r.saved_geometry = Some(SavedGeometry {
            offset: Vec2::new(10.0, 10.0),
            size: Size::new(400.0, 300.0),
        });
        r.disable_minimise = true;
        r.unified_background = true;
        r.content = Some(Arc::new("terminal"));

        let json = serde_json::to_string(&r).unwrap();
        let restored: WindowRecord = serde_json::from_str(&json).unwrap();

        // Equality excludes the content handle, which does not survive
        // serialization
        assert_eq!(restored, r);
        assert!(restored.content.is_none());
    }

    #[test]
    fn test_wire_format_is_flat_camel_case() {
        let r = create_test_record();
        let json = serde_json::to_value(&r).unwrap();

        assert_eq!(json["zIndex"], 1);
        assert_eq!(json["offsetX"], 10.0);
        assert_eq!(json["initialY"], 10.0);
        assert_eq!(json["width"], 400.0);
        assert_eq!(json["isMaximized"], false);
        assert_eq!(json["disableMaximise"], false);
    }

    #[test]
    fn test_revision_one_json_deserializes_with_defaults() {
        // Shape of the first schema revision: required isMaximized,
        // none of the later flags
        let json = r#"{
            "id": 7,
            "windowIndex": 2,
            "zIndex": 5,
            "offsetX": 100.0,
            "offsetY": 120.0,
            "initialX": 100.0,
            "initialY": 120.0,
            "width": 800.0,
            "height": 600.0,
            "isMaximized": true
        }"#;

        let r: WindowRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, 7);
        assert_eq!(r.z_index, 5);
        assert!(r.maximized);
        assert!(!r.disable_close);
        assert!(!r.disable_maximise);
        assert!(!r.disable_minimise);
        assert!(!r.disable_resize);
        assert!(!r.unified_background);
        assert!(!r.start_centered);
        assert!(r.saved_geometry.is_none());
    }
}
