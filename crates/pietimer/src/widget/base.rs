//! State shared by every widget.

use pietimer_core::{Object, ObjectBase, ObjectId, ObjectResult};
use pietimer_render::{Point, Rect, Size};

/// Identity, geometry and interaction flags of a widget.
///
/// Widgets embed one of these and hand it out through
/// [`Widget::widget_base`](super::Widget::widget_base). Every setter that
/// changes what the widget looks like raises the repaint flag.
pub struct WidgetBase {
    object: ObjectBase,
    geometry: Rect,
    fixed_size: Option<Size>,
    visible: bool,
    enabled: bool,
    hovered: bool,
    /// A mouse button or activation key is held down on the widget.
    pressed: bool,
    needs_repaint: bool,
}

impl WidgetBase {
    /// Register a new widget of type `T`. It starts visible, enabled, at
    /// zero size and waiting for its first paint.
    pub fn new<T: Object>() -> Self {
        Self {
            object: ObjectBase::new::<T>(),
            geometry: Rect::ZERO,
            fixed_size: None,
            visible: true,
            enabled: true,
            hovered: false,
            pressed: false,
            needs_repaint: true,
        }
    }

    #[inline]
    pub fn object_id(&self) -> ObjectId {
        self.object.id()
    }

    pub fn parent_id(&self) -> Option<ObjectId> {
        self.object.parent()
    }

    pub fn set_parent(&self, parent: Option<ObjectId>) -> ObjectResult<()> {
        self.object.set_parent(parent)
    }

    /// Position in the parent plus size.
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Move and resize. While a fixed size is set only the position applies.
    pub fn set_geometry(&mut self, rect: Rect) {
        let size = self.fixed_size.unwrap_or(rect.size);
        let rect = Rect { size, ..rect };
        if rect != self.geometry {
            self.geometry = rect;
            self.needs_repaint = true;
        }
    }

    /// Pin the size. The widget is resized right away and later resizes are
    /// ignored.
    pub fn set_fixed_size(&mut self, size: Size) {
        self.fixed_size = Some(size);
        self.set_geometry(self.geometry);
    }

    #[inline]
    pub fn fixed_size(&self) -> Option<Size> {
        self.fixed_size
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// The widget's own rectangle, with its origin at (0, 0).
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            origin: Point::ZERO,
            size: self.geometry.size,
        }
    }

    /// Whether `point`, in widget coordinates, is on the widget.
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        self.rect().contains(point)
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.needs_repaint = true;
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable input. Disabling cancels a held press.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.pressed &= enabled;
            self.needs_repaint = true;
        }
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.needs_repaint = true;
        }
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        if self.pressed != pressed {
            self.pressed = pressed;
            self.needs_repaint = true;
        }
    }

    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Ask for a repaint on the next frame.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    pub(crate) fn clear_repaint_flag(&mut self) {
        self.needs_repaint = false;
    }
}

impl Object for WidgetBase {
    fn object_id(&self) -> ObjectId {
        self.object.id()
    }
}
