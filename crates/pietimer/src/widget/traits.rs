//! The `Widget` trait and the paint context handed to it.

use pietimer_core::Object;
use pietimer_core::logging::{PerfSpan, span_names, targets};
use pietimer_render::{Color, FrameStats, Rect, Renderer, Size};

use super::base::WidgetBase;
use super::events::WidgetEvent;
use super::geometry::SizeHint;

/// Context passed to [`Widget::paint`].
///
/// The renderer is already translated so that (0, 0) is the widget's top-left
/// corner.
pub struct PaintContext<'a> {
    renderer: &'a mut dyn Renderer,
    widget_rect: Rect,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context.
    pub fn new(renderer: &'a mut dyn Renderer, widget_rect: Rect) -> Self {
        Self {
            renderer,
            widget_rect,
        }
    }

    /// Get the renderer.
    #[inline]
    pub fn renderer(&mut self) -> &mut dyn Renderer {
        self.renderer
    }

    /// Get the widget's local rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }
}

/// The core widget trait.
pub trait Widget: Object + Send + Sync {
    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// The size this widget would like to be.
    fn size_hint(&self) -> SizeHint;

    /// Paint the widget in local coordinates.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    /// Handle an input event.
    ///
    /// Return `true` if the event was handled and should not propagate further.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }

    // =========================================================================
    // Provided accessors (delegate to WidgetBase)
    // =========================================================================

    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    fn size(&self) -> Size {
        self.widget_base().size()
    }

    fn rect(&self) -> Rect {
        self.widget_base().rect()
    }

    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    fn set_visible(&mut self, visible: bool) {
        self.widget_base_mut().set_visible(visible);
    }

    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.widget_base_mut().set_enabled(enabled);
    }

    fn needs_repaint(&self) -> bool {
        self.widget_base().needs_repaint()
    }
}

/// Render one frame containing `widget` at its geometry and clear its repaint
/// flag.
///
/// Hidden widgets produce an empty frame. The frame is cleared to transparent.
pub fn paint_widget<W: Widget + ?Sized>(widget: &mut W, renderer: &mut dyn Renderer) -> FrameStats {
    let _perf = PerfSpan::new(span_names::PAINT);
    let geometry = widget.geometry();
    renderer.begin_frame(Color::TRANSPARENT, geometry.size);

    if widget.is_visible() {
        renderer.save();
        renderer.translate(geometry.origin.x, geometry.origin.y);
        let mut ctx = PaintContext::new(&mut *renderer, widget.rect());
        widget.paint(&mut ctx);
        renderer.restore();
    } else {
        tracing::trace!(target: targets::WIDGET, "skipping paint of hidden widget");
    }

    widget.widget_base_mut().clear_repaint_flag();
    renderer.end_frame()
}
