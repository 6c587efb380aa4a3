//! Core renderer trait defining the 2D drawing interface.
//!
//! Angles passed to [`Renderer::fill_pie`] are in degrees. Zero degrees is the
//! 3 o'clock position and positive spans run counter-clockwise, so a pie that
//! starts at 9 o'clock and sweeps clockwise uses a start of `180.0` and a
//! negative span.

use crate::types::{Color, Point, Rect, Size};

/// Statistics from a frame render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Number of draw calls submitted.
    pub draw_calls: u32,
    /// Deepest save/restore nesting reached during the frame.
    pub max_state_depth: u32,
}

/// The core 2D rendering trait.
///
/// # Frame Lifecycle
///
/// ```ignore
/// renderer.begin_frame(clear_color, viewport_size);
///
/// renderer.save();
/// renderer.translate(10.0, 10.0);
/// renderer.fill_rect(rect, Color::RED);
/// renderer.restore();
///
/// let stats = renderer.end_frame();
/// ```
pub trait Renderer {
    /// Begin a new frame, cleared to `clear_color`.
    fn begin_frame(&mut self, clear_color: Color, viewport_size: Size);

    /// End the current frame and return its statistics.
    fn end_frame(&mut self) -> FrameStats;

    /// Save the current state (translation) onto the stack.
    fn save(&mut self);

    /// Restore the most recently saved state.
    ///
    /// Restoring with an empty stack is a no-op.
    fn restore(&mut self);

    /// Translate all subsequent drawing by `(tx, ty)`.
    fn translate(&mut self, tx: f32, ty: f32);

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline a rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Fill the ellipse inscribed in `rect`.
    fn fill_ellipse(&mut self, rect: Rect, color: Color);

    /// Fill a pie slice of the ellipse inscribed in `rect`.
    ///
    /// `start_angle` and `span_angle` are in degrees.
    fn fill_pie(&mut self, rect: Rect, start_angle: f32, span_angle: f32, color: Color);

    /// Draw a single line of text centered in `rect`.
    fn draw_text(&mut self, rect: Rect, text: &str, color: Color);
}

/// Translation stack shared by renderer implementations.
#[derive(Debug, Clone, Default)]
pub struct RenderStateStack {
    stack: Vec<Point>,
    current: Point,
    max_depth: usize,
}

impl RenderStateStack {
    /// Create an empty stack with no translation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push the current translation.
    pub fn save(&mut self) {
        self.stack.push(self.current);
        self.max_depth = self.max_depth.max(self.stack.len());
    }

    /// Pop the last saved translation. Returns `false` if nothing was saved.
    pub fn restore(&mut self) -> bool {
        match self.stack.pop() {
            Some(offset) => {
                self.current = offset;
                true
            }
            None => false,
        }
    }

    /// Reset to no translation and clear the stack.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.current = Point::ZERO;
        self.max_depth = 0;
    }

    /// Accumulate a translation.
    pub fn translate(&mut self, tx: f32, ty: f32) {
        self.current.x += tx;
        self.current.y += ty;
    }

    /// Map a rectangle from local to device coordinates.
    #[inline]
    pub fn map_rect(&self, rect: Rect) -> Rect {
        rect.offset(self.current.x, self.current.y)
    }

    /// Current nesting depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Deepest nesting seen since the last reset.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
