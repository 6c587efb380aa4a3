//! Drawing primitives and renderer interface for PieTimer.
//!
//! Widgets draw through the [`Renderer`] trait, which exposes the handful of
//! 2D primitives a pie-style control needs: rectangles, ellipses, pie slices
//! and text labels. The host toolkit supplies the real backend.
//! [`RecordingRenderer`] is a backend that records a display list instead of
//! rasterizing, which is what headless hosts and tests use.
//!
//! # Example
//!
//! ```
//! use pietimer_render::{Color, DrawCommand, RecordingRenderer, Rect, Renderer, Size};
//!
//! let mut renderer = RecordingRenderer::new();
//! renderer.begin_frame(Color::WHITE, Size::new(100.0, 100.0));
//! renderer.fill_pie(Rect::new(0.0, 0.0, 100.0, 100.0), 180.0, -90.0, Color::RED);
//! let stats = renderer.end_frame();
//!
//! assert_eq!(stats.draw_calls, 1);
//! assert!(matches!(renderer.commands()[0], DrawCommand::FillPie { .. }));
//! ```

mod recording;
mod renderer;
mod types;

pub use recording::{DrawCommand, RecordingRenderer};
pub use renderer::{FrameStats, RenderStateStack, Renderer};
pub use types::{Color, Point, Rect, Size};
