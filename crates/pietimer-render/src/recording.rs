//! A renderer that records draw calls into a display list.

use crate::renderer::{FrameStats, RenderStateStack, Renderer};
use crate::types::{Color, Rect, Size};

const RENDER_TARGET: &str = "pietimer_render";

/// A recorded drawing operation, in device coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Solid rectangle fill.
    FillRect { rect: Rect, color: Color },
    /// Rectangle outline.
    StrokeRect { rect: Rect, color: Color, width: f32 },
    /// Ellipse inscribed in `rect`.
    FillEllipse { rect: Rect, color: Color },
    /// Pie slice of the ellipse inscribed in `rect`, angles in degrees.
    FillPie {
        rect: Rect,
        start_angle: f32,
        span_angle: f32,
        color: Color,
    },
    /// A text label centered in `rect`.
    DrawText {
        rect: Rect,
        text: String,
        color: Color,
    },
}

impl DrawCommand {
    /// The fill or stroke color of this command.
    pub fn color(&self) -> Color {
        match self {
            Self::FillRect { color, .. }
            | Self::StrokeRect { color, .. }
            | Self::FillEllipse { color, .. }
            | Self::FillPie { color, .. }
            | Self::DrawText { color, .. } => *color,
        }
    }

    /// The bounding rectangle of this command.
    pub fn rect(&self) -> Rect {
        match self {
            Self::FillRect { rect, .. }
            | Self::StrokeRect { rect, .. }
            | Self::FillEllipse { rect, .. }
            | Self::FillPie { rect, .. }
            | Self::DrawText { rect, .. } => *rect,
        }
    }
}

/// Records every draw call of a frame instead of rasterizing it.
///
/// Commands from the last frame stay available through
/// [`commands`](Self::commands) until the next [`begin_frame`](Renderer::begin_frame).
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
    state: RenderStateStack,
    in_frame: bool,
    frames: u64,
}

impl RecordingRenderer {
    /// Create an idle recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    fn record(&mut self, command: DrawCommand) {
        if !self.in_frame {
            tracing::warn!(target: RENDER_TARGET, ?command, "draw call outside of a frame");
        }
        self.commands.push(command);
    }
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self, clear_color: Color, viewport_size: Size) {
        if self.in_frame {
            tracing::warn!(target: RENDER_TARGET, "begin_frame called twice without end_frame");
        }
        tracing::trace!(
            target: RENDER_TARGET,
            frame = self.frames,
            ?clear_color,
            ?viewport_size,
            "begin frame"
        );
        self.commands.clear();
        self.state.reset();
        self.in_frame = true;
    }

    fn end_frame(&mut self) -> FrameStats {
        if !self.in_frame {
            tracing::warn!(target: RENDER_TARGET, "end_frame called without begin_frame");
        }
        if self.state.depth() != 0 {
            tracing::warn!(
                target: RENDER_TARGET,
                depth = self.state.depth(),
                "frame ended with unbalanced save/restore"
            );
        }
        self.in_frame = false;
        self.frames += 1;

        let stats = FrameStats {
            draw_calls: self.commands.len() as u32,
            max_state_depth: self.state.max_depth() as u32,
        };
        tracing::trace!(target: RENDER_TARGET, draw_calls = stats.draw_calls, "frame recorded");
        stats
    }

    fn save(&mut self) {
        self.state.save();
    }

    fn restore(&mut self) {
        if !self.state.restore() {
            tracing::warn!(target: RENDER_TARGET, "restore called with empty state stack");
        }
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.state.translate(tx, ty);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rect = self.state.map_rect(rect);
        self.record(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        let rect = self.state.map_rect(rect);
        self.record(DrawCommand::StrokeRect { rect, color, width });
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        let rect = self.state.map_rect(rect);
        self.record(DrawCommand::FillEllipse { rect, color });
    }

    fn fill_pie(&mut self, rect: Rect, start_angle: f32, span_angle: f32, color: Color) {
        let rect = self.state.map_rect(rect);
        self.record(DrawCommand::FillPie {
            rect,
            start_angle,
            span_angle,
            color,
        });
    }

    fn draw_text(&mut self, rect: Rect, text: &str, color: Color) {
        let rect = self.state.map_rect(rect);
        self.record(DrawCommand::DrawText {
            rect,
            text: text.to_owned(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order_with_translation() {
        let mut renderer = RecordingRenderer::new();
        renderer.begin_frame(Color::TRANSPARENT, Size::new(50.0, 50.0));
        renderer.fill_rect(Rect::new(0.0, 0.0, 50.0, 50.0), Color::GRAY);
        renderer.save();
        renderer.translate(10.0, 20.0);
        renderer.fill_ellipse(Rect::new(0.0, 0.0, 5.0, 5.0), Color::RED);
        renderer.restore();
        renderer.draw_text(Rect::new(0.0, 0.0, 50.0, 50.0), "go", Color::BLACK);
        let stats = renderer.end_frame();

        assert_eq!(stats.draw_calls, 3);
        assert_eq!(stats.max_state_depth, 1);
        let commands = renderer.commands();
        assert_eq!(commands[1].rect(), Rect::new(10.0, 20.0, 5.0, 5.0));
        assert_eq!(commands[1].color(), Color::RED);
        assert_eq!(commands[2].rect(), Rect::new(0.0, 0.0, 50.0, 50.0));
        assert!(matches!(&commands[2], DrawCommand::DrawText { text, .. } if text == "go"));
    }

    #[test]
    fn test_begin_frame_clears_previous_commands() {
        let mut renderer = RecordingRenderer::new();
        renderer.begin_frame(Color::WHITE, Size::new(10.0, 10.0));
        renderer.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED);
        renderer.end_frame();
        assert_eq!(renderer.commands().len(), 1);

        renderer.begin_frame(Color::WHITE, Size::new(10.0, 10.0));
        assert!(renderer.commands().is_empty());
        assert_eq!(renderer.end_frame().draw_calls, 0);
    }

    #[test]
    fn test_draw_outside_frame_is_still_recorded() {
        let _guard = tracing::subscriber::set_default(
            tracing_subscriber::fmt().with_test_writer().finish(),
        );
        let mut renderer = RecordingRenderer::new();
        renderer.stroke_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK, 1.0);
        renderer.restore();
        assert_eq!(renderer.commands().len(), 1);
    }
}
