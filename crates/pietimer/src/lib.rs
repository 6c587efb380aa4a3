//! PieTimer - a push button that sweeps a pie countdown and fades out.
//!
//! This is the umbrella crate. It re-exports the core object, signal and
//! property systems, exposes the drawing types under [`render`], and provides
//! the animation engine, the widget layer and [`PieTimerButton`] itself.
//!
//! The widget is headless: the host feeds it input events and frame ticks and
//! hands it a [`Renderer`](render::Renderer) to paint with.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use pietimer::prelude::*;
//! use pietimer::render::{DrawCommand, RecordingRenderer};
//!
//! init_global_registry();
//!
//! let mut button = PieTimerButton::new(Color::TRANSPARENT, Color::RED)
//!     .with_cycle_duration_ms(1000)?;
//! button.click();
//! button.tick(Duration::from_millis(450));
//!
//! let mut renderer = RecordingRenderer::new();
//! paint_widget(&mut button, &mut renderer);
//! assert!(matches!(
//!     renderer.commands()[1],
//!     DrawCommand::FillPie { span_angle, .. } if span_angle == -180.0
//! ));
//! # Ok::<(), pietimer::PieTimerError>(())
//! ```

pub use pietimer_core::*;

/// Geometry, colors and the renderer interface.
pub mod render {
    pub use pietimer_render::*;
}

pub mod config;
mod error;
pub mod prelude;
pub mod widget;

pub use config::{ConfigError, ConfigResult, PieTimerConfig};
pub use error::{PieTimerError, Result};
pub use widget::animation;
pub use widget::widgets::{PieTimerButton, PieTimerState};
