//! Widget layer for PieTimer.
//!
//! This is a headless widget layer: widgets keep their own state, react to
//! [`WidgetEvent`]s and time ticks from the host, and draw through the
//! [`Renderer`](pietimer_render::Renderer) trait. Window creation and the
//! event loop belong to the host toolkit.

pub mod animation;
mod base;
mod events;
mod geometry;
mod traits;
pub mod widgets;

pub use base::WidgetBase;
pub use events::{
    EventBase, Key, KeyPressEvent, KeyReleaseEvent, MouseButton, MousePressEvent,
    MouseReleaseEvent, WidgetEvent,
};
pub use geometry::SizeHint;
pub use traits::{PaintContext, Widget, paint_widget};
