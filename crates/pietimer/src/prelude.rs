//! Commonly used types, for glob import.
//!
//! ```
//! use pietimer::prelude::*;
//! ```

pub use pietimer_core::{Object, ObjectId, Property, Signal, init_global_registry};
pub use pietimer_render::{Color, Point, Rect, Renderer, Size};

pub use crate::animation::{Easing, Interpolator};
pub use crate::config::PieTimerConfig;
pub use crate::error::PieTimerError;
pub use crate::widget::{Key, SizeHint, Widget, WidgetEvent, paint_widget};
pub use crate::widget::widgets::{PieTimerButton, PieTimerState};
