//! Concrete widgets.

mod pie_timer_button;

pub use pie_timer_button::{
    DEFAULT_CYCLE_DURATION_MS, DEFAULT_SIZE, FULL_CIRCLE, PieTimerButton, PieTimerState,
};
