//! Tracing vocabulary shared by the PieTimer crates.
//!
//! Everything is emitted through `tracing`. Libraries never install a
//! subscriber; applications do, and can filter by the [`targets`] below,
//! e.g. `RUST_LOG=pietimer::widget=debug,pietimer::animation=trace`.

/// Names of performance spans.
pub mod span_names {
    /// One animation tick of a timer widget.
    pub const TICK: &str = "pietimer::tick";
    /// One widget paint pass.
    pub const PAINT: &str = "pietimer::paint";
}

/// Log targets per subsystem.
pub mod targets {
    pub const OBJECT: &str = "pietimer_core::object";
    pub const SIGNAL: &str = "pietimer_core::signal";
    /// Interpolator start, stop and finish.
    pub const ANIMATION: &str = "pietimer::animation";
    /// Timer state transitions and rejected settings.
    pub const WIDGET: &str = "pietimer::widget";
}

/// Keeps a `pietimer::perf` span entered until dropped.
#[derive(Debug)]
pub struct PerfSpan {
    _entered: tracing::span::EnteredSpan,
}

impl PerfSpan {
    pub fn new(operation: &'static str) -> Self {
        let span = tracing::debug_span!(target: "pietimer::perf", "perf", operation);
        Self {
            _entered: span.entered(),
        }
    }
}
