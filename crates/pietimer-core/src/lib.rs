//! Core systems for PieTimer.
//!
//! This crate provides the foundation the widget layer is built on:
//!
//! - **Object Model**: Stable object IDs and parent-child links
//! - **Signal/Slot System**: Type-safe, synchronous change notification
//! - **Property System**: Values with change detection
//! - **Logging**: `tracing` targets, span names and a perf span guard
//!
//! # Signal/Slot Example
//!
//! ```
//! use pietimer_core::Signal;
//!
//! let angle_changed = Signal::<i32>::new();
//!
//! let conn_id = angle_changed.connect(|angle| {
//!     println!("Angle is now {} degrees", angle);
//! });
//!
//! angle_changed.emit(90);
//! angle_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use pietimer_core::{Property, Signal};
//!
//! struct Dial {
//!     angle: Property<i32>,
//!     angle_changed: Signal<i32>,
//! }
//!
//! impl Dial {
//!     fn rotate_to(&self, angle: i32) {
//!         if self.angle.set(angle) {
//!             self.angle_changed.emit(angle);
//!         }
//!     }
//! }
//!
//! let dial = Dial { angle: Property::new(0), angle_changed: Signal::new() };
//! dial.rotate_to(45);
//! assert_eq!(dial.angle.get(), 45);
//! ```

pub mod logging;
pub mod object;
pub mod property;
pub mod signal;

pub use logging::PerfSpan;
pub use object::{
    Object, ObjectBase, ObjectError, ObjectId, ObjectRegistry, ObjectResult, global_registry,
    init_global_registry,
};
pub use property::Property;
pub use signal::{ConnectionId, Signal};
