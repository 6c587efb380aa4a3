//! Animation support for PieTimer widgets.
//!
//! Animations are driven by explicit ticks rather than a wall clock. A widget
//! owns one [`Interpolator`] per animated value, advances it from its `tick`
//! method, and handles the [`InterpolationEvent`]s it returns.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use pietimer::animation::{Easing, Interpolator};
//!
//! let mut sweep = Interpolator::<i32>::new();
//! sweep.set_easing(Easing::EaseOut);
//! sweep.start(0, 360, Duration::from_millis(100));
//! sweep.advance(Duration::from_millis(50));
//! assert_eq!(*sweep.value(), 270);
//! ```

mod easing;
mod interpolator;

pub use easing::{Easing, ease};
pub use interpolator::{Interpolate, InterpolationEvent, InterpolationStep, Interpolator};
