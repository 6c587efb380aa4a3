//! Tick-driven value interpolation.
//!
//! An [`Interpolator`] moves a value from a start to an end over a fixed
//! duration. It has no clock of its own: the owner advances it explicitly with
//! the time elapsed since the previous frame, and reacts to the
//! [`InterpolationEvent`]s each advance produces.

use std::fmt::Debug;
use std::time::Duration;

use pietimer_core::logging::targets;
use pietimer_render::Color;

use super::easing::{Easing, ease};

/// A value that can be interpolated between two endpoints.
pub trait Interpolate: Clone + PartialEq + Debug + Default + Send + Sync + 'static {
    /// The value at progress `t` (0.0 to 1.0, already eased) from `self` to `to`.
    fn interpolate(&self, to: &Self, t: f32) -> Self;
}

impl Interpolate for i32 {
    /// Truncates toward zero, so an integer sweep only reaches its end value
    /// once progress is complete.
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        let span = (*to as f64) - (*self as f64);
        *self + (span * t as f64) as i32
    }
}

impl Interpolate for Color {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        self.lerp(*to, t)
    }
}

/// Something that happened during a single [`Interpolator::advance`].
#[derive(Debug, Clone, PartialEq)]
pub enum InterpolationEvent<T> {
    /// The interpolated value changed to the carried value.
    ValueChanged(T),
    /// The interpolation reached its end value and stopped.
    Finished,
}

/// The result of advancing an interpolator.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationStep<T> {
    /// Events in the order they happened.
    pub events: Vec<InterpolationEvent<T>>,
    /// Time past the end of the interpolation that this advance did not use.
    pub overshoot: Duration,
}

impl<T> InterpolationStep<T> {
    fn idle() -> Self {
        Self {
            events: Vec::new(),
            overshoot: Duration::ZERO,
        }
    }

    /// Whether nothing happened.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Whether the interpolation finished during this step.
    pub fn finished(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, InterpolationEvent::Finished))
    }
}

/// Interpolates a value between two endpoints over a duration.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use pietimer::animation::{InterpolationEvent, Interpolator};
///
/// let mut sweep = Interpolator::<i32>::new();
/// sweep.start(0, 360, Duration::from_millis(900));
///
/// let step = sweep.advance(Duration::from_millis(450));
/// assert_eq!(step.events, vec![InterpolationEvent::ValueChanged(180)]);
///
/// let step = sweep.advance(Duration::from_millis(500));
/// assert!(step.finished());
/// assert_eq!(step.overshoot, Duration::from_millis(50));
/// assert_eq!(sweep.value(), &360);
/// ```
#[derive(Debug, Clone)]
pub struct Interpolator<T> {
    start: T,
    end: T,
    current: T,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
    running: bool,
}

impl<T: Interpolate> Default for Interpolator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Interpolate> Interpolator<T> {
    /// Create a stopped interpolator holding `T::default()`.
    pub fn new() -> Self {
        Self {
            start: T::default(),
            end: T::default(),
            current: T::default(),
            elapsed: Duration::ZERO,
            duration: Duration::ZERO,
            easing: Easing::Linear,
            running: false,
        }
    }

    /// Set the easing used by subsequent advances.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Start (or restart) interpolating from `from` to `to` over `duration`.
    ///
    /// Any interpolation already in progress is abandoned without reporting
    /// completion. The current value jumps to `from`.
    pub fn start(&mut self, from: T, to: T, duration: Duration) {
        if self.running {
            tracing::trace!(
                target: targets::ANIMATION,
                elapsed_ms = millis(self.elapsed),
                "restarting running interpolation"
            );
        }
        tracing::trace!(
            target: targets::ANIMATION,
            ?from,
            ?to,
            duration_ms = millis(duration),
            "interpolation started"
        );

        self.current = from.clone();
        self.start = from;
        self.end = to;
        self.elapsed = Duration::ZERO;
        self.duration = duration;
        self.running = true;
    }

    /// Stop without reaching the end. The current value is kept and no
    /// further events are produced.
    pub fn stop(&mut self) {
        if self.running {
            tracing::trace!(target: targets::ANIMATION, current = ?self.current, "interpolation stopped");
        }
        self.running = false;
    }

    /// Whether an interpolation is in progress.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The current value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.current
    }

    /// Duration of the last started interpolation.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time consumed so far, never more than [`duration`](Self::duration).
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Linear progress in `0.0..=1.0`.
    fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            if self.running { 0.0 } else { 1.0 }
        } else {
            (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) as f32
        }
    }

    /// Advance by `dt` and report what happened.
    ///
    /// A zero-duration interpolation finishes on its first advance, even when
    /// `dt` is zero. A stopped interpolator yields an empty step.
    pub fn advance(&mut self, dt: Duration) -> InterpolationStep<T> {
        if !self.running {
            return InterpolationStep::idle();
        }

        let mut step = InterpolationStep::idle();
        let total = self.elapsed.saturating_add(dt);

        if total >= self.duration {
            step.overshoot = total - self.duration;
            self.elapsed = self.duration;
            self.running = false;

            if self.current != self.end {
                self.current = self.end.clone();
                step.events
                    .push(InterpolationEvent::ValueChanged(self.current.clone()));
            }
            step.events.push(InterpolationEvent::Finished);

            tracing::trace!(
                target: targets::ANIMATION,
                end = ?self.end,
                overshoot_ms = millis(step.overshoot),
                "interpolation finished"
            );
            return step;
        }

        self.elapsed = total;
        let t = ease(self.easing, self.progress());
        let value = self.start.interpolate(&self.end, t);
        if value != self.current {
            self.current = value;
            step.events
                .push(InterpolationEvent::ValueChanged(self.current.clone()));
        }
        step
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
