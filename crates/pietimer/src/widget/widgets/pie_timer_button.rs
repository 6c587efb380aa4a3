//! A push button that sweeps a pie countdown across itself and then fades out.
//!
//! Clicking the button starts a cycle. For the first 90% of the cycle duration
//! a pie slice grows clockwise from the 9 o'clock position until it covers the
//! whole circle. The full circle then fades to transparent over the remaining
//! 10%, after which the button is idle again and draws its normal chrome.
//!
//! The button has no clock. The host calls [`PieTimerButton::tick`] once per
//! frame with the elapsed time, and paints whenever
//! [`needs_repaint`](Widget::needs_repaint) reports a pending change.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use pietimer::prelude::*;
//!
//! init_global_registry();
//!
//! let mut button = PieTimerButton::new(Color::TRANSPARENT, Color::RED);
//! button.set_cycle_duration_ms(1000).unwrap();
//!
//! button.click();
//! button.tick(Duration::from_millis(900));
//! assert_eq!(button.angle(), 360);
//! assert!(button.is_fading_out());
//!
//! button.tick(Duration::from_millis(100));
//! assert_eq!(button.state(), PieTimerState::Idle);
//! assert_eq!(button.fill_color(), Color::RED);
//! ```

use std::time::Duration;

use pietimer_core::logging::{PerfSpan, span_names, targets};
use pietimer_core::{Object, ObjectId, Property, Signal};
use pietimer_render::{Color, Size};

use crate::config::PieTimerConfig;
use crate::error::{PieTimerError, Result};
use crate::widget::animation::{Easing, InterpolationEvent, InterpolationStep, Interpolator};
use crate::widget::{
    Key, MouseButton, MousePressEvent, MouseReleaseEvent, PaintContext, SizeHint, Widget,
    WidgetBase, WidgetEvent,
};

/// Cycle duration used when none is given.
pub const DEFAULT_CYCLE_DURATION_MS: u64 = 5000;

/// Default fixed edge length of the button.
pub const DEFAULT_SIZE: f32 = 450.0;

/// A full sweep, in degrees.
pub const FULL_CIRCLE: i32 = 360;

// The sweep takes SWEEP_NUMERATOR / SWEEP_DENOMINATOR of the cycle.
const SWEEP_NUMERATOR: u128 = 9;
const SWEEP_DENOMINATOR: u128 = 10;

/// The pie is drawn in a box this many times the widget size, centered on it.
const PIE_SCALE: f32 = 1.5;
/// 9 o'clock, with 0 degrees at 3 o'clock.
const PIE_START_ANGLE: f32 = 180.0;

const BORDER_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.35);
const HOVER_OVERLAY: Color = Color::new(0.0, 0.0, 0.0, 0.06);
const PRESSED_OVERLAY: Color = Color::new(0.0, 0.0, 0.0, 0.15);

/// Phase of a pie timer cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PieTimerState {
    /// No cycle running; default button chrome is drawn.
    #[default]
    Idle,
    /// The pie angle is growing toward 360 degrees.
    Sweeping,
    /// The sweep just reached 360 degrees. Passed through on the way to
    /// [`FadingOut`](Self::FadingOut) within a single tick.
    Full,
    /// The full circle is fading to transparent.
    FadingOut,
}

/// A button that plays a pie sweep followed by a fade each time it is clicked.
///
/// # Signals
///
/// - `clicked()`: the button was activated
/// - `angle_changed(i32)`: the sweep angle changed
/// - `sweep_finished()`: the sweep reached 360 degrees
/// - `fade_started()`: the fade began
/// - `cycle_finished()`: the fade completed and the button is idle
/// - `state_changed(PieTimerState)`: the cycle phase changed
pub struct PieTimerButton {
    base: WidgetBase,
    text: String,

    background_color: Property<Color>,
    /// Color the pie is currently drawn with. Animated during the fade.
    fill_color: Property<Color>,
    /// Color given at construction, restored when a cycle ends.
    original_fill_color: Color,
    angle: Property<i32>,

    cycle_duration_ms: u64,
    sweep_easing: Easing,
    fading_out: bool,
    state: PieTimerState,

    sweep: Interpolator<i32>,
    fade: Interpolator<Color>,

    /// Signal emitted when the button is activated.
    pub clicked: Signal<()>,
    /// Signal emitted with the new angle whenever it changes.
    pub angle_changed: Signal<i32>,
    /// Signal emitted once per cycle when the sweep completes.
    pub sweep_finished: Signal<()>,
    /// Signal emitted once per cycle when the fade begins.
    pub fade_started: Signal<()>,
    /// Signal emitted when a cycle completes and the button returns to idle.
    pub cycle_finished: Signal<()>,
    /// Signal emitted on every phase change.
    pub state_changed: Signal<PieTimerState>,
}

impl PieTimerButton {
    /// Create a button with the default cycle duration and a fixed
    /// 450x450 size.
    pub fn new(background_color: Color, fill_color: Color) -> Self {
        let mut base = WidgetBase::new::<Self>();
        base.set_fixed_size(Size::new(DEFAULT_SIZE, DEFAULT_SIZE));

        Self {
            base,
            text: String::new(),
            background_color: Property::new(background_color),
            fill_color: Property::new(fill_color),
            original_fill_color: fill_color,
            angle: Property::new(0),
            cycle_duration_ms: DEFAULT_CYCLE_DURATION_MS,
            sweep_easing: Easing::Linear,
            fading_out: false,
            state: PieTimerState::Idle,
            sweep: Interpolator::new(),
            fade: Interpolator::new(),
            clicked: Signal::new(),
            angle_changed: Signal::new(),
            sweep_finished: Signal::new(),
            fade_started: Signal::new(),
            cycle_finished: Signal::new(),
            state_changed: Signal::new(),
        }
    }

    /// Build a button from a validated configuration.
    pub fn from_config(config: &PieTimerConfig) -> Result<Self> {
        config.validate()?;

        let mut button = Self::new(config.background_color()?, config.fill_color()?)
            .with_text(config.label.clone());
        button.set_cycle_duration(Duration::from_millis(config.cycle_duration_ms))?;
        button.set_sweep_easing(config.sweep_easing);
        button.set_fixed_size(config.size());
        Ok(button)
    }

    /// Set the parent object using builder pattern.
    pub fn with_parent(self, parent: ObjectId) -> Result<Self> {
        self.base.set_parent(Some(parent))?;
        Ok(self)
    }

    /// Set the label using builder pattern.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the cycle duration using builder pattern.
    pub fn with_cycle_duration_ms(mut self, millis: i64) -> Result<Self> {
        self.set_cycle_duration_ms(millis)?;
        Ok(self)
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// The label drawn while idle.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the label drawn while idle.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.text != text {
            self.text = text;
            self.base.update();
        }
    }

    /// Pin the button to `size`.
    pub fn set_fixed_size(&mut self, size: Size) {
        self.base.set_fixed_size(size);
    }

    /// The current sweep angle in degrees, `0..=360`.
    pub fn angle(&self) -> i32 {
        self.angle.get()
    }

    /// The color the pie is currently drawn with.
    pub fn fill_color(&self) -> Color {
        self.fill_color.get()
    }

    /// The fill color passed at construction. Every cycle ends, and every
    /// [`reset`](Self::reset) returns, to this color.
    pub fn original_fill_color(&self) -> Color {
        self.original_fill_color
    }

    /// Set the color the pie is currently drawn with.
    ///
    /// The change lasts until the current cycle ends or the button is reset,
    /// which both restore [`original_fill_color`](Self::original_fill_color).
    /// During a fade the running animation overwrites it on the next tick.
    pub fn set_fill_color(&mut self, color: Color) {
        if self.fill_color.set(color) {
            self.base.update();
        }
    }

    /// The color painted behind the pie and the idle chrome.
    pub fn background_color(&self) -> Color {
        self.background_color.get()
    }

    /// Set the background color.
    pub fn set_background_color(&mut self, color: Color) {
        self.background_color.set(color);
        self.base.update();
    }

    /// Total length of one sweep plus fade.
    pub fn cycle_duration(&self) -> Duration {
        Duration::from_millis(self.cycle_duration_ms)
    }

    /// Set the cycle duration in milliseconds.
    ///
    /// Takes effect at the next click; a running sweep keeps its timing.
    /// Zero or negative values are rejected and the previous duration kept.
    pub fn set_cycle_duration_ms(&mut self, millis: i64) -> Result<()> {
        match u64::try_from(millis) {
            Ok(accepted) if accepted > 0 => {
                self.apply_cycle_duration(accepted);
                Ok(())
            }
            _ => Err(self.reject_cycle_duration(millis)),
        }
    }

    /// Set the cycle duration.
    ///
    /// Durations are kept in whole milliseconds. Anything under one
    /// millisecond is rejected like zero, and anything beyond `u64::MAX`
    /// milliseconds is capped there.
    pub fn set_cycle_duration(&mut self, duration: Duration) -> Result<()> {
        match u64::try_from(duration.as_millis()).unwrap_or(u64::MAX) {
            0 => Err(self.reject_cycle_duration(0)),
            millis => {
                self.apply_cycle_duration(millis);
                Ok(())
            }
        }
    }

    /// Length of the sweep phase: 90% of the cycle, in whole milliseconds.
    pub fn sweep_duration(&self) -> Duration {
        let sweep_ms = u128::from(self.cycle_duration_ms) * SWEEP_NUMERATOR / SWEEP_DENOMINATOR;
        // Never more than the cycle itself, so it always fits.
        Duration::from_millis(u64::try_from(sweep_ms).unwrap_or(self.cycle_duration_ms))
    }

    /// Length of the fade phase: the rest of the cycle after the sweep.
    pub fn fade_duration(&self) -> Duration {
        self.cycle_duration() - self.sweep_duration()
    }

    /// The easing curve of the sweep. Defaults to [`Easing::Linear`].
    pub fn sweep_easing(&self) -> Easing {
        self.sweep_easing
    }

    /// Set the easing curve used from the next sweep on.
    pub fn set_sweep_easing(&mut self, easing: Easing) {
        self.sweep_easing = easing;
    }

    /// Whether the fade phase is active.
    pub fn is_fading_out(&self) -> bool {
        self.fading_out
    }

    /// Whether the sweep phase is active.
    pub fn is_sweeping(&self) -> bool {
        self.sweep.is_running()
    }

    /// The current cycle phase.
    pub fn state(&self) -> PieTimerState {
        self.state
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Activate the button as if clicked: (re)start the cycle from 0 degrees.
    ///
    /// Ignored while the button is disabled.
    pub fn click(&mut self) {
        if !self.base.is_enabled() {
            tracing::trace!(target: targets::WIDGET, "click ignored on disabled button");
            return;
        }

        self.start_sweep();
        self.clicked.emit(());
    }

    /// Cancel any running cycle and return to idle.
    ///
    /// Safe to call in any state; calling it twice is the same as once.
    pub fn reset(&mut self) {
        self.sweep.stop();
        self.fade.stop();
        self.fading_out = false;
        self.fill_color.set(self.original_fill_color);
        self.set_angle(0);
        self.set_state(PieTimerState::Idle);
        self.base.update();
    }

    /// Advance the running cycle by `dt`.
    ///
    /// Time left over when the sweep completes is carried into the fade, so
    /// one large tick and many small ones end in the same state.
    pub fn tick(&mut self, dt: Duration) {
        let _perf = PerfSpan::new(span_names::TICK);
        let mut fade_dt = dt;

        if self.sweep.is_running() {
            fade_dt = Duration::ZERO;
            let InterpolationStep { events, overshoot } = self.sweep.advance(dt);
            for event in events {
                match event {
                    InterpolationEvent::ValueChanged(angle) => self.set_angle(angle),
                    InterpolationEvent::Finished => {
                        self.on_sweep_finished();
                        fade_dt = overshoot;
                    }
                }
            }
        }

        if self.fade.is_running() {
            let step = self.fade.advance(fade_dt);
            for event in step.events {
                match event {
                    InterpolationEvent::ValueChanged(color) => {
                        if self.fill_color.set(color) {
                            self.base.update();
                        }
                    }
                    InterpolationEvent::Finished => self.on_fade_finished(),
                }
            }
        }
    }

    // =========================================================================
    // Cycle internals
    // =========================================================================

    fn apply_cycle_duration(&mut self, millis: u64) {
        self.cycle_duration_ms = millis;
        tracing::debug!(target: targets::WIDGET, millis, "cycle duration set");
    }

    fn reject_cycle_duration(&self, millis: i64) -> PieTimerError {
        tracing::warn!(
            target: targets::WIDGET,
            millis,
            current_ms = self.cycle_duration_ms,
            "rejected non-positive cycle duration"
        );
        PieTimerError::InvalidDuration { millis }
    }

    fn start_sweep(&mut self) {
        if self.fading_out {
            self.fade.stop();
            self.fading_out = false;
            self.fill_color.set(self.original_fill_color);
        }
        if self.sweep.is_running() {
            tracing::debug!(
                target: targets::WIDGET,
                angle = self.angle(),
                "restarting sweep"
            );
        }

        self.sweep.set_easing(self.sweep_easing);
        self.sweep.start(0, FULL_CIRCLE, self.sweep_duration());
        self.set_angle(0);
        self.set_state(PieTimerState::Sweeping);
        self.base.update();
    }

    fn on_sweep_finished(&mut self) {
        self.sweep_finished.emit(());
        self.set_state(PieTimerState::Full);

        let from = self.fill_color();
        self.fade
            .start(from, from.with_alpha(0.0), self.fade_duration());
        self.fading_out = true;
        self.fade_started.emit(());
        self.set_state(PieTimerState::FadingOut);
        self.base.update();
    }

    fn on_fade_finished(&mut self) {
        self.fill_color.set(self.original_fill_color);
        self.fading_out = false;
        self.set_angle(0);
        self.set_state(PieTimerState::Idle);
        self.base.update();
        self.cycle_finished.emit(());
    }

    fn set_angle(&mut self, angle: i32) {
        if self.angle.set(angle) {
            self.base.update();
            self.angle_changed.emit(angle);
        }
    }

    fn set_state(&mut self, state: PieTimerState) {
        if self.state != state {
            tracing::debug!(
                target: targets::WIDGET,
                from = ?self.state,
                to = ?state,
                "pie timer state changed"
            );
            self.state = state;
            self.state_changed.emit(state);
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left || !self.base.is_enabled() {
            return false;
        }
        self.base.set_pressed(true);
        true
    }

    fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left || !self.base.is_enabled() {
            return false;
        }

        let was_pressed = self.base.is_pressed();
        self.base.set_pressed(false);

        // Only click if the release lands on the button
        if was_pressed && self.base.contains_point(event.local_pos) {
            self.click();
            return true;
        }
        false
    }

    fn handle_key_press(&mut self, key: Key, is_repeat: bool) -> bool {
        if !self.base.is_enabled() {
            return false;
        }
        match key {
            Key::Space | Key::Enter => {
                if !is_repeat {
                    self.base.set_pressed(true);
                }
                true
            }
            _ => false,
        }
    }

    fn handle_key_release(&mut self, key: Key) -> bool {
        if !self.base.is_enabled() {
            return false;
        }
        match key {
            Key::Space | Key::Enter if self.base.is_pressed() => {
                self.base.set_pressed(false);
                self.click();
                true
            }
            _ => false,
        }
    }

    // =========================================================================
    // Painting
    // =========================================================================

    fn paint_chrome(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();

        if self.base.is_pressed() {
            ctx.renderer().fill_rect(rect, PRESSED_OVERLAY);
        } else if self.base.is_hovered() {
            ctx.renderer().fill_rect(rect, HOVER_OVERLAY);
        }

        if !self.text.is_empty() {
            let text_color = if self.base.is_enabled() {
                Color::BLACK
            } else {
                Color::GRAY
            };
            ctx.renderer().draw_text(rect, &self.text, text_color);
        }

        ctx.renderer().stroke_rect(rect, BORDER_COLOR, 1.0);
    }
}

impl Object for PieTimerButton {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for PieTimerButton {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        match self.base.fixed_size() {
            Some(size) => SizeHint::fixed(size),
            None => SizeHint::from_dimensions(DEFAULT_SIZE, DEFAULT_SIZE),
        }
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        ctx.renderer().fill_rect(rect, self.background_color());

        let angle = self.angle();
        let pie_rect = rect.scale_about_center(PIE_SCALE);

        if self.sweep.is_running() && angle < FULL_CIRCLE {
            // Negative span sweeps clockwise
            ctx.renderer()
                .fill_pie(pie_rect, PIE_START_ANGLE, -(angle as f32), self.fill_color());
        } else if angle == FULL_CIRCLE {
            ctx.renderer().fill_ellipse(pie_rect, self.fill_color());
        } else {
            self.paint_chrome(ctx);
        }
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        let handled = match event {
            WidgetEvent::MousePress(e) => self.handle_mouse_press(e),
            WidgetEvent::MouseRelease(e) => self.handle_mouse_release(e),
            WidgetEvent::KeyPress(e) => self.handle_key_press(e.key, e.is_repeat),
            WidgetEvent::KeyRelease(e) => self.handle_key_release(e.key),
            WidgetEvent::Enter(_) => {
                self.base.set_hovered(true);
                false
            }
            WidgetEvent::Leave(_) => {
                self.base.set_hovered(false);
                false
            }
        };

        if handled {
            event.accept();
        }
        handled
    }
}

// Ensure PieTimerButton is Send + Sync
static_assertions::assert_impl_all!(PieTimerButton: Send, Sync);
