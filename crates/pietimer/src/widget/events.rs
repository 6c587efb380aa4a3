//! Input events delivered to widgets.
//!
//! The host translates its native input into these events and passes them to
//! [`Widget::event`](super::Widget::event). Positions are in widget-local
//! coordinates.

use pietimer_render::Point;

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left,
    /// Secondary button (usually right).
    Right,
    /// Middle button.
    Middle,
}

/// The keys a button reacts to. Everything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Enter,
    Escape,
    /// Any other key, identified by the host's key code.
    Other(u32),
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    accepted: bool,
}

impl EventBase {
    /// Create a new, unaccepted event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// A mouse button went down over the widget.
#[derive(Debug, Clone)]
pub struct MousePressEvent {
    pub base: EventBase,
    pub button: MouseButton,
    pub local_pos: Point,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
        }
    }
}

/// A mouse button was released. The position may lie outside the widget.
#[derive(Debug, Clone)]
pub struct MouseReleaseEvent {
    pub base: EventBase,
    pub button: MouseButton,
    pub local_pos: Point,
}

impl MouseReleaseEvent {
    /// Create a new mouse release event.
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
        }
    }
}

/// A key went down while the widget had focus.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    pub base: EventBase,
    pub key: Key,
    /// Whether this is an auto-repeat of a held key.
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, is_repeat: bool) -> Self {
        Self {
            base: EventBase::new(),
            key,
            is_repeat,
        }
    }
}

/// A key was released while the widget had focus.
#[derive(Debug, Clone)]
pub struct KeyReleaseEvent {
    pub base: EventBase,
    pub key: Key,
}

impl KeyReleaseEvent {
    /// Create a new key release event.
    pub fn new(key: Key) -> Self {
        Self {
            base: EventBase::new(),
            key,
        }
    }
}

/// An event dispatched to a widget.
#[derive(Debug, Clone)]
pub enum WidgetEvent {
    /// Mouse press event.
    MousePress(MousePressEvent),
    /// Mouse release event.
    MouseRelease(MouseReleaseEvent),
    /// The pointer entered the widget.
    Enter(EventBase),
    /// The pointer left the widget.
    Leave(EventBase),
    /// Key press event.
    KeyPress(KeyPressEvent),
    /// Key release event.
    KeyRelease(KeyReleaseEvent),
}

impl WidgetEvent {
    /// Left-button press at a local position.
    pub fn left_press(x: f32, y: f32) -> Self {
        Self::MousePress(MousePressEvent::new(MouseButton::Left, Point::new(x, y)))
    }

    /// Left-button release at a local position.
    pub fn left_release(x: f32, y: f32) -> Self {
        Self::MouseRelease(MouseReleaseEvent::new(MouseButton::Left, Point::new(x, y)))
    }

    /// Pointer enter.
    pub fn enter() -> Self {
        Self::Enter(EventBase::new())
    }

    /// Pointer leave.
    pub fn leave() -> Self {
        Self::Leave(EventBase::new())
    }

    /// Non-repeating key press.
    pub fn key_press(key: Key) -> Self {
        Self::KeyPress(KeyPressEvent::new(key, false))
    }

    /// Key release.
    pub fn key_release(key: Key) -> Self {
        Self::KeyRelease(KeyReleaseEvent::new(key))
    }

    fn base(&self) -> &EventBase {
        match self {
            Self::MousePress(e) => &e.base,
            Self::MouseRelease(e) => &e.base,
            Self::Enter(base) | Self::Leave(base) => base,
            Self::KeyPress(e) => &e.base,
            Self::KeyRelease(e) => &e.base,
        }
    }

    fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::MousePress(e) => &mut e.base,
            Self::MouseRelease(e) => &mut e.base,
            Self::Enter(base) | Self::Leave(base) => base,
            Self::KeyPress(e) => &mut e.base,
            Self::KeyRelease(e) => &mut e.base,
        }
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        self.base_mut().accept();
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        self.base_mut().ignore();
    }

    /// Whether a widget accepted the event.
    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_and_ignore() {
        let mut event = WidgetEvent::left_press(1.0, 2.0);
        assert!(!event.is_accepted());
        event.accept();
        assert!(event.is_accepted());
        event.ignore();
        assert!(!event.is_accepted());
    }

    #[test]
    fn test_constructors() {
        match WidgetEvent::left_release(3.0, 4.0) {
            WidgetEvent::MouseRelease(e) => {
                assert_eq!(e.button, MouseButton::Left);
                assert_eq!(e.local_pos, Point::new(3.0, 4.0));
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert!(matches!(
            WidgetEvent::key_press(Key::Space),
            WidgetEvent::KeyPress(KeyPressEvent { key: Key::Space, is_repeat: false, .. })
        ));
    }
}
