//! Geometry and color values passed to a [`Renderer`](crate::Renderer).
//!
//! All coordinates are logical pixels with the y axis pointing down.

/// A position in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as f32, height as f32)
    }
}

/// An axis-aligned rectangle.
///
/// The left and top edges are inside the rectangle, the right and bottom
/// edges are not.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Whether `point` lies inside the rectangle.
    pub fn contains(&self, point: Point) -> bool {
        let Point { x, y } = self.origin;
        (x..x + self.size.width).contains(&point.x) && (y..y + self.size.height).contains(&point.y)
    }

    /// Grow or shrink the rectangle by `factor` while keeping its center fixed.
    pub fn scale_about_center(&self, factor: f32) -> Self {
        let width = self.size.width * factor;
        let height = self.size.height * factor;
        Self::new(
            self.origin.x - (width - self.size.width) / 2.0,
            self.origin.y - (height - self.size.height) / 2.0,
            width,
            height,
        )
    }

    /// The same rectangle moved by `(dx, dy)`.
    #[inline]
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.origin.x + dx, self.origin.y + dy, self.size.width, self.size.height)
    }
}

/// An RGBA color. Components are `0.0..=1.0` with premultiplied alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const GRAY: Self = Self::new(0.5, 0.5, 0.5, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// A color from already premultiplied components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// A color from straight (not premultiplied) 8-bit components.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let a = unit(a);
        Self::new(unit(r) * a, unit(g) * a, unit(b) * a, a)
    }

    /// An opaque color from 8-bit components.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, u8::MAX)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return None;
        }

        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        let alpha = if digits.len() == 8 { byte(6)? } else { u8::MAX };
        Some(Self::from_rgba8(byte(0)?, byte(2)?, byte(4)?, alpha))
    }

    #[inline]
    pub fn alpha(self) -> f32 {
        self.a
    }

    /// The same hue at a different opacity.
    ///
    /// A fully transparent color has lost its hue, so it becomes black at the
    /// new opacity.
    pub fn with_alpha(self, alpha: f32) -> Self {
        if self.a == 0.0 {
            return Self::new(0.0, 0.0, 0.0, alpha);
        }
        let k = alpha / self.a;
        Self::new(self.r * k, self.g * k, self.b * k, alpha)
    }

    /// Component-wise linear blend toward `to`; `t` of 0 is `self`, 1 is `to`.
    pub fn lerp(self, to: Self, t: f32) -> Self {
        let mix = |from: f32, to: f32| from + (to - from) * t;
        Self::new(mix(self.r, to.r), mix(self.g, to.g), mix(self.b, to.b), mix(self.a, to.a))
    }
}

#[inline]
fn unit(channel: u8) -> f32 {
    f32::from(channel) / 255.0
}
