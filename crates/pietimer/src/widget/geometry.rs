//! Size hints for widget layout.

use pietimer_render::Size;

/// Size preferences a widget reports to whoever lays it out.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeHint {
    /// The preferred size.
    pub preferred: Size,
    /// The minimum acceptable size, if constrained.
    pub minimum: Option<Size>,
    /// The maximum size, if constrained.
    pub maximum: Option<Size>,
}

impl SizeHint {
    /// Create a size hint with only a preferred size.
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            minimum: None,
            maximum: None,
        }
    }

    /// Create a size hint from preferred dimensions.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height))
    }

    /// Create a fixed size hint (preferred = minimum = maximum).
    pub fn fixed(size: Size) -> Self {
        Self {
            preferred: size,
            minimum: Some(size),
            maximum: Some(size),
        }
    }

    /// Whether minimum and maximum both pin the preferred size.
    pub fn is_fixed(&self) -> bool {
        self.minimum == Some(self.preferred) && self.maximum == Some(self.preferred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_hint() {
        let hint = SizeHint::fixed(Size::new(450.0, 450.0));
        assert!(hint.is_fixed());
        assert!(!SizeHint::from_dimensions(10.0, 10.0).is_fixed());
    }
}
