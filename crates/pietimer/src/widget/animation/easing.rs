//! Easing curves for interpolations.
//!
//! An easing maps linear progress (0.0 to 1.0) onto the progress actually
//! applied to the interpolated value. Every curve here is monotonic and fixes
//! both endpoints, so an eased sweep still only ever grows.

use serde::{Deserialize, Serialize};

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Constant rate.
    #[default]
    Linear,
    /// Quadratic, starts slow.
    EaseIn,
    /// Quadratic, ends slow.
    EaseOut,
    /// Quadratic, slow at both ends.
    EaseInOut,
}

/// Apply `easing` to progress `t`, clamped to `0.0..=1.0` first.
///
/// ```
/// use pietimer::animation::{ease, Easing};
///
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
/// assert!(ease(Easing::EaseIn, 0.5) < 0.5);
/// assert!(ease(Easing::EaseOut, 0.5) > 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => t * (2.0 - t),
        Easing::EaseInOut if t < 0.5 => 2.0 * t * t,
        Easing::EaseInOut => 1.0 - 2.0 * (1.0 - t) * (1.0 - t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];

    #[test]
    fn test_endpoints_are_fixed() {
        for easing in ALL {
            assert_eq!(ease(easing, 0.0), 0.0, "{easing:?} at 0");
            assert_eq!(ease(easing, 1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(ease(Easing::EaseIn, -0.5), 0.0);
        assert_eq!(ease(Easing::EaseOut, 1.5), 1.0);
    }

    #[test]
    fn test_curves_are_monotonic() {
        for easing in ALL {
            let mut previous = 0.0;
            for step in 0..=100 {
                let value = ease(easing, step as f32 / 100.0);
                assert!(value >= previous, "{easing:?} decreased at {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        assert_eq!(ease(Easing::EaseInOut, 0.5), 0.5);
        let early = ease(Easing::EaseInOut, 0.25);
        let late = ease(Easing::EaseInOut, 0.75);
        assert!((early + late - 1.0).abs() < 1e-6);
    }
}
