//! Easing functions
//!
//! Quadratic easing curves applied to normalized time. Input is clamped
//! to `[0, 1]` so overshooting tick accumulation can never extrapolate a
//! value past its endpoint.

/// An easing curve for a single timeline entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    /// Fast start, gentle settle. The default for slide transitions.
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map normalized time `t` through the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}
