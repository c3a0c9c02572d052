//! Drawable layer abstraction
//!
//! The carousel treats rendering as an opaque collaborator. Each visible
//! slot owns three [`ImageLayer`]s (previous / current / next buffers)
//! and drives them purely through `set_source` and `set_transform`.
//! All timing lives in the engine; the layer only needs to apply state
//! immediately.

// ============================================================================
// Layer Transform
// ============================================================================

/// A translate + horizontal-scale transform for a single layer.
///
/// Translation is expressed as a fraction of the slot's own width so the
/// engine stays resolution-free: `x = -1.0` means "fully slid out to the
/// left", `x = 1.0` "parked off-screen to the right". Hosts multiply by
/// their pixel width when applying.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerTransform {
    /// Horizontal offset as a fraction of slot width
    pub x: f32,
    /// Horizontal scale factor (1.0 = natural width)
    pub scale_x: f32,
}

impl LayerTransform {
    pub const fn new(x: f32, scale_x: f32) -> Self {
        Self { x, scale_x }
    }

    /// The resting transform of a visible layer
    pub const fn identity() -> Self {
        Self {
            x: 0.0,
            scale_x: 1.0,
        }
    }

    /// Slid fully out of view to the left
    pub const fn offscreen_left() -> Self {
        Self {
            x: -1.0,
            scale_x: 1.0,
        }
    }

    /// Parked off-screen right at the exaggerated pre-entry zoom
    pub const fn offscreen_right() -> Self {
        Self {
            x: 1.0,
            scale_x: 2.0,
        }
    }
}

impl Default for LayerTransform {
    fn default() -> Self {
        Self::identity()
    }
}

// ============================================================================
// Image Layer
// ============================================================================

/// A reusable display buffer the engine can point at an image and move.
///
/// Implementations apply both calls immediately; animation is the
/// engine's job. `set_source` may kick off an asynchronous load on the
/// host side - the engine pre-loads into off-screen layers so a slow
/// load never shows mid-swap.
pub trait ImageLayer {
    /// Point this layer at a new image identifier.
    fn set_source(&mut self, id: &str);

    /// Apply a transform to this layer, replacing the previous one.
    fn set_transform(&mut self, transform: LayerTransform);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steady_state_constants() {
        assert_eq!(LayerTransform::identity(), LayerTransform::new(0.0, 1.0));
        assert_eq!(
            LayerTransform::offscreen_left(),
            LayerTransform::new(-1.0, 1.0)
        );
        assert_eq!(
            LayerTransform::offscreen_right(),
            LayerTransform::new(1.0, 2.0)
        );
    }
}
