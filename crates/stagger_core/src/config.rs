//! Carousel configuration
//!
//! Host-facing tuning for the desktop carousel and the narrow-viewport
//! scroll sequence. Everything derives `serde` so hosts can ship these
//! as data; `validate()` runs once at construction and rejects
//! configurations the engine cannot animate over.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ============================================================================
// Depth Profile
// ============================================================================

/// The spatial depth cue: how size and opacity fall off from the nearest
/// slot (index 0) to the farthest (index K-1). All interpolation between
/// the two ends is linear in the slot index.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DepthProfile {
    /// Nearest slot's size, in reference-viewport units
    pub biggest: f32,
    /// Farthest slot's size, in reference-viewport units
    pub smallest: f32,
    /// Pixel cap for the nearest slot
    pub max_px: f32,
    /// Pixel cap for the farthest slot
    pub min_px: f32,
    /// Opacity of the nearest slot
    pub max_opacity: f32,
    /// Opacity of the farthest slot (farther reads darker)
    pub min_opacity: f32,
}

impl Default for DepthProfile {
    fn default() -> Self {
        Self {
            biggest: 726.0,
            smallest: 280.0,
            max_px: 730.0,
            min_px: 300.0,
            max_opacity: 1.0,
            min_opacity: 0.4,
        }
    }
}

// ============================================================================
// Carousel Configuration
// ============================================================================

/// Full configuration for a staggered carousel.
///
/// The defaults reproduce the reference configuration: six visible
/// slots, a five-second auto-advance, a 500 ms slide with a 300 ms zoom
/// settle starting 200 ms in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Ordered image identifiers; the rotation ring. At least two.
    pub images: Vec<String>,
    /// Number of visible depth-ordered slots
    pub slot_count: usize,
    /// Size/opacity falloff across the slots
    pub depth: DepthProfile,
    /// Width of the reference viewport the depth sizes are expressed in
    pub reference_width: f32,
    /// Auto-advance timer interval, milliseconds
    pub interval_ms: u32,
    /// Duration of the slide-out / slide-in phase
    pub slide_ms: u32,
    /// Duration of the incoming layer's zoom settle (2x -> 1x)
    pub scale_ms: u32,
    /// Start offset of the zoom settle relative to the slide start
    pub scale_offset_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            slot_count: 6,
            depth: DepthProfile::default(),
            reference_width: 1920.0,
            interval_ms: 5000,
            slide_ms: 500,
            scale_ms: 300,
            scale_offset_ms: 200,
        }
    }
}

impl CarouselConfig {
    /// Build a config over the given image set with reference defaults.
    pub fn with_images<I, S>(images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            images: images.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Reject configurations the engine cannot rotate or animate over.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.images.len() < 2 {
            return Err(ConfigError::TooFewImages(self.images.len()));
        }
        if self.slot_count < 2 {
            return Err(ConfigError::TooFewSlots(self.slot_count));
        }
        if self.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.slide_ms == 0 || self.scale_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(())
    }
}

// ============================================================================
// Scroll Sequence Configuration
// ============================================================================

/// Tuning for the narrow-viewport pinned-card sequence.
///
/// Tween windows are percentages of each card's allotted share of the
/// scroll range. The negative entrance start overlaps a card's entry
/// with the previous card's exit, which is what makes the stack read as
/// one continuous motion.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ScrollSequenceConfig {
    /// Scroll region height contributed per card, pixels
    pub card_height: f32,
    /// Entrance tween start, percent of the card's allotted range
    pub entrance_start_pct: f32,
    /// Entrance tween end, percent
    pub entrance_end_pct: f32,
    /// Exit tween start, percent (runs to 100)
    pub exit_start_pct: f32,
    /// Per-card resting scale step while stacked behind
    pub stack_scale_step: f32,
    /// Per-card resting y offset while stacked behind, pixels
    pub stack_y_step: f32,
    /// How far a card rises while fading out, pixels
    pub exit_rise: f32,
}

impl Default for ScrollSequenceConfig {
    fn default() -> Self {
        Self {
            card_height: 500.0,
            entrance_start_pct: -50.0,
            entrance_end_pct: 20.0,
            exit_start_pct: 35.0,
            stack_scale_step: 0.05,
            stack_y_step: 25.0,
            exit_rise: 400.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_with_images_validates() {
        let config = CarouselConfig::with_images(["a", "b", "c"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_configs() {
        let mut config = CarouselConfig::with_images(["only"]);
        assert_eq!(config.validate(), Err(ConfigError::TooFewImages(1)));

        config.images.push("second".into());
        config.slot_count = 1;
        assert_eq!(config.validate(), Err(ConfigError::TooFewSlots(1)));

        config.slot_count = 6;
        config.interval_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));

        config.interval_ms = 5000;
        config.slide_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroDuration));
    }

    #[test]
    fn deserializes_from_host_json() {
        let json = r#"{
            "images": ["one.png", "two.png"],
            "slot_count": 4,
            "depth": {
                "biggest": 726.0, "smallest": 280.0,
                "max_px": 730.0, "min_px": 300.0,
                "max_opacity": 1.0, "min_opacity": 0.4
            },
            "reference_width": 1920.0,
            "interval_ms": 3000,
            "slide_ms": 500,
            "scale_ms": 300,
            "scale_offset_ms": 200
        }"#;
        let config: CarouselConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.slot_count, 4);
        assert_eq!(config.interval_ms, 3000);
        assert!(config.validate().is_ok());
    }
}
