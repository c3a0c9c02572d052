//! Configuration error taxonomy
//!
//! Everything here is rejected at construction time. Once a carousel is
//! built, no error is fatal: transient conditions (a zero-width
//! container, an advance during an in-flight rotation) degrade or drop
//! silently instead of surfacing as `Err`.

use thiserror::Error;

/// Errors produced while validating carousel configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Rotation over fewer than two images is undefined.
    #[error("image set needs at least 2 images, got {0}")]
    TooFewImages(usize),

    /// The depth interpolation divides by `slot_count - 1`.
    #[error("carousel needs at least 2 visible slots, got {0}")]
    TooFewSlots(usize),

    /// A zero auto-advance interval would rotate every tick.
    #[error("auto-advance interval must be non-zero")]
    ZeroInterval,

    /// The cross-fade needs time to run in.
    #[error("animation durations must be non-zero")]
    ZeroDuration,
}
