//! Stagger Carousel
//!
//! The staggered-carousel engine:
//!
//! - **Layout**: Per-slot size, pixel caps, opacity, and position from a
//!   linear depth model
//! - **Ring**: Cyclic current/next image bookkeeping across the visible window
//! - **Cross-fade**: A per-slot three-layer state machine for seamless swaps
//! - **Orchestrator**: Rotation offset, single-flight gate, auto-advance
//!   timer, and resize/viewport event handling
//! - **Scroll**: The narrow-viewport pinned-card sequence, a pure function
//!   of scroll position
//!
//! The engine is generic over [`stagger_core::ImageLayer`], so a host
//! can back slots with any drawable surface. Drive it from an event loop:
//! feed [`Carousel::handle_event`] with input/resize events and call
//! [`Carousel::tick`] with elapsed milliseconds.

pub mod crossfade;
pub mod layout;
pub mod orchestrator;
pub mod ring;
pub mod scroll;

pub use crossfade::{CrossFade, FadeTiming};
pub use layout::{LayoutCalculator, SlotLayout};
pub use orchestrator::{Carousel, CarouselEvent};
pub use ring::{ImageSet, SlotImagePair};
pub use scroll::{CardState, PinnedScrollSequence};

#[cfg(test)]
pub(crate) mod test_util {
    use stagger_core::{ImageLayer, LayerTransform};

    /// Records every call so tests can assert on the exact sequence a
    /// slot pushed into its layers.
    #[derive(Default)]
    pub struct RecordingLayer {
        pub source: Option<String>,
        pub transform: LayerTransform,
        pub source_calls: usize,
        pub transform_calls: usize,
    }

    impl ImageLayer for RecordingLayer {
        fn set_source(&mut self, id: &str) {
            self.source = Some(id.to_owned());
            self.source_calls += 1;
        }

        fn set_transform(&mut self, transform: LayerTransform) {
            self.transform = transform;
            self.transform_calls += 1;
        }
    }
}
