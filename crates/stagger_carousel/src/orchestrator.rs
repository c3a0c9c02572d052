//! Carousel orchestrator
//!
//! Owns the pieces the rest of the engine must never touch: the
//! rotation offset, the single-flight gate, the auto-advance timer, and
//! the scheduler. Hosts drive it from one event loop:
//!
//! ```ignore
//! let mut carousel = Carousel::new(config, || host.create_layer())?;
//! carousel.handle_event(CarouselEvent::Resized { width: 1280.0 });
//! loop {
//!     carousel.tick(frame_dt_ms);
//!     for event in host.drain_events() {
//!         carousel.handle_event(event);
//!     }
//! }
//! ```
//!
//! Concurrency is interleaving only: timer expiry, clicks, resizes, and
//! animation completions all execute on this one stream, so the gate is
//! a plain bool and at most one rotation is ever in flight. When a
//! rotation starts, every slot receives its new image pair within the
//! same call - slots animate independently afterwards, and only slot 0's
//! completion reopens the gate.

use stagger_animation::Scheduler;
use stagger_core::{CarouselConfig, ConfigError, ImageLayer};

use crate::crossfade::{CrossFade, FadeTiming};
use crate::layout::{LayoutCalculator, SlotLayout};
use crate::ring::{ImageSet, SlotImagePair};

/// Host-side happenings the carousel reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselEvent {
    /// A pointer click landed on a slot. Clicking slot `i` rotates the
    /// ring by `i` positions (slot 0 by one), bringing that image to the
    /// front in a single rotation.
    Clicked { slot: usize },
    /// The container was re-measured.
    Resized { width: f32 },
    /// The media-query boundary was crossed. While narrow, the desktop
    /// carousel idles and the pinned scroll sequence takes over.
    ViewportChanged { narrow: bool },
}

/// The desktop carousel: K depth-ordered slots rotating over M images.
pub struct Carousel<L: ImageLayer> {
    config: CarouselConfig,
    images: ImageSet,
    calculator: LayoutCalculator,
    layouts: Vec<SlotLayout>,
    scheduler: Scheduler,
    slots: Vec<CrossFade<L>>,
    /// Logical start of the current arrangement, in [0, M)
    offset: usize,
    /// Single-flight gate; closed while slot 0's cross-fade is running
    gate_open: bool,
    /// Milliseconds accumulated toward the next auto-advance
    timer_ms: f32,
    narrow: bool,
    container_width: f32,
}

impl<L: ImageLayer> Carousel<L> {
    /// Build and mount a carousel. `make_layer` is called 3·K times to
    /// create the per-slot layer buffers.
    ///
    /// Layout starts in the degraded zero-width state until the first
    /// `Resized` event arrives.
    pub fn new<F>(config: CarouselConfig, mut make_layer: F) -> Result<Self, ConfigError>
    where
        F: FnMut() -> L,
    {
        config.validate()?;
        let images = ImageSet::new(config.images.clone())?;
        let scheduler = Scheduler::new();
        let handle = scheduler.handle();
        let timing = FadeTiming::from(&config);

        // Offset 1 makes slot 0 open on the first image of the set
        let offset = 1 % images.len();

        let mut slots = Vec::with_capacity(config.slot_count);
        for slot in 0..config.slot_count {
            let layers = [make_layer(), make_layer(), make_layer()];
            let mut fade = CrossFade::new(slot, layers, handle.clone(), timing);
            let pair = images.slot_pair(offset, slot);
            fade.mount(images.id(pair.current), images.id(pair.next));
            slots.push(fade);
        }

        let calculator =
            LayoutCalculator::new(config.depth, config.slot_count, config.reference_width);
        let layouts = calculator.solve(0.0);

        Ok(Self {
            config,
            images,
            calculator,
            layouts,
            scheduler,
            slots,
            offset,
            gate_open: true,
            timer_ms: 0.0,
            narrow: false,
            container_width: 0.0,
        })
    }

    /// Request a rotation by `step` positions.
    ///
    /// Returns true if the rotation started. A zero step is a complete
    /// no-op; a request while a rotation is in flight is silently
    /// dropped - never queued - so a burst of clicks mid-animation has
    /// no buffered effect.
    pub fn advance(&mut self, step: usize) -> bool {
        if step == 0 {
            return false;
        }
        if !self.gate_open {
            tracing::debug!(step, "advance dropped: rotation in flight");
            return false;
        }

        self.offset = (self.offset + step) % self.images.len();
        self.gate_open = false;
        tracing::debug!(offset = self.offset, step, "rotation started");

        // All slots receive their new pair in the same call
        for (slot, fade) in self.slots.iter_mut().enumerate() {
            let pair = self.images.slot_pair(self.offset, slot);
            fade.begin(self.images.id(pair.next));
        }
        true
    }

    /// Advance time by `dt_ms`: tick every animation, push sampled
    /// transforms into the layers, observe completions (slot 0's reopens
    /// the gate), then run the auto-advance timer.
    ///
    /// Animations run before the timer so a rotation begun on this tick
    /// starts from zero instead of swallowing the dt that triggered it.
    pub fn tick(&mut self, dt_ms: f32) {
        let completed = self.scheduler.tick(dt_ms);
        for fade in &mut self.slots {
            fade.sample();
        }
        for id in completed {
            let finished = self
                .slots
                .iter()
                .position(|fade| fade.timeline_id() == Some(id));
            if let Some(slot) = finished {
                self.slots[slot].finish();
                if slot == 0 {
                    self.gate_open = true;
                    tracing::debug!(offset = self.offset, "rotation complete, gate reopened");
                }
            }
        }

        if !self.narrow {
            self.timer_ms += dt_ms;
            if self.timer_ms >= self.config.interval_ms as f32 {
                self.timer_ms = 0.0;
                self.advance(1);
            }
        }
    }

    /// Feed one host event through the carousel.
    pub fn handle_event(&mut self, event: CarouselEvent) {
        match event {
            CarouselEvent::Clicked { slot } => {
                if self.narrow {
                    return;
                }
                // Slot 0 still advances by one
                self.advance(slot.max(1));
            }
            CarouselEvent::Resized { width } => {
                self.container_width = width;
                self.layouts = self.calculator.solve(width);
                tracing::debug!(width, "container re-measured");
            }
            CarouselEvent::ViewportChanged { narrow } => {
                self.narrow = narrow;
                self.timer_ms = 0.0;
                tracing::debug!(narrow, "viewport mode changed");
            }
        }
    }

    // ========================================================================
    // Observation
    // ========================================================================

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_gate_open(&self) -> bool {
        self.gate_open
    }

    pub fn is_narrow(&self) -> bool {
        self.narrow
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    /// Current geometry for every slot, recomputed on each resize.
    pub fn layouts(&self) -> &[SlotLayout] {
        &self.layouts
    }

    /// The image pair slot `slot` currently displays.
    pub fn slot_pair(&self, slot: usize) -> SlotImagePair {
        self.images.slot_pair(self.offset, slot)
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Borrow a slot's cross-fade machine (tests, host restyling).
    pub fn slot(&self, slot: usize) -> Option<&CrossFade<L>> {
        self.slots.get(slot)
    }
}
