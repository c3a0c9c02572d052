//! Per-slot cross-fade state machine
//!
//! Each slot owns three reusable layers - previous, current, next - with
//! the roles assigned by a single rotating pointer rather than by moving
//! image data between buffers. A swap runs one timeline: the current
//! layer slides out left, the next layer slides in and settles from a
//! 2x horizontal zoom, and the recycled previous layer (already
//! pre-loaded with the incoming image) is parked off-screen right at 2x,
//! ready to become the new "next". On completion the pointer advances by
//! one (mod 3) and every role shifts with it.
//!
//! The machine never inspects displayed content; roles come from the
//! pointer alone. Replacing an in-flight timeline drops the old entries
//! wholesale, so an interrupt can never leave orphaned steps ticking.

use stagger_animation::{SchedulerHandle, Timeline, TimelineEntryId, TimelineId};
use stagger_core::{CarouselConfig, ImageLayer, LayerTransform};

/// Durations of the cross-fade phases.
#[derive(Clone, Copy, Debug)]
pub struct FadeTiming {
    /// Slide-out / slide-in phase
    pub slide_ms: u32,
    /// Zoom settle of the incoming layer
    pub scale_ms: u32,
    /// Start of the zoom settle relative to the slide start
    pub scale_offset_ms: u32,
}

impl From<&CarouselConfig> for FadeTiming {
    fn from(config: &CarouselConfig) -> Self {
        Self {
            slide_ms: config.slide_ms,
            scale_ms: config.scale_ms,
            scale_offset_ms: config.scale_offset_ms,
        }
    }
}

/// Entry handles for one running swap, with the physical layer each
/// entry drives captured at begin time (the pointer moves on completion,
/// the sequence must not).
#[derive(Clone, Copy, Debug)]
struct FadeEntries {
    outgoing_layer: usize,
    outgoing_x: TimelineEntryId,
    incoming_layer: usize,
    incoming_x: TimelineEntryId,
    incoming_scale: TimelineEntryId,
    recycled_layer: usize,
    recycled_x: TimelineEntryId,
    recycled_scale: TimelineEntryId,
}

/// The three-layer cross-fade controller for one slot.
pub struct CrossFade<L: ImageLayer> {
    slot: usize,
    layers: [L; 3],
    /// Which physical layer currently holds the "current" image
    pointer: usize,
    timing: FadeTiming,
    handle: SchedulerHandle,
    timeline: Option<TimelineId>,
    entries: Option<FadeEntries>,
}

impl<L: ImageLayer> CrossFade<L> {
    pub fn new(slot: usize, layers: [L; 3], handle: SchedulerHandle, timing: FadeTiming) -> Self {
        Self {
            slot,
            layers,
            pointer: 1,
            timing,
            handle,
            timeline: None,
            entries: None,
        }
    }

    fn next_index(&self) -> usize {
        (self.pointer + 1) % 3
    }

    fn previous_index(&self) -> usize {
        (self.pointer + 2) % 3
    }

    /// Set all three layers to their steady-state offsets without
    /// animation, using the slot's first current/next pair.
    pub fn mount(&mut self, current_id: &str, next_id: &str) {
        let current = self.pointer;
        let next = self.next_index();
        let previous = self.previous_index();

        self.layers[current].set_source(current_id);
        self.layers[next].set_source(next_id);

        self.layers[previous].set_transform(LayerTransform::offscreen_left());
        self.layers[current].set_transform(LayerTransform::identity());
        self.layers[next].set_transform(LayerTransform::offscreen_right());
    }

    /// Start a swap toward `incoming_next_id`, the image this slot will
    /// transition to after the rotation now beginning.
    ///
    /// The incoming identifier is pre-loaded into the layer being
    /// recycled while it is still off-screen, so the eventual swap to it
    /// is visually seamless. The orchestrator guarantees no second
    /// `begin` arrives before completion; if one does anyway, the
    /// replaced timeline dies with all its entries.
    pub fn begin(&mut self, incoming_next_id: &str) {
        let outgoing = self.pointer;
        let incoming = self.next_index();
        let recycled = self.previous_index();

        if self.is_animating() {
            tracing::debug!(slot = self.slot, "cross-fade interrupted by new swap");
        }

        self.layers[recycled].set_source(incoming_next_id);

        let t = self.timing;
        let mut timeline = Timeline::new();
        let outgoing_x = timeline.add(0, t.slide_ms, 0.0, -1.0);
        let incoming_x = timeline.add(0, t.slide_ms, 1.0, 0.0);
        let incoming_scale = timeline.add(t.scale_offset_ms, t.scale_ms, 2.0, 1.0);
        let end = timeline.duration_ms();
        // Recycled layer snaps off-screen right at the pre-entry zoom
        let recycled_x = timeline.set_at(end, -1.0, 1.0);
        let recycled_scale = timeline.set_at(end, 1.0, 2.0);
        timeline.start();

        self.entries = Some(FadeEntries {
            outgoing_layer: outgoing,
            outgoing_x,
            incoming_layer: incoming,
            incoming_x,
            incoming_scale,
            recycled_layer: recycled,
            recycled_x,
            recycled_scale,
        });

        match self.timeline {
            Some(id) => {
                self.handle.replace(id, timeline);
            }
            None => self.timeline = self.handle.register(timeline),
        }
    }

    /// Push the timeline's current values into the layers. Called every
    /// tick by the orchestrator; cheap and idempotent once settled.
    pub fn sample(&mut self) {
        let (Some(id), Some(e)) = (self.timeline, self.entries) else {
            return;
        };
        let mut apply = |layer: usize, x: TimelineEntryId, scale: Option<TimelineEntryId>| {
            if let Some(x) = self.handle.value(id, x) {
                let scale_x = scale
                    .and_then(|entry| self.handle.value(id, entry))
                    .unwrap_or(1.0);
                self.layers[layer].set_transform(LayerTransform::new(x, scale_x));
            }
        };
        apply(e.outgoing_layer, e.outgoing_x, None);
        apply(e.incoming_layer, e.incoming_x, Some(e.incoming_scale));
        apply(e.recycled_layer, e.recycled_x, Some(e.recycled_scale));
    }

    /// Animation-complete transition: rotate the layer roles by one.
    pub fn finish(&mut self) {
        self.pointer = (self.pointer + 1) % 3;
        tracing::debug!(slot = self.slot, pointer = self.pointer, "cross-fade complete");
    }

    pub fn is_animating(&self) -> bool {
        self.timeline.map(|id| self.handle.is_playing(id)).unwrap_or(false)
    }

    pub fn timeline_id(&self) -> Option<TimelineId> {
        self.timeline
    }

    pub fn layer_pointer(&self) -> usize {
        self.pointer
    }

    /// Borrow a physical layer (primarily for hosts that need to restyle
    /// the underlying surfaces on relayout).
    pub fn layer(&self, index: usize) -> Option<&L> {
        self.layers.get(index)
    }
}

impl<L: ImageLayer> Drop for CrossFade<L> {
    fn drop(&mut self) {
        // Kill the in-flight timeline; nothing may fire after teardown
        if let Some(id) = self.timeline.take() {
            self.handle.remove(id);
        }
    }
}
