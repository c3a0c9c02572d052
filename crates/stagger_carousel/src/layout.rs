//! Depth layout calculator
//!
//! Pure geometry for the desktop carousel: slot 0 is nearest and
//! largest, slot K-1 farthest and smallest, with size, pixel cap, and
//! opacity all interpolated linearly in the slot index. Positions pin
//! the end slots to the container edges and spread interior slot
//! centers evenly across the span left over after the two end halves.
//!
//! Everything here is recomputed on resize; a zero width (pre-mount)
//! degrades to all-zero geometry instead of erroring.

use stagger_core::DepthProfile;

/// Resolved geometry for one slot at one container width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotLayout {
    /// Size as a fraction of the reference viewport width
    pub size: f32,
    /// Size resolved against the container and clamped to the pixel cap
    pub size_px: f32,
    /// Pixel cap for this slot
    pub max_size: f32,
    /// Depth cue: farther slots are darker
    pub opacity: f32,
    /// Left edge position within the container, pixels
    pub x: f32,
}

/// Maps slot indices to geometry for a given container width.
#[derive(Clone, Copy, Debug)]
pub struct LayoutCalculator {
    depth: DepthProfile,
    slot_count: usize,
    reference_width: f32,
}

impl LayoutCalculator {
    /// `slot_count` must be at least 2 (validated upstream by
    /// `CarouselConfig::validate`); the interpolation divides by K-1.
    pub fn new(depth: DepthProfile, slot_count: usize, reference_width: f32) -> Self {
        debug_assert!(slot_count >= 2, "depth interpolation divides by K-1");
        Self {
            depth,
            slot_count,
            reference_width,
        }
    }

    /// Interpolation fraction for slot `i`: 0.0 at the nearest slot,
    /// 1.0 at the farthest.
    fn depth_fraction(&self, slot: usize) -> f32 {
        slot as f32 / (self.slot_count - 1) as f32
    }

    /// Size as a fraction of the reference viewport.
    pub fn size(&self, slot: usize) -> f32 {
        let d = self.depth;
        (d.biggest - (d.biggest - d.smallest) * self.depth_fraction(slot)) / self.reference_width
    }

    /// Pixel cap, same interpolation fraction as `size`.
    pub fn max_size(&self, slot: usize) -> f32 {
        let d = self.depth;
        d.max_px - (d.max_px - d.min_px) * self.depth_fraction(slot)
    }

    pub fn opacity(&self, slot: usize) -> f32 {
        let d = self.depth;
        d.max_opacity - (d.max_opacity - d.min_opacity) * self.depth_fraction(slot)
    }

    fn size_px(&self, slot: usize, container_width: f32) -> f32 {
        (self.size(slot) * container_width).min(self.max_size(slot))
    }

    /// Resolve one slot against a container width.
    pub fn slot(&self, slot: usize, container_width: f32) -> SlotLayout {
        let width = container_width.max(0.0);
        let size_px = self.size_px(slot, width);
        let last = self.slot_count - 1;

        let x = if slot == 0 {
            0.0
        } else if slot == last {
            width - size_px
        } else {
            // Interior centers spread across the span that remains after
            // the two pinned end halves, so nothing overflows the container.
            let half_first = self.size_px(0, width) / 2.0;
            let half_last = self.size_px(last, width) / 2.0;
            let span = (width - half_first - half_last).max(0.0);
            half_first + span * self.depth_fraction(slot) - size_px / 2.0
        };

        SlotLayout {
            size: self.size(slot),
            size_px,
            max_size: self.max_size(slot),
            opacity: self.opacity(slot),
            x,
        }
    }

    /// Resolve every slot. A non-positive width yields degenerate but
    /// well-formed zero geometry until a real measurement arrives.
    pub fn solve(&self, container_width: f32) -> Vec<SlotLayout> {
        if container_width <= 0.0 {
            tracing::debug!("layout solved against unmeasured container");
        }
        (0..self.slot_count)
            .map(|slot| self.slot(slot, container_width))
            .collect()
    }
}
