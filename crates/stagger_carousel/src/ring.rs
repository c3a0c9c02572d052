//! Cyclic index ring
//!
//! Maps the orchestrator's rotation offset to per-slot image pairs.
//! Pure modular arithmetic over a fixed image set: slot `i` shows
//! `images[(offset - 1 + i) mod M]` and is about to receive
//! `images[(offset + i) mod M]`. Consecutive slots therefore show
//! consecutive ring elements - the visible window is one unbroken run
//! of the rotation, never independently shuffled per slot.

use stagger_core::ConfigError;

/// The image indices a slot displays at a given rotation offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotImagePair {
    /// Index of the image the slot currently shows
    pub current: usize,
    /// Index of the image the slot transitions to on the next advance
    pub next: usize,
}

/// An ordered, fixed set of image identifiers.
#[derive(Clone, Debug)]
pub struct ImageSet {
    ids: Vec<String>,
}

impl ImageSet {
    /// Rotation over fewer than two images is undefined.
    pub fn new(ids: Vec<String>) -> Result<Self, ConfigError> {
        if ids.len() < 2 {
            return Err(ConfigError::TooFewImages(ids.len()));
        }
        Ok(Self { ids })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Identifier at a ring index. The index must come from `slot_pair`,
    /// which always produces in-range values.
    pub fn id(&self, index: usize) -> &str {
        &self.ids[index % self.ids.len()]
    }

    /// Compute the current/next pair for `slot` at `offset`.
    ///
    /// `offset` is taken modulo M, so callers may pass an un-wrapped
    /// accumulated value. O(1), no state.
    pub fn slot_pair(&self, offset: usize, slot: usize) -> SlotImagePair {
        let m = self.ids.len();
        SlotImagePair {
            current: (offset + slot + m - 1) % m,
            next: (offset + slot) % m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(m: usize) -> ImageSet {
        ImageSet::new((0..m).map(|i| format!("img-{i}")).collect()).unwrap()
    }

    #[test]
    fn rejects_fewer_than_two_images() {
        assert_eq!(
            ImageSet::new(vec!["solo".into()]).unwrap_err(),
            ConfigError::TooFewImages(1)
        );
        assert_eq!(ImageSet::new(vec![]).unwrap_err(), ConfigError::TooFewImages(0));
    }

    #[test]
    fn constructed_set_is_never_empty() {
        let images = set(2);
        assert!(!images.is_empty());
        assert_eq!(images.len(), 2);
    }

    #[test]
    fn current_and_next_always_differ() {
        for m in 2..9 {
            let images = set(m);
            for offset in 0..m {
                for slot in 0..6 {
                    let pair = images.slot_pair(offset, slot);
                    assert_ne!(pair.current, pair.next);
                    assert!(pair.current < m && pair.next < m);
                }
            }
        }
    }

    #[test]
    fn window_is_one_unbroken_rotation() {
        let images = set(7);
        for offset in 0..7 {
            for slot in 1..6 {
                let prev = images.slot_pair(offset, slot - 1);
                let here = images.slot_pair(offset, slot);
                assert_eq!(here.current, (prev.current + 1) % 7);
                assert_eq!(here.next, (prev.next + 1) % 7);
            }
        }
    }

    #[test]
    fn reference_scenario_m7_k6() {
        let images = set(7);
        // offset 0: slot 0 shows the wrapped (0 - 1) mod 7 = 6
        let pair = images.slot_pair(0, 0);
        assert_eq!(pair, SlotImagePair { current: 6, next: 0 });
        // after one advance
        let pair = images.slot_pair(1, 0);
        assert_eq!(pair, SlotImagePair { current: 0, next: 1 });
    }

    #[test]
    fn offset_wraps_modulo_m() {
        let images = set(3);
        assert_eq!(images.slot_pair(5, 0), images.slot_pair(2, 0));
    }
}
