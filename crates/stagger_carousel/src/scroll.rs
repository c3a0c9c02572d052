//! Pinned scroll sequence (narrow viewports)
//!
//! The mobile replacement for the timed carousel: stacked cards pinned
//! inside a tall scroll region, each revealed and dismissed purely by
//! scroll position. No timers, no completion callbacks - card state is a
//! pure function of the overall scroll fraction, which makes the
//! sequence trivially restartable and direction-reversible.
//!
//! Each card owns an equal share of the scroll range. Its entrance tween
//! begins at a negative offset into that share, deliberately overlapping
//! the previous card's exit so the stack reads as one continuous motion.
//! The first card skips its entrance, the last its exit.

use stagger_core::ScrollSequenceConfig;

/// Resolved presentation of one card at one scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardState {
    /// Vertical offset from the pinned position, pixels
    pub y: f32,
    /// Uniform scale (stacked cards rest slightly shrunken)
    pub scale: f32,
    /// 1.0 visible, 0.0 fully dismissed
    pub alpha: f32,
}

/// Scroll-driven reveal/dismiss over a stack of cards.
#[derive(Clone, Copy, Debug)]
pub struct PinnedScrollSequence {
    config: ScrollSequenceConfig,
    card_count: usize,
}

impl PinnedScrollSequence {
    pub fn new(card_count: usize, config: ScrollSequenceConfig) -> Self {
        Self { config, card_count }
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Height the host should give the scroll region.
    pub fn region_height(&self) -> f32 {
        self.config.card_height * self.card_count as f32
    }

    /// Map a tween window, given in percent of a card's allotted range,
    /// onto absolute scroll fractions. The end is clamped to the region
    /// end; the start may fall before the card's own range (entrance
    /// overlap).
    fn tween_window(&self, card: usize, start_pct: f32, end_pct: f32) -> (f32, f32) {
        let share = 1.0 / self.card_count as f32;
        let start = share * card as f32;
        let end = (start + share).min(1.0);
        let window_start = (end - start) * (start_pct / 100.0) + start;
        let window_end = ((end - start) * (end_pct / 100.0) + start).min(1.0);
        (window_start, window_end)
    }

    /// Progress through a window at scroll `fraction`, clamped to [0, 1].
    fn window_progress(fraction: f32, (start, end): (f32, f32)) -> f32 {
        if end <= start {
            return if fraction >= end { 1.0 } else { 0.0 };
        }
        ((fraction - start) / (end - start)).clamp(0.0, 1.0)
    }

    /// Resolve one card at an overall scroll fraction in [0, 1].
    ///
    /// Returns None for an out-of-range card index. The fraction is
    /// clamped, so overscroll on either end holds the boundary states.
    pub fn card_state(&self, fraction: f32, card: usize) -> Option<CardState> {
        if card >= self.card_count {
            return None;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        let c = self.config;

        // Entrance: from the stacked resting pose to front and center.
        // The first card starts front and center.
        let entered = if card == 0 {
            1.0
        } else {
            let window =
                self.tween_window(card, c.entrance_start_pct, c.entrance_end_pct);
            Self::window_progress(fraction, window)
        };

        // Exit: rise and fade. The last card never leaves.
        let exited = if card + 1 == self.card_count {
            0.0
        } else {
            let window = self.tween_window(card, c.exit_start_pct, 100.0);
            Self::window_progress(fraction, window)
        };

        let rest_scale = 1.0 - c.stack_scale_step * card as f32;
        let rest_y = c.stack_y_step * card as f32;

        let scale = rest_scale + (1.0 - rest_scale) * entered;
        let y = if exited > 0.0 {
            -c.exit_rise * exited
        } else {
            rest_y * (1.0 - entered)
        };

        Some(CardState {
            y,
            scale,
            alpha: 1.0 - exited,
        })
    }

    /// Resolve the whole stack at once.
    pub fn states(&self, fraction: f32) -> Vec<CardState> {
        (0..self.card_count)
            .filter_map(|card| self.card_state(fraction, card))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(n: usize) -> PinnedScrollSequence {
        PinnedScrollSequence::new(n, ScrollSequenceConfig::default())
    }

    #[test]
    fn region_scales_with_card_count() {
        assert_eq!(sequence(7).region_height(), 3500.0);
    }

    #[test]
    fn first_card_starts_front_and_center() {
        let state = sequence(5).card_state(0.0, 0).unwrap();
        assert_eq!(state, CardState { y: 0.0, scale: 1.0, alpha: 1.0 });
    }

    #[test]
    fn last_card_never_exits() {
        let seq = sequence(5);
        let state = seq.card_state(1.0, 4).unwrap();
        assert_eq!(state.alpha, 1.0);
        assert_eq!(state.y, 0.0);
        assert_eq!(state.scale, 1.0);
    }

    #[test]
    fn stacked_card_rests_shrunken_until_its_entrance() {
        let seq = sequence(5);
        let state = seq.card_state(0.0, 3).unwrap();
        assert!((state.scale - 0.85).abs() < 1e-6);
        assert!((state.y - 75.0).abs() < 1e-6);
        assert_eq!(state.alpha, 1.0);
    }

    #[test]
    fn entrance_overlaps_previous_exit() {
        let seq = sequence(5);
        // Card 1's entrance window starts inside card 0's exit window
        let entrance = seq.tween_window(1, -50.0, 20.0);
        let exit = seq.tween_window(0, 35.0, 100.0);
        assert!(entrance.0 > exit.0);
        assert!(entrance.0 < exit.1);
    }

    #[test]
    fn card_passes_through_enter_rest_exit() {
        let seq = sequence(4);
        // Mid-entrance: partially grown
        let (enter_start, enter_end) = seq.tween_window(1, -50.0, 20.0);
        let mid_entrance = (enter_start + enter_end) / 2.0;
        let state = seq.card_state(mid_entrance, 1).unwrap();
        assert!(state.scale > 0.95 && state.scale < 1.0);
        assert!(state.y > 0.0);
        assert_eq!(state.alpha, 1.0);

        // Settled between entrance end and exit start
        let (exit_start, exit_end) = seq.tween_window(1, 35.0, 100.0);
        let settled = (enter_end + exit_start) / 2.0;
        let state = seq.card_state(settled, 1).unwrap();
        assert_eq!(state, CardState { y: 0.0, scale: 1.0, alpha: 1.0 });

        // Mid-exit: rising and fading
        let mid_exit = (exit_start + exit_end) / 2.0;
        let state = seq.card_state(mid_exit, 1).unwrap();
        assert!(state.y < 0.0);
        assert!(state.alpha > 0.0 && state.alpha < 1.0);

        // Fully exited
        let state = seq.card_state(exit_end, 1).unwrap();
        assert_eq!(state.alpha, 0.0);
        assert_eq!(state.y, -400.0);
    }

    #[test]
    fn direction_reversal_is_free() {
        let seq = sequence(5);
        // Same fraction, same state, regardless of travel history
        let forward = seq.card_state(0.42, 2).unwrap();
        let back = seq.card_state(0.42, 2).unwrap();
        assert_eq!(forward, back);
    }

    #[test]
    fn out_of_range_card_is_none() {
        assert!(sequence(3).card_state(0.5, 3).is_none());
    }

    #[test]
    fn overscroll_clamps_to_boundary_states() {
        let seq = sequence(3);
        assert_eq!(seq.card_state(-0.3, 0), seq.card_state(0.0, 0));
        assert_eq!(seq.card_state(1.7, 2), seq.card_state(1.0, 2));
    }
}
