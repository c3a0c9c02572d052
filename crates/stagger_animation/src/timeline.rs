//! Timeline animation
//!
//! A timeline is an explicit finite sequence of timed instructions: each
//! entry interpolates one value from `from` to `to` over `duration_ms`,
//! starting `offset_ms` into the sequence. Entries may overlap (two
//! layers sliding at once) and a zero-duration entry acts as an
//! immediate "set" that snaps once playback reaches its offset.
//!
//! Timelines do not know about wall time. They advance only through
//! [`Timeline::tick`] and expose their state through per-entry
//! [`Timeline::value`] sampling, which keeps them trivially testable and
//! lets the scheduler own all clocking.

use crate::easing::Easing;

/// Identifies one entry within its timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimelineEntryId(usize);

#[derive(Clone, Copy, Debug)]
struct TimelineEntry {
    /// Start offset from the timeline origin, milliseconds
    offset_ms: u32,
    /// Zero duration means "set at offset"
    duration_ms: u32,
    from: f32,
    to: f32,
    easing: Easing,
}

impl TimelineEntry {
    fn end_ms(&self) -> u32 {
        self.offset_ms + self.duration_ms
    }

    fn sample(&self, elapsed_ms: f32) -> f32 {
        if elapsed_ms < self.offset_ms as f32 {
            return self.from;
        }
        if self.duration_ms == 0 {
            return self.to;
        }
        let t = (elapsed_ms - self.offset_ms as f32) / self.duration_ms as f32;
        self.from + (self.to - self.from) * self.easing.apply(t)
    }
}

/// A finite sequence of timed interpolation entries.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
    elapsed_ms: f32,
    playing: bool,
    finished: bool,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an interpolation entry with the default easing.
    pub fn add(&mut self, offset_ms: u32, duration_ms: u32, from: f32, to: f32) -> TimelineEntryId {
        self.add_with_easing(offset_ms, duration_ms, from, to, Easing::default())
    }

    /// Add an interpolation entry with a specific easing curve.
    pub fn add_with_easing(
        &mut self,
        offset_ms: u32,
        duration_ms: u32,
        from: f32,
        to: f32,
        easing: Easing,
    ) -> TimelineEntryId {
        self.entries.push(TimelineEntry {
            offset_ms,
            duration_ms,
            from,
            to,
            easing,
        });
        TimelineEntryId(self.entries.len() - 1)
    }

    /// Add an immediate "set" step: the value snaps from `from` to `to`
    /// the moment playback reaches `offset_ms`.
    pub fn set_at(&mut self, offset_ms: u32, from: f32, to: f32) -> TimelineEntryId {
        self.add_with_easing(offset_ms, 0, from, to, Easing::Linear)
    }

    /// Total length of the sequence: the latest entry end.
    pub fn duration_ms(&self) -> u32 {
        self.entries.iter().map(TimelineEntry::end_ms).max().unwrap_or(0)
    }

    /// Start (or restart) playback from the origin.
    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.playing = true;
        self.finished = false;
    }

    /// Halt playback where it stands.
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Jump to an absolute time position without changing play state.
    pub fn seek(&mut self, time_ms: f32) {
        self.elapsed_ms = time_ms.clamp(0.0, self.duration_ms() as f32);
    }

    /// Advance by `dt_ms`. Returns true while still playing; on the tick
    /// that crosses the total duration the timeline clamps to its end,
    /// stops, and raises the finished flag exactly once.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.playing {
            return false;
        }
        self.elapsed_ms += dt_ms;
        let total = self.duration_ms() as f32;
        if self.elapsed_ms >= total {
            self.elapsed_ms = total;
            self.playing = false;
            self.finished = true;
        }
        self.playing
    }

    /// Consume the finished flag. True exactly once per completed run.
    pub fn take_finished(&mut self) -> bool {
        std::mem::take(&mut self.finished)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Current value of an entry, or None for a foreign id.
    pub fn value(&self, entry: TimelineEntryId) -> Option<f32> {
        self.entries.get(entry.0).map(|e| e.sample(self.elapsed_ms))
    }

    /// Overall progress through the sequence, 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        let total = self.duration_ms();
        if total == 0 {
            return 0.0;
        }
        (self.elapsed_ms / total as f32).clamp(0.0, 1.0)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_hold_start_value_before_offset() {
        let mut tl = Timeline::new();
        let slide = tl.add_with_easing(200, 300, 2.0, 1.0, Easing::Linear);
        tl.start();
        tl.tick(100.0);
        assert_eq!(tl.value(slide), Some(2.0));
        tl.tick(250.0); // elapsed 350 = halfway through the entry
        let v = tl.value(slide).unwrap();
        assert!((v - 1.5).abs() < 1e-4);
    }

    #[test]
    fn set_step_snaps_at_offset() {
        let mut tl = Timeline::new();
        tl.add(0, 500, 0.0, -1.0);
        let park = tl.set_at(500, 0.0, 1.0);
        tl.start();
        tl.tick(499.0);
        assert_eq!(tl.value(park), Some(0.0));
        tl.tick(1.0);
        assert_eq!(tl.value(park), Some(1.0));
    }

    #[test]
    fn finishes_once_and_clamps() {
        let mut tl = Timeline::new();
        let entry = tl.add_with_easing(0, 100, 0.0, 1.0, Easing::Linear);
        tl.start();
        assert!(tl.tick(60.0));
        assert!(!tl.tick(60.0)); // crosses the end
        assert!(tl.take_finished());
        assert!(!tl.take_finished());
        assert_eq!(tl.value(entry), Some(1.0));
        assert!(!tl.is_playing());
    }

    #[test]
    fn restart_resets_elapsed_and_flag() {
        let mut tl = Timeline::new();
        let entry = tl.add_with_easing(0, 100, 0.0, 1.0, Easing::Linear);
        tl.start();
        tl.tick(200.0);
        assert!(tl.take_finished());
        tl.start();
        assert_eq!(tl.value(entry), Some(0.0));
        assert!(tl.is_playing());
        assert_eq!(tl.progress(), 0.0);
    }

    #[test]
    fn empty_timeline_finishes_immediately() {
        let mut tl = Timeline::new();
        tl.start();
        assert!(!tl.tick(0.0));
        assert!(tl.take_finished());
    }
}
