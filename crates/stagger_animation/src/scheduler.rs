//! Animation scheduler
//!
//! Owns all running timelines and advances them in lockstep. Components
//! register timelines through a [`SchedulerHandle`] (a weak reference,
//! so a detached component degrades to no-ops instead of keeping the
//! scheduler alive) and the owner drives everything from its event loop
//! via [`Scheduler::tick`].
//!
//! The scheduler is deliberately clock-less: `tick` takes an explicit
//! `dt` so the caller's loop is the single source of time and completion
//! callbacks interleave deterministically with input and timer events.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::sync::{Arc, Mutex, Weak};

use crate::timeline::Timeline;

new_key_type! {
    /// Handle to a registered timeline
    pub struct TimelineId;
}

/// Timelines completed in one tick. Inline capacity covers a full
/// six-slot carousel rotation without allocating.
pub type CompletedTimelines = SmallVec<[TimelineId; 8]>;

struct SchedulerInner {
    timelines: SlotMap<TimelineId, Timeline>,
}

/// The registry that ticks all active timelines.
pub struct Scheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                timelines: SlotMap::with_key(),
            })),
        }
    }

    /// Get a weak handle for passing to components.
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Advance every playing timeline by `dt_ms` and collect the ids of
    /// those that finished on this tick, in registration order.
    pub fn tick(&self, dt_ms: f32) -> CompletedTimelines {
        let mut inner = self.inner.lock().unwrap();
        let mut completed = CompletedTimelines::new();
        for (id, timeline) in inner.timelines.iter_mut() {
            if timeline.is_playing() {
                timeline.tick(dt_ms);
                if timeline.take_finished() {
                    completed.push(id);
                }
            }
        }
        if !completed.is_empty() {
            tracing::debug!(count = completed.len(), "timelines completed");
        }
        completed
    }

    /// True while any registered timeline is playing.
    pub fn has_active(&self) -> bool {
        self.inner
            .lock()
            .unwrap()
            .timelines
            .iter()
            .any(|(_, t)| t.is_playing())
    }

    pub fn timeline_count(&self) -> usize {
        self.inner.lock().unwrap().timelines.len()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the scheduler.
///
/// Passed to components that need to register or drive timelines. Every
/// operation is a no-op returning `None`/default once the scheduler is
/// dropped, so teardown order never matters.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Register a timeline and return its id.
    pub fn register(&self, timeline: Timeline) -> Option<TimelineId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().timelines.insert(timeline))
    }

    /// Remove a timeline. Safe to call with an already-removed id.
    pub fn remove(&self, id: TimelineId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().timelines.remove(id);
        }
    }

    /// Replace a registered timeline in place, restarting nothing.
    ///
    /// Used to swap a slot's sequence for a new one under the same id;
    /// the old entries are dropped with the old timeline, so no orphaned
    /// steps can fire afterwards.
    pub fn replace(&self, id: TimelineId, timeline: Timeline) -> bool {
        self.with_timeline(id, |slot| *slot = timeline).is_some()
    }

    /// Access a timeline through a closure.
    ///
    /// Returns None if the scheduler is gone or the id is stale.
    pub fn with_timeline<F, R>(&self, id: TimelineId, f: F) -> Option<R>
    where
        F: FnOnce(&mut Timeline) -> R,
    {
        self.inner.upgrade().and_then(|inner| {
            inner
                .lock()
                .unwrap()
                .timelines
                .get_mut(id)
                .map(|timeline| f(timeline))
        })
    }

    /// Sample one entry of a timeline.
    pub fn value(
        &self,
        id: TimelineId,
        entry: crate::timeline::TimelineEntryId,
    ) -> Option<f32> {
        self.with_timeline(id, |timeline| timeline.value(entry))
            .flatten()
    }

    /// Check if a timeline is currently playing.
    pub fn is_playing(&self, id: TimelineId) -> bool {
        self.with_timeline(id, |timeline| timeline.is_playing())
            .unwrap_or(false)
    }

    /// Check if the scheduler is still alive.
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}
