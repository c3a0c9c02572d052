//! Stagger Animation System
//!
//! Timed animation primitives for the carousel engine:
//!
//! - **Easing**: Interpolation curves applied per timeline entry
//! - **Timelines**: Explicit finite sequences of `{offset, duration, from, to}`
//!   entries, including zero-duration "set" steps
//! - **Scheduler**: A tick-driven registry of running timelines with
//!   weak handles for registration from owned components
//!
//! Everything advances through [`Scheduler::tick`] with an explicit
//! `dt`; there is no background thread. The caller's event loop is the
//! clock, which keeps timer, input, and completion interleaving on one
//! execution stream.

pub mod easing;
pub mod scheduler;
pub mod timeline;

pub use easing::Easing;
pub use scheduler::{CompletedTimelines, Scheduler, SchedulerHandle, TimelineId};
pub use timeline::{Timeline, TimelineEntryId};
