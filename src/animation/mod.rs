//! Path animation: runs, the animator run slot, and the frame ticker.
//!
//! The animator turns an ordered waypoint list and a fixed wall-clock
//! duration into a stream of (position, heading) samples, one per tick of
//! the host's frame scheduler.

mod animator;
mod run;
mod ticker;

pub use animator::PathAnimator;
pub use run::{AnimationRun, RunSample};
pub use ticker::FrameTicker;

use std::time::Duration;

/// Wall-clock duration of every animation run.
///
/// A single global constant shared by all runs; duration is not
/// configurable per destination.
pub const DEFAULT_RUN_DURATION: Duration = Duration::from_millis(3000);
