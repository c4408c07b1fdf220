//! The animator: single current-run slot with generation-based
//! cancellation.
//!
//! [`PathAnimator`] owns at most one [`AnimationRun`]. Starting a run
//! supersedes any active one, and cancellation is synchronous: the
//! generation counter advances before the slot changes, so a tick issued
//! against a stale run can never emit a sample. No sample from a
//! superseded run is observable after its replacement's first tick.

use std::time::{Duration, Instant};

use crate::animation::run::{AnimationRun, RunSample};
use crate::core::types::{AnimationSample, Waypoint};

/// Time-driven sampler over the single active animation run.
#[derive(Debug)]
pub struct PathAnimator {
    /// Wall-clock duration applied to every run.
    duration: Duration,

    /// Monotonically increasing run generation. Incremented on every
    /// start and cancel; a run whose generation lags is stale.
    generation: u64,

    /// The single "current run" slot.
    run: Option<AnimationRun>,
}

impl PathAnimator {
    /// Create an animator with the given per-run duration.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            generation: 0,
            run: None,
        }
    }

    /// Start a new run, cancelling any active one.
    ///
    /// Returns the initial sample (first waypoint, heading of the first
    /// segment when one exists), or `None` when `waypoints` is empty — the
    /// degenerate no-animation case, marker hidden.
    ///
    /// Single-waypoint lists complete immediately: the initial sample is
    /// emitted but no run is left in the slot, so no further tick will
    /// ever produce a sample for them.
    pub fn start(&mut self, waypoints: &[Waypoint], now: Instant) -> Option<AnimationSample> {
        self.generation += 1;
        self.run = None;

        if waypoints.is_empty() {
            log::debug!("Animation not started: empty waypoint list");
            return None;
        }

        let run = AnimationRun::new(waypoints.to_vec(), self.duration, now, self.generation);
        let sample = run.initial_sample();

        if waypoints.len() > 1 {
            log::debug!(
                "Animation run {} started: {} waypoints over {:?}",
                self.generation,
                waypoints.len(),
                self.duration
            );
            self.run = Some(run);
        } else {
            // Stationary marker: nothing to schedule beyond this sample.
            log::debug!("Animation run {} is a single point, completing at start", self.generation);
        }

        Some(sample)
    }

    /// Cancel the active run, if any.
    ///
    /// Takes effect synchronously: the generation advances before this
    /// method returns, so any tick already in flight becomes a no-op.
    pub fn cancel(&mut self) {
        if self.run.is_some() {
            log::debug!("Animation run {} cancelled", self.generation);
        }
        self.generation += 1;
        self.run = None;
    }

    /// Whether a run is active (started and neither finished nor
    /// cancelled).
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Current generation counter value.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance the active run to `now` and emit a sample.
    ///
    /// Returns `None` when no run is active or the slot holds a stale
    /// generation. A finishing run emits the final waypoint and vacates
    /// the slot; subsequent ticks return `None`.
    pub fn tick(&mut self, now: Instant) -> Option<AnimationSample> {
        let run = self.run.as_mut()?;

        if run.generation() != self.generation {
            // Stale callback racing a replacement: suppress, never emit.
            self.run = None;
            return None;
        }

        let elapsed = now.saturating_duration_since(run.started_at());
        let RunSample { sample, finished } = run.sample_at(elapsed);

        if finished {
            log::debug!("Animation run {} finished", self.generation);
            self.run = None;
        }

        Some(sample)
    }
}
