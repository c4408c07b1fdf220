//! A single animation run over a waypoint polyline.
//!
//! [`AnimationRun`] maps elapsed wall-clock time onto the polyline: total
//! progress is scaled by the segment count, the integer part selects the
//! segment, and the fractional part interpolates within it. Heading
//! follows the current segment's direction and is retained while
//! traversing the final segment.

use std::time::{Duration, Instant};

use crate::core::types::{AnimationSample, Waypoint};

/// Result of sampling a run at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSample {
    /// The emitted marker sample.
    pub sample: AnimationSample,
    /// Whether the run reached its end (final waypoint emitted).
    pub finished: bool,
}

/// One execution of the path animator, from start until completion or
/// cancellation.
///
/// Runs are transient: created on entry into navigation, replaced
/// wholesale when a new run starts. Re-entering the same destination
/// restarts from the first waypoint; runs never resume.
#[derive(Debug, Clone)]
pub struct AnimationRun {
    waypoints: Vec<Waypoint>,
    duration: Duration,
    started_at: Instant,
    generation: u64,
    /// Heading carried between ticks; holds its value on the final
    /// segment and on single-point paths.
    heading_deg: f32,
}

impl AnimationRun {
    /// Create a run over a non-empty waypoint list.
    ///
    /// The caller (the animator) guarantees `waypoints` is non-empty.
    pub(crate) fn new(
        waypoints: Vec<Waypoint>,
        duration: Duration,
        started_at: Instant,
        generation: u64,
    ) -> Self {
        debug_assert!(!waypoints.is_empty());

        let heading_deg = if waypoints.len() > 1 {
            waypoints[0].marker_heading_to(&waypoints[1])
        } else {
            0.0
        };

        Self {
            waypoints,
            duration,
            started_at,
            generation,
            heading_deg,
        }
    }

    /// The sample emitted at run start: the first waypoint, facing the
    /// first segment when one exists.
    pub fn initial_sample(&self) -> AnimationSample {
        AnimationSample::at(self.waypoints[0], self.heading_deg)
    }

    /// Instant this run started.
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Generation counter value this run was started under.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Sample the run at the given elapsed time since start.
    ///
    /// Progress past the full duration emits the final waypoint and marks
    /// the run finished; the owner must not sample it again.
    pub fn sample_at(&mut self, elapsed: Duration) -> RunSample {
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();

        if progress >= 1.0 {
            let last = self.waypoints[self.waypoints.len() - 1];
            return RunSample {
                sample: AnimationSample::at(last, self.heading_deg),
                finished: true,
            };
        }

        let segments = self.waypoints.len() - 1;
        if segments == 0 {
            // Single point: hold position, heading retained.
            return RunSample {
                sample: AnimationSample::at(self.waypoints[0], self.heading_deg),
                finished: false,
            };
        }

        let scaled = progress * segments as f32;
        let segment_index = (scaled.floor() as usize).min(segments - 1);
        let fraction = scaled - segment_index as f32;

        let p1 = self.waypoints[segment_index];
        let p2 = self.waypoints[segment_index + 1];
        let position = p1.lerp_toward(&p2, fraction);

        // Heading follows the segment direction except on the final
        // segment, where the previous heading is retained.
        if segment_index + 1 < segments {
            self.heading_deg = p1.marker_heading_to(&p2);
        }

        RunSample {
            sample: AnimationSample::at(position, self.heading_deg),
            finished: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn campus_path() -> Vec<Waypoint> {
        vec![
            Waypoint::new(20.0, 90.0),
            Waypoint::new(35.0, 75.0),
            Waypoint::new(50.0, 60.0),
            Waypoint::new(65.0, 45.0),
            Waypoint::new(75.0, 30.0),
        ]
    }

    fn make_run(waypoints: Vec<Waypoint>) -> AnimationRun {
        AnimationRun::new(waypoints, Duration::from_millis(3000), Instant::now(), 1)
    }

    #[test]
    fn test_initial_sample_at_first_waypoint() {
        let run = make_run(campus_path());
        let sample = run.initial_sample();

        assert_relative_eq!(sample.x, 20.0);
        assert_relative_eq!(sample.y, 90.0);
    }

    #[test]
    fn test_initial_heading_faces_first_segment() {
        let run = make_run(vec![Waypoint::new(0.0, 0.0), Waypoint::new(1.0, 1.0)]);

        assert_relative_eq!(run.initial_sample().heading_deg, 135.0, epsilon = 1e-4);
    }

    #[test]
    fn test_initial_heading_single_point_is_neutral() {
        let run = make_run(vec![Waypoint::new(40.0, 40.0)]);

        assert_relative_eq!(run.initial_sample().heading_deg, 0.0);
    }

    #[test]
    fn test_sample_at_start() {
        let mut run = make_run(campus_path());
        let RunSample { sample, finished } = run.sample_at(Duration::ZERO);

        assert!(!finished);
        assert_relative_eq!(sample.x, 20.0);
        assert_relative_eq!(sample.y, 90.0);
    }

    #[test]
    fn test_sample_at_halfway_lands_on_middle_waypoint() {
        // progress 0.5 over 4 segments: scaled 2.0, index 2, fraction 0.
        let mut run = make_run(campus_path());
        let RunSample { sample, finished } = run.sample_at(Duration::from_millis(1500));

        assert!(!finished);
        assert_relative_eq!(sample.x, 50.0, epsilon = 1e-4);
        assert_relative_eq!(sample.y, 60.0, epsilon = 1e-4);
    }

    #[test]
    fn test_sample_within_segment_interpolates() {
        // progress 0.125 over 4 segments: scaled 0.5, halfway along segment 0.
        let mut run = make_run(campus_path());
        let RunSample { sample, .. } = run.sample_at(Duration::from_millis(375));

        assert_relative_eq!(sample.x, 27.5, epsilon = 1e-4);
        assert_relative_eq!(sample.y, 82.5, epsilon = 1e-4);
    }

    #[test]
    fn test_sample_at_duration_is_final() {
        let mut run = make_run(campus_path());
        let RunSample { sample, finished } = run.sample_at(Duration::from_millis(3000));

        assert!(finished);
        assert_relative_eq!(sample.x, 75.0);
        assert_relative_eq!(sample.y, 30.0);
    }

    #[test]
    fn test_sample_past_duration_is_final() {
        let mut run = make_run(campus_path());
        let RunSample { sample, finished } = run.sample_at(Duration::from_millis(10_000));

        assert!(finished);
        assert_relative_eq!(sample.x, 75.0);
        assert_relative_eq!(sample.y, 30.0);
    }

    #[test]
    fn test_single_point_holds_position() {
        let mut run = make_run(vec![Waypoint::new(40.0, 40.0)]);

        let RunSample { sample, finished } = run.sample_at(Duration::from_millis(1500));
        assert!(!finished);
        assert_relative_eq!(sample.x, 40.0);
        assert_relative_eq!(sample.y, 40.0);

        let RunSample { sample, finished } = run.sample_at(Duration::from_millis(3000));
        assert!(finished);
        assert_relative_eq!(sample.x, 40.0);
        assert_relative_eq!(sample.y, 40.0);
    }

    #[test]
    fn test_heading_updates_on_direction_change() {
        // Right, then up: heading should change between the two segments.
        let mut run = make_run(vec![
            Waypoint::new(0.0, 50.0),
            Waypoint::new(50.0, 50.0),
            Waypoint::new(50.0, 0.0),
        ]);

        // progress 0.25: scaled 0.5, inside segment 0 (moving right).
        let first = run.sample_at(Duration::from_millis(750)).sample;
        assert_relative_eq!(first.heading_deg, 90.0, epsilon = 1e-4);

        // progress 0.75: scaled 1.5, inside segment 1, which is the final
        // segment, so the heading from segment 0 is retained.
        let second = run.sample_at(Duration::from_millis(2250)).sample;
        assert_relative_eq!(second.heading_deg, 90.0, epsilon = 1e-4);
    }

    #[test]
    fn test_heading_retained_on_final_segment_of_longer_path() {
        let mut run = make_run(vec![
            Waypoint::new(0.0, 50.0),
            Waypoint::new(25.0, 50.0),
            Waypoint::new(50.0, 50.0),
            Waypoint::new(50.0, 0.0),
        ]);

        // Segment 1 (index 1 of 3) moves right: heading updates.
        let mid = run.sample_at(Duration::from_millis(1500)).sample;
        assert_relative_eq!(mid.heading_deg, 90.0, epsilon = 1e-4);

        // Final segment moves up, but heading holds the prior value.
        let late = run.sample_at(Duration::from_millis(2900)).sample;
        assert_relative_eq!(late.heading_deg, 90.0, epsilon = 1e-4);
    }
}
