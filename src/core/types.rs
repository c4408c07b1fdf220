//! Core value types shared across catalog, animation, and navigation.

use crate::core::math::{lerp, marker_heading_deg};
use serde::{Deserialize, Serialize};

/// A single point on a marker path.
///
/// Coordinates are percentages of the map container, so both `x` and `y`
/// are expected to lie in [0, 100]. Percentage units keep paths valid
/// under container resizing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Horizontal position (percent of container width).
    pub x: f32,
    /// Vertical position (percent of container height).
    pub y: f32,
}

impl Waypoint {
    /// Create a new waypoint.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Check that both coordinates lie within the percentage range.
    #[inline]
    pub fn in_bounds(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }

    /// Interpolate between this waypoint and another.
    ///
    /// `t` should be in [0, 1] where 0 returns `self` and 1 returns `other`.
    #[inline]
    pub fn lerp_toward(&self, other: &Waypoint, t: f32) -> Waypoint {
        Waypoint::new(lerp(self.x, other.x, t), lerp(self.y, other.y, t))
    }

    /// Marker heading in degrees when traveling from this waypoint to another.
    ///
    /// Includes the marker icon's 90° neutral-orientation offset.
    #[inline]
    pub fn marker_heading_to(&self, other: &Waypoint) -> f32 {
        marker_heading_deg(other.x - self.x, other.y - self.y)
    }
}

impl From<(f32, f32)> for Waypoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// One instantaneous marker sample emitted by an animation run.
///
/// Position is in the same percentage units as [`Waypoint`]; heading is in
/// degrees and already includes the marker icon offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSample {
    /// Horizontal position (percent of container width).
    pub x: f32,
    /// Vertical position (percent of container height).
    pub y: f32,
    /// Marker heading in degrees.
    pub heading_deg: f32,
}

impl AnimationSample {
    /// Create a sample at a waypoint with the given heading.
    #[inline]
    pub fn at(waypoint: Waypoint, heading_deg: f32) -> Self {
        Self {
            x: waypoint.x,
            y: waypoint.y,
            heading_deg,
        }
    }

    /// Position as a waypoint value.
    #[inline]
    pub fn position(&self) -> Waypoint {
        Waypoint::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_waypoint_in_bounds() {
        assert!(Waypoint::new(0.0, 0.0).in_bounds());
        assert!(Waypoint::new(100.0, 100.0).in_bounds());
        assert!(!Waypoint::new(-0.1, 50.0).in_bounds());
        assert!(!Waypoint::new(50.0, 100.5).in_bounds());
    }

    #[test]
    fn test_lerp_toward() {
        let a = Waypoint::new(20.0, 90.0);
        let b = Waypoint::new(35.0, 75.0);

        let mid = a.lerp_toward(&b, 0.5);
        assert_relative_eq!(mid.x, 27.5);
        assert_relative_eq!(mid.y, 82.5);

        assert_eq!(a.lerp_toward(&b, 0.0), a);
        assert_eq!(a.lerp_toward(&b, 1.0), b);
    }

    #[test]
    fn test_marker_heading_to() {
        let a = Waypoint::new(0.0, 0.0);
        let b = Waypoint::new(1.0, 1.0);

        assert_relative_eq!(a.marker_heading_to(&b), 135.0, epsilon = 1e-4);
    }

    #[test]
    fn test_sample_at() {
        let sample = AnimationSample::at(Waypoint::new(20.0, 90.0), 45.0);

        assert_relative_eq!(sample.x, 20.0);
        assert_relative_eq!(sample.y, 90.0);
        assert_relative_eq!(sample.heading_deg, 45.0);
        assert_eq!(sample.position(), Waypoint::new(20.0, 90.0));
    }

    #[test]
    fn test_waypoint_from_tuple() {
        let wp: Waypoint = (50.0, 60.0).into();
        assert_eq!(wp, Waypoint::new(50.0, 60.0));
    }
}
