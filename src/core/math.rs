//! Mathematical primitives for marker movement.
//!
//! Functions for linear interpolation and marker heading computation.

/// Heading offset applied to every marker heading (degrees).
///
/// The marker icon's neutral orientation points "up", so the raw
/// direction-of-travel angle is rotated by 90° to align the icon
/// with the path.
pub const MARKER_HEADING_OFFSET_DEG: f32 = 90.0;

/// Linear interpolation between two scalars.
///
/// `t` should be in [0, 1] where 0 returns `a` and 1 returns `b`.
///
/// # Example
/// ```
/// use marga_guide::core::math::lerp;
///
/// assert!((lerp(0.0, 10.0, 0.25) - 2.5).abs() < 1e-6);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Marker heading in degrees for a movement of (dx, dy).
///
/// Computes `atan2(dy, dx)` in degrees plus [`MARKER_HEADING_OFFSET_DEG`].
///
/// # Example
/// ```
/// use marga_guide::core::math::marker_heading_deg;
///
/// // Diagonal movement: 45° of travel + 90° icon offset.
/// assert!((marker_heading_deg(1.0, 1.0) - 135.0).abs() < 1e-4);
/// ```
#[inline]
pub fn marker_heading_deg(dx: f32, dy: f32) -> f32 {
    dy.atan2(dx).to_degrees() + MARKER_HEADING_OFFSET_DEG
}
