//! Viewport capability: container dimensions supplied by the host.
//!
//! Waypoints are percentage-based, so geometry never gates animation
//! correctness — but the marker must not be rendered before dimensions
//! are known, or it flashes at (0, 0). The presentation layer injects a
//! [`ViewportProvider`]; the core only asks whether dimensions are ready.

use crate::core::types::AnimationSample;

/// Known dimensions of the map container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    /// Container width in pixels.
    pub width: f32,
    /// Container height in pixels.
    pub height: f32,
}

impl ViewportSize {
    /// Create a viewport size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Project a percentage-based sample into pixel coordinates.
    pub fn project(&self, sample: &AnimationSample) -> (f32, f32) {
        (
            self.width * sample.x / 100.0,
            self.height * sample.y / 100.0,
        )
    }
}

/// Capability supplied by the presentation layer: how big is the map
/// container right now?
///
/// `None` means layout has not settled yet (media still loading, window
/// not measured). How dimensions are obtained is the host's business.
pub trait ViewportProvider {
    /// Current container dimensions, or `None` while layout is pending.
    fn dimensions(&self) -> Option<ViewportSize>;

    /// Whether dimensions are available.
    fn is_ready(&self) -> bool {
        self.dimensions().is_some()
    }
}

/// A viewport with fixed, immediately-available dimensions.
///
/// Suitable for terminal hosts and tests; GUI hosts would implement
/// [`ViewportProvider`] over their layout system instead.
#[derive(Debug, Clone, Copy)]
pub struct FixedViewport {
    size: Option<ViewportSize>,
}

impl FixedViewport {
    /// A viewport that is ready with the given dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Some(ViewportSize::new(width, height)),
        }
    }

    /// A viewport whose dimensions are never available.
    pub fn unready() -> Self {
        Self { size: None }
    }
}

impl ViewportProvider for FixedViewport {
    fn dimensions(&self) -> Option<ViewportSize> {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fixed_viewport_readiness() {
        assert!(FixedViewport::new(800.0, 500.0).is_ready());
        assert!(!FixedViewport::unready().is_ready());
    }

    #[test]
    fn test_projection() {
        let size = ViewportSize::new(800.0, 500.0);
        let sample = AnimationSample {
            x: 50.0,
            y: 60.0,
            heading_deg: 0.0,
        };

        let (px, py) = size.project(&sample);
        assert_relative_eq!(px, 400.0);
        assert_relative_eq!(py, 300.0);
    }
}
