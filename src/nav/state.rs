//! Navigation state snapshot.
//!
//! [`NavigationState`] is the value the presentation layer reads. It is
//! owned and mutated exclusively by the
//! [`NavigationController`](crate::nav::NavigationController); hosts only
//! ever see `&NavigationState`.

use crate::core::types::AnimationSample;
use serde::{Deserialize, Serialize};

/// Which view the guide is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NavMode {
    /// Destination list, no active navigation.
    #[default]
    Home,

    /// Showing directions and the animated marker for one destination.
    Navigating,
}

impl NavMode {
    /// Convert to string for display and logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            NavMode::Home => "HOME",
            NavMode::Navigating => "NAVIGATING",
        }
    }
}

/// Content of the open destination photo modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoModal {
    /// Opaque media URI to display.
    pub url: String,
    /// Whether the URI points at a video rather than a still image.
    pub is_video: bool,
}

/// Read-only snapshot of the navigation state machine.
///
/// Created in Home at process start; transitions only through address
/// changes; never persisted.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    /// Current view mode.
    pub mode: NavMode,

    /// Canonical name of the active destination (Navigating only).
    pub active_destination: Option<String>,

    /// Turn-by-turn steps loaded from the active destination.
    pub steps: Vec<String>,

    /// Short user-visible notice (invalid token, missing photo, ...).
    pub status_message: Option<String>,

    /// Latest marker sample emitted by the active or just-finished run.
    ///
    /// `None` while at Home or when the destination has no waypoints.
    pub marker: Option<AnimationSample>,

    /// Open photo modal, if any.
    pub photo_modal: Option<PhotoModal>,
}

impl NavigationState {
    /// Create the initial state (Home, everything cleared).
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the machine is in the Navigating mode.
    pub fn is_navigating(&self) -> bool {
        self.mode == NavMode::Navigating
    }

    /// Set the user-visible status message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Return to Home, clearing destination, steps, and marker.
    ///
    /// The photo modal is closed on every transition, including this one.
    pub fn reset_to_home(&mut self) {
        self.mode = NavMode::Home;
        self.active_destination = None;
        self.steps.clear();
        self.marker = None;
        self.photo_modal = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_home() {
        let state = NavigationState::new();

        assert_eq!(state.mode, NavMode::Home);
        assert!(!state.is_navigating());
        assert!(state.active_destination.is_none());
        assert!(state.status_message.is_none());
        assert!(state.marker.is_none());
        assert!(state.photo_modal.is_none());
    }

    #[test]
    fn test_reset_to_home_clears_everything() {
        let mut state = NavigationState::new();
        state.mode = NavMode::Navigating;
        state.active_destination = Some("ADMIN BUILDING".to_string());
        state.steps = vec!["Go straight.".to_string()];
        state.marker = Some(AnimationSample {
            x: 31.0,
            y: 19.0,
            heading_deg: 0.0,
        });
        state.photo_modal = Some(PhotoModal {
            url: "https://example.com/admin.jpg".to_string(),
            is_video: false,
        });

        state.reset_to_home();

        assert_eq!(state.mode, NavMode::Home);
        assert!(state.active_destination.is_none());
        assert!(state.steps.is_empty());
        assert!(state.marker.is_none());
        assert!(state.photo_modal.is_none());
    }

    #[test]
    fn test_mode_as_str() {
        assert_eq!(NavMode::Home.as_str(), "HOME");
        assert_eq!(NavMode::Navigating.as_str(), "NAVIGATING");
    }
}
