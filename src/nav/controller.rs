//! Navigation controller: the single owner of navigation state.
//!
//! Every transition flows through [`NavigationController::
//! handle_address_change`]; user actions (select destination, go home)
//! write a new address token and re-enter that same decision logic, so
//! the token stays the single source of truth. The controller also owns
//! the animator's run slot: entering Navigating starts a run, and every
//! transition cancels whatever run was active.

use std::time::{Duration, Instant};

use crate::animation::PathAnimator;
use crate::catalog::{slug, DestinationCatalog};
use crate::core::types::AnimationSample;
use crate::nav::state::{NavMode, NavigationState, PhotoModal};
use crate::nav::viewport::ViewportProvider;

/// Notice shown when the address token matches no destination.
const INVALID_TOKEN_MESSAGE: &str = "Invalid destination in URL. Please select from the list.";

/// Notice shown when a selected name is missing from the catalog.
const UNKNOWN_SELECTION_MESSAGE: &str = "Selected destination not found in routes.";

/// Notice shown when the photo action finds no photo reference.
const NO_PHOTO_MESSAGE: &str = "No specific photo available for this building.";

/// Notice shown when the photo action finds no active destination.
const NO_DESTINATION_MESSAGE: &str = "Destination not found.";

/// Address-driven navigation state machine and animation owner.
///
/// Runs for the process lifetime; there is no terminal state. Hosts feed
/// it address changes and ticks, and read snapshots back.
pub struct NavigationController {
    catalog: DestinationCatalog,
    state: NavigationState,
    animator: PathAnimator,
    viewport: Box<dyn ViewportProvider + Send>,
    token: String,
}

impl NavigationController {
    /// Create a controller in the Home state.
    ///
    /// `duration` is the global animation run duration; `viewport` is the
    /// host-supplied dimension capability.
    pub fn new(
        catalog: DestinationCatalog,
        duration: Duration,
        viewport: Box<dyn ViewportProvider + Send>,
    ) -> Self {
        Self {
            catalog,
            state: NavigationState::new(),
            animator: PathAnimator::new(duration),
            viewport,
            token: String::new(),
        }
    }

    /// React to a change of the externally observable address token.
    ///
    /// Decision table:
    /// - empty token → Home, message cleared;
    /// - token resolving to a destination → Navigating with steps loaded,
    ///   message cleared, animation started from the first waypoint;
    /// - anything else → Home with an invalid-destination notice.
    ///
    /// Entering either mode closes the photo modal and cancels the active
    /// animation run before anything else happens.
    pub fn handle_address_change(&mut self, token: &str, now: Instant) {
        self.token = token.to_string();
        self.state.photo_modal = None;
        self.animator.cancel();

        if token.is_empty() {
            log::info!("Address cleared, returning home");
            self.state.reset_to_home();
            self.state.clear_status();
            return;
        }

        let Some(dest) = self.catalog.resolve_token(token) else {
            log::warn!("Unresolvable address token: {}", token);
            self.state.reset_to_home();
            self.state.set_status(INVALID_TOKEN_MESSAGE);
            return;
        };

        let name = dest.name.clone();
        let steps = dest.steps.clone();
        let waypoints = dest.waypoints.clone();

        log::info!(
            "Navigating to {} ({} steps, {} waypoints)",
            name,
            steps.len(),
            waypoints.len()
        );

        self.state.mode = NavMode::Navigating;
        self.state.active_destination = Some(name);
        self.state.steps = steps;
        self.state.clear_status();

        // Empty waypoint lists are a defined degenerate case: no run, no
        // marker.
        self.state.marker = self.animator.start(&waypoints, now);
    }

    /// Select a destination from the home list.
    ///
    /// Writes `encode(name)` as the new token and re-enters the address
    /// decision logic; never mutates navigation state directly.
    pub fn select_destination(&mut self, name: &str, now: Instant) {
        if self.catalog.get(name).is_none() {
            self.state.set_status(UNKNOWN_SELECTION_MESSAGE);
            return;
        }

        let token = slug::encode(name);
        self.handle_address_change(&token, now);
    }

    /// Clear the token and return home.
    pub fn go_home(&mut self, now: Instant) {
        self.handle_address_change("", now);
    }

    /// Open the destination photo modal.
    ///
    /// Missing photo references and missing destinations are recovered
    /// locally with a status message; nothing propagates.
    pub fn open_photo(&mut self) {
        let Some(name) = self.state.active_destination.as_deref() else {
            self.state.set_status(NO_DESTINATION_MESSAGE);
            return;
        };

        let Some(dest) = self.catalog.get(name) else {
            self.state.set_status(NO_DESTINATION_MESSAGE);
            return;
        };

        if !dest.has_photo() {
            self.state.set_status(NO_PHOTO_MESSAGE);
            return;
        }

        let url = dest.photo_url.clone().unwrap_or_default();
        let is_video = dest.photo_is_video();

        self.state.photo_modal = Some(PhotoModal { url, is_video });
    }

    /// Close the photo modal, if open.
    pub fn close_photo(&mut self) {
        self.state.photo_modal = None;
    }

    /// Advance the active animation run to `now`.
    ///
    /// Updates the marker snapshot and returns the emitted sample, or
    /// `None` when no run is active (including stale post-cancellation
    /// ticks, which are suppressed inside the animator).
    pub fn tick(&mut self, now: Instant) -> Option<AnimationSample> {
        let sample = self.animator.tick(now)?;
        self.state.marker = Some(sample);
        Some(sample)
    }

    /// Whether the marker should currently be rendered.
    ///
    /// Requires both an emitted sample and a ready viewport; rendering
    /// before dimensions settle would flash the marker at (0, 0).
    pub fn marker_visible(&self) -> bool {
        self.state.marker.is_some() && self.viewport.is_ready()
    }

    /// Read-only snapshot of the navigation state.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Current address token (empty at Home).
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Whether an animation run is active.
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// The destination catalog this controller serves.
    pub fn catalog(&self) -> &DestinationCatalog {
        &self.catalog
    }
}
