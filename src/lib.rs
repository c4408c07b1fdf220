//! MargaGuide - Campus navigation guide with animated route playback
//!
//! # Architecture
//!
//! The crate is organized into 4 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                     main.rs                         │  ← Terminal host
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                      nav/                           │  ← State machine
//! │            (controller, state, viewport)            │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                   animation/                        │  ← Path playback
//! │              (animator, run, ticker)                │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                    catalog/                         │  ← Destinations
//! │             (destination, slug, store)              │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │                 (types, math)                       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog maps human-readable destination names to address tokens,
//! turn-by-turn steps, and percentage-based waypoint paths. The animation
//! layer plays a path back over a fixed wall-clock duration, emitting
//! position and heading samples. The navigation layer is an
//! address-driven state machine: changing the externally observable
//! address token is the only way state transitions happen, so external
//! address edits and in-process selections take exactly the same path.

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: Destination catalog (depends on core)
// ============================================================================
pub mod catalog;

// ============================================================================
// Layer 3: Animation (depends on core)
// ============================================================================
pub mod animation;

// ============================================================================
// Layer 4: Navigation state machine (depends on all layers)
// ============================================================================
pub mod nav;

pub mod config;
pub mod error;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

// Core types
pub use core::math;
pub use core::types::{AnimationSample, Waypoint};

// Catalog
pub use catalog::slug;
pub use catalog::{Destination, DestinationCatalog};

// Animation
pub use animation::{FrameTicker, PathAnimator, DEFAULT_RUN_DURATION};

// Navigation
pub use nav::{
    FixedViewport, NavMode, NavigationController, NavigationState, PhotoModal, ViewportProvider,
    ViewportSize,
};

// Config and errors
pub use config::GuideConfig;
pub use error::{GuideError, Result};
