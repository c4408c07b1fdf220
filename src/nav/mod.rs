//! Navigation: the address-driven state machine and its controller.
//!
//! The state machine owns {Home, Navigating}, the active destination, and
//! the animation run lifecycle. All transitions flow through address-token
//! changes; user actions write a new token rather than mutating state
//! directly.

mod controller;
mod state;
mod viewport;

pub use controller::NavigationController;
pub use state::{NavMode, NavigationState, PhotoModal};
pub use viewport::{FixedViewport, ViewportProvider, ViewportSize};
