//! Per-frame runtime systems.
//!
//! Provides the component-registered animations and FPS reporting to the
//! host page and native overlay.

/// Idle spin and opacity fade, registered per entity through components.
pub mod animation;

/// FPS tracking and notification systems for performance monitoring.
///
/// Sends frame rate updates to frontend via RPC and updates native UI overlays.
pub mod fps_tracking;
