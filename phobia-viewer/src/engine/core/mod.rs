//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, frame ordering and
//! plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app, wires the loading, transition and reporting systems
/// into their frame sets.
pub mod app_setup;

/// Application state tracking the loading phase.
pub mod app_state;

/// Typed failures surfaced at startup and in load logging.
pub mod error;

/// Per-frame ordering of the update systems.
pub mod frame_set;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and checks the host page.
pub mod window_config;
