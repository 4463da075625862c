//! Asynchronous load tracking for the staged scene.
//!
//! One poller turns asset-server load states into `LoadSettled` events; the
//! texture gate and the progress reporter each consume those events on their
//! own, so completion order never matters.

/// Counting gate that opens once a known number of loads have completed.
pub mod load_counter;

/// Registry of requested loads and the poller that settles them.
pub mod load_registry;

/// Loading progress resource and the host-page progress hook.
pub mod progress;

/// Startup system that requests every asset and registers it for tracking.
pub mod scene_loader;

/// Texture gate built on the load counter, with its failure policy.
pub mod texture_gate;
