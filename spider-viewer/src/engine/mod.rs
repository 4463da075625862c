/// App construction, window and canvas setup.
pub mod app;

pub mod error;

/// Mouse-driven orbit rig with idle auto-orbit.
pub mod orbit_camera;

/// Spider model, lights and environment map with its fallback.
pub mod spider_scene;
