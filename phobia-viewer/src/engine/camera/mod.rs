//! Camera flight from the exterior viewpoint into the headset's eye.
//!
//! The locator resolves the eye position once the headset scene is ready;
//! the transition waits for both that target and the start delay, then flies
//! the camera in and announces completion.

/// One-shot resolution of the headset eye in world space.
pub mod headset_locator;

/// Time-driven `Waiting → Running → Done` camera transition.
pub mod transition;
