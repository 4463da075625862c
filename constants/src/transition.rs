use bevy::math::Vec3;

/// Seconds after session start before the camera may leave its start point.
pub const TRANSITION_DELAY_SECS: f32 = 3.0;

/// Seconds the camera takes to travel from the start point to the eye.
pub const TRANSITION_DURATION_SECS: f32 = 5.0;

/// Where the camera sits before the transition.
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 1.8, 3.2);

/// Point the camera keeps looking at for the whole transition.
pub const CAMERA_FOCUS: Vec3 = Vec3::new(0.0, 0.95, -2.5);

/// Eye position in headset-local space. Hand placed against the model, not
/// derived from its geometry.
pub const EYE_OFFSET: Vec3 = Vec3::new(0.0, 0.02, -0.06);
