use bevy::color::Color;

/// Clear colour used when the environment map cannot be built.
pub const FALLBACK_CLEAR_COLOUR: Color = Color::srgb(0.08, 0.08, 0.1);

pub const ENVIRONMENT_MAP_INTENSITY: f32 = 900.0;
pub const SKYBOX_BRIGHTNESS: f32 = 1000.0;

pub const AMBIENT_BRIGHTNESS: f32 = 250.0;
pub const KEY_LIGHT_ILLUMINANCE: f32 = 8_000.0;

/// Seconds between FPS notifications to the host page.
pub const FPS_REPORT_INTERVAL_SECS: f32 = 0.5;

// Orbit controls for the standalone spider viewer.
pub const ORBIT_START_DISTANCE: f32 = 3.0;
pub const ORBIT_MIN_DISTANCE: f32 = 0.8;
pub const ORBIT_MAX_DISTANCE: f32 = 12.0;
pub const ORBIT_START_PITCH: f32 = -0.35;
pub const ORBIT_PITCH_LIMIT: f32 = 1.45;
pub const ORBIT_YAW_SENSITIVITY: f32 = 0.0035;
pub const ORBIT_PITCH_SENSITIVITY: f32 = 0.0030;
pub const ORBIT_ZOOM_SENSITIVITY: f32 = 0.12;
/// Seconds without input before the idle auto-orbit resumes.
pub const ORBIT_IDLE_RESUME_SECS: f32 = 4.0;
pub const ORBIT_AUTO_SPEED: f32 = 0.25;
