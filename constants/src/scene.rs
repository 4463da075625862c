use bevy::math::Vec3;

// Headset
pub const HEADSET_POSITION: Vec3 = Vec3::new(0.0, 1.5, 0.0);
pub const HEADSET_SCALE: f32 = 1.0;
/// Constant per-frame yaw increment, independent of frame time.
pub const HEADSET_SPIN_PER_FRAME: f32 = 0.005;
/// Multiplier applied to headset opacity every frame once the reveal starts.
pub const HEADSET_FADE_FACTOR: f32 = 0.95;
/// Opacity below which the faded headset is hidden and its fade dropped.
pub const HEADSET_FADE_FLOOR: f32 = 0.01;

// Table: top slab centred on the table position, legs hang from its corners.
pub const TABLE_POSITION: Vec3 = Vec3::new(0.0, 0.75, -2.5);
pub const TABLE_TOP_SIZE: Vec3 = Vec3::new(1.6, 0.05, 0.9);
pub const TABLE_LEG_SIZE: Vec3 = Vec3::new(0.06, 0.75, 0.06);
pub const TABLE_LEG_INSET: f32 = 0.08;

// Jar sits on the table top, lid sits on the jar.
pub const JAR_RADIUS: f32 = 0.14;
pub const JAR_HEIGHT: f32 = 0.32;
pub const JAR_OPACITY: f32 = 0.3;
pub const LID_RADIUS: f32 = 0.15;
pub const LID_HEIGHT: f32 = 0.03;

// Spider inside the jar.
pub const SPIDER_OFFSET_IN_JAR: Vec3 = Vec3::new(0.0, 0.02, 0.0);
pub const SPIDER_SCALE: f32 = 0.04;

/// Scale of the spider in the standalone viewer, which frames it alone.
pub const STANDALONE_SPIDER_SCALE: f32 = 1.0;
