/// Canvas element id the phobia viewer renders into on the host page.
pub const PHOBIA_CANVAS_ID: &str = "phobia-viewer";

/// Canvas element id the standalone spider viewer renders into.
pub const SPIDER_CANVAS_ID: &str = "spider-viewer";

pub const HEADSET_MODEL_PATH: &str = "models/vr_headset.glb";
pub const SPIDER_MODEL_PATH: &str = "models/spider.glb";

pub const TABLE_TEXTURE_PATH: &str = "textures/table_wood.png";
pub const JAR_TEXTURE_PATH: &str = "textures/jar_glass.png";
pub const LID_TEXTURE_PATH: &str = "textures/lid_metal.png";

// Pre-filtered cubemaps, DDS encoded.
pub const ENVIRONMENT_DIFFUSE_PATH: &str = "environment/room_diffuse.dds";
pub const ENVIRONMENT_SPECULAR_PATH: &str = "environment/room_specular.dds";
