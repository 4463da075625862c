//! Asset handles and identifiers for everything the demo loads.

/// Handles for the headset, spider, textures and environment map.
pub mod scene_assets;
