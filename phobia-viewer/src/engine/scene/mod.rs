//! Scene assembly around the transition.
//!
//! Builds the hidden environment group (table, jar, lid, spider), the spinning
//! headset, lighting with its environment-map fallback, and the reveal that
//! follows the camera transition.

/// Hidden environment group and the assembly of its pieces.
///
/// Static meshes are built at startup; materials and children are attached
/// once the texture gate opens, the spider once its model lands.
pub mod environment;

/// Headset model spawn with idle spin and readiness observer.
pub mod headset;

/// Lights, skybox and environment map, with a flat clear colour fallback.
pub mod lighting;

/// Reveal of the environment and fade of the headset on transition completion.
pub mod reveal;
