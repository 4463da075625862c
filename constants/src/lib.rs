//! Hard-coded scene layout, timings and asset locations shared by both viewers.
//!
//! Nothing here is read at runtime from disk; changing the demo means changing
//! these values and rebuilding.

pub mod path;
pub mod render_settings;
pub mod scene;
pub mod transition;
