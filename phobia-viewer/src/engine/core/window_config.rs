use bevy::prelude::*;
use bevy::window::PresentMode;
use constants::path::PHOBIA_CANVAS_ID;

use crate::engine::core::error::ViewerError;

pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some(format!("#{PHOBIA_CANVAS_ID}")),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: PHOBIA_CANVAS_ID.to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

/// Fail fast when the host page lacks the canvas we are meant to render into.
#[cfg(target_arch = "wasm32")]
pub fn ensure_host_container() -> Result<(), ViewerError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(ViewerError::NoDocument)?;

    document
        .get_element_by_id(PHOBIA_CANVAS_ID)
        .map(|_| ())
        .ok_or_else(|| ViewerError::MissingContainer(PHOBIA_CANVAS_ID.to_string()))
}

// Native builds open their own window.
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_host_container() -> Result<(), ViewerError> {
    Ok(())
}
