use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::window::PresentMode;
use constants::path::SPIDER_CANVAS_ID;

use crate::engine::error::ViewerError;
use crate::engine::orbit_camera::{OrbitRig, orbit_camera_controller};
use crate::engine::spider_scene::{EnvironmentWatch, setup_spider_scene, watch_scene_loads};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_resource::<OrbitRig>()
        .init_resource::<EnvironmentWatch>()
        .add_systems(Startup, setup_spider_scene)
        .add_systems(Update, (watch_scene_loads, orbit_camera_controller).chain());

    app
}

fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some(format!("#{SPIDER_CANVAS_ID}")),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: SPIDER_CANVAS_ID.to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

#[cfg(target_arch = "wasm32")]
pub fn ensure_host_container() -> Result<(), ViewerError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(ViewerError::NoDocument)?;

    document
        .get_element_by_id(SPIDER_CANVAS_ID)
        .map(|_| ())
        .ok_or_else(|| ViewerError::MissingContainer(SPIDER_CANVAS_ID.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_host_container() -> Result<(), ViewerError> {
    Ok(())
}
