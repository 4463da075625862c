use bevy::prelude::*;

use crate::engine::assets::scene_assets::{LoadKey, SceneAssets};
use crate::engine::loading::load_registry::LoadRegistry;
use crate::engine::loading::progress::LoadingProgress;

/// Request every asset up front and register each one with the poller.
pub fn start_loading(
    mut commands: Commands,
    mut registry: ResMut<LoadRegistry>,
    asset_server: Res<AssetServer>,
) {
    let assets = SceneAssets::request_all(&asset_server);

    for key in LoadKey::ALL {
        registry.track(key, key.path(), assets.untyped(key));
    }

    let total = registry.progress_total();
    info!("Requested {} assets ({} reported to host)", LoadKey::ALL.len(), total);

    commands.insert_resource(LoadingProgress::new(total));
    commands.insert_resource(assets);
}
