use bevy::prelude::*;
use constants::path::{
    ENVIRONMENT_DIFFUSE_PATH, ENVIRONMENT_SPECULAR_PATH, HEADSET_MODEL_PATH, JAR_TEXTURE_PATH,
    LID_TEXTURE_PATH, SPIDER_MODEL_PATH, TABLE_TEXTURE_PATH,
};

/// Identifies one asynchronous load the session waits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadKey {
    TableTexture,
    JarTexture,
    LidTexture,
    SpiderModel,
    HeadsetModel,
    EnvironmentDiffuse,
    EnvironmentSpecular,
}

impl LoadKey {
    /// Textures gated together before the static geometry is dressed.
    pub const TEXTURES: [LoadKey; 3] = [
        LoadKey::TableTexture,
        LoadKey::JarTexture,
        LoadKey::LidTexture,
    ];

    pub const ALL: [LoadKey; 7] = [
        LoadKey::TableTexture,
        LoadKey::JarTexture,
        LoadKey::LidTexture,
        LoadKey::SpiderModel,
        LoadKey::HeadsetModel,
        LoadKey::EnvironmentDiffuse,
        LoadKey::EnvironmentSpecular,
    ];

    pub fn path(self) -> &'static str {
        match self {
            LoadKey::TableTexture => TABLE_TEXTURE_PATH,
            LoadKey::JarTexture => JAR_TEXTURE_PATH,
            LoadKey::LidTexture => LID_TEXTURE_PATH,
            LoadKey::SpiderModel => SPIDER_MODEL_PATH,
            LoadKey::HeadsetModel => HEADSET_MODEL_PATH,
            LoadKey::EnvironmentDiffuse => ENVIRONMENT_DIFFUSE_PATH,
            LoadKey::EnvironmentSpecular => ENVIRONMENT_SPECULAR_PATH,
        }
    }

    pub fn is_texture(self) -> bool {
        Self::TEXTURES.contains(&self)
    }

    pub fn is_environment_map(self) -> bool {
        matches!(
            self,
            LoadKey::EnvironmentDiffuse | LoadKey::EnvironmentSpecular
        )
    }

    /// The environment map has a local fallback, so it never holds up the
    /// progress indicator.
    pub fn counts_toward_progress(self) -> bool {
        !self.is_environment_map()
    }
}

/// Every handle the session owns. Dropping the app drops them all.
#[derive(Resource, Default, Clone)]
pub struct SceneAssets {
    pub table_texture: Handle<Image>,
    pub jar_texture: Handle<Image>,
    pub lid_texture: Handle<Image>,
    pub spider_scene: Handle<Scene>,
    pub headset_scene: Handle<Scene>,
    pub environment_diffuse: Handle<Image>,
    pub environment_specular: Handle<Image>,
}

impl SceneAssets {
    /// Request every load. Each call returns immediately; completion is
    /// observed by the load poller on a later frame.
    pub fn request_all(asset_server: &AssetServer) -> Self {
        Self {
            table_texture: asset_server.load(LoadKey::TableTexture.path()),
            jar_texture: asset_server.load(LoadKey::JarTexture.path()),
            lid_texture: asset_server.load(LoadKey::LidTexture.path()),
            spider_scene: asset_server
                .load(GltfAssetLabel::Scene(0).from_asset(LoadKey::SpiderModel.path())),
            headset_scene: asset_server
                .load(GltfAssetLabel::Scene(0).from_asset(LoadKey::HeadsetModel.path())),
            environment_diffuse: asset_server.load(LoadKey::EnvironmentDiffuse.path()),
            environment_specular: asset_server.load(LoadKey::EnvironmentSpecular.path()),
        }
    }

    pub fn untyped(&self, key: LoadKey) -> UntypedHandle {
        match key {
            LoadKey::TableTexture => self.table_texture.clone().untyped(),
            LoadKey::JarTexture => self.jar_texture.clone().untyped(),
            LoadKey::LidTexture => self.lid_texture.clone().untyped(),
            LoadKey::SpiderModel => self.spider_scene.clone().untyped(),
            LoadKey::HeadsetModel => self.headset_scene.clone().untyped(),
            LoadKey::EnvironmentDiffuse => self.environment_diffuse.clone().untyped(),
            LoadKey::EnvironmentSpecular => self.environment_specular.clone().untyped(),
        }
    }

    pub fn texture(&self, key: LoadKey) -> Option<&Handle<Image>> {
        match key {
            LoadKey::TableTexture => Some(&self.table_texture),
            LoadKey::JarTexture => Some(&self.jar_texture),
            LoadKey::LidTexture => Some(&self.lid_texture),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_environment_maps_skip_progress() {
        let skipped: Vec<_> = LoadKey::ALL
            .into_iter()
            .filter(|key| !key.counts_toward_progress())
            .collect();
        assert_eq!(
            skipped,
            vec![LoadKey::EnvironmentDiffuse, LoadKey::EnvironmentSpecular]
        );
    }

    #[test]
    fn gated_textures_have_texture_handles() {
        let assets = SceneAssets::default();
        for key in LoadKey::TEXTURES {
            assert!(key.is_texture());
            assert!(assets.texture(key).is_some());
        }
        assert!(assets.texture(LoadKey::SpiderModel).is_none());
    }
}
