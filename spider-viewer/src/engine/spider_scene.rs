use bevy::asset::LoadState;
use bevy::core_pipeline::Skybox;
use bevy::pbr::environment_map::EnvironmentMapLight;
use bevy::prelude::*;
use constants::path::{ENVIRONMENT_DIFFUSE_PATH, ENVIRONMENT_SPECULAR_PATH, SPIDER_MODEL_PATH};
use constants::render_settings::{
    AMBIENT_BRIGHTNESS, ENVIRONMENT_MAP_INTENSITY, FALLBACK_CLEAR_COLOUR, KEY_LIGHT_ILLUMINANCE,
    SKYBOX_BRIGHTNESS,
};
use constants::scene::STANDALONE_SPIDER_SCALE;

use crate::engine::error::ViewerError;
use crate::engine::orbit_camera::{OrbitCamera, OrbitRig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settle {
    Pending,
    Loaded,
    Failed(String),
}

impl Settle {
    fn from_load_state(state: Option<LoadState>) -> Self {
        match state {
            Some(LoadState::Loaded) => Settle::Loaded,
            Some(LoadState::Failed(err)) => Settle::Failed(err.to_string()),
            _ => Settle::Pending,
        }
    }
}

/// Combined state of the two cubemaps. Either one failing fails the pair.
pub fn environment_settle(diffuse: &Settle, specular: &Settle) -> Settle {
    match (diffuse, specular) {
        (Settle::Failed(reason), _) | (_, Settle::Failed(reason)) => Settle::Failed(reason.clone()),
        (Settle::Loaded, Settle::Loaded) => Settle::Loaded,
        _ => Settle::Pending,
    }
}

/// Handles for the loads we watch, and whether each has been reported.
#[derive(Resource, Default)]
pub struct EnvironmentWatch {
    spider: Handle<Scene>,
    diffuse: Handle<Image>,
    specular: Handle<Image>,
    spider_reported: bool,
    environment_reported: bool,
}

pub fn setup_spider_scene(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    rig: Res<OrbitRig>,
    mut watch: ResMut<EnvironmentWatch>,
) {
    watch.spider = asset_server.load(GltfAssetLabel::Scene(0).from_asset(SPIDER_MODEL_PATH));
    watch.diffuse = asset_server.load(ENVIRONMENT_DIFFUSE_PATH);
    watch.specular = asset_server.load(ENVIRONMENT_SPECULAR_PATH);

    commands.spawn((
        SceneRoot(watch.spider.clone()),
        Transform::from_scale(Vec3::splat(STANDALONE_SPIDER_SCALE)),
        Name::new("Spider"),
    ));

    commands.spawn((
        Camera3d::default(),
        rig.camera_transform(),
        OrbitCamera,
        Skybox {
            image: watch.specular.clone(),
            brightness: SKYBOX_BRIGHTNESS,
            ..default()
        },
        EnvironmentMapLight {
            diffuse_map: watch.diffuse.clone(),
            specular_map: watch.specular.clone(),
            intensity: ENVIRONMENT_MAP_INTENSITY,
            ..default()
        },
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: KEY_LIGHT_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
    commands.insert_resource(AmbientLight {
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });
}

/// Log the spider load, and swap the environment map for a flat clear colour
/// if either cubemap fails.
pub fn watch_scene_loads(
    mut watch: ResMut<EnvironmentWatch>,
    asset_server: Res<AssetServer>,
    mut commands: Commands,
    mut clear_colour: ResMut<ClearColor>,
    cameras: Query<Entity, With<OrbitCamera>>,
) {
    if !watch.spider_reported {
        match Settle::from_load_state(asset_server.get_load_state(watch.spider.id())) {
            Settle::Pending => {}
            Settle::Loaded => {
                info!("✓ Loaded {}", SPIDER_MODEL_PATH);
                watch.spider_reported = true;
            }
            Settle::Failed(reason) => {
                let failure = ViewerError::AssetLoad {
                    url: SPIDER_MODEL_PATH.to_string(),
                    reason,
                };
                error!("{failure}");
                watch.spider_reported = true;
            }
        }
    }

    if watch.environment_reported {
        return;
    }
    let diffuse = Settle::from_load_state(asset_server.get_load_state(watch.diffuse.id()));
    let specular = Settle::from_load_state(asset_server.get_load_state(watch.specular.id()));
    match environment_settle(&diffuse, &specular) {
        Settle::Pending => {}
        Settle::Loaded => {
            info!("✓ Environment map loaded");
            watch.environment_reported = true;
        }
        Settle::Failed(reason) => {
            let url = if matches!(diffuse, Settle::Failed(_)) {
                ENVIRONMENT_DIFFUSE_PATH
            } else {
                ENVIRONMENT_SPECULAR_PATH
            };
            error!(
                "{}",
                ViewerError::AssetLoad {
                    url: url.to_string(),
                    reason,
                }
            );
            warn!("Environment map unavailable, using flat background");
            for camera in &cameras {
                commands
                    .entity(camera)
                    .remove::<(Skybox, EnvironmentMapLight)>();
            }
            clear_colour.0 = FALLBACK_CLEAR_COLOUR;
            watch.environment_reported = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_waits_for_both_maps() {
        assert_eq!(
            environment_settle(&Settle::Loaded, &Settle::Pending),
            Settle::Pending
        );
        assert_eq!(
            environment_settle(&Settle::Loaded, &Settle::Loaded),
            Settle::Loaded
        );
    }

    #[test]
    fn either_map_failing_fails_environment() {
        let failed = Settle::Failed("missing".to_string());
        assert_eq!(environment_settle(&failed, &Settle::Pending), failed);
        assert_eq!(environment_settle(&Settle::Loaded, &failed), failed);
    }

    #[test]
    fn unknown_load_state_is_pending() {
        assert_eq!(Settle::from_load_state(None), Settle::Pending);
        assert_eq!(
            Settle::from_load_state(Some(LoadState::Loading)),
            Settle::Pending
        );
    }
}
