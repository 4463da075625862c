use bevy::core_pipeline::Skybox;
use bevy::pbr::environment_map::EnvironmentMapLight;
use bevy::prelude::*;
use constants::render_settings::{
    AMBIENT_BRIGHTNESS, ENVIRONMENT_MAP_INTENSITY, FALLBACK_CLEAR_COLOUR, KEY_LIGHT_ILLUMINANCE,
    SKYBOX_BRIGHTNESS,
};

use crate::engine::assets::scene_assets::SceneAssets;
use crate::engine::camera::transition::TransitionCamera;
use crate::engine::loading::load_registry::{LoadOutcome, LoadSettled};

pub fn spawn_lighting(mut commands: Commands) {
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

/// Attach the skybox and image-based lighting to the transition camera.
pub fn attach_environment_map(
    mut commands: Commands,
    assets: Res<SceneAssets>,
    cameras: Query<Entity, With<TransitionCamera>>,
) {
    for camera in &cameras {
        commands.entity(camera).insert((
            Skybox {
                image: assets.environment_specular.clone(),
                brightness: SKYBOX_BRIGHTNESS,
                ..default()
            },
            EnvironmentMapLight {
                diffuse_map: assets.environment_diffuse.clone(),
                specular_map: assets.environment_specular.clone(),
                intensity: ENVIRONMENT_MAP_INTENSITY,
                ..default()
            },
        ));
    }
}

/// Drop the environment map for a flat background when either cubemap fails.
pub fn apply_environment_fallback(
    mut settled: EventReader<LoadSettled>,
    mut commands: Commands,
    mut clear_colour: ResMut<ClearColor>,
    mut fallen_back: Local<bool>,
    cameras: Query<Entity, With<TransitionCamera>>,
) {
    let failed = settled
        .read()
        .filter(|event| event.key.is_environment_map() && event.outcome == LoadOutcome::Failed)
        .count();
    if failed == 0 || *fallen_back {
        return;
    }
    *fallen_back = true;

    for camera in &cameras {
        commands
            .entity(camera)
            .remove::<(Skybox, EnvironmentMapLight)>();
    }
    clear_colour.0 = FALLBACK_CLEAR_COLOUR;
    warn!("Environment map unavailable, using flat background");
}
