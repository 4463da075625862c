//! Environment-map failure swaps the skybox for a flat clear colour.

use bevy::core_pipeline::Skybox;
use bevy::pbr::environment_map::EnvironmentMapLight;
use bevy::prelude::*;
use constants::render_settings::FALLBACK_CLEAR_COLOUR;
use phobia_viewer::engine::assets::scene_assets::LoadKey;
use phobia_viewer::engine::camera::transition::TransitionCamera;
use phobia_viewer::engine::loading::load_registry::{LoadOutcome, LoadSettled};
use phobia_viewer::engine::scene::lighting::apply_environment_fallback;

fn fallback_app() -> (App, Entity) {
    let mut app = App::new();
    app.init_resource::<ClearColor>()
        .add_event::<LoadSettled>()
        .add_systems(Update, apply_environment_fallback);

    let camera = app
        .world_mut()
        .spawn((
            TransitionCamera,
            Skybox::default(),
            EnvironmentMapLight::default(),
        ))
        .id();
    (app, camera)
}

fn settle(app: &mut App, key: LoadKey, outcome: LoadOutcome) {
    app.world_mut().send_event(LoadSettled {
        key,
        url: key.path().to_string(),
        outcome,
    });
    app.update();
}

fn has_environment(app: &App, camera: Entity) -> (bool, bool) {
    let entity = app.world().entity(camera);
    (
        entity.contains::<Skybox>(),
        entity.contains::<EnvironmentMapLight>(),
    )
}

#[test]
fn failed_cubemap_removes_environment_and_sets_clear_colour() {
    let (mut app, camera) = fallback_app();

    settle(&mut app, LoadKey::EnvironmentSpecular, LoadOutcome::Failed);

    assert_eq!(has_environment(&app, camera), (false, false));
    assert_eq!(app.world().resource::<ClearColor>().0, FALLBACK_CLEAR_COLOUR);
}

#[test]
fn second_failure_changes_nothing() {
    let (mut app, camera) = fallback_app();
    settle(&mut app, LoadKey::EnvironmentSpecular, LoadOutcome::Failed);

    // Restore a distinct state; the fallback must not run again.
    app.world_mut().resource_mut::<ClearColor>().0 = Color::BLACK;
    app.world_mut().entity_mut(camera).insert(Skybox::default());

    settle(&mut app, LoadKey::EnvironmentDiffuse, LoadOutcome::Failed);

    assert_eq!(has_environment(&app, camera), (true, false));
    assert_eq!(app.world().resource::<ClearColor>().0, Color::BLACK);
}

#[test]
fn loaded_cubemaps_and_other_failures_keep_environment() {
    let (mut app, camera) = fallback_app();
    let initial = app.world().resource::<ClearColor>().0;

    settle(&mut app, LoadKey::EnvironmentDiffuse, LoadOutcome::Loaded);
    settle(&mut app, LoadKey::EnvironmentSpecular, LoadOutcome::Loaded);
    settle(&mut app, LoadKey::TableTexture, LoadOutcome::Failed);

    assert_eq!(has_environment(&app, camera), (true, true));
    assert_eq!(app.world().resource::<ClearColor>().0, initial);
}
