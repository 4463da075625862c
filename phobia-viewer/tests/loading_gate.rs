//! The loading gate and scene assembly under different completion orders.
//!
//! Settled loads are injected directly as events, so these runs cover every
//! consumer downstream of the asset-server poller.

use bevy::prelude::*;
use phobia_viewer::engine::assets::scene_assets::{LoadKey, SceneAssets};
use phobia_viewer::engine::loading::load_registry::{LoadOutcome, LoadSettled};
use phobia_viewer::engine::loading::progress::{LoadingProgress, update_loading_frontend};
use phobia_viewer::engine::loading::texture_gate::{
    FailurePolicy, TextureGate, TexturesReady, count_texture_completions,
};
use phobia_viewer::engine::scene::environment::{
    EnvironmentGroup, EnvironmentPiece, StaticGeometry, assemble_spider,
    assemble_static_geometry,
};
use phobia_viewer::rpc::web_rpc::WebRpcInterface;

const COUNTED: [LoadKey; 5] = [
    LoadKey::TableTexture,
    LoadKey::JarTexture,
    LoadKey::LidTexture,
    LoadKey::SpiderModel,
    LoadKey::HeadsetModel,
];

fn loading_app(policy: FailurePolicy) -> App {
    let mut app = App::new();
    app.init_resource::<Assets<Mesh>>()
        .init_resource::<Assets<StandardMaterial>>()
        .init_resource::<SceneAssets>()
        .init_resource::<WebRpcInterface>()
        .insert_resource(TextureGate::new(policy))
        .insert_resource(LoadingProgress::new(COUNTED.len()))
        .add_event::<LoadSettled>()
        .add_event::<TexturesReady>()
        .add_systems(
            Update,
            (
                count_texture_completions,
                assemble_static_geometry,
                assemble_spider,
                update_loading_frontend,
            )
                .chain(),
        );

    let world = app.world_mut();
    let geometry = StaticGeometry::build(&mut world.resource_mut::<Assets<Mesh>>());
    world.insert_resource(geometry);
    world.spawn((EnvironmentGroup, Visibility::Hidden));
    app
}

fn settle(app: &mut App, key: LoadKey, outcome: LoadOutcome) {
    app.world_mut().send_event(LoadSettled {
        key,
        url: key.path().to_string(),
        outcome,
    });
    app.update();
}

fn pieces(app: &mut App) -> Vec<EnvironmentPiece> {
    let mut pieces: Vec<_> = app
        .world_mut()
        .query::<&EnvironmentPiece>()
        .iter(app.world())
        .copied()
        .collect();
    pieces.sort();
    pieces
}

fn notifications(app: &App, method: &str) -> usize {
    app.world()
        .resource::<WebRpcInterface>()
        .pending_notifications()
        .iter()
        .filter(|notification| notification.method == method)
        .count()
}

fn full_scene() -> Vec<EnvironmentPiece> {
    let mut expected = vec![
        EnvironmentPiece::Table,
        EnvironmentPiece::TableLeg,
        EnvironmentPiece::TableLeg,
        EnvironmentPiece::TableLeg,
        EnvironmentPiece::TableLeg,
        EnvironmentPiece::Jar,
        EnvironmentPiece::Lid,
        EnvironmentPiece::Spider,
    ];
    expected.sort();
    expected
}

#[test]
fn textures_first_assembles_static_geometry_before_spider() {
    let mut app = loading_app(FailurePolicy::Stall);

    settle(&mut app, LoadKey::TableTexture, LoadOutcome::Loaded);
    settle(&mut app, LoadKey::JarTexture, LoadOutcome::Loaded);
    assert!(pieces(&mut app).is_empty());

    settle(&mut app, LoadKey::LidTexture, LoadOutcome::Loaded);
    let staged = pieces(&mut app);
    assert!(staged.contains(&EnvironmentPiece::Table));
    assert!(staged.contains(&EnvironmentPiece::Jar));
    assert!(staged.contains(&EnvironmentPiece::Lid));
    assert!(!staged.contains(&EnvironmentPiece::Spider));

    settle(&mut app, LoadKey::SpiderModel, LoadOutcome::Loaded);
    assert_eq!(pieces(&mut app), full_scene());
}

#[test]
fn spider_first_joins_group_before_textures() {
    let mut app = loading_app(FailurePolicy::Stall);

    settle(&mut app, LoadKey::SpiderModel, LoadOutcome::Loaded);
    assert_eq!(pieces(&mut app), vec![EnvironmentPiece::Spider]);

    for key in LoadKey::TEXTURES {
        settle(&mut app, key, LoadOutcome::Loaded);
    }
    assert_eq!(pieces(&mut app), full_scene());
}

#[test]
fn completion_order_does_not_change_final_scene() {
    let orders = [
        COUNTED.to_vec(),
        COUNTED.iter().rev().copied().collect(),
        vec![
            LoadKey::JarTexture,
            LoadKey::HeadsetModel,
            LoadKey::SpiderModel,
            LoadKey::LidTexture,
            LoadKey::TableTexture,
        ],
    ];

    for order in orders {
        let mut app = loading_app(FailurePolicy::Stall);
        for key in &order {
            settle(&mut app, *key, LoadOutcome::Loaded);
        }
        assert_eq!(pieces(&mut app), full_scene(), "order {order:?}");
        assert_eq!(notifications(&app, "loading_progress"), COUNTED.len());
        assert_eq!(notifications(&app, "loading_complete"), 1);
    }
}

#[test]
fn same_frame_completions_assemble_once() {
    let mut app = loading_app(FailurePolicy::Stall);
    for key in COUNTED {
        app.world_mut().send_event(LoadSettled {
            key,
            url: key.path().to_string(),
            outcome: LoadOutcome::Loaded,
        });
    }
    app.update();
    app.update();

    assert_eq!(pieces(&mut app), full_scene());
    assert!(app.world().resource::<LoadingProgress>().complete);
}

#[test]
fn failed_texture_stalls_static_geometry_but_not_spider() {
    let mut app = loading_app(FailurePolicy::Stall);

    settle(&mut app, LoadKey::TableTexture, LoadOutcome::Loaded);
    settle(&mut app, LoadKey::JarTexture, LoadOutcome::Failed);
    settle(&mut app, LoadKey::LidTexture, LoadOutcome::Loaded);
    settle(&mut app, LoadKey::SpiderModel, LoadOutcome::Loaded);

    assert_eq!(pieces(&mut app), vec![EnvironmentPiece::Spider]);
    assert_eq!(notifications(&app, "loading_complete"), 0);
    let progress = app.world().resource::<LoadingProgress>();
    assert_eq!(progress.failed, vec![LoadKey::JarTexture.path().to_string()]);
}

#[test]
fn placeholder_policy_assembles_without_failed_texture() {
    let mut app = loading_app(FailurePolicy::Placeholder);

    settle(&mut app, LoadKey::TableTexture, LoadOutcome::Loaded);
    settle(&mut app, LoadKey::JarTexture, LoadOutcome::Failed);
    settle(&mut app, LoadKey::LidTexture, LoadOutcome::Loaded);

    let staged = pieces(&mut app);
    assert!(staged.contains(&EnvironmentPiece::Jar));
    assert!(app.world().resource::<TextureGate>().uses_placeholder(LoadKey::JarTexture));
}

#[test]
fn environment_maps_do_not_move_progress() {
    let mut app = loading_app(FailurePolicy::Stall);

    settle(&mut app, LoadKey::EnvironmentDiffuse, LoadOutcome::Loaded);
    settle(&mut app, LoadKey::EnvironmentSpecular, LoadOutcome::Failed);

    assert_eq!(app.world().resource::<LoadingProgress>().loaded, 0);
    assert_eq!(notifications(&app, "loading_progress"), 0);
    assert!(pieces(&mut app).is_empty());
}
