use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;

use crate::engine::camera::headset_locator::HeadsetState;
use crate::engine::camera::transition::{
    CameraTransition, TransitionCompleted, TransitionStarted, drive_camera_transition,
    spawn_transition_camera,
};
use crate::engine::core::app_state::{AppState, transition_to_staged};
use crate::engine::core::frame_set::{FrameSet, configure_frame_sets};
use crate::engine::core::window_config::create_window_config;
// Loading
use crate::engine::loading::load_registry::{LoadRegistry, LoadSettled, poll_load_states};
use crate::engine::loading::progress::{LoadingProgress, update_loading_frontend};
use crate::engine::loading::scene_loader::start_loading;
use crate::engine::loading::texture_gate::{TextureGate, TexturesReady, count_texture_completions};
// Scene
use crate::engine::scene::environment::{
    assemble_spider, assemble_static_geometry, spawn_environment_group,
};
use crate::engine::scene::headset::spawn_headset;
use crate::engine::scene::lighting::{
    apply_environment_fallback, attach_environment_map, spawn_lighting,
};
use crate::engine::scene::reveal::{
    EnvironmentVisibility, notify_transition_phase, reveal_on_completion,
};
// Per-frame updates
use crate::engine::systems::animation::{fade_opacity, spin_idle_entities};
use crate::engine::systems::fps_tracking::{FpsReportTimer, fps_notification_system};
use crate::rpc::web_rpc::WebRpcPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::core::app_state::FpsText;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(WebRpcPlugin);

    configure_frame_sets(&mut app);
    register_session_resources(&mut app);

    app.add_systems(
        Startup,
        (
            start_loading,
            spawn_transition_camera,
            attach_environment_map,
            spawn_headset,
            spawn_environment_group,
            spawn_lighting,
        )
            .chain(),
    );

    add_frame_systems(&mut app);

    app
}

/// Resources and events shared by the startup and per-frame systems.
pub fn register_session_resources(app: &mut App) {
    app.insert_resource(CameraTransition::default())
        .init_resource::<LoadRegistry>()
        .init_resource::<TextureGate>()
        .init_resource::<HeadsetState>()
        .init_resource::<EnvironmentVisibility>()
        .init_resource::<LoadingProgress>()
        .init_resource::<FpsReportTimer>()
        .add_event::<LoadSettled>()
        .add_event::<TexturesReady>()
        .add_event::<TransitionStarted>()
        .add_event::<TransitionCompleted>();
}

fn add_frame_systems(app: &mut App) {
    app.add_systems(
        Update,
        (
            poll_load_states,
            count_texture_completions,
            assemble_static_geometry,
            assemble_spider,
            apply_environment_fallback,
            update_loading_frontend,
            transition_to_staged.run_if(in_state(AppState::Loading)),
        )
            .chain()
            .in_set(FrameSet::Loading),
    )
    .add_systems(
        Update,
        (spin_idle_entities, fade_opacity).in_set(FrameSet::Animate),
    )
    .add_systems(
        Update,
        (drive_camera_transition, reveal_on_completion)
            .chain()
            .in_set(FrameSet::Transition),
    )
    .add_systems(
        Update,
        (notify_transition_phase, fps_notification_system).in_set(FrameSet::Report),
    );

    // The on-canvas counter is only drawn for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Startup, create_native_overlays)
            .add_systems(Update, fps_text_update_system.in_set(FrameSet::Report));
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
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
