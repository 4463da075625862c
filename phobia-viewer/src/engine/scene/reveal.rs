use bevy::prelude::*;
use constants::scene::{HEADSET_FADE_FACTOR, HEADSET_FADE_FLOOR};

use crate::engine::camera::transition::{
    CameraTransition, TransitionCompleted, TransitionStarted,
};
use crate::engine::scene::environment::EnvironmentGroup;
use crate::engine::scene::headset::Headset;
use crate::engine::systems::animation::OpacityFade;
use crate::rpc::web_rpc::WebRpcInterface;

/// Whether the environment has been shown. Flips to `true` once.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentVisibility {
    revealed: bool,
}

impl EnvironmentVisibility {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Entry action of the `Done` phase: show the environment and start the
/// headset fade.
pub fn reveal_on_completion(
    mut completed: EventReader<TransitionCompleted>,
    mut visibility: ResMut<EnvironmentVisibility>,
    mut commands: Commands,
    mut groups: Query<&mut Visibility, With<EnvironmentGroup>>,
    headsets: Query<Entity, With<Headset>>,
) {
    if completed.read().count() == 0 || visibility.revealed {
        return;
    }
    visibility.revealed = true;

    for mut group_visibility in &mut groups {
        *group_visibility = Visibility::Visible;
    }
    for headset in &headsets {
        commands
            .entity(headset)
            .insert(OpacityFade::new(HEADSET_FADE_FACTOR, HEADSET_FADE_FLOOR));
    }

    info!("Environment revealed");
}

pub fn notify_transition_phase(
    mut started: EventReader<TransitionStarted>,
    mut completed: EventReader<TransitionCompleted>,
    transition: Res<CameraTransition>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let changed = started.read().count() + completed.read().count();
    if changed == 0 {
        return;
    }

    rpc_interface.send_notification(
        "transition_phase",
        serde_json::json!({
            "phase": transition.phase().name(),
        }),
    );
}
