use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

/// Loading lifecycle of the session. The camera transition runs in both
/// states; this only tracks whether every reported load has landed.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Staged,
}

#[derive(Component)]
pub struct FpsText;

pub fn transition_to_staged(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.complete {
        info!("→ Transitioning to Staged state");
        next_state.set(AppState::Staged);
    }
}
