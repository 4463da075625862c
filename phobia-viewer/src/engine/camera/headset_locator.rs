use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;
use bevy::transform::helper::TransformHelper;
use constants::transition::EYE_OFFSET;

use crate::engine::camera::transition::CameraTransition;

/// Headset load state. Goes from `{None, false}` to `{Some(entity), true}`
/// once and stays there.
#[derive(Resource, Default, Debug, Clone, PartialEq, Eq)]
pub struct HeadsetState {
    model: Option<Entity>,
    ready: bool,
}

impl HeadsetState {
    /// Returns `false` if the headset was already marked ready.
    pub fn mark_ready(&mut self, model: Entity) -> bool {
        if self.ready {
            return false;
        }
        self.model = Some(model);
        self.ready = true;
        true
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn model(&self) -> Option<Entity> {
        self.model
    }
}

/// Eye position in world space for a headset with the given world transform.
pub fn eye_in_world(headset: &GlobalTransform) -> Vec3 {
    headset.transform_point(EYE_OFFSET)
}

/// Resolve the transition target from the headset transform at this moment.
/// Only the first call does anything; the target is never recomputed, so
/// later headset motion leaves it where it was.
pub fn resolve_headset(
    model: Entity,
    headset: &GlobalTransform,
    state: &mut HeadsetState,
    transition: &mut CameraTransition,
) -> Option<Vec3> {
    if !state.mark_ready(model) {
        return None;
    }

    let eye = eye_in_world(headset);
    transition.set_target(eye).then_some(eye)
}

/// One-shot observer on the headset entity, fired when its scene instance
/// has been spawned.
///
/// Scenes spawn after `Update`, so the headset has already spun this frame
/// while its `GlobalTransform` has not been propagated yet. The pose is
/// rebuilt from the `Transform` chain instead.
pub fn on_headset_ready(
    trigger: Trigger<SceneInstanceReady>,
    transforms: TransformHelper,
    mut state: ResMut<HeadsetState>,
    mut transition: ResMut<CameraTransition>,
) {
    let model = trigger.target();
    let headset = match transforms.compute_global_transform(model) {
        Ok(headset) => headset,
        Err(err) => {
            warn!("Headset scene ready but its pose is unavailable: {err}");
            return;
        }
    };

    if let Some(eye) = resolve_headset(model, &headset, &mut state, &mut transition) {
        info!("✓ Headset ready, eye target at {:?}", eye);
    }
}
