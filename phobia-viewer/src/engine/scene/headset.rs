use bevy::prelude::*;
use constants::scene::{HEADSET_POSITION, HEADSET_SCALE, HEADSET_SPIN_PER_FRAME};

use crate::engine::assets::scene_assets::SceneAssets;
use crate::engine::camera::headset_locator::on_headset_ready;
use crate::engine::systems::animation::IdleSpin;

#[derive(Component)]
pub struct Headset;

pub fn spawn_headset(mut commands: Commands, assets: Res<SceneAssets>) {
    commands
        .spawn((
            SceneRoot(assets.headset_scene.clone()),
            Transform::from_translation(HEADSET_POSITION).with_scale(Vec3::splat(HEADSET_SCALE)),
            Headset,
            IdleSpin::new(HEADSET_SPIN_PER_FRAME),
            Name::new("Headset"),
        ))
        .observe(on_headset_ready);
}
