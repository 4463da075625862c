use bevy::prelude::*;

/// Constant yaw per frame. The step ignores frame time on purpose; the spin
/// only has to look alive, not keep a rate.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct IdleSpin {
    pub radians_per_frame: f32,
}

impl IdleSpin {
    pub fn new(radians_per_frame: f32) -> Self {
        Self { radians_per_frame }
    }
}

/// Multiplicative per-frame opacity decay applied to every standard material
/// under the entity. The component removes itself and hides the entity once
/// opacity drops below `floor`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct OpacityFade {
    pub factor: f32,
    pub floor: f32,
    pub opacity: f32,
}

impl OpacityFade {
    pub fn new(factor: f32, floor: f32) -> Self {
        Self {
            factor: factor.clamp(0.0, 1.0),
            floor,
            opacity: 1.0,
        }
    }

    /// Advance one frame and return the new opacity.
    pub fn step(&mut self) -> f32 {
        self.opacity *= self.factor;
        self.opacity
    }

    pub fn is_finished(&self) -> bool {
        self.opacity < self.floor
    }
}

pub fn spin_idle_entities(mut spinners: Query<(&IdleSpin, &mut Transform)>) {
    for (spin, mut transform) in &mut spinners {
        transform.rotate_y(spin.radians_per_frame);
    }
}

pub fn fade_opacity(
    mut commands: Commands,
    mut faders: Query<(Entity, &mut OpacityFade, &mut Visibility)>,
    children: Query<&Children>,
    mesh_materials: Query<&MeshMaterial3d<StandardMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (root, mut fade, mut visibility) in &mut faders {
        let opacity = fade.step();

        for descendant in children.iter_descendants(root) {
            let Ok(handle) = mesh_materials.get(descendant) else {
                continue;
            };
            if let Some(material) = materials.get_mut(&handle.0) {
                material.alpha_mode = AlphaMode::Blend;
                material.base_color.set_alpha(opacity);
            }
        }

        if fade.is_finished() {
            *visibility = Visibility::Hidden;
            commands.entity(root).remove::<OpacityFade>();
            info!("Fade finished for {:?}", root);
        }
    }
}
