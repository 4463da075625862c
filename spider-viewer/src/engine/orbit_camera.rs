use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::math::EulerRot;
use bevy::prelude::*;
use constants::render_settings::{
    ORBIT_AUTO_SPEED, ORBIT_IDLE_RESUME_SECS, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE,
    ORBIT_PITCH_LIMIT, ORBIT_PITCH_SENSITIVITY, ORBIT_START_DISTANCE, ORBIT_START_PITCH,
    ORBIT_YAW_SENSITIVITY, ORBIT_ZOOM_SENSITIVITY,
};

#[derive(Component)]
pub struct OrbitCamera;

/// Camera orbiting a fixed focus point.
///
/// Drag input turns yaw and pitch, scroll input changes distance. With no
/// input for `ORBIT_IDLE_RESUME_SECS` the rig slowly turns on its own.
#[derive(Resource, Debug, Clone)]
pub struct OrbitRig {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    idle_secs: f32,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            yaw: 0.0,
            pitch: ORBIT_START_PITCH,
            distance: ORBIT_START_DISTANCE,
            // Auto-orbit from the first frame until the user touches anything.
            idle_secs: ORBIT_IDLE_RESUME_SECS,
        }
    }
}

impl OrbitRig {
    pub fn drag(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ORBIT_YAW_SENSITIVITY;
        self.pitch = (self.pitch - delta.y * ORBIT_PITCH_SENSITIVITY)
            .clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
        self.idle_secs = 0.0;
    }

    /// Positive amounts move closer.
    pub fn zoom(&mut self, amount: f32) {
        self.distance = (self.distance * (-amount * ORBIT_ZOOM_SENSITIVITY).exp())
            .clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        self.idle_secs = 0.0;
    }

    /// Account for a frame without input.
    pub fn idle(&mut self, delta_secs: f32) {
        self.idle_secs += delta_secs;
        if self.is_auto_orbiting() {
            self.yaw += ORBIT_AUTO_SPEED * delta_secs;
        }
    }

    pub fn is_auto_orbiting(&self) -> bool {
        self.idle_secs >= ORBIT_IDLE_RESUME_SECS
    }

    pub fn camera_transform(&self) -> Transform {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0);
        let position = self.focus + rotation * Vec3::Z * self.distance;
        Transform::from_translation(position).looking_at(self.focus, Vec3::Y)
    }
}

pub fn orbit_camera_controller(
    mut rig: ResMut<OrbitRig>,
    mut cameras: Query<&mut Transform, With<OrbitCamera>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    let dragging = mouse_button.any_pressed([MouseButton::Left, MouseButton::Right]);

    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    let mut touched = false;
    if dragging && mouse_delta != Vec2::ZERO {
        rig.drag(mouse_delta);
        touched = true;
    }
    if scroll_accum.abs() > f32::EPSILON {
        rig.zoom(scroll_accum);
        touched = true;
    }
    if !touched {
        rig.idle(time.delta_secs());
    }

    let target = rig.camera_transform();
    let lerp_speed = (12.0 * time.delta_secs()).min(1.0);
    for mut transform in &mut cameras {
        transform.translation = transform.translation.lerp(target.translation, lerp_speed);
        transform.rotation = transform.rotation.slerp(target.rotation, lerp_speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_above_focus_at_start_distance() {
        let rig = OrbitRig::default();
        let transform = rig.camera_transform();
        assert!((transform.translation.length() - ORBIT_START_DISTANCE).abs() < 1e-4);
        assert!(transform.translation.y > 0.0);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut rig = OrbitRig::default();
        rig.drag(Vec2::new(0.0, -1.0e6));
        assert_eq!(rig.pitch, ORBIT_PITCH_LIMIT);
        rig.drag(Vec2::new(0.0, 1.0e6));
        assert_eq!(rig.pitch, -ORBIT_PITCH_LIMIT);
    }

    #[test]
    fn zoom_stays_within_limits() {
        let mut rig = OrbitRig::default();
        rig.zoom(1000.0);
        assert_eq!(rig.distance, ORBIT_MIN_DISTANCE);
        rig.zoom(-1000.0);
        assert_eq!(rig.distance, ORBIT_MAX_DISTANCE);
    }

    #[test]
    fn input_pauses_auto_orbit_until_idle_again() {
        let mut rig = OrbitRig::default();
        assert!(rig.is_auto_orbiting());

        rig.drag(Vec2::new(10.0, 0.0));
        let yaw = rig.yaw;
        rig.idle(ORBIT_IDLE_RESUME_SECS * 0.5);
        assert_eq!(rig.yaw, yaw);
        assert!(!rig.is_auto_orbiting());

        rig.idle(ORBIT_IDLE_RESUME_SECS);
        assert!(rig.is_auto_orbiting());
        assert!(rig.yaw > yaw);
    }

    #[test]
    fn camera_looks_at_focus() {
        let mut rig = OrbitRig::default();
        rig.focus = Vec3::new(1.0, 0.5, -2.0);
        rig.yaw = 0.8;
        let transform = rig.camera_transform();
        let to_focus = (rig.focus - transform.translation).normalize();
        assert!(transform.forward().dot(to_focus) > 0.999);
    }
}
