use bevy::prelude::*;
use constants::transition::{
    CAMERA_FOCUS, CAMERA_START, TRANSITION_DELAY_SECS, TRANSITION_DURATION_SECS,
};

/// Marks the camera driven by the transition.
#[derive(Component)]
pub struct TransitionCamera;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionStarted;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionCompleted;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionPhase {
    Waiting,
    Running {
        start_time: f32,
        progress: f32,
        target: Vec3,
    },
    Done,
}

impl TransitionPhase {
    pub fn name(&self) -> &'static str {
        match self {
            TransitionPhase::Waiting => "waiting",
            TransitionPhase::Running { .. } => "running",
            TransitionPhase::Done => "done",
        }
    }
}

/// What one frame of the transition asks of the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionStep {
    /// Waiting or done; the camera is left alone.
    Idle,
    Started { position: Vec3 },
    Moving { position: Vec3, progress: f32 },
    Completed { position: Vec3 },
}

/// Camera transition state machine.
///
/// `Waiting → Running` happens on the first frame where the elapsed session
/// time exceeds the delay and the eye target is known, in whichever order
/// those became true. `Running → Done` happens the instant progress reaches
/// one. Progress is derived from elapsed time, never from frame counts, and
/// never moves backwards.
#[derive(Resource, Debug, Clone)]
pub struct CameraTransition {
    phase: TransitionPhase,
    initial_position: Vec3,
    focus_point: Vec3,
    target_position: Option<Vec3>,
    delay: f32,
    duration: f32,
}

impl Default for CameraTransition {
    fn default() -> Self {
        Self::new(
            CAMERA_START,
            CAMERA_FOCUS,
            TRANSITION_DELAY_SECS,
            TRANSITION_DURATION_SECS,
        )
    }
}

impl CameraTransition {
    pub fn new(initial_position: Vec3, focus_point: Vec3, delay: f32, duration: f32) -> Self {
        Self {
            phase: TransitionPhase::Waiting,
            initial_position,
            focus_point,
            target_position: None,
            delay,
            duration: duration.max(f32::EPSILON),
        }
    }

    /// Set the flight target. The first target wins; later calls return
    /// `false` and change nothing.
    pub fn set_target(&mut self, target: Vec3) -> bool {
        if self.target_position.is_some() {
            return false;
        }
        self.target_position = Some(target);
        true
    }

    pub fn target(&self) -> Option<Vec3> {
        self.target_position
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn initial_position(&self) -> Vec3 {
        self.initial_position
    }

    pub fn focus_point(&self) -> Vec3 {
        self.focus_point
    }

    /// Normalised progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        match self.phase {
            TransitionPhase::Waiting => 0.0,
            TransitionPhase::Running { progress, .. } => progress,
            TransitionPhase::Done => 1.0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase == TransitionPhase::Done
    }

    /// Advance to `elapsed` seconds since session start.
    pub fn advance(&mut self, elapsed: f32) -> TransitionStep {
        match self.phase {
            TransitionPhase::Waiting => {
                let Some(target) = self.target_position else {
                    return TransitionStep::Idle;
                };
                if elapsed <= self.delay {
                    return TransitionStep::Idle;
                }
                self.phase = TransitionPhase::Running {
                    start_time: elapsed,
                    progress: 0.0,
                    target,
                };
                TransitionStep::Started {
                    position: self.initial_position,
                }
            }
            TransitionPhase::Running {
                start_time,
                progress,
                target,
            } => {
                let t = ((elapsed - start_time) / self.duration)
                    .clamp(0.0, 1.0)
                    .max(progress);

                if t >= 1.0 {
                    self.phase = TransitionPhase::Done;
                    TransitionStep::Completed { position: target }
                } else {
                    self.phase = TransitionPhase::Running {
                        start_time,
                        progress: t,
                        target,
                    };
                    TransitionStep::Moving {
                        position: interpolate(self.initial_position, target, t),
                        progress: t,
                    }
                }
            }
            TransitionPhase::Done => TransitionStep::Idle,
        }
    }
}

/// Linear interpolation that lands exactly on both endpoints.
pub fn interpolate(from: Vec3, to: Vec3, t: f32) -> Vec3 {
    if t <= 0.0 {
        from
    } else if t >= 1.0 {
        to
    } else {
        from.lerp(to, t)
    }
}

pub fn spawn_transition_camera(mut commands: Commands, transition: Res<CameraTransition>) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(transition.initial_position())
            .looking_at(transition.focus_point(), Vec3::Y),
        TransitionCamera,
    ));
}

/// Advance the flight on the app's virtual clock.
///
/// Virtual time caps each frame's delta at `Time::<Virtual>::max_delta`
/// (250 ms by default), so a stalled or backgrounded page resumes the flight
/// where it left off instead of jumping to the end. The duration is therefore
/// measured in running app time, not wall-clock time.
pub fn drive_camera_transition(
    time: Res<Time>,
    mut transition: ResMut<CameraTransition>,
    mut cameras: Query<&mut Transform, With<TransitionCamera>>,
    mut started: EventWriter<TransitionStarted>,
    mut completed: EventWriter<TransitionCompleted>,
) {
    let position = match transition.advance(time.elapsed_secs()) {
        TransitionStep::Idle => return,
        TransitionStep::Started { position } => {
            info!("→ Camera transition running");
            started.write(TransitionStarted);
            position
        }
        TransitionStep::Moving { position, .. } => position,
        TransitionStep::Completed { position } => {
            info!("→ Camera transition done");
            completed.write(TransitionCompleted);
            position
        }
    };

    // Orientation is recomputed every frame rather than interpolated.
    let focus = transition.focus_point();
    for mut transform in &mut cameras {
        *transform = Transform::from_translation(position).looking_at(focus, Vec3::Y);
    }
}
