use bevy::prelude::*;

/// Order of work inside one frame of the `Update` schedule.
///
/// Loads settle first so the transition sees a freshly resolved target, then
/// animations advance, then the camera moves, then reports about whatever
/// changed are queued. `Flush` drains that queue to the host page last, so a
/// notification always leaves in the frame that produced it.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Loading,
    Animate,
    Transition,
    Report,
    Flush,
}

pub fn configure_frame_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            FrameSet::Loading,
            FrameSet::Animate,
            FrameSet::Transition,
            FrameSet::Report,
            FrameSet::Flush,
        )
            .chain(),
    );
}
