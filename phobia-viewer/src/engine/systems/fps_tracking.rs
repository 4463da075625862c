use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use constants::render_settings::FPS_REPORT_INTERVAL_SECS;

use crate::engine::core::app_state::FpsText;
use crate::rpc::web_rpc::WebRpcInterface;

/// Smoothed frame rate, or `None` before the diagnostic has samples.
pub fn smoothed_fps(diagnostics: &DiagnosticsStore) -> Option<f64> {
    diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
}

#[derive(Resource)]
pub struct FpsReportTimer(pub Timer);

impl Default for FpsReportTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(
            FPS_REPORT_INTERVAL_SECS,
            TimerMode::Repeating,
        ))
    }
}

pub fn fps_notification_system(
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut timer: ResMut<FpsReportTimer>,
    diagnostics: Res<DiagnosticsStore>,
    time: Res<Time>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }
    if let Some(fps) = smoothed_fps(&diagnostics) {
        rpc_interface.send_notification("fps_update", serde_json::json!({ "fps": fps as f32 }));
    }
}

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    let Some(fps) = smoothed_fps(&diagnostics) else {
        return;
    };
    for mut text in &mut query {
        text.0 = format!("FPS: {fps:.1}");
    }
}
