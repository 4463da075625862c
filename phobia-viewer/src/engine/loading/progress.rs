use bevy::prelude::*;

use crate::engine::loading::load_registry::{LoadOutcome, LoadSettled};
use crate::rpc::web_rpc::WebRpcInterface;

/// Aggregate progress over the loads the host page shows a bar for.
#[derive(Resource, Default, Debug, Clone)]
pub struct LoadingProgress {
    pub loaded: usize,
    pub total: usize,
    pub last_url: Option<String>,
    pub failed: Vec<String>,
    pub complete: bool,
}

impl LoadingProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..default()
        }
    }

    /// Apply one settled load. Returns `true` on the call that completes the
    /// set, which happens at most once.
    pub fn apply(&mut self, event: &LoadSettled) -> bool {
        if !event.key.counts_toward_progress() {
            return false;
        }

        match event.outcome {
            LoadOutcome::Loaded => {
                self.loaded = (self.loaded + 1).min(self.total);
                self.last_url = Some(event.url.clone());
            }
            LoadOutcome::Failed => self.failed.push(event.url.clone()),
        }

        if !self.complete && self.total > 0 && self.loaded == self.total {
            self.complete = true;
            return true;
        }
        false
    }
}

/// Push per-load progress and the one-off completion to the host page.
pub fn update_loading_frontend(
    mut settled: EventReader<LoadSettled>,
    mut loading_progress: ResMut<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in settled.read() {
        if !event.key.counts_toward_progress() {
            continue;
        }
        let just_completed = loading_progress.apply(event);

        if event.outcome == LoadOutcome::Loaded {
            rpc_interface.send_notification(
                "loading_progress",
                serde_json::json!({
                    "url": event.url,
                    "loaded": loading_progress.loaded,
                    "total": loading_progress.total,
                }),
            );
        }

        if just_completed {
            info!("✓ All tracked assets loaded");
            rpc_interface.send_notification("loading_complete", serde_json::json!({}));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::scene_assets::LoadKey;

    fn settled(key: LoadKey, outcome: LoadOutcome) -> LoadSettled {
        LoadSettled {
            key,
            url: key.path().to_string(),
            outcome,
        }
    }

    #[test]
    fn completes_once_when_every_counted_load_lands() {
        let mut progress = LoadingProgress::new(2);

        assert!(!progress.apply(&settled(LoadKey::SpiderModel, LoadOutcome::Loaded)));
        assert!(progress.apply(&settled(LoadKey::HeadsetModel, LoadOutcome::Loaded)));
        assert!(progress.complete);
        assert!(!progress.apply(&settled(LoadKey::HeadsetModel, LoadOutcome::Loaded)));
        assert_eq!(progress.loaded, 2);
    }

    #[test]
    fn failure_stalls_completion() {
        let mut progress = LoadingProgress::new(2);

        progress.apply(&settled(LoadKey::SpiderModel, LoadOutcome::Failed));
        progress.apply(&settled(LoadKey::HeadsetModel, LoadOutcome::Loaded));

        assert!(!progress.complete);
        assert_eq!(progress.failed, vec![LoadKey::SpiderModel.path().to_string()]);
    }

    #[test]
    fn environment_map_is_not_counted() {
        let mut progress = LoadingProgress::new(1);
        assert!(!progress.apply(&settled(LoadKey::EnvironmentDiffuse, LoadOutcome::Loaded)));
        assert_eq!(progress.loaded, 0);
        assert_eq!(progress.last_url, None);
    }
}
