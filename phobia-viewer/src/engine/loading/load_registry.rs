use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::scene_assets::LoadKey;
use crate::engine::core::error::ViewerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

/// One load reaching its final state. Written at most once per key.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct LoadSettled {
    pub key: LoadKey,
    pub url: String,
    pub outcome: LoadOutcome,
}

#[derive(Debug)]
struct TrackedLoad {
    key: LoadKey,
    url: String,
    handle: UntypedHandle,
    outcome: Option<LoadOutcome>,
}

/// Every load the session requested, with the outcome once known.
#[derive(Resource, Default, Debug)]
pub struct LoadRegistry {
    loads: Vec<TrackedLoad>,
}

impl LoadRegistry {
    /// Start tracking a load. Tracking the same key twice replaces nothing;
    /// the first registration wins.
    pub fn track(&mut self, key: LoadKey, url: impl Into<String>, handle: UntypedHandle) {
        if self.loads.iter().any(|load| load.key == key) {
            warn!("Load {:?} already tracked", key);
            return;
        }
        self.loads.push(TrackedLoad {
            key,
            url: url.into(),
            handle,
            outcome: None,
        });
    }

    /// Record the final outcome of a load. Returns the event to publish, or
    /// `None` for unknown keys and loads that already settled.
    pub fn settle(&mut self, key: LoadKey, outcome: LoadOutcome) -> Option<LoadSettled> {
        let load = self
            .loads
            .iter_mut()
            .find(|load| load.key == key && load.outcome.is_none())?;
        load.outcome = Some(outcome);

        Some(LoadSettled {
            key,
            url: load.url.clone(),
            outcome,
        })
    }

    pub fn outcome(&self, key: LoadKey) -> Option<LoadOutcome> {
        self.loads
            .iter()
            .find(|load| load.key == key)
            .and_then(|load| load.outcome)
    }

    /// Loads counted by the host progress indicator.
    pub fn progress_total(&self) -> usize {
        self.loads
            .iter()
            .filter(|load| load.key.counts_toward_progress())
            .count()
    }

    fn pending(&self) -> impl Iterator<Item = &TrackedLoad> {
        self.loads.iter().filter(|load| load.outcome.is_none())
    }
}

/// Turn asset-server load states into one `LoadSettled` event per load.
pub fn poll_load_states(
    mut registry: ResMut<LoadRegistry>,
    asset_server: Res<AssetServer>,
    mut settled: EventWriter<LoadSettled>,
) {
    let updates: Vec<(LoadKey, LoadOutcome)> = registry
        .pending()
        .filter_map(|load| match asset_server.get_load_state(load.handle.id()) {
            Some(LoadState::Loaded) => Some((load.key, LoadOutcome::Loaded)),
            Some(LoadState::Failed(err)) => {
                let failure = ViewerError::AssetLoad {
                    url: load.url.clone(),
                    reason: err.to_string(),
                };
                error!("{failure}");
                Some((load.key, LoadOutcome::Failed))
            }
            _ => None,
        })
        .collect();

    for (key, outcome) in updates {
        if let Some(event) = registry.settle(key, outcome) {
            if outcome == LoadOutcome::Loaded {
                info!("✓ Loaded {}", event.url);
            }
            settled.write(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(keys: &[LoadKey]) -> LoadRegistry {
        let mut registry = LoadRegistry::default();
        for key in keys {
            registry.track(*key, key.path(), Handle::<Image>::default().untyped());
        }
        registry
    }

    #[test]
    fn settles_each_load_once() {
        let mut registry = registry_with(&[LoadKey::TableTexture]);

        let first = registry.settle(LoadKey::TableTexture, LoadOutcome::Loaded);
        assert_eq!(
            first,
            Some(LoadSettled {
                key: LoadKey::TableTexture,
                url: LoadKey::TableTexture.path().to_string(),
                outcome: LoadOutcome::Loaded,
            })
        );
        assert_eq!(
            registry.settle(LoadKey::TableTexture, LoadOutcome::Failed),
            None
        );
        assert_eq!(
            registry.outcome(LoadKey::TableTexture),
            Some(LoadOutcome::Loaded)
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut registry = registry_with(&[LoadKey::TableTexture]);
        assert_eq!(registry.settle(LoadKey::SpiderModel, LoadOutcome::Loaded), None);
        assert_eq!(registry.outcome(LoadKey::SpiderModel), None);
    }

    #[test]
    fn progress_total_excludes_environment_map() {
        let registry = registry_with(&LoadKey::ALL);
        assert_eq!(registry.progress_total(), 5);
    }

    #[test]
    fn duplicate_tracking_keeps_first_registration() {
        let mut registry = registry_with(&[LoadKey::JarTexture]);
        registry.track(
            LoadKey::JarTexture,
            "elsewhere.png",
            Handle::<Image>::default().untyped(),
        );

        let event = registry.settle(LoadKey::JarTexture, LoadOutcome::Loaded);
        assert_eq!(
            event.map(|event| event.url),
            Some(LoadKey::JarTexture.path().to_string())
        );
    }
}
