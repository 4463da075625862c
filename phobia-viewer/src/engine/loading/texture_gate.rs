use bevy::prelude::*;

use crate::engine::assets::scene_assets::LoadKey;
use crate::engine::loading::load_counter::{GateSignal, LoadCounter};
use crate::engine::loading::load_registry::{LoadOutcome, LoadSettled};

/// What a failed texture does to the gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// A failure is logged and never counted; the gate stays shut.
    #[default]
    Stall,
    /// A failure counts as done and the piece is dressed with an untextured
    /// placeholder material instead.
    Placeholder,
}

/// Fired once, on the frame the last gated texture lands.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TexturesReady;

/// Join over the table, jar and lid textures.
#[derive(Resource, Debug, Clone)]
pub struct TextureGate {
    counter: LoadCounter,
    policy: FailurePolicy,
    settled: Vec<LoadKey>,
    placeholders: Vec<LoadKey>,
}

impl Default for TextureGate {
    fn default() -> Self {
        Self::new(FailurePolicy::default())
    }
}

impl TextureGate {
    pub fn new(policy: FailurePolicy) -> Self {
        Self {
            counter: LoadCounter::new(LoadKey::TEXTURES.len()),
            policy,
            settled: Vec::new(),
            placeholders: Vec::new(),
        }
    }

    /// Feed one texture outcome into the gate. Non-texture keys and repeat
    /// signals for an already settled texture are no-ops.
    pub fn settle(&mut self, key: LoadKey, outcome: LoadOutcome) -> Option<GateSignal> {
        if !key.is_texture() || self.settled.contains(&key) {
            return None;
        }
        self.settled.push(key);

        match (outcome, self.policy) {
            (LoadOutcome::Loaded, _) => Some(self.counter.record_completion()),
            (LoadOutcome::Failed, FailurePolicy::Stall) => {
                warn!("Texture {:?} failed; static geometry stays hidden", key);
                None
            }
            (LoadOutcome::Failed, FailurePolicy::Placeholder) => {
                warn!("Texture {:?} failed; using placeholder material", key);
                self.placeholders.push(key);
                Some(self.counter.record_completion())
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.counter.is_open()
    }

    pub fn uses_placeholder(&self, key: LoadKey) -> bool {
        self.placeholders.contains(&key)
    }

    pub fn counter(&self) -> &LoadCounter {
        &self.counter
    }
}

pub fn count_texture_completions(
    mut settled: EventReader<LoadSettled>,
    mut gate: ResMut<TextureGate>,
    mut ready: EventWriter<TexturesReady>,
) {
    for event in settled.read() {
        match gate.settle(event.key, event.outcome) {
            Some(GateSignal::Opened) => {
                info!("✓ All textures loaded");
                ready.write(TexturesReady);
            }
            Some(GateSignal::Pending {
                completed,
                required,
            }) => {
                info!("Textures loaded: {}/{}", completed, required);
            }
            Some(GateSignal::AlreadyOpen) | None => {}
        }
    }
}
