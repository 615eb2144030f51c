//! Synapse animation: neurotransmitter release and drug interference.
//!
//! Coordinate system (matches the rendered panel):
//! - `x` and `y` are percentages of the panel, `0..=100`
//! - signal particles are released from the presynaptic side and drift right
//! - interferent particles appear anywhere in the panel
//!
//! The simulation is cosmetic. Randomness comes from a [`RandomSource`]
//! passed to [`SynapseSimulator::tick`], so tests can script it.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::drug::DrugId;

/// Per-substance labels for the animation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynapseConfig {
    /// Name of the drug molecule (legend entry for interferents).
    pub molecule: &'static str,
    /// Neurotransmitter tagged on every released signal particle.
    pub primary_neurotransmitter: &'static str,
    pub description: &'static str,
    /// Dominant synaptic effect, shown while interferents are present.
    pub effect_label: &'static str,
}

pub fn synapse_config(drug: DrugId) -> &'static SynapseConfig {
    match drug {
        DrugId::Alcohol => &ALCOHOL,
        DrugId::Marihuana => &MARIHUANA,
        DrugId::Nicotina => &NICOTINA,
        DrugId::Cocaina => &COCAINA,
    }
}

pub fn synapse_config_for_key(key: &str) -> &'static SynapseConfig {
    synapse_config(DrugId::from_key_or_default(key))
}

static ALCOHOL: SynapseConfig = SynapseConfig {
    molecule: "Etanol",
    primary_neurotransmitter: "Glutamato",
    description: "El etanol inhibe el efecto excitador del glutamato",
    effect_label: "Inhibición de Glutamato",
};

static MARIHUANA: SynapseConfig = SynapseConfig {
    molecule: "THC",
    primary_neurotransmitter: "Dopamina",
    description: "Los cannabinoides afectan la liberación de GABA y dopamina",
    effect_label: "Aumento de Dopamina",
};

static NICOTINA: SynapseConfig = SynapseConfig {
    molecule: "Nicotina",
    primary_neurotransmitter: "Dopamina",
    description: "Genera liberación de dopamina, acetilcolina y norepinefrina",
    effect_label: "Liberación de Neurotransmisores",
};

static COCAINA: SynapseConfig = SynapseConfig {
    molecule: "Cocaína",
    primary_neurotransmitter: "Dopamina",
    description: "Bloquea la recaptación de dopamina hacia la neurona",
    effect_label: "Bloqueo de Recaptación",
};

/// Uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

/// Adapts any `rand` generator into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f32 {
        rand::Rng::gen::<f32>(&mut self.0)
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(0.0);
        }
        Self { values, cursor: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f32 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        v
    }
}

fn default_tick_interval_ms() -> u32 {
    200
}

fn default_release_probability() -> f32 {
    0.3
}

fn default_interferent_probability() -> f32 {
    0.2
}

fn default_release_origin_x() -> f32 {
    20.0
}

fn default_release_y_min() -> f32 {
    50.0
}

fn default_release_y_span() -> f32 {
    20.0
}

fn default_interferent_min() -> f32 {
    10.0
}

fn default_interferent_span() -> f32 {
    80.0
}

fn default_drift_per_tick() -> f32 {
    2.0
}

fn default_cleft_exit_x() -> f32 {
    85.0
}

fn default_max_interferents() -> usize {
    8
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u32,
    #[serde(default = "default_release_probability")]
    pub release_probability: f32,
    #[serde(default = "default_interferent_probability")]
    pub interferent_probability: f32,
    #[serde(default = "default_release_origin_x")]
    pub release_origin_x: f32,
    #[serde(default = "default_release_y_min")]
    pub release_y_min: f32,
    #[serde(default = "default_release_y_span")]
    pub release_y_span: f32,
    #[serde(default = "default_interferent_min")]
    pub interferent_min: f32,
    #[serde(default = "default_interferent_span")]
    pub interferent_span: f32,
    #[serde(default = "default_drift_per_tick")]
    pub drift_per_tick: f32,
    /// Signal particles at or past this `x` have crossed the cleft.
    #[serde(default = "default_cleft_exit_x")]
    pub cleft_exit_x: f32,
    /// Only the most recent interferents are kept.
    #[serde(default = "default_max_interferents")]
    pub max_interferents: usize,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            release_probability: default_release_probability(),
            interferent_probability: default_interferent_probability(),
            release_origin_x: default_release_origin_x(),
            release_y_min: default_release_y_min(),
            release_y_span: default_release_y_span(),
            interferent_min: default_interferent_min(),
            interferent_span: default_interferent_span(),
            drift_per_tick: default_drift_per_tick(),
            cleft_exit_x: default_cleft_exit_x(),
            max_interferents: default_max_interferents(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// Neurotransmitter molecule crossing the cleft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalParticle {
    pub id: u64,
    pub position: Position,
    pub neurotransmitter: &'static str,
    pub active: bool,
}

/// Drug molecule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterferentParticle {
    pub id: u64,
    pub position: Position,
}

/// What a single tick changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub released: bool,
    pub spawned_interferent: bool,
    pub exited: usize,
    pub evicted: usize,
}

#[derive(Debug, Clone)]
pub struct SynapseSimulator {
    drug: DrugId,
    config: &'static SynapseConfig,
    settings: SimulationSettings,
    playing: bool,
    signals: Vec<SignalParticle>,
    interferents: Vec<InterferentParticle>,
    next_id: u64,
    ticks: u64,
}

impl SynapseSimulator {
    pub fn new(drug: DrugId) -> Self {
        Self::with_settings(drug, SimulationSettings::default())
    }

    pub fn with_settings(drug: DrugId, settings: SimulationSettings) -> Self {
        Self {
            drug,
            config: synapse_config(drug),
            settings,
            playing: false,
            signals: Vec::new(),
            interferents: Vec::with_capacity(settings.max_interferents + 1),
            next_id: 0,
            ticks: 0,
        }
    }

    pub fn drug(&self) -> DrugId {
        self.drug
    }

    pub fn config(&self) -> &'static SynapseConfig {
        self.config
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn signals(&self) -> &[SignalParticle] {
        &self.signals
    }

    pub fn interferents(&self) -> &[InterferentParticle] {
        &self.interferents
    }

    /// Ticks executed since construction (reset does not rewind it).
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Flips between playing and paused; returns the new state.
    pub fn toggle(&mut self) -> bool {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
        self.playing
    }

    pub fn play(&mut self) {
        if !self.playing {
            tracing::info!(drug = %self.drug, "synapse animation playing");
        }
        self.playing = true;
    }

    pub fn pause(&mut self) {
        if self.playing {
            tracing::info!(drug = %self.drug, ticks = self.ticks, "synapse animation paused");
        }
        self.playing = false;
    }

    /// Stops playback and clears both particle collections.
    pub fn reset(&mut self) {
        self.playing = false;
        self.signals.clear();
        self.interferents.clear();
        tracing::debug!(drug = %self.drug, "synapse animation reset");
    }

    /// Switches the substance in place. Playback, particles already in flight
    /// and the id counter carry over; later releases use the new
    /// neurotransmitter. Returns `true` when the drug changed.
    pub fn set_drug(&mut self, drug: DrugId) -> bool {
        if self.drug == drug {
            return false;
        }
        tracing::info!(from = %self.drug, to = %drug, playing = self.playing, "synapse drug changed");
        self.drug = drug;
        self.config = synapse_config(drug);
        true
    }

    /// Label of the dominant synaptic effect, present while any interferent is.
    pub fn effect_label(&self) -> Option<&'static str> {
        if self.interferents.is_empty() {
            None
        } else {
            Some(self.config.effect_label)
        }
    }

    /// Advances the animation by one cadence step. No-op while paused.
    pub fn tick(&mut self, rng: &mut impl RandomSource) -> TickReport {
        let mut report = TickReport::default();
        if !self.playing {
            return report;
        }
        let s = self.settings;

        if rng.next_unit() > 1.0 - s.release_probability {
            let y = s.release_y_min + rng.next_unit() * s.release_y_span;
            let id = self.alloc_id();
            self.signals.push(SignalParticle {
                id,
                position: Position {
                    x: s.release_origin_x,
                    y,
                },
                neurotransmitter: self.config.primary_neurotransmitter,
                active: true,
            });
            report.released = true;
        }

        if rng.next_unit() > 1.0 - s.interferent_probability {
            let x = s.interferent_min + rng.next_unit() * s.interferent_span;
            let y = s.interferent_min + rng.next_unit() * s.interferent_span;
            let id = self.alloc_id();
            self.interferents.push(InterferentParticle {
                id,
                position: Position { x, y },
            });
            report.spawned_interferent = true;
        }

        for p in &mut self.signals {
            p.position.x += s.drift_per_tick;
        }
        let before = self.signals.len();
        self.signals.retain(|p| p.position.x < s.cleft_exit_x);
        report.exited = before - self.signals.len();

        let max = s.max_interferents;
        if self.interferents.len() > max {
            let excess = self.interferents.len() - max;
            self.interferents.drain(..excess);
            report.evicted = excess;
        }

        self.ticks += 1;
        if report.released || report.spawned_interferent || report.exited > 0 {
            tracing::debug!(
                tick = self.ticks,
                signals = self.signals.len(),
                interferents = self.interferents.len(),
                exited = report.exited,
                evicted = report.evicted,
                "synapse tick"
            );
        }
        report
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Draw order per tick: release?, release y, interferent?, interferent x, interferent y.
    fn release_only() -> ScriptedRandom {
        ScriptedRandom::new([0.99, 0.5, 0.0])
    }

    fn playing(drug: DrugId) -> SynapseSimulator {
        let mut sim = SynapseSimulator::new(drug);
        sim.play();
        sim
    }

    #[test]
    fn paused_simulator_ignores_ticks() {
        let mut sim = SynapseSimulator::new(DrugId::Alcohol);
        let mut rng = release_only();
        for _ in 0..10 {
            assert_eq!(sim.tick(&mut rng), TickReport::default());
        }
        assert!(sim.signals().is_empty());
        assert_eq!(sim.tick_count(), 0);
    }

    #[test]
    fn release_spawns_at_origin_and_drifts_in_the_same_tick() {
        let mut sim = playing(DrugId::Alcohol);
        let mut rng = release_only();
        let report = sim.tick(&mut rng);
        assert!(report.released);
        assert!(!report.spawned_interferent);

        let p = sim.signals()[0];
        assert_eq!(p.position.x, 22.0);
        assert_eq!(p.position.y, 60.0);
        assert_eq!(p.neurotransmitter, "Glutamato");
        assert!(p.active);
    }

    #[test]
    fn low_draws_do_not_spawn() {
        let mut sim = playing(DrugId::Cocaina);
        let mut rng = ScriptedRandom::new([0.6, 0.7]);
        let report = sim.tick(&mut rng);
        assert!(!report.released);
        assert!(!report.spawned_interferent);
    }

    #[test]
    fn signals_leave_once_they_reach_the_exit() {
        let mut sim = playing(DrugId::Nicotina);
        sim.tick(&mut release_only());

        let mut quiet = ScriptedRandom::new([0.0]);
        let mut exited_at = None;
        for i in 0..40 {
            let report = sim.tick(&mut quiet);
            assert!(sim.signals().iter().all(|p| p.position.x < 85.0));
            if report.exited > 0 {
                exited_at = Some(i);
                break;
            }
        }
        // 22 -> 84 takes 31 further ticks; the 32nd lands on 86 and is dropped.
        assert_eq!(exited_at, Some(31));
        assert!(sim.signals().is_empty());
    }

    #[test]
    fn interferents_keep_only_the_most_recent_eight() {
        let mut sim = playing(DrugId::Marihuana);
        // No release, always spawn an interferent at (50, 50).
        let mut rng = ScriptedRandom::new([0.0, 0.9, 0.5, 0.5]);
        let mut evicted = 0;
        for _ in 0..12 {
            evicted += sim.tick(&mut rng).evicted;
            assert!(sim.interferents().len() <= 8);
        }
        assert_eq!(evicted, 4);
        let ids: Vec<u64> = sim.interferents().iter().map(|p| p.id).collect();
        assert_eq!(ids, (4..12).collect::<Vec<u64>>());
        let p = sim.interferents()[0].position;
        assert_eq!((p.x, p.y), (50.0, 50.0));
    }

    #[test]
    fn particle_ids_are_unique_across_kinds() {
        let mut sim = playing(DrugId::Cocaina);
        let mut rng = ScriptedRandom::new([0.99, 0.1, 0.99, 0.2, 0.3]);
        sim.tick(&mut rng);
        sim.tick(&mut rng);
        let mut ids: Vec<u64> = sim
            .signals()
            .iter()
            .map(|p| p.id)
            .chain(sim.interferents().iter().map(|p| p.id))
            .collect();
        assert_eq!(ids.len(), 4);
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut sim = playing(DrugId::Alcohol);
        let mut rng = RngSource(StdRng::seed_from_u64(7));
        for _ in 0..50 {
            sim.tick(&mut rng);
        }
        sim.reset();
        let once = (sim.is_playing(), sim.signals().len(), sim.interferents().len());
        sim.reset();
        let twice = (sim.is_playing(), sim.signals().len(), sim.interferents().len());
        assert_eq!(once, (false, 0, 0));
        assert_eq!(once, twice);
        assert_eq!(sim.effect_label(), None);
    }

    #[test]
    fn effect_label_tracks_interferent_presence() {
        let mut sim = playing(DrugId::Cocaina);
        assert_eq!(sim.effect_label(), None);
        sim.tick(&mut ScriptedRandom::new([0.0, 0.9, 0.5, 0.5]));
        assert_eq!(sim.effect_label(), Some("Bloqueo de Recaptación"));
    }

    #[test]
    fn switching_drug_keeps_the_running_animation() {
        let mut sim = playing(DrugId::Alcohol);
        sim.tick(&mut release_only());
        sim.tick(&mut ScriptedRandom::new([0.0, 0.99, 0.5, 0.5]));
        let first_id = sim.signals()[0].id;

        assert!(sim.set_drug(DrugId::Cocaina));
        assert!(!sim.set_drug(DrugId::Cocaina));
        assert!(sim.is_playing());
        assert_eq!(sim.drug(), DrugId::Cocaina);
        assert_eq!(sim.interferents().len(), 1);
        assert_eq!(sim.effect_label(), Some("Bloqueo de Recaptación"));

        sim.tick(&mut release_only());
        let tags: Vec<(u64, &str)> =
            sim.signals().iter().map(|p| (p.id, p.neurotransmitter)).collect();
        assert_eq!(tags, [(first_id, "Glutamato"), (2, "Dopamina")]);
    }

    #[test]
    fn toggle_flips_playback() {
        let mut sim = SynapseSimulator::new(DrugId::Alcohol);
        assert!(sim.toggle());
        assert!(sim.is_playing());
        assert!(!sim.toggle());
        assert!(!sim.is_playing());
    }

    #[test]
    fn seeded_runs_hold_the_tick_invariants() {
        for seed in 0..20u64 {
            let mut sim = playing(DrugId::ALL[(seed % 4) as usize]);
            let mut rng = RngSource(StdRng::seed_from_u64(seed));
            for _ in 0..300 {
                sim.tick(&mut rng);
                assert!(sim.signals().iter().all(|p| p.position.x < 85.0));
                assert!(sim.interferents().len() <= 8);
                for p in sim.interferents() {
                    assert!((10.0..=90.0).contains(&p.position.x));
                    assert!((10.0..=90.0).contains(&p.position.y));
                }
                for p in sim.signals() {
                    assert!((50.0..=70.0).contains(&p.position.y));
                }
            }
        }
    }

    #[test]
    fn every_config_is_fully_populated_and_unknown_keys_fall_back() {
        for drug in DrugId::ALL {
            let c = synapse_config(drug);
            assert!(!c.molecule.is_empty());
            assert!(!c.primary_neurotransmitter.is_empty());
            assert!(!c.description.is_empty());
            assert!(!c.effect_label.is_empty());
        }
        assert!(std::ptr::eq(
            synapse_config_for_key("unknown"),
            synapse_config(DrugId::Alcohol)
        ));
    }

    #[test]
    fn settings_defaults_fill_missing_fields() {
        let s: SimulationSettings = serde_json::from_str(r#"{"max_interferents": 3}"#).unwrap();
        assert_eq!(s.max_interferents, 3);
        assert_eq!(s.tick_interval_ms, 200);
        assert_eq!(s.cleft_exit_x, 85.0);
    }
}
