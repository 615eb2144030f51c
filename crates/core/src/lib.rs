//! # synaptica
//!
//! Content tables and the synapse particle animation behind the drug-effects
//! educational simulator.
//!
//! ## Quick Start
//!
//! ```
//! use synaptica::prelude::*;
//!
//! let drug: DrugId = "cocaina".parse().unwrap();
//! assert_eq!(levels(drug).entries.len(), 3);
//!
//! let mut sim = SynapseSimulator::new(drug);
//! let mut rng = ScriptedRandom::new([0.99, 0.5, 0.0]);
//! sim.play();
//! sim.tick(&mut rng);
//! assert_eq!(sim.signals().len(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): the `synaptica-cli` terminal frontend
//!
//! ## Modules
//!
//! - [`drug`]: the closed set of substances
//! - [`profile`]: descriptive content (information view)
//! - [`levels`]: neurotransmitter level comparison
//! - [`simulator`]: synapse particle animation
//! - [`shell`]: page selection state and tabs
//! - [`settings`]: read-only settings document
//! - [`render`]: plain-text rendering

pub mod drug;
pub mod error;
pub mod levels;
pub mod profile;
pub mod render;
pub mod settings;
pub mod shell;
pub mod simulator;

pub use drug::DrugId;
pub use error::{Error, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::drug::DrugId;
    pub use crate::error::{Error, Result};
    pub use crate::levels::{levels, ChangeDirection, LevelsReport, NeurotransmitterLevel};
    pub use crate::profile::{profile, Diagram, DrugProfile};
    pub use crate::settings::Settings;
    pub use crate::shell::{DetailTab, Selection, ShellMode};
    pub use crate::simulator::{
        synapse_config, RandomSource, RngSource, ScriptedRandom, SimulationSettings,
        SynapseConfig, SynapseSimulator, TickReport,
    };
}
