//! Read-only settings document.
//!
//! Every field has a default, so an empty JSON object is a valid document.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::shell::DetailTab;
use crate::simulator::SimulationSettings;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub simulation: SimulationSettings,
    #[serde(default)]
    pub default_tab: DetailTab,
}

impl Settings {
    pub fn from_json_str(raw: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json_str(&raw).map_err(|source| Error::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        tracing::debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        let s = &self.simulation;
        let unit = 0.0..=1.0;
        if !unit.contains(&s.release_probability) {
            return Err(Error::InvalidSettings(format!(
                "release_probability must be in [0, 1], got {}",
                s.release_probability
            )));
        }
        if !unit.contains(&s.interferent_probability) {
            return Err(Error::InvalidSettings(format!(
                "interferent_probability must be in [0, 1], got {}",
                s.interferent_probability
            )));
        }
        if s.tick_interval_ms == 0 {
            return Err(Error::InvalidSettings(
                "tick_interval_ms must be positive".to_string(),
            ));
        }
        if s.max_interferents == 0 {
            return Err(Error::InvalidSettings(
                "max_interferents must be at least 1".to_string(),
            ));
        }
        if s.cleft_exit_x <= s.release_origin_x {
            return Err(Error::InvalidSettings(format!(
                "cleft_exit_x ({}) must lie right of release_origin_x ({})",
                s.cleft_exit_x, s.release_origin_x
            )));
        }
        if s.drift_per_tick <= 0.0 {
            return Err(Error::InvalidSettings(
                "drift_per_tick must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let s = Settings::from_json_str("{}").unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.simulation.tick_interval_ms, 200);
        assert_eq!(s.default_tab, DetailTab::Simulation);
        s.validate().unwrap();
    }

    #[test]
    fn partial_documents_keep_other_defaults() {
        let s = Settings::from_json_str(
            r#"{"default_tab": "levels", "simulation": {"tick_interval_ms": 50}}"#,
        )
        .unwrap();
        assert_eq!(s.default_tab, DetailTab::Levels);
        assert_eq!(s.simulation.tick_interval_ms, 50);
        assert_eq!(s.simulation.max_interferents, 8);
    }

    #[test]
    fn validation_rejects_out_of_range_values() {
        let mut s = Settings::default();
        s.simulation.release_probability = 1.5;
        assert!(matches!(s.validate(), Err(Error::InvalidSettings(_))));

        let mut s = Settings::default();
        s.simulation.cleft_exit_x = 10.0;
        assert!(s.validate().is_err());

        let mut s = Settings::default();
        s.simulation.max_interferents = 0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn load_reports_the_offending_path() {
        let dir = std::env::temp_dir().join(format!("synaptica-settings-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let missing = dir.join("missing.json");
        assert!(matches!(Settings::load(&missing), Err(Error::Io { .. })));

        let broken = dir.join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        match Settings::load(&broken) {
            Err(Error::Settings { path, .. }) => assert_eq!(path, broken),
            other => panic!("expected settings error, got {other:?}"),
        }

        let good = dir.join("good.json");
        fs::write(&good, r#"{"simulation": {"max_interferents": 4}}"#).unwrap();
        assert_eq!(Settings::load(&good).unwrap().simulation.max_interferents, 4);

        let _ = fs::remove_dir_all(&dir);
    }
}
