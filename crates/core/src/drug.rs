//! The closed set of substances the simulator covers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrugId {
    #[default]
    Alcohol,
    Marihuana,
    Nicotina,
    Cocaina,
}

impl DrugId {
    /// Selector order.
    pub const ALL: [DrugId; 4] = [
        DrugId::Alcohol,
        DrugId::Marihuana,
        DrugId::Nicotina,
        DrugId::Cocaina,
    ];

    /// Entry used when a key does not name any substance.
    pub const FALLBACK: DrugId = DrugId::Alcohol;

    pub fn key(self) -> &'static str {
        match self {
            DrugId::Alcohol => "alcohol",
            DrugId::Marihuana => "marihuana",
            DrugId::Nicotina => "nicotina",
            DrugId::Cocaina => "cocaina",
        }
    }

    /// Title shown on the selector card.
    pub fn card_title(self) -> &'static str {
        match self {
            DrugId::Alcohol => "Alcohol (Etanol)",
            DrugId::Marihuana => "Marihuana (THC)",
            DrugId::Nicotina => "Nicotina",
            DrugId::Cocaina => "Cocaína",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            DrugId::Alcohol => "🍺",
            DrugId::Marihuana => "🌿",
            DrugId::Nicotina => "🚬",
            DrugId::Cocaina => "❄️",
        }
    }

    /// Accent colour of the selected card.
    pub fn accent(self) -> &'static str {
        match self {
            DrugId::Alcohol => "#f59e0b",
            DrugId::Marihuana => "#22c55e",
            DrugId::Nicotina => "#64748b",
            DrugId::Cocaina => "#ef4444",
        }
    }

    /// Lenient lookup: any key that does not name a substance resolves to
    /// [`DrugId::FALLBACK`].
    pub fn from_key_or_default(key: &str) -> DrugId {
        match key.parse() {
            Ok(drug) => drug,
            Err(_) => {
                tracing::debug!(key, fallback = %DrugId::FALLBACK, "unrecognized drug key");
                DrugId::FALLBACK
            }
        }
    }
}

impl fmt::Display for DrugId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DrugId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DrugId::ALL
            .into_iter()
            .find(|d| d.key() == s)
            .ok_or_else(|| Error::UnknownDrug(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for drug in DrugId::ALL {
            assert_eq!(drug.key().parse::<DrugId>().unwrap(), drug);
        }
    }

    #[test]
    fn keys_match_exactly() {
        for key in ["Cocaina", " cocaina ", "NICOTINA", "alcohol\n"] {
            assert!(key.parse::<DrugId>().is_err(), "{key:?} parsed");
            assert_eq!(DrugId::from_key_or_default(key), DrugId::Alcohol);
        }
    }

    #[test]
    fn strict_parse_rejects_unknown_keys() {
        let err = "heroina".parse::<DrugId>().unwrap_err();
        assert!(matches!(err, Error::UnknownDrug(ref k) if k == "heroina"));
        assert!("".parse::<DrugId>().is_err());
    }

    #[test]
    fn lenient_lookup_falls_back_to_alcohol() {
        assert_eq!(DrugId::from_key_or_default(""), DrugId::Alcohol);
        assert_eq!(DrugId::from_key_or_default("???"), DrugId::Alcohol);
        assert_eq!(DrugId::from_key_or_default("nicotina"), DrugId::Nicotina);
        assert_eq!(DrugId::FALLBACK, DrugId::default());
    }

    #[test]
    fn selector_inventory_is_stable() {
        let mut keys: Vec<&str> = DrugId::ALL.iter().map(|d| d.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 4);

        for d in DrugId::ALL {
            assert!(!d.card_title().trim().is_empty());
            assert!(!d.icon().trim().is_empty());
            assert!(d.accent().starts_with('#'));
        }
    }

    #[test]
    fn serde_uses_lowercase_keys() {
        let json = serde_json::to_string(&DrugId::Marihuana).unwrap();
        assert_eq!(json, "\"marihuana\"");
        let back: DrugId = serde_json::from_str("\"cocaina\"").unwrap();
        assert_eq!(back, DrugId::Cocaina);
    }
}
