//! Before/after neurotransmitter levels for the comparison view.
//!
//! Entry order is significant: it is the stacking order on screen.

use serde::{Deserialize, Serialize};

use crate::drug::DrugId;

/// Level of the "Normal" bar every entry is compared against.
pub const BASELINE_LEVEL: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Increase,
    Decrease,
    Stable,
}

impl ChangeDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeDirection::Increase => "increase",
            ChangeDirection::Decrease => "decrease",
            ChangeDirection::Stable => "stable",
        }
    }

    /// Badge style the direction is rendered with.
    pub fn badge_variant(self) -> &'static str {
        match self {
            ChangeDirection::Increase => "default",
            ChangeDirection::Decrease => "destructive",
            ChangeDirection::Stable => "secondary",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ChangeDirection::Increase => "↗",
            ChangeDirection::Decrease => "↘",
            ChangeDirection::Stable => "—",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeurotransmitterLevel {
    pub name: &'static str,
    /// CSS hex colour of the dot and the comparison bar.
    pub color: &'static str,
    /// Normalized level, 0..=100.
    pub level: u8,
    pub change: ChangeDirection,
    pub change_label: &'static str,
    pub description: &'static str,
}

impl NeurotransmitterLevel {
    pub fn clamped_level(&self) -> u8 {
        self.level.min(100)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelsReport {
    /// Name used in "Con {drug_name}" captions.
    pub drug_name: &'static str,
    pub entries: &'static [NeurotransmitterLevel],
    pub summary: &'static str,
}

impl LevelsReport {
    pub fn intro(&self) -> String {
        format!(
            "Comparación de los niveles de neurotransmisores en estado normal vs. bajo el efecto de {}.",
            self.drug_name
        )
    }

    pub fn with_drug_caption(&self) -> String {
        format!("Con {}", self.drug_name)
    }
}

pub fn levels(drug: DrugId) -> &'static LevelsReport {
    match drug {
        DrugId::Alcohol => &ALCOHOL,
        DrugId::Marihuana => &MARIHUANA,
        DrugId::Nicotina => &NICOTINA,
        DrugId::Cocaina => &COCAINA,
    }
}

pub fn levels_for_key(key: &str) -> &'static LevelsReport {
    levels(DrugId::from_key_or_default(key))
}

const DOPAMINE: &str = "#8b5cf6";
const GABA: &str = "#3b82f6";
const RED: &str = "#ef4444";

static ALCOHOL: LevelsReport = LevelsReport {
    drug_name: "Alcohol",
    entries: &[
        NeurotransmitterLevel {
            name: "Glutamato",
            color: RED,
            level: 20,
            change: ChangeDirection::Decrease,
            change_label: "Disminuye",
            description: "El etanol inhibe el efecto excitador del glutamato, reduciendo significativamente su actividad y produciendo un efecto sedante general.",
        },
        NeurotransmitterLevel {
            name: "GABA",
            color: GABA,
            level: 75,
            change: ChangeDirection::Increase,
            change_label: "Aumenta",
            description: "El alcohol potencia los efectos del GABA, el principal neurotransmisor inhibidor, aumentando la sedación.",
        },
        NeurotransmitterLevel {
            name: "Dopamina",
            color: DOPAMINE,
            level: 45,
            change: ChangeDirection::Stable,
            change_label: "Variable",
            description: "Los niveles de dopamina pueden variar, contribuyendo a los efectos de recompensa del alcohol.",
        },
    ],
    summary: "El alcohol actúa principalmente como depresor del sistema nervioso central, inhibiendo el glutamato y potenciando el GABA. Esto resulta en efectos sedantes, alteración del juicio, pérdida de coordinación y afectación de la memoria.",
};

static MARIHUANA: LevelsReport = LevelsReport {
    drug_name: "THC",
    entries: &[
        NeurotransmitterLevel {
            name: "Dopamina",
            color: DOPAMINE,
            level: 80,
            change: ChangeDirection::Increase,
            change_label: "Aumenta",
            description: "El THC interfiere con la liberación de GABA, permitiendo mayor liberación de dopamina, lo que produce sensaciones de placer y relajación.",
        },
        NeurotransmitterLevel {
            name: "GABA",
            color: GABA,
            level: 30,
            change: ChangeDirection::Decrease,
            change_label: "Disminuye",
            description: "Los cannabinoides reducen la liberación de GABA, eliminando su efecto inhibidor sobre la dopamina.",
        },
        NeurotransmitterLevel {
            name: "Anandamida",
            color: "#10b981",
            level: 70,
            change: ChangeDirection::Increase,
            change_label: "Aumenta",
            description: "El THC imita a la anandamida, un cannabinoide endógeno, afectando el estado de ánimo y la percepción.",
        },
    ],
    summary: "La marihuana actúa sobre el sistema endocannabinoide, reduciendo la inhibición de GABA y permitiendo mayor liberación de dopamina. Esto produce relajación, alteración de la percepción del tiempo, y afecta la memoria a corto plazo.",
};

static NICOTINA: LevelsReport = LevelsReport {
    drug_name: "Nicotina",
    entries: &[
        NeurotransmitterLevel {
            name: "Dopamina",
            color: DOPAMINE,
            level: 85,
            change: ChangeDirection::Increase,
            change_label: "Aumenta",
            description: "La nicotina estimula la liberación de dopamina en el sistema de recompensa cerebral, generando sensación placentera y alta adicción.",
        },
        NeurotransmitterLevel {
            name: "Acetilcolina",
            color: "#f59e0b",
            level: 80,
            change: ChangeDirection::Increase,
            change_label: "Aumenta",
            description: "La nicotina activa los receptores de acetilcolina, mejorando temporalmente la atención y concentración.",
        },
        NeurotransmitterLevel {
            name: "Norepinefrina",
            color: RED,
            level: 75,
            change: ChangeDirection::Increase,
            change_label: "Aumenta",
            description: "Aumenta la liberación de norepinefrina, generando estado de alerta y aumento de la frecuencia cardíaca.",
        },
    ],
    summary: "La nicotina es un potente estimulante que activa múltiples sistemas de neurotransmisores. Genera liberación de dopamina (placer y adicción), acetilcolina (atención) y norepinefrina (alerta), creando una fuerte dependencia física y psicológica.",
};

static COCAINA: LevelsReport = LevelsReport {
    drug_name: "Cocaína",
    entries: &[
        NeurotransmitterLevel {
            name: "Dopamina",
            color: DOPAMINE,
            level: 95,
            change: ChangeDirection::Increase,
            change_label: "Aumenta Mucho",
            description: "La cocaína bloquea la recaptación de dopamina, causando acumulación masiva en la sinapsis y sobreestimulación continua de las neuronas.",
        },
        NeurotransmitterLevel {
            name: "Serotonina",
            color: "#ec4899",
            level: 70,
            change: ChangeDirection::Increase,
            change_label: "Aumenta",
            description: "También bloquea la recaptación de serotonina, contribuyendo a la euforia y alteraciones del estado de ánimo.",
        },
        NeurotransmitterLevel {
            name: "Norepinefrina",
            color: RED,
            level: 85,
            change: ChangeDirection::Increase,
            change_label: "Aumenta",
            description: "El bloqueo de recaptación de norepinefrina causa aumento de energía, alerta extrema y efectos cardiovasculares peligrosos.",
        },
    ],
    summary: "La cocaína bloquea la recaptación de dopamina, serotonina y norepinefrina, causando sobreestimulación extrema. Esto produce euforia intensa, aumento de energía y lucidez, pero causa deterioro neuronal progresivo y riesgo cardiovascular grave.",
};
