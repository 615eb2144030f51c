//! Page shell: drug selection, detail tabs and static page copy.

use serde::{Deserialize, Serialize};

use crate::drug::DrugId;

pub const TITLE: &str = "Simulador de Efectos de Drogas";
pub const SUBTITLE: &str = "Sistema Nervioso y Neurotransmisores";
pub const TEACHER_CREDIT: &str = "Prof. Elisabet Martin";
pub const SCHOOL_SHORT: &str = "E.E.S.T. N° 6 - Banfield";
pub const SCHOOL_LOCALITY: &str = "Lomas de Zamora";
pub const SCHOOL_NAME: &str = "Escuela de Educación Secundaria Técnica N° 6";
pub const SCHOOL_ADDRESS: &str = "Banfield, Lomas de Zamora - Buenos Aires, Argentina";
pub const FOOTER_TAGLINE: &str = "Simulador Educativo de Biología";
pub const LOGO_IMAGE: &str = "/images/logo-escuela.png";

pub const WELCOME_TITLE: &str = "Bienvenido al Simulador Interactivo";
pub const WELCOME_BODY: &str = "Explora cómo diferentes sustancias psicoactivas afectan el sistema nervioso a nivel molecular. Selecciona una droga para ver su mecanismo de acción en la sinapsis neuronal y los efectos en los neurotransmisores.";

pub const PLACEHOLDER_TITLE: &str = "Selecciona una Droga";
pub const PLACEHOLDER_BODY: &str = "Elige una de las sustancias psicoactivas arriba para comenzar la simulación y explorar sus efectos en el sistema nervioso.";

/// Which of the two page modes is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellMode {
    Placeholder,
    Details(DrugId),
}

/// The single piece of page state shared by every view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<DrugId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the active drug changed.
    pub fn select(&mut self, drug: DrugId) -> bool {
        if self.selected == Some(drug) {
            return false;
        }
        tracing::info!(%drug, "drug selected");
        self.selected = Some(drug);
        true
    }

    pub fn selected(&self) -> Option<DrugId> {
        self.selected
    }

    pub fn is_selected(&self, drug: DrugId) -> bool {
        self.selected == Some(drug)
    }

    pub fn mode(&self) -> ShellMode {
        match self.selected {
            Some(drug) => ShellMode::Details(drug),
            None => ShellMode::Placeholder,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailTab {
    #[default]
    Simulation,
    Info,
    Levels,
}

impl DetailTab {
    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Simulation => "Simulación",
            DetailTab::Info => "Información",
            DetailTab::Levels => "Niveles",
        }
    }

    /// Label for narrow screens.
    pub fn short_label(self) -> &'static str {
        match self {
            DetailTab::Simulation => "Simular",
            DetailTab::Info => "Info",
            DetailTab::Levels => "Niveles",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            DetailTab::Simulation => "📈",
            DetailTab::Info => "🧪",
            DetailTab::Levels => "🧠",
        }
    }

    pub fn all() -> &'static [DetailTab] {
        &[DetailTab::Simulation, DetailTab::Info, DetailTab::Levels]
    }
}
