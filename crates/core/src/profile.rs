//! Descriptive content for the information view.

use crate::drug::DrugId;

/// Image shown when a diagram asset is missing.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagram {
    pub path: &'static str,
    pub caption: &'static str,
}

impl Diagram {
    pub fn src_or_placeholder(&self) -> &'static str {
        if self.path.trim().is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            self.path
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrugProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub active_component: &'static str,
    pub mechanism: &'static str,
    pub diagram: Option<Diagram>,
    pub effects: &'static [&'static str],
    pub warning: &'static str,
}

impl DrugProfile {
    pub fn diagram_alt_text(&self) -> String {
        format!("Diagrama del mecanismo de acción de {}", self.name)
    }
}

pub fn profile(drug: DrugId) -> &'static DrugProfile {
    match drug {
        DrugId::Alcohol => &ALCOHOL,
        DrugId::Marihuana => &MARIHUANA,
        DrugId::Nicotina => &NICOTINA,
        DrugId::Cocaina => &COCAINA,
    }
}

/// Lenient variant of [`profile`] for untyped keys.
pub fn profile_for_key(key: &str) -> &'static DrugProfile {
    profile(DrugId::from_key_or_default(key))
}

static ALCOHOL: DrugProfile = DrugProfile {
    name: "Alcohol Etílico (Etanol)",
    description: "El etanol es el componente principal de las bebidas alcohólicas. Tiene una baja masa molecular y no requiere ser digerido, pasando rápidamente al torrente sanguíneo debido a su alta solubilidad en agua.",
    active_component: "Etanol (C₂H₅OH) - Molécula pequeña y soluble en agua que atraviesa fácilmente las membranas celulares.",
    mechanism: "El principal mecanismo de acción del etanol es inhibir el efecto excitador del neurotransmisor glutamato, produciendo principalmente un efecto sedante en el sistema nervioso central.",
    diagram: Some(Diagram {
        path: "/images/alcohol-mechanism.png",
        caption: "El alcohol (cuadrados verdes) bloquea los receptores de glutamato en la neurona postsináptica, inhibiendo su efecto excitador.",
    }),
    effects: &[
        "Efecto sedante y depresor del sistema nervioso central",
        "Alteraciones en la toma de decisiones y control de impulsos",
        "Afectación del área cerebral relacionada con la formación de memoria",
        "Disminución de la coordinación motora y reflejos",
        "Alteración del juicio y la percepción",
    ],
    warning: "El consumo excesivo de alcohol puede causar daño cerebral permanente, deterioro cognitivo, dependencia física y psicológica, y daños graves en múltiples órganos.",
};

static MARIHUANA: DrugProfile = DrugProfile {
    name: "Marihuana (Cannabis)",
    description: "La marihuana se extrae de la Cannabis sativa, una planta que contiene compuestos denominados cannabinoides, entre los cuales se encuentra el THC (tetrahidrocannabinol). Los cannabinoides pueden permanecer en el cuerpo por períodos prolongados.",
    active_component: "THC (Tetrahidrocannabinol) - Principal cannabinoide psicoactivo presente en la planta Cannabis sativa.",
    mechanism: "Los cannabinoides afectan la liberación de GABA en el espacio sináptico. Normalmente, GABA impide la liberación de dopamina, pero el THC interfiere con este proceso, permitiendo mayor liberación de dopamina.",
    diagram: Some(Diagram {
        path: "/images/marihuana-mechanism.png",
        caption: "Arriba: Sin THC, GABA se libera normalmente. Abajo: Con THC (moléculas rojas), se bloquea GABA y aumenta la liberación de dopamina.",
    }),
    effects: &[
        "Aumento en la liberación de dopamina",
        "Sensación de relajación y euforia",
        "Alteración de la percepción del tiempo",
        "Afectación de la memoria a corto plazo",
        "Cambios en la conducta motora",
        "Puede detectarse en pruebas varios días después del consumo",
    ],
    warning: "El consumo de marihuana puede afectar el desarrollo cerebral en adolescentes, causar problemas de memoria y aprendizaje, y en algunos casos desencadenar trastornos psicológicos.",
};

static NICOTINA: DrugProfile = DrugProfile {
    name: "Nicotina",
    description: "La nicotina es una sustancia que se encuentra en las plantas de tabaco. Su consumo es principalmente a través de cigarrillos o por masticación. Es una droga que llega rápidamente al sistema nervioso, ya que se absorbe fácilmente a través de la inhalación.",
    active_component: "Nicotina (C₁₀H₁₄N₂) - Alcaloide presente en las hojas de tabaco, altamente adictivo.",
    mechanism: "Genera la liberación de múltiples neurotransmisores: dopamina en zonas cerebrales relacionadas con el placer, acetilcolina y norepinefrina, produciendo un estado de alerta y atención.",
    diagram: Some(Diagram {
        path: "/images/nicotina-cycle.png",
        caption: "Ciclo de la nicotina en el cerebro, mostrando las diferentes áreas afectadas y los neurotransmisores liberados.",
    }),
    effects: &[
        "Liberación de dopamina (efecto placentero y adictivo)",
        "Aumento de acetilcolina (mejora temporal de atención)",
        "Liberación de norepinefrina (estado de alerta)",
        "Aumento temporal de la concentración",
        "Elevación de la frecuencia cardíaca y presión arterial",
        "Alta capacidad adictiva",
    ],
    warning: "La nicotina es extremadamente adictiva. El consumo de tabaco está asociado con cáncer, enfermedades cardiovasculares, problemas respiratorios y reducción significativa de la esperanza de vida.",
};

static COCAINA: DrugProfile = DrugProfile {
    name: "Cocaína",
    description: "La cocaína es una sustancia psicoactiva que se obtiene del procesamiento químico de las hojas del arbusto de coca, presente principalmente en Bolivia y Perú. Es un estimulante potente del sistema nervioso central.",
    active_component: "Clorhidrato de cocaína - Alcaloide extraído y procesado de las hojas de coca.",
    mechanism: "Actúa bloqueando los canales que recuperan la dopamina hacia la neurona presináptica después de enviar la información. Esto genera que quede continuamente dopamina en el medio y la neurona postsináptica se sobreestimule.",
    diagram: Some(Diagram {
        path: "/images/cocaine-mechanism.png",
        caption: "La cocaína (moléculas naranjas) bloquea los canales de recaptación de dopamina, causando acumulación en el espacio sináptico.",
    }),
    effects: &[
        "Sobreestimulación continua por acumulación de dopamina",
        "Incremento en la lucidez y estado de alerta",
        "Sensación constante de bienestar y euforia intensa",
        "Aumento de la energía y actividad motora",
        "Deterioro neuronal progresivo con el uso continuado",
        "Riesgo de arritmias cardíacas y accidentes cerebrovasculares",
    ],
    warning: "La cocaína es altamente adictiva y causa deterioro neuronal grave. Puede provocar infartos, derrames cerebrales, daño cardíaco permanente, psicosis y muerte súbita incluso en consumidores ocasionales.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_profile_is_fully_populated() {
        for drug in DrugId::ALL {
            let p = profile(drug);
            assert!(!p.name.trim().is_empty(), "{drug}: name");
            assert!(!p.description.trim().is_empty(), "{drug}: description");
            assert!(!p.active_component.trim().is_empty(), "{drug}: active component");
            assert!(!p.mechanism.trim().is_empty(), "{drug}: mechanism");
            assert!(!p.warning.trim().is_empty(), "{drug}: warning");
            assert!(!p.effects.is_empty(), "{drug}: effects");
            assert!(p.effects.iter().all(|e| !e.trim().is_empty()));
            let d = p.diagram.expect("every substance ships a diagram");
            assert!(d.path.starts_with("/images/"));
            assert!(!d.caption.trim().is_empty());
        }
    }

    #[test]
    fn unknown_keys_resolve_to_the_alcohol_profile() {
        let alcohol = profile(DrugId::Alcohol);
        assert!(std::ptr::eq(profile_for_key(""), alcohol));
        assert!(std::ptr::eq(profile_for_key("lsd"), alcohol));
        assert!(std::ptr::eq(profile_for_key("cocaina"), profile(DrugId::Cocaina)));
    }

    #[test]
    fn missing_diagram_path_uses_placeholder() {
        let d = Diagram {
            path: "",
            caption: "x",
        };
        assert_eq!(d.src_or_placeholder(), PLACEHOLDER_IMAGE);
        let real = profile(DrugId::Nicotina).diagram.unwrap();
        assert_eq!(real.src_or_placeholder(), "/images/nicotina-cycle.png");
    }

    #[test]
    fn alt_text_names_the_substance() {
        assert_eq!(
            profile(DrugId::Cocaina).diagram_alt_text(),
            "Diagrama del mecanismo de acción de Cocaína"
        );
    }
}
