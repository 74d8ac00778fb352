use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_keep_stress() -> bool {
    true
}

fn default_participles() -> bool {
    true
}

fn default_prefer_dataset_forms() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct GrammarConfig {
    /// Produce grammar profiles at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Keep stress marks in output; false renders plain orthography
    #[serde(default = "default_keep_stress")]
    pub keep_stress: bool,
    #[serde(default = "default_participles")]
    pub participles: bool,
    /// Dataset-supplied irregular forms win over rule output
    #[serde(default = "default_prefer_dataset_forms")]
    pub prefer_dataset_forms: bool,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            keep_stress: default_keep_stress(),
            participles: default_participles(),
            prefer_dataset_forms: default_prefer_dataset_forms(),
        }
    }
}
