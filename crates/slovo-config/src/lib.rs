use std::env;

use serde::{Deserialize, Serialize};

use self::grammar::GrammarConfig;

pub mod grammar;

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub grammar: GrammarConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; `new` reads the process env
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = GrammarConfig::default();
        let flag = |key: &str, default: bool| {
            lookup(key).and_then(|v| parse_flag(&v)).unwrap_or(default)
        };

        let grammar = GrammarConfig {
            enabled: flag("SLOVO_GRAMMAR_ENABLED", defaults.enabled),
            keep_stress: flag("SLOVO_KEEP_STRESS", defaults.keep_stress),
            participles: flag("SLOVO_PARTICIPLES", defaults.participles),
            prefer_dataset_forms: flag(
                "SLOVO_PREFER_DATASET_FORMS",
                defaults.prefer_dataset_forms,
            ),
        };

        Config { grammar }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
