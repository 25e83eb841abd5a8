use serde::{Deserialize, Serialize};

use crate::scoring::config::EngineConfig;

/// Top-level config file schema (`~/.config/idris/config.yaml`).
///
/// Every section is optional; an absent file means built-in defaults.
///
/// Example YAML:
/// ```yaml
/// engine:
///   defaults_mode: baseline
///   thresholds:
///     dark_green: 80
///     green: 60
///     amber: 45
/// generate:
///   count: 5000
///   seed: 7
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    pub engine: EngineConfig,
    pub generate: GenerateDefaults,
}

/// Defaults for the `generate` subcommand.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct GenerateDefaults {
    pub count: usize,
    pub seed: u64,
}

impl Default for GenerateDefaults {
    fn default() -> Self {
        Self {
            count: 2_000,
            seed: 42,
        }
    }
}
