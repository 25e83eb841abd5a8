use serde::{Deserialize, Serialize};

use super::dimensions::Dimension;

/// Per-dimension composite weights. Must sum to exactly 1.0 (within
/// 1e-9); enforced once at startup by `validate_engine_config`, not per
/// scoring call.
///
/// Impact philosophy behind the defaults: gender + social + governance
/// carry 50% of the total. Social determinants are upstream of the
/// other outcomes, so a project with strong climate metrics but weak
/// gender equity or social mobility does not score green here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Weights {
    pub gender: f64,
    pub social: f64,
    pub governance: f64,
    pub climate: f64,
    pub pollution: f64,
    pub water: f64,
    pub territory: f64,
    pub innovation: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            gender: 0.20,
            social: 0.15,
            governance: 0.15,
            climate: 0.18,
            pollution: 0.10,
            water: 0.08,
            territory: 0.08,
            innovation: 0.06,
        }
    }
}

impl Weights {
    pub fn get(&self, dim: Dimension) -> f64 {
        match dim {
            Dimension::Climate => self.climate,
            Dimension::Water => self.water,
            Dimension::Gender => self.gender,
            Dimension::Social => self.social,
            Dimension::Territory => self.territory,
            Dimension::Governance => self.governance,
            Dimension::Pollution => self.pollution,
            Dimension::Innovation => self.innovation,
        }
    }

    pub fn sum(&self) -> f64 {
        Dimension::ALL.iter().map(|&d| self.get(d)).sum()
    }
}

/// Qualitative band cutoffs over the composite score. A score at or
/// above `dark_green` bands Dark Green, and so on down; below `amber`
/// is Red.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BandThresholds {
    pub dark_green: f64,
    pub green: f64,
    pub amber: f64,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            dark_green: 75.0,
            green: 58.0,
            amber: 40.0,
        }
    }
}

/// How gender/social factors are derived when the analyst supplies no
/// override. Both source strategies are legitimate; neither is silently
/// reconciled into the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DefaultsMode {
    /// Sector-set membership heuristics (the standalone engine variant).
    #[default]
    Heuristic,
    /// Direct baseline lookup from the sector table (the bulk-generator
    /// variant).
    Baseline,
}

/// Newtype so the veto floor keeps its own default (30.0) under
/// `#[serde(default)]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocialVetoThreshold(pub f64);

impl Default for SocialVetoThreshold {
    fn default() -> Self {
        Self(30.0)
    }
}

/// Engine tuning: weights, band cutoffs, veto floor, defaults strategy.
/// Validated once at startup; the scoring path assumes a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields, default)]
pub struct EngineConfig {
    pub weights: Weights,
    pub thresholds: BandThresholds,
    pub social_veto_threshold: SocialVetoThreshold,
    pub defaults_mode: DefaultsMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!((Weights::default().sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_thresholds() {
        let t = BandThresholds::default();
        assert_eq!(t.dark_green, 75.0);
        assert_eq!(t.green, 58.0);
        assert_eq!(t.amber, 40.0);
    }

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.social_veto_threshold.0, 30.0);
        assert_eq!(config.defaults_mode, DefaultsMode::Heuristic);
    }

    #[test]
    fn test_partial_yaml_overrides() {
        let yaml = r#"
thresholds:
  dark_green: 80
  green: 60
  amber: 45
defaults_mode: baseline
"#;
        let config: EngineConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.thresholds.dark_green, 80.0);
        assert_eq!(config.defaults_mode, DefaultsMode::Baseline);
        // Untouched sections keep their defaults.
        assert_eq!(config.weights, Weights::default());
        assert_eq!(config.social_veto_threshold.0, 30.0);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "band_colors: true\n";
        assert!(serde_saphyr::from_str::<EngineConfig>(yaml).is_err());
    }
}
