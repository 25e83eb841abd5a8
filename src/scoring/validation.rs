use super::config::EngineConfig;
use super::dimensions::Dimension;

/// Validate engine configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_engine_config(config: &EngineConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for &dim in &Dimension::ALL {
        let w = config.weights.get(dim);
        if !w.is_finite() || w < 0.0 {
            errors.push(format!(
                "weights.{}: must be a non-negative number, got {}",
                dim.key(),
                w
            ));
        }
    }

    let sum = config.weights.sum();
    if (sum - 1.0).abs() > 1e-9 {
        errors.push(format!("weights: must sum to 1.0, got {}", sum));
    }

    let t = &config.thresholds;
    if !(t.dark_green > t.green && t.green > t.amber) {
        errors.push(format!(
            "thresholds: must be strictly descending (dark_green > green > amber), got {} / {} / {}",
            t.dark_green, t.green, t.amber
        ));
    }
    if t.amber < 0.0 || t.dark_green > 100.0 {
        errors.push("thresholds: must lie within the 0-100 score range".to_string());
    }

    let veto = config.social_veto_threshold.0;
    if !(0.0..=100.0).contains(&veto) {
        errors.push(format!(
            "social_veto_threshold: must be within 0-100, got {}",
            veto
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::config::{BandThresholds, SocialVetoThreshold};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_engine_config(&EngineConfig::default()).is_ok());
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let mut config = EngineConfig::default();
        config.weights.gender = 0.50;
        let errors = validate_engine_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("sum to 1.0")));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut config = EngineConfig::default();
        config.weights.water = -0.08;
        config.weights.gender = 0.36; // keep the sum at 1.0
        let errors = validate_engine_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("weights.water")));
    }

    #[test]
    fn test_thresholds_must_descend() {
        let mut config = EngineConfig::default();
        config.thresholds = BandThresholds {
            dark_green: 50.0,
            green: 58.0,
            amber: 40.0,
        };
        let errors = validate_engine_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("strictly descending")));
    }

    #[test]
    fn test_veto_threshold_range() {
        let mut config = EngineConfig::default();
        config.social_veto_threshold = SocialVetoThreshold(130.0);
        let errors = validate_engine_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("social_veto_threshold")));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = EngineConfig::default();
        config.weights.gender = 0.50; // Error 1 (sum)
        config.social_veto_threshold = SocialVetoThreshold(-1.0); // Error 2
        let errors = validate_engine_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
