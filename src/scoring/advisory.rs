//! Warning and strength annotations.
//!
//! A fixed-order rule list over the final dimension scores and the
//! classification result. Order is significant for reproducible output:
//! social-veto warnings always come first (gender, then social).

use super::classify::{Classification, RiskLevel, SfdrArticle};
use super::dimensions::DimensionScores;

/// Human-readable annotations for one scored project.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Advisory {
    pub warnings: Vec<String>,
    pub strengths: Vec<String>,
}

pub fn build_advisory(
    dims: &DimensionScores,
    veto_threshold: f64,
    ghg: f64,
    eu_member: bool,
    classification: &Classification,
) -> Advisory {
    let mut warnings = Vec::new();
    let mut strengths = Vec::new();

    if dims.gender < veto_threshold {
        warnings.push(format!(
            "SOCIAL VETO TRIGGERED: Gender equity score ({:.0}/100) is below the {:.0}-point \
             floor. Band capped at Amber. Fundamental gender equity failure is disqualifying \
             under IDRIS methodology.",
            dims.gender, veto_threshold
        ));
    }
    if dims.social < veto_threshold {
        warnings.push(format!(
            "SOCIAL VETO TRIGGERED: Social mobility score ({:.0}/100) is below the {:.0}-point \
             floor. Band capped at Amber. Insufficient local value creation and employment \
             opportunity is disqualifying.",
            dims.social, veto_threshold
        ));
    }

    if dims.governance < 40.0 {
        warnings.push(
            "Governance score below threshold - high corruption risk in country of operation."
                .to_string(),
        );
    }
    if dims.climate < 45.0 {
        warnings.push(
            "Climate score below sector average - review GHG intensity and taxonomy eligibility."
                .to_string(),
        );
    }
    if dims.gender < 40.0 {
        warnings
            .push("Gender equity score is low - PAI 12 (gender pay gap) likely adverse.".to_string());
    }
    if dims.pollution < 40.0 {
        warnings.push(
            "Pollution score indicates significant environmental harm - DNSH risk.".to_string(),
        );
    }
    if classification.tcfd_physical == RiskLevel::High {
        warnings.push(
            "TCFD: High physical climate risk - asset may be stranded under 2C/1.5C scenarios."
                .to_string(),
        );
    }
    if classification.tcfd_transition == RiskLevel::High {
        warnings.push(
            "TCFD: High transition risk - sector faces significant regulatory/market disruption."
                .to_string(),
        );
    }
    if !eu_member {
        warnings.push(
            "Non-EU jurisdiction - additional due diligence required for SFDR/Taxonomy reporting."
                .to_string(),
        );
    }
    if ghg > 0.6 {
        warnings.push(
            "GHG intensity is high - likely to fail DNSH climate mitigation criterion.".to_string(),
        );
    }

    if classification.taxonomy_aligned {
        strengths
            .push("EU Taxonomy aligned - eligible for Article 9 fund eligibility.".to_string());
    }
    match classification.sfdr_article {
        SfdrArticle::Article9 => strengths
            .push("Qualifies as Article 9 sustainable investment under SFDR.".to_string()),
        SfdrArticle::Article8 => strengths.push(
            "Promotes E/S characteristics - classifiable as Article 8 under SFDR.".to_string(),
        ),
        SfdrArticle::Article6 => {}
    }
    if dims.climate >= 75.0 {
        strengths.push(
            "Strong climate contribution - significant GHG avoidance or clean energy generation."
                .to_string(),
        );
    }
    if dims.social >= 75.0 {
        strengths.push(
            "High social impact - supports employment, skills and local economic development."
                .to_string(),
        );
    }
    if dims.governance >= 75.0 {
        strengths.push(
            "Strong governance framework - low corruption exposure, robust transparency."
                .to_string(),
        );
    }

    Advisory {
        warnings,
        strengths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::classify::InvestorProfile;

    fn dims(gender: f64, social: f64, governance: f64, climate: f64, pollution: f64) -> DimensionScores {
        DimensionScores {
            climate,
            water: 60.0,
            gender,
            social,
            territory: 60.0,
            governance,
            pollution,
            innovation: 60.0,
        }
    }

    fn classification(article: SfdrArticle, aligned: bool, physical: RiskLevel) -> Classification {
        Classification {
            taxonomy_eligible: aligned,
            taxonomy_aligned: aligned,
            dnsh_pass: aligned,
            sc_score: if aligned { 80.0 } else { 0.0 },
            sfdr_article: article,
            pai_score: 70.0,
            tcfd_physical: physical,
            tcfd_transition: RiskLevel::Medium,
            mifid_suitability: 7.0,
            mifid_profile: InvestorProfile::EsgIntegrated,
            csrd_in_scope: false,
            impact_material: false,
            financial_material: false,
        }
    }

    #[test]
    fn test_veto_warnings_come_first_gender_then_social() {
        let d = dims(20.0, 25.0, 30.0, 40.0, 30.0);
        let c = classification(SfdrArticle::Article6, false, RiskLevel::High);
        let advisory = build_advisory(&d, 30.0, 0.7, false, &c);
        assert!(advisory.warnings[0].contains("Gender equity score (20/100)"));
        assert!(advisory.warnings[1].contains("Social mobility score (25/100)"));
        // Plenty of follow-on warnings from the low dimensions.
        assert!(advisory.warnings.len() >= 6);
    }

    #[test]
    fn test_no_warnings_for_clean_project() {
        let d = dims(80.0, 80.0, 80.0, 80.0, 80.0);
        let c = classification(SfdrArticle::Article9, true, RiskLevel::Low);
        let advisory = build_advisory(&d, 30.0, 0.05, true, &c);
        assert!(advisory.warnings.is_empty());
        assert!(!advisory.strengths.is_empty());
    }

    #[test]
    fn test_strength_order_is_stable() {
        let d = dims(80.0, 80.0, 80.0, 80.0, 80.0);
        let c = classification(SfdrArticle::Article9, true, RiskLevel::Low);
        let advisory = build_advisory(&d, 30.0, 0.05, true, &c);
        assert!(advisory.strengths[0].contains("EU Taxonomy aligned"));
        assert!(advisory.strengths[1].contains("Article 9"));
        assert!(advisory.strengths[2].contains("climate contribution"));
    }

    #[test]
    fn test_article8_strength_text() {
        let d = dims(60.0, 60.0, 60.0, 60.0, 60.0);
        let c = classification(SfdrArticle::Article8, false, RiskLevel::Low);
        let advisory = build_advisory(&d, 30.0, 0.2, true, &c);
        assert!(advisory
            .strengths
            .iter()
            .any(|s| s.contains("Article 8")));
    }

    #[test]
    fn test_non_eu_and_high_ghg_warnings() {
        let d = dims(60.0, 60.0, 60.0, 60.0, 60.0);
        let c = classification(SfdrArticle::Article6, false, RiskLevel::Low);
        let advisory = build_advisory(&d, 30.0, 0.75, false, &c);
        assert!(advisory.warnings.iter().any(|w| w.contains("Non-EU")));
        assert!(advisory
            .warnings
            .iter()
            .any(|w| w.contains("GHG intensity is high")));
    }
}
