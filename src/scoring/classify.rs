//! Regulatory framework classifiers.
//!
//! Six dependent stages evaluated in a fixed order: Taxonomy -> PAI ->
//! SFDR -> TCFD -> MiFID/PRIIPs -> CSRD. SFDR consumes the Taxonomy and
//! PAI outputs, MiFID consumes the SFDR and TCFD outputs, so the order
//! cannot be shortcut.

use serde::Serialize;
use std::fmt;

use super::normalize::clamp;

/// TCFD risk level (physical and transition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// SFDR fund classification, in increasing sustainability commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SfdrArticle {
    #[serde(rename = "Article 6")]
    Article6,
    #[serde(rename = "Article 8")]
    Article8,
    #[serde(rename = "Article 9")]
    Article9,
}

impl fmt::Display for SfdrArticle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SfdrArticle::Article6 => write!(f, "Article 6"),
            SfdrArticle::Article8 => write!(f, "Article 8"),
            SfdrArticle::Article9 => write!(f, "Article 9"),
        }
    }
}

/// MiFID II investor profile derived from the suitability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InvestorProfile {
    #[serde(rename = "Sustainability-focused (MiFID Art. 9 preference)")]
    SustainabilityFocused,
    #[serde(rename = "ESG-integrated (MiFID Art. 8 preference)")]
    EsgIntegrated,
    #[serde(rename = "Conventional (Article 6 compatible)")]
    Conventional,
}

impl InvestorProfile {
    pub fn label(&self) -> &'static str {
        match self {
            InvestorProfile::SustainabilityFocused => {
                "Sustainability-focused (MiFID Art. 9 preference)"
            }
            InvestorProfile::EsgIntegrated => "ESG-integrated (MiFID Art. 8 preference)",
            InvestorProfile::Conventional => "Conventional (Article 6 compatible)",
        }
    }
}

impl fmt::Display for InvestorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// All six framework verdicts for one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub taxonomy_eligible: bool,
    pub taxonomy_aligned: bool,
    pub dnsh_pass: bool,
    /// Substantial-contribution proxy as a percentage (0-100, 1 decimal).
    pub sc_score: f64,
    pub sfdr_article: SfdrArticle,
    /// Aggregate PAI score (0-100, 1 decimal); higher = fewer adverse impacts.
    pub pai_score: f64,
    pub tcfd_physical: RiskLevel,
    pub tcfd_transition: RiskLevel,
    /// MiFID suitability (0-10, 1 decimal).
    pub mifid_suitability: f64,
    pub mifid_profile: InvestorProfile,
    pub csrd_in_scope: bool,
    pub impact_material: bool,
    pub financial_material: bool,
}

/// Raw factors the classifier pipeline consumes alongside the composite
/// score and the governance dimension.
#[derive(Debug, Clone)]
pub struct ClassifierInputs<'a> {
    pub sector: &'a str,
    pub taxonomy_eligible: bool,
    pub ghg: f64,
    pub climate_vuln: f64,
    pub gender: f64,
    pub cpi: f64,
    pub eu_member: bool,
    pub investment_eur: f64,
    pub size_factor: f64,
    pub composite: f64,
    pub governance_dim: f64,
}

/// Sectors facing significant regulatory/market disruption in transition.
const HIGH_TRANSITION_SECTORS: &[&str] = &[
    "Extractive Industry",
    "Manufacturing (conventional)",
    "Food & Nutrition",
    "Private Equity (diversified)",
];

const LOW_TRANSITION_SECTORS: &[&str] = &[
    "Renewable Energy",
    "Energy Efficiency",
    "Clean Transportation",
    "Circular Economy",
    "Biodiversity / Nature",
];

/// Sectors exempt from the CSRD in-scope proxy.
const CSRD_EXEMPT_SECTORS: &[&str] = &["Microfinance", "SME Finance", "Financial Inclusion"];

const IMPACT_MATERIAL_SECTORS: &[&str] = &[
    "Renewable Energy",
    "Extractive Industry",
    "Manufacturing (conventional)",
    "Food & Nutrition",
    "Clean Transportation",
    "Green Building / Real Estate",
];

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// EU Taxonomy verdict: (eligible, aligned, dnsh_pass, sc_score 0-100).
///
/// An ineligible sector short-circuits to all-false/zero. Otherwise the
/// substantial-contribution proxy blends GHG intensity and the composite
/// score; DNSH fails if GHG is too high or the region too vulnerable.
pub fn taxonomy(eligible: bool, ghg: f64, vuln: f64, composite: f64) -> (bool, bool, bool, f64) {
    if !eligible {
        return (false, false, false, 0.0);
    }
    let sc = clamp((1.0 - ghg) * 0.6 + (composite / 100.0) * 0.4, 0.0, 1.0);
    let dnsh = ghg < 0.50 && vuln < 0.70;
    let aligned = dnsh && sc > 0.40;
    (true, aligned, dnsh, round1(sc * 100.0))
}

/// Aggregate PAI score (0-100) over ten sub-indicator proxies, each a
/// fixed linear transform of one driver. Higher = fewer adverse impacts.
pub fn pai_score(ghg: f64, gender: f64, cpi: f64, vuln: f64, governance_dim: f64) -> f64 {
    let scores = [
        (1.0 - ghg) * 100.0,         // PAI 1: GHG emissions
        (1.0 - ghg * 0.8) * 100.0,   // PAI 2: carbon footprint
        (1.0 - vuln * 0.5) * 100.0,  // PAI 7: biodiversity
        (1.0 - ghg * 0.4) * 100.0,   // PAI 8: water
        (1.0 - ghg * 0.6) * 100.0,   // PAI 9: hazardous waste
        gender * 100.0,              // PAI 12: gender pay gap
        gender * 90.0,               // PAI 13: board diversity
        (cpi / 100.0) * 100.0,       // PAI 16: corruption
        (cpi / 100.0) * 85.0,        // PAI 17: tax haven
        governance_dim,
    ];
    round1(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// SFDR article. Article 9 is the strict superset condition and must be
/// checked first: taxonomy alignment plus high composite and PAI bars.
pub fn sfdr(composite: f64, taxonomy_aligned: bool, pai: f64) -> SfdrArticle {
    if taxonomy_aligned && composite >= 72.0 && pai >= 70.0 {
        SfdrArticle::Article9
    } else if composite >= 50.0 && pai >= 50.0 {
        SfdrArticle::Article8
    } else {
        SfdrArticle::Article6
    }
}

/// TCFD physical and transition risk levels.
pub fn tcfd(vuln: f64, sector: &str) -> (RiskLevel, RiskLevel) {
    let physical = if vuln > 0.65 {
        RiskLevel::High
    } else if vuln > 0.40 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };
    let transition = if HIGH_TRANSITION_SECTORS.contains(&sector) {
        RiskLevel::High
    } else if LOW_TRANSITION_SECTORS.contains(&sector) {
        RiskLevel::Low
    } else {
        RiskLevel::Medium
    };
    (physical, transition)
}

/// PRIIPs / MiFID II sustainability suitability (0-10) and profile label.
pub fn mifid(
    composite: f64,
    article: SfdrArticle,
    physical: RiskLevel,
    transition: RiskLevel,
) -> (f64, InvestorProfile) {
    let mut base = composite / 10.0;
    match article {
        SfdrArticle::Article9 => base = (base + 1.5).min(10.0),
        SfdrArticle::Article8 => base = (base + 0.5).min(10.0),
        SfdrArticle::Article6 => {}
    }
    if physical == RiskLevel::High || transition == RiskLevel::High {
        base = (base - 1.0).max(0.0);
    }
    let base = round1(base);
    let profile = if base >= 7.5 {
        InvestorProfile::SustainabilityFocused
    } else if base >= 5.0 {
        InvestorProfile::EsgIntegrated
    } else {
        InvestorProfile::Conventional
    };
    (base, profile)
}

/// CSRD / ESRS double-materiality proxy:
/// (in_scope, impact_material, financial_material).
pub fn csrd(size_factor: f64, sector: &str, eu_member: bool, eur: f64) -> (bool, bool, bool) {
    let in_scope = eur > 5_000_000.0 && eu_member && !CSRD_EXEMPT_SECTORS.contains(&sector);
    let impact_material = IMPACT_MATERIAL_SECTORS.contains(&sector);
    let financial_material = eu_member && size_factor > 0.6;
    (in_scope, impact_material, financial_material)
}

/// Run the six stages in dependency order.
pub fn classify(inputs: &ClassifierInputs<'_>) -> Classification {
    let (eligible, aligned, dnsh_pass, sc_score) = taxonomy(
        inputs.taxonomy_eligible,
        inputs.ghg,
        inputs.climate_vuln,
        inputs.composite,
    );
    let pai = pai_score(
        inputs.ghg,
        inputs.gender,
        inputs.cpi,
        inputs.climate_vuln,
        inputs.governance_dim,
    );
    let article = sfdr(inputs.composite, aligned, pai);
    let (physical, transition) = tcfd(inputs.climate_vuln, inputs.sector);
    let (suitability, profile) = mifid(inputs.composite, article, physical, transition);
    let (in_scope, impact_material, financial_material) = csrd(
        inputs.size_factor,
        inputs.sector,
        inputs.eu_member,
        inputs.investment_eur,
    );

    Classification {
        taxonomy_eligible: eligible,
        taxonomy_aligned: aligned,
        dnsh_pass,
        sc_score,
        sfdr_article: article,
        pai_score: pai,
        tcfd_physical: physical,
        tcfd_transition: transition,
        mifid_suitability: suitability,
        mifid_profile: profile,
        csrd_in_scope: in_scope,
        impact_material,
        financial_material,
    }
}
