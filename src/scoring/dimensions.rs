use serde::Serialize;

use super::normalize::clamp;

/// The eight fixed impact dimensions. Keys are invariant across all
/// results; dataset column names derive from them (`dim_climate`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Climate,
    Water,
    Gender,
    Social,
    Territory,
    Governance,
    Pollution,
    Innovation,
}

impl Dimension {
    pub const ALL: [Dimension; 8] = [
        Dimension::Climate,
        Dimension::Water,
        Dimension::Gender,
        Dimension::Social,
        Dimension::Territory,
        Dimension::Governance,
        Dimension::Pollution,
        Dimension::Innovation,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Climate => "climate",
            Dimension::Water => "water",
            Dimension::Gender => "gender",
            Dimension::Social => "social",
            Dimension::Territory => "territory",
            Dimension::Governance => "governance",
            Dimension::Pollution => "pollution",
            Dimension::Innovation => "innovation",
        }
    }

    /// Human-readable label for report output.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Climate => "Climate & Environment",
            Dimension::Water => "Water & Resources",
            Dimension::Gender => "Gender Equity",
            Dimension::Social => "Social Mobility",
            Dimension::Territory => "Territory & Local Wealth",
            Dimension::Governance => "Governance & Corruption",
            Dimension::Pollution => "Pollution & Health",
            Dimension::Innovation => "Innovation & Resilience",
        }
    }
}

/// One score per dimension, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionScores {
    pub climate: f64,
    pub water: f64,
    pub gender: f64,
    pub social: f64,
    pub territory: f64,
    pub governance: f64,
    pub pollution: f64,
    pub innovation: f64,
}

impl DimensionScores {
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

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.iter().map(move |&d| (d, self.get(d)))
    }
}

/// Sectors whose gender baseline is high under heuristic defaults.
pub const HIGH_GENDER_SECTORS: &[&str] = &[
    "Healthcare",
    "Education & Skills",
    "Social Infrastructure",
    "Financial Inclusion",
    "Microfinance",
    "Water & Sanitation",
];

/// Sectors whose gender baseline is low under heuristic defaults.
pub const LOW_GENDER_SECTORS: &[&str] = &[
    "Extractive Industry",
    "Digital Infrastructure",
    "Manufacturing (conventional)",
    "Clean Transportation",
];

/// Sectors with strong local value creation; also receive the social
/// dimension bonus.
pub const HIGH_SOCIAL_SECTORS: &[&str] = &[
    "Healthcare",
    "Education & Skills",
    "Microfinance",
    "Financial Inclusion",
    "Social Infrastructure",
    "Affordable Housing",
    "Water & Sanitation",
];

pub const LOW_SOCIAL_SECTORS: &[&str] = &[
    "Extractive Industry",
    "Manufacturing (conventional)",
    "Private Equity (diversified)",
];

pub const INNOVATION_SECTORS: &[&str] = &[
    "Renewable Energy",
    "Digital Infrastructure",
    "Clean Transportation",
    "Energy Efficiency",
    "Circular Economy",
    "Education & Skills",
    "Financial Inclusion",
    "Water & Sanitation",
];

/// Asset classes that imply more structured governance requirements.
pub const STRUCTURED_ASSET_CLASSES: &[&str] = &["Green Bond", "Project Finance"];

/// Heuristic gender default by sector-set membership (the standalone
/// engine variant; see `DefaultsMode`).
pub fn default_gender_factor(sector: &str) -> f64 {
    if HIGH_GENDER_SECTORS.contains(&sector) {
        0.72
    } else if LOW_GENDER_SECTORS.contains(&sector) {
        0.44
    } else {
        0.58
    }
}

/// Heuristic social default by sector-set membership.
pub fn default_social_factor(sector: &str) -> f64 {
    if HIGH_SOCIAL_SECTORS.contains(&sector) {
        0.82
    } else if LOW_SOCIAL_SECTORS.contains(&sector) {
        0.38
    } else {
        0.60
    }
}

/// Climate & Environment (0-100). Low GHG intensity drives the base;
/// taxonomy eligibility adds a fixed bonus, operating in a climate-
/// vulnerable region subtracts, scale adds a little.
pub fn score_climate(ghg: f64, taxonomy_eligible: bool, vuln: f64, size_f: f64) -> f64 {
    let mut base = (1.0 - ghg) * 70.0;
    if taxonomy_eligible {
        base += 20.0;
    }
    base -= vuln * 15.0;
    base += size_f * 5.0;
    clamp(base, 0.0, 100.0)
}

/// Water & Resources (0-100). Water-intensive sectors (GHG proxy above
/// 0.4) take the full penalty; below that the penalty grades with GHG.
pub fn score_water(ghg: f64, vuln: f64) -> f64 {
    let intensity_penalty = if ghg > 0.4 { 40.0 } else { ghg * 30.0 };
    clamp(70.0 - intensity_penalty - vuln * 20.0, 0.0, 100.0)
}

/// Gender Equity (0-100). Corruption actively penalises gender rights;
/// the raw maximum is ~75, rescaled so the dimension spans the full range.
pub fn score_gender(gender: f64, cpi: f64, hdi: f64) -> f64 {
    let cpi_n = cpi / 100.0;
    let raw = gender * 55.0 + cpi_n * 25.0 + hdi * 15.0 - (1.0 - cpi_n) * 20.0;
    clamp(raw * (100.0 / 75.0), 0.0, 100.0)
}

/// Social Mobility (0-100). The structural deprivation penalty compounds
/// on low-HDI, low-social-factor contexts, so extractive projects in
/// deprived regions score very low.
pub fn score_social(sector: &str, social_factor: f64, hdi: f64, size_f: f64) -> f64 {
    let bonus = if HIGH_SOCIAL_SECTORS.contains(&sector) {
        15.0
    } else {
        0.0
    };
    let raw = social_factor * 50.0 + hdi * 25.0 + size_f * 15.0 + bonus
        - (1.0 - hdi) * (1.0 - social_factor) * 25.0;
    clamp(raw, 0.0, 100.0)
}

/// Territory & Local Wealth (0-100). Projects in lower-HDI regions have
/// stronger territory leverage.
pub fn score_territory(hdi: f64, size_f: f64, eu_member: bool) -> f64 {
    let leverage = (1.0 - hdi) * 40.0;
    let governance_bonus = if eu_member { 20.0 } else { 10.0 };
    clamp(30.0 + leverage + governance_bonus + size_f * 10.0, 0.0, 100.0)
}

/// Governance & Corruption (0-100).
pub fn score_governance(cpi: f64, eu_member: bool, asset_class: &str) -> f64 {
    let mut base = (cpi / 100.0) * 65.0;
    if eu_member {
        base += 20.0;
    }
    if STRUCTURED_ASSET_CLASSES.contains(&asset_class) {
        base += 10.0;
    }
    clamp(base, 0.0, 100.0)
}

/// Pollution & Health (0-100).
pub fn score_pollution(ghg: f64, taxonomy_eligible: bool) -> f64 {
    let mut base = (1.0 - ghg) * 75.0;
    if taxonomy_eligible {
        base += 20.0;
    }
    clamp(base, 0.0, 100.0)
}

/// Innovation & Resilience (0-100).
pub fn score_innovation(sector: &str, size_f: f64, hdi: f64) -> f64 {
    let mut base = 40.0;
    if INNOVATION_SECTORS.contains(&sector) {
        base += 30.0;
    }
    clamp(base + size_f * 20.0 + hdi * 10.0, 0.0, 100.0)
}
