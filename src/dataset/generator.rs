//! Synthetic investment dataset generator.
//!
//! Samples realistic project records over the reference tables and runs
//! each through the scoring formulas with Gaussian perturbation of the
//! baseline factors. Randomness lives only here; the scoring engine
//! itself stays deterministic. Output is reproducible per seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::f64::consts::TAU;

use crate::reference::{ReferenceTables, FALLBACK_COUNTRY, FALLBACK_SECTOR};
use crate::scoring::classify::{classify, ClassifierInputs, InvestorProfile, RiskLevel, SfdrArticle};
use crate::scoring::config::EngineConfig;
use crate::scoring::engine::{
    apply_social_veto, band_for, composite_score, compute_dimensions, Band, FactorSet,
};
use crate::scoring::normalize::{clamp, investment_size_factor, SIZE_CEILING_EUR, SIZE_FLOOR_EUR};

pub const ASSET_CLASSES: [&str; 6] = [
    "Private Equity / Venture",
    "Project Finance",
    "Real Estate",
    "SME Debt",
    "Green Bond",
    "Microfinance / Social Bond",
];

#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    pub count: usize,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 2_000,
            seed: 42,
        }
    }
}

/// One scored project row. Field order is the tabular contract consumed
/// by downstream visualization tooling; the CSV header derives from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRecord {
    // Metadata
    pub country: String,
    pub region: String,
    pub eu_member: bool,
    pub sector: String,
    pub asset_class: String,
    pub investment_eur: f64,
    pub size_factor: f64,

    // Country context
    pub cpi_score: f64,
    pub climate_vuln: f64,
    pub hdi: f64,

    // Sector context (perturbed)
    pub ghg_intensity: f64,
    pub gender_factor: f64,
    pub social_factor: f64,

    // Impact dimensions (0-100)
    pub dim_climate: f64,
    pub dim_water: f64,
    pub dim_gender: f64,
    pub dim_social: f64,
    pub dim_territory: f64,
    pub dim_governance: f64,
    pub dim_pollution: f64,
    pub dim_innovation: f64,

    // Composite
    pub idris_score: f64,
    pub idris_band: Band,

    // EU Taxonomy
    pub taxonomy_eligible: bool,
    pub taxonomy_aligned: bool,
    pub dnsh_pass: bool,
    pub sc_score: f64,

    // SFDR
    pub sfdr_article: SfdrArticle,
    pub pai_score: f64,

    // TCFD
    pub tcfd_physical: RiskLevel,
    pub tcfd_transition: RiskLevel,

    // MiFID II / PRIIPs
    pub mifid_suitability: f64,
    pub mifid_profile: InvestorProfile,

    // CSRD / ESRS
    pub csrd_in_scope: bool,
    pub impact_material: bool,
    pub financial_material: bool,
}

/// Standard normal draw via the Box-Muller transform over the uniform
/// RNG (no distribution crate in the stack).
fn gaussian(rng: &mut SmallRng) -> f64 {
    let u1: f64 = rng.random::<f64>().max(f64::MIN_POSITIVE);
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

fn noisy(rng: &mut SmallRng, base: f64, sigma: f64) -> f64 {
    clamp(base + gaussian(rng) * sigma, 0.0, 1.0)
}

fn noisy100(rng: &mut SmallRng, base: f64, sigma: f64) -> f64 {
    clamp(base + gaussian(rng) * sigma, 0.0, 100.0)
}

fn round(x: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (x * factor).round() / factor
}

/// Generate `config.count` scored records. Deterministic per seed:
/// sampling iterates the reference tables in sorted name order, so the
/// same tables and seed always produce byte-identical rows.
pub fn generate(
    tables: &ReferenceTables,
    engine_config: &EngineConfig,
    config: &GeneratorConfig,
) -> Vec<ProjectRecord> {
    let mut rng = SmallRng::seed_from_u64(config.seed);

    let mut countries: Vec<&str> = tables
        .country_names()
        .filter(|&n| n != FALLBACK_COUNTRY)
        .collect();
    countries.sort_unstable();
    let mut sectors: Vec<&str> = tables
        .sector_names()
        .filter(|&n| n != FALLBACK_SECTOR)
        .collect();
    sectors.sort_unstable();

    let mut rows = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        let country_name = countries[rng.random_range(0..countries.len())];
        let sector_name = sectors[rng.random_range(0..sectors.len())];
        let asset_class = ASSET_CLASSES[rng.random_range(0..ASSET_CLASSES.len())];

        let country = tables.country(country_name);
        let sector = tables.sector(sector_name);

        // Ticket size: log-uniform across the full floor-to-ceiling span.
        let investment_eur = rng
            .random_range(SIZE_FLOOR_EUR.ln()..SIZE_CEILING_EUR.ln())
            .exp();
        let size_factor = investment_size_factor(investment_eur);

        // Perturb baselines: project-level variation around the
        // sector/country figures.
        let ghg = noisy(&mut rng, sector.ghg_intensity, 0.08);
        let gender = noisy(&mut rng, sector.gender_baseline, 0.07);
        let social = noisy(&mut rng, sector.social_baseline, 0.07);
        let vuln = noisy(&mut rng, country.climate_vuln, 0.05);

        let factors = FactorSet {
            sector: sector_name.to_string(),
            asset_class: asset_class.to_string(),
            ghg,
            gender,
            social,
            cpi: country.cpi,
            hdi: country.hdi,
            climate_vuln: vuln,
            eu_member: country.eu_member,
            taxonomy_eligible: sector.taxonomy_eligible,
            size_factor,
            governance_override: None,
        };

        let mut dims = compute_dimensions(&factors);
        dims.climate = noisy100(&mut rng, dims.climate, 3.0);
        dims.water = noisy100(&mut rng, dims.water, 3.0);
        dims.gender = noisy100(&mut rng, dims.gender, 3.0);
        dims.social = noisy100(&mut rng, dims.social, 3.0);
        dims.territory = noisy100(&mut rng, dims.territory, 3.0);
        dims.governance = noisy100(&mut rng, dims.governance, 3.0);
        dims.pollution = noisy100(&mut rng, dims.pollution, 3.0);
        dims.innovation = noisy100(&mut rng, dims.innovation, 3.0);

        let idris = composite_score(&dims, &engine_config.weights);
        let (band, _veto) = apply_social_veto(
            band_for(idris, &engine_config.thresholds),
            &dims,
            engine_config.social_veto_threshold.0,
        );

        let c = classify(&ClassifierInputs {
            sector: sector_name,
            taxonomy_eligible: sector.taxonomy_eligible,
            ghg,
            climate_vuln: vuln,
            gender,
            cpi: country.cpi,
            eu_member: country.eu_member,
            investment_eur,
            size_factor,
            composite: idris,
            governance_dim: dims.governance,
        });

        rows.push(ProjectRecord {
            country: country_name.to_string(),
            region: country.region.clone(),
            eu_member: country.eu_member,
            sector: sector_name.to_string(),
            asset_class: asset_class.to_string(),
            investment_eur: round(investment_eur, 2),
            size_factor: round(size_factor, 4),
            cpi_score: country.cpi,
            climate_vuln: round(vuln, 3),
            hdi: round(country.hdi, 3),
            ghg_intensity: round(ghg, 3),
            gender_factor: round(gender, 3),
            social_factor: round(social, 3),
            dim_climate: round(dims.climate, 1),
            dim_water: round(dims.water, 1),
            dim_gender: round(dims.gender, 1),
            dim_social: round(dims.social, 1),
            dim_territory: round(dims.territory, 1),
            dim_governance: round(dims.governance, 1),
            dim_pollution: round(dims.pollution, 1),
            dim_innovation: round(dims.innovation, 1),
            idris_score: idris,
            idris_band: band,
            taxonomy_eligible: c.taxonomy_eligible,
            taxonomy_aligned: c.taxonomy_aligned,
            dnsh_pass: c.dnsh_pass,
            sc_score: c.sc_score,
            sfdr_article: c.sfdr_article,
            pai_score: c.pai_score,
            tcfd_physical: c.tcfd_physical,
            tcfd_transition: c.tcfd_transition,
            mifid_suitability: c.mifid_suitability,
            mifid_profile: c.mifid_profile,
            csrd_in_scope: c.csrd_in_scope,
            impact_material: c.impact_material,
            financial_material: c.financial_material,
        });
    }
    rows
}
