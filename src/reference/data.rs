//! Built-in reference tables.
//!
//! Country figures are calibrated to public indices (Transparency
//! International CPI, ND-GAIN climate vulnerability, UNDP HDI).
//! Sector rows carry EU Taxonomy eligibility, a GHG intensity baseline
//! and gender/social baselines.

/// (name, region, cpi 0-100, climate_vuln 0-1, hdi 0-1, eu_member)
pub(super) const COUNTRY_DATA: &[(&str, &str, f64, f64, f64, bool)] = &[
    ("France", "Western Europe", 71.0, 0.28, 0.903, true),
    ("Germany", "Western Europe", 78.0, 0.25, 0.942, true),
    ("Netherlands", "Western Europe", 79.0, 0.30, 0.941, true),
    ("Spain", "Southern Europe", 60.0, 0.38, 0.905, true),
    ("Italy", "Southern Europe", 56.0, 0.35, 0.895, true),
    ("Poland", "Eastern Europe", 54.0, 0.32, 0.880, true),
    ("Romania", "Eastern Europe", 46.0, 0.40, 0.821, true),
    ("Portugal", "Southern Europe", 62.0, 0.36, 0.866, true),
    ("Sweden", "Northern Europe", 85.0, 0.20, 0.952, true),
    ("Denmark", "Northern Europe", 90.0, 0.18, 0.948, true),
    ("Belgium", "Western Europe", 73.0, 0.27, 0.937, true),
    ("Austria", "Western Europe", 74.0, 0.22, 0.916, true),
    ("Czech Republic", "Eastern Europe", 57.0, 0.31, 0.900, true),
    ("Hungary", "Eastern Europe", 42.0, 0.42, 0.854, true),
    ("Greece", "Southern Europe", 49.0, 0.45, 0.887, true),
    ("United Kingdom", "Western Europe", 71.0, 0.26, 0.929, false),
    ("Switzerland", "Western Europe", 82.0, 0.19, 0.962, false),
    ("Norway", "Northern Europe", 84.0, 0.17, 0.966, false),
    ("United States", "North America", 69.0, 0.33, 0.926, false),
    ("Canada", "North America", 76.0, 0.28, 0.936, false),
    ("Brazil", "Latin America", 36.0, 0.55, 0.760, false),
    ("Mexico", "Latin America", 31.0, 0.60, 0.758, false),
    ("Colombia", "Latin America", 39.0, 0.58, 0.752, false),
    ("Morocco", "MENA", 38.0, 0.62, 0.683, false),
    ("Tunisia", "MENA", 40.0, 0.65, 0.731, false),
    ("Egypt", "MENA", 35.0, 0.68, 0.728, false),
    ("Senegal", "Sub-Saharan Africa", 43.0, 0.72, 0.511, false),
    ("Kenya", "Sub-Saharan Africa", 36.0, 0.70, 0.601, false),
    ("Nigeria", "Sub-Saharan Africa", 25.0, 0.75, 0.535, false),
    ("South Africa", "Sub-Saharan Africa", 41.0, 0.65, 0.713, false),
    ("India", "South Asia", 39.0, 0.58, 0.633, false),
    ("Bangladesh", "South Asia", 24.0, 0.78, 0.661, false),
    ("Vietnam", "Southeast Asia", 41.0, 0.62, 0.703, false),
    ("Indonesia", "Southeast Asia", 34.0, 0.66, 0.705, false),
    ("Philippines", "Southeast Asia", 33.0, 0.70, 0.699, false),
    ("Japan", "East Asia", 73.0, 0.35, 0.920, false),
    ("South Korea", "East Asia", 63.0, 0.30, 0.929, false),
    ("Australia", "Oceania", 75.0, 0.32, 0.951, false),
    ("New Zealand", "Oceania", 85.0, 0.25, 0.937, false),
    ("Chile", "Latin America", 66.0, 0.50, 0.860, false),
    ("Argentina", "Latin America", 37.0, 0.52, 0.842, false),
    ("Turkey", "MENA", 34.0, 0.50, 0.838, false),
    ("Ukraine", "Eastern Europe", 33.0, 0.45, 0.773, false),
    ("Kazakhstan", "Central Asia", 36.0, 0.48, 0.811, false),
    ("Ghana", "Sub-Saharan Africa", 43.0, 0.68, 0.632, false),
    ("Ethiopia", "Sub-Saharan Africa", 37.0, 0.80, 0.492, false),
    ("Pakistan", "South Asia", 29.0, 0.72, 0.544, false),
    ("Sri Lanka", "South Asia", 34.0, 0.60, 0.782, false),
    ("Peru", "Latin America", 40.0, 0.55, 0.762, false),
    ("Bolivia", "Latin America", 31.0, 0.58, 0.698, false),
    ("Other / Unknown", "Other", 45.0, 0.50, 0.700, false),
];

/// (name, taxonomy_eligible, ghg_intensity, gender_baseline, social_baseline)
pub(super) const SECTOR_DATA: &[(&str, bool, f64, f64, f64)] = &[
    ("Renewable Energy", true, 0.05, 0.55, 0.65),
    ("Energy Efficiency", true, 0.10, 0.52, 0.68),
    ("Sustainable Agriculture", true, 0.35, 0.60, 0.80),
    ("Water & Sanitation", true, 0.08, 0.62, 0.85),
    ("Clean Transportation", true, 0.15, 0.48, 0.70),
    ("Green Building / Real Estate", true, 0.20, 0.58, 0.62),
    ("Circular Economy", true, 0.18, 0.55, 0.72),
    ("Biodiversity / Nature", true, 0.05, 0.63, 0.75),
    ("Healthcare", false, 0.22, 0.72, 0.90),
    ("Education & Skills", false, 0.12, 0.75, 0.95),
    ("Financial Inclusion", false, 0.10, 0.65, 0.88),
    ("Digital Infrastructure", false, 0.25, 0.42, 0.60),
    ("Affordable Housing", false, 0.28, 0.60, 0.88),
    ("Food & Nutrition", false, 0.42, 0.62, 0.78),
    ("Manufacturing (conventional)", false, 0.65, 0.50, 0.55),
    ("Extractive Industry", false, 0.85, 0.38, 0.42),
    ("Private Equity (diversified)", false, 0.40, 0.52, 0.60),
    ("SME Finance", false, 0.30, 0.60, 0.72),
    ("Microfinance", false, 0.15, 0.68, 0.88),
    ("Social Infrastructure", true, 0.10, 0.70, 0.92),
    ("Other", false, 0.40, 0.58, 0.60),
];
