mod data;

use std::collections::HashMap;

/// Key under which the fallback country profile is stored.
pub const FALLBACK_COUNTRY: &str = "Other / Unknown";

/// Key under which the fallback sector profile is stored.
pub const FALLBACK_SECTOR: &str = "Other";

/// Country context: public-index figures used as scoring drivers.
///
/// `cpi` is the Transparency International corruption perception score
/// (0-100, higher = cleaner), `climate_vuln` the ND-GAIN-style
/// vulnerability index (0-1), `hdi` the UNDP human development index (0-1).
#[derive(Debug, Clone, PartialEq)]
pub struct CountryProfile {
    pub region: String,
    pub cpi: f64,
    pub climate_vuln: f64,
    pub hdi: f64,
    pub eu_member: bool,
}

/// Sector context: taxonomy eligibility plus baseline intensity factors.
///
/// `gender_baseline` and `social_baseline` (0-1) are the defaults used
/// when the analyst supplies no override; see `DefaultsMode`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorProfile {
    pub taxonomy_eligible: bool,
    pub ghg_intensity: f64,
    pub gender_baseline: f64,
    pub social_baseline: f64,
}

/// Immutable country/sector lookup tables.
///
/// Built once at startup and injected into the engine. Lookups never
/// fail: an unrecognized name resolves to the designated fallback
/// profile, so scoring always completes for any input string.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    countries: HashMap<String, CountryProfile>,
    sectors: HashMap<String, SectorProfile>,
}

impl ReferenceTables {
    /// Build tables from explicit entries. Panics if either fallback
    /// entry is missing, since the lookup contract depends on it.
    pub fn new(
        countries: HashMap<String, CountryProfile>,
        sectors: HashMap<String, SectorProfile>,
    ) -> Self {
        assert!(
            countries.contains_key(FALLBACK_COUNTRY),
            "country table must contain the '{}' fallback entry",
            FALLBACK_COUNTRY
        );
        assert!(
            sectors.contains_key(FALLBACK_SECTOR),
            "sector table must contain the '{}' fallback entry",
            FALLBACK_SECTOR
        );
        Self { countries, sectors }
    }

    /// The built-in tables: 50 countries + fallback, 20 sectors + fallback.
    pub fn builtin() -> Self {
        let countries = data::COUNTRY_DATA
            .iter()
            .map(|&(name, region, cpi, vuln, hdi, eu)| {
                (
                    name.to_string(),
                    CountryProfile {
                        region: region.to_string(),
                        cpi,
                        climate_vuln: vuln,
                        hdi,
                        eu_member: eu,
                    },
                )
            })
            .collect();
        let sectors = data::SECTOR_DATA
            .iter()
            .map(|&(name, eligible, ghg, gender, social)| {
                (
                    name.to_string(),
                    SectorProfile {
                        taxonomy_eligible: eligible,
                        ghg_intensity: ghg,
                        gender_baseline: gender,
                        social_baseline: social,
                    },
                )
            })
            .collect();
        Self::new(countries, sectors)
    }

    /// Resolve a country by exact name, falling back to "Other / Unknown".
    pub fn country(&self, name: &str) -> &CountryProfile {
        self.countries
            .get(name)
            .unwrap_or_else(|| &self.countries[FALLBACK_COUNTRY])
    }

    /// Resolve a sector by exact name, falling back to "Other".
    pub fn sector(&self, name: &str) -> &SectorProfile {
        self.sectors
            .get(name)
            .unwrap_or_else(|| &self.sectors[FALLBACK_SECTOR])
    }

    /// Country names in table order is not guaranteed; callers that need
    /// a stable order should sort. Excludes nothing: fallback included.
    pub fn country_names(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    pub fn sector_names(&self) -> impl Iterator<Item = &str> {
        self.sectors.keys().map(String::as_str)
    }
}
