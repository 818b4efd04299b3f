//! Derived statistics models.

use serde::Serialize;

use super::Country;

/// Win statistics for one country in one season.
///
/// All three fields are absent together when the country has no wins in the
/// season; zero wins and "no data" are the same observable state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SeasonStats {
    /// Number of gold medals won
    pub win_count: Option<u32>,

    /// Share of all gold medals awarded in this season (0.0 to 1.0)
    pub percentage_of_season_events: Option<f64>,

    /// Earliest year with a win
    pub year_of_first_win: Option<i32>,
}

impl SeasonStats {
    /// Stats for a season without wins.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.win_count.is_none()
    }
}

/// Gold medal counts by athlete gender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenderCounts {
    pub female: u32,
    pub male: u32,
}

/// Statistics block of a country details response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryStats {
    pub gdp: Option<f64>,
    pub population: Option<u64>,
    pub medal_count: u32,
    pub summer: SeasonStats,
    pub winter: SeasonStats,

    /// Women's wins across every country in the dataset
    pub global_female_win_count: u32,

    /// Men's wins across every country in the dataset
    pub global_male_win_count: u32,
}

/// Details for a single country.
///
/// When the country is unknown only `name` is present and the statistics block
/// is omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryDetails {
    pub name: String,

    #[serde(flatten)]
    pub stats: Option<CountryStats>,
}

impl CountryDetails {
    /// Minimal response for a name that matched no country.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stats: None,
        }
    }

    pub fn found(
        country: &Country,
        medal_count: u32,
        summer: SeasonStats,
        winter: SeasonStats,
        genders: GenderCounts,
    ) -> Self {
        Self {
            name: country.name.clone(),
            stats: Some(CountryStats {
                gdp: country.gdp,
                population: country.population,
                medal_count,
                summer,
                winter,
                global_female_win_count: genders.female,
                global_male_win_count: genders.male,
            }),
        }
    }

    pub fn is_found(&self) -> bool {
        self.stats.is_some()
    }
}
