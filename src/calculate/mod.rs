//! Statistics calculation engine.
//!
//! Computes derived metrics from the record store:
//! - Per-country gold medal counts
//! - Per-season win counts, share of season events and first win year
//! - Win counts by athlete gender
//!
//! Nothing here fails. Missing data is expressed through `Option` fields.

use crate::models::{Country, CountrySummary, Gender, GenderCounts, GoldMedal, Season, SeasonStats};
use crate::storage::RecordStore;

/// Calculate the share of season events won, if the season had any events.
pub fn calculate_season_share(wins: u32, season_total: usize) -> Option<f64> {
    if season_total == 0 {
        None
    } else {
        Some(wins as f64 / season_total as f64)
    }
}

/// Build season stats from a country's wins in one season.
pub fn season_stats_from(wins: &[&GoldMedal], season_total: usize) -> SeasonStats {
    let Some(first_year) = wins.iter().map(|m| m.year).min() else {
        return SeasonStats::none();
    };

    let win_count = wins.len() as u32;
    SeasonStats {
        win_count: Some(win_count),
        percentage_of_season_events: calculate_season_share(win_count, season_total),
        year_of_first_win: Some(first_year),
    }
}

/// Derives statistics from a record store.
pub struct Aggregator<'a, S: RecordStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: RecordStore + ?Sized> Aggregator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Number of gold medals won by the exactly named country.
    pub fn medal_count(&self, country_name: &str) -> u32 {
        self.store.medals_by_country(country_name).len() as u32
    }

    /// Win statistics of a country in one season.
    pub fn season_stats(&self, country_name: &str, season: Season) -> SeasonStats {
        let wins = self.store.medals_by_season_and_country(season, country_name);
        if wins.is_empty() {
            return SeasonStats::none();
        }

        let season_total = self.store.medals_by_season(season).len();
        season_stats_from(&wins, season_total)
    }

    /// Wins by gender across every country in the dataset.
    ///
    /// This is not filtered by any country.
    pub fn gender_counts(&self) -> GenderCounts {
        GenderCounts {
            female: self.store.medals_by_gender(Gender::Women).len() as u32,
            male: self.store.medals_by_gender(Gender::Men).len() as u32,
        }
    }

    /// Attach medal counts to countries, keeping their order.
    pub fn augment(&self, countries: &[&Country]) -> Vec<CountrySummary> {
        countries
            .iter()
            .map(|c| CountrySummary::new((*c).clone(), self.medal_count(&c.name)))
            .collect()
    }
}
