//! Query facade.
//!
//! Orchestrates the aggregator and sorter for the three read operations:
//! the country list, one country's details, and one country's medal list.
//! Unknown countries and unknown medal-list keys degrade to minimal or empty
//! results rather than errors.

use tracing::debug;

use crate::calculate::Aggregator;
use crate::models::{Country, CountryDetails, CountrySummary, GoldMedal, Season};
use crate::sort::{
    sort_countries, sort_medals, sort_summaries_by_medals, CountrySortKey, MedalSortKey,
    SortDirection,
};
use crate::storage::RecordStore;

/// Title-case every whitespace-separated word: first letter upper, rest lower.
///
/// `"united states"` and `"UNITED STATES"` both become `"United States"`.
pub fn normalize_country_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut word_start = true;

    for ch in raw.trim().chars() {
        if ch.is_whitespace() {
            word_start = true;
            out.push(ch);
        } else if word_start {
            word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }

    out
}

/// Read-only queries over a record store.
pub struct QueryService<'a, S: RecordStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: RecordStore + ?Sized> QueryService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    fn aggregator(&self) -> Aggregator<'a, S> {
        Aggregator::new(self.store)
    }

    /// Resolve a free-text country name.
    ///
    /// Returns the normalized input and the matching country, if any. An exact
    /// match on the normalized name wins; otherwise a country whose own name
    /// normalizes to the same text is used (so "usa" finds "USA").
    pub fn resolve_country(&self, raw: &str) -> (String, Option<&'a Country>) {
        let normalized = normalize_country_name(raw);
        let store: &'a S = self.store;
        let country = store.find_country(&normalized).or_else(|| {
            store
                .countries()
                .iter()
                .find(|c| normalize_country_name(&c.name) == normalized)
        });
        (normalized, country)
    }

    /// All countries with medal counts, in the requested order.
    ///
    /// Non-medal keys order the countries before augmentation. The `medals`
    /// key orders by code first, then stably by medal count.
    pub fn list_country_summaries(
        &self,
        key: CountrySortKey,
        direction: SortDirection,
    ) -> Vec<CountrySummary> {
        let mut countries = self.store.all_countries();
        sort_countries(&mut countries, key, direction);

        let mut summaries = self.aggregator().augment(&countries);
        if key == CountrySortKey::Medals {
            sort_summaries_by_medals(&mut summaries, direction);
        }

        debug!(
            "Listed {} countries by {} ({:?})",
            summaries.len(),
            key,
            direction
        );
        summaries
    }

    /// Details for one country, or a name-only response if it is unknown.
    pub fn get_country_details(&self, raw_name: &str) -> CountryDetails {
        let (normalized, country) = self.resolve_country(raw_name);
        let Some(country) = country else {
            debug!("No country matches {:?}", normalized);
            return CountryDetails::not_found(normalized);
        };

        let aggregator = self.aggregator();
        CountryDetails::found(
            country,
            aggregator.medal_count(&country.name),
            aggregator.season_stats(&country.name, Season::Summer),
            aggregator.season_stats(&country.name, Season::Winter),
            aggregator.gender_counts(),
        )
    }

    /// One country's medals in the requested order.
    ///
    /// An unknown key (`None`) or an unknown country yields an empty list.
    pub fn list_country_medals(
        &self,
        raw_name: &str,
        key: Option<MedalSortKey>,
        direction: SortDirection,
    ) -> Vec<GoldMedal> {
        let Some(key) = key else {
            debug!("Unsupported medal sort key, returning no medals");
            return Vec::new();
        };

        let (normalized, country) = self.resolve_country(raw_name);
        let Some(country) = country else {
            debug!("No country matches {:?}, returning no medals", normalized);
            return Vec::new();
        };
        let name = country.name.as_str();

        let mut medals = self.store.medals_by_country(name);
        sort_medals(&mut medals, key, direction);

        debug!(
            "Listed {} medals for {:?} by {} ({:?})",
            medals.len(),
            name,
            key,
            direction
        );
        medals.into_iter().cloned().collect()
    }

    /// Medal list query with a raw key name, as received from a request.
    pub fn list_country_medals_by(
        &self,
        raw_name: &str,
        raw_key: &str,
        direction: SortDirection,
    ) -> Vec<GoldMedal> {
        self.list_country_medals(raw_name, MedalSortKey::parse(raw_key), direction)
    }
}
