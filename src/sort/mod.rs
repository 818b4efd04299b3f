//! Stable, key-driven ordering of countries and medal lists.
//!
//! Sort keys are enumerated and resolved to comparator functions through
//! lookup tables. All sorts are stable: elements with equal keys keep their
//! input order in both directions.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use crate::models::{Country, CountrySummary, GoldMedal};

/// Comparator over a record type.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Interpret an `ascending` request flag.
    ///
    /// Only `"y"` (any case) means ascending; anything else, including a
    /// missing flag, is descending.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some(f) if f.eq_ignore_ascii_case("y") => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }

    /// Orient a comparison result.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Keys for ordering the country list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountrySortKey {
    Name,
    Gdp,
    Population,
    Medals,
}

const COUNTRY_KEYS: [(CountrySortKey, &str, Comparator<Country>); 4] = [
    (CountrySortKey::Name, "name", by_name),
    (CountrySortKey::Gdp, "gdp", by_gdp),
    (CountrySortKey::Population, "population", by_population),
    // Medal counts are attached after this base ordering.
    (CountrySortKey::Medals, "medals", by_code),
];

impl CountrySortKey {
    /// Resolve a key name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        COUNTRY_KEYS
            .iter()
            .find(|(_, n, _)| n.eq_ignore_ascii_case(name))
            .map(|(key, _, _)| *key)
    }

    /// Resolve a request parameter, falling back to `Medals`.
    pub fn from_param(param: Option<&str>) -> Self {
        param.and_then(Self::parse).unwrap_or(CountrySortKey::Medals)
    }

    pub fn as_str(&self) -> &'static str {
        COUNTRY_KEYS
            .iter()
            .find(|(key, _, _)| key == self)
            .map(|(_, n, _)| *n)
            .unwrap_or("medals")
    }

    /// Comparator for the pre-augmentation country ordering.
    pub fn comparator(&self) -> Comparator<Country> {
        COUNTRY_KEYS
            .iter()
            .find(|(key, _, _)| key == self)
            .map(|(_, _, cmp)| *cmp)
            .unwrap_or(by_code)
    }
}

impl fmt::Display for CountrySortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys for ordering one country's medal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedalSortKey {
    Year,
    Season,
    City,
    Name,
    Event,
}

const MEDAL_KEYS: [(MedalSortKey, &str, Comparator<GoldMedal>); 5] = [
    (MedalSortKey::Year, "year", by_year),
    (MedalSortKey::Season, "season", by_season),
    (MedalSortKey::City, "city", by_city),
    (MedalSortKey::Name, "name", by_athlete_name),
    (MedalSortKey::Event, "event", by_event),
];

impl MedalSortKey {
    /// Resolve a key name, case-insensitively. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        MEDAL_KEYS
            .iter()
            .find(|(_, n, _)| n.eq_ignore_ascii_case(name))
            .map(|(key, _, _)| *key)
    }

    pub fn as_str(&self) -> &'static str {
        MEDAL_KEYS
            .iter()
            .find(|(key, _, _)| key == self)
            .map(|(_, n, _)| *n)
            .unwrap_or("year")
    }

    pub fn comparator(&self) -> Comparator<GoldMedal> {
        MEDAL_KEYS
            .iter()
            .find(|(key, _, _)| key == self)
            .map(|(_, _, cmp)| *cmp)
            .unwrap_or(by_year)
    }
}

impl fmt::Display for MedalSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Comparators ──────────────────────────────────────────────────

fn by_name(a: &Country, b: &Country) -> Ordering {
    a.name.cmp(&b.name)
}

fn by_code(a: &Country, b: &Country) -> Ordering {
    a.code.cmp(&b.code)
}

fn by_gdp(a: &Country, b: &Country) -> Ordering {
    cmp_missing_lowest(a.gdp, b.gdp)
}

fn by_population(a: &Country, b: &Country) -> Ordering {
    // `None < Some(_)` for `Option<u64>`
    a.population.cmp(&b.population)
}

fn by_year(a: &GoldMedal, b: &GoldMedal) -> Ordering {
    a.year.cmp(&b.year)
}

fn by_season(a: &GoldMedal, b: &GoldMedal) -> Ordering {
    a.season.as_str().cmp(b.season.as_str())
}

fn by_city(a: &GoldMedal, b: &GoldMedal) -> Ordering {
    a.city.cmp(&b.city)
}

fn by_athlete_name(a: &GoldMedal, b: &GoldMedal) -> Ordering {
    a.athlete_name.cmp(&b.athlete_name)
}

fn by_event(a: &GoldMedal, b: &GoldMedal) -> Ordering {
    a.event.cmp(&b.event)
}

/// Total order over optional floats with missing values first.
fn cmp_missing_lowest(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.total_cmp(&y),
    }
}

// ── Sorting ──────────────────────────────────────────────────────

fn stable_sort<T, U>(items: &mut [T], cmp: Comparator<U>, direction: SortDirection)
where
    T: Borrow<U>,
{
    items.sort_by(|a, b| {
        direction.apply(cmp(Borrow::<U>::borrow(a), Borrow::<U>::borrow(b)))
    });
}

/// Order countries by a key. `Medals` orders by country code.
pub fn sort_countries<T: Borrow<Country>>(
    countries: &mut [T],
    key: CountrySortKey,
    direction: SortDirection,
) {
    stable_sort(countries, key.comparator(), direction);
}

/// Order augmented summaries by medal count.
pub fn sort_summaries_by_medals(summaries: &mut [CountrySummary], direction: SortDirection) {
    summaries.sort_by(|a, b| direction.apply(a.medal_count.cmp(&b.medal_count)));
}

/// Order a medal list by a key.
pub fn sort_medals<T: Borrow<GoldMedal>>(
    medals: &mut [T],
    key: MedalSortKey,
    direction: SortDirection,
) {
    stable_sort(medals, key.comparator(), direction);
}
