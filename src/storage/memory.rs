//! In-memory record store loaded from the JSONL dataset.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use tracing::{info, warn};

use super::{EntityType, JsonlReader, RecordStore, StorageConfig, StorageError};
use crate::models::{Country, GoldMedal};

/// Immutable snapshot of countries and medals.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    countries: Vec<Country>,
    medals: Vec<GoldMedal>,
}

/// Soft integrity findings that leave the store usable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    pub country_count: usize,
    pub medal_count: usize,

    /// Medal counts per country name that matches no `Country`
    pub unknown_countries: BTreeMap<String, u32>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.unknown_countries.is_empty()
    }

    /// Number of medals not attributable to any known country.
    pub fn orphaned_medals(&self) -> u32 {
        self.unknown_countries.values().sum()
    }
}

impl InMemoryStore {
    pub fn new(countries: Vec<Country>, medals: Vec<GoldMedal>) -> Self {
        Self { countries, medals }
    }

    /// Load the dataset from the configured JSONL files.
    ///
    /// Duplicate country names or codes are rejected. Medals referencing an
    /// unknown country are kept and logged.
    pub fn load(config: &StorageConfig) -> Result<Self, StorageError> {
        let countries = JsonlReader::<Country>::for_entity(config, EntityType::Country).read_all()?;
        let medals = JsonlReader::<GoldMedal>::for_entity(config, EntityType::GoldMedal).read_all()?;

        let store = Self::new(countries, medals);
        store.check_unique_keys()?;

        let report = store.integrity_report();
        for (country, count) in &report.unknown_countries {
            warn!("{} medals reference unknown country {:?}", count, country);
        }

        info!(
            "Loaded {} countries and {} gold medals from {:?}",
            report.country_count, report.medal_count, config.data_dir
        );
        Ok(store)
    }

    fn check_unique_keys(&self) -> Result<(), StorageError> {
        let mut names = HashSet::new();
        let mut codes = HashSet::new();

        for country in &self.countries {
            if !names.insert(country.name.as_str()) {
                return Err(StorageError::Integrity(format!(
                    "duplicate country name {:?}",
                    country.name
                )));
            }
            if !codes.insert(country.code.as_str()) {
                return Err(StorageError::Integrity(format!(
                    "duplicate country code {:?}",
                    country.code
                )));
            }
        }

        Ok(())
    }

    /// Find medals whose country matches no known `Country`.
    pub fn integrity_report(&self) -> IntegrityReport {
        let known: HashSet<&str> = self.countries.iter().map(|c| c.name.as_str()).collect();

        let mut unknown_countries: BTreeMap<String, u32> = BTreeMap::new();
        for medal in &self.medals {
            if !known.contains(medal.country.as_str()) {
                *unknown_countries.entry(medal.country.clone()).or_default() += 1;
            }
        }

        IntegrityReport {
            country_count: self.countries.len(),
            medal_count: self.medals.len(),
            unknown_countries,
        }
    }
}

impl RecordStore for InMemoryStore {
    fn countries(&self) -> &[Country] {
        &self.countries
    }

    fn medals(&self) -> &[GoldMedal] {
        &self.medals
    }
}
