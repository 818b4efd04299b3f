//! Read-only record store.
//!
//! The dataset is a static snapshot loaded once from the data directory:
//! - `countries.jsonl`: one `Country` per line
//! - `gold_medals.jsonl`: one `GoldMedal` per line
//!
//! Queries go through the [`RecordStore`] trait, which exposes the full
//! collections plus predicate lookups.

mod jsonl;
mod memory;

pub use jsonl::*;
pub use memory::*;

use std::path::PathBuf;
use thiserror::Error;

use crate::models::{Country, Gender, GoldMedal, Season};

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Integrity error: {0}")]
    Integrity(String),
}

/// Configuration for dataset paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub countries_file: String,
    pub medals_file: String,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            countries_file: EntityType::Country.filename().to_string(),
            medals_file: EntityType::GoldMedal.filename().to_string(),
        }
    }

    /// Override the dataset file names.
    pub fn with_files(mut self, countries_file: &str, medals_file: &str) -> Self {
        self.countries_file = countries_file.to_string();
        self.medals_file = medals_file.to_string();
        self
    }

    pub fn path_for(&self, entity: EntityType) -> PathBuf {
        match entity {
            EntityType::Country => self.data_dir.join(&self.countries_file),
            EntityType::GoldMedal => self.data_dir.join(&self.medals_file),
        }
    }

    pub fn countries_path(&self) -> PathBuf {
        self.path_for(EntityType::Country)
    }

    pub fn medals_path(&self) -> PathBuf {
        self.path_for(EntityType::GoldMedal)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

/// Read-only access to countries and gold medal records.
///
/// Implementors provide the two collections; every lookup is derived from
/// them by predicate. Results borrow from the store and keep its order.
pub trait RecordStore: Send + Sync {
    fn countries(&self) -> &[Country];

    fn medals(&self) -> &[GoldMedal];

    fn countries_where(&self, predicate: &dyn Fn(&Country) -> bool) -> Vec<&Country> {
        self.countries().iter().filter(|c| predicate(*c)).collect()
    }

    fn medals_where(&self, predicate: &dyn Fn(&GoldMedal) -> bool) -> Vec<&GoldMedal> {
        self.medals().iter().filter(|m| predicate(*m)).collect()
    }

    fn all_countries(&self) -> Vec<&Country> {
        self.countries().iter().collect()
    }

    fn all_medals(&self) -> Vec<&GoldMedal> {
        self.medals().iter().collect()
    }

    /// Exact, case-sensitive lookup by country name.
    fn find_country(&self, name: &str) -> Option<&Country> {
        self.countries().iter().find(|c| c.name == name)
    }

    fn medals_by_country(&self, name: &str) -> Vec<&GoldMedal> {
        self.medals_where(&|m| m.country == name)
    }

    fn medals_by_season(&self, season: Season) -> Vec<&GoldMedal> {
        self.medals_where(&|m| m.season == season)
    }

    fn medals_by_season_and_country(&self, season: Season, name: &str) -> Vec<&GoldMedal> {
        self.medals_where(&|m| m.season == season && m.country == name)
    }

    fn medals_by_gender(&self, gender: Gender) -> Vec<&GoldMedal> {
        self.medals_where(&|m| m.gender == gender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_paths() {
        let config = StorageConfig::new(PathBuf::from("/data"));

        assert_eq!(config.countries_path(), PathBuf::from("/data/countries.jsonl"));
        assert_eq!(config.medals_path(), PathBuf::from("/data/gold_medals.jsonl"));
    }

    #[test]
    fn test_storage_config_custom_files() {
        let config =
            StorageConfig::new(PathBuf::from("/data")).with_files("nations.jsonl", "wins.jsonl");

        assert_eq!(config.countries_path(), PathBuf::from("/data/nations.jsonl"));
        assert_eq!(config.medals_path(), PathBuf::from("/data/wins.jsonl"));
    }

    #[test]
    fn test_storage_config_default() {
        let config = StorageConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
    }

    #[test]
    fn test_record_store_lookups() {
        let store = InMemoryStore::new(
            vec![Country::new("USA", "USA"), Country::new("Norway", "NOR")],
            vec![
                GoldMedal::new(1924, Season::Summer, "Paris", "USA", "Rugby", "Team", Gender::Men),
                GoldMedal::new(1928, Season::Winter, "St. Moritz", "USA", "Bobsleigh", "Heaton", Gender::Men),
                GoldMedal::new(1924, Season::Winter, "Chamonix", "Norway", "Ski Jump", "Thams", Gender::Men),
                GoldMedal::new(1932, Season::Summer, "Los Angeles", "USA", "100M", "Tolan", Gender::Women),
            ],
        );

        assert_eq!(store.all_countries().len(), 2);
        assert_eq!(store.all_medals().len(), 4);
        assert_eq!(store.find_country("Norway").map(|c| c.code.as_str()), Some("NOR"));
        assert!(store.find_country("norway").is_none());
        assert_eq!(store.medals_by_country("USA").len(), 3);
        assert_eq!(store.medals_by_season(Season::Winter).len(), 2);
        assert_eq!(store.medals_by_season_and_country(Season::Winter, "USA").len(), 1);
        assert_eq!(store.medals_by_gender(Gender::Women).len(), 1);
        assert_eq!(store.countries_where(&|c| c.code.starts_with('N')).len(), 1);
    }
}
