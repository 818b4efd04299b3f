//! JSONL (JSON Lines) dataset files.
//!
//! Each line is a valid JSON object representing one record.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{StorageConfig, StorageError};

/// Entity types stored as JSONL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Country,
    GoldMedal,
}

impl EntityType {
    /// Get the default filename for this entity type.
    pub fn filename(&self) -> &'static str {
        match self {
            EntityType::Country => "countries.jsonl",
            EntityType::GoldMedal => "gold_medals.jsonl",
        }
    }
}

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    /// Create a new JSONL reader for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Create a reader for a specific entity type.
    pub fn for_entity(config: &StorageConfig, entity: EntityType) -> Self {
        Self::new(config.path_for(entity))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read all records from the file.
    ///
    /// Blank lines are ignored and unparsable lines are skipped with a warning.
    /// A missing file is an error: the dataset is required.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        if !self.exists() {
            return Err(StorageError::PathNotFound(self.path.clone()));
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!("Failed to parse line {} in {:?}: {}", idx + 1, self.path, e);
                }
            }
        }

        debug!("Read {} records from {:?}", records.len(), self.path);
        Ok(records)
    }
}
