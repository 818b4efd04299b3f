//! # Gold Medal
//!
//! Olympic gold medal metrics over a static snapshot of medal wins and
//! per-country reference data.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (countries, medals, derived stats)
//! - **storage**: Read-only record store loaded from JSONL files
//! - **calculate**: Medal counts, season stats and gender counts
//! - **sort**: Stable key-driven ordering of countries and medal lists
//! - **query**: Facade combining aggregation and ordering per request
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod query;
pub mod sort;
pub mod storage;

pub use models::*;
pub use query::{normalize_country_name, QueryService};
pub use sort::{CountrySortKey, MedalSortKey, SortDirection};
