//! Country reference data and the medal-count summary built from it.

use serde::{Deserialize, Serialize};

/// A country with its reference economics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Full name, unique (e.g., "United States")
    pub name: String,

    /// Country code, unique (e.g., "USA")
    pub code: String,

    /// Gross domestic product, if known
    #[serde(default)]
    pub gdp: Option<f64>,

    /// Population, if known
    #[serde(default)]
    pub population: Option<u64>,
}

impl Country {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            gdp: None,
            population: None,
        }
    }

    /// Builder method to set GDP.
    pub fn with_gdp(mut self, gdp: f64) -> Self {
        self.gdp = Some(gdp);
        self
    }

    /// Builder method to set population.
    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }
}

/// A country augmented with its total gold medal count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountrySummary {
    #[serde(flatten)]
    pub country: Country,

    #[serde(rename = "medals")]
    pub medal_count: u32,
}

impl CountrySummary {
    pub fn new(country: Country, medal_count: u32) -> Self {
        Self {
            country,
            medal_count,
        }
    }
}
