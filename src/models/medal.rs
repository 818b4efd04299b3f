//! Gold medal record model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Olympic Games designation.
///
/// Variant order matches the lexicographic order of the names, so the derived
/// `Ord` is the same as comparing `"Summer"` with `"Winter"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    pub const ALL: [Season; 2] = [Season::Summer, Season::Winter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Athlete gender category of the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Men,
    Women,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Men => write!(f, "Men"),
            Gender::Women => write!(f, "Women"),
        }
    }
}

/// A single gold medal win.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldMedal {
    /// Games year
    pub year: i32,

    /// Summer or Winter Games
    pub season: Season,

    /// Host city
    pub city: String,

    /// Winning country, matches `Country::name`
    pub country: String,

    /// Event name (e.g., "100M Freestyle")
    pub event: String,

    /// Athlete (or team) name
    pub athlete_name: String,

    pub gender: Gender,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discipline: Option<String>,
}

impl GoldMedal {
    /// Create a new medal record without sport/discipline detail.
    pub fn new(
        year: i32,
        season: Season,
        city: impl Into<String>,
        country: impl Into<String>,
        event: impl Into<String>,
        athlete_name: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Self {
            year,
            season,
            city: city.into(),
            country: country.into(),
            event: event.into(),
            athlete_name: athlete_name.into(),
            gender,
            sport: None,
            discipline: None,
        }
    }

    /// Builder method to set sport and discipline.
    pub fn with_sport(mut self, sport: impl Into<String>, discipline: impl Into<String>) -> Self {
        self.sport = Some(sport.into());
        self.discipline = Some(discipline.into());
        self
    }
}
