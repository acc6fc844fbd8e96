//! Country selection
//!
//! The fixed set of countries the research database covers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A country that can be selected on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    Israel,
    Mexico,
    Qatar,
    #[serde(rename = "Saudi Arabia")]
    SaudiArabia,
}

impl Country {
    /// All selectable countries, in dropdown order
    pub const ALL: [Country; 4] = [
        Country::Israel,
        Country::Mexico,
        Country::Qatar,
        Country::SaudiArabia,
    ];

    /// Display name, which is also the value matched by the research API filter
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Israel => "Israel",
            Country::Mexico => "Mexico",
            Country::Qatar => "Qatar",
            Country::SaudiArabia => "Saudi Arabia",
        }
    }
}

impl Default for Country {
    fn default() -> Self {
        Country::Israel
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name is not one of the selectable countries
#[derive(Debug, Clone, Error)]
#[error("Unknown country: {0}")]
pub struct UnknownCountry(pub String);

impl FromStr for Country {
    type Err = UnknownCountry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Country::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCountry(s.to_string()))
    }
}
