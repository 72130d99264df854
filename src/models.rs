use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// How often a credit recurs within one calendar year.
///
/// Deserializing anything other than the three known names is an error, so a
/// typo in an imported file rejects the record instead of hiding the credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cadence {
    Monthly,
    SemiAnnual,
    Annual,
}

impl Cadence {
    pub const ALL: [Cadence; 3] = [Cadence::Monthly, Cadence::SemiAnnual, Cadence::Annual];

    pub fn as_str(self) -> &'static str {
        match self {
            Cadence::Monthly => "monthly",
            Cadence::SemiAnnual => "semi-annual",
            Cadence::Annual => "annual",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cadence {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(Cadence::Monthly),
            "semi-annual" | "semiannual" | "semi_annual" => Ok(Cadence::SemiAnnual),
            "annual" => Ok(Cadence::Annual),
            _ => Err(TrackerError::UnknownCadence(s.to_string())),
        }
    }
}

/// A named recurring benefit on a card. `amount` is the value of one occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credit {
    pub id: String,
    pub label: String,
    pub amount: f64,
    pub cadence: Cadence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    pub annual_fee: f64,
    #[serde(default)]
    pub rewards_note: String,
    #[serde(default)]
    pub credits: Vec<Credit>,
}

impl Card {
    pub fn credit(&self, id: &str) -> Option<&Credit> {
        self.credits.iter().find(|c| c.id == id)
    }
}
