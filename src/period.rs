use crate::error::{Result, TrackerError};
use crate::models::Cadence;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const HALVES: [&str; 2] = ["H1 (Jan\u{2013}Jun)", "H2 (Jul\u{2013}Dec)"];

/// One occurrence of a cadence within a year. Keys are scoped to the cadence,
/// not to a year: `"0"` is January for monthly credits and H1 for semi-annual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    pub key: String,
    pub label: &'static str,
}

pub fn periods_for_cadence(cadence: Cadence) -> Vec<Period> {
    let labels: &[&'static str] = match cadence {
        Cadence::Monthly => &MONTHS,
        Cadence::SemiAnnual => &HALVES,
        Cadence::Annual => &["Annual"],
    };
    labels
        .iter()
        .copied()
        .enumerate()
        .map(|(i, label)| Period {
            key: i.to_string(),
            label,
        })
        .collect()
}

/// Resolve user input to a period: exact key, or case-insensitive label prefix
/// (`apr`, `h2`, `annual`).
pub fn find_period(cadence: Cadence, text: &str) -> Result<Period> {
    let periods = periods_for_cadence(cadence);
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return Err(TrackerError::UnknownPeriod(text.to_string()));
    }
    if let Some(p) = periods.iter().find(|p| p.key == needle) {
        return Ok(p.clone());
    }
    periods
        .into_iter()
        .find(|p| p.label.to_lowercase().starts_with(&needle))
        .ok_or_else(|| TrackerError::UnknownPeriod(format!("{text} (for a {cadence} credit)")))
}
