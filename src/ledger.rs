use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::catalog::Catalog;
use crate::error::TrackerError;
use crate::models::Cadence;
use crate::period::periods_for_cadence;

/// Separator between the parts of a usage key. Card and credit ids may not
/// contain it.
pub const SEP: &str = "::";

/// Composite ledger key. On disk it is the string `year::card::credit::period`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UsageKey {
    pub year: i32,
    pub card_id: String,
    pub credit_id: String,
    pub period: String,
}

impl UsageKey {
    pub fn new(year: i32, card_id: &str, credit_id: &str, period: &str) -> Self {
        Self {
            year,
            card_id: card_id.to_string(),
            credit_id: credit_id.to_string(),
            period: period.to_string(),
        }
    }
}

impl fmt::Display for UsageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEP}{}{SEP}{}{SEP}{}",
            self.year, self.card_id, self.credit_id, self.period
        )
    }
}

impl FromStr for UsageKey {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.splitn(4, SEP).collect();
        let bad = || TrackerError::Other(format!("Malformed usage key: {s}"));
        if parts.len() != 4 {
            return Err(bad());
        }
        let year = parts[0].parse().map_err(|_| bad())?;
        Ok(UsageKey::new(year, parts[1], parts[2], parts[3]))
    }
}

/// Which `(year, card, credit, period)` occurrences have been marked used.
///
/// A missing key and an explicit `false` mean the same thing. Entries for cards
/// or credits that no longer exist are kept as-is; aggregation never looks
/// them up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    entries: BTreeMap<UsageKey, bool>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_used(&self, key: &UsageKey) -> bool {
        self.entries.get(key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: UsageKey, used: bool) {
        self.entries.insert(key, used);
    }

    /// Entries in key order (year, card, credit, period).
    pub fn iter(&self) -> impl Iterator<Item = (&UsageKey, bool)> {
        self.entries.iter().map(|(k, v)| (k, *v))
    }

    /// Flip the flag at `key` and return the new value.
    pub fn toggle(&mut self, key: UsageKey) -> bool {
        let flag = self.entries.entry(key).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Drop every `year` entry whose credit in `catalog` has `cadence`.
    /// Returns how many entries were removed.
    pub fn reset_period(&mut self, catalog: &Catalog, year: i32, cadence: Cadence) -> usize {
        let mut removed = 0;
        for card in catalog.cards() {
            for credit in card.credits.iter().filter(|c| c.cadence == cadence) {
                for period in periods_for_cadence(credit.cadence) {
                    let key = UsageKey::new(year, &card.id, &credit.id, &period.key);
                    if self.entries.remove(&key).is_some() {
                        removed += 1;
                    }
                }
            }
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn used_count(&self) -> usize {
        self.entries.values().filter(|v| **v).count()
    }
}

impl Serialize for Ledger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k.to_string(), *v)))
    }
}

impl<'de> Deserialize<'de> for Ledger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut ledger = Ledger::new();
        for (k, v) in raw {
            let Some(used) = v.as_bool() else {
                log::warn!("Skipping usage entry {k}: expected true or false, got {v}");
                continue;
            };
            match k.parse::<UsageKey>() {
                Ok(key) => ledger.set(key, used),
                Err(e) => log::warn!("Skipping usage entry: {e}"),
            }
        }
        Ok(ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Card, Credit};

    fn catalog() -> Catalog {
        let card = Card {
            id: "gold".into(),
            name: "Gold".into(),
            annual_fee: 325.0,
            rewards_note: String::new(),
            credits: vec![
                Credit { id: "uber".into(), label: "Uber".into(), amount: 10.0, cadence: Cadence::Monthly },
                Credit { id: "resy".into(), label: "Resy".into(), amount: 50.0, cadence: Cadence::SemiAnnual },
                Credit { id: "travel".into(), label: "Travel".into(), amount: 300.0, cadence: Cadence::Annual },
            ],
        };
        Catalog::new(vec![card]).unwrap()
    }

    #[test]
    fn test_absent_key_is_unused() {
        let ledger = Ledger::new();
        assert!(!ledger.is_used(&UsageKey::new(2025, "gold", "uber", "0")));
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut ledger = Ledger::new();
        let key = UsageKey::new(2025, "gold", "uber", "3");
        assert!(ledger.toggle(key.clone()));
        assert!(ledger.is_used(&key));
        assert!(!ledger.toggle(key.clone()));
        assert!(!ledger.is_used(&key));
    }

    #[test]
    fn test_toggle_from_explicit_false() {
        let mut ledger = Ledger::new();
        let key = UsageKey::new(2025, "gold", "uber", "0");
        ledger.set(key.clone(), false);
        assert!(!ledger.is_used(&key));
        assert!(ledger.toggle(key.clone()));
        assert!(ledger.is_used(&key));
    }

    #[test]
    fn test_reset_clears_only_matching_cadence_and_year() {
        let cat = catalog();
        let mut ledger = Ledger::new();
        for m in ["0", "1", "2"] {
            ledger.set(UsageKey::new(2025, "gold", "uber", m), true);
        }
        ledger.set(UsageKey::new(2024, "gold", "uber", "0"), true);
        ledger.set(UsageKey::new(2025, "gold", "resy", "0"), true);
        ledger.set(UsageKey::new(2025, "gold", "travel", "0"), true);

        let removed = ledger.reset_period(&cat, 2025, Cadence::Monthly);
        assert_eq!(removed, 3);
        assert!(!ledger.is_used(&UsageKey::new(2025, "gold", "uber", "0")));
        assert!(ledger.is_used(&UsageKey::new(2024, "gold", "uber", "0")));
        assert!(ledger.is_used(&UsageKey::new(2025, "gold", "resy", "0")));
        assert!(ledger.is_used(&UsageKey::new(2025, "gold", "travel", "0")));
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_reset_leaves_orphans_alone() {
        let cat = catalog();
        let mut ledger = Ledger::new();
        ledger.set(UsageKey::new(2025, "gone", "uber", "0"), true);
        assert_eq!(ledger.reset_period(&cat, 2025, Cadence::Monthly), 0);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_key_string_form() {
        let key = UsageKey::new(2025, "amex-gold", "uber-cash", "11");
        assert_eq!(key.to_string(), "2025::amex-gold::uber-cash::11");
        assert_eq!("2025::amex-gold::uber-cash::11".parse::<UsageKey>().unwrap(), key);
        assert!("2025::amex-gold::uber-cash".parse::<UsageKey>().is_err());
        assert!("abcd::a::b::0".parse::<UsageKey>().is_err());
    }

    #[test]
    fn test_json_form_skips_malformed_keys() {
        let json = r#"{"2025::a::b::0": true, "2025::a::b::1": false, "junk": true}"#;
        let ledger: Ledger = serde_json::from_str(json).unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.used_count(), 1);

        let out = serde_json::to_value(&ledger).unwrap();
        assert_eq!(out.as_object().unwrap().len(), 2);
        assert_eq!(out["2025::a::b::0"], serde_json::Value::Bool(true));
        assert_eq!(out["2025::a::b::1"], serde_json::Value::Bool(false));
    }

    #[test]
    fn test_json_form_skips_non_boolean_values() {
        let json = r#"{"2025::a::b::0": true, "2025::a::b::1": 1, "2025::a::b::2": null, "2025::a::b::3": "yes"}"#;
        let ledger: Ledger = serde_json::from_str(json).unwrap();
        assert_eq!(ledger.len(), 1);
        assert!(ledger.is_used(&UsageKey::new(2025, "a", "b", "0")));
        assert!(!ledger.is_used(&UsageKey::new(2025, "a", "b", "1")));
    }

    #[test]
    fn test_iter_is_key_ordered() {
        let mut ledger = Ledger::new();
        ledger.set(UsageKey::new(2025, "gold", "uber", "1"), true);
        ledger.set(UsageKey::new(2024, "gold", "uber", "0"), false);
        ledger.set(UsageKey::new(2025, "gold", "uber", "0"), true);
        let seen: Vec<(i32, &str, bool)> = ledger
            .iter()
            .map(|(k, used)| (k.year, k.period.as_str(), used))
            .collect();
        assert_eq!(seen, [(2024, "0", false), (2025, "0", true), (2025, "1", true)]);
    }
}
