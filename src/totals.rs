use crate::catalog::Catalog;
use crate::ledger::{Ledger, UsageKey};
use crate::models::Credit;
use crate::period::periods_for_cadence;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CardTotals {
    pub available: f64,
    pub used: f64,
    pub remaining: f64,
    pub net: f64,
    pub fee: f64,
}

impl CardTotals {
    fn finish(available: f64, used: f64, fee: f64) -> Self {
        Self {
            available,
            used,
            // Only a hand-crafted ledger can push used past available.
            remaining: (available - used).max(0.0),
            net: used - fee,
            fee,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardSummary {
    pub card_id: String,
    pub name: String,
    pub totals: CardTotals,
}

/// Per-card totals in catalog order plus the grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    pub per_card: Vec<CardSummary>,
    pub grand: CardTotals,
}

impl Totals {
    pub fn card(&self, card_id: &str) -> Option<&CardTotals> {
        self.per_card
            .iter()
            .find(|s| s.card_id == card_id)
            .map(|s| &s.totals)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreditTotals {
    pub available: f64,
    pub used: f64,
    pub remaining: f64,
    pub used_periods: usize,
}

/// Breakdown for a single credit row.
pub fn credit_totals(card_id: &str, credit: &Credit, ledger: &Ledger, year: i32) -> CreditTotals {
    let periods = periods_for_cadence(credit.cadence);
    let available = credit.amount * periods.len() as f64;
    let used_periods = periods
        .iter()
        .filter(|p| ledger.is_used(&UsageKey::new(year, card_id, &credit.id, &p.key)))
        .count();
    let used = credit.amount * used_periods as f64;
    CreditTotals {
        available,
        used,
        remaining: (available - used).max(0.0),
        used_periods,
    }
}

/// Recompute everything for `year` from the catalog and ledger.
pub fn compute_totals(catalog: &Catalog, ledger: &Ledger, year: i32) -> Totals {
    let mut per_card = Vec::with_capacity(catalog.len());
    let (mut all, mut used_all, mut fees) = (0.0, 0.0, 0.0);

    for card in catalog.cards() {
        let mut available = 0.0;
        let mut used = 0.0;
        for credit in &card.credits {
            let periods = periods_for_cadence(credit.cadence);
            available += credit.amount * periods.len() as f64;
            for p in &periods {
                if ledger.is_used(&UsageKey::new(year, &card.id, &credit.id, &p.key)) {
                    used += credit.amount;
                }
            }
        }
        all += available;
        used_all += used;
        fees += card.annual_fee;
        per_card.push(CardSummary {
            card_id: card.id.clone(),
            name: card.name.clone(),
            totals: CardTotals::finish(available, used, card.annual_fee),
        });
    }

    Totals {
        per_card,
        grand: CardTotals::finish(all, used_all, fees),
    }
}
