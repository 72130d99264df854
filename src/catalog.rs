use std::collections::HashSet;

use rand::Rng;
use serde::Serialize;

use crate::error::{Result, TrackerError};
use crate::ledger::SEP;
use crate::models::{Cadence, Card, Credit};

const ID_LEN: usize = 7;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// The user's cards in display order.
///
/// Card ids are unique within the catalog and credit ids are unique within
/// their card, and no id contains the usage key separator. `Catalog::new` and
/// `CatalogEditor::apply` are the only ways in and both check that.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    cards: Vec<Card>,
}

impl Catalog {
    pub fn new(cards: Vec<Card>) -> Result<Self> {
        validate(&cards)?;
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn credit_count(&self) -> usize {
        self.cards.iter().map(|c| c.credits.len()).sum()
    }

    /// Start an edit session on a private copy of the catalog.
    pub fn edit(&self) -> CatalogEditor {
        CatalogEditor {
            cards: self.cards.clone(),
        }
    }

    /// Locate a card by id, or by 1-based position when `sel` is a number that
    /// isn't also a card id.
    pub fn resolve_card(&self, sel: &str) -> Result<usize> {
        if let Some(i) = self.cards.iter().position(|c| c.id == sel) {
            return Ok(i);
        }
        match sel.parse::<usize>() {
            Ok(n) if n >= 1 && n <= self.cards.len() => Ok(n - 1),
            _ => Err(TrackerError::UnknownCard(sel.to_string())),
        }
    }

    /// Same as [`resolve_card`](Self::resolve_card), within one card's credits.
    pub fn resolve_credit(&self, card_index: usize, sel: &str) -> Result<usize> {
        let card = self.cards.get(card_index).ok_or(TrackerError::IndexOutOfRange {
            what: "card",
            index: card_index,
            len: self.cards.len(),
        })?;
        if let Some(i) = card.credits.iter().position(|c| c.id == sel) {
            return Ok(i);
        }
        match sel.parse::<usize>() {
            Ok(n) if n >= 1 && n <= card.credits.len() => Ok(n - 1),
            _ => Err(TrackerError::UnknownCredit(format!("{sel} on {}", card.name))),
        }
    }
}

fn validate(cards: &[Card]) -> Result<()> {
    let mut card_ids = HashSet::new();
    for card in cards {
        check_id("card", &card.id)?;
        if !card_ids.insert(card.id.as_str()) {
            return Err(TrackerError::InvalidCatalog(format!(
                "duplicate card id '{}'",
                card.id
            )));
        }
        let mut credit_ids = HashSet::new();
        for credit in &card.credits {
            check_id("credit", &credit.id)?;
            if !credit_ids.insert(credit.id.as_str()) {
                return Err(TrackerError::InvalidCatalog(format!(
                    "duplicate credit id '{}' on card '{}'",
                    credit.id, card.id
                )));
            }
        }
    }
    Ok(())
}

/// Ids end up inside usage keys, so they can't carry the key separator.
fn check_id(what: &str, id: &str) -> Result<()> {
    if id.contains(SEP) {
        return Err(TrackerError::InvalidCatalog(format!(
            "{what} id '{id}' may not contain '{SEP}'"
        )));
    }
    Ok(())
}

/// Coerce a typed monetary value. Anything that isn't a finite, non-negative
/// number becomes zero so the editor never holds an invalid amount.
pub fn parse_amount(text: &str) -> f64 {
    text.trim().parse::<f64>().map(non_negative).unwrap_or(0.0)
}

fn fresh_id<'a>(taken: impl Iterator<Item = &'a str>) -> String {
    let taken: HashSet<&str> = taken.collect();
    let mut rng = rand::thread_rng();
    loop {
        let id: String = (0..ID_LEN)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect();
        if !taken.contains(id.as_str()) {
            return id;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CardPatch {
    pub name: Option<String>,
    pub annual_fee: Option<f64>,
    pub rewards_note: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreditPatch {
    pub label: Option<String>,
    pub amount: Option<f64>,
    pub cadence: Option<Cadence>,
}

/// Scratch copy of a catalog. Nothing reaches the live catalog until
/// [`apply`](Self::apply); dropping the editor discards the edits.
#[derive(Debug, Clone)]
pub struct CatalogEditor {
    cards: Vec<Card>,
}

impl CatalogEditor {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn card_mut(&mut self, index: usize) -> Result<&mut Card> {
        let len = self.cards.len();
        self.cards.get_mut(index).ok_or(TrackerError::IndexOutOfRange {
            what: "card",
            index,
            len,
        })
    }

    /// Append a blank card and return its index.
    pub fn add_card(&mut self) -> usize {
        let id = fresh_id(self.cards.iter().map(|c| c.id.as_str()));
        self.cards.push(Card {
            id,
            name: "New Card".to_string(),
            annual_fee: 0.0,
            rewards_note: String::new(),
            credits: Vec::new(),
        });
        self.cards.len() - 1
    }

    pub fn remove_card(&mut self, index: usize) -> Result<Card> {
        self.card_mut(index)?;
        Ok(self.cards.remove(index))
    }

    /// Move the card at `from` to position `to`; `to` is clamped to the list.
    /// Returns the card's final index.
    pub fn move_card(&mut self, from: usize, to: usize) -> Result<usize> {
        self.card_mut(from)?;
        let card = self.cards.remove(from);
        let to = to.min(self.cards.len());
        self.cards.insert(to, card);
        Ok(to)
    }

    /// Append a zero-amount monthly credit to a card and return its index.
    pub fn add_credit(&mut self, card_index: usize) -> Result<usize> {
        let card = self.card_mut(card_index)?;
        let id = fresh_id(card.credits.iter().map(|c| c.id.as_str()));
        card.credits.push(Credit {
            id,
            label: "New Credit".to_string(),
            amount: 0.0,
            cadence: Cadence::Monthly,
        });
        Ok(card.credits.len() - 1)
    }

    pub fn remove_credit(&mut self, card_index: usize, credit_index: usize) -> Result<Credit> {
        let card = self.card_mut(card_index)?;
        if credit_index >= card.credits.len() {
            return Err(TrackerError::IndexOutOfRange {
                what: "credit",
                index: credit_index,
                len: card.credits.len(),
            });
        }
        Ok(card.credits.remove(credit_index))
    }

    pub fn update_card(&mut self, index: usize, patch: CardPatch) -> Result<()> {
        let card = self.card_mut(index)?;
        if let Some(name) = patch.name {
            card.name = name;
        }
        if let Some(fee) = patch.annual_fee {
            card.annual_fee = non_negative(fee);
        }
        if let Some(note) = patch.rewards_note {
            card.rewards_note = note;
        }
        Ok(())
    }

    pub fn update_credit(
        &mut self,
        card_index: usize,
        credit_index: usize,
        patch: CreditPatch,
    ) -> Result<()> {
        let card = self.card_mut(card_index)?;
        let len = card.credits.len();
        let credit = card
            .credits
            .get_mut(credit_index)
            .ok_or(TrackerError::IndexOutOfRange {
                what: "credit",
                index: credit_index,
                len,
            })?;
        if let Some(label) = patch.label {
            credit.label = label;
        }
        if let Some(amount) = patch.amount {
            credit.amount = non_negative(amount);
        }
        if let Some(cadence) = patch.cadence {
            credit.cadence = cadence;
        }
        Ok(())
    }

    /// Commit the edits, yielding the replacement catalog.
    pub fn apply(self) -> Result<Catalog> {
        Catalog::new(self.cards)
    }
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}
