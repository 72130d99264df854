use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::defaults::default_catalog;
use crate::error::{Result, TrackerError};
use crate::ledger::Ledger;
use crate::models::Card;

/// Everything the tracker persists: the catalog, the selected year and the
/// usage ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub catalog: Catalog,
    pub year: i32,
    pub ledger: Ledger,
}

/// On-disk shape, shared by the state file and export files.
#[derive(Serialize)]
struct DocumentRef<'a> {
    cards: &'a Catalog,
    year: i32,
    usage: &'a Ledger,
}

/// Incoming document. Any top-level key may be missing.
#[derive(Debug, Deserialize)]
pub struct Document {
    pub cards: Option<Vec<Card>>,
    pub year: Option<i32>,
    pub usage: Option<Ledger>,
}

impl Document {
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl AppState {
    /// First-run state: built-in cards, nothing used.
    pub fn fresh(year: i32) -> Self {
        Self {
            catalog: default_catalog(),
            year,
            ledger: Ledger::new(),
        }
    }

    /// Replace whichever parts the document carries. The catalog is checked
    /// before anything is touched, so a bad document changes nothing.
    pub fn merge(&mut self, doc: Document) -> Result<()> {
        let catalog = doc.cards.map(Catalog::new).transpose()?;
        if let Some(catalog) = catalog {
            self.catalog = catalog;
        }
        if let Some(year) = doc.year {
            self.year = year;
        }
        if let Some(usage) = doc.usage {
            self.ledger = usage;
        }
        Ok(())
    }

    /// Parse `json` on top of the first-run state for `year`.
    pub fn from_json(json: &str, year: i32) -> Result<Self> {
        let mut state = Self::fresh(year);
        state.merge(Document::parse(json)?)?;
        Ok(state)
    }

    pub fn to_json(&self) -> Result<String> {
        let doc = DocumentRef {
            cards: &self.catalog,
            year: self.year,
            usage: &self.ledger,
        };
        let json = serde_json::to_string_pretty(&doc)?;
        Ok(format!("{json}\n"))
    }

    /// Import an interchange document. Malformed input is rejected and the
    /// current state is left alone.
    pub fn import(&mut self, json: &str) -> Result<()> {
        let doc = Document::parse(json).map_err(|e| {
            TrackerError::Import(format!("{e}. Expected a file exported from credit-tracker."))
        })?;
        self.merge(doc)
            .map_err(|e| TrackerError::Import(e.to_string()))
    }

    pub fn export_file_name(&self) -> String {
        format!("credit-tracker-{}.json", self.year)
    }
}
