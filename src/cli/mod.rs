pub mod cards;
pub mod credits;
pub mod export;
pub mod import;
pub mod init;
pub mod status;
pub mod summary;
pub mod usage;

use chrono::Datelike;
use clap::{Parser, Subcommand};

use crate::models::Cadence;
use crate::settings::{load_settings, Settings};
use crate::state::AppState;
use crate::store::{load_or_default, persist, JsonFileStore};

pub(crate) fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Loaded state for one command. Mutating commands change `state` and call
/// [`save`](Self::save).
pub(crate) struct Session {
    pub settings: Settings,
    pub store: JsonFileStore,
    pub state: AppState,
}

impl Session {
    pub fn open() -> Self {
        let settings = load_settings();
        let year = current_year();
        let store = JsonFileStore::new(settings.state_path(), year);
        let state = load_or_default(&store, year);
        Self {
            settings,
            store,
            state,
        }
    }

    pub fn save(&self) {
        persist(&self.store, &self.state);
    }
}

#[derive(Parser)]
#[command(
    name = "credit-tracker",
    about = "Track recurring credit card statement credits so they never expire unused."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Choose a data directory and create the state file.
    Init {
        /// Path for tracker data (default: ~/Documents/credit-tracker)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Show where data lives and how much of it there is.
    Status,
    /// Credit totals for the selected year, per card and overall.
    Summary,
    /// Manage cards.
    Cards {
        #[command(subcommand)]
        command: CardsCommands,
    },
    /// Manage the credits on a card.
    Credits {
        #[command(subcommand)]
        command: CreditsCommands,
    },
    /// Toggle one period of a credit between used and unused.
    Mark {
        /// Card id or position
        card: String,
        /// Credit id or position on the card
        credit: String,
        /// Period key (0-11, 0-1, 0) or label: jan, h2, annual
        period: String,
    },
    /// Clear every usage mark of one cadence for the selected year.
    Reset {
        /// monthly, semi-annual or annual
        cadence: Cadence,
    },
    /// Show or change the selected year.
    Year {
        /// New year, e.g. 2025
        year: Option<i32>,
    },
    /// Write cards, year and usage to a JSON file.
    Export {
        /// Output path (default: <data_dir>/exports/credit-tracker-<year>.json)
        #[arg(long)]
        output: Option<String>,
    },
    /// Load cards, year and usage from an exported JSON file.
    Import {
        /// Path to a JSON file from `credit-tracker export`
        file: String,
    },
}

#[derive(Subcommand)]
pub enum CardsCommands {
    /// List all cards with their totals.
    List,
    /// Show a card with every credit and period.
    Show {
        /// Card id or position
        card: String,
    },
    /// Add a new card.
    Add {
        /// Display name
        #[arg(long)]
        name: Option<String>,
        /// Annual fee; non-numeric input counts as 0
        #[arg(long)]
        fee: Option<String>,
        /// Rewards summary
        #[arg(long)]
        note: Option<String>,
    },
    /// Remove a card. Its usage marks are kept but no longer counted.
    Remove {
        /// Card id or position
        card: String,
    },
    /// Move a card to another position.
    Move {
        /// Card id or position
        card: String,
        /// New 1-based position (clamped to the list)
        to: usize,
    },
    /// Change a card's fields.
    Set {
        /// Card id or position
        card: String,
        #[arg(long)]
        name: Option<String>,
        /// Annual fee; non-numeric input counts as 0
        #[arg(long)]
        fee: Option<String>,
        #[arg(long)]
        note: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum CreditsCommands {
    /// Add a credit to a card (defaults: monthly, $0).
    Add {
        /// Card id or position
        card: String,
        #[arg(long)]
        label: Option<String>,
        /// Value of one occurrence; non-numeric input counts as 0
        #[arg(long)]
        amount: Option<String>,
        /// monthly, semi-annual or annual
        #[arg(long)]
        cadence: Option<Cadence>,
    },
    /// Remove a credit from a card.
    Remove {
        /// Card id or position
        card: String,
        /// Credit id or position on the card
        credit: String,
    },
    /// Change a credit's fields.
    Set {
        /// Card id or position
        card: String,
        /// Credit id or position on the card
        credit: String,
        #[arg(long)]
        label: Option<String>,
        /// Value of one occurrence; non-numeric input counts as 0
        #[arg(long)]
        amount: Option<String>,
        /// monthly, semi-annual or annual
        #[arg(long)]
        cadence: Option<Cadence>,
    },
}
