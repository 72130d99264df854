mod catalog;
mod cli;
mod defaults;
mod error;
mod fmt;
mod ledger;
mod models;
mod period;
mod settings;
mod state;
mod store;
mod totals;

use clap::Parser;

use cli::{CardsCommands, Cli, Commands, CreditsCommands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        None | Some(Commands::Summary) => cli::summary::run(),
        Some(Commands::Init { data_dir }) => cli::init::run(data_dir),
        Some(Commands::Status) => cli::status::run(),
        Some(Commands::Cards { command }) => match command {
            CardsCommands::List => cli::cards::list(),
            CardsCommands::Show { card } => cli::cards::show(&card),
            CardsCommands::Add { name, fee, note } => cli::cards::add(name, fee, note),
            CardsCommands::Remove { card } => cli::cards::remove(&card),
            CardsCommands::Move { card, to } => cli::cards::move_to(&card, to),
            CardsCommands::Set {
                card,
                name,
                fee,
                note,
            } => cli::cards::set(&card, name, fee, note),
        },
        Some(Commands::Credits { command }) => match command {
            CreditsCommands::Add {
                card,
                label,
                amount,
                cadence,
            } => cli::credits::add(&card, label, amount, cadence),
            CreditsCommands::Remove { card, credit } => cli::credits::remove(&card, &credit),
            CreditsCommands::Set {
                card,
                credit,
                label,
                amount,
                cadence,
            } => cli::credits::set(&card, &credit, label, amount, cadence),
        },
        Some(Commands::Mark {
            card,
            credit,
            period,
        }) => cli::usage::mark(&card, &credit, &period),
        Some(Commands::Reset { cadence }) => cli::usage::reset(cadence),
        Some(Commands::Year { year }) => cli::usage::year(year),
        Some(Commands::Export { output }) => cli::export::run(output).map(|_| ()),
        Some(Commands::Import { file }) => cli::import::run(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
