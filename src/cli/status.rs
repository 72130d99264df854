use std::collections::BTreeMap;

use crate::cli::Session;
use crate::error::Result;
use crate::models::Cadence;

pub fn run() -> Result<()> {
    let session = Session::open();
    let path = session.store.path();

    println!("Data dir:    {}", session.settings.data_dir);
    println!("State file:  {}", path.display());
    if path.exists() {
        let size = std::fs::metadata(path)?.len();
        println!("File size:   {size} bytes");
    } else {
        println!("File size:   (not saved yet, showing defaults)");
    }

    let state = &session.state;
    println!();
    println!("Year:          {}", state.year);
    println!("Cards:         {}", state.catalog.len());
    let by_cadence: Vec<String> = Cadence::ALL
        .iter()
        .map(|c| {
            let n = state
                .catalog
                .cards()
                .iter()
                .flat_map(|card| &card.credits)
                .filter(|credit| credit.cadence == *c)
                .count();
            format!("{n} {c}")
        })
        .collect();
    println!(
        "Credits:       {} ({})",
        state.catalog.credit_count(),
        by_cadence.join(", ")
    );
    if state.ledger.is_empty() {
        println!("Usage entries: none");
    } else {
        println!("Usage entries: {} ({} used)", state.ledger.len(), state.ledger.used_count());
        let mut per_year: BTreeMap<i32, usize> = BTreeMap::new();
        for (key, used) in state.ledger.iter() {
            if used {
                *per_year.entry(key.year).or_default() += 1;
            }
        }
        if !per_year.is_empty() {
            let years: Vec<String> = per_year
                .iter()
                .map(|(year, n)| format!("{year}: {n}"))
                .collect();
            println!("Used by year:  {}", years.join(", "));
        }
    }
    Ok(())
}
