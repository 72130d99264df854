use crate::cli::Session;
use crate::error::Result;

pub fn run(file: &str) -> Result<()> {
    let content = std::fs::read_to_string(file)?;
    let mut session = Session::open();
    session.state.import(&content)?;
    session.save();

    let state = &session.state;
    println!("Imported {file}");
    println!(
        "{} cards, {} credits, year {}, {} usage entries",
        state.catalog.len(),
        state.catalog.credit_count(),
        state.year,
        state.ledger.len()
    );
    Ok(())
}
