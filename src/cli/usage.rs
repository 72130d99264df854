use crate::cli::Session;
use crate::error::Result;
use crate::fmt::{money, net};
use crate::ledger::UsageKey;
use crate::models::Cadence;
use crate::period::find_period;
use crate::totals::compute_totals;

pub fn mark(card: &str, credit: &str, period: &str) -> Result<()> {
    let mut session = Session::open();
    let year = session.state.year;
    let catalog = &session.state.catalog;
    let card_index = catalog.resolve_card(card)?;
    let credit_index = catalog.resolve_credit(card_index, credit)?;
    let card = &catalog.cards()[card_index];
    let credit = &card.credits[credit_index];
    let period = find_period(credit.cadence, period)?;

    let key = UsageKey::new(year, &card.id, &credit.id, &period.key);
    let used = session.state.ledger.toggle(key.clone());
    session.save();

    let state = &session.state;
    let Some(card) = state.catalog.card(&key.card_id) else {
        return Ok(());
    };
    if let Some(credit) = card.credit(&key.credit_id) {
        println!(
            "{} {} {year}: {}",
            credit.label,
            period.label,
            if used { "used" } else { "unused" }
        );
    }
    let totals = compute_totals(&state.catalog, &state.ledger, year);
    let t = totals.card(&card.id).copied().unwrap_or_default();
    println!(
        "{}: used {} / {}, remaining {}, net {}",
        card.name,
        money(t.used),
        money(t.available),
        money(t.remaining),
        net(t.net)
    );
    Ok(())
}

pub fn reset(cadence: Cadence) -> Result<()> {
    let mut session = Session::open();
    let year = session.state.year;
    let state = &mut session.state;
    let removed = state.ledger.reset_period(&state.catalog, year, cadence);
    session.save();
    println!("Reset {cadence} credits for {year} ({removed} entries cleared)");
    Ok(())
}

pub fn year(year: Option<i32>) -> Result<()> {
    let mut session = Session::open();
    match year {
        Some(y) => {
            session.state.year = y;
            session.save();
            println!("Selected year: {y}");
        }
        None => println!("{}", session.state.year),
    }
    Ok(())
}
