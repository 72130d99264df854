use colored::Colorize;

use crate::catalog::{parse_amount, CardPatch};
use crate::cli::summary::totals_table;
use crate::cli::Session;
use crate::error::Result;
use crate::fmt::{money, net};
use crate::ledger::UsageKey;
use crate::period::periods_for_cadence;
use crate::totals::{compute_totals, credit_totals};

pub fn list() -> Result<()> {
    let session = Session::open();
    let state = &session.state;
    let totals = compute_totals(&state.catalog, &state.ledger, state.year);
    println!("Cards ({})\n{}", state.year, totals_table(&totals));
    Ok(())
}

pub fn show(card: &str) -> Result<()> {
    let session = Session::open();
    let state = &session.state;
    let index = state.catalog.resolve_card(card)?;
    let card = &state.catalog.cards()[index];
    let totals = compute_totals(&state.catalog, &state.ledger, state.year);
    let t = totals.card(&card.id).copied().unwrap_or_default();

    println!("{} [{}]", card.name.bold(), card.id);
    if card.rewards_note.is_empty() {
        println!("Annual fee: {}", money(card.annual_fee));
    } else {
        println!("Annual fee: {} \u{2022} {}", money(card.annual_fee), card.rewards_note);
    }
    println!("Net (used - fee) {}: {}", state.year, net(t.net));
    println!(
        "Used {} / {} | Remaining {}",
        money(t.used),
        money(t.available),
        money(t.remaining)
    );

    for (i, credit) in card.credits.iter().enumerate() {
        let row = credit_totals(&card.id, credit, &state.ledger, state.year);
        println!();
        println!(
            "{}. {} ({}) [{}]",
            i + 1,
            credit.label.bold(),
            credit.cadence,
            credit.id
        );
        let periods = periods_for_cadence(credit.cadence);
        println!(
            "   Used {} / {} ({} of {}) \u{2022} Remaining {}",
            money(row.used),
            money(row.available),
            row.used_periods,
            periods.len(),
            money(row.remaining)
        );
        let marks: Vec<String> = periods
            .iter()
            .map(|p| {
                let key = UsageKey::new(state.year, &card.id, &credit.id, &p.key);
                if state.ledger.is_used(&key) {
                    format!("[x] {}", p.label)
                } else {
                    format!("[ ] {}", p.label)
                }
            })
            .collect();
        println!("   {}", marks.join("  "));
    }
    if card.credits.is_empty() {
        println!();
        println!("No credits. Add one with `credit-tracker credits add {}`.", card.id);
    }
    Ok(())
}

pub fn add(name: Option<String>, fee: Option<String>, note: Option<String>) -> Result<()> {
    let mut session = Session::open();
    let mut editor = session.state.catalog.edit();
    let index = editor.add_card();
    editor.update_card(
        index,
        CardPatch {
            name,
            annual_fee: fee.as_deref().map(parse_amount),
            rewards_note: note,
        },
    )?;
    let added = editor.cards()[index].clone();
    session.state.catalog = editor.apply()?;
    session.save();
    println!("Added card: {} [{}]", added.name, added.id);
    Ok(())
}

pub fn remove(card: &str) -> Result<()> {
    let mut session = Session::open();
    let index = session.state.catalog.resolve_card(card)?;
    let mut editor = session.state.catalog.edit();
    let removed = editor.remove_card(index)?;
    session.state.catalog = editor.apply()?;
    session.save();
    println!("Removed card: {} [{}]", removed.name, removed.id);
    Ok(())
}

pub fn move_to(card: &str, to: usize) -> Result<()> {
    let mut session = Session::open();
    let from = session.state.catalog.resolve_card(card)?;
    let mut editor = session.state.catalog.edit();
    let landed = editor.move_card(from, to.saturating_sub(1))?;
    let name = editor.cards()[landed].name.clone();
    session.state.catalog = editor.apply()?;
    session.save();
    println!("Moved {name} to position {}", landed + 1);
    Ok(())
}

pub fn set(
    card: &str,
    name: Option<String>,
    fee: Option<String>,
    note: Option<String>,
) -> Result<()> {
    let mut session = Session::open();
    let index = session.state.catalog.resolve_card(card)?;
    let mut editor = session.state.catalog.edit();
    editor.update_card(
        index,
        CardPatch {
            name,
            annual_fee: fee.as_deref().map(parse_amount),
            rewards_note: note,
        },
    )?;
    let updated = editor.cards()[index].clone();
    session.state.catalog = editor.apply()?;
    session.save();
    println!(
        "Updated card: {} [{}], fee {}",
        updated.name,
        updated.id,
        money(updated.annual_fee)
    );
    Ok(())
}
