use crate::catalog::{parse_amount, CreditPatch};
use crate::cli::Session;
use crate::error::Result;
use crate::fmt::money;
use crate::models::Cadence;

pub fn add(
    card: &str,
    label: Option<String>,
    amount: Option<String>,
    cadence: Option<Cadence>,
) -> Result<()> {
    let mut session = Session::open();
    let card_index = session.state.catalog.resolve_card(card)?;
    let mut editor = session.state.catalog.edit();
    let credit_index = editor.add_credit(card_index)?;
    editor.update_credit(
        card_index,
        credit_index,
        CreditPatch {
            label,
            amount: amount.as_deref().map(parse_amount),
            cadence,
        },
    )?;
    let card = &editor.cards()[card_index];
    let credit = card.credits[credit_index].clone();
    let card_name = card.name.clone();
    session.state.catalog = editor.apply()?;
    session.save();
    println!(
        "Added credit to {card_name}: {} [{}], {} {}",
        credit.label,
        credit.id,
        money(credit.amount),
        credit.cadence
    );
    Ok(())
}

pub fn remove(card: &str, credit: &str) -> Result<()> {
    let mut session = Session::open();
    let card_index = session.state.catalog.resolve_card(card)?;
    let credit_index = session.state.catalog.resolve_credit(card_index, credit)?;
    let mut editor = session.state.catalog.edit();
    let removed = editor.remove_credit(card_index, credit_index)?;
    session.state.catalog = editor.apply()?;
    session.save();
    println!("Removed credit: {} [{}]", removed.label, removed.id);
    Ok(())
}

pub fn set(
    card: &str,
    credit: &str,
    label: Option<String>,
    amount: Option<String>,
    cadence: Option<Cadence>,
) -> Result<()> {
    let mut session = Session::open();
    let card_index = session.state.catalog.resolve_card(card)?;
    let credit_index = session.state.catalog.resolve_credit(card_index, credit)?;
    let mut editor = session.state.catalog.edit();
    editor.update_credit(
        card_index,
        credit_index,
        CreditPatch {
            label,
            amount: amount.as_deref().map(parse_amount),
            cadence,
        },
    )?;
    let updated = editor.cards()[card_index].credits[credit_index].clone();
    session.state.catalog = editor.apply()?;
    session.save();
    println!(
        "Updated credit: {} [{}], {} {}",
        updated.label,
        updated.id,
        money(updated.amount),
        updated.cadence
    );
    Ok(())
}
