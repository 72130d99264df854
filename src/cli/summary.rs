use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::Session;
use crate::error::Result;
use crate::fmt::{money, net};
use crate::totals::{compute_totals, Totals};

pub(crate) fn totals_table(totals: &Totals) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Card", "Fee", "Available", "Used", "Remaining", "Net"]);
    for (i, s) in totals.per_card.iter().enumerate() {
        let t = &s.totals;
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format!("{} [{}]", s.name, s.card_id)),
            Cell::new(money(t.fee)),
            Cell::new(money(t.available)),
            Cell::new(money(t.used)),
            Cell::new(money(t.remaining)),
            Cell::new(net(t.net)),
        ]);
    }
    table
}

pub fn run() -> Result<()> {
    let session = Session::open();
    let state = &session.state;
    let totals = compute_totals(&state.catalog, &state.ledger, state.year);
    let g = &totals.grand;

    println!("{}", format!("Credits for {}", state.year).bold());
    println!();
    println!("Total Credits:     {}", money(g.available));
    println!("Credits Used:      {}", money(g.used));
    println!("Remaining:         {}", money(g.remaining));
    println!("Annual Fees:       {}", money(g.fee));
    let verdict = if g.net >= 0.0 { "net positive" } else { "net negative" };
    println!("Net (Used - Fees): {} ({verdict})", net(g.net));

    if state.catalog.is_empty() {
        println!();
        println!("No cards yet. Add one with `credit-tracker cards add`.");
        return Ok(());
    }

    println!();
    println!("{}", totals_table(&totals));
    Ok(())
}
