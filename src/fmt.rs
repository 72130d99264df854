use colored::{ColoredString, Colorize};

/// Whole-dollar amount with thousands separators: $1,234 / -$325.
pub fn money(val: f64) -> String {
    let dollars = val.round();
    let negative = dollars < 0.0;
    let digits = format!("{:.0}", dollars.abs());

    let mut with_commas = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("-${with_commas}")
    } else {
        format!("${with_commas}")
    }
}

/// Net value coloured by whether the card has paid for itself.
pub fn net(val: f64) -> ColoredString {
    if val >= 0.0 {
        money(val).green()
    } else {
        money(val).red()
    }
}
