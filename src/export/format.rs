//! Display strings for currency, percentages and dates (en-US).

use chrono::NaiveDate;

/// Whole-dollar en-US currency, e.g. `$1,234` or `-$1,500`.
pub fn currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}${}", group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn percent(value: f64) -> String {
    format!("{value}%")
}

/// Signed percent change; a missing baseline renders as `0%`.
pub fn delta_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v > 0.0 => format!("+{v}%"),
        Some(v) if v < 0.0 => format!("{v}%"),
        _ => "0%".to_string(),
    }
}

/// `Mon D, YYYY`, e.g. `Oct 9, 2026`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
