//! Lead table serialisation.
//!
//! The default [`ExportStyle::Literal`] joins fields with bare commas and
//! does not escape them, so a comma inside a name or category shifts the
//! columns of that row. [`ExportStyle::Quoted`] is the RFC 4180 variant for
//! consumers that need it.

use anyhow::Result;
use clap::ValueEnum;
use serde::Deserialize;

use super::format;
use crate::{data::dashboard::Lead, metrics::rates::round_half_up};

pub const HEADER: [&str; 11] = [
    "Email",
    "First Name",
    "Last Name",
    "Phone",
    "Category",
    "Optin Date",
    "Lessons",
    "Progress",
    "Status",
    "Revenue",
    "Courses",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ExportStyle {
    #[default]
    Literal,
    Quoted,
}

/// Revenue cell: `$<amount>` for positive amounts, otherwise empty.
pub fn revenue_cell(amount: f64) -> String {
    if amount > 0.0 {
        format!("${amount}")
    } else {
        String::new()
    }
}

fn row(lead: &Lead) -> [String; 11] {
    [
        lead.email.clone(),
        lead.first_name.clone(),
        lead.last_name.clone(),
        lead.phone.clone().unwrap_or_default(),
        lead.category.clone().unwrap_or_default(),
        lead.optin_date
            .map(|d| format::iso_date(d.date_naive()))
            .unwrap_or_default(),
        lead.lessons_completed.to_string(),
        format!("{}%", round_half_up(lead.progress)),
        lead.status.to_string(),
        revenue_cell(lead.revenue),
        lead.courses.join("; "),
    ]
}

impl ExportStyle {
    fn quote_style(self) -> ::csv::QuoteStyle {
        match self {
            Self::Literal => ::csv::QuoteStyle::Never,
            Self::Quoted => ::csv::QuoteStyle::Necessary,
        }
    }
}

/// Render the header plus one line per lead, joined by `\n` with no
/// trailing newline.
pub fn render(leads: &[Lead], style: ExportStyle) -> Result<String> {
    let mut writer = ::csv::WriterBuilder::new()
        .quote_style(style.quote_style())
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for lead in leads {
        writer.write_record(row(lead))?;
    }
    let text = String::from_utf8(writer.into_inner()?)?;
    Ok(text.trim_end_matches('\n').to_string())
}
