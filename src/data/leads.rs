//! Filtering and sorting of the lead list ahead of export.

use std::cmp::Ordering;

use clap::{Args, ValueEnum};
use serde::Deserialize;

use super::dashboard::{niche_eq, Lead, LeadStatus};

/// Sort key for the lead table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    #[default]
    OptinDate,
    Progress,
    Revenue,
    Email,
    Name,
}

/// Filter and sort options shared by the CLI and the HTTP export route.
#[derive(Debug, Clone, Default, Args, Deserialize)]
#[serde(default)]
pub struct LeadQuery {
    /// Case-insensitive match on email or name.
    #[arg(long)]
    pub search: Option<String>,
    /// Only leads with this funnel status.
    #[arg(long, value_enum)]
    pub status: Option<LeadStatus>,
    /// Only leads in this category.
    #[arg(long)]
    pub niche: Option<String>,
    /// Column to sort by.
    #[arg(long, value_enum, default_value_t = SortField::OptinDate)]
    pub sort: SortField,
    /// Sort ascending instead of descending.
    #[arg(long)]
    pub ascending: bool,
}

impl LeadQuery {
    pub fn matches(&self, lead: &Lead) -> bool {
        if let Some(status) = self.status {
            if lead.status != status {
                return false;
            }
        }
        if let Some(niche) = self.niche.as_deref() {
            let in_niche = lead
                .category
                .as_deref()
                .is_some_and(|c| niche_eq(c, niche));
            if !in_niche {
                return false;
            }
        }
        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => {
                let needle = needle.to_lowercase();
                let full_name = lead.full_name();
                let fields = [
                    lead.email.as_str(),
                    lead.first_name.as_str(),
                    lead.last_name.as_str(),
                    full_name.as_str(),
                ];
                fields
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
            _ => true,
        }
    }

    /// Apply filters, then a stable sort.
    pub fn apply(&self, leads: &[Lead]) -> Vec<Lead> {
        let mut out: Vec<Lead> = leads.iter().filter(|l| self.matches(l)).cloned().collect();
        out.sort_by(|a, b| {
            let ord = compare(self.sort, a, b);
            if self.ascending {
                ord
            } else {
                ord.reverse()
            }
        });
        out
    }
}

fn compare(field: SortField, a: &Lead, b: &Lead) -> Ordering {
    match field {
        SortField::OptinDate => a.optin_date.cmp(&b.optin_date),
        SortField::Progress => a.progress.partial_cmp(&b.progress).unwrap_or(Ordering::Equal),
        SortField::Revenue => a.revenue.partial_cmp(&b.revenue).unwrap_or(Ordering::Equal),
        SortField::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
        SortField::Name => a
            .full_name()
            .to_lowercase()
            .cmp(&b.full_name().to_lowercase()),
    }
}
