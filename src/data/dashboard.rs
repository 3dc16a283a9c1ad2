//! Typed view of the `DashboardData` payload served by the dashboard API.

use std::fmt;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::metrics::{delta::WeekSnapshot, rates::FunnelCounts, rates::RateSet};

/// Full dashboard snapshot as returned by `GET /api/admin/leads-dashboard`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardData {
    pub summary: Summary,
    pub funnel: Funnel,
    /// Rates pre-computed upstream; re-derived locally and compared.
    pub rates: Option<RateSet>,
    pub revenue: Revenue,
    pub niche_stats: Vec<NicheStats>,
    pub weekly_cohorts: Vec<WeeklyRow>,
    pub week_over_week: Option<WeekOverWeekInput>,
    pub weekly_trends: Vec<WeeklyRow>,
    pub leads: Vec<Lead>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Summary {
    pub total_leads: u64,
    pub new_this_week: u64,
    pub active_learners: u64,
}

/// Overall funnel counts plus the per-lesson completion ladder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Funnel {
    #[serde(flatten)]
    pub counts: FunnelCounts,
    pub lesson_completions: Vec<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Revenue {
    pub total: f64,
    pub this_week: f64,
    pub refunded: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NicheStats {
    pub niche: String,
    #[serde(flatten)]
    pub counts: FunnelCounts,
    pub revenue: f64,
    pub lesson_completions: Vec<u64>,
}

/// A signup-week bucket, used for both cohorts and trend rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeeklyRow {
    pub week: String,
    #[serde(flatten)]
    pub counts: FunnelCounts,
    pub revenue: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeekOverWeekInput {
    pub current: WeekSnapshot,
    pub previous: WeekSnapshot,
}

/// Case-folded form of a niche/category name used for every comparison.
pub fn niche_key(niche: &str) -> String {
    niche.trim().to_lowercase()
}

/// Whether two niche names refer to the same category.
pub fn niche_eq(a: &str, b: &str) -> bool {
    niche_key(a) == niche_key(b)
}

/// Funnel position of a single lead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Paid,
    Refunded,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "NOT_STARTED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Paid => "PAID",
            Self::Refunded => "REFUNDED",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lead read model; immutable from this crate's point of view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Lead {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub category: Option<String>,
    pub optin_date: Option<DateTime<Utc>>,
    pub lessons_completed: u32,
    pub progress: f64,
    pub status: LeadStatus,
    pub revenue: f64,
    pub courses: Vec<String>,
}

impl Lead {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
