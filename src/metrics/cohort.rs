//! Rates per weekly cohort or trend row.

use serde::{Deserialize, Serialize};

use super::rates::{compute_rates, FunnelCounts, RateSet};
use crate::data::dashboard::WeeklyRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortReport {
    pub week: String,
    pub counts: FunnelCounts,
    pub rates: RateSet,
    pub revenue: f64,
}

pub fn cohort_rates(rows: &[WeeklyRow]) -> Vec<CohortReport> {
    rows.iter()
        .map(|row| CohortReport {
            week: row.week.clone(),
            counts: row.counts,
            rates: compute_rates(&row.counts),
            revenue: row.revenue,
        })
        .collect()
}
