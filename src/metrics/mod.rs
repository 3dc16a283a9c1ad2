//! Funnel and cohort metrics layer.

pub mod cohort;
pub mod delta;
pub mod dropoff;
pub mod rates;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use tracing::{debug, warn};

use crate::data::dashboard::{niche_key, DashboardData, Lead, Summary};
use cohort::CohortReport;
use delta::WeekOverWeek;
use dropoff::DropoffPoint;
use rates::{FunnelCounts, RateSet};

/// Upstream and derived rates may differ by rounding alone.
const RATE_TOLERANCE: f64 = 1.0;

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub summary: Summary,
    pub funnel: FunnelCounts,
    pub rates: RateSet,
    pub dropoff: Vec<DropoffPoint>,
    pub biggest_dropoff: Option<DropoffPoint>,
    pub week_over_week: Option<WeekOverWeek>,
    pub niches: Vec<NicheReport>,
    pub cohorts: Vec<CohortReport>,
    pub trends: Vec<CohortReport>,
    pub revenue: RevenueReport,
    pub generated_at: DateTime<Utc>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheReport {
    pub niche: String,
    pub counts: FunnelCounts,
    pub rates: RateSet,
    pub revenue: f64,
    /// Leads in the snapshot's lead list carrying this category.
    pub leads: usize,
    pub dropoff: Vec<DropoffPoint>,
    pub biggest_dropoff: Option<DropoffPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReport {
    pub total: f64,
    pub this_week: f64,
    pub refunded: f64,
    pub revenue_per_signup: f64,
}

/// Derive every dashboard metric from a single snapshot.
pub fn build_report(data: &DashboardData) -> DashboardReport {
    let counts = data.funnel.counts;
    let derived = rates::compute_rates(&counts);
    if let Some(upstream) = &data.rates {
        compare_rates(upstream, &derived);
    }

    let dropoff = dropoff::analyze(&data.funnel.lesson_completions);
    let biggest_dropoff = dropoff::biggest(&dropoff);

    let week_over_week = data
        .week_over_week
        .as_ref()
        .map(|wow| delta::week_over_week(&wow.current, &wow.previous));

    let lead_counts = leads_per_niche(&data.leads);
    let niches = data
        .niche_stats
        .iter()
        .map(|stats| {
            let points = dropoff::analyze(&stats.lesson_completions);
            let biggest = dropoff::biggest(&points);
            if let Some(point) = biggest {
                debug!(
                    niche = %stats.niche,
                    lesson = point.lesson,
                    drop_rate = point.drop_rate,
                    "biggest drop-off"
                );
            }
            NicheReport {
                niche: stats.niche.clone(),
                counts: stats.counts,
                rates: rates::compute_rates(&stats.counts),
                revenue: stats.revenue,
                leads: lead_counts
                    .get(&niche_key(&stats.niche))
                    .copied()
                    .unwrap_or(0),
                dropoff: points,
                biggest_dropoff: biggest,
            }
        })
        .collect();

    let revenue_per_signup = if counts.signups == 0 {
        0.0
    } else {
        data.revenue.total / counts.signups as f64
    };

    DashboardReport {
        summary: data.summary.clone(),
        funnel: counts,
        rates: derived,
        dropoff,
        biggest_dropoff,
        week_over_week,
        niches,
        cohorts: cohort::cohort_rates(&data.weekly_cohorts),
        trends: cohort::cohort_rates(&data.weekly_trends),
        revenue: RevenueReport {
            total: data.revenue.total,
            this_week: data.revenue.this_week,
            refunded: data.revenue.refunded,
            revenue_per_signup,
        },
        generated_at: Utc::now(),
    }
}

fn compare_rates(upstream: &RateSet, derived: &RateSet) {
    for ((name, sent), (_, computed)) in upstream.fields().into_iter().zip(derived.fields()) {
        if (sent - computed).abs() > RATE_TOLERANCE {
            warn!(
                rate = name,
                upstream = sent,
                derived = computed,
                "upstream rate disagrees with funnel counts"
            );
        }
    }
}

/// Lead counts keyed by [`niche_key`], in first-seen order.
fn leads_per_niche(leads: &[Lead]) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for lead in leads {
        if let Some(category) = &lead.category {
            *counts.entry(niche_key(category)).or_insert(0) += 1;
        }
    }
    counts
}
