//! Funnel rate calculations.

use serde::{Deserialize, Serialize};

/// Raw funnel counts for a lead population.
///
/// The expected ordering is `paid <= completed <= started <= signups`; it is
/// not enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FunnelCounts {
    pub signups: u64,
    pub started: u64,
    pub completed: u64,
    pub paid: u64,
    pub refunded: u64,
    pub stuck: u64,
}

/// Percentages derived from [`FunnelCounts`], rounded to whole points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RateSet {
    pub start_rate: f64,
    pub completion_rate: f64,
    pub overall_completion: f64,
    pub paid_conversion: f64,
    pub refund_rate: f64,
}

impl RateSet {
    /// Field labels paired with values, in display order.
    pub fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("startRate", self.start_rate),
            ("completionRate", self.completion_rate),
            ("overallCompletion", self.overall_completion),
            ("paidConversion", self.paid_conversion),
            ("refundRate", self.refund_rate),
        ]
    }
}

/// Compute every rate for a funnel. Empty denominators yield 0.
pub fn compute_rates(counts: &FunnelCounts) -> RateSet {
    RateSet {
        start_rate: percent(counts.started, counts.signups),
        completion_rate: percent(counts.completed, counts.started),
        overall_completion: percent(counts.completed, counts.signups),
        paid_conversion: percent(counts.paid, counts.signups),
        refund_rate: percent(counts.refunded, counts.paid),
    }
}

/// `part / whole * 100`, rounded; 0 when `whole` is 0.
pub fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_half_up(part as f64 / whole as f64 * 100.0)
}

/// Round to the nearest integer with halves going toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
