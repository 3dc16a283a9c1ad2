//! Week-over-week deltas.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::rates::round_half_up;

/// One week's headline numbers as sent upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeekSnapshot {
    pub signups: f64,
    pub start_rate: f64,
    pub completion_rate: f64,
    pub paid_conversion: f64,
    pub revenue: f64,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekOverWeekMetric {
    pub current: f64,
    pub previous: f64,
    pub delta: f64,
    /// `None` when there is no prior baseline to compare against.
    pub delta_percent: Option<f64>,
}

/// Deltas for the tracked metric set.
///
/// Rate fields are already percentages, so their `delta` is in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekOverWeek {
    pub signups: WeekOverWeekMetric,
    pub start_rate: WeekOverWeekMetric,
    pub completion_rate: WeekOverWeekMetric,
    pub paid_conversion: WeekOverWeekMetric,
    pub revenue: WeekOverWeekMetric,
}

pub fn delta(current: f64, previous: f64) -> WeekOverWeekMetric {
    let delta = current - previous;
    let delta_percent = if previous > 0.0 {
        Some(round_half_up(delta / previous * 100.0))
    } else {
        None
    };
    WeekOverWeekMetric {
        current,
        previous,
        delta,
        delta_percent,
    }
}

pub fn week_over_week(current: &WeekSnapshot, previous: &WeekSnapshot) -> WeekOverWeek {
    WeekOverWeek {
        signups: delta(current.signups, previous.signups),
        start_rate: delta(current.start_rate, previous.start_rate),
        completion_rate: delta(current.completion_rate, previous.completion_rate),
        paid_conversion: delta(current.paid_conversion, previous.paid_conversion),
        revenue: delta(current.revenue, previous.revenue),
    }
}
