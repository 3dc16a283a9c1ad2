//! Lesson-to-lesson drop-off analysis.

use serde::{Deserialize, Serialize};

use super::rates::round_half_up;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropoffPoint {
    /// 1-based lesson number.
    pub lesson: usize,
    pub count: u64,
    /// Share of the previous lesson's completers lost here. Negative when
    /// upstream counts grow between lessons; left unclamped.
    pub drop_rate: f64,
}

/// Drop rate for every lesson after the first.
pub fn analyze(counts: &[u64]) -> Vec<DropoffPoint> {
    counts
        .windows(2)
        .enumerate()
        .map(|(idx, pair)| {
            let (prev, count) = (pair[0], pair[1]);
            let drop_rate = if prev == 0 {
                0.0
            } else {
                round_half_up((prev as f64 - count as f64) / prev as f64 * 100.0)
            };
            DropoffPoint {
                lesson: idx + 2,
                count,
                drop_rate,
            }
        })
        .collect()
}

/// The point with the largest drop rate; the earliest lesson wins ties.
pub fn biggest(points: &[DropoffPoint]) -> Option<DropoffPoint> {
    points.iter().copied().fold(None, |best, point| match best {
        Some(b) if b.drop_rate >= point.drop_rate => Some(b),
        _ => Some(point),
    })
}
