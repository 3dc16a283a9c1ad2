//! CLI entry-point for printing the derived dashboard report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use super::ReportFormat;
use crate::{
    config::Settings,
    data::source::DashboardSource,
    export::format,
    metrics::{self, delta::WeekOverWeekMetric, DashboardReport},
};

/// Args for the `report` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Dashboard JSON snapshot to read instead of the API.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Restrict the report to one niche.
    #[arg(long)]
    pub niche: Option<String>,
    #[arg(long, value_enum, default_value_t = ReportFormat::Json)]
    pub format: ReportFormat,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let source = DashboardSource::resolve(args.input, &settings)?;
    let data = source
        .load(args.niche.as_deref())
        .await
        .context("failed to load dashboard")?;
    let report = metrics::build_report(&data);
    info!(niches = report.niches.len(), cohorts = report.cohorts.len(), "built report");

    let rendered = match args.format {
        ReportFormat::Json => serde_json::to_string_pretty(&report)?,
        ReportFormat::Text => render_text(&report),
    };
    println!("{rendered}");
    Ok(())
}

/// Plain-text rendering of the headline numbers.
pub fn render_text(report: &DashboardReport) -> String {
    let f = &report.funnel;
    let r = &report.rates;
    let mut lines = vec![
        format!(
            "Report generated {}",
            format::display_date(report.generated_at.date_naive())
        ),
        format!(
            "Funnel: {} signups, {} started, {} completed, {} paid, {} refunded, {} stuck",
            f.signups, f.started, f.completed, f.paid, f.refunded, f.stuck
        ),
        format!(
            "Rates: start {}, completion {}, overall {}, paid {}, refund {}",
            format::percent(r.start_rate),
            format::percent(r.completion_rate),
            format::percent(r.overall_completion),
            format::percent(r.paid_conversion),
            format::percent(r.refund_rate),
        ),
        format!(
            "Revenue: {} total, {} this week, {} per signup",
            format::currency(report.revenue.total),
            format::currency(report.revenue.this_week),
            format::currency(report.revenue.revenue_per_signup),
        ),
    ];
    if let Some(point) = report.biggest_dropoff {
        lines.push(format!(
            "Biggest drop-off: lesson {} ({})",
            point.lesson,
            format::percent(point.drop_rate)
        ));
    }
    if let Some(wow) = &report.week_over_week {
        let line = |name: &str, m: &WeekOverWeekMetric| {
            format!(
                "  {name}: {} -> {} ({})",
                m.previous,
                m.current,
                format::delta_percent(m.delta_percent)
            )
        };
        lines.push("Week over week:".to_string());
        lines.push(line("signups", &wow.signups));
        lines.push(line("start rate", &wow.start_rate));
        lines.push(line("completion rate", &wow.completion_rate));
        lines.push(line("paid conversion", &wow.paid_conversion));
        lines.push(format!(
            "  revenue: {} -> {} ({})",
            format::currency(wow.revenue.previous),
            format::currency(wow.revenue.current),
            format::delta_percent(wow.revenue.delta_percent)
        ));
    }
    lines.extend(report.niches.iter().map(|niche| {
        let drop = niche
            .biggest_dropoff
            .map(|p| format!("lesson {} at {}", p.lesson, format::percent(p.drop_rate)))
            .unwrap_or_else(|| "n/a".to_string());
        format!(
            "Niche {}: {} signups, paid {}, revenue {}, biggest drop-off {}",
            niche.niche,
            niche.counts.signups,
            format::percent(niche.rates.paid_conversion),
            format::currency(niche.revenue),
            drop
        )
    }));
    lines.join("\n")
}
