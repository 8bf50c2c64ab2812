use crate::common::*;

use crate::dto::{dashboard_document::*, dashboard_summary::*, insight_banner::*, panel::*};
use crate::enums::insight_tone::*;
use crate::model::metric::enriched_table::*;
use crate::traits::service_traits::layout_service::*;

const DASHBOARD_TITLE: &str = "Executive Account Health Dashboard";
const DASHBOARD_SUBTITLE: &str =
    "Performance Analysis with Industry Benchmarks & Drill-Down Capabilities";

/* Fixed 3-row grid: KPI/bar row, trend/breakdown row, full-width table row. */
const ROW_HEIGHTS: [f64; 3] = [0.30, 0.35, 0.35];

#[derive(Debug, Clone, new)]
pub struct LayoutServiceImpl;

impl LayoutService for LayoutServiceImpl {
    fn compose(&self, panels: Vec<Panel>, table: &EnrichedTable) -> DashboardDocument {
        let avg_vs_benchmark: f64 = table.avg_vs_benchmark();

        let summary: DashboardSummary = DashboardSummary::new(
            table.total_value(),
            table.benchmark_total(),
            table.target_total(),
            avg_vs_benchmark,
        );

        let insight: InsightBanner = self.render_insight(avg_vs_benchmark);

        let panel_names: Vec<&str> = panels.iter().map(|panel| panel.name()).collect();
        info!(
            "[LayoutServiceImpl->compose] Composed {} panels {:?} (avg vs benchmark: {:+.1}%)",
            panels.len(),
            panel_names,
            avg_vs_benchmark
        );

        DashboardDocument::new(
            DASHBOARD_TITLE.to_string(),
            DASHBOARD_SUBTITLE.to_string(),
            panels,
            ROW_HEIGHTS,
            insight,
            summary,
        )
    }

    fn render_insight(&self, avg_vs_benchmark: f64) -> InsightBanner {
        if avg_vs_benchmark >= 10.0 {
            InsightBanner::new(
                InsightTone::Positive,
                format!(
                    "Excellent Performance: portfolio exceeds industry benchmark by {:.1}% on average",
                    avg_vs_benchmark
                ),
            )
        } else if avg_vs_benchmark >= 0.0 {
            InsightBanner::new(
                InsightTone::Neutral,
                format!(
                    "Competitive Position: portfolio performing {:.1}% above benchmark with growth opportunities",
                    avg_vs_benchmark
                ),
            )
        } else {
            InsightBanner::new(
                InsightTone::Warning,
                format!(
                    "Action Required: portfolio {:.1}% below benchmark - review underperforming segments",
                    avg_vs_benchmark.abs()
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::metric::enriched_metric::*;

    fn table_with_deviation(vs_benchmark: f64) -> EnrichedTable {
        let row: EnrichedMetric = EnrichedMetric::new(
            "A".to_string(),
            100.0,
            220.0,
            240.0,
            vs_benchmark,
            vs_benchmark,
        );
        EnrichedTable::new(vec![row], 220.0, 240.0)
    }

    #[test]
    fn insight_tiers_are_framed_by_average_deviation() {
        let layout: LayoutServiceImpl = LayoutServiceImpl::new();

        assert_eq!(*layout.render_insight(12.0).tone(), InsightTone::Positive);
        assert_eq!(*layout.render_insight(10.0).tone(), InsightTone::Positive);
        assert_eq!(*layout.render_insight(9.9).tone(), InsightTone::Neutral);
        assert_eq!(*layout.render_insight(0.0).tone(), InsightTone::Neutral);
        assert_eq!(*layout.render_insight(-0.1).tone(), InsightTone::Warning);
    }

    #[test]
    fn warning_text_reports_the_absolute_deviation() {
        let layout: LayoutServiceImpl = LayoutServiceImpl::new();

        let banner: InsightBanner = layout.render_insight(-7.5);

        assert!(banner.text().contains("7.5% below benchmark"));
    }

    #[test]
    fn composition_is_deterministic() {
        let layout: LayoutServiceImpl = LayoutServiceImpl::new();
        let table: EnrichedTable = table_with_deviation(-54.5);

        let first: DashboardDocument = layout.compose(Vec::new(), &table);
        let second: DashboardDocument = layout.compose(Vec::new(), &table);

        assert_eq!(first.summary(), second.summary());
        assert_eq!(first.row_heights(), &[0.30, 0.35, 0.35]);
    }
}
