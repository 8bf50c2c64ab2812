use crate::common::*;

use crate::dto::panel::{
    Panel, bar_panel::*, breakdown_panel::*, drilldown_panel::*, kpi_panel::*, trend_panel::*,
};
use crate::enums::{breakdown_mode::*, performance_status::*};
use crate::errors::dashboard_error::*;
use crate::model::configs::projection_config::*;
use crate::model::metric::enriched_table::*;
use crate::traits::service_traits::panel_service::*;

const PERIOD_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/* Demo distribution rendered when the dataset has fewer than three rows. */
const PLACEHOLDER_LABELS: [&str; 4] = ["Healthy Accounts", "At Risk", "Critical", "New Accounts"];
const PLACEHOLDER_VALUES: [f64; 4] = [60.0, 25.0, 10.0, 5.0];
const PLACEHOLDER_STATUSES: [PerformanceStatus; 4] = [
    PerformanceStatus::ExceedsTarget,
    PerformanceStatus::AboveBenchmark,
    PerformanceStatus::BelowBenchmark,
    PerformanceStatus::BelowBenchmark,
];

#[derive(Debug, Clone, new)]
pub struct PanelServiceImpl {
    projection: ProjectionConfig,
}

impl PanelServiceImpl {
    #[doc = "
        Every builder validates the rows it consumes. A non-finite value
        fails that one panel with an error naming the panel and the metric;
        siblings are unaffected.
    "]
    fn ensure_finite(panel: &'static str, table: &EnrichedTable) -> anyhow::Result<()> {
        for row in table.rows() {
            if !row.value.is_finite() {
                return Err(DashboardError::PanelBuild {
                    panel,
                    reason: format!("metric '{}' has a non-finite value", row.metric),
                }
                .into());
            }
        }

        Ok(())
    }
}

impl PanelService for PanelServiceImpl {
    fn build_kpi_panel(&self, table: &EnrichedTable) -> anyhow::Result<KpiPanel> {
        Self::ensure_finite("Portfolio Health Overview", table)?;

        Ok(KpiPanel::new(
            table.total_value(),
            table.benchmark_total(),
            table.target_total(),
        ))
    }

    fn build_bar_panel(&self, table: &EnrichedTable) -> anyhow::Result<BarPanel> {
        Self::ensure_finite("Performance vs Benchmarks", table)?;

        let categories: Vec<String> =
            table.rows().iter().map(|row| row.metric.clone()).collect();
        let values: Vec<f64> = table.rows().iter().map(|row| row.value).collect();
        let vs_benchmark: Vec<f64> = table.rows().iter().map(|row| row.vs_benchmark).collect();
        let vs_target: Vec<f64> = table.rows().iter().map(|row| row.vs_target).collect();

        Ok(BarPanel::new(
            categories,
            values,
            vs_benchmark,
            vs_target,
            *table.benchmark(),
            *table.target(),
        ))
    }

    fn build_trend_panel(&self, table: &EnrichedTable) -> anyhow::Result<TrendPanel> {
        Self::ensure_finite("Trend Projection with Targets", table)?;

        let periods: usize = (*self.projection.periods()).clamp(1, PERIOD_LABELS.len());
        let base_value: f64 = table.mean_value();
        let growth_rate: f64 = *self.projection.growth_rate();
        let reference_growth_rate: f64 = *self.projection.reference_growth_rate();

        let period_labels: Vec<String> = PERIOD_LABELS[..periods]
            .iter()
            .map(|label| label.to_string())
            .collect();

        let projected_values: Vec<f64> = (0..periods)
            .map(|i| base_value * (1.0 + i as f64 * growth_rate))
            .collect();
        let benchmark_trend: Vec<f64> = (0..periods)
            .map(|i| table.benchmark() * (1.0 + i as f64 * reference_growth_rate))
            .collect();
        let target_trend: Vec<f64> = (0..periods)
            .map(|i| table.target() * (1.0 + i as f64 * reference_growth_rate))
            .collect();

        Ok(TrendPanel::new(
            period_labels,
            projected_values,
            benchmark_trend,
            target_trend,
            growth_rate,
        ))
    }

    fn build_breakdown_panel(&self, table: &EnrichedTable) -> anyhow::Result<BreakdownPanel> {
        /* Fewer than three rows renders the fixed demo distribution, which
        consumes no row values and therefore never fails on them. */
        if table.row_count() < 3 {
            return Ok(BreakdownPanel::new(
                BreakdownMode::PlaceholderDistribution,
                PLACEHOLDER_LABELS.iter().map(|s| s.to_string()).collect(),
                PLACEHOLDER_VALUES.to_vec(),
                PLACEHOLDER_STATUSES.to_vec(),
            ));
        }

        Self::ensure_finite("Distribution & Drill-Down", table)?;

        let labels: Vec<String> = table.rows().iter().map(|row| row.metric.clone()).collect();
        let values: Vec<f64> = table.rows().iter().map(|row| row.value).collect();
        let statuses: Vec<PerformanceStatus> =
            table.rows().iter().map(|row| row.status()).collect();

        Ok(BreakdownPanel::new(
            BreakdownMode::RealDistribution,
            labels,
            values,
            statuses,
        ))
    }

    fn build_drilldown_panel(&self, table: &EnrichedTable) -> anyhow::Result<DrilldownPanel> {
        Self::ensure_finite("Detailed Metrics Table", table)?;

        let rows: Vec<DrilldownRow> = table
            .rows()
            .iter()
            .map(|row| {
                DrilldownRow::new(
                    row.metric.clone(),
                    row.value,
                    row.benchmark,
                    row.target,
                    row.vs_benchmark,
                    row.status(),
                    row.action(),
                )
            })
            .collect();

        Ok(DrilldownPanel::new(rows))
    }

    fn build_placeholder_panel(&self) -> anyhow::Result<Panel> {
        /* Reserved grid cell, intentionally empty. */
        Ok(Panel::Placeholder)
    }

    fn build_all(&self, table: &EnrichedTable) -> (Vec<Panel>, Vec<anyhow::Error>) {
        let builds: Vec<anyhow::Result<Panel>> = vec![
            self.build_kpi_panel(table).map(Panel::Kpi),
            self.build_bar_panel(table).map(Panel::Bar),
            self.build_trend_panel(table).map(Panel::Trend),
            self.build_breakdown_panel(table).map(Panel::Breakdown),
            self.build_drilldown_panel(table).map(Panel::Drilldown),
            self.build_placeholder_panel(),
        ];

        let mut panels: Vec<Panel> = Vec::new();
        let mut failures: Vec<anyhow::Error> = Vec::new();

        for build in builds {
            match build {
                Ok(panel) => panels.push(panel),
                Err(e) => failures.push(e),
            }
        }

        (panels, failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::action_item::*;
    use crate::model::metric::enriched_metric::*;

    fn service() -> PanelServiceImpl {
        PanelServiceImpl::new(ProjectionConfig::default())
    }

    fn enriched(metric: &str, value: f64) -> EnrichedMetric {
        let benchmark: f64 = 220.0;
        let target: f64 = 240.0;
        EnrichedMetric::new(
            metric.to_string(),
            value,
            benchmark,
            target,
            (value - benchmark) / benchmark * 100.0,
            (value - target) / target * 100.0,
        )
    }

    fn three_row_table() -> EnrichedTable {
        EnrichedTable::new(
            vec![
                enriched("A", 100.0),
                enriched("B", 200.0),
                enriched("C", 300.0),
            ],
            220.0,
            240.0,
        )
    }

    #[test]
    fn kpi_panel_sums_against_scaled_references() {
        let panel: KpiPanel = service().build_kpi_panel(&three_row_table()).unwrap();

        assert_eq!(*panel.total_value(), 600.0);
        assert!((panel.benchmark_total() - 660.0).abs() < 1e-9);
        assert!((panel.target_total() - 720.0).abs() < 1e-9);
    }

    #[test]
    fn bar_panel_colors_by_benchmark() {
        let panel: BarPanel = service().build_bar_panel(&three_row_table()).unwrap();

        assert_eq!(panel.bar_colors(), vec!["#e74c3c", "#e74c3c", "#2ecc71"]);
        assert_eq!(*panel.benchmark(), 220.0);
        assert_eq!(*panel.target(), 240.0);
    }

    #[test]
    fn trend_panel_projects_from_the_mean() {
        let panel: TrendPanel = service().build_trend_panel(&three_row_table()).unwrap();

        assert_eq!(panel.period_labels().len(), 6);
        assert_eq!(panel.period_labels()[0], "Jan");

        /* mean = 200, +5% per period */
        assert!((panel.projected_values()[0] - 200.0).abs() < 1e-9);
        assert!((panel.projected_values()[1] - 210.0).abs() < 1e-9);
        assert!((panel.projected_values()[5] - 250.0).abs() < 1e-9);

        /* references grow at +3% per period */
        assert!((panel.benchmark_trend()[1] - 220.0 * 1.03).abs() < 1e-9);
        assert!((panel.target_trend()[1] - 240.0 * 1.03).abs() < 1e-9);
    }

    #[test]
    fn breakdown_uses_real_distribution_at_three_rows() {
        let panel: BreakdownPanel = service().build_breakdown_panel(&three_row_table()).unwrap();

        assert_eq!(*panel.mode(), BreakdownMode::RealDistribution);
        assert_eq!(panel.labels(), &vec!["A", "B", "C"]);
        assert_eq!(panel.values(), &vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn breakdown_falls_back_to_placeholder_below_three_rows() {
        let table: EnrichedTable = EnrichedTable::new(
            vec![enriched("A", 100.0), enriched("B", 200.0)],
            220.0,
            240.0,
        );

        let panel: BreakdownPanel = service().build_breakdown_panel(&table).unwrap();

        assert_eq!(*panel.mode(), BreakdownMode::PlaceholderDistribution);
        assert_eq!(panel.values(), &vec![60.0, 25.0, 10.0, 5.0]);
        assert_eq!(panel.labels().len(), 4);
    }

    #[test]
    fn drilldown_rows_carry_status_and_action() {
        let panel: DrilldownPanel = service().build_drilldown_panel(&three_row_table()).unwrap();

        assert_eq!(panel.rows().len(), 3);
        assert_eq!(*panel.rows()[0].status(), PerformanceStatus::BelowBenchmark);
        assert_eq!(*panel.rows()[0].action(), ActionItem::UrgentAction);
        assert_eq!(*panel.rows()[2].status(), PerformanceStatus::ExceedsTarget);
        assert_eq!(*panel.rows()[2].action(), ActionItem::Maintain);
    }

    #[test]
    fn non_finite_value_fails_one_panel_with_its_name() {
        let table: EnrichedTable =
            EnrichedTable::new(vec![enriched("Poisoned", f64::NAN)], 220.0, 240.0);

        let err = service().build_kpi_panel(&table).unwrap_err();

        match err.downcast_ref::<DashboardError>() {
            Some(DashboardError::PanelBuild { panel, reason }) => {
                assert_eq!(*panel, "Portfolio Health Overview");
                assert!(reason.contains("Poisoned"));
            }
            other => panic!("expected PanelBuild error, got {:?}", other),
        }
    }

    #[test]
    fn panel_failures_are_isolated_in_build_all() {
        /* One NaN row poisons every value-consuming panel, but the
        placeholder-mode breakdown and the reserved cell still build. */
        let table: EnrichedTable =
            EnrichedTable::new(vec![enriched("Poisoned", f64::NAN)], 220.0, 240.0);

        let (panels, failures) = service().build_all(&table);

        assert_eq!(panels.len(), 2);
        assert_eq!(failures.len(), 4);
        assert!(matches!(panels[0], Panel::Breakdown(_)));
        assert!(matches!(panels[1], Panel::Placeholder));
    }

    #[test]
    fn healthy_table_builds_all_six_panels() {
        let (panels, failures) = service().build_all(&three_row_table());

        assert_eq!(panels.len(), 6);
        assert!(failures.is_empty());
    }
}
