use crate::common::*;

use crate::errors::dashboard_error::*;
use crate::model::configs::benchmark_config::*;
use crate::model::metric::{enriched_metric::*, enriched_table::*, metric_row::*};
use crate::traits::service_traits::enrichment_service::*;
use crate::utils_modules::format_utils::*;

#[derive(Debug, Clone, new)]
pub struct EnrichmentServiceImpl {
    config: BenchmarkConfig,
}

impl EnrichmentServiceImpl {
    fn pct_deviation(value: f64, reference: f64) -> f64 {
        round_one_decimal((value - reference) / reference * 100.0)
    }
}

impl EnrichmentService for EnrichmentServiceImpl {
    fn enrich(&self, rows: &[MetricRow]) -> anyhow::Result<EnrichedTable> {
        if rows.is_empty() {
            return Err(DashboardError::EmptyDataset.into());
        }

        let mean: f64 = rows.iter().map(|row| row.value).sum::<f64>() / rows.len() as f64;

        /* A zero mean makes both references zero and every deviation a
        division by zero. Refusing the dataset beats propagating NaN into
        every panel. */
        if mean == 0.0 {
            return Err(DashboardError::DegenerateDataset.into());
        }

        let benchmark: f64 = mean * self.config.benchmark_multiplier;
        let target: f64 = mean * self.config.target_multiplier;

        let enriched_rows: Vec<EnrichedMetric> = rows
            .iter()
            .map(|row| {
                EnrichedMetric::new(
                    row.metric.clone(),
                    row.value,
                    benchmark,
                    target,
                    Self::pct_deviation(row.value, benchmark),
                    Self::pct_deviation(row.value, target),
                )
            })
            .collect();

        info!(
            "[EnrichmentServiceImpl->enrich] Enriched {} rows (mean: {:.2}, benchmark: {:.2}, target: {:.2})",
            enriched_rows.len(),
            mean,
            benchmark,
            target
        );

        Ok(EnrichedTable::new(enriched_rows, benchmark, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::performance_status::*;

    fn service() -> EnrichmentServiceImpl {
        EnrichmentServiceImpl::new(BenchmarkConfig::default())
    }

    fn sample_rows() -> Vec<MetricRow> {
        vec![
            MetricRow::new("A".to_string(), 100.0),
            MetricRow::new("B".to_string(), 200.0),
            MetricRow::new("C".to_string(), 300.0),
        ]
    }

    #[test]
    fn references_are_fixed_multiples_of_the_mean() {
        let table: EnrichedTable = service().enrich(&sample_rows()).unwrap();

        /* mean = 200 -> benchmark = 220, target = 240 */
        assert!((table.benchmark - 220.0).abs() < 1e-9);
        assert!((table.target - 240.0).abs() < 1e-9);

        for row in table.rows() {
            assert_eq!(*row.benchmark(), table.benchmark);
            assert_eq!(*row.target(), table.target);
        }
    }

    #[test]
    fn deviations_recompute_at_one_decimal() {
        let table: EnrichedTable = service().enrich(&sample_rows()).unwrap();

        for row in table.rows() {
            let expected_vs_benchmark: f64 =
                round_one_decimal((row.value - table.benchmark) / table.benchmark * 100.0);
            let expected_vs_target: f64 =
                round_one_decimal((row.value - table.target) / table.target * 100.0);

            assert_eq!(row.vs_benchmark, expected_vs_benchmark);
            assert_eq!(row.vs_target, expected_vs_target);
        }
    }

    #[test]
    fn classification_scenario_matches_tiers() {
        let table: EnrichedTable = service().enrich(&sample_rows()).unwrap();

        assert_eq!(table.rows[0].status(), PerformanceStatus::BelowBenchmark);
        assert_eq!(table.rows[1].status(), PerformanceStatus::BelowBenchmark);
        assert_eq!(table.rows[2].status(), PerformanceStatus::ExceedsTarget);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let err = service().enrich(&[]).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<DashboardError>(),
            Some(DashboardError::EmptyDataset)
        ));
    }

    #[test]
    fn zero_mean_dataset_is_rejected() {
        let rows: Vec<MetricRow> = vec![
            MetricRow::new("A".to_string(), -50.0),
            MetricRow::new("B".to_string(), 50.0),
        ];

        let err = service().enrich(&rows).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<DashboardError>(),
            Some(DashboardError::DegenerateDataset)
        ));
    }

    #[test]
    fn custom_multipliers_are_honored() {
        let config: BenchmarkConfig = BenchmarkConfig {
            benchmark_multiplier: 1.5,
            target_multiplier: 2.0,
        };
        let service: EnrichmentServiceImpl = EnrichmentServiceImpl::new(config);

        let table: EnrichedTable = service.enrich(&sample_rows()).unwrap();

        assert!((table.benchmark - 300.0).abs() < 1e-9);
        assert!((table.target - 400.0).abs() < 1e-9);
    }
}
