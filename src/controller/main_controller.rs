use crate::common::*;

use crate::dto::{dashboard_document::*, dashboard_summary::*, panel::*};
use crate::model::metric::{enriched_table::*, metric_row::*};
use crate::traits::repository_traits::metric_repository::*;
use crate::traits::service_traits::{
    enrichment_service::*, export_service::*, layout_service::*, panel_service::*,
};
use crate::utils_modules::format_utils::*;

#[derive(Debug, new)]
pub struct MainController<R, E, P, L, X>
where
    R: MetricRepository,
    E: EnrichmentService,
    P: PanelService,
    L: LayoutService,
    X: ExportService,
{
    metric_repository: R,
    enrichment_service: E,
    panel_service: P,
    layout_service: L,
    export_service: X,
}

impl<R, E, P, L, X> MainController<R, E, P, L, X>
where
    R: MetricRepository,
    E: EnrichmentService,
    P: PanelService,
    L: LayoutService,
    X: ExportService,
{
    #[doc = r#"
        Runs the one-shot pipeline: load -> enrich -> build panels ->
        compose -> export -> print summary.

        Loader and enrichment errors abort the run; no partial dashboard is
        rendered on top of invalid data. Panel failures are logged and the
        surviving panels are composed. The interactive export is the
        primary artifact and aborts on failure; the static image is
        best-effort and downgrades to a warning.
    "#]
    pub async fn main_task(&self) -> anyhow::Result<DashboardSummary> {
        /* 1. Load the source dataset. */
        let metric_rows: Vec<MetricRow> = self.metric_repository.fetch_metric_rows().await?;

        /* 2. Derive benchmark/target references and per-row deviations. */
        let enriched_table: EnrichedTable = self.enrichment_service.enrich(&metric_rows)?;

        /* 3. Build the six panels; failures are isolated per panel. */
        let (panels, panel_failures): (Vec<Panel>, Vec<anyhow::Error>) =
            self.panel_service.build_all(&enriched_table);

        for failure in &panel_failures {
            error!("[MainController->main_task] {:?}", failure);
        }

        /* 4. Compose the grid document. */
        let document: DashboardDocument = self.layout_service.compose(panels, &enriched_table);

        /* 5. The two exports are independent and run concurrently. The
        interactive HTML is the primary artifact and fatal on failure; the
        static raster is best-effort and a missing rendering backend must
        not abort the run. */
        let (html_result, image_result) = join(
            self.export_service.export_interactive(&document),
            self.export_service.export_static(&document),
        )
        .await;

        match image_result {
            Ok(image_path) => info!("Static image: {:?}", image_path),
            Err(e) => warn!(
                "[MainController->main_task] Static image export failed, continuing with reduced output set: {:?}",
                e
            ),
        }

        let html_path: PathBuf = html_result?;
        info!("Interactive dashboard: {:?}", html_path);

        let summary: DashboardSummary = document.summary().clone();
        self.print_summary(&summary);

        Ok(summary)
    }

    fn print_summary(&self, summary: &DashboardSummary) {
        println!("{}", "=".repeat(60));
        println!("EXECUTIVE DASHBOARD CREATED");
        println!("{}", "=".repeat(60));
        println!(
            "  Total Portfolio Value : {}",
            format_currency(*summary.total_value())
        );
        println!(
            "  Industry Benchmark    : {}",
            format_currency(*summary.benchmark_total())
        );
        println!(
            "  Target Value          : {}",
            format_currency(*summary.target_total())
        );
        println!(
            "  Average vs Benchmark  : {}",
            format_signed_percent(*summary.avg_vs_benchmark())
        );
        println!("{}", "=".repeat(60));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::dashboard_error::*;
    use crate::model::configs::{
        benchmark_config::*, export_config::*, projection_config::*,
    };
    use crate::repository::csv_repository_impl::*;
    use crate::service::{
        enrichment_service_impl::*, export_service_impl::*, layout_service_impl::*,
        panel_service_impl::*,
    };

    fn controller_for(
        csv_path: &Path,
        out_dir: &Path,
    ) -> MainController<
        CsvRepositoryImpl,
        EnrichmentServiceImpl,
        PanelServiceImpl,
        LayoutServiceImpl,
        ExportServiceImpl,
    > {
        let export_config: ExportConfig = ExportConfig {
            html_output_path: out_dir.join("dashboard.html").to_string_lossy().to_string(),
            image_output_path: out_dir.join("dashboard.png").to_string_lossy().to_string(),
            ..ExportConfig::default()
        };

        MainController::new(
            CsvRepositoryImpl::new(csv_path.to_string_lossy().to_string()),
            EnrichmentServiceImpl::new(BenchmarkConfig::default()),
            PanelServiceImpl::new(ProjectionConfig::default()),
            LayoutServiceImpl::new(),
            ExportServiceImpl::new(export_config),
        )
    }

    #[tokio::test]
    async fn pipeline_runs_end_to_end_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path: PathBuf = dir.path().join("account_health.csv");
        std::fs::write(&csv_path, "metric,value\nA,100\nB,200\nC,300\n").unwrap();

        let controller = controller_for(&csv_path, dir.path());

        let first: DashboardSummary = controller.main_task().await.unwrap();
        let second: DashboardSummary = controller.main_task().await.unwrap();

        /* Computed statistics are identical across runs on unchanged input. */
        assert_eq!(first, second);
        assert_eq!(*first.total_value(), 600.0);
        assert!((first.benchmark_total() - 660.0).abs() < 1e-9);
        assert!((first.target_total() - 720.0).abs() < 1e-9);

        /* The primary artifact exists regardless of the static image. */
        assert!(dir.path().join("dashboard.html").exists());
    }

    #[tokio::test]
    async fn empty_dataset_aborts_before_any_export() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path: PathBuf = dir.path().join("empty.csv");
        std::fs::write(&csv_path, "metric,value\n").unwrap();

        let controller = controller_for(&csv_path, dir.path());

        let err = controller.main_task().await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<DashboardError>(),
            Some(DashboardError::EmptyDataset)
        ));
        assert!(!dir.path().join("dashboard.html").exists());
    }
}
