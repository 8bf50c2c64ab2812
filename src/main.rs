mod common;
mod external_deps;
mod prelude;
use common::*;

mod env_configuration;

mod errors;

mod enums;

mod dto;

mod traits;

mod model;
use model::configs::total_config::*;

mod repository;
use repository::csv_repository_impl::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{
    enrichment_service_impl::*, export_service_impl::*, layout_service_impl::*,
    panel_service_impl::*,
};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* Global logger and environment setup */
    dotenv().ok();
    set_global_logger();

    info!("Dashboard renderer start!");

    /* Dependency injection */
    let metric_repository: CsvRepositoryImpl =
        CsvRepositoryImpl::new(get_dataset_config_info().csv_path().clone());
    let enrichment_service: EnrichmentServiceImpl =
        EnrichmentServiceImpl::new(get_benchmark_config_info().clone());
    let panel_service: PanelServiceImpl =
        PanelServiceImpl::new(get_projection_config_info().clone());
    let layout_service: LayoutServiceImpl = LayoutServiceImpl::new();
    let export_service: ExportServiceImpl =
        ExportServiceImpl::new(get_export_config_info().clone());

    let main_controller: MainController<
        CsvRepositoryImpl,
        EnrichmentServiceImpl,
        PanelServiceImpl,
        LayoutServiceImpl,
        ExportServiceImpl,
    > = MainController::new(
        metric_repository,
        enrichment_service,
        panel_service,
        layout_service,
        export_service,
    );

    main_controller.main_task().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
