use crate::common::*;

use crate::model::configs::{
    benchmark_config::*, dataset_config::*, export_config::*, projection_config::*,
};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_dashboard_config);

#[doc = "Function to initialize the dashboard configuration instance"]
pub fn initialize_dashboard_config() -> TotalConfig {
    info!("initialize_dashboard_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Deserialize, Getters, Default)]
#[getset(get = "pub")]
pub struct TotalConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub benchmark: BenchmarkConfig,
    #[serde(default)]
    pub projection: ProjectionConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[doc = "Source dataset config"]
pub fn get_dataset_config_info() -> &'static DatasetConfig {
    &TOTAL_CONFIG.dataset
}

#[doc = "Benchmark/target multiplier config"]
pub fn get_benchmark_config_info() -> &'static BenchmarkConfig {
    &TOTAL_CONFIG.benchmark
}

#[doc = "Trend projection config"]
pub fn get_projection_config_info() -> &'static ProjectionConfig {
    &TOTAL_CONFIG.projection
}

#[doc = "Export config"]
pub fn get_export_config_info() -> &'static ExportConfig {
    &TOTAL_CONFIG.export
}

impl TotalConfig {
    fn new() -> Self {
        let config_path: &str = &DASHBOARD_CONFIG_PATH;

        if !Path::new(config_path).exists() {
            info!(
                "[TotalConfig->new] Config file '{}' not found. Falling back to built-in defaults.",
                config_path
            );
            return TotalConfig::default();
        }

        match read_toml_from_file::<TotalConfig>(config_path) {
            Ok(config) => config,
            Err(e) => {
                let err_msg: &str =
                    "Failed to convert the data from DASHBOARD_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }
}
