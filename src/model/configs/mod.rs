pub mod benchmark_config;
pub mod dataset_config;
pub mod export_config;
pub mod projection_config;
pub mod total_config;
