use crate::common::*;

#[doc = r#"
    Aggregate figures printed to stdout at the end of a run. For an
    unchanged input these numbers are identical across runs.
"#]
#[derive(Debug, Clone, PartialEq, Getters, new, Serialize)]
#[getset(get = "pub")]
pub struct DashboardSummary {
    pub total_value: f64,
    pub benchmark_total: f64,
    pub target_total: f64,
    pub avg_vs_benchmark: f64,
}
