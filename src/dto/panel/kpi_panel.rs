use crate::common::*;

#[doc = r#"
    Gauge-style headline figure: the portfolio total against the summed
    benchmark and target references. The gauge is banded
    `[0, benchmark_total]` (below reference) and
    `[benchmark_total, target_total]` (on track).
"#]
#[derive(Debug, Clone, Getters, new, Serialize)]
#[getset(get = "pub")]
pub struct KpiPanel {
    pub total_value: f64,
    pub benchmark_total: f64,
    pub target_total: f64,
}
