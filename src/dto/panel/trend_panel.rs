use crate::common::*;

#[doc = r#"
    Forward projection of the portfolio mean. This is synthetic data by
    construction (there is no historical series in the source dataset), so
    the panel carries its growth assumption and is titled as a projection.
    The zone between the benchmark and target trends is shaded in the
    composed document.
"#]
#[derive(Debug, Clone, Getters, new, Serialize)]
#[getset(get = "pub")]
pub struct TrendPanel {
    pub period_labels: Vec<String>,
    pub projected_values: Vec<f64>,
    pub benchmark_trend: Vec<f64>,
    pub target_trend: Vec<f64>,
    pub growth_rate: f64,
}
