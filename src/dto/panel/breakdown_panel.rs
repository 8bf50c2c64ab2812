use crate::common::*;
use crate::enums::{breakdown_mode::*, performance_status::*};

#[doc = r#"
    Categorical share view (donut). `mode` records whether the slices are
    the real dataset rows or the fixed demo distribution used for datasets
    with fewer than three rows.
"#]
#[derive(Debug, Clone, Getters, new, Serialize)]
#[getset(get = "pub")]
pub struct BreakdownPanel {
    pub mode: BreakdownMode,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub statuses: Vec<PerformanceStatus>,
}

impl BreakdownPanel {
    #[doc = "Underperforming slices are pulled out of the donut."]
    pub fn pulls(&self) -> Vec<f64> {
        self.statuses
            .iter()
            .map(|status| {
                if *status == PerformanceStatus::BelowBenchmark {
                    0.1
                } else {
                    0.0
                }
            })
            .collect()
    }
}
