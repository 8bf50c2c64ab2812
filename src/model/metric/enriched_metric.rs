use crate::common::*;
use crate::enums::{action_item::*, performance_status::*};

#[doc = r#"
    A metric row with the dataset-wide benchmark/target references broadcast
    onto it, plus the percentage deviation from each reference rounded to
    one decimal place.
"#]
#[derive(Debug, Clone, Getters, new, Serialize)]
#[getset(get = "pub")]
pub struct EnrichedMetric {
    pub metric: String,
    pub value: f64,
    pub benchmark: f64,
    pub target: f64,
    pub vs_benchmark: f64,
    pub vs_target: f64,
}

impl EnrichedMetric {
    pub fn status(&self) -> PerformanceStatus {
        PerformanceStatus::classify(self.value, self.benchmark, self.target)
    }

    pub fn action(&self) -> ActionItem {
        ActionItem::from_status(self.status())
    }
}
