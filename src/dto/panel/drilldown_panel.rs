use crate::common::*;
use crate::enums::{action_item::*, performance_status::*};

#[doc = "One row of the drill-down table."]
#[derive(Debug, Clone, Getters, new, Serialize)]
#[getset(get = "pub")]
pub struct DrilldownRow {
    pub metric: String,
    pub value: f64,
    pub benchmark: f64,
    pub target: f64,
    pub vs_benchmark: f64,
    pub status: PerformanceStatus,
    pub action: ActionItem,
}

#[doc = "Tabular per-metric detail view supplementing the aggregate charts."]
#[derive(Debug, Clone, Getters, new, Serialize)]
#[getset(get = "pub")]
pub struct DrilldownPanel {
    pub rows: Vec<DrilldownRow>,
}
