use crate::common::*;
use crate::enums::performance_status::*;

#[doc = "Recommended action of the drill-down table, driven by the same tier thresholds as the status column."]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActionItem {
    Maintain,
    Optimize,
    UrgentAction,
}

impl ActionItem {
    pub fn from_status(status: PerformanceStatus) -> Self {
        match status {
            PerformanceStatus::ExceedsTarget => ActionItem::Maintain,
            PerformanceStatus::AboveBenchmark => ActionItem::Optimize,
            PerformanceStatus::BelowBenchmark => ActionItem::UrgentAction,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActionItem::Maintain => "Maintain",
            ActionItem::Optimize => "Optimize",
            ActionItem::UrgentAction => "Urgent Action",
        }
    }
}
