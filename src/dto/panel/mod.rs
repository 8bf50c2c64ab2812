pub mod bar_panel;
pub mod breakdown_panel;
pub mod drilldown_panel;
pub mod kpi_panel;
pub mod trend_panel;

use crate::common::*;

use crate::dto::panel::{
    bar_panel::*, breakdown_panel::*, drilldown_panel::*, kpi_panel::*, trend_panel::*,
};

#[doc = r#"
    One self-contained visual unit of the composed dashboard. Each variant
    carries exactly the slice of the enriched table it visualizes; nothing
    here refers back to shared state.
"#]
#[derive(Debug, Clone, Serialize)]
pub enum Panel {
    Kpi(KpiPanel),
    Bar(BarPanel),
    Trend(TrendPanel),
    Breakdown(BreakdownPanel),
    Drilldown(DrilldownPanel),
    Placeholder,
}

impl Panel {
    pub fn name(&self) -> &'static str {
        match self {
            Panel::Kpi(_) => "Portfolio Health Overview",
            Panel::Bar(_) => "Performance vs Benchmarks",
            Panel::Trend(_) => "Trend Projection with Targets",
            Panel::Breakdown(_) => "Distribution & Drill-Down",
            Panel::Drilldown(_) => "Detailed Metrics Table",
            Panel::Placeholder => "Risk & Opportunity Matrix",
        }
    }
}
