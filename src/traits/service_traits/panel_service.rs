use crate::common::*;

use crate::dto::panel::{
    Panel, bar_panel::*, breakdown_panel::*, drilldown_panel::*, kpi_panel::*, trend_panel::*,
};
use crate::model::metric::enriched_table::*;

pub trait PanelService: Send + Sync {
    fn build_kpi_panel(&self, table: &EnrichedTable) -> anyhow::Result<KpiPanel>;

    fn build_bar_panel(&self, table: &EnrichedTable) -> anyhow::Result<BarPanel>;

    fn build_trend_panel(&self, table: &EnrichedTable) -> anyhow::Result<TrendPanel>;

    fn build_breakdown_panel(&self, table: &EnrichedTable) -> anyhow::Result<BreakdownPanel>;

    fn build_drilldown_panel(&self, table: &EnrichedTable) -> anyhow::Result<DrilldownPanel>;

    fn build_placeholder_panel(&self) -> anyhow::Result<Panel>;

    #[doc = "
        Build all six panels from the same immutable table. Panel failures
        are isolated: every failing build is collected alongside the
        surviving panels instead of aborting the siblings.
    "]
    fn build_all(&self, table: &EnrichedTable) -> (Vec<Panel>, Vec<anyhow::Error>);
}
