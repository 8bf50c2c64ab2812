use crate::common::*;

use crate::dto::{dashboard_document::*, insight_banner::*, panel::*};
use crate::model::metric::enriched_table::*;

pub trait LayoutService: Send + Sync {
    #[doc = "
        Arrange the built panels into the fixed 3-row grid, apply the shared
        theme, and attach the dynamic insight banner and the run summary.
        Deterministic for a given table and panel set.
    "]
    fn compose(&self, panels: Vec<Panel>, table: &EnrichedTable) -> DashboardDocument;

    #[doc = "
        The dynamic annotation string, framed by the average deviation from
        benchmark: >= 10 positive, [0, 10) neutral, < 0 warning.
    "]
    fn render_insight(&self, avg_vs_benchmark: f64) -> InsightBanner;
}
