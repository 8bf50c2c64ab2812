use crate::common::*;

use crate::dto::{dashboard_summary::*, insight_banner::*, panel::*};

#[doc = r#"
    The composed dashboard: ordered panels plus layout metadata. Built once
    per run, exported twice (interactive + static), then discarded.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct DashboardDocument {
    pub title: String,
    pub subtitle: String,
    pub panels: Vec<Panel>,
    pub row_heights: [f64; 3],
    pub insight: InsightBanner,
    pub summary: DashboardSummary,
}
