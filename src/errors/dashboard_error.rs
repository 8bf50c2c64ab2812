use crate::common::*;

#[doc = r#"
    Failure taxonomy of the dashboard pipeline.

    Loader and enrichment variants are fatal: no partial dashboard is
    rendered on top of invalid data. `PanelBuild` is isolated per panel and
    never aborts sibling panels.
"#]
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Failed to load dataset from '{path}': {reason}")]
    Load { path: String, reason: String },

    #[error("Row {row} ('{metric}'): value '{raw}' is not a number")]
    Parse {
        row: usize,
        metric: String,
        raw: String,
    },

    #[error("Dataset is empty: at least one metric row is required")]
    EmptyDataset,

    #[error("Dataset mean is zero: benchmark and target references are undefined")]
    DegenerateDataset,

    #[error("Panel '{panel}' failed to build: {reason}")]
    PanelBuild { panel: &'static str, reason: String },
}
