use crate::common::*;

use crate::dto::dashboard_document::*;

#[async_trait]
pub trait ExportService: Send + Sync {
    #[doc = "
        Write the interactive HTML dashboard (primary artifact) and return
        the output path. Failure here is fatal to the run.
    "]
    async fn export_interactive(&self, document: &DashboardDocument) -> anyhow::Result<PathBuf>;

    #[doc = "
        Render the static PNG raster and return the output path. Callers
        treat failure as a warning only; a missing rendering backend must
        not abort the interactive export or the run.
    "]
    async fn export_static(&self, document: &DashboardDocument) -> anyhow::Result<PathBuf>;
}
