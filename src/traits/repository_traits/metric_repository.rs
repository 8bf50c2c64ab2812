use crate::common::*;
use crate::model::metric::metric_row::*;

#[async_trait]
pub trait MetricRepository: Send + Sync {
    #[doc = "
        Load the source dataset as an ordered sequence of metric rows.
        Fails when the file is missing, a required column is absent, or a
        value cell is not numeric.
    "]
    async fn fetch_metric_rows(&self) -> anyhow::Result<Vec<MetricRow>>;
}
