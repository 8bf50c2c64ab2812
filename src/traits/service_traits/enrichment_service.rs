use crate::common::*;
use crate::model::metric::{enriched_table::*, metric_row::*};

pub trait EnrichmentService: Send + Sync {
    #[doc = "
        Derive the dataset-wide benchmark/target references from the mean of
        all values and broadcast them onto every row, together with the
        percentage deviation from each reference rounded to one decimal.
        Fails on an empty dataset and on a dataset whose mean is exactly
        zero (the references would be undefined).
    "]
    fn enrich(&self, rows: &[MetricRow]) -> anyhow::Result<EnrichedTable>;
}
