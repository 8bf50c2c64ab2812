pub mod enriched_metric;
pub mod enriched_table;
pub mod metric_row;
