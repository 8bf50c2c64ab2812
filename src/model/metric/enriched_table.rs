use crate::common::*;
use crate::model::metric::enriched_metric::*;

#[doc = r#"
    The enriched dataset: ordered rows plus the two dataset-wide reference
    constants computed once from the full dataset mean. Every panel build
    reads this table and nothing mutates it.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct EnrichedTable {
    pub rows: Vec<EnrichedMetric>,
    pub benchmark: f64,
    pub target: f64,
}

impl EnrichedTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn total_value(&self) -> f64 {
        self.rows.iter().map(|row| row.value).sum()
    }

    pub fn benchmark_total(&self) -> f64 {
        self.benchmark * self.rows.len() as f64
    }

    pub fn target_total(&self) -> f64 {
        self.target * self.rows.len() as f64
    }

    pub fn mean_value(&self) -> f64 {
        if self.rows.is_empty() {
            return 0.0;
        }
        self.total_value() / self.rows.len() as f64
    }

    #[doc = "Average of the per-row deviations from benchmark, in percent."]
    pub fn avg_vs_benchmark(&self) -> f64 {
        if self.rows.is_empty() {
            return 0.0;
        }
        self.rows.iter().map(|row| row.vs_benchmark).sum::<f64>() / self.rows.len() as f64
    }
}
