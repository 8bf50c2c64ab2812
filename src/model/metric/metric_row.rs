use crate::common::*;

#[doc = "One metric of the source dataset. Immutable after load."]
#[derive(Debug, Clone, PartialEq, Getters, new, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct MetricRow {
    pub metric: String,
    pub value: f64,
}
