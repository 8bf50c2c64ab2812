use crate::common::*;
use crate::enums::insight_tone::*;

#[doc = "Dynamic annotation attached to the composed document, framed by the average deviation from benchmark."]
#[derive(Debug, Clone, Getters, new, Serialize)]
#[getset(get = "pub")]
pub struct InsightBanner {
    pub tone: InsightTone,
    pub text: String,
}
