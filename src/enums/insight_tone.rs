use crate::common::*;

#[doc = "Framing of the dynamic insight banner, keyed off the average deviation from benchmark."]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InsightTone {
    Positive,
    Neutral,
    Warning,
}

impl InsightTone {
    pub fn color(&self) -> &'static str {
        match self {
            InsightTone::Positive => "#27ae60",
            InsightTone::Neutral => "#f39c12",
            InsightTone::Warning => "#e74c3c",
        }
    }
}
