use crate::common::*;

#[doc = r#"
    Three-tier classification of a metric against the dataset-wide
    references. The check order matters: a value on the target boundary
    belongs to the higher tier.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerformanceStatus {
    ExceedsTarget,
    AboveBenchmark,
    BelowBenchmark,
}

impl PerformanceStatus {
    pub fn classify(value: f64, benchmark: f64, target: f64) -> Self {
        if value >= target {
            PerformanceStatus::ExceedsTarget
        } else if value >= benchmark {
            PerformanceStatus::AboveBenchmark
        } else {
            PerformanceStatus::BelowBenchmark
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceStatus::ExceedsTarget => "Exceeds Target",
            PerformanceStatus::AboveBenchmark => "Above Benchmark",
            PerformanceStatus::BelowBenchmark => "Below Benchmark",
        }
    }

    #[doc = "Status color of the shared theme: green / amber / red."]
    pub fn color(&self) -> &'static str {
        match self {
            PerformanceStatus::ExceedsTarget => "#2ecc71",
            PerformanceStatus::AboveBenchmark => "#f39c12",
            PerformanceStatus::BelowBenchmark => "#e74c3c",
        }
    }

    #[doc = "Cell shading used by the drill-down table in the interactive export."]
    pub fn cell_fill(&self) -> &'static str {
        match self {
            PerformanceStatus::ExceedsTarget => "#e8f8f5",
            PerformanceStatus::AboveBenchmark => "#fef5e7",
            PerformanceStatus::BelowBenchmark => "#fadbd8",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_total_and_tie_goes_to_higher_tier() {
        let benchmark: f64 = 220.0;
        let target: f64 = 240.0;

        assert_eq!(
            PerformanceStatus::classify(300.0, benchmark, target),
            PerformanceStatus::ExceedsTarget
        );
        assert_eq!(
            PerformanceStatus::classify(240.0, benchmark, target),
            PerformanceStatus::ExceedsTarget
        );
        assert_eq!(
            PerformanceStatus::classify(230.0, benchmark, target),
            PerformanceStatus::AboveBenchmark
        );
        assert_eq!(
            PerformanceStatus::classify(220.0, benchmark, target),
            PerformanceStatus::AboveBenchmark
        );
        assert_eq!(
            PerformanceStatus::classify(100.0, benchmark, target),
            PerformanceStatus::BelowBenchmark
        );
    }
}
