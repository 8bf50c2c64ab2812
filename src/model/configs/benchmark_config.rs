use crate::common::*;

#[doc = r#"
    Reference multipliers applied to the dataset mean.

    The benchmark stands in for typical industry performance (default 10%
    above the portfolio average), the target is the aspirational goal
    (default 20% above).
"#]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct BenchmarkConfig {
    #[serde(default = "default_benchmark_multiplier")]
    pub benchmark_multiplier: f64,
    #[serde(default = "default_target_multiplier")]
    pub target_multiplier: f64,
}

fn default_benchmark_multiplier() -> f64 {
    1.1
}

fn default_target_multiplier() -> f64 {
    1.2
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            benchmark_multiplier: default_benchmark_multiplier(),
            target_multiplier: default_target_multiplier(),
        }
    }
}
