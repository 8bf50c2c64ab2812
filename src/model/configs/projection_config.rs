use crate::common::*;

#[doc = r#"
    Parameters of the trend panel's projection.

    The panel has no historical series to draw from; it projects the
    current dataset mean forward with an injectable per-period growth rate
    and is labeled as a projection in the composed document. The reference
    trends (benchmark and target) grow with their own, slower rate.
"#]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ProjectionConfig {
    #[serde(default = "default_periods")]
    pub periods: usize,
    #[serde(default = "default_growth_rate")]
    pub growth_rate: f64,
    #[serde(default = "default_reference_growth_rate")]
    pub reference_growth_rate: f64,
}

fn default_periods() -> usize {
    6
}

fn default_growth_rate() -> f64 {
    0.05
}

fn default_reference_growth_rate() -> f64 {
    0.03
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        ProjectionConfig {
            periods: default_periods(),
            growth_rate: default_growth_rate(),
            reference_growth_rate: default_reference_growth_rate(),
        }
    }
}
