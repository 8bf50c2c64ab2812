use crate::common::*;

#[doc = r#"
    Comparative bar view: one bar per metric, colored by whether the value
    clears the benchmark, with constant benchmark and target reference
    lines spanning all categories.
"#]
#[derive(Debug, Clone, Getters, new, Serialize)]
#[getset(get = "pub")]
pub struct BarPanel {
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub vs_benchmark: Vec<f64>,
    pub vs_target: Vec<f64>,
    pub benchmark: f64,
    pub target: f64,
}

impl BarPanel {
    #[doc = "Bar color per category: green when the value clears the benchmark, red otherwise."]
    pub fn bar_colors(&self) -> Vec<&'static str> {
        self.values
            .iter()
            .map(|value| {
                if *value >= self.benchmark {
                    "#2ecc71"
                } else {
                    "#e74c3c"
                }
            })
            .collect()
    }
}
