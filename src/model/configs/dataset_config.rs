use crate::common::*;

#[doc = "Location of the source dataset."]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct DatasetConfig {
    #[serde(default = "default_csv_path")]
    pub csv_path: String,
}

fn default_csv_path() -> String {
    String::from("data/account_health.csv")
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            csv_path: default_csv_path(),
        }
    }
}
