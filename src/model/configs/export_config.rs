use crate::common::*;

#[doc = r#"
    Output settings of the two export operations.

    The interactive HTML document is the primary artifact; the static PNG
    is best-effort. Image dimensions are the logical size, multiplied by
    `image_scale` at render time for a high-resolution raster.
"#]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ExportConfig {
    #[serde(default = "default_html_output_path")]
    pub html_output_path: String,
    #[serde(default = "default_image_output_path")]
    pub image_output_path: String,
    #[serde(default = "default_image_width")]
    pub image_width: u32,
    #[serde(default = "default_image_height")]
    pub image_height: u32,
    #[serde(default = "default_image_scale")]
    pub image_scale: u32,
}

fn default_html_output_path() -> String {
    String::from("output/account_health_dashboard.html")
}

fn default_image_output_path() -> String {
    String::from("output/account_health_dashboard.png")
}

fn default_image_width() -> u32 {
    1920
}

fn default_image_height() -> u32 {
    1300
}

fn default_image_scale() -> u32 {
    2
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            html_output_path: default_html_output_path(),
            image_output_path: default_image_output_path(),
            image_width: default_image_width(),
            image_height: default_image_height(),
            image_scale: default_image_scale(),
        }
    }
}
