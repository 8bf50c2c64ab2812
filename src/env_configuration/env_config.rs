use crate::common::*;

#[doc = r#"
    Reads an environment variable and falls back to a default value when it
    is not set.

    Every path the dashboard touches can be overridden through the
    environment, but the renderer must also run out of the box from the
    repository root, so unset variables are not an error here.

    # Arguments
    * `key` - Environment variable name
    * `default` - Value used when the variable is unset

    # Returns
    * `String` - The resolved value
"#]
fn get_env_or_default(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => default.to_string(),
    }
}

#[doc = r#"
    Path of the TOML configuration file for the dashboard renderer.

    Overridable via the `DASHBOARD_CONFIG_PATH` environment variable.
    The file carries the dataset path, benchmark/target multipliers,
    projection growth rates and export settings; every field has a
    documented default, so a missing file is not fatal.
"#]
pub static DASHBOARD_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_default("DASHBOARD_CONFIG_PATH", "config/dashboard.toml"));

#[doc = r#"
    Optional path of an HTML template used for the interactive export.

    Overridable via the `DASHBOARD_TEMPLATE_PATH` environment variable.
    When the file does not exist the exporter falls back to its built-in
    template, keeping the primary artifact independent of the filesystem
    layout.
"#]
pub static DASHBOARD_TEMPLATE_PATH: once_lazy<String> = once_lazy::new(|| {
    get_env_or_default("DASHBOARD_TEMPLATE_PATH", "html/dashboard_template.html")
});
