use crate::common::*;

#[doc = r#"
    Reads a TOML configuration file and deserializes it into the given
    structure.

    # Arguments
    * `file_path` - Path of the TOML file to read

    # Returns
    * `Result<T, anyhow::Error>` - The parsed structure on success
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}
