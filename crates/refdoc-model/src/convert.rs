//! YAML to JSON conversion of the reference source.

use crate::error::ModelError;

/// Convert YAML content to pretty-printed JSON.
///
/// The whole YAML value is converted, not only the fields the model knows
/// about. Output uses two-space indentation, keeps non-ASCII characters as
/// they are and ends with a newline.
pub fn yaml_to_json(content: &str) -> Result<String, ModelError> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    let mut json = serde_json::to_string_pretty(&value)?;
    json.push('\n');
    Ok(json)
}
