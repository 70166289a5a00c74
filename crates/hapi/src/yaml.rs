//! YAML loading and rendering for model values.
//!
//! Primitives may be written bare (`active: true`) or as element maps; choice elements are
//! single-key maps named after the FHIR type (`deceased: { dateTime: "2020-01-01" }`);
//! resources are tagged with `resourceType`.

use crate::{HapiError, HapiResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Parse a model value from YAML text.
///
/// This uses `serde_path_to_error` to surface a best-effort path (e.g. `name.0.family`) to
/// the failing field when the YAML does not match the model.
///
/// # Errors
///
/// Returns [`HapiError::Translation`] naming the failing path if the YAML does not match
/// the target type, including malformed temporal lexical values and unknown codes.
pub fn parse<T: DeserializeOwned>(yaml_text: &str) -> HapiResult<T> {
    let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

    serde_path_to_error::deserialize::<_, T>(deserializer).map_err(|err| {
        let path = err.path().to_string();
        let source = err.into_inner();
        let path = if path.is_empty() || path == "." {
            "<root>"
        } else {
            path.as_str()
        };
        HapiError::Translation(format!(
            "{} schema mismatch at {path}: {source}",
            short_type_name::<T>()
        ))
    })
}

/// Render a model value as YAML text.
///
/// # Errors
///
/// Returns [`HapiError::InvalidYaml`] if serialisation fails.
pub fn render<T: Serialize>(value: &T) -> HapiResult<String> {
    Ok(serde_yaml::to_string(value)?)
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
