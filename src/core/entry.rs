//! Entries shared by runtime and client inventories.
//!
//! Each entry corresponds to a definition in the inventory JSON schema:
//! - `#/definitions/extension`
//! - `#/definitions/environment_blend_mode`
//! - `#/definitions/view_configuration`
//! - `#/definitions/form_factor`

use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::error::EntryError;

/// An entry in the "extensions" array of a runtime or client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionEntry {
    /// Extension name, e.g. `XR_KHR_composition_layer_depth`
    pub name: String,

    /// Optional notes about the support/use of this extension
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ExtensionEntry {
    /// Create an entry with no notes.
    pub fn new(name: impl Into<String>) -> Self {
        ExtensionEntry {
            name: name.into(),
            notes: None,
        }
    }

    /// Attach notes to the entry.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Parse from either a bare name string or an object with `name` and optional `notes`.
    pub fn from_json(value: &Value) -> Result<Self, EntryError> {
        match value {
            Value::String(name) => Ok(ExtensionEntry::new(name.clone())),
            Value::Object(obj) => Ok(ExtensionEntry {
                name: required_str(obj, "name")?,
                notes: optional_str(obj, "notes")?,
            }),
            _ => Err(EntryError::invalid("extensions", "a string or an object")),
        }
    }
}

/// An entry in the "environment_blend_modes" array of a view configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentBlendModeEntry {
    pub name: String,
}

impl EnvironmentBlendModeEntry {
    pub fn new(name: impl Into<String>) -> Self {
        EnvironmentBlendModeEntry { name: name.into() }
    }

    pub fn from_json(value: &Value) -> Result<Self, EntryError> {
        value
            .as_str()
            .map(EnvironmentBlendModeEntry::new)
            .ok_or_else(|| EntryError::invalid("environment_blend_modes", "an array of strings"))
    }
}

/// An entry in the "view_configurations" array of a form factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewConfigurationEntry {
    /// View configuration name, e.g. `XR_VIEW_CONFIGURATION_TYPE_PRIMARY_STEREO`
    pub name: String,

    /// Environment blend modes supported for the view configuration
    pub environment_blend_modes: Vec<EnvironmentBlendModeEntry>,
}

impl ViewConfigurationEntry {
    pub fn from_json(value: &Value) -> Result<Self, EntryError> {
        let obj = as_object(value, "view_configurations")?;
        let name = required_str(obj, "view_configuration")?;
        let environment_blend_modes = required_array(obj, "environment_blend_modes")?
            .iter()
            .map(EnvironmentBlendModeEntry::from_json)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ViewConfigurationEntry {
            name,
            environment_blend_modes,
        })
    }
}

/// An entry in the "form_factors" array of a runtime or client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormFactorEntry {
    /// Form factor name, e.g. `XR_FORM_FACTOR_HEAD_MOUNTED_DISPLAY`
    pub name: String,

    /// View configurations supported for the form factor
    pub view_configurations: Vec<ViewConfigurationEntry>,
}

impl FormFactorEntry {
    pub fn from_json(value: &Value) -> Result<Self, EntryError> {
        let obj = as_object(value, "form_factors")?;
        let name = required_str(obj, "form_factor")?;
        let view_configurations = required_array(obj, "view_configurations")?
            .iter()
            .map(ViewConfigurationEntry::from_json)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FormFactorEntry {
            name,
            view_configurations,
        })
    }
}

// -----------------------------------------------------------------------------
// JSON lookup helpers
// -----------------------------------------------------------------------------

pub(crate) fn as_object<'a>(
    value: &'a Value,
    field: &'static str,
) -> Result<&'a Map<String, Value>, EntryError> {
    value
        .as_object()
        .ok_or_else(|| EntryError::invalid(field, "an object"))
}

/// Look up a key, treating an explicit `null` as absent.
fn lookup<'a>(obj: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    obj.get(field).filter(|v| !v.is_null())
}

pub(crate) fn required_str(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<String, EntryError> {
    let value = obj.get(field).ok_or_else(|| EntryError::missing(field))?;
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| EntryError::invalid(field, "a string"))
}

pub(crate) fn optional_str(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, EntryError> {
    lookup(obj, field)
        .map(|v| {
            v.as_str()
                .map(str::to_owned)
                .ok_or_else(|| EntryError::invalid(field, "a string"))
        })
        .transpose()
}

pub(crate) fn optional_u64(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<u64>, EntryError> {
    lookup(obj, field)
        .map(|v| {
            v.as_u64()
                .ok_or_else(|| EntryError::invalid(field, "a non-negative integer"))
        })
        .transpose()
}

pub(crate) fn required_array<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Vec<Value>, EntryError> {
    let value = obj.get(field).ok_or_else(|| EntryError::missing(field))?;
    value
        .as_array()
        .ok_or_else(|| EntryError::invalid(field, "an array"))
}

/// An optional array; absent or `null` yields an empty slice.
pub(crate) fn optional_array<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a [Value], EntryError> {
    match lookup(obj, field) {
        None => Ok(&[]),
        Some(v) => v
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| EntryError::invalid(field, "an array")),
    }
}

/// Parse the `extensions` array of a runtime or client.
pub(crate) fn parse_extensions(
    obj: &Map<String, Value>,
) -> Result<Vec<ExtensionEntry>, EntryError> {
    required_array(obj, "extensions")?
        .iter()
        .map(ExtensionEntry::from_json)
        .collect()
}

/// Parse the optional `form_factors` array of a runtime or client.
pub(crate) fn parse_form_factors(
    obj: &Map<String, Value>,
) -> Result<Vec<FormFactorEntry>, EntryError> {
    optional_array(obj, "form_factors")?
        .iter()
        .map(FormFactorEntry::from_json)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extension_from_string() {
        let entry = ExtensionEntry::from_json(&json!("XR_EXT_foo")).unwrap();
        assert_eq!(entry.name, "XR_EXT_foo");
        assert_eq!(entry.notes, None);
    }

    #[test]
    fn test_extension_from_object() {
        let entry =
            ExtensionEntry::from_json(&json!({"name": "XR_EXT_foo", "notes": "x"})).unwrap();
        assert_eq!(entry, ExtensionEntry::new("XR_EXT_foo").with_notes("x"));
    }

    #[test]
    fn test_extension_object_without_notes() {
        let entry = ExtensionEntry::from_json(&json!({"name": "XR_KHR_a", "notes": null})).unwrap();
        assert_eq!(entry.notes, None);
    }

    #[test]
    fn test_extension_missing_name() {
        let err = ExtensionEntry::from_json(&json!({"notes": "x"})).unwrap_err();
        assert_eq!(err, EntryError::MissingField { field: "name" });
    }

    #[test]
    fn test_extension_rejects_number() {
        let err = ExtensionEntry::from_json(&json!(42)).unwrap_err();
        assert!(matches!(err, EntryError::InvalidType { .. }));
    }

    #[test]
    fn test_blend_mode_from_string() {
        let mode = EnvironmentBlendModeEntry::from_json(&json!(
            "XR_ENVIRONMENT_BLEND_MODE_OPAQUE"
        ))
        .unwrap();
        assert_eq!(mode.name, "XR_ENVIRONMENT_BLEND_MODE_OPAQUE");
    }

    #[test]
    fn test_view_configuration() {
        let vc = ViewConfigurationEntry::from_json(&json!({
            "view_configuration": "XR_VIEW_CONFIGURATION_TYPE_PRIMARY_STEREO",
            "environment_blend_modes": [
                "XR_ENVIRONMENT_BLEND_MODE_OPAQUE",
                "XR_ENVIRONMENT_BLEND_MODE_ALPHA_BLEND"
            ]
        }))
        .unwrap();
        assert_eq!(vc.name, "XR_VIEW_CONFIGURATION_TYPE_PRIMARY_STEREO");
        assert_eq!(vc.environment_blend_modes.len(), 2);
        assert_eq!(
            vc.environment_blend_modes[1].name,
            "XR_ENVIRONMENT_BLEND_MODE_ALPHA_BLEND"
        );
    }

    #[test]
    fn test_view_configuration_missing_keys() {
        let err = ViewConfigurationEntry::from_json(&json!({
            "environment_blend_modes": []
        }))
        .unwrap_err();
        assert_eq!(err.field(), "view_configuration");

        let err = ViewConfigurationEntry::from_json(&json!({
            "view_configuration": "XR_VIEW_CONFIGURATION_TYPE_PRIMARY_MONO"
        }))
        .unwrap_err();
        assert_eq!(
            err,
            EntryError::MissingField {
                field: "environment_blend_modes"
            }
        );
    }

    #[test]
    fn test_form_factor() {
        let ff = FormFactorEntry::from_json(&json!({
            "form_factor": "XR_FORM_FACTOR_HANDHELD_DISPLAY",
            "view_configurations": [{
                "view_configuration": "XR_VIEW_CONFIGURATION_TYPE_PRIMARY_MONO",
                "environment_blend_modes": ["XR_ENVIRONMENT_BLEND_MODE_ALPHA_BLEND"]
            }]
        }))
        .unwrap();
        assert_eq!(ff.name, "XR_FORM_FACTOR_HANDHELD_DISPLAY");
        assert_eq!(ff.view_configurations.len(), 1);
    }

    #[test]
    fn test_form_factor_missing_view_configurations() {
        let err = FormFactorEntry::from_json(&json!({
            "form_factor": "XR_FORM_FACTOR_HEAD_MOUNTED_DISPLAY"
        }))
        .unwrap_err();
        assert_eq!(
            err,
            EntryError::MissingField {
                field: "view_configurations"
            }
        );
    }

    #[test]
    fn test_form_factor_keeps_empty_name() {
        let ff = FormFactorEntry::from_json(&json!({
            "form_factor": "",
            "view_configurations": []
        }))
        .unwrap();
        assert_eq!(ff.name, "");
    }
}
