//! Rendering the extension support report.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::{ClientData, RuntimeData};
use crate::ops::aggregate::{AggregateOptions, Aggregates};
use crate::ops::template::{self, ReportContext, EXTENSION_SUPPORT};
use crate::util::fs::write_string;

/// Default output location, relative to the inventory root.
pub const DEFAULT_OUTPUT: &str = "public/extension_support.html";

/// Error rendering or writing the report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("no template named `{0}`")]
    UnknownTemplate(String),

    #[error("failed to write report to {}: {error:#}", .path.display())]
    Write { path: PathBuf, error: anyhow::Error },
}

/// Options for [`generate_report`].
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Logical name of the template to render
    pub template: String,

    /// Where to write the rendered document
    pub output: PathBuf,

    /// Aggregation policies
    pub aggregate: AggregateOptions,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            template: EXTENSION_SUPPORT.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            aggregate: AggregateOptions::default(),
        }
    }
}

impl ReportOptions {
    /// Default options writing to `output`.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        ReportOptions {
            output: output.into(),
            ..Default::default()
        }
    }
}

/// Render the report to a string without writing it.
pub fn render_report(
    runtimes: &[RuntimeData],
    clients: &[ClientData],
    options: &ReportOptions,
) -> Result<String, ReportError> {
    let aggregates = Aggregates::compute(runtimes, clients, &options.aggregate);
    tracing::debug!(
        "rendering `{}` with {} extension(s)",
        options.template,
        aggregates.extensions.len()
    );

    let ctx = ReportContext {
        runtimes,
        clients,
        aggregates: &aggregates,
    };
    template::render(&options.template, &ctx)
        .map(|markup| markup.into_string())
        .ok_or_else(|| ReportError::UnknownTemplate(options.template.clone()))
}

/// Render the report and write it to `options.output`.
///
/// Returns the path written, or `None` if rendering produced no content.
pub fn generate_report(
    runtimes: &[RuntimeData],
    clients: &[ClientData],
    options: &ReportOptions,
) -> Result<Option<PathBuf>, ReportError> {
    let contents = render_report(runtimes, clients, options)?;
    if contents.is_empty() {
        tracing::warn!("report `{}` rendered empty, not writing", options.template);
        return Ok(None);
    }

    write_report(&options.output, &contents)?;
    Ok(Some(options.output.clone()))
}

fn write_report(path: &Path, contents: &str) -> Result<(), ReportError> {
    tracing::info!("Writing {}", path.display());
    write_string(path, contents).map_err(|error| ReportError::Write {
        path: path.to_path_buf(),
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ExtensionEntry, InventoryRecord};
    use serde_json::json;
    use tempfile::TempDir;

    fn runtimes() -> Vec<RuntimeData> {
        vec![RuntimeData::from_json(
            "monado",
            &json!({
                "name": "Monado",
                "vendor": "Collabora",
                "conformance_submission": 7,
                "extensions": [
                    "XR_KHR_composition_layer_depth",
                    {"name": "XR_MNDX_egl_enable", "notes": "Linux <only>"}
                ],
                "form_factors": [{
                    "form_factor": "XR_FORM_FACTOR_HEAD_MOUNTED_DISPLAY",
                    "view_configurations": [{
                        "view_configuration": "XR_VIEW_CONFIGURATION_TYPE_PRIMARY_STEREO",
                        "environment_blend_modes": ["XR_ENVIRONMENT_BLEND_MODE_OPAQUE"]
                    }]
                }]
            }),
        )
        .unwrap()]
    }

    fn clients() -> Vec<ClientData> {
        vec![ClientData {
            stub: "hello_xr".to_string(),
            name: "hello_xr".to_string(),
            notes: None,
            vendor: "Khronos".to_string(),
            extensions: vec![ExtensionEntry::new("XR_EXT_debug_utils")],
            form_factors: Vec::new(),
        }]
    }

    #[test]
    fn test_render_contains_categories_and_entities() {
        let html = render_report(&runtimes(), &clients(), &ReportOptions::default()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Khronos Extensions"));
        assert!(html.contains("Multi-Vendor Extensions"));
        assert!(html.contains("Provisional/Experimental Vendor Extensions"));
        assert!(!html.contains("Provisional/Experimental Khronos Extensions"));
        assert!(html.contains("XR_KHR_composition_layer_depth"));
        assert!(html.contains("Monado"));
        assert!(html.contains("hello_xr"));
        assert!(html.contains("#submission_7"));
        assert!(html.contains("XR_FORM_FACTOR_HEAD_MOUNTED_DISPLAY"));
    }

    #[test]
    fn test_render_orders_khr_first() {
        let html = render_report(&runtimes(), &clients(), &ReportOptions::default()).unwrap();
        let khr = html.find("id=\"XR_KHR_composition_layer_depth\"").unwrap();
        let ext = html.find("id=\"XR_EXT_debug_utils\"").unwrap();
        let mndx = html.find("id=\"XR_MNDX_egl_enable\"").unwrap();
        assert!(khr < ext);
        assert!(ext < mndx);
    }

    #[test]
    fn test_render_escapes_notes() {
        let html = render_report(&runtimes(), &clients(), &ReportOptions::default()).unwrap();
        assert!(html.contains("Linux &lt;only&gt;"));
        assert!(!html.contains("Linux <only>"));
    }

    #[test]
    fn test_unknown_template() {
        let options = ReportOptions {
            template: "missing".to_string(),
            ..Default::default()
        };
        let err = render_report(&runtimes(), &clients(), &options).unwrap_err();
        assert!(matches!(err, ReportError::UnknownTemplate(name) if name == "missing"));
    }

    #[test]
    fn test_generate_report_writes_output() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("public").join("extension_support.html");

        let written = generate_report(&runtimes(), &clients(), &ReportOptions::new(&output))
            .unwrap()
            .unwrap();

        assert_eq!(written, output);
        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("OpenXR Extension Support"));
    }

    #[test]
    fn test_generate_report_with_no_inventory() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("empty.html");

        let written = generate_report(&[], &[], &ReportOptions::new(&output)).unwrap();

        assert_eq!(written, Some(output.clone()));
        assert!(std::fs::read_to_string(&output)
            .unwrap()
            .contains("0 runtime(s)"));
    }
}
