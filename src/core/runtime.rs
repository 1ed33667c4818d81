//! Runtime inventory records.

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::core::entry::{
    as_object, optional_str, optional_u64, parse_extensions, parse_form_factors, required_str,
    ExtensionEntry, FormFactorEntry,
};
use crate::core::error::EntryError;
use crate::core::record::{InventoryKind, InventoryRecord};

/// Base page listing conformant OpenXR products.
pub const CONFORMANCE_PRODUCTS_URL: &str =
    "https://www.khronos.org/conformance/adopters/conformant-products/openxr";

/// Data about a single runtime on a single platform.
///
/// Corresponds to a single JSON file in the `runtimes` inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeData {
    /// A short identifier suitable for use as an HTML anchor, file name stem, etc.
    pub stub: String,

    /// The name of the runtime (on this platform)
    pub name: String,

    /// The conformance submission number of this runtime on this platform
    pub conformance_submission: Option<u64>,

    /// Free-form text about conformance status
    pub conformance_notes: Option<String>,

    /// Free-form text about devices support
    pub devices_notes: Option<String>,

    /// The vendor's name
    pub vendor: String,

    /// The supported extensions
    pub extensions: Vec<ExtensionEntry>,

    /// The supported form factors
    pub form_factors: Vec<FormFactorEntry>,
}

impl RuntimeData {
    /// Link to the conformance submission, if the runtime has a non-zero submission number.
    pub fn conformance_submission_url(&self) -> Option<Url> {
        let submission = self.conformance_submission.filter(|n| *n != 0)?;
        let mut url = Url::parse(CONFORMANCE_PRODUCTS_URL).ok()?;
        url.set_fragment(Some(&format!("submission_{}", submission)));
        Some(url)
    }
}

impl InventoryRecord for RuntimeData {
    const KIND: InventoryKind = InventoryKind::Runtime;

    fn from_json(stub: &str, value: &Value) -> Result<Self, EntryError> {
        let obj = as_object(value, "runtime")?;
        let extensions = parse_extensions(obj)?;
        let form_factors = parse_form_factors(obj)?;

        Ok(RuntimeData {
            stub: stub.to_string(),
            name: required_str(obj, "name")?,
            conformance_submission: optional_u64(obj, "conformance_submission")?,
            conformance_notes: optional_str(obj, "conformance_notes")?,
            devices_notes: optional_str(obj, "devices_notes")?,
            vendor: required_str(obj, "vendor")?,
            extensions,
            form_factors,
        })
    }

    fn stub(&self) -> &str {
        &self.stub
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn vendor(&self) -> &str {
        &self.vendor
    }

    fn extensions(&self) -> &[ExtensionEntry] {
        &self.extensions
    }

    fn form_factors(&self) -> &[FormFactorEntry] {
        &self.form_factors
    }
}
