//! Client (application, engine, or layer) inventory records.

use serde::Serialize;
use serde_json::Value;

use crate::core::entry::{
    as_object, optional_str, parse_extensions, parse_form_factors, required_str, ExtensionEntry,
    FormFactorEntry,
};
use crate::core::error::EntryError;
use crate::core::record::{InventoryKind, InventoryRecord};

/// Data about a single client, corresponds to a single JSON file in the `clients` inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientData {
    /// A short identifier suitable for use as an HTML anchor, file name stem, etc.
    pub stub: String,

    pub name: String,

    /// Free-form text with extra information
    pub notes: Option<String>,

    pub vendor: String,

    /// Extensions the client uses
    pub extensions: Vec<ExtensionEntry>,

    /// Form factors the client supports
    pub form_factors: Vec<FormFactorEntry>,
}

impl InventoryRecord for ClientData {
    const KIND: InventoryKind = InventoryKind::Client;

    fn from_json(stub: &str, value: &Value) -> Result<Self, EntryError> {
        let obj = as_object(value, "client")?;
        let extensions = parse_extensions(obj)?;
        let form_factors = parse_form_factors(obj)?;

        Ok(ClientData {
            stub: stub.to_string(),
            name: required_str(obj, "name")?,
            notes: optional_str(obj, "notes")?,
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
