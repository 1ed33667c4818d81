//! Behaviour shared by runtime and client records.

use std::fmt;

use serde_json::Value;

use crate::core::entry::{ExtensionEntry, FormFactorEntry};
use crate::core::error::EntryError;

/// Which inventory a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryKind {
    Runtime,
    Client,
}

impl InventoryKind {
    /// Directory holding this kind of inventory file, relative to the inventory root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            InventoryKind::Runtime => "runtimes",
            InventoryKind::Client => "clients",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryKind::Runtime => "runtime",
            InventoryKind::Client => "client",
        }
    }
}

impl fmt::Display for InventoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record loaded from a single inventory JSON file.
pub trait InventoryRecord: Sized {
    const KIND: InventoryKind;

    /// Create a record from a parsed JSON document.
    ///
    /// `stub` should typically be the stem of the file name.
    fn from_json(stub: &str, value: &Value) -> Result<Self, EntryError>;

    /// Short identifier suitable for an HTML anchor or file name stem.
    fn stub(&self) -> &str;

    fn name(&self) -> &str;

    fn vendor(&self) -> &str;

    fn extensions(&self) -> &[ExtensionEntry];

    fn form_factors(&self) -> &[FormFactorEntry];

    /// Get the entry for the named extension, if it exists.
    ///
    /// Tells you whether the extension is supported, along with any notes.
    ///
    /// # Panics
    ///
    /// Panics if the record lists the extension more than once.
    fn get_extension_entry(&self, ext_name: &str) -> Option<&ExtensionEntry> {
        let mut matches = self.extensions().iter().filter(|e| e.name == ext_name);
        let entry = matches.next()?;
        assert!(
            matches.next().is_none(),
            "{} `{}` lists extension `{}` more than once",
            Self::KIND,
            self.stub(),
            ext_name
        );
        Some(entry)
    }

    fn supports(&self, ext_name: &str) -> bool {
        self.get_extension_entry(ext_name).is_some()
    }
}
