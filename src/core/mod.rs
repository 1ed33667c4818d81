//! Core data structures for the inventory.
//!
//! This module contains the typed records built from inventory JSON:
//! - Extension, form factor, view configuration and blend mode entries
//! - Runtime and client records
//! - Extension categories

pub mod category;
pub mod client;
pub mod entry;
pub mod error;
pub mod record;
pub mod runtime;

pub use category::{categorize_ext_name, ext_name_key, ExtensionCategory};
pub use client::ClientData;
pub use entry::{
    EnvironmentBlendModeEntry, ExtensionEntry, FormFactorEntry, ViewConfigurationEntry,
};
pub use error::EntryError;
pub use record::{InventoryKind, InventoryRecord};
pub use runtime::RuntimeData;
