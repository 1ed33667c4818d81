//! OpenXR Inventory - extension support across OpenXR runtimes and clients
//!
//! This crate loads per-vendor inventory files describing which runtimes and
//! client applications support which OpenXR extensions, form factors, view
//! configurations and environment blend modes, and renders them into a
//! static HTML compatibility report.

pub mod core;
pub mod ops;
pub mod util;

pub use crate::core::{
    categorize_ext_name, ClientData, ExtensionCategory, ExtensionEntry, InventoryRecord,
    RuntimeData,
};
pub use crate::util::context::GlobalContext;
