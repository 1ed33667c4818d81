//! High-level operations.
//!
//! Loading inventories, aggregating them, and rendering the report.

pub mod aggregate;
pub mod load;
pub mod report;
pub mod template;

pub use aggregate::{
    compute_client_support, compute_extension_support, compute_form_factor_support,
    compute_known_extensions, compute_known_form_factors, compute_runtime_support,
    AggregateOptions, Aggregates, EmptyFormFactors, ExtensionSupport, UnsupportedExtensions,
};
pub use load::{
    load_all, load_all_clients, load_all_runtimes, load_dir, FileLoadError, LoadError,
    LoadFailure, LoadOutcome,
};
pub use report::{generate_report, render_report, ReportError, ReportOptions};
