//! Cross-cutting views over loaded inventories.
//!
//! All functions here are pure: they take already-loaded records and derive
//! the tables shown in the report. Maps are ordered, so results never depend
//! on the order files were loaded in.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::core::{ext_name_key, ClientData, ExtensionCategory, InventoryRecord, RuntimeData};

/// Entity name → extension names it declares, in declaration order.
pub type SupportList = BTreeMap<String, Vec<String>>;

/// View configuration name → environment blend mode names.
pub type ViewConfigurationTree = BTreeMap<String, BTreeSet<String>>;

/// Form factor name → view configurations.
pub type FormFactorTree = BTreeMap<String, ViewConfigurationTree>;

/// Entity name → form factors.
pub type FormFactorSupport = BTreeMap<String, FormFactorTree>;

/// How many runtimes and clients declare an extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ExtensionSupport {
    pub runtime_count: usize,
    pub client_count: usize,
}

impl ExtensionSupport {
    pub fn new(runtime_count: usize, client_count: usize) -> Self {
        ExtensionSupport {
            runtime_count,
            client_count,
        }
    }

    /// Check if nothing in the inventory declares the extension.
    pub fn is_unsupported(&self) -> bool {
        self.runtime_count == 0 && self.client_count == 0
    }
}

/// What to do with extensions that no runtime or client declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsupportedExtensions {
    /// Keep them in the support table with zero counts
    #[default]
    Retain,
    /// Leave them out of the support table
    Drop,
}

/// Whether entities without form factors appear in the form factor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyFormFactors {
    /// No entry for entities without form factors
    #[default]
    Omit,
    /// An empty entry for every entity
    Include,
}

/// Compute every known extension, sorted as in the specification itself.
pub fn compute_known_extensions(runtimes: &[RuntimeData], clients: &[ClientData]) -> Vec<String> {
    let mut known = BTreeSet::new();
    collect_extension_names(runtimes, &mut known);
    collect_extension_names(clients, &mut known);
    sorted_extension_names(known)
}

fn collect_extension_names<'a, R: InventoryRecord>(records: &'a [R], into: &mut BTreeSet<&'a str>) {
    for record in records {
        into.extend(record.extensions().iter().map(|e| e.name.as_str()));
    }
}

fn sorted_extension_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut names: Vec<&str> = names.into_iter().collect();
    names.sort_by(|a, b| ext_name_key(a).cmp(&ext_name_key(b)));
    names.dedup();
    names.into_iter().map(str::to_owned).collect()
}

/// Map each runtime name to the extension names it supports.
pub fn compute_runtime_support(runtimes: &[RuntimeData]) -> SupportList {
    compute_support(runtimes)
}

/// Map each client name to the extension names it uses.
pub fn compute_client_support(clients: &[ClientData]) -> SupportList {
    compute_support(clients)
}

fn compute_support<R: InventoryRecord>(records: &[R]) -> SupportList {
    records
        .iter()
        .map(|r| {
            let names: Vec<String> = r.extensions().iter().map(|e| e.name.clone()).collect();
            (r.name().to_string(), names)
        })
        .collect()
}

/// For each known extension, count the runtimes and clients that support it.
pub fn compute_extension_support(
    runtimes: &[RuntimeData],
    clients: &[ClientData],
) -> BTreeMap<String, ExtensionSupport> {
    let known = compute_known_extensions(runtimes, clients);
    count_extension_support(&known, runtimes, clients)
}

/// Count the runtimes and clients supporting each of `extensions`.
pub fn count_extension_support(
    extensions: &[String],
    runtimes: &[RuntimeData],
    clients: &[ClientData],
) -> BTreeMap<String, ExtensionSupport> {
    extensions
        .iter()
        .map(|name| {
            let runtime_count = runtimes.iter().filter(|r| r.supports(name)).count();
            let client_count = clients.iter().filter(|c| c.supports(name)).count();
            (name.clone(), ExtensionSupport::new(runtime_count, client_count))
        })
        .collect()
}

/// Merge every runtime's and client's form factors into one tree.
///
/// Only view configurations with at least one blend mode are recorded, and a
/// form factor only appears once it has a view configuration.
pub fn compute_known_form_factors(
    runtimes: &[RuntimeData],
    clients: &[ClientData],
) -> FormFactorTree {
    let mut known = FormFactorTree::new();
    merge_known_form_factors(runtimes, &mut known);
    merge_known_form_factors(clients, &mut known);
    known
}

fn merge_known_form_factors<R: InventoryRecord>(records: &[R], known: &mut FormFactorTree) {
    for record in records {
        for ff in record.form_factors() {
            for vc in &ff.view_configurations {
                let view_configs = known.entry(ff.name.clone()).or_default();
                for ebm in &vc.environment_blend_modes {
                    view_configs
                        .entry(vc.name.clone())
                        .or_default()
                        .insert(ebm.name.clone());
                }
            }
        }
    }
}

/// Map each runtime and client name to its form factor tree.
pub fn compute_form_factor_support(
    runtimes: &[RuntimeData],
    clients: &[ClientData],
    empty: EmptyFormFactors,
) -> FormFactorSupport {
    let mut support = FormFactorSupport::new();
    insert_form_factor_support(runtimes, empty, &mut support);
    insert_form_factor_support(clients, empty, &mut support);
    support
}

fn insert_form_factor_support<R: InventoryRecord>(
    records: &[R],
    empty: EmptyFormFactors,
    support: &mut FormFactorSupport,
) {
    for record in records {
        if record.form_factors().is_empty() && empty == EmptyFormFactors::Omit {
            continue;
        }

        let tree: FormFactorTree = record
            .form_factors()
            .iter()
            .map(|ff| {
                let view_configs: ViewConfigurationTree = ff
                    .view_configurations
                    .iter()
                    .map(|vc| {
                        let modes: BTreeSet<String> = vc
                            .environment_blend_modes
                            .iter()
                            .map(|ebm| ebm.name.clone())
                            .collect();
                        (vc.name.clone(), modes)
                    })
                    .collect();
                (ff.name.clone(), view_configs)
            })
            .collect();

        support.insert(record.name().to_string(), tree);
    }
}

/// Group sorted extension names by category, skipping empty categories.
pub fn group_by_category<S: AsRef<str>>(names: &[S]) -> Vec<(ExtensionCategory, Vec<&str>)> {
    let mut groups: Vec<(ExtensionCategory, Vec<&str>)> = Vec::new();
    for category in ExtensionCategory::ALL {
        let members: Vec<&str> = names
            .iter()
            .map(|n| n.as_ref())
            .filter(|n| ExtensionCategory::of(n) == category)
            .collect();
        if !members.is_empty() {
            groups.push((category, members));
        }
    }
    groups
}

/// Options controlling [`Aggregates::compute`].
#[derive(Debug, Clone, Default)]
pub struct AggregateOptions {
    /// Extension names to list even if nothing declares them
    pub extra_extensions: Vec<String>,

    /// Policy for extensions with no support at all
    pub unsupported: UnsupportedExtensions,

    /// Policy for entities without form factors
    pub empty_form_factors: EmptyFormFactors,
}

/// Every view the report needs, computed once.
#[derive(Debug, Clone, Serialize)]
pub struct Aggregates {
    /// Known extensions in specification order
    pub extensions: Vec<String>,

    /// Support counts per extension
    pub extension_support: BTreeMap<String, ExtensionSupport>,

    /// Extensions per runtime name
    pub runtime_support: SupportList,

    /// Extensions per client name
    pub client_support: SupportList,

    /// Merged form factor tree
    pub known_form_factors: FormFactorTree,

    /// Form factor tree per runtime and client name
    pub form_factor_support: FormFactorSupport,
}

impl Aggregates {
    pub fn compute(
        runtimes: &[RuntimeData],
        clients: &[ClientData],
        options: &AggregateOptions,
    ) -> Self {
        let mut names = BTreeSet::new();
        collect_extension_names(runtimes, &mut names);
        collect_extension_names(clients, &mut names);
        names.extend(options.extra_extensions.iter().map(String::as_str));
        let extensions = sorted_extension_names(names);

        let mut extension_support = count_extension_support(&extensions, runtimes, clients);
        if options.unsupported == UnsupportedExtensions::Drop {
            extension_support.retain(|_, support| !support.is_unsupported());
        }

        Aggregates {
            extensions,
            extension_support,
            runtime_support: compute_runtime_support(runtimes),
            client_support: compute_client_support(clients),
            known_form_factors: compute_known_form_factors(runtimes, clients),
            form_factor_support: compute_form_factor_support(
                runtimes,
                clients,
                options.empty_form_factors,
            ),
        }
    }

    /// Known extensions that have a row in the support table, in order.
    pub fn listed_extensions(&self) -> Vec<&str> {
        self.extensions
            .iter()
            .filter(|name| self.extension_support.contains_key(name.as_str()))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        EnvironmentBlendModeEntry, ExtensionEntry, FormFactorEntry, ViewConfigurationEntry,
    };

    fn runtime(name: &str, exts: &[&str]) -> RuntimeData {
        RuntimeData {
            stub: name.to_lowercase(),
            name: name.to_string(),
            conformance_submission: None,
            conformance_notes: None,
            devices_notes: None,
            vendor: "Acme".to_string(),
            extensions: exts.iter().map(|e| ExtensionEntry::new(*e)).collect(),
            form_factors: Vec::new(),
        }
    }

    fn client(name: &str, exts: &[&str]) -> ClientData {
        ClientData {
            stub: name.to_lowercase(),
            name: name.to_string(),
            notes: None,
            vendor: "Acme".to_string(),
            extensions: exts.iter().map(|e| ExtensionEntry::new(*e)).collect(),
            form_factors: Vec::new(),
        }
    }

    fn form_factor(name: &str, vcs: &[(&str, &[&str])]) -> FormFactorEntry {
        FormFactorEntry {
            name: name.to_string(),
            view_configurations: vcs
                .iter()
                .map(|(vc, modes)| ViewConfigurationEntry {
                    name: vc.to_string(),
                    environment_blend_modes: modes
                        .iter()
                        .map(|m| EnvironmentBlendModeEntry::new(*m))
                        .collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_known_extensions_khr_before_ext() {
        let runtimes = vec![runtime("R2", &["XR_EXT_b"]), runtime("R1", &["XR_KHR_a"])];
        let known = compute_known_extensions(&runtimes, &[]);
        assert_eq!(known, vec!["XR_KHR_a", "XR_EXT_b"]);

        let support = compute_extension_support(&runtimes, &[]);
        assert_eq!(support["XR_KHR_a"], ExtensionSupport::new(1, 0));
        assert_eq!(support["XR_EXT_b"], ExtensionSupport::new(1, 0));
    }

    #[test]
    fn test_known_extensions_union_is_deduplicated() {
        let runtimes = vec![
            runtime("R1", &["XR_FB_x", "XR_KHR_a"]),
            runtime("R2", &["XR_KHR_a", "XR_MNDX_y"]),
        ];
        let clients = vec![client("C1", &["XR_KHR_a", "XR_EXT_b"])];

        let known = compute_known_extensions(&runtimes, &clients);
        assert_eq!(known, vec!["XR_KHR_a", "XR_EXT_b", "XR_FB_x", "XR_MNDX_y"]);

        let support = compute_extension_support(&runtimes, &clients);
        assert_eq!(support["XR_KHR_a"], ExtensionSupport::new(2, 1));
        assert_eq!(support["XR_EXT_b"], ExtensionSupport::new(0, 1));
    }

    #[test]
    fn test_known_extensions_independent_of_input_order() {
        let a = runtime("A", &["XR_EXT_b", "XR_KHR_c"]);
        let b = runtime("B", &["XR_KHR_a"]);
        assert_eq!(
            compute_known_extensions(&[a.clone(), b.clone()], &[]),
            compute_known_extensions(&[b, a], &[])
        );
    }

    #[test]
    fn test_support_lists_keep_declaration_order() {
        let runtimes = vec![runtime("R1", &["XR_EXT_b", "XR_KHR_a"]), runtime("Empty", &[])];
        let support = compute_runtime_support(&runtimes);
        assert_eq!(support["R1"], vec!["XR_EXT_b", "XR_KHR_a"]);
        assert!(support["Empty"].is_empty());

        let clients = vec![client("C1", &["XR_KHR_a"])];
        assert_eq!(compute_client_support(&clients)["C1"], vec!["XR_KHR_a"]);
    }

    #[test]
    fn test_known_form_factors_merge() {
        let mut r1 = runtime("R1", &[]);
        r1.form_factors = vec![form_factor(
            "HMD",
            &[("STEREO", &["OPAQUE"]), ("MONO", &[])],
        )];
        let mut c1 = client("C1", &[]);
        c1.form_factors = vec![
            form_factor("HMD", &[("STEREO", &["ADDITIVE", "OPAQUE"])]),
            form_factor("HANDHELD", &[]),
        ];

        let known = compute_known_form_factors(&[r1], &[c1]);
        assert_eq!(known.len(), 1);
        let hmd = &known["HMD"];
        assert_eq!(hmd.len(), 1);
        assert_eq!(
            hmd["STEREO"].iter().collect::<Vec<_>>(),
            vec!["ADDITIVE", "OPAQUE"]
        );
    }

    #[test]
    fn test_form_factor_support_tree() {
        let mut r1 = runtime("R1", &[]);
        r1.form_factors = vec![form_factor(
            "HMD",
            &[("STEREO", &["OPAQUE", "OPAQUE"]), ("MONO", &[])],
        )];

        let support = compute_form_factor_support(&[r1], &[], EmptyFormFactors::Omit);
        let hmd = &support["R1"]["HMD"];
        assert_eq!(hmd["STEREO"].len(), 1);
        assert!(hmd["MONO"].is_empty());
    }

    #[test]
    fn test_empty_form_factors_policy() {
        let runtimes = vec![runtime("Bare", &["XR_KHR_a"])];
        let clients = vec![client("BareClient", &[])];

        let omitted = compute_form_factor_support(&runtimes, &clients, EmptyFormFactors::Omit);
        assert!(omitted.is_empty());

        let included =
            compute_form_factor_support(&runtimes, &clients, EmptyFormFactors::Include);
        assert_eq!(included.len(), 2);
        assert!(included["Bare"].is_empty());
        assert!(included["BareClient"].is_empty());

        // Re-running gives the same answer.
        assert_eq!(
            included,
            compute_form_factor_support(&runtimes, &clients, EmptyFormFactors::Include)
        );
    }

    #[test]
    fn test_group_by_category() {
        let names = vec![
            "XR_KHR_a".to_string(),
            "XR_KHR_b".to_string(),
            "XR_FB_c".to_string(),
            "XR_MNDX_d".to_string(),
        ];
        let groups = group_by_category(&names);
        assert_eq!(
            groups,
            vec![
                (ExtensionCategory::Khr, vec!["XR_KHR_a", "XR_KHR_b"]),
                (ExtensionCategory::Vendor, vec!["XR_FB_c"]),
                (ExtensionCategory::VendorX, vec!["XR_MNDX_d"]),
            ]
        );
    }

    #[test]
    fn test_aggregates_retain_unsupported_extras() {
        let runtimes = vec![runtime("R1", &["XR_KHR_a"])];
        let options = AggregateOptions {
            extra_extensions: vec!["XR_EXT_unused".to_string(), "XR_KHR_a".to_string()],
            ..Default::default()
        };

        let agg = Aggregates::compute(&runtimes, &[], &options);
        assert_eq!(agg.extensions, vec!["XR_KHR_a", "XR_EXT_unused"]);
        assert_eq!(agg.extension_support["XR_EXT_unused"], ExtensionSupport::new(0, 0));
        assert_eq!(agg.listed_extensions(), vec!["XR_KHR_a", "XR_EXT_unused"]);
    }

    #[test]
    fn test_aggregates_drop_unsupported() {
        let runtimes = vec![runtime("R1", &["XR_KHR_a"])];
        let options = AggregateOptions {
            extra_extensions: vec!["XR_EXT_unused".to_string()],
            unsupported: UnsupportedExtensions::Drop,
            ..Default::default()
        };

        let agg = Aggregates::compute(&runtimes, &[], &options);
        // The name list itself is left alone; only the support table is filtered.
        assert_eq!(agg.extensions, vec!["XR_KHR_a", "XR_EXT_unused"]);
        assert!(!agg.extension_support.contains_key("XR_EXT_unused"));
        assert_eq!(agg.listed_extensions(), vec!["XR_KHR_a"]);
    }
}
