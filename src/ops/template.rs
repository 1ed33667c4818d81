//! HTML templates for the report, written with Maud.
//!
//! Templates are looked up by logical name; each one receives the same
//! [`ReportContext`] bindings.

use maud::{html, Markup, DOCTYPE};

use crate::core::{ClientData, ExtensionCategory, InventoryRecord, RuntimeData};
use crate::ops::aggregate::{group_by_category, Aggregates};

/// Logical name of the extension support report template.
pub const EXTENSION_SUPPORT: &str = "extension_support";

/// Everything a template can refer to.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub runtimes: &'a [RuntimeData],
    pub clients: &'a [ClientData],
    pub aggregates: &'a Aggregates,
}

/// Render the template registered under `name`, or `None` if there is no such template.
pub fn render(name: &str, ctx: &ReportContext<'_>) -> Option<Markup> {
    match name {
        EXTENSION_SUPPORT => Some(extension_support(ctx)),
        _ => None,
    }
}

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 2em; }
table { border-collapse: collapse; margin-bottom: 2em; }
th, td { border: 1px solid #ccc; padding: 0.25em 0.5em; }
th.entity { writing-mode: vertical-rl; }
td.supported { background: #c8f7c5; text-align: center; }
td.unsupported { background: #f7f7f7; }
td.count { text-align: right; }
.notes { font-size: 0.9em; color: #555; }
"#;

fn extension_support(ctx: &ReportContext<'_>) -> Markup {
    let listed = ctx.aggregates.listed_extensions();
    let groups = group_by_category(&listed);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "OpenXR Extension Support" }
                style { (STYLE) }
            }
            body {
                h1 { "OpenXR Extension Support" }
                p {
                    (ctx.runtimes.len()) " runtime(s), "
                    (ctx.clients.len()) " client(s), "
                    (listed.len()) " extension(s)."
                }
                nav {
                    ul {
                        @for (category, names) in &groups {
                            li {
                                a href={ "#" (category.as_str()) } { (category.caption()) }
                                " (" (names.len()) ")"
                            }
                        }
                        li { a href="#runtimes" { "Runtimes" } }
                        li { a href="#clients" { "Clients" } }
                        li { a href="#form-factors" { "Form factors" } }
                    }
                }
                @for (category, names) in &groups {
                    (category_table(ctx, *category, names))
                }
                (runtime_details(ctx.runtimes))
                (client_details(ctx.clients))
                (form_factor_table(ctx))
            }
        }
    }
}

fn category_table(ctx: &ReportContext<'_>, category: ExtensionCategory, names: &[&str]) -> Markup {
    html! {
        section id=(category.as_str()) {
            h2 { (category.caption()) " Extensions" }
            table {
                thead {
                    tr {
                        th { "Extension" }
                        th { "Runtimes" }
                        th { "Clients" }
                        @for runtime in ctx.runtimes {
                            th.entity title=(runtime.vendor) {
                                a href={ "#runtime-" (runtime.stub) } { (runtime.name) }
                            }
                        }
                        @for client in ctx.clients {
                            th.entity title=(client.vendor) {
                                a href={ "#client-" (client.stub) } { (client.name) }
                            }
                        }
                    }
                }
                tbody {
                    @for name in names {
                        @let support = ctx.aggregates.extension_support
                            .get(*name)
                            .copied()
                            .unwrap_or_default();
                        tr id=(name) {
                            td { code { (name) } }
                            td.count { (support.runtime_count) }
                            td.count { (support.client_count) }
                            @for runtime in ctx.runtimes {
                                (support_cell(runtime, name))
                            }
                            @for client in ctx.clients {
                                (support_cell(client, name))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn support_cell<R: InventoryRecord>(record: &R, ext_name: &str) -> Markup {
    match record.get_extension_entry(ext_name) {
        Some(entry) => html! {
            td.supported title=[entry.notes.as_deref()] {
                "✔"
                @if entry.notes.is_some() { sup { "*" } }
            }
        },
        None => html! { td.unsupported {} },
    }
}

fn runtime_details(runtimes: &[RuntimeData]) -> Markup {
    html! {
        section id="runtimes" {
            h2 { "Runtimes" }
            @for runtime in runtimes {
                article id={ "runtime-" (runtime.stub) } {
                    h3 { (runtime.name) }
                    p { "Vendor: " (runtime.vendor) }
                    @if let Some(url) = runtime.conformance_submission_url() {
                        p {
                            a href=(url.as_str()) {
                                "Conformance submission "
                                @if let Some(n) = runtime.conformance_submission { (n) }
                            }
                        }
                    }
                    @if let Some(notes) = &runtime.conformance_notes {
                        p.notes { "Conformance: " (notes) }
                    }
                    @if let Some(notes) = &runtime.devices_notes {
                        p.notes { "Devices: " (notes) }
                    }
                    p { (runtime.extensions.len()) " extension(s)" }
                }
            }
        }
    }
}

fn client_details(clients: &[ClientData]) -> Markup {
    html! {
        section id="clients" {
            h2 { "Clients" }
            @for client in clients {
                article id={ "client-" (client.stub) } {
                    h3 { (client.name) }
                    p { "Vendor: " (client.vendor) }
                    @if let Some(notes) = &client.notes {
                        p.notes { (notes) }
                    }
                    p { (client.extensions.len()) " extension(s)" }
                }
            }
        }
    }
}

fn form_factor_table(ctx: &ReportContext<'_>) -> Markup {
    let agg = ctx.aggregates;
    let entities: Vec<&str> = ctx
        .runtimes
        .iter()
        .map(|r| r.name.as_str())
        .chain(ctx.clients.iter().map(|c| c.name.as_str()))
        .filter(|name| agg.form_factor_support.contains_key(*name))
        .collect();

    html! {
        section id="form-factors" {
            h2 { "Form Factors, View Configurations and Blend Modes" }
            table {
                thead {
                    tr {
                        th { "Form factor" }
                        th { "View configuration" }
                        th { "Blend mode" }
                        @for entity in &entities {
                            th.entity { (entity) }
                        }
                    }
                }
                tbody {
                    @for (ff, view_configs) in &agg.known_form_factors {
                        @for (vc, modes) in view_configs {
                            @for mode in modes {
                                tr {
                                    td { code { (ff) } }
                                    td { code { (vc) } }
                                    td { code { (mode) } }
                                    @for entity in &entities {
                                        @let supported = agg.form_factor_support
                                            .get(*entity)
                                            .and_then(|tree| tree.get(ff))
                                            .and_then(|vcs| vcs.get(vc))
                                            .is_some_and(|m| m.contains(mode));
                                        @if supported {
                                            td.supported { "✔" }
                                        } @else {
                                            td.unsupported {}
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
