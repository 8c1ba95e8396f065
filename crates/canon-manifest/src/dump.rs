//! Human-readable manifest dump for debugging and documentation.
//!
//! Output is deterministic: sections and lines follow kind order and
//! function declaration order.

use std::fmt::Write as _;

use canon_core::FacetDescription;

use crate::facets::FacetCatalog;
use crate::functions::FunctionCatalog;
use crate::manifest::Manifest;
use crate::promotion::PromotionLattice;
use crate::registry::KindRegistry;

/// Dump every catalog of `manifest`, one `[section]` each.
pub fn dump(manifest: &Manifest) -> String {
    let mut out = String::new();

    out.push_str("[types]\n");
    out.push_str(&dump_types(manifest.registry()));
    out.push_str("\n[facets]\n");
    out.push_str(&dump_facets(manifest.facet_catalog()));
    out.push_str("\n[promotions]\n");
    out.push_str(&dump_promotions(manifest.promotion_lattice()));
    out.push_str("\n[functions]\n");
    out.push_str(&dump_functions(manifest.functions()));

    out
}

/// `<index> <full name> <value domain>` per kind.
pub fn dump_types(registry: &KindRegistry) -> String {
    let mut out = String::new();
    for ty in registry.iter() {
        let _ = writeln!(
            out,
            "{:>2} {} {:?}",
            ty.kind().index(),
            ty,
            ty.value_domain()
        );
    }
    out
}

/// One line per kind that carries facets.
pub fn dump_facets(catalog: &FacetCatalog) -> String {
    let mut out = String::new();
    for (kind, descriptions) in catalog.iter() {
        let _ = write!(out, "{kind}:");
        for d in descriptions {
            let _ = write!(out, " {}", format_description(d));
        }
        out.push('\n');
    }
    out
}

/// `Name:Type[min..max]=default`, bounds and default only when present.
fn format_description(d: &FacetDescription) -> String {
    let mut s = format!("{}:{}", d.name(), d.value_type());
    if d.min().is_some() || d.max().is_some() {
        let bound = |b: Option<i32>| b.map_or_else(|| "_".to_owned(), |v| v.to_string());
        let _ = write!(s, "[{}..{}]", bound(d.min()), bound(d.max()));
    }
    if let Some(default) = d.default_value() {
        let _ = write!(s, "={default}");
    }
    if d.is_constant() {
        s.push_str(" const");
    }
    s
}

/// `<kind> -> <targets>` per kind.
pub fn dump_promotions(lattice: &PromotionLattice) -> String {
    let mut out = String::new();
    for (kind, targets) in lattice.iter() {
        let names: Vec<_> = targets.iter().map(|k| k.name()).collect();
        let _ = writeln!(out, "{kind} -> {}", names.join(", "));
    }
    out
}

/// One line per overload.
pub fn dump_functions(catalog: &FunctionCatalog) -> String {
    let mut out = String::new();
    for function in catalog {
        let _ = writeln!(out, "{function}");
    }
    out
}

/// Overloads of one function name; empty when the name is unknown.
pub fn dump_overloads(catalog: &FunctionCatalog, name: &str) -> String {
    let mut out = String::new();
    for function in catalog.overloads(name) {
        let _ = writeln!(out, "{function}");
    }
    out
}
