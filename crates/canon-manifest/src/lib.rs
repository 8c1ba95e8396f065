#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Provider-neutral canonical type manifest.
//!
//! Four catalogs built over the `canon-core` vocabulary:
//! - `KindRegistry`: one canonical `PrimitiveType` per kind
//! - `FacetCatalog`: constrained metadata each kind may carry
//! - `PromotionLattice`: implicit widening between kinds
//! - `FunctionCatalog`: builtin overloaded functions
//!
//! `Manifest` aggregates them behind lazy, thread-safe accessors. Each
//! catalog is built on first use, independently of the others, and is
//! immutable once published.

pub mod dump;
mod facets;
pub mod functions;
mod invariants;
mod manifest;
mod promotion;
mod registry;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod facets_tests;

pub use canon_core::{
    Facet, FacetDescription, FacetValue, Kind, NAMESPACE, PrimitiveType, SpatialFamily, TypeUsage,
    ValueDomain,
};
pub use facets::{FacetCatalog, initial_facet_descriptions};
pub use functions::{
    CanonicalFunction, FunctionCatalog, FunctionCatalogBuilder, Parameter, ParameterType,
    ReturnKind, Signature,
};
pub use manifest::{Manifest, ManifestBuilder, ManifestConfig};
pub use promotion::{PromotionLattice, PromotionTargets};
pub use registry::KindRegistry;

/// Defects found while building a catalog.
///
/// None of these depend on input: they mean a declaration table is wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("invalid facet description: {0}")]
    Facet(#[from] canon_core::Error),

    #[error("promotion list of {0} does not start with {0}")]
    NonReflexivePromotion(Kind),

    #[error("{from} promotes to {via} and {via} to {to}, but {from} does not promote to {to}")]
    PromotionNotTransitive { from: Kind, via: Kind, to: Kind },

    #[error("{from} promotes across kind families to {to}")]
    CrossFamilyPromotion { from: Kind, to: Kind },

    #[error("duplicate overload {name}({parameters})")]
    DuplicateOverload { name: String, parameters: String },

    #[error("function family `{0}` has no eligible kinds")]
    EmptyFamily(String),
}

/// Result type for catalog builds.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Canonical record for `kind` from the process-wide manifest.
pub fn primitive_type(kind: Kind) -> &'static PrimitiveType {
    Manifest::global().primitive_type(kind)
}

/// Facet descriptions of `kind` from the process-wide manifest.
pub fn facets_for(kind: impl Into<Kind>) -> &'static [FacetDescription] {
    Manifest::global().facets_for(kind)
}

/// Promotion targets of `kind` from the process-wide manifest.
pub fn promotion_targets(kind: impl Into<Kind>) -> PromotionTargets<'static> {
    Manifest::global().promotion_targets(kind)
}

/// The process-wide function catalog.
pub fn functions() -> &'static FunctionCatalog {
    Manifest::global().functions()
}

/// Default usage of `kind` from the process-wide manifest.
pub fn canonical_type_usage(kind: Kind) -> &'static TypeUsage {
    Manifest::global().canonical_type_usage(kind)
}
