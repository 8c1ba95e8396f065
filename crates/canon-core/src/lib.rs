#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core vocabulary of the canonical type manifest.
//!
//! - `Kind`: the closed enumeration of primitive value kinds
//! - `PrimitiveType`: the canonical record published once per kind
//! - `FacetDescription` / `Facet`: constrained metadata a kind may carry
//! - `TypeUsage`: a primitive type with concrete facet values
//!
//! Catalogs built over this vocabulary live in `canon-manifest`.

pub mod facet;
mod kind;
mod primitive;
mod type_usage;

#[cfg(test)]
mod type_usage_tests;

pub use facet::{Facet, FacetDescription, FacetValue};
pub use kind::{Kind, SpatialFamily};
pub use primitive::{PrimitiveType, ValueDomain};
pub use type_usage::TypeUsage;

/// Namespace every canonical type and function is declared in.
pub const NAMESPACE: &str = "Edm";

/// Errors raised by dynamic lookups and facet validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Name or discriminant outside the closed kind enumeration.
    #[error("unsupported primitive kind `{0}`")]
    UnsupportedKind(String),

    #[error("facet `{facet}` has min {min} greater than max {max}")]
    InvalidFacetBounds { facet: String, min: i32, max: i32 },

    #[error("facet `{facet}` declares bounds on non-ordinal type {value_type}")]
    NonOrdinalBounds { facet: String, value_type: Kind },

    #[error("facet `{facet}` expects a {expected} value, got {found}")]
    FacetValueType {
        facet: String,
        expected: Kind,
        found: Kind,
    },

    #[error("facet `{facet}` value {value} is outside [{}, {}]", fmt_bound(.min), fmt_bound(.max))]
    FacetOutOfRange {
        facet: String,
        value: i64,
        min: Option<i32>,
        max: Option<i32>,
    },

    #[error("{kind} has no facet `{facet}`")]
    UnknownFacet { kind: Kind, facet: String },

    #[error("facet `{facet}` is constant and cannot be overridden")]
    ConstantFacet { facet: String },
}

fn fmt_bound(bound: &Option<i32>) -> String {
    bound.map(|b| b.to_string()).unwrap_or_else(|| "_".to_owned())
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;
