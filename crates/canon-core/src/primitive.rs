//! Primitive type records.

use std::fmt;

use serde::Serialize;

use crate::{Kind, NAMESPACE};

/// Semantic value domain of a primitive type.
///
/// Describes what values of the kind denote, independent of any host
/// representation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum ValueDomain {
    Bytes,
    Boolean,
    UInt8,
    Int8,
    Int16,
    Int32,
    Int64,
    Decimal,
    Float32,
    Float64,
    Text,
    Guid,
    DateTime,
    Duration,
    DateTimeWithOffset,
    Geometry,
    Geography,
}

impl ValueDomain {
    /// The domain values of `kind` are drawn from.
    pub fn of(kind: Kind) -> Self {
        match kind {
            Kind::Binary => Self::Bytes,
            Kind::Boolean => Self::Boolean,
            Kind::Byte => Self::UInt8,
            Kind::SByte => Self::Int8,
            Kind::Int16 => Self::Int16,
            Kind::Int32 => Self::Int32,
            Kind::Int64 => Self::Int64,
            Kind::Decimal => Self::Decimal,
            Kind::Single => Self::Float32,
            Kind::Double => Self::Float64,
            Kind::String => Self::Text,
            Kind::Guid => Self::Guid,
            Kind::DateTime => Self::DateTime,
            Kind::Time => Self::Duration,
            Kind::DateTimeOffset => Self::DateTimeWithOffset,
            Kind::Geometry
            | Kind::GeometryPoint
            | Kind::GeometryLineString
            | Kind::GeometryPolygon
            | Kind::GeometryMultiPoint
            | Kind::GeometryMultiLineString
            | Kind::GeometryMultiPolygon
            | Kind::GeometryCollection => Self::Geometry,
            Kind::Geography
            | Kind::GeographyPoint
            | Kind::GeographyLineString
            | Kind::GeographyPolygon
            | Kind::GeographyMultiPoint
            | Kind::GeographyMultiLineString
            | Kind::GeographyMultiPolygon
            | Kind::GeographyCollection => Self::Geography,
        }
    }
}

/// Canonical record for one primitive kind.
///
/// Exactly one instance per kind is published by the manifest; the record is
/// never mutated afterwards. All canonical primitive types are abstract: they
/// describe a value domain, not a store representation.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct PrimitiveType {
    kind: Kind,
    name: &'static str,
    namespace: &'static str,
    value_domain: ValueDomain,
}

impl PrimitiveType {
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            name: kind.name(),
            namespace: NAMESPACE,
            value_domain: ValueDomain::of(kind),
        }
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    #[inline]
    pub fn value_domain(&self) -> ValueDomain {
        self.value_domain
    }

    /// Namespace-qualified name, e.g. `Edm.Int32`.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    pub fn is_abstract(&self) -> bool {
        true
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

impl From<&PrimitiveType> for Kind {
    fn from(ty: &PrimitiveType) -> Self {
        ty.kind
    }
}
