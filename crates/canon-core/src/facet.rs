//! Facet descriptions and facet values.
//!
//! A facet is a named, bounded attribute refining how a primitive kind is
//! represented (MaxLength, Precision, SRID, ...). A `FacetDescription` is the
//! catalog entry; a `Facet` is a description paired with a concrete value.

use std::fmt;

use serde::Serialize;

use crate::{Error, Kind, Result};

pub const MAX_LENGTH: &str = "MaxLength";
pub const UNICODE: &str = "Unicode";
pub const FIXED_LENGTH: &str = "FixedLength";
pub const PRECISION: &str = "Precision";
pub const SCALE: &str = "Scale";
pub const SRID: &str = "SRID";
pub const IS_STRICT: &str = "IsStrict";

/// Facets that take part in a type usage's identity. `IsStrict` does not.
pub const IDENTITY_FACETS: [&str; 6] = [MAX_LENGTH, UNICODE, FIXED_LENGTH, PRECISION, SCALE, SRID];

/// Whether the facet named `name` takes part in a type usage's identity.
pub fn is_identity_facet(name: &str) -> bool {
    IDENTITY_FACETS.contains(&name)
}

pub const MAX_DECIMAL_PRECISION: u8 = u8::MAX;
pub const MAX_DATE_TIME_PRECISION: u8 = u8::MAX;

/// Default fractional-seconds precision for `Time` and `DateTimeOffset`.
pub const DEFAULT_TIME_PRECISION: u8 = 7;

pub const GEOMETRY_DEFAULT_SRID: i32 = 0;
/// WGS 84.
pub const GEOGRAPHY_DEFAULT_SRID: i32 = 4326;

/// A concrete facet value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum FacetValue {
    Boolean(bool),
    Byte(u8),
    Int32(i32),
}

impl FacetValue {
    /// Kind of the value, compared against a description's value type.
    pub fn kind(self) -> Kind {
        match self {
            Self::Boolean(_) => Kind::Boolean,
            Self::Byte(_) => Kind::Byte,
            Self::Int32(_) => Kind::Int32,
        }
    }

    /// Integer view for range checks; `None` for non-ordinal values.
    pub fn as_ordinal(self) -> Option<i64> {
        match self {
            Self::Boolean(_) => None,
            Self::Byte(v) => Some(i64::from(v)),
            Self::Int32(v) => Some(i64::from(v)),
        }
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Byte(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
        }
    }
}

/// Catalog entry for one facet of one kind.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct FacetDescription {
    name: &'static str,
    value_type: Kind,
    min: Option<i32>,
    max: Option<i32>,
    default: Option<FacetValue>,
    is_constant: bool,
}

impl FacetDescription {
    /// Create a description, validating bounds and default.
    ///
    /// Bounds are only accepted on ordinal value types and must satisfy
    /// `min <= max` when both are present. A default must have the value
    /// type's kind and lie within the bounds.
    pub fn new(
        name: &'static str,
        value_type: Kind,
        min: Option<i32>,
        max: Option<i32>,
        default: Option<FacetValue>,
    ) -> Result<Self> {
        if (min.is_some() || max.is_some()) && !value_type.is_ordinal() {
            return Err(Error::NonOrdinalBounds {
                facet: name.to_owned(),
                value_type,
            });
        }

        if let (Some(lo), Some(hi)) = (min, max)
            && lo > hi
        {
            return Err(Error::InvalidFacetBounds {
                facet: name.to_owned(),
                min: lo,
                max: hi,
            });
        }

        let description = Self {
            name,
            value_type,
            min,
            max,
            default: None,
            is_constant: false,
        };

        if let Some(value) = default {
            description.check_value(value)?;
        }

        Ok(Self {
            default,
            ..description
        })
    }

    /// Mark the facet as fixed per kind: overrides are rejected.
    pub fn constant(self) -> Self {
        Self {
            is_constant: true,
            ..self
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn value_type(&self) -> Kind {
        self.value_type
    }

    #[inline]
    pub fn min(&self) -> Option<i32> {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Option<i32> {
        self.max
    }

    #[inline]
    pub fn default_value(&self) -> Option<FacetValue> {
        self.default
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        self.is_constant
    }

    /// Check that `value` has the right kind and lies within the bounds.
    pub fn check_value(&self, value: FacetValue) -> Result<()> {
        if value.kind() != self.value_type {
            return Err(Error::FacetValueType {
                facet: self.name.to_owned(),
                expected: self.value_type,
                found: value.kind(),
            });
        }

        let Some(v) = value.as_ordinal() else {
            return Ok(());
        };

        let below = self.min.is_some_and(|lo| v < i64::from(lo));
        let above = self.max.is_some_and(|hi| v > i64::from(hi));
        if below || above {
            return Err(Error::FacetOutOfRange {
                facet: self.name.to_owned(),
                value: v,
                min: self.min,
                max: self.max,
            });
        }

        Ok(())
    }

    /// The facet carrying this description's default value.
    pub fn default_facet(&self) -> Facet {
        Facet {
            description: self.clone(),
            value: self.default,
        }
    }
}

/// A facet description paired with a value. `None` means unset.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Facet {
    description: FacetDescription,
    value: Option<FacetValue>,
}

impl Facet {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.description.name
    }

    #[inline]
    pub fn value(&self) -> Option<FacetValue> {
        self.value
    }

    #[inline]
    pub fn description(&self) -> &FacetDescription {
        &self.description
    }

    /// Replace the value after validating it against the description.
    pub(crate) fn with_value(&self, value: FacetValue) -> Result<Self> {
        if self.description.is_constant {
            return Err(Error::ConstantFacet {
                facet: self.description.name.to_owned(),
            });
        }
        self.description.check_value(value)?;
        Ok(Self {
            description: self.description.clone(),
            value: Some(value),
        })
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "{}={}", self.name(), value),
            None => write!(f, "{}=", self.name()),
        }
    }
}
