//! Canonical primitive kind definitions.
//!
//! `Kind` is the closed enumeration every catalog is keyed by. Catalog
//! construction matches on it exhaustively, so a new variant cannot be added
//! without revisiting the registry, facets, promotions and functions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, NAMESPACE};

/// Declares `Kind` together with `ALL`, `COUNT` and `name()` from one
/// variant list, so no variant can be left out of the catalogs' index space.
macro_rules! define_kinds {
    ($($(#[$meta:meta])* $variant:ident = $value:literal,)*) => {
        /// Primitive value kinds.
        ///
        /// Discriminants are stable and double as array indices into the catalogs.
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
        #[repr(u8)]
        pub enum Kind {
            $($(#[$meta])* $variant = $value,)*
        }

        impl Kind {
            /// Number of kinds.
            pub const COUNT: usize = [$(stringify!($variant)),*].len();

            /// Every kind, in discriminant order.
            pub const ALL: [Kind; Self::COUNT] = [$(Self::$variant),*];

            /// Unqualified name, e.g. `Int32`.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)*
                }
            }
        }
    };
}

define_kinds! {
    /// Variable or fixed length byte array.
    Binary = 0,
    /// True or false.
    Boolean = 1,
    /// Unsigned 8-bit integer.
    Byte = 2,
    /// Date and time without offset.
    DateTime = 3,
    /// Fixed precision decimal number.
    Decimal = 4,
    /// 64-bit floating point.
    Double = 5,
    /// 128-bit unique identifier.
    Guid = 6,
    /// 32-bit floating point.
    Single = 7,
    /// Signed 8-bit integer.
    SByte = 8,
    /// Signed 16-bit integer.
    Int16 = 9,
    /// Signed 32-bit integer.
    Int32 = 10,
    /// Signed 64-bit integer.
    Int64 = 11,
    /// Character data.
    String = 12,
    /// Time of day / duration.
    Time = 13,
    /// Date and time with an offset from UTC.
    DateTimeOffset = 14,
    /// Abstract root of the geometry family.
    Geometry = 15,
    /// Abstract root of the geography family.
    Geography = 16,
    GeometryPoint = 17,
    GeometryLineString = 18,
    GeometryPolygon = 19,
    GeometryMultiPoint = 20,
    GeometryMultiLineString = 21,
    GeometryMultiPolygon = 22,
    GeometryCollection = 23,
    GeographyPoint = 24,
    GeographyLineString = 25,
    GeographyPolygon = 26,
    GeographyMultiPoint = 27,
    GeographyMultiLineString = 28,
    GeographyMultiPolygon = 29,
    GeographyCollection = 30,
}

impl Kind {
    /// Convert from raw discriminant.
    pub fn from_u8(v: u8) -> Option<Self> {
        Self::ALL.get(v as usize).copied()
    }

    /// Position of this kind in catalog arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look a kind up by name.
    ///
    /// Accepts both the bare name (`Int32`) and the namespace-qualified one
    /// (`Edm.Int32`). Matching is case-sensitive.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        let bare = name
            .strip_prefix(NAMESPACE)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(name);

        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == bare)
            .ok_or_else(|| Error::UnsupportedKind(name.to_owned()))
    }

    /// Whether values of this kind are numbers.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Byte
                | Self::SByte
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Decimal
                | Self::Single
                | Self::Double
        )
    }

    /// Whether values of this kind are integers.
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Byte | Self::SByte | Self::Int16 | Self::Int32 | Self::Int64
        )
    }

    /// Whether facets of this kind may carry ordinal bounds.
    pub fn is_ordinal(self) -> bool {
        self.is_integer()
    }

    /// The spatial family this kind belongs to, root included.
    pub fn spatial_family(self) -> Option<SpatialFamily> {
        match self {
            Self::Geometry
            | Self::GeometryPoint
            | Self::GeometryLineString
            | Self::GeometryPolygon
            | Self::GeometryMultiPoint
            | Self::GeometryMultiLineString
            | Self::GeometryMultiPolygon
            | Self::GeometryCollection => Some(SpatialFamily::Geometry),
            Self::Geography
            | Self::GeographyPoint
            | Self::GeographyLineString
            | Self::GeographyPolygon
            | Self::GeographyMultiPoint
            | Self::GeographyMultiLineString
            | Self::GeographyMultiPolygon
            | Self::GeographyCollection => Some(SpatialFamily::Geography),
            Self::Binary
            | Self::Boolean
            | Self::Byte
            | Self::DateTime
            | Self::Decimal
            | Self::Double
            | Self::Guid
            | Self::Single
            | Self::SByte
            | Self::Int16
            | Self::Int32
            | Self::Int64
            | Self::String
            | Self::Time
            | Self::DateTimeOffset => None,
        }
    }

    /// Whether this kind is a member of either spatial family.
    pub fn is_spatial(self) -> bool {
        self.spatial_family().is_some()
    }

    /// Whether this kind is the abstract root of a spatial family.
    pub fn is_spatial_root(self) -> bool {
        matches!(self, Self::Geometry | Self::Geography)
    }

    /// Whether this kind is a concrete shape below a spatial root.
    pub fn is_spatial_subtype(self) -> bool {
        self.is_spatial() && !self.is_spatial_root()
    }

    /// Whether `Count`/`BigCount` are declared over this kind.
    ///
    /// Every kind except the concrete spatial shapes; both spatial roots count.
    pub fn is_countable(self) -> bool {
        !self.is_spatial_subtype()
    }
}

const _: () = {
    let mut i = 0;
    while i < Kind::COUNT {
        assert!(Kind::ALL[i] as usize == i);
        i += 1;
    }
};

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<u8> for Kind {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Self::from_u8(v).ok_or_else(|| Error::UnsupportedKind(v.to_string()))
    }
}

/// The two spatial kind families.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum SpatialFamily {
    Geometry,
    Geography,
}

impl SpatialFamily {
    pub const ALL: [SpatialFamily; 2] = [Self::Geometry, Self::Geography];

    /// The abstract kind every member promotes to.
    pub fn root(self) -> Kind {
        match self {
            Self::Geometry => Kind::Geometry,
            Self::Geography => Kind::Geography,
        }
    }

    /// Concrete shapes of this family, root excluded.
    pub fn subtypes(self) -> &'static [Kind] {
        match self {
            Self::Geometry => &[
                Kind::GeometryPoint,
                Kind::GeometryLineString,
                Kind::GeometryPolygon,
                Kind::GeometryMultiPoint,
                Kind::GeometryMultiLineString,
                Kind::GeometryMultiPolygon,
                Kind::GeometryCollection,
            ],
            Self::Geography => &[
                Kind::GeographyPoint,
                Kind::GeographyLineString,
                Kind::GeographyPolygon,
                Kind::GeographyMultiPoint,
                Kind::GeographyMultiLineString,
                Kind::GeographyMultiPolygon,
                Kind::GeographyCollection,
            ],
        }
    }

    /// Root followed by every subtype.
    pub fn members(self) -> impl Iterator<Item = Kind> {
        std::iter::once(self.root()).chain(self.subtypes().iter().copied())
    }
}
