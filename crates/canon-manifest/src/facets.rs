//! Per-kind facet descriptions.

use canon_core::facet::{
    self, FIXED_LENGTH, GEOGRAPHY_DEFAULT_SRID, GEOMETRY_DEFAULT_SRID, IS_STRICT, MAX_LENGTH,
    PRECISION, SCALE, SRID, UNICODE,
};
use canon_core::{FacetDescription, FacetValue, Kind};
use indexmap::IndexMap;
use tracing::debug;

use crate::Result;

/// Ordered facet descriptions keyed by kind.
///
/// Kinds without constrained metadata have no entry and report an empty list.
#[derive(Debug)]
pub struct FacetCatalog {
    sets: IndexMap<Kind, Vec<FacetDescription>>,
}

impl FacetCatalog {
    /// Build the catalog for every kind.
    ///
    /// `time_precision_default` is the default Precision published for `Time`
    /// and `DateTimeOffset`.
    pub fn build(time_precision_default: u8) -> Result<Self> {
        let mut sets = IndexMap::new();
        for kind in Kind::ALL {
            let descriptions = initial_facet_descriptions(kind, time_precision_default)?;
            if !descriptions.is_empty() {
                sets.insert(kind, descriptions);
            }
        }

        debug!(facet_sets = sets.len(), "facet catalog built");
        Ok(Self { sets })
    }

    /// Descriptions for `kind`, in declaration order. Empty, never an error.
    pub fn facets_for(&self, kind: Kind) -> &[FacetDescription] {
        self.sets.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// A single description by facet name.
    pub fn get(&self, kind: Kind, name: &str) -> Option<&FacetDescription> {
        self.facets_for(kind).iter().find(|d| d.name() == name)
    }

    /// Kinds that carry facets, with their descriptions.
    pub fn iter(&self) -> impl Iterator<Item = (Kind, &[FacetDescription])> {
        self.sets.iter().map(|(kind, d)| (*kind, d.as_slice()))
    }

    /// Number of kinds that carry at least one facet.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// Facet descriptions a fresh catalog publishes for `kind`.
pub fn initial_facet_descriptions(
    kind: Kind,
    time_precision_default: u8,
) -> canon_core::Result<Vec<FacetDescription>> {
    let descriptions = match kind {
        Kind::String => vec![max_length()?, flag(UNICODE)?, flag(FIXED_LENGTH)?],
        Kind::Binary => vec![max_length()?, flag(FIXED_LENGTH)?],
        Kind::DateTime => vec![date_time_precision(None)?],
        Kind::Time | Kind::DateTimeOffset => {
            vec![date_time_precision(Some(time_precision_default))?]
        }
        Kind::Decimal => vec![
            byte(PRECISION, 1, facet::MAX_DECIMAL_PRECISION)?,
            byte(SCALE, 0, facet::MAX_DECIMAL_PRECISION)?,
        ],
        Kind::Geometry
        | Kind::GeometryPoint
        | Kind::GeometryLineString
        | Kind::GeometryPolygon
        | Kind::GeometryMultiPoint
        | Kind::GeometryMultiLineString
        | Kind::GeometryMultiPolygon
        | Kind::GeometryCollection => spatial(GEOMETRY_DEFAULT_SRID)?,
        Kind::Geography
        | Kind::GeographyPoint
        | Kind::GeographyLineString
        | Kind::GeographyPolygon
        | Kind::GeographyMultiPoint
        | Kind::GeographyMultiLineString
        | Kind::GeographyMultiPolygon
        | Kind::GeographyCollection => spatial(GEOGRAPHY_DEFAULT_SRID)?,
        Kind::Boolean
        | Kind::Byte
        | Kind::Double
        | Kind::Guid
        | Kind::Single
        | Kind::SByte
        | Kind::Int16
        | Kind::Int32
        | Kind::Int64 => Vec::new(),
    };
    Ok(descriptions)
}

fn max_length() -> canon_core::Result<FacetDescription> {
    FacetDescription::new(MAX_LENGTH, Kind::Int32, Some(0), Some(i32::MAX), None)
}

fn flag(name: &'static str) -> canon_core::Result<FacetDescription> {
    FacetDescription::new(name, Kind::Boolean, None, None, None)
}

fn byte(name: &'static str, min: u8, max: u8) -> canon_core::Result<FacetDescription> {
    FacetDescription::new(
        name,
        Kind::Byte,
        Some(i32::from(min)),
        Some(i32::from(max)),
        None,
    )
}

fn date_time_precision(default: Option<u8>) -> canon_core::Result<FacetDescription> {
    FacetDescription::new(
        PRECISION,
        Kind::Byte,
        Some(0),
        Some(i32::from(facet::MAX_DATE_TIME_PRECISION)),
        default.map(FacetValue::Byte),
    )
}

fn spatial(default_srid: i32) -> canon_core::Result<Vec<FacetDescription>> {
    Ok(vec![
        FacetDescription::new(
            SRID,
            Kind::Int32,
            Some(0),
            Some(i32::MAX),
            Some(FacetValue::Int32(default_srid)),
        )?,
        FacetDescription::new(
            IS_STRICT,
            Kind::Boolean,
            None,
            None,
            Some(FacetValue::Boolean(true)),
        )?,
    ])
}
