use canon_core::facet::{self, DEFAULT_TIME_PRECISION};
use canon_core::{FacetValue, Kind};

use crate::FacetCatalog;

fn catalog() -> FacetCatalog {
    FacetCatalog::build(DEFAULT_TIME_PRECISION).unwrap()
}

fn names(catalog: &FacetCatalog, kind: Kind) -> Vec<&'static str> {
    catalog.facets_for(kind).iter().map(|d| d.name()).collect()
}

#[test]
fn string_facets() {
    assert_eq!(
        names(&catalog(), Kind::String),
        ["MaxLength", "Unicode", "FixedLength"]
    );
}

#[test]
fn binary_facets() {
    assert_eq!(names(&catalog(), Kind::Binary), ["MaxLength", "FixedLength"]);
}

#[test]
fn plain_kinds_have_no_facets() {
    let catalog = catalog();
    for kind in [
        Kind::Boolean,
        Kind::Byte,
        Kind::SByte,
        Kind::Int16,
        Kind::Int32,
        Kind::Int64,
        Kind::Single,
        Kind::Double,
        Kind::Guid,
    ] {
        assert!(catalog.facets_for(kind).is_empty(), "{kind}");
    }
}

#[test]
fn carries_six_scalar_and_sixteen_spatial_sets() {
    assert_eq!(catalog().len(), 6 + 16);
}

#[test]
fn decimal_precision_and_scale() {
    let catalog = catalog();
    let facets = catalog.facets_for(Kind::Decimal);
    assert_eq!(facets.len(), 2);

    let precision = &facets[0];
    assert_eq!(precision.name(), "Precision");
    assert_eq!(precision.value_type(), Kind::Byte);
    assert_eq!(precision.min(), Some(1));
    assert_eq!(precision.max(), Some(255));
    assert_eq!(precision.default_value(), None);

    let scale = &facets[1];
    assert_eq!(scale.name(), "Scale");
    assert_eq!(scale.value_type(), Kind::Byte);
    assert_eq!(scale.min(), Some(0));
    assert_eq!(scale.max(), Some(255));
    assert_eq!(scale.default_value(), None);
}

#[test]
fn date_time_precision_defaults() {
    let catalog = catalog();

    let date_time = catalog.get(Kind::DateTime, facet::PRECISION).unwrap();
    assert_eq!(date_time.default_value(), None);
    assert_eq!(date_time.min(), Some(0));
    assert_eq!(date_time.max(), Some(255));

    for kind in [Kind::Time, Kind::DateTimeOffset] {
        let precision = catalog.get(kind, facet::PRECISION).unwrap();
        assert_eq!(precision.default_value(), Some(FacetValue::Byte(7)));
    }
}

#[test]
fn custom_time_precision_default() {
    let catalog = FacetCatalog::build(3).unwrap();
    let precision = catalog.get(Kind::Time, facet::PRECISION).unwrap();
    assert_eq!(precision.default_value(), Some(FacetValue::Byte(3)));
}

#[test]
fn spatial_srid_defaults_per_family() {
    let catalog = catalog();
    for kind in Kind::ALL.into_iter().filter(|k| k.is_spatial()) {
        assert_eq!(names(&catalog, kind), ["SRID", "IsStrict"], "{kind}");

        let expected = if kind.spatial_family() == Some(canon_core::SpatialFamily::Geography) {
            4326
        } else {
            0
        };
        let srid = catalog.get(kind, facet::SRID).unwrap();
        assert_eq!(srid.default_value(), Some(FacetValue::Int32(expected)));
        assert_eq!(srid.max(), Some(i32::MAX));

        let strict = catalog.get(kind, facet::IS_STRICT).unwrap();
        assert_eq!(strict.default_value(), Some(FacetValue::Boolean(true)));
    }
}

#[test]
fn catalog_descriptions_are_never_constant() {
    let catalog = catalog();
    assert!(
        catalog
            .iter()
            .flat_map(|(_, d)| d)
            .all(|d| !d.is_constant())
    );
}

#[test]
fn get_unknown_facet() {
    assert!(catalog().get(Kind::String, facet::SRID).is_none());
    assert!(catalog().get(Kind::Int32, facet::PRECISION).is_none());
}
