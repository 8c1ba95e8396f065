use crate::facet::{self, FacetDescription, FacetValue};
use crate::{Error, Kind, PrimitiveType, TypeUsage};

fn string_descriptions() -> Vec<FacetDescription> {
    vec![
        FacetDescription::new(facet::MAX_LENGTH, Kind::Int32, Some(0), Some(i32::MAX), None)
            .unwrap(),
        FacetDescription::new(facet::UNICODE, Kind::Boolean, None, None, None).unwrap(),
        FacetDescription::new(facet::FIXED_LENGTH, Kind::Boolean, None, None, None).unwrap(),
    ]
}

fn string_usage() -> TypeUsage {
    TypeUsage::with_defaults(PrimitiveType::new(Kind::String), &string_descriptions())
}

#[test]
fn defaults_keep_description_order() {
    let usage = string_usage();
    let names: Vec<_> = usage.facets().iter().map(|f| f.name()).collect();
    assert_eq!(names, ["MaxLength", "Unicode", "FixedLength"]);
    assert!(usage.facets().iter().all(|f| f.value().is_none()));
}

#[test]
fn identity_lists_facets() {
    assert_eq!(
        string_usage().identity(),
        "Edm.String(MaxLength=,Unicode=,FixedLength=)"
    );
}

#[test]
fn identity_without_facets_keeps_parentheses() {
    let usage = TypeUsage::with_defaults(PrimitiveType::new(Kind::Int32), &[]);
    assert_eq!(usage.identity(), "Edm.Int32()");
    assert!(usage.facets().is_empty());
}

#[test]
fn with_facet_overrides_one_value() {
    let usage = string_usage()
        .with_facet(facet::MAX_LENGTH, FacetValue::Int32(128))
        .unwrap();
    assert_eq!(usage.facet_value(facet::MAX_LENGTH), Some(FacetValue::Int32(128)));
    assert_eq!(usage.facet_value(facet::UNICODE), None);
    assert_eq!(
        usage.identity(),
        "Edm.String(MaxLength=128,Unicode=,FixedLength=)"
    );
}

#[test]
fn with_facet_leaves_original_untouched() {
    let original = string_usage();
    let _ = original
        .with_facet(facet::UNICODE, FacetValue::Boolean(false))
        .unwrap();
    assert_eq!(original.facet_value(facet::UNICODE), None);
}

#[test]
fn with_facet_rejects_unknown_name() {
    let err = string_usage()
        .with_facet(facet::SRID, FacetValue::Int32(4326))
        .unwrap_err();
    assert_eq!(
        err,
        Error::UnknownFacet {
            kind: Kind::String,
            facet: "SRID".to_owned(),
        }
    );
}

#[test]
fn with_facet_rejects_wrong_value_kind() {
    let err = string_usage()
        .with_facet(facet::UNICODE, FacetValue::Int32(1))
        .unwrap_err();
    assert!(matches!(err, Error::FacetValueType { expected: Kind::Boolean, .. }));
}

#[test]
fn with_facet_rejects_out_of_range() {
    let err = string_usage()
        .with_facet(facet::MAX_LENGTH, FacetValue::Int32(-5))
        .unwrap_err();
    assert!(matches!(err, Error::FacetOutOfRange { value: -5, .. }));
}

#[test]
fn with_facet_rejects_constant() {
    let descriptions = [FacetDescription::new(
        facet::PRECISION,
        Kind::Byte,
        Some(0),
        Some(255),
        Some(FacetValue::Byte(7)),
    )
    .unwrap()
    .constant()];
    let usage = TypeUsage::with_defaults(PrimitiveType::new(Kind::Time), &descriptions);

    let err = usage
        .with_facet(facet::PRECISION, FacetValue::Byte(3))
        .unwrap_err();
    assert_eq!(
        err,
        Error::ConstantFacet {
            facet: "Precision".to_owned(),
        }
    );
    assert_eq!(usage.facet_value(facet::PRECISION), Some(FacetValue::Byte(7)));
}

fn geography_usage() -> TypeUsage {
    let descriptions = [
        FacetDescription::new(
            facet::SRID,
            Kind::Int32,
            Some(0),
            Some(i32::MAX),
            Some(FacetValue::Int32(4326)),
        )
        .unwrap(),
        FacetDescription::new(
            facet::IS_STRICT,
            Kind::Boolean,
            None,
            None,
            Some(FacetValue::Boolean(true)),
        )
        .unwrap(),
    ];
    TypeUsage::with_defaults(PrimitiveType::new(Kind::Geography), &descriptions)
}

#[test]
fn is_strict_does_not_change_identity() {
    let strict = geography_usage();
    let lax = strict
        .with_facet(facet::IS_STRICT, FacetValue::Boolean(false))
        .unwrap();

    assert_ne!(strict, lax);
    assert_eq!(strict.identity(), lax.identity());
    assert_eq!(lax.identity(), "Edm.Geography(SRID=4326)");
    assert_eq!(lax.facet_value(facet::IS_STRICT), Some(FacetValue::Boolean(false)));
}

#[test]
fn srid_changes_identity() {
    let usage = geography_usage()
        .with_facet(facet::SRID, FacetValue::Int32(4269))
        .unwrap();
    assert_eq!(usage.identity(), "Edm.Geography(SRID=4269)");
}
