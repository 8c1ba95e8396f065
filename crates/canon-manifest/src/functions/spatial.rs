//! Spatial functions, declared once per family.

use canon_core::Kind::{self, Binary, Boolean, Double, Int32, String};
use canon_core::SpatialFamily;

use tracing::trace;

use super::FunctionCatalogBuilder;

/// Typed constructors: `<Prefix>FromText` and `<Prefix>FromBinary`.
struct Constructor {
    from_text: &'static str,
    from_binary: &'static str,
    result: Kind,
}

macro_rules! constructors {
    ($($prefix:literal => $kind:ident),* $(,)?) => {
        &[
            $(
                Constructor {
                    from_text: concat!($prefix, "FromText"),
                    from_binary: concat!($prefix, "FromBinary"),
                    result: Kind::$kind,
                },
            )*
        ]
    };
}

const GEOMETRY_CONSTRUCTORS: &[Constructor] = constructors![
    "GeometryPoint" => GeometryPoint,
    "GeometryLine" => GeometryLineString,
    "GeometryPolygon" => GeometryPolygon,
    "GeometryMultiPoint" => GeometryMultiPoint,
    "GeometryMultiLine" => GeometryMultiLineString,
    "GeometryMultiPolygon" => GeometryMultiPolygon,
    "GeometryCollection" => GeometryCollection,
];

const GEOGRAPHY_CONSTRUCTORS: &[Constructor] = constructors![
    "GeographyPoint" => GeographyPoint,
    "GeographyLine" => GeographyLineString,
    "GeographyPolygon" => GeographyPolygon,
    "GeographyMultiPoint" => GeographyMultiPoint,
    "GeographyMultiLine" => GeographyMultiLineString,
    "GeographyMultiPolygon" => GeographyMultiPolygon,
    "GeographyCollection" => GeographyCollection,
];

/// Per-family names.
struct Family {
    root: Kind,
    from_text: &'static str,
    from_binary: &'static str,
    from_gml: &'static str,
    constructors: &'static [Constructor],
    value: &'static str,
    value1: &'static str,
    value2: &'static str,
}

impl Family {
    fn of(family: SpatialFamily) -> Self {
        match family {
            SpatialFamily::Geometry => Self {
                root: Kind::Geometry,
                from_text: "GeometryFromText",
                from_binary: "GeometryFromBinary",
                from_gml: "GeometryFromGml",
                constructors: GEOMETRY_CONSTRUCTORS,
                value: "geometryValue",
                value1: "geometryValue1",
                value2: "geometryValue2",
            },
            SpatialFamily::Geography => Self {
                root: Kind::Geography,
                from_text: "GeographyFromText",
                from_binary: "GeographyFromBinary",
                from_gml: "GeographyFromGml",
                constructors: GEOGRAPHY_CONSTRUCTORS,
                value: "geographyValue",
                value1: "geographyValue1",
                value2: "geographyValue2",
            },
        }
    }
}

const WKT: &str = "wellKnownText";
const WKB: &str = "wellKnownBinaryValue";
const GML: &str = "gml";
const SRID: &str = "coordinateSystemId";

pub(super) fn declare(b: &mut FunctionCatalogBuilder) {
    for family in SpatialFamily::ALL {
        let before = b.len();
        let f = Family::of(family);
        constructors(b, &f);
        members(b, &f);
        match family {
            SpatialFamily::Geometry => geometry_only(b, &f),
            SpatialFamily::Geography => geography_only(b, &f),
        }
        trace!(family = ?family, overloads = b.len() - before, "spatial family declared");
    }
}

fn constructors(b: &mut FunctionCatalogBuilder, f: &Family) {
    let root = f.root;
    b.add_function(root, f.from_text, &[(WKT, String)])
        .add_function(root, f.from_text, &[(WKT, String), (SRID, Int32)])
        .add_function(root, f.from_binary, &[(WKB, Binary)])
        .add_function(root, f.from_binary, &[(WKB, Binary), (SRID, Int32)])
        .add_function(root, f.from_gml, &[(GML, String)])
        .add_function(root, f.from_gml, &[(GML, String), (SRID, Int32)]);

    for c in f.constructors {
        b.add_function(c.result, c.from_text, &[(WKT, String), (SRID, Int32)])
            .add_function(c.result, c.from_binary, &[(WKB, Binary), (SRID, Int32)]);
    }
}

/// Functions both families declare.
fn members(b: &mut FunctionCatalogBuilder, f: &Family) {
    let root = f.root;
    let one = [(f.value, root)];
    let two = [(f.value1, root), (f.value2, root)];

    b.add_function(Int32, "CoordinateSystemId", &one)
        .add_function(String, "SpatialTypeName", &one)
        .add_function(Int32, "SpatialDimension", &one)
        .add_function(Binary, "AsBinary", &one)
        .add_function(String, "AsGml", &one)
        .add_function(String, "AsText", &one)
        .add_function(Boolean, "IsEmptySpatial", &one);

    b.add_function(Boolean, "SpatialEquals", &two)
        .add_function(Boolean, "SpatialDisjoint", &two)
        .add_function(Boolean, "SpatialIntersects", &two);

    b.add_function(root, "SpatialBuffer", &[(f.value, root), ("distance", Double)])
        .add_function(Double, "Distance", &two)
        .add_function(root, "SpatialIntersection", &two)
        .add_function(root, "SpatialUnion", &two)
        .add_function(root, "SpatialDifference", &two)
        .add_function(root, "SpatialSymmetricDifference", &two);

    b.add_function(Int32, "SpatialElementCount", &one)
        .add_function(root, "SpatialElementAt", &[(f.value, root), ("index", Int32)]);

    b.add_function(Double, "Elevation", &one)
        .add_function(Double, "Measure", &one);

    b.add_function(Double, "SpatialLength", &one)
        .add_function(root, "StartPoint", &one)
        .add_function(root, "EndPoint", &one)
        .add_function(Boolean, "IsClosedSpatial", &one);

    b.add_function(Int32, "PointCount", &one)
        .add_function(root, "PointAt", &[(f.value, root), ("index", Int32)]);

    b.add_function(Double, "Area", &one);
}

fn geometry_only(b: &mut FunctionCatalogBuilder, f: &Family) {
    let root = f.root;
    let one = [(f.value, root)];
    let two = [(f.value1, root), (f.value2, root)];

    b.add_function(Double, "XCoordinate", &one)
        .add_function(Double, "YCoordinate", &one)
        .add_function(root, "SpatialEnvelope", &one)
        .add_function(Boolean, "IsSimpleGeometry", &one)
        .add_function(root, "SpatialBoundary", &one)
        .add_function(Boolean, "IsValidGeometry", &one);

    b.add_function(Boolean, "SpatialTouches", &two)
        .add_function(Boolean, "SpatialCrosses", &two)
        .add_function(Boolean, "SpatialWithin", &two)
        .add_function(Boolean, "SpatialContains", &two)
        .add_function(Boolean, "SpatialOverlaps", &two)
        .add_function(
            Boolean,
            "SpatialRelate",
            &[
                (f.value1, root),
                (f.value2, root),
                ("intersectionPatternMatrix", String),
            ],
        );

    b.add_function(root, "SpatialConvexHull", &one)
        .add_function(Boolean, "IsRing", &one)
        .add_function(root, "Centroid", &one)
        .add_function(root, "PointOnSurface", &one)
        .add_function(root, "ExteriorRing", &one)
        .add_function(Int32, "InteriorRingCount", &one)
        .add_function(root, "InteriorRingAt", &[(f.value, root), ("index", Int32)]);
}

fn geography_only(b: &mut FunctionCatalogBuilder, f: &Family) {
    let one = [(f.value, f.root)];
    b.add_function(Double, "Latitude", &one)
        .add_function(Double, "Longitude", &one);
}
