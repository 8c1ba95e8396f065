use indoc::indoc;

use crate::dump::{dump, dump_facets, dump_functions, dump_overloads, dump_promotions, dump_types};
use crate::{FacetCatalog, FunctionCatalog, KindRegistry, Manifest, PromotionLattice};

#[test]
fn types() {
    let out = dump_types(&KindRegistry::build());
    insta::assert_snapshot!(out, @r"
     0 Edm.Binary Bytes
     1 Edm.Boolean Boolean
     2 Edm.Byte UInt8
     3 Edm.DateTime DateTime
     4 Edm.Decimal Decimal
     5 Edm.Double Float64
     6 Edm.Guid Guid
     7 Edm.Single Float32
     8 Edm.SByte Int8
     9 Edm.Int16 Int16
    10 Edm.Int32 Int32
    11 Edm.Int64 Int64
    12 Edm.String Text
    13 Edm.Time Duration
    14 Edm.DateTimeOffset DateTimeWithOffset
    15 Edm.Geometry Geometry
    16 Edm.Geography Geography
    17 Edm.GeometryPoint Geometry
    18 Edm.GeometryLineString Geometry
    19 Edm.GeometryPolygon Geometry
    20 Edm.GeometryMultiPoint Geometry
    21 Edm.GeometryMultiLineString Geometry
    22 Edm.GeometryMultiPolygon Geometry
    23 Edm.GeometryCollection Geometry
    24 Edm.GeographyPoint Geography
    25 Edm.GeographyLineString Geography
    26 Edm.GeographyPolygon Geography
    27 Edm.GeographyMultiPoint Geography
    28 Edm.GeographyMultiLineString Geography
    29 Edm.GeographyMultiPolygon Geography
    30 Edm.GeographyCollection Geography
    ");
}

#[test]
fn scalar_facets() {
    let out = dump_facets(&FacetCatalog::build(7).unwrap());
    let scalar: Vec<_> = out.lines().take(6).collect();
    assert_eq!(
        scalar.join("\n"),
        indoc! {"
            Binary: MaxLength:Int32[0..2147483647] FixedLength:Boolean
            DateTime: Precision:Byte[0..255]
            Decimal: Precision:Byte[1..255] Scale:Byte[0..255]
            String: MaxLength:Int32[0..2147483647] Unicode:Boolean FixedLength:Boolean
            Time: Precision:Byte[0..255]=7
            DateTimeOffset: Precision:Byte[0..255]=7"}
    );
}

#[test]
fn spatial_facets() {
    let out = dump_facets(&FacetCatalog::build(7).unwrap());
    let spatial: Vec<_> = out.lines().skip(6).collect();
    assert_eq!(spatial.len(), 16);
    assert_eq!(
        spatial[0],
        "Geometry: SRID:Int32[0..2147483647]=0 IsStrict:Boolean=true"
    );
    assert_eq!(
        spatial[1],
        "Geography: SRID:Int32[0..2147483647]=4326 IsStrict:Boolean=true"
    );
    assert!(spatial[2].starts_with("GeometryPoint: SRID:Int32[0..2147483647]=0 "));
}

#[test]
fn promotions() {
    let out = dump_promotions(&PromotionLattice::build().unwrap());
    let head: Vec<_> = out.lines().take(17).collect();
    insta::assert_snapshot!(head.join("\n"), @r"
    Binary -> Binary
    Boolean -> Boolean
    Byte -> Byte, Int16, Int32, Int64, Decimal, Single, Double
    DateTime -> DateTime
    Decimal -> Decimal
    Double -> Double
    Guid -> Guid
    Single -> Single, Double
    SByte -> SByte
    Int16 -> Int16, Int32, Int64, Decimal, Single, Double
    Int32 -> Int32, Int64, Decimal, Single, Double
    Int64 -> Int64, Decimal, Single, Double
    String -> String
    Time -> Time
    DateTimeOffset -> DateTimeOffset
    Geometry -> Geometry
    Geography -> Geography
    ");
    assert_eq!(out.lines().count(), 31);
    assert!(out.contains("GeographyCollection -> GeographyCollection, Geography\n"));
}

#[test]
fn abs_overloads() {
    let catalog = FunctionCatalog::canonical(false).unwrap();
    insta::assert_snapshot!(dump_overloads(&catalog, "Abs"), @r"
    Abs(value: Decimal) -> Decimal
    Abs(value: Double) -> Double
    Abs(value: Int16) -> Int16
    Abs(value: Int32) -> Int32
    Abs(value: Int64) -> Int64
    Abs(value: Byte) -> Byte
    Abs(value: Single) -> Single
    ");
}

#[test]
fn sum_overloads() {
    let catalog = FunctionCatalog::canonical(false).unwrap();
    insta::assert_snapshot!(dump_overloads(&catalog, "Sum"), @r"
    Sum(collection: Collection(Decimal)) -> Decimal [aggregate]
    Sum(collection: Collection(Double)) -> Double [aggregate]
    Sum(collection: Collection(Int32)) -> Int32 [aggregate]
    Sum(collection: Collection(Int64)) -> Int64 [aggregate]
    ");
}

#[test]
fn unknown_overloads_dump_empty() {
    let catalog = FunctionCatalog::canonical(false).unwrap();
    assert_eq!(dump_overloads(&catalog, "Median"), "");
}

#[test]
fn functions_one_line_each() {
    let catalog = FunctionCatalog::canonical(false).unwrap();
    let out = dump_functions(&catalog);
    assert_eq!(out.lines().count(), catalog.len());
    assert_eq!(out.lines().last(), Some("NewGuid() -> Guid"));
}

#[test]
fn whole_manifest_sections() {
    let manifest = Manifest::builder().with_spatial_functions(false).build();
    let out = dump(&manifest);

    let headers: Vec<_> = out.lines().filter(|l| l.starts_with('[')).collect();
    assert_eq!(headers, ["[types]", "[facets]", "[promotions]", "[functions]"]);
    assert!(out.starts_with("[types]\n 0 Edm.Binary Bytes\n"));
    assert!(out.contains("\n\n[facets]\nBinary: "));
    assert!(out.ends_with("NewGuid() -> Guid\n"));
}
