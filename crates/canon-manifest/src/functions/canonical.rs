//! Aggregate, string, date/time, math, bitwise and misc functions.

use canon_core::Kind::{self, *};

use super::{FunctionCatalogBuilder, ReturnKind};
use crate::Result;

use ReturnKind::{Fixed, SameAsArgument};

/// Eligible kinds for `Max` and `Min`.
pub const MIN_MAX_KINDS: &[Kind] = &[
    Byte,
    DateTime,
    Decimal,
    Double,
    Int16,
    Int32,
    Int64,
    SByte,
    Single,
    String,
    Binary,
    Time,
    DateTimeOffset,
];

/// Eligible kinds for `Avg`, `Sum` and the statistical aggregates.
pub const SUMMABLE_KINDS: &[Kind] = &[Decimal, Double, Int32, Int64];

const LENGTH_ARGUMENT_KINDS: &[Kind] = &[Byte, Int16, Int32, Int64, SByte];
const DATE_KINDS: &[Kind] = &[DateTimeOffset, DateTime];
const TIME_KINDS: &[Kind] = &[DateTimeOffset, DateTime, Time];
const ROUNDING_KINDS: &[Kind] = &[Single, Double, Decimal];
const DIGITS_ROUNDING_KINDS: &[Kind] = &[Double, Decimal];
const ABS_KINDS: &[Kind] = &[Decimal, Double, Int16, Int32, Int64, Byte, Single];
const POWER_BASE_KINDS: &[Kind] = &[Decimal, Double, Int32, Int64];
const POWER_EXPONENT_KINDS: &[Kind] = &[Decimal, Double, Int64];
const BITWISE_KINDS: &[Kind] = &[Int16, Int32, Int64, Byte];

pub(super) fn declare(b: &mut FunctionCatalogBuilder) -> Result<()> {
    aggregates(b)?;
    strings(b)?;
    date_time(b)?;
    math(b)?;
    bitwise(b)?;
    b.add_function(Guid, "NewGuid", &[]);
    Ok(())
}

fn aggregates(b: &mut FunctionCatalogBuilder) -> Result<()> {
    b.aggregate_family("Max", SameAsArgument, MIN_MAX_KINDS)?
        .aggregate_family("Min", SameAsArgument, MIN_MAX_KINDS)?
        .aggregate_family("Avg", SameAsArgument, SUMMABLE_KINDS)?
        .aggregate_family("Sum", SameAsArgument, SUMMABLE_KINDS)?
        .aggregate_family("StDev", Fixed(Double), SUMMABLE_KINDS)?
        .aggregate_family("StDevP", Fixed(Double), SUMMABLE_KINDS)?
        .aggregate_family("Var", Fixed(Double), SUMMABLE_KINDS)?
        .aggregate_family("VarP", Fixed(Double), SUMMABLE_KINDS)?;

    let countable: Vec<Kind> = Kind::ALL.into_iter().filter(|k| k.is_countable()).collect();
    b.aggregate_family("Count", Fixed(Int32), &countable)?
        .aggregate_family("BigCount", Fixed(Int64), &countable)?;
    Ok(())
}

fn strings(b: &mut FunctionCatalogBuilder) -> Result<()> {
    const S: &str = "stringArgument";

    b.add_function(String, "Trim", &[(S, String)])
        .add_function(String, "RTrim", &[(S, String)])
        .add_function(String, "LTrim", &[(S, String)])
        .add_function(String, "Concat", &[("string1", String), ("string2", String)])
        .add_function(Int32, "Length", &[(S, String)]);

    b.family("Substring", LENGTH_ARGUMENT_KINDS, |b, k| {
        b.add_function(String, "Substring", &[(S, String), ("start", k), ("length", k)]);
    })?
    .family("Left", LENGTH_ARGUMENT_KINDS, |b, k| {
        b.add_function(String, "Left", &[(S, String), ("length", k)]);
    })?
    .family("Right", LENGTH_ARGUMENT_KINDS, |b, k| {
        b.add_function(String, "Right", &[(S, String), ("length", k)]);
    })?;

    b.add_function(
        String,
        "Replace",
        &[(S, String), ("toReplace", String), ("replacement", String)],
    )
    .add_function(
        Int32,
        "IndexOf",
        &[("searchString", String), ("stringToFind", String)],
    )
    .add_function(String, "ToUpper", &[(S, String)])
    .add_function(String, "ToLower", &[(S, String)])
    .add_function(String, "Reverse", &[(S, String)])
    .add_function(
        Boolean,
        "Contains",
        &[("searchedString", String), ("searchedForString", String)],
    )
    .add_function(Boolean, "StartsWith", &[(S, String), ("prefix", String)])
    .add_function(Boolean, "EndsWith", &[(S, String), ("suffix", String)]);
    Ok(())
}

fn date_time(b: &mut FunctionCatalogBuilder) -> Result<()> {
    for part in ["Year", "Month", "Day", "DayOfYear"] {
        b.unary_family(part, Fixed(Int32), "dateValue", DATE_KINDS)?;
    }
    for part in ["Hour", "Minute", "Second", "Millisecond"] {
        b.unary_family(part, Fixed(Int32), "timeValue", TIME_KINDS)?;
    }

    b.add_function(DateTime, "CurrentDateTime", &[])
        .add_function(DateTimeOffset, "CurrentDateTimeOffset", &[])
        .add_function(
            Int32,
            "GetTotalOffsetMinutes",
            &[("dateTimeOffsetArgument", DateTimeOffset)],
        )
        .add_function(DateTime, "CurrentUtcDateTime", &[]);

    b.unary_family("TruncateTime", SameAsArgument, "dateValue", DATE_KINDS)?;

    b.add_function(
        DateTime,
        "CreateDateTime",
        &[
            ("year", Int32),
            ("month", Int32),
            ("day", Int32),
            ("hour", Int32),
            ("minute", Int32),
            ("second", Double),
        ],
    )
    .add_function(
        DateTimeOffset,
        "CreateDateTimeOffset",
        &[
            ("year", Int32),
            ("month", Int32),
            ("day", Int32),
            ("hour", Int32),
            ("minute", Int32),
            ("second", Double),
            ("timeZoneOffset", Int32),
        ],
    )
    .add_function(
        Time,
        "CreateTime",
        &[("hour", Int32), ("minute", Int32), ("second", Double)],
    );

    for name in ["AddYears", "AddMonths", "AddDays"] {
        b.family(name, DATE_KINDS, |b, k| {
            b.add_function(k, name, &[("dateValue", k), ("addValue", Int32)]);
        })?;
    }
    for name in [
        "AddHours",
        "AddMinutes",
        "AddSeconds",
        "AddMilliseconds",
        "AddMicroseconds",
        "AddNanoseconds",
    ] {
        b.family(name, TIME_KINDS, |b, k| {
            b.add_function(k, name, &[("timeValue", k), ("addValue", Int32)]);
        })?;
    }

    for name in ["DiffYears", "DiffMonths", "DiffDays"] {
        b.family(name, DATE_KINDS, |b, k| {
            b.add_function(Int32, name, &[("dateValue1", k), ("dateValue2", k)]);
        })?;
    }
    for name in [
        "DiffHours",
        "DiffMinutes",
        "DiffSeconds",
        "DiffMilliseconds",
        "DiffMicroseconds",
        "DiffNanoseconds",
    ] {
        b.family(name, TIME_KINDS, |b, k| {
            b.add_function(Int32, name, &[("timeValue1", k), ("timeValue2", k)]);
        })?;
    }
    Ok(())
}

fn math(b: &mut FunctionCatalogBuilder) -> Result<()> {
    for name in ["Round", "Floor", "Ceiling"] {
        b.unary_family(name, SameAsArgument, "value", ROUNDING_KINDS)?;
    }
    for name in ["Round", "Truncate"] {
        b.family(name, DIGITS_ROUNDING_KINDS, |b, k| {
            b.add_function(k, name, &[("value", k), ("digits", Int32)]);
        })?;
    }
    b.unary_family("Abs", SameAsArgument, "value", ABS_KINDS)?;

    b.family("Power", POWER_BASE_KINDS, |b, base| {
        for &exponent in POWER_EXPONENT_KINDS {
            b.add_function(base, "Power", &[("baseArgument", base), ("exponent", exponent)]);
        }
    })?;
    Ok(())
}

fn bitwise(b: &mut FunctionCatalogBuilder) -> Result<()> {
    for name in ["BitwiseAnd", "BitwiseOr", "BitwiseXor"] {
        b.family(name, BITWISE_KINDS, |b, k| {
            b.add_function(k, name, &[("value1", k), ("value2", k)]);
        })?;
    }
    b.unary_family("BitwiseNot", SameAsArgument, "value", BITWISE_KINDS)?;
    Ok(())
}
